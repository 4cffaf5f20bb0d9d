//! Tests for get, list, send and the key=value filter parser.

use super::{parse, parse_err};
use crate::cli::{parse_key_val, CliCommand};
use rdc_core::HttpMethod;

#[test]
fn cli_parse_get() {
    match parse(&["rdc", "get", "/listings/7"]) {
        CliCommand::Get { url, op } => {
            assert_eq!(url, "/listings/7");
            assert!(op.is_none());
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_get_with_op() {
    match parse(&["rdc", "get", "https://api.test/me", "--op", "fetch profile"]) {
        CliCommand::Get { url, op } => {
            assert_eq!(url, "https://api.test/me");
            assert_eq!(op.as_deref(), Some("fetch profile"));
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_list_filters_keep_order() {
    match parse(&[
        "rdc",
        "list",
        "/listings",
        "--filter",
        "page=2",
        "--filter",
        "category=",
        "--filter",
        "q=oak desk",
    ]) {
        CliCommand::List { url, filters, op } => {
            assert_eq!(url, "/listings");
            assert!(op.is_none());
            assert_eq!(
                filters,
                vec![
                    ("page".to_string(), Some("2".to_string())),
                    ("category".to_string(), None),
                    ("q".to_string(), Some("oak desk".to_string())),
                ]
            );
        }
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_list_without_filters() {
    match parse(&["rdc", "list", "/posts"]) {
        CliCommand::List { filters, .. } => assert!(filters.is_empty()),
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_list_rejects_filter_without_equals() {
    let err = parse_err(&["rdc", "list", "/posts", "--filter", "page"]);
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[test]
fn cli_parse_send() {
    match parse(&["rdc", "send", "post", "/posts", "--data", r#"{"text":"hi"}"#]) {
        CliCommand::Send {
            method,
            url,
            data,
            op,
        } => {
            assert_eq!(method, HttpMethod::Post);
            assert_eq!(url, "/posts");
            assert_eq!(data.as_deref(), Some(r#"{"text":"hi"}"#));
            assert!(op.is_none());
        }
        _ => panic!("expected Send"),
    }
}

#[test]
fn cli_parse_send_delete_without_body() {
    match parse(&["rdc", "send", "DELETE", "/posts/9"]) {
        CliCommand::Send { method, data, .. } => {
            assert_eq!(method, HttpMethod::Delete);
            assert!(data.is_none());
        }
        _ => panic!("expected Send"),
    }
}

#[test]
fn cli_parse_send_rejects_unknown_method() {
    let err = parse_err(&["rdc", "send", "TRACE", "/posts"]);
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[test]
fn cli_parse_online() {
    match parse(&["rdc", "online"]) {
        CliCommand::Online => {}
        _ => panic!("expected Online"),
    }
}

#[test]
fn key_val_parsing() {
    assert_eq!(
        parse_key_val("limit=20").unwrap(),
        ("limit".to_string(), Some("20".to_string()))
    );
    assert_eq!(parse_key_val("search=").unwrap(), ("search".to_string(), None));
    assert_eq!(
        parse_key_val("expr=a=b").unwrap(),
        ("expr".to_string(), Some("a=b".to_string()))
    );
    assert!(parse_key_val("nokey").is_err());
    assert!(parse_key_val("=value").is_err());
}
