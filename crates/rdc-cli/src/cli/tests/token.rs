//! Tests for token subcommands.

use super::{parse, parse_err};
use crate::cli::{CliCommand, TokenAction};

#[test]
fn cli_parse_token_set() {
    match parse(&["rdc", "token", "set", "abc.def.ghi"]) {
        CliCommand::Token {
            action: TokenAction::Set { token },
        } => assert_eq!(token, "abc.def.ghi"),
        _ => panic!("expected Token Set"),
    }
}

#[test]
fn cli_parse_token_show_and_clear() {
    assert!(matches!(
        parse(&["rdc", "token", "show"]),
        CliCommand::Token {
            action: TokenAction::Show
        }
    ));
    assert!(matches!(
        parse(&["rdc", "token", "clear"]),
        CliCommand::Token {
            action: TokenAction::Clear
        }
    ));
}

#[test]
fn cli_parse_token_set_requires_value() {
    let err = parse_err(&["rdc", "token", "set"]);
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}
