//! CLI for the rdc resilient data client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rdc_core::config;
use rdc_core::HttpMethod;

use commands::{run_get, run_list, run_online, run_send, run_token, Context};

/// Top-level CLI for rdc.
#[derive(Debug, Parser)]
#[command(name = "rdc")]
#[command(about = "rdc: resilient JSON API client with retries and pagination", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// GET a resource and print the JSON body.
    Get {
        /// Absolute URL, or a path relative to `base_url` in config.
        url: String,
        /// Operation name used in failure messages (default: "fetch <url>").
        #[arg(long)]
        op: Option<String>,
    },

    /// GET a paginated list endpoint and print the page.
    List {
        /// Absolute URL, or a path relative to `base_url` in config.
        url: String,
        /// Query filter as key=value (repeatable, order kept). `key=` leaves the key unset.
        #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        filters: Vec<(String, Option<String>)>,
        #[arg(long)]
        op: Option<String>,
    },

    /// Send a request with any method and an optional JSON body.
    Send {
        /// GET, POST, PUT, PATCH or DELETE.
        method: HttpMethod,
        url: String,
        /// JSON request body.
        #[arg(long)]
        data: Option<String>,
        #[arg(long)]
        op: Option<String>,
    },

    /// Manage the stored bearer token.
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Report whether the connectivity gate currently lets requests through.
    Online,
}

#[derive(Debug, Subcommand)]
pub enum TokenAction {
    /// Store a bearer token.
    Set { token: String },
    /// Show whether a token is stored (never prints the token itself).
    Show,
    /// Remove the stored token.
    Clear,
}

/// Parse `key=value`; an empty value means "unset".
pub(crate) fn parse_key_val(s: &str) -> Result<(String, Option<String>), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in `{s}`"));
    }
    let value = (!value.is_empty()).then(|| value.to_string());
    Ok((key.to_string(), value))
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let ctx = Context::build(cfg)?;

        match cli.command {
            CliCommand::Get { url, op } => run_get(&ctx, &url, op).await?,
            CliCommand::List { url, filters, op } => run_list(&ctx, &url, filters, op).await?,
            CliCommand::Send {
                method,
                url,
                data,
                op,
            } => run_send(&ctx, method, &url, data.as_deref(), op).await?,
            CliCommand::Token { action } => run_token(&ctx, action).await?,
            CliCommand::Online => run_online(&ctx).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
