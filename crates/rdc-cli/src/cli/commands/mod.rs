//! CLI command handlers. Each command is in its own file.

mod context;
mod get;
mod list;
mod online;
mod send;
mod token;

pub use context::Context;
pub use get::run_get;
pub use list::run_list;
pub use online::run_online;
pub use send::run_send;
pub use token::run_token;

/// Default operation name: "<verb> <url>".
pub(crate) fn operation_name(op: Option<String>, verb: &str, url: &str) -> String {
    op.unwrap_or_else(|| format!("{verb} {url}"))
}
