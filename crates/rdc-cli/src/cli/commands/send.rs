//! `rdc send <METHOD> <url> [--data JSON]` – arbitrary request.

use anyhow::{Context as _, Result};
use rdc_core::HttpMethod;

use super::{operation_name, Context};

pub async fn run_send(
    ctx: &Context,
    method: HttpMethod,
    url: &str,
    data: Option<&str>,
    op: Option<String>,
) -> Result<()> {
    let verb = method.as_str().to_lowercase();
    let op = operation_name(op, &verb, url);
    let body: Option<serde_json::Value> = data
        .map(serde_json::from_str)
        .transpose()
        .context("--data is not valid JSON")?;
    let value: serde_json::Value = ctx.api.send(method, url, body.as_ref(), &op).await?;
    if !value.is_null() {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
