//! `rdc get <url>` – fetch a resource and print it.

use anyhow::Result;

use super::{operation_name, Context};

pub async fn run_get(ctx: &Context, url: &str, op: Option<String>) -> Result<()> {
    let op = operation_name(op, "fetch", url);
    let value: serde_json::Value = ctx.api.get(url, &op).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
