//! `rdc online` – ask the connectivity gate.

use anyhow::Result;

use super::Context;

pub async fn run_online(ctx: &Context) -> Result<()> {
    if ctx.gate.is_online().await {
        println!("online");
    } else {
        println!("offline");
    }
    Ok(())
}
