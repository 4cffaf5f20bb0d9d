//! `rdc token set|show|clear` – manage the stored bearer token.

use anyhow::Result;
use rdc_core::session_store::SessionStore;

use super::Context;
use crate::cli::TokenAction;

pub async fn run_token(ctx: &Context, action: TokenAction) -> Result<()> {
    let key = ctx.cfg.token_key.as_str();
    match action {
        TokenAction::Set { token } => {
            ctx.store.set(key, token.trim()).await?;
            println!("Token stored in {}", ctx.store.path().display());
        }
        TokenAction::Show => match ctx.store.get(key).await? {
            Some(token) if !token.is_empty() => println!("Token present ({} chars)", token.len()),
            _ => println!("No token stored."),
        },
        TokenAction::Clear => {
            ctx.store.remove(key).await?;
            println!("Token cleared.");
        }
    }
    Ok(())
}
