//! `login`, `logout`, and `ping`.

use crate::cli::context::CommandContext;
use crate::cli::render::{emit, render_raw};
use crate::client::RecotemClient;
use crate::error::Error;
use crate::prompt;
use chrono::Utc;
use clap::Args;
use tracing::debug;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username (prompted for when omitted)
    #[arg(short = 'u', long)]
    pub username: Option<String>,
    /// Password (prompted for without echo when omitted)
    #[arg(short = 'p', long)]
    pub password: Option<String>,
}

pub async fn login(ctx: &CommandContext, args: LoginArgs) -> Result<(), Error> {
    let credentials = prompt::login_credentials(args.username, args.password)?;
    let mut config = ctx.manager.load_config()?;
    let client = RecotemClient::new(&config.url)?;

    let tokens = client
        .login(&credentials.username, &credentials.password)
        .await?;
    config.set_jwt(tokens.access_token, tokens.refresh_token, Utc::now());
    ctx.manager.save_config(&config)?;

    ctx.output.success("Login successful.");
    Ok(())
}

pub async fn logout(ctx: &CommandContext) -> Result<(), Error> {
    let mut config = ctx.manager.load_config()?;
    if !config.refresh_token.is_empty() {
        let client = RecotemClient::new(&config.url)?;
        if let Err(e) = client.blacklist_refresh_token(&config.refresh_token).await {
            debug!(error = %e, "refresh token blacklist failed, clearing locally");
        }
    }
    config.clear_tokens();
    ctx.manager.save_config(&config)?;

    ctx.output.success("Logged out successfully.");
    Ok(())
}

pub async fn ping(ctx: &CommandContext) -> Result<(), Error> {
    let body = ctx.anonymous_client()?.ping().await?;
    emit(&render_raw(ctx.format, &body)?);
    Ok(())
}
