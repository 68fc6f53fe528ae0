use crate::api::api_key::ApiKey;
use crate::cli::args::{IdArg, PageArgs};
use crate::cli::context::CommandContext;
use crate::cli::render::{emit, na, render_deleted, render_list, render_record, TextSummary};
use crate::cli::OutputFormat;
use crate::error::Error;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ApiKeyCommand {
    /// List API keys
    List(PageArgs),
    /// Create an API key; the full key is shown only once
    Create {
        #[arg(short = 'n', long)]
        name: String,
    },
    /// Get an API key
    Get(IdArg),
    /// Revoke an API key
    Revoke(IdArg),
    /// Delete an API key
    Delete(IdArg),
}

impl TextSummary for ApiKey {
    fn summary(&self) -> String {
        format!(
            "{} {} {} {}",
            self.id,
            self.name,
            na(self.prefix.as_deref()),
            self.is_active
        )
    }
}

pub async fn run(ctx: &CommandContext, command: ApiKeyCommand) -> Result<(), Error> {
    let client = ctx.authenticated_client().await?;
    let rendered = match command {
        ApiKeyCommand::List(page) => {
            let page = client.list_api_keys(page.into()).await?;
            render_list(ctx.format, &page.results, &page)?
        }
        ApiKeyCommand::Create { name } => {
            let key = client.create_api_key(&name).await?;
            let mut rendered = render_record(ctx.format, &key)?;
            if ctx.format == OutputFormat::Text {
                if let Some(secret) = &key.key {
                    rendered.push('\n');
                    rendered.push_str(secret);
                }
            }
            rendered
        }
        ApiKeyCommand::Get(IdArg { id }) => {
            render_record(ctx.format, &client.get_api_key(id).await?)?
        }
        ApiKeyCommand::Revoke(IdArg { id }) => {
            client.revoke_api_key(id).await?;
            ctx.output.success("API key revoked.");
            return Ok(());
        }
        ApiKeyCommand::Delete(IdArg { id }) => {
            client.delete_api_key(id).await?;
            render_deleted(ctx.format, id)?
        }
    };
    emit(&rendered);
    Ok(())
}
