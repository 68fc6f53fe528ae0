use super::evaluation_config::NamedListArgs;
use crate::api::split_config::{SplitConfig, SplitConfigFields, SplitScheme};
use crate::cli::args::IdArg;
use crate::cli::context::CommandContext;
use crate::cli::render::{emit, na, render_deleted, render_list, render_record, TextSummary};
use crate::error::Error;
use clap::{Args, Subcommand};

#[derive(Args, Debug, Clone)]
pub struct SplitFieldArgs {
    #[arg(short = 'n', long)]
    pub name: Option<String>,
    /// RG (random), TG (time global) or TU (time per user)
    #[arg(short = 's', long, value_enum)]
    pub scheme: Option<SplitScheme>,
    #[arg(long)]
    pub heldout_ratio: Option<f64>,
    #[arg(long)]
    pub n_heldout: Option<i64>,
    #[arg(long)]
    pub test_user_ratio: Option<f64>,
    #[arg(long)]
    pub n_test_users: Option<i64>,
    #[arg(long)]
    pub random_seed: Option<i64>,
}

impl From<SplitFieldArgs> for SplitConfigFields {
    fn from(args: SplitFieldArgs) -> Self {
        Self {
            name: args.name,
            scheme: args.scheme,
            heldout_ratio: args.heldout_ratio,
            n_heldout: args.n_heldout,
            test_user_ratio: args.test_user_ratio,
            n_test_users: args.n_test_users,
            random_seed: args.random_seed,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum SplitConfigCommand {
    /// List split configs
    List(NamedListArgs),
    /// Create a split config
    Create(SplitFieldArgs),
    /// Update a split config
    Update {
        #[command(flatten)]
        target: IdArg,
        #[command(flatten)]
        fields: SplitFieldArgs,
    },
    /// Delete a split config
    Delete(IdArg),
}

impl TextSummary for SplitConfig {
    fn summary(&self) -> String {
        format!(
            "{} {} {} {}",
            self.id,
            na(self.heldout_ratio),
            na(self.test_user_ratio),
            na(self.random_seed)
        )
    }
}

pub async fn run(ctx: &CommandContext, command: SplitConfigCommand) -> Result<(), Error> {
    let client = ctx.authenticated_client().await?;
    let rendered = match command {
        SplitConfigCommand::List(args) => {
            let configs = client.list_split_configs(&args.into()).await?;
            render_list(ctx.format, &configs, &configs)?
        }
        SplitConfigCommand::Create(fields) => {
            render_record(ctx.format, &client.create_split_config(&fields.into()).await?)?
        }
        SplitConfigCommand::Update { target, fields } => {
            let config = client
                .update_split_config(target.id, &fields.into())
                .await?;
            render_record(ctx.format, &config)?
        }
        SplitConfigCommand::Delete(IdArg { id }) => {
            client.delete_split_config(id).await?;
            render_deleted(ctx.format, id)?
        }
    };
    emit(&rendered);
    Ok(())
}
