use crate::api::evaluation_config::{
    EvaluationConfig, EvaluationConfigFields, NamedConfigFilter, TargetMetric,
};
use crate::cli::args::IdArg;
use crate::cli::context::CommandContext;
use crate::cli::render::{emit, na, render_deleted, render_list, render_record, TextSummary};
use crate::error::Error;
use clap::{Args, Subcommand, ValueEnum};

/// Filters shared by the evaluation-config and split-config lists.
#[derive(Args, Debug, Clone)]
pub struct NamedListArgs {
    #[arg(short = 'i', long)]
    pub id: Option<i64>,
    #[arg(short = 'n', long)]
    pub name: Option<String>,
    /// Only configs without a name (true) or with one (false)
    #[arg(short = 'u', long)]
    pub unnamed: Option<bool>,
}

impl From<NamedListArgs> for NamedConfigFilter {
    fn from(args: NamedListArgs) -> Self {
        Self {
            id: args.id,
            name: args.name,
            unnamed: args.unnamed,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct EvaluationFieldArgs {
    #[arg(short = 'n', long)]
    pub name: Option<String>,
    /// Number of recommended items scored per user
    #[arg(short = 'c', long)]
    pub cutoff: Option<i64>,
    #[arg(long, value_enum)]
    pub target_metric: Option<TargetMetric>,
}

impl From<EvaluationFieldArgs> for EvaluationConfigFields {
    fn from(args: EvaluationFieldArgs) -> Self {
        Self {
            name: args.name,
            cutoff: args.cutoff,
            target_metric: args.target_metric,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum EvaluationConfigCommand {
    /// List evaluation configs
    List(NamedListArgs),
    /// Create an evaluation config
    Create(EvaluationFieldArgs),
    /// Update an evaluation config
    Update {
        #[command(flatten)]
        target: IdArg,
        #[command(flatten)]
        fields: EvaluationFieldArgs,
    },
    /// Delete an evaluation config
    Delete(IdArg),
}

impl TextSummary for EvaluationConfig {
    fn summary(&self) -> String {
        let metric = self
            .target_metric
            .and_then(|metric| metric.to_possible_value())
            .map(|value| value.get_name().to_string());
        format!(
            "{} {} {} {}",
            self.id,
            na(self.cutoff),
            na(metric),
            na(self.name.as_deref()).replace(' ', "_")
        )
    }
}

pub async fn run(ctx: &CommandContext, command: EvaluationConfigCommand) -> Result<(), Error> {
    let client = ctx.authenticated_client().await?;
    let rendered = match command {
        EvaluationConfigCommand::List(args) => {
            let configs = client.list_evaluation_configs(&args.into()).await?;
            render_list(ctx.format, &configs, &configs)?
        }
        EvaluationConfigCommand::Create(fields) => {
            let config = client.create_evaluation_config(&fields.into()).await?;
            render_record(ctx.format, &config)?
        }
        EvaluationConfigCommand::Update { target, fields } => {
            let config = client
                .update_evaluation_config(target.id, &fields.into())
                .await?;
            render_record(ctx.format, &config)?
        }
        EvaluationConfigCommand::Delete(IdArg { id }) => {
            client.delete_evaluation_config(id).await?;
            render_deleted(ctx.format, id)?
        }
    };
    emit(&rendered);
    Ok(())
}
