use crate::api::retraining_schedule::{
    NewRetrainingSchedule, RetrainingSchedule, RetrainingSchedulePatch,
};
use crate::cli::args::{IdArg, PageArgs};
use crate::cli::context::CommandContext;
use crate::cli::render::{emit, render_deleted, render_list, render_record, TextSummary};
use crate::error::Error;
use clap::{ArgAction, Subcommand};

#[derive(Subcommand, Debug)]
pub enum RetrainingScheduleCommand {
    /// List retraining schedules
    List {
        #[arg(long)]
        deployment_slot: Option<i64>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Create a retraining schedule
    Create {
        #[arg(long)]
        deployment_slot: i64,
        /// Five-field cron expression, e.g. "0 3 * * *"
        #[arg(long)]
        cron_expression: String,
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        is_active: bool,
    },
    /// Get a retraining schedule
    Get(IdArg),
    /// Update a retraining schedule
    Update {
        #[command(flatten)]
        target: IdArg,
        #[arg(long)]
        cron_expression: Option<String>,
        #[arg(long)]
        is_active: Option<bool>,
    },
    /// Delete a retraining schedule
    Delete(IdArg),
    /// Run a schedule now
    Trigger(IdArg),
}

impl TextSummary for RetrainingSchedule {
    fn summary(&self) -> String {
        format!(
            "{} {} {} {}",
            self.id, self.deployment_slot, self.cron_expression, self.is_active
        )
    }
}

pub async fn run(ctx: &CommandContext, command: RetrainingScheduleCommand) -> Result<(), Error> {
    let client = ctx.authenticated_client().await?;
    let rendered = match command {
        RetrainingScheduleCommand::List {
            deployment_slot,
            page,
        } => {
            let page = client
                .list_retraining_schedules(deployment_slot, page.into())
                .await?;
            render_list(ctx.format, &page.results, &page)?
        }
        RetrainingScheduleCommand::Create {
            deployment_slot,
            cron_expression,
            is_active,
        } => {
            let schedule = NewRetrainingSchedule {
                deployment_slot,
                cron_expression,
                is_active,
            };
            let created = client.create_retraining_schedule(&schedule).await?;
            render_record(ctx.format, &created)?
        }
        RetrainingScheduleCommand::Get(IdArg { id }) => {
            render_record(ctx.format, &client.get_retraining_schedule(id).await?)?
        }
        RetrainingScheduleCommand::Update {
            target,
            cron_expression,
            is_active,
        } => {
            let patch = RetrainingSchedulePatch {
                cron_expression,
                is_active,
            };
            let schedule = client
                .update_retraining_schedule(target.id, &patch)
                .await?;
            render_record(ctx.format, &schedule)?
        }
        RetrainingScheduleCommand::Delete(IdArg { id }) => {
            client.delete_retraining_schedule(id).await?;
            render_deleted(ctx.format, id)?
        }
        RetrainingScheduleCommand::Trigger(IdArg { id }) => {
            client.trigger_retraining(id).await?;
            ctx.output.success("Retraining triggered.");
            return Ok(());
        }
    };
    emit(&rendered);
    Ok(())
}
