use crate::api::retraining_run::RetrainingRun;
use crate::cli::args::{IdArg, PageArgs};
use crate::cli::context::CommandContext;
use crate::cli::render::{emit, na, render_list, render_record, TextSummary};
use crate::error::Error;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum RetrainingRunCommand {
    /// List retraining runs
    List {
        /// Retraining schedule ID
        #[arg(long)]
        schedule: Option<i64>,
        /// e.g. PENDING, RUNNING, COMPLETED, FAILED
        #[arg(long)]
        status: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Get a retraining run
    Get(IdArg),
}

impl TextSummary for RetrainingRun {
    fn summary(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.id,
            self.schedule,
            na(self.status.as_deref()),
            na(self.started_at.as_deref()),
            na(self.completed_at.as_deref())
        )
    }
}

pub async fn run(ctx: &CommandContext, command: RetrainingRunCommand) -> Result<(), Error> {
    let client = ctx.authenticated_client().await?;
    let rendered = match command {
        RetrainingRunCommand::List {
            schedule,
            status,
            page,
        } => {
            let page = client
                .list_retraining_runs(schedule, status.as_deref(), page.into())
                .await?;
            render_list(ctx.format, &page.results, &page)?
        }
        RetrainingRunCommand::Get(IdArg { id }) => {
            render_record(ctx.format, &client.get_retraining_run(id).await?)?
        }
    };
    emit(&rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_unfinished_run() {
        let run: RetrainingRun = serde_json::from_str(
            r#"{"id":3,"schedule":1,"status":"RUNNING","started_at":"2024-06-01T03:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(run.summary(), "3 1 RUNNING 2024-06-01T03:00:00Z <NA>");
    }
}
