use crate::cli::args::PageArgs;
use crate::cli::context::CommandContext;
use crate::cli::render::{emit, render_raw};
use crate::error::Error;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum TaskLogCommand {
    /// List task log entries
    List {
        /// Task ID
        #[arg(long)]
        task: Option<i64>,
        #[command(flatten)]
        page: PageArgs,
    },
}

pub async fn run(ctx: &CommandContext, command: TaskLogCommand) -> Result<(), Error> {
    let client = ctx.authenticated_client().await?;
    let TaskLogCommand::List { task, page } = command;
    let body = client.list_task_logs(task, page.into()).await?;
    emit(&render_raw(ctx.format, &body)?);
    Ok(())
}
