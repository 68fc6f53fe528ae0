use crate::api::ab_test::{AbTest, AbTestPatch, NewAbTest};
use crate::cli::args::{parse_id_list, IdArg, PageArgs};
use crate::cli::context::CommandContext;
use crate::cli::render::{
    emit, na, render_deleted, render_list, render_record, render_structured, TextSummary,
};
use crate::cli::OutputFormat;
use crate::error::Error;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum AbTestCommand {
    /// List A/B tests
    List {
        /// Project ID
        #[arg(long)]
        project: Option<i64>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Create an A/B test
    Create {
        #[arg(short = 'n', long)]
        name: String,
        /// Project ID
        #[arg(long)]
        project: i64,
        /// Deployment slot IDs (comma-separated)
        #[arg(long, value_name = "IDS")]
        slots: String,
    },
    /// Get an A/B test
    Get(IdArg),
    /// Update an A/B test
    Update {
        #[command(flatten)]
        target: IdArg,
        #[arg(short = 'n', long)]
        name: Option<String>,
        /// Deployment slot IDs (comma-separated)
        #[arg(long, value_name = "IDS")]
        slots: Option<String>,
    },
    /// Delete an A/B test
    Delete(IdArg),
    /// Start an A/B test
    Start(IdArg),
    /// Stop an A/B test
    Stop(IdArg),
    /// Get A/B test results
    Results(IdArg),
    /// Promote A/B test winner
    PromoteWinner {
        #[command(flatten)]
        target: IdArg,
        /// Winning slot ID
        #[arg(long)]
        slot_id: i64,
    },
}

impl TextSummary for AbTest {
    fn summary(&self) -> String {
        format!(
            "{} {} {} {}",
            self.id,
            self.name,
            self.project,
            na(self.status.as_deref())
        )
    }
}

pub async fn run(ctx: &CommandContext, command: AbTestCommand) -> Result<(), Error> {
    let client = ctx.authenticated_client().await?;
    let rendered = match command {
        AbTestCommand::List { project, page } => {
            let page = client.list_ab_tests(project, page.into()).await?;
            render_list(ctx.format, &page.results, &page)?
        }
        AbTestCommand::Create {
            name,
            project,
            slots,
        } => {
            let test = NewAbTest {
                name,
                project,
                slots: parse_id_list(&slots)?,
            };
            render_record(ctx.format, &client.create_ab_test(&test).await?)?
        }
        AbTestCommand::Get(IdArg { id }) => {
            render_record(ctx.format, &client.get_ab_test(id).await?)?
        }
        AbTestCommand::Update {
            target,
            name,
            slots,
        } => {
            let patch = AbTestPatch {
                name,
                slots: slots.as_deref().map(parse_id_list).transpose()?,
            };
            render_record(ctx.format, &client.update_ab_test(target.id, &patch).await?)?
        }
        AbTestCommand::Delete(IdArg { id }) => {
            client.delete_ab_test(id).await?;
            render_deleted(ctx.format, id)?
        }
        AbTestCommand::Start(IdArg { id }) => {
            client.start_ab_test(id).await?;
            ctx.output.success("A/B test started.");
            return Ok(());
        }
        AbTestCommand::Stop(IdArg { id }) => {
            client.stop_ab_test(id).await?;
            ctx.output.success("A/B test stopped.");
            return Ok(());
        }
        AbTestCommand::Results(IdArg { id }) => {
            let results = client.ab_test_results(id).await?;
            // Per-slot statistics have no one-line form; text falls back to JSON.
            let format = match ctx.format {
                OutputFormat::Text => OutputFormat::Json,
                other => other,
            };
            render_structured(format, &results)?
        }
        AbTestCommand::PromoteWinner { target, slot_id } => {
            let test = client.promote_ab_test_winner(target.id, slot_id).await?;
            render_record(ctx.format, &test)?
        }
    };
    emit(&rendered);
    Ok(())
}
