use crate::api::conversion_event::{parse_batch_events, ConversionEvent, NewConversionEvent};
use crate::cli::args::{IdArg, PageArgs};
use crate::cli::context::CommandContext;
use crate::cli::render::{emit, render_list, render_record, render_value, TextSummary};
use crate::error::Error;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConversionEventCommand {
    /// List conversion events
    List {
        /// A/B test ID
        #[arg(long)]
        ab_test: Option<i64>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Record a conversion event
    Create {
        #[arg(long)]
        ab_test: i64,
        /// Deployment slot ID
        #[arg(long)]
        slot: i64,
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        item_id: Option<String>,
        /// e.g. impression, click, purchase
        #[arg(long)]
        event_type: String,
    },
    /// Record events from a JSON file
    BatchCreate {
        /// JSON array of events, or an object with an `events` array
        #[arg(short = 'f', long)]
        file: PathBuf,
    },
    /// Get a conversion event
    Get(IdArg),
}

impl TextSummary for ConversionEvent {
    fn summary(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.id, self.ab_test, self.slot, self.user_id, self.event_type
        )
    }
}

pub async fn run(ctx: &CommandContext, command: ConversionEventCommand) -> Result<(), Error> {
    let client = ctx.authenticated_client().await?;
    let rendered = match command {
        ConversionEventCommand::List { ab_test, page } => {
            let page = client.list_conversion_events(ab_test, page.into()).await?;
            render_list(ctx.format, &page.results, &page)?
        }
        ConversionEventCommand::Create {
            ab_test,
            slot,
            user_id,
            item_id,
            event_type,
        } => {
            let event = NewConversionEvent {
                ab_test,
                slot,
                user_id,
                item_id,
                event_type,
            };
            render_record(ctx.format, &client.create_conversion_event(&event).await?)?
        }
        ConversionEventCommand::BatchCreate { file } => {
            let text = tokio::fs::read_to_string(&file)
                .await
                .map_err(|e| Error::file(&file, &e))?;
            let events = parse_batch_events(&text)?;
            if events.is_empty() {
                return Err(Error::InvalidInput(format!(
                    "no events in {}",
                    file.display()
                )));
            }
            tracing::debug!(count = events.len(), "sending conversion events");
            let response = client.batch_create_conversion_events(&events).await?;
            render_value(ctx.format, &response)?
        }
        ConversionEventCommand::Get(IdArg { id }) => {
            render_record(ctx.format, &client.get_conversion_event(id).await?)?
        }
    };
    emit(&rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let event = ConversionEvent {
            id: 4,
            ab_test: 1,
            slot: 2,
            user_id: "u7".to_string(),
            item_id: None,
            event_type: "click".to_string(),
            ..ConversionEvent::default()
        };
        assert_eq!(event.summary(), "4 1 2 u7 click");
    }
}
