use crate::api::deployment_slot::{DeploymentSlot, DeploymentSlotPatch, NewDeploymentSlot};
use crate::cli::args::{IdArg, PageArgs};
use crate::cli::context::CommandContext;
use crate::cli::render::{emit, render_deleted, render_list, render_record, TextSummary};
use crate::error::Error;
use clap::{ArgAction, Subcommand};

#[derive(Subcommand, Debug)]
pub enum DeploymentSlotCommand {
    /// List deployment slots
    List {
        /// Project ID
        #[arg(long)]
        project: Option<i64>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Create a deployment slot
    Create {
        #[arg(short = 'n', long)]
        name: String,
        /// Project ID
        #[arg(long)]
        project: i64,
        /// Trained model served by the slot
        #[arg(long)]
        trained_model: Option<i64>,
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        is_active: bool,
    },
    /// Get a deployment slot
    Get(IdArg),
    /// Update a deployment slot
    Update {
        #[command(flatten)]
        target: IdArg,
        #[arg(short = 'n', long)]
        name: Option<String>,
        #[arg(long)]
        trained_model: Option<i64>,
        #[arg(long)]
        is_active: Option<bool>,
    },
    /// Delete a deployment slot
    Delete(IdArg),
}

impl TextSummary for DeploymentSlot {
    fn summary(&self) -> String {
        let model = self
            .trained_model
            .map_or_else(|| "<none>".to_string(), |id| id.to_string());
        format!(
            "{} {} {} {} {}",
            self.id, self.name, self.project, model, self.is_active
        )
    }
}

pub async fn run(ctx: &CommandContext, command: DeploymentSlotCommand) -> Result<(), Error> {
    let client = ctx.authenticated_client().await?;
    let rendered = match command {
        DeploymentSlotCommand::List { project, page } => {
            let page = client.list_deployment_slots(project, page.into()).await?;
            render_list(ctx.format, &page.results, &page)?
        }
        DeploymentSlotCommand::Create {
            name,
            project,
            trained_model,
            is_active,
        } => {
            let slot = NewDeploymentSlot {
                name,
                project,
                trained_model,
                is_active,
            };
            render_record(ctx.format, &client.create_deployment_slot(&slot).await?)?
        }
        DeploymentSlotCommand::Get(IdArg { id }) => {
            render_record(ctx.format, &client.get_deployment_slot(id).await?)?
        }
        DeploymentSlotCommand::Update {
            target,
            name,
            trained_model,
            is_active,
        } => {
            let patch = DeploymentSlotPatch {
                name,
                trained_model,
                is_active,
            };
            let slot = client.update_deployment_slot(target.id, &patch).await?;
            render_record(ctx.format, &slot)?
        }
        DeploymentSlotCommand::Delete(IdArg { id }) => {
            client.delete_deployment_slot(id).await?;
            render_deleted(ctx.format, id)?
        }
    };
    emit(&rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_marks_empty_slot() {
        let slot = DeploymentSlot {
            id: 1,
            name: "primary".to_string(),
            project: 2,
            trained_model: None,
            is_active: true,
            ..DeploymentSlot::default()
        };
        assert_eq!(slot.summary(), "1 primary 2 <none> true");
    }
}
