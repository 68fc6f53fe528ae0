use crate::api::model_configuration::{
    ModelConfiguration, ModelConfigurationFilter, ModelConfigurationPatch, NewModelConfiguration,
};
use crate::cli::args::{IdArg, PageArgs};
use crate::cli::context::CommandContext;
use crate::cli::render::{emit, na, render_deleted, render_list, render_record, TextSummary};
use crate::error::Error;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ModelConfigurationCommand {
    /// List model configurations
    List {
        #[arg(short = 'i', long)]
        id: Option<i64>,
        /// Project ID
        #[arg(long)]
        project: Option<i64>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Create a model configuration
    Create {
        #[arg(short = 'n', long)]
        name: Option<String>,
        /// Project ID
        #[arg(short = 'p', long)]
        project: i64,
        /// e.g. `IALSRecommender`
        #[arg(long)]
        recommender_class_name: String,
        /// Hyperparameters as a JSON object string
        #[arg(long)]
        parameters_json: String,
    },
    /// Update a model configuration
    Update {
        #[command(flatten)]
        target: IdArg,
        #[arg(short = 'n', long)]
        name: Option<String>,
        #[arg(long)]
        recommender_class_name: Option<String>,
        #[arg(long)]
        parameters_json: Option<String>,
    },
    /// Delete a model configuration
    Delete(IdArg),
}

impl TextSummary for ModelConfiguration {
    fn summary(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.id,
            self.project,
            self.recommender_class_name,
            na(self.tuning_job),
            na(self.name.as_deref()).replace(' ', "_")
        )
    }
}

pub async fn run(ctx: &CommandContext, command: ModelConfigurationCommand) -> Result<(), Error> {
    let client = ctx.authenticated_client().await?;
    let rendered = match command {
        ModelConfigurationCommand::List { id, project, page } => {
            let filter = ModelConfigurationFilter {
                id,
                project,
                page: page.into(),
            };
            let page = client.list_model_configurations(filter).await?;
            render_list(ctx.format, &page.results, &page)?
        }
        ModelConfigurationCommand::Create {
            name,
            project,
            recommender_class_name,
            parameters_json,
        } => {
            let config = NewModelConfiguration {
                name,
                project,
                recommender_class_name,
                parameters_json,
            };
            render_record(ctx.format, &client.create_model_configuration(&config).await?)?
        }
        ModelConfigurationCommand::Update {
            target,
            name,
            recommender_class_name,
            parameters_json,
        } => {
            let patch = ModelConfigurationPatch {
                name,
                recommender_class_name,
                parameters_json,
            };
            let config = client
                .update_model_configuration(target.id, &patch)
                .await?;
            render_record(ctx.format, &config)?
        }
        ModelConfigurationCommand::Delete(IdArg { id }) => {
            client.delete_model_configuration(id).await?;
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
    fn test_summary_replaces_spaces_in_name() {
        let config = ModelConfiguration {
            id: 2,
            name: Some("best of tuning 5".to_string()),
            project: 1,
            recommender_class_name: "IALSRecommender".to_string(),
            tuning_job: Some(5),
            ..ModelConfiguration::default()
        };
        assert_eq!(config.summary(), "2 1 IALSRecommender 5 best_of_tuning_5");
    }
}
