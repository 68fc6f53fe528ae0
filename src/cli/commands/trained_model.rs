use super::save_download;
use super::training_data::DownloadArgs;
use crate::api::latest_task_status;
use crate::api::trained_model::{
    NewTrainedModel, RecommendationResult, TrainedModel, TrainedModelFilter,
};
use crate::cli::args::{split_list, IdArg, PageArgs};
use crate::cli::context::CommandContext;
use crate::cli::render::{
    emit, na, render_deleted, render_list, render_record, render_structured, TextSummary,
};
use crate::cli::OutputFormat;
use crate::error::Error;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum TrainedModelCommand {
    /// List trained models
    List {
        /// Training data ID
        #[arg(long)]
        data_loc: Option<i64>,
        /// Project ID of the training data
        #[arg(long)]
        data_loc_project: Option<i64>,
        /// Trained model ID
        #[arg(short = 'i', long)]
        id: Option<i64>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Train a model from a configuration and training data
    Create {
        /// Model configuration ID
        #[arg(short = 'c', long)]
        configuration: i64,
        /// Training data ID
        #[arg(long)]
        data_loc: i64,
        #[arg(short = 'f', long)]
        file: Option<String>,
        #[arg(long)]
        irspack_version: Option<String>,
    },
    /// Delete a trained model
    Delete(IdArg),
    /// Download a trained model file
    Download(DownloadArgs),
    /// Recommend items for a user
    Recommend {
        #[command(flatten)]
        target: IdArg,
        #[arg(long)]
        user_id: String,
        /// Number of items to recommend
        #[arg(short = 'n', long, default_value_t = 10)]
        n_items: u32,
    },
    /// Recommend items for a user sampled by the server
    SampleRecommend(IdArg),
    /// Recommend items for a profile of interacted items
    RecommendProfile {
        #[command(flatten)]
        target: IdArg,
        /// Item IDs (comma-separated)
        #[arg(long, value_name = "IDS")]
        item_ids: String,
        /// Number of items to recommend
        #[arg(short = 'n', long, default_value_t = 10)]
        n_items: u32,
    },
}

impl TextSummary for TrainedModel {
    fn summary(&self) -> String {
        if self.task_links.is_empty() {
            return self.id.to_string();
        }
        format!(
            "{} {} {}",
            self.id,
            na(self.ins_datetime.as_deref()),
            na(latest_task_status(&self.task_links))
        )
    }
}

/// Text mode prints one `item_id score` line per recommended item.
fn render_recommendations(
    format: OutputFormat,
    result: &RecommendationResult,
) -> Result<String, Error> {
    if format != OutputFormat::Text {
        return render_structured(format, result);
    }
    Ok(result
        .recommendations
        .iter()
        .map(|item| {
            let id = item
                .item_id
                .as_str()
                .map_or_else(|| item.item_id.to_string(), str::to_string);
            format!("{id} {}", na(item.score))
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

pub async fn run(ctx: &CommandContext, command: TrainedModelCommand) -> Result<(), Error> {
    let client = ctx.authenticated_client().await?;
    let rendered = match command {
        TrainedModelCommand::List {
            data_loc,
            data_loc_project,
            id,
            page,
        } => {
            let filter = TrainedModelFilter {
                data_loc,
                data_loc_project,
                id,
                page: page.into(),
            };
            let page = client.list_trained_models(filter).await?;
            render_list(ctx.format, &page.results, &page)?
        }
        TrainedModelCommand::Create {
            configuration,
            data_loc,
            file,
            irspack_version,
        } => {
            let model = client
                .create_trained_model(&NewTrainedModel {
                    configuration,
                    data_loc,
                    file,
                    irspack_version,
                })
                .await?;
            render_record(ctx.format, &model)?
        }
        TrainedModelCommand::Delete(IdArg { id }) => {
            client.delete_trained_model(id).await?;
            render_deleted(ctx.format, id)?
        }
        TrainedModelCommand::Download(DownloadArgs {
            target,
            output_file,
        }) => {
            let bytes = client.download_trained_model(target.id).await?;
            return save_download(&output_file, &bytes).await;
        }
        TrainedModelCommand::Recommend {
            target,
            user_id,
            n_items,
        } => {
            let result = client.recommend(target.id, &user_id, n_items).await?;
            render_recommendations(ctx.format, &result)?
        }
        TrainedModelCommand::SampleRecommend(IdArg { id }) => {
            render_recommendations(ctx.format, &client.sample_recommend(id).await?)?
        }
        TrainedModelCommand::RecommendProfile {
            target,
            item_ids,
            n_items,
        } => {
            let profile = split_list(&item_ids);
            let result = client
                .recommend_profile(target.id, &profile, n_items)
                .await?;
            render_recommendations(ctx.format, &result)?
        }
    };
    emit(&rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_without_tasks_is_id_only() {
        let model = TrainedModel {
            id: 4,
            ..TrainedModel::default()
        };
        assert_eq!(model.summary(), "4");
    }

    #[test]
    fn test_summary_uses_latest_task_status() {
        let model: TrainedModel = serde_json::from_str(
            r#"{"id":4,"configuration":1,"data_loc":2,"ins_datetime":"2024-01-01T00:00:00Z",
                "task_links":[{"task":{"status":"PENDING"}},{"task":{"status":"SUCCESS"}}]}"#,
        )
        .unwrap();
        assert_eq!(model.summary(), "4 2024-01-01T00:00:00Z SUCCESS");
    }

    #[test]
    fn test_recommendation_lines() {
        let result: RecommendationResult = serde_json::from_str(
            r#"{"user_id":"u1","recommendations":[{"item_id":"m1","score":0.9},{"item_id":42}]}"#,
        )
        .unwrap();
        assert_eq!(
            render_recommendations(OutputFormat::Text, &result).unwrap(),
            "m1 0.9\n42 <NA>"
        );
    }
}
