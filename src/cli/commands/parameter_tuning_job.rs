use crate::api::latest_task_status;
use crate::api::parameter_tuning_job::{
    NewParameterTuningJob, ParameterTuningJob, ParameterTuningJobFilter,
};
use crate::cli::args::{IdArg, PageArgs};
use crate::cli::context::CommandContext;
use crate::cli::render::{emit, na, render_deleted, render_list, render_record, TextSummary};
use crate::error::Error;
use clap::{Args, Subcommand};

#[derive(Args, Debug, Clone)]
pub struct CreateJobArgs {
    /// Training data ID
    #[arg(short = 'd', long)]
    pub data: i64,
    /// Split config ID
    #[arg(short = 's', long)]
    pub split: i64,
    /// Evaluation config ID
    #[arg(short = 'e', long)]
    pub evaluation: i64,
    #[arg(long)]
    pub n_tasks_parallel: Option<i64>,
    #[arg(long)]
    pub n_trials: Option<i64>,
    #[arg(long)]
    pub memory_budget: Option<i64>,
    /// Seconds for the whole search
    #[arg(long)]
    pub timeout_overall: Option<i64>,
    /// Seconds per trial
    #[arg(long)]
    pub timeout_singlestep: Option<i64>,
    #[arg(long)]
    pub random_seed: Option<i64>,
    #[arg(long)]
    pub tried_algorithms_json: Option<String>,
    #[arg(long)]
    pub irspack_version: Option<String>,
    /// Train a model with the best configuration once tuning ends
    #[arg(long)]
    pub train_after_tuning: Option<bool>,
    #[arg(long)]
    pub best_score: Option<f64>,
    #[arg(long)]
    pub tuned_model: Option<i64>,
    #[arg(long)]
    pub best_config: Option<i64>,
}

impl From<CreateJobArgs> for NewParameterTuningJob {
    fn from(args: CreateJobArgs) -> Self {
        Self {
            data: args.data,
            split: args.split,
            evaluation: args.evaluation,
            n_tasks_parallel: args.n_tasks_parallel,
            n_trials: args.n_trials,
            memory_budget: args.memory_budget,
            timeout_overall: args.timeout_overall,
            timeout_singlestep: args.timeout_singlestep,
            random_seed: args.random_seed,
            tried_algorithms_json: args.tried_algorithms_json,
            irspack_version: args.irspack_version,
            train_after_tuning: args.train_after_tuning,
            best_score: args.best_score,
            tuned_model: args.tuned_model,
            best_config: args.best_config,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ParameterTuningJobCommand {
    /// List parameter tuning jobs
    List {
        /// Training data ID
        #[arg(short = 'd', long)]
        data: Option<i64>,
        /// Project ID of the training data
        #[arg(long)]
        data_project: Option<i64>,
        #[arg(short = 'i', long)]
        id: Option<i64>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Start a hyperparameter search
    Create(Box<CreateJobArgs>),
    /// Get a parameter tuning job
    Get(IdArg),
    /// Delete a parameter tuning job
    Delete(IdArg),
}

impl TextSummary for ParameterTuningJob {
    fn summary(&self) -> String {
        if self.task_links.is_empty() {
            return self.id.to_string();
        }
        format!(
            "{} {} {} {}",
            self.id,
            na(self.ins_datetime.as_deref()),
            na(latest_task_status(&self.task_links)),
            na(self.tuned_model)
        )
    }
}

pub async fn run(ctx: &CommandContext, command: ParameterTuningJobCommand) -> Result<(), Error> {
    let client = ctx.authenticated_client().await?;
    let rendered = match command {
        ParameterTuningJobCommand::List {
            data,
            data_project,
            id,
            page,
        } => {
            let filter = ParameterTuningJobFilter {
                data,
                data_project,
                id,
                page: page.into(),
            };
            let page = client.list_parameter_tuning_jobs(filter).await?;
            render_list(ctx.format, &page.results, &page)?
        }
        ParameterTuningJobCommand::Create(args) => {
            let job = client
                .create_parameter_tuning_job(&(*args).into())
                .await?;
            render_record(ctx.format, &job)?
        }
        ParameterTuningJobCommand::Get(IdArg { id }) => {
            render_record(ctx.format, &client.get_parameter_tuning_job(id).await?)?
        }
        ParameterTuningJobCommand::Delete(IdArg { id }) => {
            client.delete_parameter_tuning_job(id).await?;
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
    fn test_summary_with_task() {
        let job: ParameterTuningJob = serde_json::from_str(
            r#"{"id":9,"data":1,"split":2,"evaluation":3,"ins_datetime":"2024-05-01T10:00:00Z",
                "tuned_model":null,"task_links":[{"task":{"status":"STARTED"}}]}"#,
        )
        .unwrap();
        assert_eq!(job.summary(), "9 2024-05-01T10:00:00Z STARTED <NA>");
    }
}
