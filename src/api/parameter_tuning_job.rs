use super::{Extra, PageParams, Paginated, TaskLink};
use crate::client::{Query, RecotemClient};
use crate::error::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterTuningJob {
    pub id: i64,
    pub data: i64,
    pub split: i64,
    pub evaluation: i64,
    #[serde(default)]
    pub ins_datetime: Option<String>,
    #[serde(default)]
    pub tuned_model: Option<i64>,
    #[serde(default)]
    pub best_config: Option<i64>,
    #[serde(default)]
    pub best_score: Option<f64>,
    #[serde(default)]
    pub task_links: Vec<TaskLink>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewParameterTuningJob {
    pub data: i64,
    pub split: i64,
    pub evaluation: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_tasks_parallel: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_trials: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_budget: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_overall: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_singlestep: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tried_algorithms_json: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irspack_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub train_after_tuning: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuned_model: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_config: Option<i64>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParameterTuningJobFilter {
    pub data: Option<i64>,
    pub data_project: Option<i64>,
    pub id: Option<i64>,
    pub page: PageParams,
}

impl RecotemClient {
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn list_parameter_tuning_jobs(
        &self,
        filter: ParameterTuningJobFilter,
    ) -> Result<Paginated<ParameterTuningJob>, Error> {
        let query = filter
            .page
            .query()
            .opt("data", filter.data)
            .opt("data__project", filter.data_project)
            .opt("id", filter.id);
        self.get_json("parameter-tuning-job/", &query).await
    }

    /// Submit a tuning job; the server schedules it asynchronously.
    ///
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn create_parameter_tuning_job(
        &self,
        job: &NewParameterTuningJob,
    ) -> Result<ParameterTuningJob, Error> {
        self.post_json("parameter-tuning-job/", job).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn get_parameter_tuning_job(&self, id: i64) -> Result<ParameterTuningJob, Error> {
        self.get_json(&format!("parameter-tuning-job/{id}/"), &Query::new())
            .await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn delete_parameter_tuning_job(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("parameter-tuning-job/{id}/")).await
    }
}
