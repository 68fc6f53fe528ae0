use super::{Extra, PageParams, Paginated};
use crate::client::{Query, RecotemClient};
use crate::error::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrainingRun {
    pub id: i64,
    pub schedule: i64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub trained_model: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl RecotemClient {
    /// `status` is passed through verbatim; the server rejects unknown values.
    ///
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn list_retraining_runs(
        &self,
        schedule: Option<i64>,
        status: Option<&str>,
        page: PageParams,
    ) -> Result<Paginated<RetrainingRun>, Error> {
        let query = page
            .query()
            .opt("schedule", schedule)
            .opt("status", status);
        self.get_json("retraining-run/", &query).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn get_retraining_run(&self, id: i64) -> Result<RetrainingRun, Error> {
        self.get_json(&format!("retraining-run/{id}/"), &Query::new())
            .await
    }
}
