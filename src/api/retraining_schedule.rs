use super::{Extra, PageParams, Paginated};
use crate::client::{Query, RecotemClient};
use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Cron-driven retraining of the model behind a deployment slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrainingSchedule {
    pub id: i64,
    pub deployment_slot: i64,
    pub cron_expression: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewRetrainingSchedule {
    pub deployment_slot: i64,
    pub cron_expression: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RetrainingSchedulePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl RecotemClient {
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn list_retraining_schedules(
        &self,
        deployment_slot: Option<i64>,
        page: PageParams,
    ) -> Result<Paginated<RetrainingSchedule>, Error> {
        let query = page.query().opt("deployment_slot", deployment_slot);
        self.get_json("retraining-schedule/", &query).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn create_retraining_schedule(
        &self,
        schedule: &NewRetrainingSchedule,
    ) -> Result<RetrainingSchedule, Error> {
        self.post_json("retraining-schedule/", schedule).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn get_retraining_schedule(&self, id: i64) -> Result<RetrainingSchedule, Error> {
        self.get_json(&format!("retraining-schedule/{id}/"), &Query::new())
            .await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn update_retraining_schedule(
        &self,
        id: i64,
        patch: &RetrainingSchedulePatch,
    ) -> Result<RetrainingSchedule, Error> {
        self.patch_json(&format!("retraining-schedule/{id}/"), patch)
            .await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn delete_retraining_schedule(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("retraining-schedule/{id}/")).await
    }

    /// Start a run now, outside the cron cadence.
    ///
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn trigger_retraining(&self, id: i64) -> Result<(), Error> {
        self.post_action::<()>(&format!("retraining-schedule/{id}/trigger/"), None)
            .await?;
        Ok(())
    }
}
