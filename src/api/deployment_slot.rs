use super::{Extra, PageParams, Paginated};
use crate::client::{Query, RecotemClient};
use crate::error::Error;
use serde::{Deserialize, Serialize};

/// A named serving slot pointing at one trained model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentSlot {
    pub id: i64,
    pub name: String,
    pub project: i64,
    #[serde(default)]
    pub trained_model: Option<i64>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewDeploymentSlot {
    pub name: String,
    pub project: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trained_model: Option<i64>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeploymentSlotPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trained_model: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl RecotemClient {
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn list_deployment_slots(
        &self,
        project: Option<i64>,
        page: PageParams,
    ) -> Result<Paginated<DeploymentSlot>, Error> {
        let query = page.query().opt("project", project);
        self.get_json("deployment-slot/", &query).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn create_deployment_slot(
        &self,
        slot: &NewDeploymentSlot,
    ) -> Result<DeploymentSlot, Error> {
        self.post_json("deployment-slot/", slot).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn get_deployment_slot(&self, id: i64) -> Result<DeploymentSlot, Error> {
        self.get_json(&format!("deployment-slot/{id}/"), &Query::new())
            .await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn update_deployment_slot(
        &self,
        id: i64,
        patch: &DeploymentSlotPatch,
    ) -> Result<DeploymentSlot, Error> {
        self.patch_json(&format!("deployment-slot/{id}/"), patch)
            .await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn delete_deployment_slot(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("deployment-slot/{id}/")).await
    }
}
