use super::{Extra, PageParams, Paginated};
use crate::client::RecotemClient;
use crate::error::Error;
use serde::{Deserialize, Serialize};

/// A recommender class plus its hyperparameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelConfiguration {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    pub project: i64,
    pub recommender_class_name: String,
    #[serde(default)]
    pub parameters_json: serde_json::Value,
    #[serde(default)]
    pub tuning_job: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewModelConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub project: i64,
    pub recommender_class_name: String,
    pub parameters_json: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModelConfigurationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommender_class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters_json: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModelConfigurationFilter {
    pub id: Option<i64>,
    pub project: Option<i64>,
    pub page: PageParams,
}

impl RecotemClient {
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn list_model_configurations(
        &self,
        filter: ModelConfigurationFilter,
    ) -> Result<Paginated<ModelConfiguration>, Error> {
        let query = filter
            .page
            .query()
            .opt("id", filter.id)
            .opt("project", filter.project);
        self.get_json("model-configuration/", &query).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn create_model_configuration(
        &self,
        config: &NewModelConfiguration,
    ) -> Result<ModelConfiguration, Error> {
        self.post_json("model-configuration/", config).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn update_model_configuration(
        &self,
        id: i64,
        patch: &ModelConfigurationPatch,
    ) -> Result<ModelConfiguration, Error> {
        self.patch_json(&format!("model-configuration/{id}/"), patch)
            .await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn delete_model_configuration(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("model-configuration/{id}/")).await
    }
}
