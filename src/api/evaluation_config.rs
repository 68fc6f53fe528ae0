use super::Extra;
use crate::client::{Query, RecotemClient};
use crate::error::Error;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TargetMetric {
    Hit,
    Map,
    Recall,
    Ndcg,
}

/// Cutoff and metric used to score tuning trials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cutoff: Option<i64>,
    #[serde(default)]
    pub target_metric: Option<TargetMetric>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body for both create (`POST`) and update (`PATCH`); unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EvaluationConfigFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_metric: Option<TargetMetric>,
}

/// Filters for the unpaginated config lists.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NamedConfigFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub unnamed: Option<bool>,
}

impl NamedConfigFilter {
    #[must_use]
    pub fn query(&self) -> Query {
        Query::new()
            .opt("id", self.id)
            .opt("name", self.name.as_deref())
            .opt("unnamed", self.unnamed)
    }
}

impl RecotemClient {
    /// Returned as a plain array.
    ///
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn list_evaluation_configs(
        &self,
        filter: &NamedConfigFilter,
    ) -> Result<Vec<EvaluationConfig>, Error> {
        self.get_json("evaluation-config/", &filter.query()).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn create_evaluation_config(
        &self,
        fields: &EvaluationConfigFields,
    ) -> Result<EvaluationConfig, Error> {
        self.post_json("evaluation-config/", fields).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn update_evaluation_config(
        &self,
        id: i64,
        fields: &EvaluationConfigFields,
    ) -> Result<EvaluationConfig, Error> {
        self.patch_json(&format!("evaluation-config/{id}/"), fields)
            .await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn delete_evaluation_config(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("evaluation-config/{id}/")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_metric_wire_names() {
        assert_eq!(serde_json::to_string(&TargetMetric::Ndcg).unwrap(), "\"ndcg\"");
        let metric: TargetMetric = serde_json::from_str("\"map\"").unwrap();
        assert_eq!(metric, TargetMetric::Map);
    }

    #[test]
    fn test_named_filter_query() {
        let filter = NamedConfigFilter {
            id: None,
            name: Some("default".to_string()),
            unnamed: Some(false),
        };
        assert_eq!(
            filter.query().pairs(),
            &[
                ("name", "default".to_string()),
                ("unnamed", "false".to_string())
            ]
        );
    }
}
