use super::{Extra, PageParams, Paginated, TaskLink};
use crate::client::RecotemClient;
use crate::error::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    pub id: i64,
    pub configuration: i64,
    pub data_loc: i64,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub irspack_version: Option<String>,
    #[serde(default)]
    pub ins_datetime: Option<String>,
    #[serde(default)]
    pub task_links: Vec<TaskLink>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewTrainedModel {
    pub configuration: i64,
    pub data_loc: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irspack_version: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TrainedModelFilter {
    pub data_loc: Option<i64>,
    pub data_loc_project: Option<i64>,
    pub id: Option<i64>,
    pub page: PageParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedItem {
    pub item_id: serde_json::Value,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<serde_json::Value>,
    #[serde(default)]
    pub recommendations: Vec<RecommendedItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Serialize)]
struct RecommendRequest<'a> {
    user_id: &'a str,
    cutoff: u32,
}

#[derive(Debug, Serialize)]
struct ProfileRecommendRequest<'a> {
    user_profile: &'a [String],
    cutoff: u32,
}

impl RecotemClient {
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn list_trained_models(
        &self,
        filter: TrainedModelFilter,
    ) -> Result<Paginated<TrainedModel>, Error> {
        let query = filter
            .page
            .query()
            .opt("data_loc", filter.data_loc)
            .opt("data_loc__project", filter.data_loc_project)
            .opt("id", filter.id);
        self.get_json("trained-model/", &query).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn create_trained_model(
        &self,
        model: &NewTrainedModel,
    ) -> Result<TrainedModel, Error> {
        self.post_json("trained-model/", model).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn delete_trained_model(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("trained-model/{id}/")).await
    }

    /// Serialized model file.
    ///
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn download_trained_model(&self, id: i64) -> Result<Vec<u8>, Error> {
        self.get_bytes(&format!("trained-model/{id}/download_file/"))
            .await
    }

    /// Top `cutoff` items for a known user.
    ///
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn recommend(
        &self,
        id: i64,
        user_id: &str,
        cutoff: u32,
    ) -> Result<RecommendationResult, Error> {
        self.post_json(
            &format!("trained-model/{id}/recommend/"),
            &RecommendRequest { user_id, cutoff },
        )
        .await
    }

    /// Recommendations for a user picked by the server.
    ///
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn sample_recommend(&self, id: i64) -> Result<RecommendationResult, Error> {
        let text = self
            .post_action::<()>(&format!("trained-model/{id}/sample_recommend/"), None)
            .await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Recommendations for an ad-hoc profile of interacted items.
    ///
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn recommend_profile(
        &self,
        id: i64,
        user_profile: &[String],
        cutoff: u32,
    ) -> Result<RecommendationResult, Error> {
        self.post_json(
            &format!("trained-model/{id}/recommend_profile/"),
            &ProfileRecommendRequest {
                user_profile,
                cutoff,
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_result_accepts_numeric_item_ids() {
        let result: RecommendationResult = serde_json::from_str(
            r#"{"user_id":"u1","recommendations":[{"item_id":42,"score":0.9},{"item_id":"x","score":0.1}]}"#,
        )
        .unwrap();
        assert_eq!(result.recommendations.len(), 2);
        assert_eq!(result.recommendations[0].item_id, serde_json::json!(42));
    }

    #[test]
    fn test_new_trained_model_skips_unset_fields() {
        let body = serde_json::to_value(NewTrainedModel {
            configuration: 1,
            data_loc: 2,
            ..NewTrainedModel::default()
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"configuration": 1, "data_loc": 2}));
    }
}
