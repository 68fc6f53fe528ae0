use super::{Extra, PageParams, Paginated};
use crate::client::{Query, RecotemClient};
use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Traffic split between deployment slots of one project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbTest {
    pub id: i64,
    pub name: String,
    pub project: i64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub slots: Vec<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Per-slot conversion statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbTestResult {
    pub slot_id: i64,
    #[serde(default)]
    pub slot_name: Option<String>,
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub conversions: u64,
    #[serde(default)]
    pub conversion_rate: f64,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewAbTest {
    pub name: String,
    pub project: i64,
    pub slots: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AbTestPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<i64>>,
}

#[derive(Debug, Serialize)]
struct PromoteWinner {
    slot_id: i64,
}

impl RecotemClient {
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn list_ab_tests(
        &self,
        project: Option<i64>,
        page: PageParams,
    ) -> Result<Paginated<AbTest>, Error> {
        let query = page.query().opt("project", project);
        self.get_json("ab-test/", &query).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn create_ab_test(&self, test: &NewAbTest) -> Result<AbTest, Error> {
        self.post_json("ab-test/", test).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn get_ab_test(&self, id: i64) -> Result<AbTest, Error> {
        self.get_json(&format!("ab-test/{id}/"), &Query::new()).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn update_ab_test(&self, id: i64, patch: &AbTestPatch) -> Result<AbTest, Error> {
        self.patch_json(&format!("ab-test/{id}/"), patch).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn delete_ab_test(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("ab-test/{id}/")).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn start_ab_test(&self, id: i64) -> Result<(), Error> {
        self.post_action::<()>(&format!("ab-test/{id}/start/"), None)
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn stop_ab_test(&self, id: i64) -> Result<(), Error> {
        self.post_action::<()>(&format!("ab-test/{id}/stop/"), None)
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn ab_test_results(&self, id: i64) -> Result<Vec<AbTestResult>, Error> {
        self.get_json(&format!("ab-test/{id}/results/"), &Query::new())
            .await
    }

    /// Point every slot of the test at the winner's model.
    ///
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn promote_ab_test_winner(&self, id: i64, slot_id: i64) -> Result<AbTest, Error> {
        self.post_json(
            &format!("ab-test/{id}/promote_winner/"),
            &PromoteWinner { slot_id },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_omits_unset_fields() {
        let patch = AbTestPatch {
            name: Some("homepage".to_string()),
            slots: None,
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({"name": "homepage"})
        );
    }

    #[test]
    fn test_result_keeps_unknown_fields() {
        let result: AbTestResult = serde_json::from_str(
            r#"{"slot_id":1,"slot_name":"slot-a","impressions":100,"conversions":50,"conversion_rate":0.5,"confidence":0.95,"lift":0.1}"#,
        )
        .unwrap();
        assert_eq!(result.slot_id, 1);
        assert!((result.conversion_rate - 0.5).abs() < f64::EPSILON);
        assert!(result.extra.contains_key("lift"));
    }
}
