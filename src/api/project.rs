use super::Extra;
use crate::client::{Query, RecotemClient};
use crate::error::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub user_column: String,
    pub item_column: String,
    #[serde(default)]
    pub time_column: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewProject {
    pub name: String,
    pub user_column: String,
    pub item_column: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_column: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_column: Option<String>,
}

impl RecotemClient {
    /// Projects are returned as a plain array, not paginated.
    ///
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn list_projects(
        &self,
        id: Option<i64>,
        name: Option<&str>,
    ) -> Result<Vec<Project>, Error> {
        let query = Query::new().opt("id", id).opt("name", name);
        self.get_json("project/", &query).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn create_project(&self, project: &NewProject) -> Result<Project, Error> {
        self.post_json("project/", project).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn get_project(&self, id: i64) -> Result<Project, Error> {
        self.get_json(&format!("project/{id}/"), &Query::new()).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn update_project(&self, id: i64, patch: &ProjectPatch) -> Result<Project, Error> {
        self.patch_json(&format!("project/{id}/"), patch).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn delete_project(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("project/{id}/")).await
    }

    /// Aggregate counts for a project, passed through untyped.
    ///
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn project_summary(&self, id: i64) -> Result<serde_json::Value, Error> {
        self.get_json(&format!("project/{id}/summary/"), &Query::new())
            .await
    }
}
