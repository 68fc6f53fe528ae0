//! Typed wrappers for the `/api/v1/` REST endpoints.
//!
//! Every record keeps the fields it does not model in `extra`, so JSON and
//! YAML output reproduce the full server response.

pub mod ab_test;
pub mod api_key;
pub mod auth;
pub mod conversion_event;
pub mod deployment_slot;
pub mod evaluation_config;
pub mod item_meta_data;
pub mod model_configuration;
pub mod parameter_tuning_job;
pub mod project;
pub mod retraining_run;
pub mod retraining_schedule;
pub mod split_config;
pub mod task_log;
pub mod trained_model;
pub mod training_data;
pub mod user;

use crate::client::{Query, RecotemClient};
use crate::error::Error;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Server fields without a typed counterpart.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// Envelope of paginated list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// `page` / `page_size` query parameters shared by paginated lists.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageParams {
    #[must_use]
    pub fn query(self) -> Query {
        Query::new()
            .opt("page", self.page)
            .opt("page_size", self.page_size)
    }
}

/// Status reported by the asynchronous task behind a job or model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskLink {
    #[serde(default)]
    pub task: TaskResult,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Status of the most recent task, if any task has been linked.
#[must_use]
pub fn latest_task_status(links: &[TaskLink]) -> Option<&str> {
    links.last().and_then(|link| link.task.status.as_deref())
}

impl RecotemClient {
    /// Multipart upload of a local file tied to a project.
    pub(crate) async fn upload_project_file<T: DeserializeOwned>(
        &self,
        path: &str,
        project: i64,
        file: &Path,
    ) -> Result<T, Error> {
        let contents = tokio::fs::read(file)
            .await
            .map_err(|e| Error::file(file, &e))?;
        let file_name = file
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().to_string());
        let part = reqwest::multipart::Part::bytes(contents).file_name(file_name);
        let form = reqwest::multipart::Form::new()
            .text("project", project.to_string())
            .part("file", part);
        self.post_multipart(path, form).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_paginated_envelope() {
        let page: Paginated<Item> = serde_json::from_str(
            r#"{"count":3,"next":"http://h/api/v1/x/?page=2","previous":null,"results":[{"id":1},{"id":2}]}"#,
        )
        .unwrap();
        assert_eq!(page.count, 3);
        assert!(page.next.is_some());
        assert_eq!(page.results, vec![Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn test_page_params_query() {
        let params = PageParams {
            page: Some(2),
            page_size: None,
        };
        assert_eq!(params.query().pairs(), &[("page", "2".to_string())]);
    }

    #[test]
    fn test_latest_task_status_uses_last_link() {
        let links: Vec<TaskLink> = serde_json::from_str(
            r#"[{"task":{"status":"SUCCESS"}},{"task":{"status":"STARTED","task_id":"x"}}]"#,
        )
        .unwrap();
        assert_eq!(latest_task_status(&links), Some("STARTED"));
        assert_eq!(latest_task_status(&[]), None);
    }
}
