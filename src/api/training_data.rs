use super::{Extra, PageParams, Paginated};
use crate::client::{Query, RecotemClient};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An uploaded interaction log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingData {
    pub id: i64,
    pub project: i64,
    #[serde(default)]
    pub basename: Option<String>,
    #[serde(default)]
    pub filesize: Option<i64>,
    #[serde(default)]
    pub ins_datetime: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Filters accepted by the training-data and item-meta-data lists.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DataFileFilter {
    pub id: Option<i64>,
    pub project: Option<i64>,
    pub page: PageParams,
}

impl DataFileFilter {
    #[must_use]
    pub fn query(self) -> Query {
        self.page
            .query()
            .opt("id", self.id)
            .opt("project", self.project)
    }
}

impl RecotemClient {
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn list_training_data(
        &self,
        filter: DataFileFilter,
    ) -> Result<Paginated<TrainingData>, Error> {
        self.get_json("training-data/", &filter.query()).await
    }

    /// Upload `file` as multipart form data.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if `file` cannot be read, otherwise a network
    /// error or the server's status and body.
    pub async fn upload_training_data(
        &self,
        project: i64,
        file: &Path,
    ) -> Result<TrainingData, Error> {
        self.upload_project_file("training-data/", project, file)
            .await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn delete_training_data(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("training-data/{id}/")).await
    }

    /// Raw file contents.
    ///
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn download_training_data(&self, id: i64) -> Result<Vec<u8>, Error> {
        self.get_bytes(&format!("training-data/{id}/download/"))
            .await
    }

    /// First rows of the file as parsed by the server.
    ///
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn preview_training_data(&self, id: i64) -> Result<serde_json::Value, Error> {
        self.get_json(&format!("training-data/{id}/preview/"), &Query::new())
            .await
    }
}
