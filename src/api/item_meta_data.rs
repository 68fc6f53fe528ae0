use super::training_data::DataFileFilter;
use super::{Extra, Paginated};
use crate::client::RecotemClient;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An uploaded item attribute table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemMetaData {
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

impl RecotemClient {
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn list_item_meta_data(
        &self,
        filter: DataFileFilter,
    ) -> Result<Paginated<ItemMetaData>, Error> {
        self.get_json("item-meta-data/", &filter.query()).await
    }

    /// # Errors
    ///
    /// Returns an I/O error if `file` cannot be read, otherwise a network
    /// error or the server's status and body.
    pub async fn upload_item_meta_data(
        &self,
        project: i64,
        file: &Path,
    ) -> Result<ItemMetaData, Error> {
        self.upload_project_file("item-meta-data/", project, file)
            .await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn delete_item_meta_data(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("item-meta-data/{id}/")).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn download_item_meta_data(&self, id: i64) -> Result<Vec<u8>, Error> {
        self.get_bytes(&format!("item-meta-data/{id}/download/"))
            .await
    }
}
