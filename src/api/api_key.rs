use super::{Extra, PageParams, Paginated};
use crate::client::{Query, RecotemClient};
use crate::error::Error;
use serde::{Deserialize, Serialize};

/// A long-lived key for `X-API-Key` authentication.
///
/// `key` is only populated in the response to creation; later reads expose
/// the `prefix` alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Serialize)]
struct NewApiKey<'a> {
    name: &'a str,
}

impl RecotemClient {
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn list_api_keys(&self, page: PageParams) -> Result<Paginated<ApiKey>, Error> {
        self.get_json("api-key/", &page.query()).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn create_api_key(&self, name: &str) -> Result<ApiKey, Error> {
        self.post_json("api-key/", &NewApiKey { name }).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn get_api_key(&self, id: i64) -> Result<ApiKey, Error> {
        self.get_json(&format!("api-key/{id}/"), &Query::new()).await
    }

    /// Disable a key without deleting it.
    ///
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn revoke_api_key(&self, id: i64) -> Result<(), Error> {
        self.post_action::<()>(&format!("api-key/{id}/revoke/"), None)
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn delete_api_key(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("api-key/{id}/")).await
    }
}
