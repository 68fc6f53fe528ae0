use super::evaluation_config::NamedConfigFilter;
use super::Extra;
use crate::client::RecotemClient;
use crate::error::Error;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Hold-out scheme: random, time-global, or time-user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum SplitScheme {
    #[value(name = "RG")]
    Rg,
    #[value(name = "TG")]
    Tg,
    #[value(name = "TU")]
    Tu,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scheme: Option<SplitScheme>,
    #[serde(default)]
    pub heldout_ratio: Option<f64>,
    #[serde(default)]
    pub n_heldout: Option<i64>,
    #[serde(default)]
    pub test_user_ratio: Option<f64>,
    #[serde(default)]
    pub n_test_users: Option<i64>,
    #[serde(default)]
    pub random_seed: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body for create and update; unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SplitConfigFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<SplitScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heldout_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_heldout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_user_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_test_users: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<i64>,
}

impl RecotemClient {
    /// Returned as a plain array.
    ///
    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn list_split_configs(
        &self,
        filter: &NamedConfigFilter,
    ) -> Result<Vec<SplitConfig>, Error> {
        self.get_json("split-config/", &filter.query()).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn create_split_config(
        &self,
        fields: &SplitConfigFields,
    ) -> Result<SplitConfig, Error> {
        self.post_json("split-config/", fields).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn update_split_config(
        &self,
        id: i64,
        fields: &SplitConfigFields,
    ) -> Result<SplitConfig, Error> {
        self.patch_json(&format!("split-config/{id}/"), fields).await
    }

    /// # Errors
    ///
    /// Returns a network error or the server's status and body.
    pub async fn delete_split_config(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("split-config/{id}/")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_wire_names_are_uppercase() {
        assert_eq!(serde_json::to_string(&SplitScheme::Tu).unwrap(), "\"TU\"");
        let fields = SplitConfigFields {
            scheme: Some(SplitScheme::Rg),
            heldout_ratio: Some(0.1),
            ..SplitConfigFields::default()
        };
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            serde_json::json!({"scheme": "RG", "heldout_ratio": 0.1})
        );
    }
}
