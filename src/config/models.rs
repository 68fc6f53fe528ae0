use crate::constants;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Contents of `config.yaml`: the server address plus whatever credentials
/// the last login left behind.
///
/// Empty strings mean "not set" and are omitted when the file is written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecotemConfig {
    #[serde(default)]
    pub url: String,
    /// Legacy static token, sent as `Authorization: Token <token>`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub access_token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub refresh_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_key: String,
}

impl RecotemConfig {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// True when there is no recorded expiry or the access token expires
    /// within the grace window.
    #[must_use]
    pub fn is_token_expired(&self) -> bool {
        self.is_token_expired_at(Utc::now())
    }

    #[must_use]
    pub fn is_token_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_none_or(|expires_at| {
            now + Duration::seconds(constants::TOKEN_EXPIRY_GRACE_SECS) >= expires_at
        })
    }

    /// Store a freshly issued JWT pair and drop the legacy token.
    pub fn set_jwt(&mut self, access_token: String, refresh_token: String, now: DateTime<Utc>) {
        self.access_token = access_token;
        self.refresh_token = refresh_token;
        self.expires_at = Some(now + Duration::seconds(constants::ACCESS_TOKEN_LIFETIME_SECS));
        self.token.clear();
    }

    /// Replace only the access token after a refresh; the refresh token is kept.
    pub fn set_refreshed_access(&mut self, access_token: String, now: DateTime<Utc>) {
        self.access_token = access_token;
        self.expires_at = Some(now + Duration::seconds(constants::ACCESS_TOKEN_LIFETIME_SECS));
    }

    /// Forget every session credential. `url` and `api_key` survive.
    pub fn clear_tokens(&mut self) {
        self.token.clear();
        self.access_token.clear();
        self.refresh_token.clear();
        self.expires_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_expiring_in(secs: i64) -> (RecotemConfig, DateTime<Utc>) {
        let now = Utc::now();
        let config = RecotemConfig {
            access_token: "access".to_string(),
            expires_at: Some(now + Duration::seconds(secs)),
            ..RecotemConfig::new("http://localhost:8000")
        };
        (config, now)
    }

    #[test]
    fn test_missing_expiry_is_expired() {
        let config = RecotemConfig::new("http://localhost:8000");
        assert!(config.is_token_expired());
    }

    #[test]
    fn test_future_expiry_is_valid() {
        let (config, now) = config_expiring_in(300);
        assert!(!config.is_token_expired_at(now));
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let (config, now) = config_expiring_in(-60);
        assert!(config.is_token_expired_at(now));
    }

    #[test]
    fn test_expiry_inside_grace_window_is_expired() {
        let (config, now) = config_expiring_in(20);
        assert!(config.is_token_expired_at(now));
    }

    #[test]
    fn test_expiry_exactly_at_grace_boundary_is_expired() {
        let (config, now) = config_expiring_in(constants::TOKEN_EXPIRY_GRACE_SECS);
        assert!(config.is_token_expired_at(now));
    }

    #[test]
    fn test_clear_tokens_keeps_url_and_api_key() {
        let mut config = RecotemConfig {
            url: "http://recotem.example.com".to_string(),
            token: "legacy".to_string(),
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at: Some(Utc::now()),
            api_key: "rk_live".to_string(),
        };
        config.clear_tokens();
        assert!(config.token.is_empty());
        assert!(config.access_token.is_empty());
        assert!(config.refresh_token.is_empty());
        assert!(config.expires_at.is_none());
        assert_eq!(config.url, "http://recotem.example.com");
        assert_eq!(config.api_key, "rk_live");
    }

    #[test]
    fn test_set_jwt_drops_legacy_token() {
        let now = Utc::now();
        let mut config = RecotemConfig {
            token: "legacy".to_string(),
            ..RecotemConfig::new("http://localhost:8000")
        };
        config.set_jwt("a".to_string(), "r".to_string(), now);
        assert!(config.token.is_empty());
        assert_eq!(config.expires_at, Some(now + Duration::minutes(5)));
    }

    #[test]
    fn test_empty_fields_are_not_serialized() {
        let yaml = serde_yaml::to_string(&RecotemConfig::new("http://localhost:8000")).unwrap();
        assert_eq!(yaml, "url: http://localhost:8000\n");
    }
}
