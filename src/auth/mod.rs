//! Credential selection for outgoing requests.
//!
//! Each scheme is a [`CredentialProvider`]. The [`AuthResolver`] walks its
//! providers in priority order (API key, JWT access token, legacy token) and
//! the first usable one supplies the request header. An access token close
//! to expiry is refreshed before it is handed out.

use crate::client::RecotemClient;
use crate::config::models::RecotemConfig;
use crate::constants;
use crate::error::Error;
use chrono::Utc;
use tracing::debug;

/// The single auth header attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    ApiKey(String),
    Bearer(String),
    Token(String),
}

impl Credential {
    #[must_use]
    pub const fn header_name(&self) -> &'static str {
        match self {
            Self::ApiKey(_) => constants::HEADER_X_API_KEY,
            Self::Bearer(_) | Self::Token(_) => constants::HEADER_AUTHORIZATION,
        }
    }

    #[must_use]
    pub fn header_value(&self) -> String {
        match self {
            Self::ApiKey(key) => key.clone(),
            Self::Bearer(token) => format!("{} {token}", constants::HEADER_BEARER),
            Self::Token(token) => format!("{} {token}", constants::HEADER_TOKEN),
        }
    }
}

pub trait CredentialProvider: Send + Sync {
    /// Short scheme name used in logs.
    fn name(&self) -> &'static str;

    fn is_usable(&self, config: &RecotemConfig) -> bool;

    /// Whether the stored credential must be renewed before use.
    fn needs_refresh(&self, _config: &RecotemConfig) -> bool {
        false
    }

    fn credential(&self, config: &RecotemConfig) -> Credential;
}

pub struct ApiKeyProvider;

impl CredentialProvider for ApiKeyProvider {
    fn name(&self) -> &'static str {
        "api-key"
    }

    fn is_usable(&self, config: &RecotemConfig) -> bool {
        !config.api_key.is_empty()
    }

    fn credential(&self, config: &RecotemConfig) -> Credential {
        Credential::ApiKey(config.api_key.clone())
    }
}

pub struct JwtProvider;

impl CredentialProvider for JwtProvider {
    fn name(&self) -> &'static str {
        "jwt"
    }

    fn is_usable(&self, config: &RecotemConfig) -> bool {
        !config.access_token.is_empty()
    }

    fn needs_refresh(&self, config: &RecotemConfig) -> bool {
        config.is_token_expired()
    }

    fn credential(&self, config: &RecotemConfig) -> Credential {
        Credential::Bearer(config.access_token.clone())
    }
}

pub struct LegacyTokenProvider;

impl CredentialProvider for LegacyTokenProvider {
    fn name(&self) -> &'static str {
        "token"
    }

    fn is_usable(&self, config: &RecotemConfig) -> bool {
        !config.token.is_empty()
    }

    fn credential(&self, config: &RecotemConfig) -> Credential {
        Credential::Token(config.token.clone())
    }
}

/// Outcome of credential resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAuth {
    pub credential: Credential,
    /// Set when the access token was renewed and the config must be saved.
    pub refreshed: bool,
}

pub struct AuthResolver {
    providers: Vec<Box<dyn CredentialProvider>>,
}

impl Default for AuthResolver {
    fn default() -> Self {
        Self {
            providers: vec![
                Box::new(ApiKeyProvider),
                Box::new(JwtProvider),
                Box::new(LegacyTokenProvider),
            ],
        }
    }
}

impl AuthResolver {
    #[must_use]
    pub fn new(providers: Vec<Box<dyn CredentialProvider>>) -> Self {
        Self { providers }
    }

    /// First provider that can authenticate with `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAuthenticated`] when no credential is stored.
    pub fn select(&self, config: &RecotemConfig) -> Result<&dyn CredentialProvider, Error> {
        self.providers
            .iter()
            .map(|provider| &**provider)
            .find(|provider| provider.is_usable(config))
            .ok_or(Error::NotAuthenticated)
    }

    /// Pick the credential for this invocation, refreshing an expiring access
    /// token through `client` first.
    ///
    /// On refresh the new access token and expiry are written into `config`;
    /// persisting it is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAuthenticated`] when nothing is stored and
    /// [`Error::TokenRefresh`] when renewal fails for any reason.
    pub async fn resolve(
        &self,
        config: &mut RecotemConfig,
        client: &RecotemClient,
    ) -> Result<ResolvedAuth, Error> {
        let provider = self.select(config)?;
        debug!(scheme = provider.name(), "selected credential scheme");

        if !provider.needs_refresh(config) {
            return Ok(ResolvedAuth {
                credential: provider.credential(config),
                refreshed: false,
            });
        }

        debug!(expires_at = ?config.expires_at, "access token expired or expiring, refreshing");
        if config.refresh_token.is_empty() {
            return Err(Error::TokenRefresh {
                reason: "no refresh token available".to_string(),
            });
        }

        let access = client
            .refresh_access_token(&config.refresh_token)
            .await
            .map_err(|e| Error::TokenRefresh {
                reason: e.to_string(),
            })?;
        config.set_refreshed_access(access, Utc::now());
        debug!(expires_at = ?config.expires_at, "access token refreshed");

        Ok(ResolvedAuth {
            credential: provider.credential(config),
            refreshed: true,
        })
    }
}
