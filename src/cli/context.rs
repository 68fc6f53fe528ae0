use super::OutputFormat;
use crate::auth::AuthResolver;
use crate::client::RecotemClient;
use crate::config::manager::ConfigManager;
use crate::config::models::RecotemConfig;
use crate::error::Error;
use crate::fs::OsFileSystem;
use crate::output::Output;

/// Per-invocation state handed to every command handler.
pub struct CommandContext {
    pub format: OutputFormat,
    /// `--api-key`, applied to the loaded config but never saved.
    pub api_key: Option<String>,
    pub output: Output,
    pub manager: ConfigManager<OsFileSystem>,
}

impl CommandContext {
    #[must_use]
    pub fn new(
        format: OutputFormat,
        api_key: Option<String>,
        output: Output,
        manager: ConfigManager<OsFileSystem>,
    ) -> Self {
        Self {
            format,
            api_key: api_key.filter(|key| !key.is_empty()),
            output,
            manager,
        }
    }

    /// Stored config with the `--api-key` override applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or created.
    pub fn effective_config(&self) -> Result<RecotemConfig, Error> {
        let mut config = self.manager.load_config()?;
        if let Some(key) = &self.api_key {
            config.api_key.clone_from(key);
        }
        Ok(config)
    }

    /// Client for the configured server with no credential attached.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded or the client built.
    pub fn anonymous_client(&self) -> Result<RecotemClient, Error> {
        let config = self.manager.load_config()?;
        RecotemClient::new(&config.url)
    }

    /// Client carrying the highest-priority stored credential.
    ///
    /// An expiring access token is refreshed first and the renewed token is
    /// saved before the client is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAuthenticated`], [`Error::TokenRefresh`], or a
    /// config error.
    pub async fn authenticated_client(&self) -> Result<RecotemClient, Error> {
        let mut config = self.effective_config()?;
        let client = RecotemClient::new(&config.url)?;
        let resolved = AuthResolver::default().resolve(&mut config, &client).await?;
        if resolved.refreshed {
            self.manager.save_config(&config)?;
        }
        Ok(client.with_credential(resolved.credential))
    }
}
