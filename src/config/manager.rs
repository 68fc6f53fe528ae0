use crate::config::models::RecotemConfig;
use crate::constants;
use crate::error::Error;
use crate::fs::{FileSystem, OsFileSystem};
use std::path::PathBuf;
use tracing::debug;

pub struct ConfigManager<F: FileSystem> {
    fs: F,
    config_dir: PathBuf,
}

impl ConfigManager<OsFileSystem> {
    /// Creates a new `ConfigManager` with the default filesystem and config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, Error> {
        let config_dir = get_config_dir()?;
        Ok(Self {
            fs: OsFileSystem,
            config_dir,
        })
    }
}

impl<F: FileSystem> ConfigManager<F> {
    pub const fn with_fs(fs: F, config_dir: PathBuf) -> Self {
        Self { fs, config_dir }
    }

    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }

    /// Loads `config.yaml`, writing a default one first if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or created.
    pub fn load_config(&self) -> Result<RecotemConfig, Error> {
        let config_path = self.config_path();
        if !self.fs.exists(&config_path) {
            debug!(path = %config_path.display(), "config file missing, creating default");
            let config = RecotemConfig::new(constants::DEFAULT_SERVER_URL);
            self.save_config(&config)?;
            return Ok(config);
        }

        debug!(path = %config_path.display(), "loading config");
        let content = self.fs.read_to_string(&config_path)?;
        if content.trim().is_empty() {
            return Ok(RecotemConfig::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Writes `config.yaml`, creating the config directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized or written.
    pub fn save_config(&self, config: &RecotemConfig) -> Result<(), Error> {
        let config_path = self.config_path();
        self.fs.create_dir_all(&self.config_dir)?;

        let content = serde_yaml::to_string(config)?;
        self.fs.write_all(&config_path, content.as_bytes())?;
        debug!(path = %config_path.display(), "config saved");
        Ok(())
    }
}

/// Gets the default configuration directory path.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn get_config_dir() -> Result<PathBuf, Error> {
    let home_dir = dirs::home_dir().ok_or(Error::HomeDirectoryNotFound)?;
    Ok(home_dir.join(constants::CONFIG_DIR_NAME))
}
