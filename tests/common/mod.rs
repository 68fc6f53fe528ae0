//! Shared helpers for the integration tests.

use std::path::{Path, PathBuf};

/// Cached binary path so each test does not resolve it again.
#[allow(deprecated)]
pub static RECOTEM_BIN: std::sync::LazyLock<PathBuf> =
    std::sync::LazyLock::new(|| assert_cmd::cargo::cargo_bin("recotem"));

/// `recotem` command with a private config directory.
pub fn recotem_cmd(config_dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(&*RECOTEM_BIN);
    cmd.env("RECOTEM_CONFIG_DIR", config_dir)
        .env_remove("RECOTEM_LOG")
        .env_remove("RECOTEM_LOG_FILE");
    cmd
}

/// Write `config.yaml` into `config_dir`.
pub fn write_config(config_dir: &Path, yaml: &str) {
    std::fs::create_dir_all(config_dir).unwrap();
    std::fs::write(config_dir.join("config.yaml"), yaml).unwrap();
}
