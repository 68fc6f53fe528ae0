use recotem_cli::config::manager::ConfigManager;
use recotem_cli::config::models::RecotemConfig;
use recotem_cli::error::Error;
use recotem_cli::fs::FileSystem;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

// In-memory FileSystem for exercising the manager without touching disk
#[derive(Clone, Default)]
struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl MockFileSystem {
    fn add_file(&self, path: &Path, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
    }

    fn file_content(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|v| String::from_utf8_lossy(v).to_string())
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.file_content(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "File not found"))
    }

    fn write_all(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if *self.fail_writes.lock().unwrap() {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Mock I/O error on write",
            ));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

fn setup() -> (ConfigManager<MockFileSystem>, MockFileSystem, PathBuf) {
    let fs = MockFileSystem::default();
    let dir = PathBuf::from("/home/test/.recotem");
    let manager = ConfigManager::with_fs(fs.clone(), dir.clone());
    (manager, fs, dir.join("config.yaml"))
}

#[test]
fn test_missing_config_is_created_with_default_url() {
    let (manager, fs, path) = setup();

    let config = manager.load_config().unwrap();

    assert_eq!(config, RecotemConfig::new("http://localhost:8000"));
    assert_eq!(
        fs.file_content(&path).as_deref(),
        Some("url: http://localhost:8000\n")
    );
}

#[test]
fn test_legacy_config_with_token_only() {
    let (manager, fs, path) = setup();
    fs.add_file(&path, "url: http://recotem.internal:8000\ntoken: abc123\n");

    let config = manager.load_config().unwrap();

    assert_eq!(config.url, "http://recotem.internal:8000");
    assert_eq!(config.token, "abc123");
    assert!(config.access_token.is_empty());
    assert!(config.expires_at.is_none());
}

#[test]
fn test_full_config_survives_save_and_load() {
    let (manager, _fs, _path) = setup();
    let mut config = RecotemConfig {
        api_key: "rk_live_x".to_string(),
        ..RecotemConfig::new("https://recotem.example.com")
    };
    config.set_jwt("access".to_string(), "refresh".to_string(), chrono::Utc::now());

    manager.save_config(&config).unwrap();
    let loaded = manager.load_config().unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_logout_keeps_url_and_api_key_on_disk() {
    let (manager, fs, path) = setup();
    fs.add_file(
        &path,
        "url: http://h:8000\naccess_token: a\nrefresh_token: r\nexpires_at: 2030-01-01T00:00:00Z\napi_key: k\n",
    );

    let mut config = manager.load_config().unwrap();
    config.clear_tokens();
    manager.save_config(&config).unwrap();

    let content = fs.file_content(&path).unwrap();
    assert_eq!(content, "url: http://h:8000\napi_key: k\n");
}

#[test]
fn test_empty_file_loads_as_empty_config() {
    let (manager, fs, path) = setup();
    fs.add_file(&path, "   \n");

    let config = manager.load_config().unwrap();
    assert_eq!(config, RecotemConfig::default());
}

#[test]
fn test_invalid_yaml_is_reported() {
    let (manager, fs, path) = setup();
    fs.add_file(&path, "url: [unterminated\n");

    let err = manager.load_config().unwrap_err();
    assert!(matches!(err, Error::Yaml(_)));
}

#[test]
fn test_write_failure_surfaces_io_error() {
    let (manager, fs, _path) = setup();
    *fs.fail_writes.lock().unwrap() = true;

    let err = manager
        .save_config(&RecotemConfig::new("http://localhost:8000"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
