//! Atomic file writes for the credential file.
//!
//! Data is written to a temporary sibling and renamed into place, so a
//! reader never observes a half-written config. Nothing here serializes
//! concurrent writers: two invocations saving at once both succeed and the
//! last rename wins.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Write `data` to `path` atomically by writing to a temporary sibling file
/// and then renaming it into place.
///
/// On Unix the file is created with mode `0600` because it holds
/// credentials.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory of `path` does not exist.
/// - The temp file cannot be created or written.
/// - The rename operation fails.
pub fn atomic_write_sync(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let temp_path = temp_sibling(path);

    if let Err(e) = write_private(&temp_path, data) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }

    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

fn write_private(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(data)?;
    file.sync_all()
}

/// Generate a unique temporary file path as a sibling of `path`.
fn temp_sibling(path: &Path) -> PathBuf {
    let random_suffix = fastrand::u64(..);
    let file_name = path
        .file_name()
        .map_or_else(|| "file".to_string(), |n| n.to_string_lossy().to_string());

    path.with_file_name(format!(".{file_name}.{random_suffix:016x}.tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_write_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        atomic_write_sync(&path, b"url: a\n").unwrap();
        atomic_write_sync(&path, b"url: b\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "url: b\n");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        atomic_write_sync(&path, b"url: a\n").unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_atomic_write_missing_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("config.yaml");
        assert!(atomic_write_sync(&path, b"x").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        atomic_write_sync(&path, b"token: x\n").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_temp_sibling_stays_in_directory() {
        let path = Path::new("/tmp/recotem/config.yaml");
        let temp = temp_sibling(path);
        assert_eq!(temp.parent(), path.parent());
        assert!(temp
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(".config.yaml."));
    }
}
