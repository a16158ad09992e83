pub(crate) mod error;
pub(crate) mod load_result;
pub(crate) mod stored_session;

pub use error::{Result as SessionStoreResult, SessionStoreError};
pub use load_result::LoadResult;
pub use stored_session::{SCHEMA_VERSION, StoredSession};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Loads the stored session.
///
/// Returns:
/// - `Ok(LoadResult { session: Some(...), corruption_error: None })` - loaded successfully
/// - `Ok(LoadResult { session: None, corruption_error: None })` - not signed in
/// - `Ok(LoadResult { session: None, corruption_error: Some(...) })` - file exists but corrupted
pub fn load(path: &Path) -> SessionStoreResult<LoadResult> {
    if !path.exists() {
        info!("No session file at {path:?}");
        return Ok(LoadResult {
            session: None,
            corruption_error: None,
        });
    }

    let contents =
        fs::read_to_string(path).map_err(|e| SessionStoreError::file_read(path.to_path_buf(), e))?;

    match serde_json::from_str::<StoredSession>(&contents) {
        Ok(session) if !session.token.trim().is_empty() => {
            info!(
                "Loaded session saved at {} (schema v{})",
                session.saved_at, session.schema_version
            );
            Ok(LoadResult {
                session: Some(session),
                corruption_error: None,
            })
        }
        Ok(_) => {
            warn!("Session file at {path:?} holds an empty token");
            Ok(LoadResult {
                session: None,
                corruption_error: Some("empty token".to_string()),
            })
        }
        Err(e) => {
            warn!("Session file corrupted at {path:?}: {e}");
            Ok(LoadResult {
                session: None,
                corruption_error: Some(e.to_string()),
            })
        }
    }
}

/// Saves the session using atomic write pattern.
///
/// 1. Writes to temp file
/// 2. Syncs to disk (fsync)
/// 3. Atomic rename to final location
pub fn save(path: &Path, session: &StoredSession) -> SessionStoreResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).map_err(|e| SessionStoreError::dir_creation(dir.to_path_buf(), e))?;
    }

    let temp_path = temp_path_for(path);
    let json = serde_json::to_string_pretty(session)?;

    {
        let mut file = fs::File::create(&temp_path)
            .map_err(|e| SessionStoreError::file_write(temp_path.clone(), e))?;

        restrict_permissions(&file).map_err(|e| SessionStoreError::file_write(temp_path.clone(), e))?;

        file.write_all(json.as_bytes())
            .map_err(|e| SessionStoreError::file_write(temp_path.clone(), e))?;

        file.sync_all()
            .map_err(|e| SessionStoreError::file_write(temp_path.clone(), e))?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SessionStoreError::atomic_rename(temp_path.clone(), path.to_path_buf(), e)
    })?;

    info!("Saved session to {path:?}");
    Ok(())
}

/// Removes the stored session. Returns whether a file was removed.
pub fn clear(path: &Path) -> SessionStoreResult<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!("Removed session file {path:?}");
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(SessionStoreError::file_remove(path.to_path_buf(), e)),
    }
}

/// Backs up a corrupted session file for debugging.
///
/// Renames `session.json` to `session.json.corrupted.{timestamp}`.
pub fn backup_corrupted(path: &Path) -> SessionStoreResult<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }

    let timestamp = chrono::Utc::now().format(DATE_FORMAT);
    let mut backup_name = path.as_os_str().to_os_string();
    backup_name.push(format!(".corrupted.{timestamp}"));
    let backup_path = PathBuf::from(backup_name);

    fs::rename(path, &backup_path).map_err(SessionStoreError::backup_failed)?;

    warn!("Backed up corrupted session to {backup_path:?}");
    Ok(Some(backup_path))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".tmp.{}", std::process::id()));
    PathBuf::from(name)
}

#[cfg(unix)]
fn restrict_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}
