//! Backup utilities for macro files.
//!
//! In-place writes keep the previous contents in `<file>.bak` so that
//! `mcrkit restore` can bring them back.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// `path` with `suffix` appended to the full file name.
fn with_suffix(path: &Path, suffix: impl AsRef<OsStr>) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Get the backup path for a given file.
///
/// The backup path is the original path with `.bak` appended.
pub fn backup_path_for(path: &Path) -> PathBuf {
    with_suffix(path, ".bak")
}

pub fn has_backup(path: &Path) -> bool {
    backup_path_for(path).exists()
}

/// Create a backup of the given file if one doesn't already exist.
///
/// Returns `Ok(true)` if a new backup was created, `Ok(false)` if one already existed.
/// The oldest backup wins, so repeated in-place runs can still be undone in one step.
pub fn create_backup(path: &Path) -> Result<bool> {
    let backup = backup_path_for(path);
    if backup.exists() {
        debug!(backup = %backup.display(), "backup already present");
        return Ok(false);
    }
    fs::copy(path, &backup)
        .with_context(|| format!("Failed to create backup: {}", backup.display()))?;
    debug!(backup = %backup.display(), "backup created");
    Ok(true)
}

/// Write `contents` to `path` through a sibling temp file and a rename.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let temp_path = with_suffix(path, ".tmp");

    fs::write(&temp_path, contents)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e).with_context(|| format!("Failed to replace file: {}", path.display()));
    }

    Ok(())
}

/// Restore a file from its backup and delete the backup.
pub fn restore_from_backup(path: &Path) -> Result<()> {
    let backup = backup_path_for(path);

    if !backup.exists() {
        anyhow::bail!("No backup exists for: {}", path.display());
    }

    let contents = fs::read(&backup)
        .with_context(|| format!("Failed to read backup: {}", backup.display()))?;
    let temp_path = with_suffix(path, ".tmp");
    fs::write(&temp_path, contents)
        .with_context(|| format!("Failed to copy backup to temp file: {}", backup.display()))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e)
            .with_context(|| format!("Failed to restore from backup: {}", path.display()));
    }

    // Best-effort
    let _ = fs::remove_file(&backup);

    Ok(())
}
