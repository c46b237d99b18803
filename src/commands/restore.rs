//! Restore command handler

use std::path::Path;

use anyhow::{bail, Result};

use mcrkit::files::{backup_path_for, has_backup, restore_from_backup};

#[cfg(not(tarpaulin_include))]
pub fn handle(path: &Path) -> Result<()> {
    if !has_backup(path) {
        bail!(
            "No backup found: {}\nHint: backups are created by --in-place runs",
            backup_path_for(path).display()
        );
    }
    restore_from_backup(path)?;
    println!("Restored {} from backup", path.display());
    Ok(())
}
