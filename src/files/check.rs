//! Pre-flight checks on input files.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use humansize::{format_size, BINARY};

pub const MCR_EXTENSION: &str = "mcr";

/// What the checks learned about an accepted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputInfo {
    pub size: u64,
    pub has_mcr_extension: bool,
}

pub fn has_mcr_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(MCR_EXTENSION))
}

/// Reject missing, empty, or oversized files.
///
/// A wrong extension is reported through [`InputInfo`] rather than rejected.
pub fn check_input(path: &Path, max_bytes: u64) -> Result<InputInfo> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }

    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;
    if !metadata.is_file() {
        bail!("Not a file: {}", path.display());
    }

    let size = metadata.len();
    if size == 0 {
        bail!("File is empty: {}", path.display());
    }
    if size > max_bytes {
        bail!(
            "File too large: {} is {} (limit {})",
            path.display(),
            format_size(size, BINARY),
            format_size(max_bytes, BINARY)
        );
    }

    Ok(InputInfo {
        size,
        has_mcr_extension: has_mcr_extension(path),
    })
}
