//! Output path derivation and writing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::backup::{create_backup, write_atomic};

/// Where a transformed file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// A new file; never the input itself
    File(PathBuf),
    /// Overwrite the input
    InPlace(PathBuf),
}

impl OutputTarget {
    /// Pick the target from the CLI flags.
    ///
    /// Without `-o` or `--in-place`, the output sits next to the input with
    /// `prefix` prepended to its file name. An `-o` naming the input itself
    /// is treated as `--in-place`.
    pub fn resolve(input: &Path, output: Option<&Path>, in_place: bool, prefix: &str) -> Self {
        if in_place {
            return OutputTarget::InPlace(input.to_path_buf());
        }
        match output {
            Some(path) if is_same_file(input, path) => OutputTarget::InPlace(input.to_path_buf()),
            Some(path) => OutputTarget::File(path.to_path_buf()),
            None => OutputTarget::File(prefixed_path(input, prefix)),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            OutputTarget::File(path) | OutputTarget::InPlace(path) => path,
        }
    }

    /// Write `contents`, backing up first for in-place writes when `backup` is set.
    ///
    /// Returns whether a new backup was created.
    pub fn write(&self, contents: &str, backup: bool) -> Result<bool> {
        match self {
            OutputTarget::InPlace(path) => {
                let created = backup && create_backup(path)?;
                write_atomic(path, contents)?;
                Ok(created)
            }
            OutputTarget::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
                fs::write(path, contents)
                    .with_context(|| format!("Failed to write output file: {}", path.display()))?;
                Ok(false)
            }
        }
    }
}

/// Whether `a` and `b` name the same file, resolving links and `..` when both exist.
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// `<dir>/<prefix><filename>` for `input`.
pub fn prefixed_path(input: &Path, prefix: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}", prefix, name))
}
