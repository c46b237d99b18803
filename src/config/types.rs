//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::mcr::HumanizationSettings;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub humanization: HumanizationSettings,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Where and how transformed files are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Prepended to the input filename when no output path is given
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Create `<file>.bak` before overwriting a file in place
    #[serde(default = "default_backup")]
    pub backup: bool,
}

pub fn default_prefix() -> String {
    "humanized_".to_string()
}

pub fn default_backup() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            backup: default_backup(),
        }
    }
}

/// Input file limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,
    /// Largest command count a lengthened recording may reach
    #[serde(default = "default_max_output_commands")]
    pub max_output_commands: u64,
}

pub fn default_max_file_size_mb() -> u64 {
    10
}

pub fn default_max_output_commands() -> u64 {
    5_000_000
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size_mb(),
            max_output_commands: default_max_output_commands(),
        }
    }
}

impl LimitsConfig {
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}
