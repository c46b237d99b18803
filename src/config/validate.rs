//! Boundary validation for user-supplied settings.
//!
//! The engine itself accepts any numbers. These checks run where values
//! enter the program: config loading and CLI flag overrides.

use std::ops::RangeInclusive;

use super::types::{Config, LimitsConfig};
use crate::mcr::HumanizationSettings;

pub const DELAY_VARIATION_RANGE: RangeInclusive<f64> = 1.0..=100.0;
pub const TYPING_ERRORS_RANGE: RangeInclusive<f64> = 0.0..=10.0;
pub const HESITATION_RANGE: RangeInclusive<f64> = 0.0..=50.0;

/// A setting outside the range the tool accepts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("Target duration must be positive (got {0} ms)")]
    NonPositiveTarget(i64),
    #[error("limits.max_file_size_mb must be > 0")]
    ZeroFileSizeLimit,
    #[error("limits.max_output_commands must be > 0")]
    ZeroOutputLimit,
    #[error(
        "Output would hold {commands} commands ({len} x {reps}), over the limit of {limit}"
    )]
    OutputTooLarge {
        len: usize,
        reps: u64,
        commands: String,
        limit: u64,
    },
}

fn check_range(
    field: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Result<(), SettingsError> {
    if !value.is_finite() {
        return Err(SettingsError::NotFinite { field });
    }
    if !range.contains(&value) {
        return Err(SettingsError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}

/// Check each percentage against its accepted range.
pub fn validate_settings(settings: &HumanizationSettings) -> Result<(), SettingsError> {
    check_range(
        "delay_variation_pct",
        settings.delay_variation_pct,
        &DELAY_VARIATION_RANGE,
    )?;
    check_range(
        "typing_errors_pct",
        settings.typing_errors_pct,
        &TYPING_ERRORS_RANGE,
    )?;
    check_range(
        "hesitation_pauses_pct",
        settings.hesitation_pauses_pct,
        &HESITATION_RANGE,
    )?;
    Ok(())
}

/// Accept a lengthen target in milliseconds; zero and negatives are rejected.
pub fn validate_target(target_ms: i64) -> Result<u64, SettingsError> {
    if target_ms <= 0 {
        return Err(SettingsError::NonPositiveTarget(target_ms));
    }
    Ok(target_ms as u64)
}

/// Reject a repetition count whose output would exceed `limits.max_output_commands`.
pub fn validate_output_len(
    len: usize,
    reps: u64,
    limits: &LimitsConfig,
) -> Result<(), SettingsError> {
    let total = u64::try_from(len).ok().and_then(|len| len.checked_mul(reps));
    match total {
        Some(total) if total <= limits.max_output_commands => Ok(()),
        _ => Err(SettingsError::OutputTooLarge {
            len,
            reps,
            commands: total.map_or_else(|| "more than u64::MAX".to_string(), |t| t.to_string()),
            limit: limits.max_output_commands,
        }),
    }
}

pub fn validate_config(config: &Config) -> Result<(), SettingsError> {
    validate_settings(&config.humanization)?;
    if config.limits.max_file_size_mb == 0 {
        return Err(SettingsError::ZeroFileSizeLimit);
    }
    if config.limits.max_output_commands == 0 {
        return Err(SettingsError::ZeroOutputLimit);
    }
    Ok(())
}
