//! mcrkit library
//!
//! Decoding, transforming and re-encoding MCR macro recordings. The core
//! engine lives in [`mcr`]; the remaining modules support the `mcrkit`
//! command line tool.

pub mod cli;
pub mod config;
pub mod files;
pub mod logging;
pub mod mcr;
pub mod progress;

pub use config::Config;
pub use mcr::{Command, HumanizationSettings, KeyAction, MacroFile};
