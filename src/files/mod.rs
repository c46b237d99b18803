//! File-level helpers for the command line tool.

pub mod backup;
pub mod check;
pub mod output;

pub use backup::{backup_path_for, create_backup, has_backup, restore_from_backup};
pub use check::{check_input, has_mcr_extension, InputInfo};
pub use output::{is_same_file, prefixed_path, OutputTarget};
