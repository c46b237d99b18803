//! MCR text encoder
//!
//! One line per command, joined with CRLF and no trailing separator.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::types::Command;
use super::MacroFile;

/// Record separator used on output.
pub const LINE_ENDING: &str = "\r\n";

impl Command {
    /// Render this command as an MCR line.
    ///
    /// Returns `None` for `Text`, which has no line form.
    pub fn to_line(&self) -> Option<String> {
        match self {
            Command::Keyboard { key, action } => {
                Some(format!("Keyboard : {} : {}", key, action.to_code()))
            }
            Command::Delay { ms } => Some(format!("DELAY : {}", ms)),
            Command::Mouse { x, y, action } => Some(format!("Mouse : {} : {} : {}", x, y, action)),
            Command::Text { .. } => None,
        }
    }
}

/// Encode commands as MCR text.
pub fn encode(commands: &[Command]) -> String {
    commands
        .iter()
        .filter_map(Command::to_line)
        .collect::<Vec<_>>()
        .join(LINE_ENDING)
}

impl MacroFile {
    /// Write the encoded recording to a path
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file =
            fs::File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;

        self.write_to(&mut file)
            .with_context(|| format!("Failed to write file: {:?}", path))
    }

    /// Write the encoded recording to a writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(self.encode().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Encode to MCR text
    pub fn encode(&self) -> String {
        encode(&self.commands)
    }
}
