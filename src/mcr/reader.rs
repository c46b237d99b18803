//! MCR text decoder.
//!
//! Each non-blank, non-comment line is matched against three grammars.
//! The spacing around `:` is literal and matching is case-sensitive:
//!
//! ```text
//! Keyboard : <key> : <KeyDown|KeyUp>
//! DELAY : <digits>
//! Mouse : <digits> : <digits> : <action>
//! ```
//!
//! Lines that match none of them are dropped without an error. Decoding is
//! total: malformed input loses data, it never fails.
//!
//! # Example
//!
//! ```
//! use mcrkit::mcr::{decode, Command};
//!
//! let commands = decode("// recorded\r\nKeyboard : A : KeyDown\r\nDELAY : 100\r\nbogus\r\n");
//! assert_eq!(commands, vec![Command::key_down("A"), Command::delay(100)]);
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{rest, value},
    error::ErrorKind,
    IResult, Parser,
};
use tracing::{debug, trace};

use super::types::{Command, KeyAction};
use super::MacroFile;

/// Lines starting with this prefix are comments.
pub const COMMENT_PREFIX: &str = "//";

const FIELD_SEP: &str = " : ";

fn parse_key_action(input: &str) -> IResult<&str, KeyAction> {
    alt((
        value(KeyAction::Down, tag("KeyDown")),
        value(KeyAction::Up, tag("KeyUp")),
    ))
    .parse(input)
}

/// Split `<key> : <action>` at the first separator that is followed by a
/// valid action. The key is at least one character and may itself contain
/// `" : "`. Anything after the action is ignored.
fn parse_key_and_action(input: &str) -> IResult<&str, (&str, KeyAction)> {
    let candidates =
        (1..input.len()).filter(|&p| input.is_char_boundary(p) && input[p..].starts_with(FIELD_SEP));

    for pos in candidates {
        if let Ok((remaining, action)) = parse_key_action(&input[pos + FIELD_SEP.len()..]) {
            return Ok((remaining, (&input[..pos], action)));
        }
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        ErrorKind::TakeUntil,
    )))
}

fn parse_keyboard(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag("Keyboard : ")(input)?;
    let (input, (key, action)) = parse_key_and_action(input)?;
    Ok((input, Command::keyboard(key, action)))
}

fn parse_delay(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag("DELAY : ")(input)?;
    let (input, ms) = nom::character::complete::u64(input)?;
    Ok((input, Command::delay(ms)))
}

fn parse_mouse(input: &str) -> IResult<&str, Command> {
    let (input, _) = tag("Mouse : ")(input)?;
    let (input, x) = nom::character::complete::u64(input)?;
    let (input, _) = tag(FIELD_SEP)(input)?;
    let (input, y) = nom::character::complete::u64(input)?;
    let (input, _) = tag(FIELD_SEP)(input)?;
    let (input, action) = rest(input)?;

    // An empty action label is not a mouse command
    if action.is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            ErrorKind::NonEmpty,
        )));
    }

    Ok((input, Command::mouse(x, y, action)))
}

fn parse_line(input: &str) -> IResult<&str, Command> {
    alt((parse_keyboard, parse_delay, parse_mouse)).parse(input)
}

/// Decode MCR text into commands.
///
/// Line endings and surrounding whitespace are tolerated. Comments, blank
/// lines and unrecognised lines produce nothing.
pub fn decode(text: &str) -> Vec<Command> {
    let mut commands = Vec::new();
    let mut skipped = 0usize;

    for (line_num, line) in text.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
            continue;
        }

        match parse_line(trimmed) {
            Ok((_, command)) => commands.push(command),
            Err(_) => {
                skipped += 1;
                trace!(line = line_num + 1, content = trimmed, "skipping undecodable line");
            }
        }
    }

    if skipped > 0 {
        debug!(
            decoded = commands.len(),
            skipped, "decoded MCR text with unrecognised lines"
        );
    }

    commands
}

impl MacroFile {
    /// Read and decode an MCR file from a filesystem path.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, since recorders in the
    /// wild do not always write clean UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file cannot be read.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).with_context(|| format!("Failed to read file: {:?}", path))?;
        Ok(Self::parse_str(&String::from_utf8_lossy(&bytes)))
    }

    /// Read and decode MCR text from any reader.
    pub fn parse_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .context("Failed to read MCR input")?;
        Ok(Self::parse_str(&String::from_utf8_lossy(&bytes)))
    }

    /// Decode MCR text. Never fails.
    pub fn parse_str(content: &str) -> Self {
        Self::new(decode(content))
    }
}
