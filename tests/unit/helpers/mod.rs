//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use mcrkit::mcr::{decode, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Decode a fixture file
pub fn fixture_commands(name: &str) -> Vec<Command> {
    decode(&load_fixture(name))
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Key-down for each character
pub fn downs(word: &str) -> Vec<Command> {
    word.chars().map(|c| Command::key_down(c.to_string())).collect()
}

/// Down, hold, up, gap for each character
pub fn typed(word: &str, hold_ms: u64, gap_ms: u64) -> Vec<Command> {
    let mut commands = Vec::new();
    for c in word.chars() {
        let key = c.to_string();
        commands.push(Command::key_down(key.clone()));
        commands.push(Command::delay(hold_ms));
        commands.push(Command::key_up(key));
        commands.push(Command::delay(gap_ms));
    }
    commands
}

/// True if `needle` appears in `haystack` as a (not necessarily contiguous) subsequence
pub fn is_subsequence(needle: &[Command], haystack: &[Command]) -> bool {
    let mut it = haystack.iter();
    needle.iter().all(|n| it.any(|h| h == n))
}
