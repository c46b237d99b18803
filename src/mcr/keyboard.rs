//! QWERTY physical-adjacency table used to pick plausible typos.

use rand::seq::SliceRandom;
use rand::Rng;

/// Keys physically next to `key` on a QWERTY layout.
///
/// Lookup is by the uppercased key name; keys outside the letter block
/// have no neighbours.
pub fn adjacent_keys(key: &str) -> &'static [&'static str] {
    match key.to_uppercase().as_str() {
        "Q" => &["W", "A"],
        "W" => &["Q", "E", "S"],
        "E" => &["W", "R", "D"],
        "R" => &["E", "T", "F"],
        "T" => &["R", "Y", "G"],
        "Y" => &["T", "U", "H"],
        "U" => &["Y", "I", "J"],
        "I" => &["U", "O", "K"],
        "O" => &["I", "P", "L"],
        "P" => &["O", "L"],
        "A" => &["Q", "S", "Z"],
        "S" => &["A", "W", "D", "X"],
        "D" => &["S", "E", "F", "C"],
        "F" => &["D", "R", "G", "V"],
        "G" => &["F", "T", "H", "B"],
        "H" => &["G", "Y", "J", "N"],
        "J" => &["H", "U", "K", "M"],
        "K" => &["J", "I", "L"],
        "L" => &["K", "O", "P"],
        "Z" => &["A", "X"],
        "X" => &["Z", "S", "C"],
        "C" => &["X", "D", "V"],
        "V" => &["C", "F", "B"],
        "B" => &["V", "G", "N"],
        "N" => &["B", "H", "M"],
        "M" => &["N", "J"],
        _ => &[],
    }
}

/// Pick a neighbouring key uniformly at random, or `None` if the key has
/// no entry in the table.
pub fn random_wrong_key<R: Rng + ?Sized>(key: &str, rng: &mut R) -> Option<&'static str> {
    adjacent_keys(key).choose(rng).copied()
}
