//! Common-sequence discovery

use mcrkit::mcr::{find_common_sequences, Command, MIN_PATTERN_LEN};

use crate::helpers::{downs, fixture_commands, typed};

#[test]
fn sequence_against_itself_yields_whole_sequence() {
    let s = downs("abcdefgh");
    assert_eq!(find_common_sequences(&s, &s), vec![s]);
}

#[test]
fn fixtures_share_hello() {
    let a = fixture_commands("burst_a.mcr");
    let b = fixture_commands("burst_b.mcr");
    assert_eq!(find_common_sequences(&a, &b), vec![downs("HELLO")]);
}

#[test]
fn delays_do_not_break_keyboard_runs() {
    let a = fixture_commands("spaced_hello.mcr");
    let b = fixture_commands("burst_b.mcr");
    assert_eq!(find_common_sequences(&a, &b), vec![downs("HELLO")]);
}

#[test]
fn down_up_pairs_match_across_timing_differences() {
    let a = typed("login", 80, 120);
    let b = typed("login", 30, 400);
    let patterns = find_common_sequences(&a, &b);
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].len(), 10);
    assert!(patterns[0].iter().all(Command::is_keyboard));
}

#[test]
fn nothing_shared_gives_empty_list() {
    assert!(find_common_sequences(&downs("abcdef"), &downs("ghijkl")).is_empty());
}

#[test]
fn every_pattern_meets_minimum_length() {
    let a = downs("the quick brown fox jumps over the lazy dog");
    let b = downs("a quick fox and a lazy dog");
    for pattern in find_common_sequences(&a, &b) {
        assert!(pattern.len() >= MIN_PATTERN_LEN);
    }
}
