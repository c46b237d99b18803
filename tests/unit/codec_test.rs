//! Decoding and encoding of MCR text

use mcrkit::mcr::{decode, duration, encode, remove_mouse, Command, KeyAction, MacroFile};

use crate::helpers::{fixture_commands, load_fixture};

const EXAMPLE: &str =
    "Keyboard : A : KeyDown\r\nDELAY : 100\r\nKeyboard : A : KeyUp\r\nMouse : 10 : 20 : move\r\n";

#[test]
fn end_to_end_example() {
    let commands = decode(EXAMPLE);
    assert_eq!(
        commands,
        vec![
            Command::key_down("A"),
            Command::delay(100),
            Command::key_up("A"),
            Command::mouse(10, 20, "move"),
        ]
    );
    assert_eq!(duration(&commands), 100);

    let filtered = remove_mouse(&commands);
    assert_eq!(filtered, commands[..3].to_vec());
    assert_eq!(
        encode(&filtered),
        "Keyboard : A : KeyDown\r\nDELAY : 100\r\nKeyboard : A : KeyUp"
    );
}

#[test]
fn decode_encode_decode_is_stable() {
    for name in ["login.mcr", "burst_a.mcr", "burst_b.mcr", "spaced_hello.mcr"] {
        let once = fixture_commands(name);
        let twice = decode(&encode(&once));
        assert_eq!(once, twice, "fixture {}", name);
    }
}

#[test]
fn fixture_decodes_with_expected_counts() {
    let file = MacroFile::parse_str(&load_fixture("login.mcr"));
    let counts = file.counts();
    assert_eq!(counts.keyboard, 12);
    assert_eq!(counts.mouse, 2);
    assert_eq!(counts.delay, 13);
    assert_eq!(counts.text, 0);
    assert_eq!(file.duration(), 1_610);
}

#[test]
fn lf_and_crlf_decode_the_same() {
    let crlf = "Keyboard : A : KeyDown\r\nDELAY : 5\r\n";
    let lf = "Keyboard : A : KeyDown\nDELAY : 5\n";
    assert_eq!(decode(crlf), decode(lf));
}

#[test]
fn unknown_and_malformed_lines_are_dropped() {
    let text = "\
keyboard : A : KeyDown
Keyboard : A : keydown
DELAY : -5
DELAY : abc
Mouse : 1 : 2 : 
Mouse : x : 2 : Move
Keyboard :  : KeyDown
DELAY : 7";
    assert_eq!(decode(text), vec![Command::delay(7)]);
}

#[test]
fn keyboard_key_may_contain_separator() {
    let commands = decode("Keyboard : Ctrl : Alt : KeyUp");
    assert_eq!(
        commands,
        vec![Command::keyboard("Ctrl : Alt", KeyAction::Up)]
    );
}

#[test]
fn mouse_action_keeps_inner_text() {
    let commands = decode("Mouse : 5 : 6 : Scroll : Down");
    assert_eq!(commands, vec![Command::mouse(5, 6, "Scroll : Down")]);
}

#[test]
fn text_commands_are_not_encoded() {
    let commands = vec![
        Command::delay(1),
        Command::text("ignored"),
        Command::delay(2),
    ];
    assert_eq!(encode(&commands), "DELAY : 1\r\nDELAY : 2");
}

#[test]
fn empty_sequence_encodes_to_empty_string() {
    assert_eq!(encode(&[]), "");
    assert!(decode("").is_empty());
}

#[test]
fn write_and_parse_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("out.mcr");
    let file = MacroFile::new(fixture_commands("login.mcr"));
    file.write(&path).unwrap();

    assert_eq!(MacroFile::parse(&path).unwrap(), file);
}

#[test]
fn invalid_utf8_is_replaced_not_rejected() {
    let mut bytes = b"DELAY : 3\r\nKeyboard : ".to_vec();
    bytes.push(0xFF);
    bytes.extend_from_slice(b" : KeyDown\r\n");

    let file = MacroFile::parse_reader(bytes.as_slice()).unwrap();
    assert_eq!(file.commands.len(), 2);
    assert_eq!(file.commands[1].key(), Some("\u{FFFD}"));
}
