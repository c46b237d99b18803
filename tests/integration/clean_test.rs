//! `mcrkit clean` and `mcrkit restore`

use predicates::prelude::*;

use mcrkit::mcr::decode;

use crate::helpers::Sandbox;

#[test]
fn clean_writes_prefixed_output_by_default() {
    let sandbox = Sandbox::new();
    let file = sandbox.fixture("login.mcr");

    sandbox
        .mcrkit()
        .args(["clean", "--mouse"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 commands"));

    let out = decode(&sandbox.read("humanized_login.mcr"));
    assert_eq!(out.len(), 25);
    assert!(!out.iter().any(|c| c.is_mouse()));
    // Input untouched
    assert_eq!(decode(&sandbox.read("login.mcr")).len(), 27);
}

#[test]
fn clean_output_uses_crlf_without_trailing_separator() {
    let sandbox = Sandbox::new();
    let file = sandbox.write("a.mcr", "Mouse : 1 : 1 : Move\nDELAY : 0\nDELAY : 5\nDELAY : 6\n");

    sandbox
        .mcrkit()
        .args(["clean", "--mouse", "--zero-delays", "-o", "out.mcr"])
        .arg(&file)
        .assert()
        .success();

    assert_eq!(sandbox.read("out.mcr"), "DELAY : 5\r\nDELAY : 6");
}

#[test]
fn clean_requires_a_filter() {
    let sandbox = Sandbox::new();
    let file = sandbox.fixture("login.mcr");

    sandbox
        .mcrkit()
        .arg("clean")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to clean"));
}

#[test]
fn in_place_then_restore_round_trips() {
    let sandbox = Sandbox::new();
    let file = sandbox.fixture("login.mcr");
    let original = sandbox.read("login.mcr");

    sandbox
        .mcrkit()
        .args(["clean", "--zero-delays", "--in-place"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup saved to"));

    assert_ne!(sandbox.read("login.mcr"), original);
    assert_eq!(sandbox.read("login.mcr.bak"), original);

    sandbox
        .mcrkit()
        .arg("restore")
        .arg(&file)
        .assert()
        .success();

    assert_eq!(sandbox.read("login.mcr"), original);
    assert!(!sandbox.path().join("login.mcr.bak").exists());
}

#[test]
fn in_place_honours_backup_setting() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[output]\nbackup = false\n");
    let file = sandbox.fixture("login.mcr");

    sandbox
        .mcrkit()
        .args(["clean", "--mouse", "--in-place"])
        .arg(&file)
        .assert()
        .success();

    assert!(!sandbox.path().join("login.mcr.bak").exists());
}

#[test]
fn restore_without_backup_fails() {
    let sandbox = Sandbox::new();
    let file = sandbox.fixture("login.mcr");

    sandbox
        .mcrkit()
        .arg("restore")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No backup found"));
}

#[test]
fn output_naming_the_input_is_written_in_place() {
    let sandbox = Sandbox::new();
    let file = sandbox.fixture("login.mcr");
    let original = sandbox.read("login.mcr");

    sandbox
        .mcrkit()
        .args(["clean", "--mouse", "-o", "login.mcr"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("File modified in-place"));

    assert_eq!(sandbox.read("login.mcr.bak"), original);
    assert_eq!(decode(&sandbox.read("login.mcr")).len(), 25);
}

#[test]
fn output_and_in_place_are_exclusive() {
    let sandbox = Sandbox::new();
    let file = sandbox.fixture("login.mcr");

    sandbox
        .mcrkit()
        .args(["clean", "--mouse", "--in-place", "-o", "x.mcr"])
        .arg(&file)
        .assert()
        .failure();
}
