//! `mcrkit stats`

use predicates::prelude::*;

use crate::helpers::Sandbox;

#[test]
fn stats_prints_counts_and_duration() {
    let sandbox = Sandbox::new();
    let file = sandbox.fixture("login.mcr");

    sandbox
        .mcrkit()
        .arg("stats")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Commands: 27 (keyboard: 12, mouse: 2, delay: 13)",
        ))
        .stdout(predicate::str::contains("Duration: 1610 ms (1.6s)"));
}

#[test]
fn stats_json_is_parseable() {
    let sandbox = Sandbox::new();
    let file = sandbox.fixture("burst_a.mcr");

    let output = sandbox
        .mcrkit()
        .args(["stats", "--json"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["duration_ms"], 700);
    assert_eq!(value["counts"]["keyboard"], 6);
    assert_eq!(value["counts"]["mouse"], 1);
}

#[test]
fn stats_rejects_empty_file() {
    let sandbox = Sandbox::new();
    let file = sandbox.write("empty.mcr", "");

    sandbox
        .mcrkit()
        .arg("stats")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("File is empty"));
}

#[test]
fn stats_rejects_file_over_configured_limit() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[limits]\nmax_file_size_mb = 1\n");
    let big = "DELAY : 1\r\n".repeat(200_000);
    let file = sandbox.write("big.mcr", &big);

    sandbox
        .mcrkit()
        .arg("stats")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("File too large"));
}

#[test]
fn stats_warns_about_extension() {
    let sandbox = Sandbox::new();
    let file = sandbox.write("macro.txt", "DELAY : 5");

    sandbox
        .mcrkit()
        .arg("stats")
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("does not have .mcr extension"));
}

#[test]
fn missing_file_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .mcrkit()
        .args(["stats", "nope.mcr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}
