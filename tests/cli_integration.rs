use assert_cmd::Command;
use predicates::prelude::*;

fn pact_showcase() -> Command {
    let mut cmd = Command::cargo_bin("pact-showcase").unwrap();
    // Keep a user's config file out of the way
    cmd.env("XDG_CONFIG_HOME", env!("CARGO_TARGET_TMPDIR"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    pact_showcase()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Spring Boot + Kafka + Pact"));
}

#[test]
fn shows_version() {
    pact_showcase()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_subcommand() {
    pact_showcase()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn tree_prints_top_level() {
    pact_showcase()
        .args(["tree", "--ascii"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v [d] spring-kafka-pact-demo"))
        .stdout(predicate::str::contains("> [d] src"))
        .stdout(predicate::str::contains("main").not());
}

#[test]
fn tree_expand_all_prints_leaves() {
    pact_showcase()
        .args(["tree", "--ascii", "--expand-all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[f] MessageProviderPactTest.java"));
}

#[test]
fn tree_json_is_valid() {
    let output = pact_showcase().args(["tree", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "spring-kafka-pact-demo");
    assert_eq!(json["is_folder"], true);
}

#[test]
fn snippet_prints_code() {
    pact_showcase()
        .args(["snippet", "application.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bootstrap-servers: localhost:9092"));
}

#[test]
fn unknown_snippet_fails() {
    pact_showcase()
        .args(["snippet", "Missing.java"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No snippet titled 'Missing.java'"));
}

#[test]
fn generates_completions() {
    pact_showcase()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pact-showcase"));
}

#[test]
fn generates_man_page() {
    pact_showcase()
        .arg("man")
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH"));
}
