//! Integration tests for `capsid init`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn init_with_flags_writes_local_properties() {
    let env = TestEnv::new();

    env.capsid()
        .args(["init", "--game-dir", "/opt/pz", "--idea-home", "/opt/idea"])
        .assert()
        .success()
        .stdout(predicate::str::contains("local.properties"));

    let written = env.read("local.properties");
    assert!(written.contains("gameDir=/opt/pz"));
    assert!(written.contains("ideaHome=/opt/idea"));
    assert!(written.starts_with('#'), "expected commented header");

    let gitignore = env.read(".gitignore");
    assert!(gitignore.lines().any(|l| l == "local.properties"));
}

#[test]
fn init_never_overwrites_an_existing_file() {
    let env = TestEnv::new();
    env.write_properties("gameDir=/keep/me\n");

    env.capsid()
        .args(["init", "--game-dir", "/opt/pz", "--idea-home", "/opt/idea"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(env.read("local.properties"), "gameDir=/keep/me\n");
}

#[test]
fn init_falls_back_to_environment_values() {
    let env = TestEnv::new();

    env.capsid()
        .env("PZ_GAME_DIR", "/env/pz")
        .env("IDEA_HOME", "/env/idea")
        .arg("init")
        .assert()
        .success();

    let written = env.read("local.properties");
    assert!(written.contains("gameDir=/env/pz"));
    assert!(written.contains("ideaHome=/env/idea"));
}

#[test]
fn init_without_discoverable_idea_home_fails() {
    let env = TestEnv::new();

    env.capsid()
        .env("PZ_GAME_DIR", "/env/pz")
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ideaHome"))
        .stderr(predicate::str::contains("--idea-home"));

    assert!(!env.path().join("local.properties").exists());
}

#[test]
fn init_json_reports_the_written_values() {
    let env = TestEnv::new();

    let output = env
        .capsid()
        .args([
            "--json",
            "init",
            "--game-dir",
            "/opt/pz",
            "--idea-home",
            "/opt/idea",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["created"], true);
    assert_eq!(parsed["game_dir"], "/opt/pz");
    assert_eq!(parsed["idea_home"], "/opt/idea");
}
