//! CLI surface tests using the real gitpip binary

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_help_output() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("remove"))
        .stdout(predicate::str::contains("users"))
        .stdout(predicate::str::contains("locals"));
}

#[test]
fn test_version_output() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gitpip"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let env = TestEnv::new();
    env.cmd().arg("frobnicate").assert().failure();
}

#[test]
fn test_install_requires_packages() {
    let env = TestEnv::new();
    env.cmd()
        .arg("install")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PACKAGE"));
}

#[test]
fn test_remove_requires_packages() {
    let env = TestEnv::new();
    env.cmd().arg("remove").assert().failure();
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitpip"));
}

#[test]
fn test_completions_unknown_shell_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}
