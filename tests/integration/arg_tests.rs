//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{no_cfg_command, speedcheck_command};

#[test]
fn test_help() {
    speedcheck_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--ping_delay"))
        .stdout(predicate::str::contains("--config_location"))
        .stdout(predicate::str::contains("Test Options"));
}

#[test]
fn test_version() {
    speedcheck_command(&["-V"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_ping_delay() {
    no_cfg_command()
        .arg("--ping_delay")
        .arg("soon")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--ping_delay' was set with an invalid value",
        ));
}

#[test]
fn test_invalid_download_delay() {
    no_cfg_command()
        .arg("--download_delay")
        .arg("18446744073709551616")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--download_delay' was set with an invalid value",
        ));
}

#[test]
fn test_negative_upload_delay() {
    // Fails in clap, since it looks like an unknown flag.
    no_cfg_command()
        .arg("--upload_delay")
        .arg("-1000")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_invalid_seed() {
    no_cfg_command()
        .arg("--seed")
        .arg("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--seed' was set with an invalid value",
        ));
}

#[test]
fn test_unknown_flag() {
    no_cfg_command()
        .arg("--rate")
        .arg("1000")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
