//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::speedcheck_command;

#[test]
fn test_toml_mismatch_type() {
    speedcheck_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

/// This test isn't really needed as this is technically covered by TOML spec.
#[test]
fn test_duplicate_key() {
    speedcheck_command(&["-C", "./tests/invalid_configs/duplicate_key.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate key"));
}

#[test]
fn test_invalid_delay() {
    speedcheck_command(&["-C", "./tests/invalid_configs/invalid_delay.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'test.download_delay' was set with an invalid value",
        ));
}

#[test]
fn test_invalid_seed() {
    speedcheck_command(&["-C", "./tests/invalid_configs/invalid_seed.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

/// Checks for if a hex is valid
#[test]
fn test_invalid_colour_hex() {
    speedcheck_command(&["-C", "./tests/invalid_configs/invalid_colour_hex.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hex color"))
        .stderr(predicate::str::contains("styles.slow_color"));
}

/// Checks for if a hex is too long
#[test]
fn test_invalid_colour_hex_2() {
    speedcheck_command(&["-C", "./tests/invalid_configs/invalid_colour_hex_2.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hex color"));
}

#[test]
fn test_invalid_colour_name() {
    speedcheck_command(&["-C", "./tests/invalid_configs/invalid_colour_name.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid named color"))
        .stderr(predicate::str::contains("styles.highlight_color"));
}

#[test]
fn test_invalid_colour_rgb() {
    speedcheck_command(&["-C", "./tests/invalid_configs/invalid_colour_rgb.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid RGB"));
}
