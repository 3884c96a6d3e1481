//! Common test utilities and fixtures
//!
//! This module provides shared test infrastructure

#![allow(dead_code)]

use std::path::PathBuf;

/// Get the path to the test fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get a path to a specific fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

pub fn valid_config_fixture() -> PathBuf {
    fixture_path("valid_config.toml")
}

pub fn invalid_config_fixture() -> PathBuf {
    fixture_path("invalid_config.toml")
}

/// Two general managers, two unique projects and one programmer
pub fn team_roster_fixture() -> PathBuf {
    fixture_path("team_roster.toml")
}

pub fn unknown_project_roster_fixture() -> PathBuf {
    fixture_path("unknown_project_roster.toml")
}

pub fn invalid_salary_roster_fixture() -> PathBuf {
    fixture_path("invalid_salary_roster.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_exist() {
        for path in [
            valid_config_fixture(),
            invalid_config_fixture(),
            team_roster_fixture(),
            unknown_project_roster_fixture(),
            invalid_salary_roster_fixture(),
        ] {
            assert!(path.exists(), "Missing fixture: {}", path.display());
        }
    }
}
