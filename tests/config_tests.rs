//! Configuration system tests
//!
//! Tests configuration loading, validation, and environment overrides

mod common;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use ksd_personnel::config::AppConfig;
use ksd_personnel::Error;

/// Test fixture for configuration testing
struct ConfigFixture {
    _temp_dir: TempDir,
    config_path: PathBuf,
}

impl ConfigFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("personnel.toml");
        Self {
            _temp_dir: temp_dir,
            config_path,
        }
    }

    fn write_config(&self, content: &str) {
        fs::write(&self.config_path, content).unwrap();
    }

    fn path(&self) -> &str {
        self.config_path.to_str().unwrap()
    }
}

fn personnel_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("ksd-personnel").unwrap();
    for var in ["KSD_ROSTER", "KSD_REPORT_FORMAT", "KSD_LOG_LEVEL", "KSD_LOG_FILE"] {
        cmd.env_remove(var);
    }
    cmd
}

// ─────────────────────────────────────────────────────────────────
// Valid Configuration Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_valid_fixture_loads() {
    let path = common::valid_config_fixture();
    let config = AppConfig::load(path.to_str()).unwrap();

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.max_files, 3);
    assert_eq!(config.report.format, "json");
}

#[test]
fn test_empty_config_uses_defaults() {
    let fixture = ConfigFixture::new();
    fixture.write_config("");

    personnel_cmd()
        .arg("config")
        .arg("validate")
        .arg("--config")
        .arg(fixture.path())
        .assert()
        .success();
}

#[test]
fn test_config_format_drives_report() {
    personnel_cmd()
        .arg("report")
        .arg("--config")
        .arg(common::valid_config_fixture())
        .assert()
        .success()
        .stdout(predicates::str::contains("\"general_manager_count\": 1"));
}

#[test]
fn test_cli_format_overrides_config() {
    personnel_cmd()
        .arg("report")
        .arg("--config")
        .arg(common::valid_config_fixture())
        .arg("--format")
        .arg("text")
        .assert()
        .success()
        .stdout(predicates::str::contains("Compensation Report"));
}

#[test]
fn test_config_roster_setting() {
    let fixture = ConfigFixture::new();
    fixture.write_config(&format!(
        "[report]\nroster = {:?}\n",
        common::team_roster_fixture().to_str().unwrap()
    ));

    personnel_cmd()
        .arg("report")
        .arg("--config")
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Registered General Managers: 2"));
}

// ─────────────────────────────────────────────────────────────────
// Invalid Configuration Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_invalid_fixture_names_field() {
    let path = common::invalid_config_fixture();
    let err = AppConfig::load(path.to_str()).unwrap_err();

    assert_eq!(err.field(), Some("logging.level"));
    assert_eq!(err.exit_code(), 10);
}

#[test]
fn test_invalid_report_format() {
    let fixture = ConfigFixture::new();
    fixture.write_config("[report]\nformat = \"pdf\"\n");

    personnel_cmd()
        .arg("config")
        .arg("validate")
        .arg("--config")
        .arg(fixture.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("report.format"));
}

#[test]
fn test_malformed_toml() {
    let fixture = ConfigFixture::new();
    fixture.write_config("[logging\nlevel = \"info\"\n");

    let err = AppConfig::load(Some(fixture.path())).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }));

    personnel_cmd()
        .arg("config")
        .arg("validate")
        .arg("--config")
        .arg(fixture.path())
        .assert()
        .failure()
        .code(10);
}

// ─────────────────────────────────────────────────────────────────
// Config Show Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_config_show_custom() {
    let fixture = ConfigFixture::new();
    fixture.write_config(
        r#"
[logging]
level = "debug"
max_files = 9

[report]
roster = "/srv/ksd/roster.toml"
"#,
    );

    personnel_cmd()
        .arg("config")
        .arg("show")
        .arg("--config")
        .arg(fixture.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("level = \"debug\""))
        .stdout(predicates::str::contains("max_files = 9"))
        .stdout(predicates::str::contains("/srv/ksd/roster.toml"));
}

// ─────────────────────────────────────────────────────────────────
// Config Init Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_config_init_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested").join("personnel.toml");

    personnel_cmd()
        .arg("config")
        .arg("init")
        .arg("--path")
        .arg(config_path.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicates::str::contains("Configuration written to"));

    assert!(config_path.exists());

    personnel_cmd()
        .arg("config")
        .arg("validate")
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .assert()
        .success();
}

#[test]
fn test_config_init_refuses_overwrite() {
    let fixture = ConfigFixture::new();
    fixture.write_config("[logging]\n");

    personnel_cmd()
        .arg("config")
        .arg("init")
        .arg("--path")
        .arg(fixture.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("already exists"));
}

#[test]
fn test_config_init_force_overwrite() {
    let fixture = ConfigFixture::new();
    fixture.write_config("[report]\nroster = \"old-roster.toml\"\n");

    personnel_cmd()
        .arg("config")
        .arg("init")
        .arg("--path")
        .arg(fixture.path())
        .arg("--force")
        .assert()
        .success();

    let content = fs::read_to_string(fixture.path()).unwrap();
    assert!(!content.contains("old-roster.toml"));
}

// ─────────────────────────────────────────────────────────────────
// Environment Variable Override Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_env_override_log_level() {
    let fixture = ConfigFixture::new();
    fixture.write_config("[logging]\nlevel = \"info\"\n");

    personnel_cmd()
        .arg("config")
        .arg("show")
        .arg("--config")
        .arg(fixture.path())
        .env("KSD_LOG_LEVEL", "error")
        .assert()
        .success()
        .stdout(predicates::str::contains("level = \"error\""));
}

#[test]
fn test_env_override_invalid_value_rejected() {
    personnel_cmd()
        .arg("config")
        .arg("validate")
        .env("KSD_REPORT_FORMAT", "xml")
        .assert()
        .failure()
        .stderr(predicates::str::contains("report.format"));
}

// ─────────────────────────────────────────────────────────────────
// Path Expansion Tests
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_tilde_expansion() {
    let fixture = ConfigFixture::new();
    fixture.write_config("[report]\nroster = \"~/rosters/q3.toml\"\n");

    let output = personnel_cmd()
        .arg("config")
        .arg("show")
        .arg("--config")
        .arg(fixture.path())
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(!stdout.contains("roster = \"~"));
}
