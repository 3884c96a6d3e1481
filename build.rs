//! Build script for KSD Personnel
//!
//! Exposes git and toolchain details to `src/version.rs` as KSD_* env vars.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let git_dirty = match command_output("git", &["status", "--porcelain"]) {
        Some(status) if !status.is_empty() => "true",
        Some(_) => "false",
        None => "unknown",
    };

    let vars = [
        ("KSD_GIT_HASH", command_or_unknown("git", &["rev-parse", "--short=8", "HEAD"])),
        ("KSD_GIT_BRANCH", command_or_unknown("git", &["rev-parse", "--abbrev-ref", "HEAD"])),
        ("KSD_GIT_DIRTY", git_dirty.to_string()),
        (
            "KSD_BUILD_TIMESTAMP",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        ),
        ("KSD_TARGET", env_or_unknown("TARGET")),
        ("KSD_PROFILE", env_or_unknown("PROFILE")),
        ("KSD_RUSTC_VERSION", command_or_unknown("rustc", &["--version"])),
    ];

    for (key, value) in &vars {
        println!("cargo:rustc-env={}={}", key, value);
    }
}

/// Trimmed stdout of a successful command
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
}

fn command_or_unknown(program: &str, args: &[&str]) -> String {
    command_output(program, args).unwrap_or_else(|| "unknown".to_string())
}

fn env_or_unknown(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| "unknown".to_string())
}
