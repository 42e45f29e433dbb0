//! CLI smoke tests for stddirs.
//!
//! These tests run the binary against the real process environment, pinning
//! the XDG variables they depend on. The `user` command is only exercised on
//! macOS layout so no `xdg-user-dir` helper is needed.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Get a Command for the stddirs binary with a known XDG environment.
fn stddirs_cmd() -> Command {
  let mut cmd = cargo_bin_cmd!("stddirs");
  cmd
    .env("XDG_CACHE_HOME", "/custom/cache")
    .env("XDG_CONFIG_HOME", "/custom/config")
    .env_remove("XDG_DATA_HOME")
    .env_remove("XDG_BIN_HOME")
    .env_remove("XDG_RUNTIME_DIR")
    .env_remove("RUST_LOG");
  cmd
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  stddirs_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  stddirs_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("stddirs"));
}

#[test]
fn subcommand_help_works() {
  for cmd in &["base", "user", "project", "info"] {
    stddirs_cmd()
      .arg(cmd)
      .arg("--help")
      .assert()
      .success()
      .stdout(predicate::str::contains("Usage"));
  }
}

// =============================================================================
// base
// =============================================================================

#[test]
fn base_uses_xdg_cache_home() {
  stddirs_cmd()
    .args(["--target", "linux", "base"])
    .assert()
    .success()
    .stdout(predicate::str::contains("/custom/cache"))
    .stdout(predicate::str::contains("/custom/config"));
}

#[test]
fn base_json_marks_missing_dirs_as_null() {
  stddirs_cmd()
    .args(["--target", "macos", "--output", "json", "base"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Library"))
    .stdout(predicate::str::contains("\"runtime\": null"))
    .stdout(predicate::str::contains("/custom/cache").not());
}

#[test]
fn base_unsupported_target_fails() {
  stddirs_cmd()
    .args(["--target", "plan9", "base"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("not supported"));
}

// =============================================================================
// user
// =============================================================================

#[test]
fn user_on_macos_layout_has_no_templates() {
  stddirs_cmd()
    .args(["--target", "macos", "--output", "json", "user"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Movies"))
    .stdout(predicate::str::contains("\"template\": null"));
}

// =============================================================================
// project
// =============================================================================

#[test]
#[cfg(unix)]
fn project_identity_uses_application_slug_on_linux() {
  stddirs_cmd()
    .args(["--target", "linux", "project", "-o", "Acme", "-a", "Widget Maker"])
    .assert()
    .success()
    .stdout(predicate::str::contains("/custom/config/widget-maker"))
    .stdout(predicate::str::contains("/custom/cache/widget-maker"));
}

#[test]
fn project_identity_is_reverse_dns_on_macos() {
  stddirs_cmd()
    .args([
      "--target",
      "macos",
      "project",
      "-q",
      "com.example",
      "-o",
      "Acme",
      "-a",
      "Widget Maker",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("com.example.acme.widget-maker"));
}

#[test]
#[cfg(unix)]
fn project_path_is_used_verbatim() {
  stddirs_cmd()
    .args(["--target", "linux", "project", "--path", "My App"])
    .assert()
    .success()
    .stdout(predicate::str::contains("/custom/config/My App"));
}

#[test]
fn project_path_conflicts_with_identity() {
  stddirs_cmd()
    .args(["project", "--path", "x", "-a", "y"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn project_without_application_fails_on_linux() {
  stddirs_cmd()
    .args(["--target", "linux", "project", "-o", "Acme"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("empty project path"));
}

#[test]
fn project_without_identity_uses_base_roots_on_macos() {
  stddirs_cmd()
    .args(["--target", "macos", "--output", "json", "project"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Library/Caches"));
}

// =============================================================================
// info
// =============================================================================

#[test]
fn info_shows_platform() {
  stddirs_cmd()
    .arg("info")
    .assert()
    .success()
    .stdout(predicate::str::contains("family"));
}

#[test]
fn info_reports_unsupported_target() {
  stddirs_cmd()
    .args(["--target", "plan9", "info"])
    .assert()
    .success()
    .stdout(predicate::str::contains("unsupported"));
}
