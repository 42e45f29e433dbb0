//! Project command implementation.
//!
//! Resolves an application's directories from either a literal relative path
//! or a qualifier/organization/application identity.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use stddirs_lib::{AppIdentity, Host, ProjectDirs};

use crate::output::{OutputFormat, print_dir, print_json, print_stat};

#[derive(Debug, Args)]
pub struct ProjectArgs {
  /// Literal relative project path, used as-is on every platform
  #[arg(long, conflicts_with_all = ["qualifier", "organization", "application"])]
  pub path: Option<PathBuf>,

  /// Reverse domain of the vendor, e.g. "com.example" (macOS only)
  #[arg(short, long, default_value = "")]
  pub qualifier: String,

  /// Organization name (Windows and macOS)
  #[arg(short, long, default_value = "")]
  pub organization: String,

  /// Application name
  #[arg(short, long, default_value = "")]
  pub application: String,
}

pub fn cmd_project(host: &Host<'_>, args: &ProjectArgs, format: OutputFormat) -> Result<()> {
  let dirs = match &args.path {
    Some(path) => ProjectDirs::from_path_in(host, path),
    None => {
      let identity = AppIdentity::new(&args.qualifier, &args.organization, &args.application);
      ProjectDirs::from_identity_in(host, &identity)
    }
  }
  .context("Failed to resolve project directories")?;

  if format.is_json() {
    return print_json(&dirs);
  }

  print_stat("project", &dirs.project_path().display().to_string());
  print_dir("cache", dirs.cache_dir());
  print_dir("config", dirs.config_dir());
  print_dir("data", dirs.data_dir());
  print_dir("data_local", dirs.data_local_dir());
  print_dir("preference", dirs.preference_dir());
  print_dir("runtime", dirs.runtime_dir());

  Ok(())
}
