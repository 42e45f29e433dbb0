//! Base command implementation.
//!
//! Prints the shared cache, config, data, executable and runtime roots.

use anyhow::{Context, Result};
use stddirs_lib::{BaseDirs, Host};

use crate::output::{OutputFormat, print_dir, print_json};

pub fn cmd_base(host: &Host<'_>, format: OutputFormat) -> Result<()> {
  let dirs = BaseDirs::resolve(host).context("Failed to resolve base directories")?;

  if format.is_json() {
    return print_json(&dirs);
  }

  print_dir("home", dirs.home_dir());
  print_dir("cache", dirs.cache_dir());
  print_dir("config", dirs.config_dir());
  print_dir("data", dirs.data_dir());
  print_dir("data_local", dirs.data_local_dir());
  print_dir("executable", dirs.executable_dir());
  print_dir("preference", dirs.preference_dir());
  print_dir("runtime", dirs.runtime_dir());

  Ok(())
}
