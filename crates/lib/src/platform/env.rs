//! Environment variable access.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;

pub const XDG_CACHE_HOME: &str = "XDG_CACHE_HOME";
pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
pub const XDG_DATA_HOME: &str = "XDG_DATA_HOME";
pub const XDG_BIN_HOME: &str = "XDG_BIN_HOME";
pub const XDG_RUNTIME_DIR: &str = "XDG_RUNTIME_DIR";

/// Read-only view of environment variables.
pub trait EnvReader: Send + Sync {
  /// Raw value of `name`, `None` if it is not set.
  fn var_os(&self, name: &str) -> Option<OsString>;

  /// Value of `name` as a path. Unset and empty variables are both `None`.
  fn path(&self, name: &str) -> Option<PathBuf> {
    self.var_os(name).filter(|v| !v.is_empty()).map(PathBuf::from)
  }
}

/// Reads the environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvReader for ProcessEnv {
  fn var_os(&self, name: &str) -> Option<OsString> {
    std::env::var_os(name)
  }
}

/// A fixed set of variables, independent of the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
  vars: BTreeMap<String, OsString>,
}

impl MapEnv {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add or replace a variable
  pub fn with(mut self, name: impl Into<String>, value: impl Into<OsString>) -> Self {
    self.vars.insert(name.into(), value.into());
    self
  }
}

impl<K: Into<String>, V: Into<OsString>> FromIterator<(K, V)> for MapEnv {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self {
      vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
    }
  }
}

impl EnvReader for MapEnv {
  fn var_os(&self, name: &str) -> Option<OsString> {
    self.vars.get(name).cloned()
  }
}
