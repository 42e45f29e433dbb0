//! Base directories: the per-user roots every application shares.
//!
//! | field        | Windows            | Unix                                 | macOS                           |
//! |--------------|--------------------|--------------------------------------|---------------------------------|
//! | `cache`      | `{LocalAppData}`   | `$XDG_CACHE_HOME` or `~/.cache`      | `~/Library/Caches`              |
//! | `config`     | `{RoamingAppData}` | `$XDG_CONFIG_HOME` or `~/.config`    | `~/Library/Application Support` |
//! | `data`       | `{RoamingAppData}` | `$XDG_DATA_HOME` or `~/.local/share` | `~/Library/Application Support` |
//! | `data_local` | `{LocalAppData}`   | same as `data`                       | `~/Library/Application Support` |
//! | `executable` | –                  | `$XDG_BIN_HOME` or `~/.local/bin`    | –                               |
//! | `preference` | same as `config`   | same as `config`                     | `~/Library/Preferences`         |
//! | `runtime`    | –                  | `$XDG_RUNTIME_DIR`                   | –                               |

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::DirsError;
use crate::platform::env::{XDG_BIN_HOME, XDG_CACHE_HOME, XDG_CONFIG_HOME, XDG_DATA_HOME, XDG_RUNTIME_DIR};
use crate::platform::folders::KnownFolder;
use crate::platform::os::Os;
use crate::platform::paths::{join_opt, normalize_path};
use crate::platform::{Host, NativeHost};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseDirs {
  pub home: Option<PathBuf>,
  pub cache: Option<PathBuf>,
  pub config: Option<PathBuf>,
  pub data: Option<PathBuf>,
  pub data_local: Option<PathBuf>,
  pub executable: Option<PathBuf>,
  pub preference: Option<PathBuf>,
  pub runtime: Option<PathBuf>,
}

impl BaseDirs {
  /// Resolve the base directories of the current process
  pub fn new() -> Result<Self, DirsError> {
    Self::resolve(&NativeHost::new().host())
  }

  /// Resolve the base directories for `host`
  pub fn resolve(host: &Host<'_>) -> Result<Self, DirsError> {
    let os = host.os()?;
    debug!(os = %os, "resolving base directories");

    match os {
      Os::Windows => windows(host),
      Os::Unix => unix(host),
      Os::MacOs => macos(host),
    }
  }

  pub fn home_dir(&self) -> Option<&Path> {
    self.home.as_deref()
  }

  pub fn cache_dir(&self) -> Option<&Path> {
    self.cache.as_deref()
  }

  pub fn config_dir(&self) -> Option<&Path> {
    self.config.as_deref()
  }

  pub fn data_dir(&self) -> Option<&Path> {
    self.data.as_deref()
  }

  pub fn data_local_dir(&self) -> Option<&Path> {
    self.data_local.as_deref()
  }

  pub fn executable_dir(&self) -> Option<&Path> {
    self.executable.as_deref()
  }

  pub fn preference_dir(&self) -> Option<&Path> {
    self.preference.as_deref()
  }

  pub fn runtime_dir(&self) -> Option<&Path> {
    self.runtime.as_deref()
  }
}

fn windows(host: &Host<'_>) -> Result<BaseDirs, DirsError> {
  let home = host.folders.known_folder(KnownFolder::Profile)?;
  let data = host.folders.known_folder(KnownFolder::RoamingAppData)?;
  let data_local = host.folders.known_folder(KnownFolder::LocalAppData)?;

  Ok(BaseDirs {
    home,
    cache: data_local.clone(),
    config: data.clone(),
    preference: data.clone(),
    data,
    data_local,
    executable: None,
    runtime: None,
  })
}

fn unix(host: &Host<'_>) -> Result<BaseDirs, DirsError> {
  let home = host.folders.known_folder(KnownFolder::Profile)?;
  let env = host.env;

  let cache = env.path(XDG_CACHE_HOME).or_else(|| join_opt(home.as_deref(), ".cache"));
  let config = env.path(XDG_CONFIG_HOME).or_else(|| join_opt(home.as_deref(), ".config"));
  let data = env
    .path(XDG_DATA_HOME)
    .or_else(|| join_opt(home.as_deref(), ".local/share"));

  // `bin` is a sibling of the data home, `~/.local/bin` by default
  let executable = env
    .path(XDG_BIN_HOME)
    .or_else(|| data.as_deref().map(|data| normalize_path(&data.join("../bin"))))
    .or_else(|| join_opt(home.as_deref(), ".local/bin"));

  Ok(BaseDirs {
    home,
    cache,
    preference: config.clone(),
    config,
    data_local: data.clone(),
    data,
    executable,
    runtime: env.path(XDG_RUNTIME_DIR),
  })
}

fn macos(host: &Host<'_>) -> Result<BaseDirs, DirsError> {
  let home = host.folders.known_folder(KnownFolder::Profile)?;
  let app_support = join_opt(home.as_deref(), "Library/Application Support");

  Ok(BaseDirs {
    cache: join_opt(home.as_deref(), "Library/Caches"),
    config: app_support.clone(),
    data: app_support.clone(),
    data_local: app_support,
    executable: None,
    preference: join_opt(home.as_deref(), "Library/Preferences"),
    runtime: None,
    home,
  })
}
