//! XDG user directory lookup.
//!
//! User content directories on Unix are configured per session in
//! `user-dirs.dirs` and are queried through the `xdg-user-dir` helper rather
//! than parsed here.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::LookupError;

/// Default helper binary, looked up on `PATH`.
pub const XDG_USER_DIR_PROGRAM: &str = "xdg-user-dir";

/// Names understood by `xdg-user-dir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum XdgUserDir {
  Desktop,
  Documents,
  Download,
  Music,
  Pictures,
  PublicShare,
  Templates,
  Videos,
}

impl XdgUserDir {
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Desktop => "DESKTOP",
      Self::Documents => "DOCUMENTS",
      Self::Download => "DOWNLOAD",
      Self::Music => "MUSIC",
      Self::Pictures => "PICTURES",
      Self::PublicShare => "PUBLICSHARE",
      Self::Templates => "TEMPLATES",
      Self::Videos => "VIDEOS",
    }
  }
}

impl fmt::Display for XdgUserDir {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Resolves an XDG user directory name to a path.
///
/// `Ok(None)` means the lookup succeeded but reported no directory.
pub trait UserDirLookup: Send + Sync {
  fn user_dir(&self, name: XdgUserDir) -> Result<Option<PathBuf>, LookupError>;
}

/// Runs the `xdg-user-dir` helper once per lookup.
#[derive(Debug, Clone)]
pub struct XdgUserDirCommand {
  program: PathBuf,
}

impl XdgUserDirCommand {
  /// Use a different helper binary
  pub fn with_program(program: impl Into<PathBuf>) -> Self {
    Self {
      program: program.into(),
    }
  }

  pub fn program(&self) -> &Path {
    &self.program
  }
}

impl Default for XdgUserDirCommand {
  fn default() -> Self {
    Self::with_program(XDG_USER_DIR_PROGRAM)
  }
}

impl UserDirLookup for XdgUserDirCommand {
  fn user_dir(&self, name: XdgUserDir) -> Result<Option<PathBuf>, LookupError> {
    debug!(program = ?self.program, name = %name, "querying xdg user dir");

    let output = Command::new(&self.program)
      .arg(name.as_str())
      .stdin(Stdio::null())
      .stderr(Stdio::null())
      .output()
      .map_err(|source| LookupError::Spawn {
        program: self.program.clone(),
        source,
      })?;

    if !output.status.success() {
      warn!(name = %name, code = ?output.status.code(), "xdg-user-dir failed");
      return Err(LookupError::Helper {
        name,
        code: output.status.code(),
      });
    }

    let stdout = output.stdout.trim_ascii();
    if stdout.is_empty() {
      debug!(name = %name, "xdg-user-dir returned no directory");
      return Ok(None);
    }

    debug!(name = %name, path = %String::from_utf8_lossy(stdout), "xdg-user-dir returned a directory");
    Ok(Some(path_from_bytes(stdout)))
  }
}

/// Paths are raw bytes on Unix and must not go through UTF-8 decoding.
#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
  use std::ffi::OsStr;
  use std::os::unix::ffi::OsStrExt;

  PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
  PathBuf::from(String::from_utf8_lossy(bytes).as_ref())
}
