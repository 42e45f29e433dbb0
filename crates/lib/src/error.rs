//! Error types for stddirs-lib.
//!
//! A location that has no meaning on a platform is never an error: it
//! resolves to `None`. Errors are reserved for hosts we cannot resolve for at
//! all and for capability failures, which are passed through unchanged.

use std::path::PathBuf;

use thiserror::Error;

use crate::platform::folders::KnownFolder;
use crate::platform::os::Os;
use crate::platform::xdg::XdgUserDir;

/// Errors returned by the directory resolvers.
#[derive(Debug, Error)]
pub enum DirsError {
  #[error("directories are not supported on platform '{platform}'")]
  UnsupportedPlatform { platform: String },

  #[error(transparent)]
  ExternalLookup(#[from] LookupError),

  #[error("application identity yields an empty project path on {platform}")]
  EmptyProjectPath { platform: Os },
}

/// Failure of an injected folder or user-directory capability.
#[derive(Debug, Error)]
pub enum LookupError {
  #[error("known folder {folder} could not be resolved (HRESULT {code:#010x})")]
  KnownFolder { folder: KnownFolder, code: i32 },

  #[error("failed to run {}: {source}", .program.display())]
  Spawn {
    program: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("xdg-user-dir {name} exited with {}", exit_status(.code))]
  Helper { name: XdgUserDir, code: Option<i32> },
}

fn exit_status(code: &Option<i32>) -> String {
  match code {
    Some(code) => format!("status {}", code),
    None => "no status (terminated by signal)".to_string(),
  }
}
