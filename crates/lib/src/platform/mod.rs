//! Host identification and the capabilities the resolvers read from.

pub mod env;
pub mod folders;
pub mod os;
pub(crate) mod paths;
pub mod xdg;

use std::fmt;

use env::{EnvReader, ProcessEnv};
use folders::{FolderProvider, NativeFolders};
use os::Os;
use xdg::{UserDirLookup, XdgUserDirCommand};

use crate::error::DirsError;

/// Everything a resolver needs to know about the host.
///
/// `target` is an OS identifier in the format of [`std::env::consts::OS`];
/// it is only interpreted when a resolver runs, so an unsupported value
/// surfaces as [`DirsError::UnsupportedPlatform`] from every resolver.
#[derive(Clone, Copy)]
pub struct Host<'a> {
  pub target: &'a str,
  pub env: &'a dyn EnvReader,
  pub folders: &'a dyn FolderProvider,
  pub user_dirs: &'a dyn UserDirLookup,
}

impl<'a> Host<'a> {
  /// Identify the platform family of `target`
  pub fn os(&self) -> Result<Os, DirsError> {
    Os::from_name(self.target)
  }

  /// Same capabilities, resolved as if running on `target`
  pub fn with_target(self, target: &'a str) -> Self {
    Self { target, ..self }
  }
}

impl fmt::Debug for Host<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Host").field("target", &self.target).finish_non_exhaustive()
  }
}

/// The process environment, the operating system's folder API and the
/// `xdg-user-dir` helper.
#[derive(Debug, Clone, Default)]
pub struct NativeHost {
  pub env: ProcessEnv,
  pub folders: NativeFolders,
  pub user_dirs: XdgUserDirCommand,
}

impl NativeHost {
  pub fn new() -> Self {
    Self::default()
  }

  /// Borrow the capabilities for the compile-time target
  pub fn host(&self) -> Host<'_> {
    Host {
      target: std::env::consts::OS,
      env: &self.env,
      folders: &self.folders,
      user_dirs: &self.user_dirs,
    }
  }
}
