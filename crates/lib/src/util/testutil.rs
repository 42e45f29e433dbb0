//! Test utilities for stddirs-lib.
//!
//! Canned capabilities so resolvers can be exercised for any platform without
//! touching the process environment, the Windows folder API or spawning
//! `xdg-user-dir`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::LookupError;
use crate::platform::Host;
use crate::platform::env::MapEnv;
use crate::platform::folders::{FolderProvider, KnownFolder};
use crate::platform::xdg::{UserDirLookup, XdgUserDir};

/// Folder provider answering from a fixed table; missing folders are `None`.
#[derive(Debug, Default)]
pub struct FakeFolders {
  folders: BTreeMap<KnownFolder, PathBuf>,
  failing: Option<(KnownFolder, i32)>,
}

impl FakeFolders {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with(mut self, folder: KnownFolder, path: &str) -> Self {
    self.folders.insert(folder, PathBuf::from(path));
    self
  }

  /// Make one folder fail with an HRESULT
  pub fn failing(mut self, folder: KnownFolder, code: i32) -> Self {
    self.failing = Some((folder, code));
    self
  }

  /// Only a home directory, as on Unix and macOS
  pub fn home(path: &str) -> Self {
    Self::new().with(KnownFolder::Profile, path)
  }

  /// A typical Windows profile for user `u`
  pub fn windows() -> Self {
    Self::new()
      .with(KnownFolder::Profile, r"C:\Users\u")
      .with(KnownFolder::RoamingAppData, r"C:\Users\u\AppData\Roaming")
      .with(KnownFolder::LocalAppData, r"C:\Users\u\AppData\Local")
      .with(KnownFolder::Music, r"C:\Users\u\Music")
      .with(KnownFolder::Desktop, r"C:\Users\u\Desktop")
      .with(KnownFolder::Documents, r"C:\Users\u\Documents")
      .with(KnownFolder::Downloads, r"C:\Users\u\Downloads")
      .with(KnownFolder::Pictures, r"C:\Users\u\Pictures")
      .with(KnownFolder::Public, r"C:\Users\Public")
      .with(KnownFolder::Templates, r"C:\Users\u\AppData\Roaming\Microsoft\Windows\Templates")
      .with(KnownFolder::Videos, r"C:\Users\u\Videos")
  }
}

impl FolderProvider for FakeFolders {
  fn known_folder(&self, folder: KnownFolder) -> Result<Option<PathBuf>, LookupError> {
    match self.failing {
      Some((failing, code)) if failing == folder => Err(LookupError::KnownFolder { folder, code }),
      _ => Ok(self.folders.get(&folder).cloned()),
    }
  }
}

/// User-dir lookup answering from a fixed table, or failing every call.
#[derive(Debug, Default)]
pub struct FakeUserDirs {
  dirs: BTreeMap<XdgUserDir, PathBuf>,
  exit_code: Option<i32>,
}

impl FakeUserDirs {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with(mut self, name: XdgUserDir, path: &str) -> Self {
    self.dirs.insert(name, PathBuf::from(path));
    self
  }

  /// Behave like a helper that exits with `code` for every name
  pub fn exiting(code: i32) -> Self {
    Self {
      exit_code: Some(code),
      ..Self::default()
    }
  }

  /// The default `user-dirs.dirs` layout under `home`
  pub fn defaults(home: &str) -> Self {
    [
      (XdgUserDir::Desktop, "Desktop"),
      (XdgUserDir::Documents, "Documents"),
      (XdgUserDir::Download, "Downloads"),
      (XdgUserDir::Music, "Music"),
      (XdgUserDir::Pictures, "Pictures"),
      (XdgUserDir::PublicShare, "Public"),
      (XdgUserDir::Templates, "Templates"),
      (XdgUserDir::Videos, "Videos"),
    ]
    .into_iter()
    .fold(Self::new(), |fake, (name, leaf)| fake.with(name, &format!("{}/{}", home, leaf)))
  }
}

impl UserDirLookup for FakeUserDirs {
  fn user_dir(&self, name: XdgUserDir) -> Result<Option<PathBuf>, LookupError> {
    if let Some(code) = self.exit_code {
      return Err(LookupError::Helper { name, code: Some(code) });
    }
    Ok(self.dirs.get(&name).cloned())
  }
}

/// Owned capabilities for one test; borrow them with [`TestHost::host`].
pub struct TestHost {
  pub target: &'static str,
  pub env: MapEnv,
  pub folders: FakeFolders,
  pub user_dirs: FakeUserDirs,
}

impl TestHost {
  pub fn new(target: &'static str) -> Self {
    Self {
      target,
      env: MapEnv::new(),
      folders: FakeFolders::new(),
      user_dirs: FakeUserDirs::new(),
    }
  }

  /// Linux with home `/home/u`, an empty environment and default user dirs
  pub fn linux() -> Self {
    Self {
      folders: FakeFolders::home("/home/u"),
      user_dirs: FakeUserDirs::defaults("/home/u"),
      ..Self::new("linux")
    }
  }

  /// macOS with home `/Users/u`
  pub fn macos() -> Self {
    Self {
      folders: FakeFolders::home("/Users/u"),
      ..Self::new("macos")
    }
  }

  /// Windows with the profile from [`FakeFolders::windows`]
  pub fn windows() -> Self {
    Self {
      folders: FakeFolders::windows(),
      ..Self::new("windows")
    }
  }

  pub fn env(mut self, name: &str, value: &str) -> Self {
    self.env = self.env.with(name, value);
    self
  }

  pub fn host(&self) -> Host<'_> {
    Host {
      target: self.target,
      env: &self.env,
      folders: &self.folders,
      user_dirs: &self.user_dirs,
    }
  }
}
