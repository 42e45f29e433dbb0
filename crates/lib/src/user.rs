//! User directories: where a person keeps their own content.
//!
//! On Unix these come from the session's `user-dirs.dirs` through the
//! `xdg-user-dir` helper, the only lookup in this crate that can fail for a
//! reason other than the platform.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::DirsError;
use crate::platform::env::XDG_DATA_HOME;
use crate::platform::folders::KnownFolder;
use crate::platform::os::Os;
use crate::platform::paths::join_opt;
use crate::platform::xdg::XdgUserDir;
use crate::platform::{Host, NativeHost};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDirs {
  pub home: Option<PathBuf>,
  pub audio: Option<PathBuf>,
  pub desktop: Option<PathBuf>,
  pub document: Option<PathBuf>,
  pub download: Option<PathBuf>,
  pub font: Option<PathBuf>,
  pub picture: Option<PathBuf>,
  pub public: Option<PathBuf>,
  pub template: Option<PathBuf>,
  pub video: Option<PathBuf>,
}

impl UserDirs {
  /// Resolve the user directories of the current process
  pub fn new() -> Result<Self, DirsError> {
    Self::resolve(&NativeHost::new().host())
  }

  /// Resolve the user directories for `host`
  pub fn resolve(host: &Host<'_>) -> Result<Self, DirsError> {
    let os = host.os()?;
    debug!(os = %os, "resolving user directories");

    match os {
      Os::Windows => windows(host),
      Os::Unix => unix(host),
      Os::MacOs => macos(host),
    }
  }

  pub fn home_dir(&self) -> Option<&Path> {
    self.home.as_deref()
  }

  pub fn audio_dir(&self) -> Option<&Path> {
    self.audio.as_deref()
  }

  pub fn desktop_dir(&self) -> Option<&Path> {
    self.desktop.as_deref()
  }

  pub fn document_dir(&self) -> Option<&Path> {
    self.document.as_deref()
  }

  pub fn download_dir(&self) -> Option<&Path> {
    self.download.as_deref()
  }

  pub fn font_dir(&self) -> Option<&Path> {
    self.font.as_deref()
  }

  pub fn picture_dir(&self) -> Option<&Path> {
    self.picture.as_deref()
  }

  pub fn public_dir(&self) -> Option<&Path> {
    self.public.as_deref()
  }

  pub fn template_dir(&self) -> Option<&Path> {
    self.template.as_deref()
  }

  pub fn video_dir(&self) -> Option<&Path> {
    self.video.as_deref()
  }
}

fn windows(host: &Host<'_>) -> Result<UserDirs, DirsError> {
  let folder = |folder: KnownFolder| host.folders.known_folder(folder);

  Ok(UserDirs {
    home: folder(KnownFolder::Profile)?,
    audio: folder(KnownFolder::Music)?,
    desktop: folder(KnownFolder::Desktop)?,
    document: folder(KnownFolder::Documents)?,
    download: folder(KnownFolder::Downloads)?,
    // Windows exposes no per-user fonts folder
    font: None,
    picture: folder(KnownFolder::Pictures)?,
    public: folder(KnownFolder::Public)?,
    template: folder(KnownFolder::Templates)?,
    video: folder(KnownFolder::Videos)?,
  })
}

fn unix(host: &Host<'_>) -> Result<UserDirs, DirsError> {
  let home = host.folders.known_folder(KnownFolder::Profile)?;
  let lookup = |name: XdgUserDir| host.user_dirs.user_dir(name);

  let font = match host.env.path(XDG_DATA_HOME) {
    Some(data_home) => Some(data_home.join("fonts")),
    None => join_opt(home.as_deref(), ".local/share/fonts"),
  };

  Ok(UserDirs {
    audio: lookup(XdgUserDir::Music)?,
    desktop: lookup(XdgUserDir::Desktop)?,
    document: lookup(XdgUserDir::Documents)?,
    download: lookup(XdgUserDir::Download)?,
    font,
    picture: lookup(XdgUserDir::Pictures)?,
    public: lookup(XdgUserDir::PublicShare)?,
    template: lookup(XdgUserDir::Templates)?,
    video: lookup(XdgUserDir::Videos)?,
    home,
  })
}

fn macos(host: &Host<'_>) -> Result<UserDirs, DirsError> {
  let home = host.folders.known_folder(KnownFolder::Profile)?;
  let under_home = |leaf: &str| join_opt(home.as_deref(), leaf);

  Ok(UserDirs {
    audio: under_home("Music"),
    desktop: under_home("Desktop"),
    document: under_home("Documents"),
    download: under_home("Downloads"),
    font: under_home("Library/Fonts"),
    picture: under_home("Pictures"),
    public: None,
    template: None,
    video: under_home("Movies"),
    home,
  })
}
