//! Native folder lookup.
//!
//! On Windows every role is a known folder resolved through
//! `SHGetKnownFolderPath`. Other platforms only know the user profile; the
//! remaining roles are answered with `None`.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::LookupError;

/// Symbolic identifier of a platform folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum KnownFolder {
  Profile,
  RoamingAppData,
  LocalAppData,
  Music,
  Desktop,
  Documents,
  Downloads,
  Pictures,
  Public,
  Templates,
  Videos,
}

impl KnownFolder {
  /// The Windows `FOLDERID_*` GUID for this folder
  pub const fn guid(&self) -> &'static str {
    match self {
      Self::Profile => "{5E6C858F-0E22-4760-9AFE-EA3317B67173}",
      Self::RoamingAppData => "{3EB685DB-65F9-4CF6-A03A-E3EF65729F3D}",
      Self::LocalAppData => "{F1B32785-6FBA-4FCF-9D55-7B8E7F157091}",
      Self::Music => "{4BD8D571-6D19-48D3-BE97-422220080E43}",
      Self::Desktop => "{B4BFCC3A-DB2C-424C-B029-7FE99A87C641}",
      Self::Documents => "{FDD39AD0-238F-46AF-ADB4-6C85480369C7}",
      Self::Downloads => "{374DE290-123F-4565-9164-39C4925E467B}",
      Self::Pictures => "{33E28130-4E1E-4676-835A-98395C3BC3BB}",
      Self::Public => "{DFDF76A2-C82A-4D63-906A-5644AC457385}",
      Self::Templates => "{A63293E8-664E-48DB-A079-DF759E0509F7}",
      Self::Videos => "{18989B1D-99B5-455B-841C-AB7C74E4DDFC}",
    }
  }

  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Profile => "Profile",
      Self::RoamingAppData => "RoamingAppData",
      Self::LocalAppData => "LocalAppData",
      Self::Music => "Music",
      Self::Desktop => "Desktop",
      Self::Documents => "Documents",
      Self::Downloads => "Downloads",
      Self::Pictures => "Pictures",
      Self::Public => "Public",
      Self::Templates => "Templates",
      Self::Videos => "Videos",
    }
  }
}

impl fmt::Display for KnownFolder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Resolves a [`KnownFolder`] to an absolute path.
///
/// `Ok(None)` means the folder has no meaning on this platform.
pub trait FolderProvider: Send + Sync {
  fn known_folder(&self, folder: KnownFolder) -> Result<Option<PathBuf>, LookupError>;
}

/// Folder provider backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFolders;

#[cfg(windows)]
impl FolderProvider for NativeFolders {
  fn known_folder(&self, folder: KnownFolder) -> Result<Option<PathBuf>, LookupError> {
    known_folder::resolve(folder).map(Some)
  }
}

#[cfg(not(windows))]
impl FolderProvider for NativeFolders {
  fn known_folder(&self, folder: KnownFolder) -> Result<Option<PathBuf>, LookupError> {
    match folder {
      KnownFolder::Profile => Ok(dirs::home_dir()),
      _ => Ok(None),
    }
  }
}

// ============ Windows Implementation ============

#[cfg(windows)]
mod known_folder {
  use std::ffi::OsString;
  use std::os::windows::ffi::OsStringExt;
  use std::path::PathBuf;

  use tracing::debug;
  use windows_sys::Win32::System::Com::CoTaskMemFree;
  use windows_sys::Win32::UI::Shell::{
    FOLDERID_Desktop, FOLDERID_Documents, FOLDERID_Downloads, FOLDERID_LocalAppData, FOLDERID_Music,
    FOLDERID_Pictures, FOLDERID_Profile, FOLDERID_Public, FOLDERID_RoamingAppData, FOLDERID_Templates,
    FOLDERID_Videos, KF_FLAG_DEFAULT, SHGetKnownFolderPath,
  };
  use windows_sys::core::{GUID, PWSTR};

  use super::KnownFolder;
  use crate::error::LookupError;

  fn folder_id(folder: KnownFolder) -> &'static GUID {
    match folder {
      KnownFolder::Profile => &FOLDERID_Profile,
      KnownFolder::RoamingAppData => &FOLDERID_RoamingAppData,
      KnownFolder::LocalAppData => &FOLDERID_LocalAppData,
      KnownFolder::Music => &FOLDERID_Music,
      KnownFolder::Desktop => &FOLDERID_Desktop,
      KnownFolder::Documents => &FOLDERID_Documents,
      KnownFolder::Downloads => &FOLDERID_Downloads,
      KnownFolder::Pictures => &FOLDERID_Pictures,
      KnownFolder::Public => &FOLDERID_Public,
      KnownFolder::Templates => &FOLDERID_Templates,
      KnownFolder::Videos => &FOLDERID_Videos,
    }
  }

  pub fn resolve(folder: KnownFolder) -> Result<PathBuf, LookupError> {
    debug!(folder = %folder, guid = folder.guid(), "querying known folder");

    let mut raw: PWSTR = std::ptr::null_mut();
    // The buffer must be released with CoTaskMemFree whether or not the call succeeds.
    unsafe {
      let code = SHGetKnownFolderPath(folder_id(folder), KF_FLAG_DEFAULT, std::ptr::null_mut(), &mut raw);
      let path = if code < 0 || raw.is_null() {
        Err(LookupError::KnownFolder { folder, code })
      } else {
        let len = (0..).take_while(|&i| *raw.add(i) != 0).count();
        Ok(PathBuf::from(OsString::from_wide(std::slice::from_raw_parts(raw, len))))
      };
      CoTaskMemFree(raw as *const _);
      path
    }
  }
}
