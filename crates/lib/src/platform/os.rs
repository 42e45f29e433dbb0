use std::fmt;

use serde::Serialize;

use crate::error::DirsError;

/// Platform families with a directory convention.
///
/// Everything Unix-like that is not macOS follows the XDG conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
  Windows,
  Unix,
  MacOs,
}

impl Os {
  /// Identify the platform family from a target OS name in the format of
  /// [`std::env::consts::OS`].
  pub fn from_name(name: &str) -> Result<Self, DirsError> {
    match name {
      "windows" => Ok(Self::Windows),
      "macos" => Ok(Self::MacOs),
      "linux" | "android" | "freebsd" | "dragonfly" | "netbsd" | "openbsd" | "illumos" | "solaris" => Ok(Self::Unix),
      _ => Err(DirsError::UnsupportedPlatform {
        platform: name.to_string(),
      }),
    }
  }

  /// Identify the platform this binary was compiled for
  pub fn current() -> Result<Self, DirsError> {
    Self::from_name(std::env::consts::OS)
  }

  /// Returns the lowercase string identifier for this platform family
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Windows => "windows",
      Self::Unix => "unix",
      Self::MacOs => "macos",
    }
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn current_returns_supported_os() {
    assert!(Os::current().is_ok(), "Current OS should be supported");
  }

  #[test]
  fn unix_like_targets_share_a_family() {
    for name in ["linux", "freebsd", "openbsd", "netbsd", "android"] {
      assert_eq!(Os::from_name(name).unwrap(), Os::Unix, "{name}");
    }
    assert_eq!(Os::from_name("macos").unwrap(), Os::MacOs);
    assert_eq!(Os::from_name("windows").unwrap(), Os::Windows);
  }

  #[test]
  fn unknown_target_is_unsupported() {
    let err = Os::from_name("plan9").unwrap_err();
    assert!(matches!(err, DirsError::UnsupportedPlatform { ref platform } if platform == "plan9"));
  }
}
