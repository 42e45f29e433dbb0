//! Project directories: an application's own subtree beneath the base roots.
//!
//! A project is named either by a literal relative path or by an
//! [`AppIdentity`], which each platform turns into a path its own way:
//!
//! - Windows: `Organization\Application`
//! - Unix: `application-slug`
//! - macOS: `qualifier.organization.application`, every segment slugified

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::DirsError;
use crate::platform::env::{XDG_CACHE_HOME, XDG_CONFIG_HOME, XDG_DATA_HOME, XDG_RUNTIME_DIR};
use crate::platform::folders::KnownFolder;
use crate::platform::os::Os;
use crate::platform::paths::join_opt;
use crate::platform::{Host, NativeHost};

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Collapse every whitespace run to a single `-` and lowercase the result.
///
/// ```
/// assert_eq!(stddirs_lib::project::slugify("Widget  Maker"), "widget-maker");
/// ```
pub fn slugify(s: &str) -> String {
  WHITESPACE.replace_all(s, "-").to_lowercase()
}

/// Who an application belongs to.
///
/// Empty strings are treated as absent segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppIdentity {
  /// Reverse domain, e.g. `com.example`. Only used on macOS.
  pub qualifier: Option<String>,
  pub organization: Option<String>,
  pub application: Option<String>,
}

impl AppIdentity {
  pub fn new(qualifier: &str, organization: &str, application: &str) -> Self {
    let segment = |s: &str| (!s.is_empty()).then(|| s.to_string());
    Self {
      qualifier: segment(qualifier),
      organization: segment(organization),
      application: segment(application),
    }
  }

  /// The relative project path this identity maps to on `os`.
  ///
  /// Empty when none of the segments the platform uses are present.
  pub fn project_path(&self, os: Os) -> PathBuf {
    let organization = self.organization.as_deref().filter(|s| !s.is_empty());
    let application = self.application.as_deref().filter(|s| !s.is_empty());

    match os {
      Os::Windows => match (organization, application) {
        (Some(org), Some(app)) => Path::new(org).join(app),
        (Some(segment), None) | (None, Some(segment)) => PathBuf::from(segment),
        (None, None) => PathBuf::new(),
      },
      Os::Unix => application.map(slugify).map(PathBuf::from).unwrap_or_default(),
      Os::MacOs => {
        let qualifier = self.qualifier.as_deref().filter(|s| !s.is_empty());
        let bundle_id = [qualifier, organization, application]
          .into_iter()
          .flatten()
          .map(slugify)
          .collect::<Vec<_>>()
          .join(".");
        PathBuf::from(bundle_id)
      }
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDirs {
  pub project_path: PathBuf,
  pub cache: Option<PathBuf>,
  pub config: Option<PathBuf>,
  pub data: Option<PathBuf>,
  pub data_local: Option<PathBuf>,
  pub preference: Option<PathBuf>,
  pub runtime: Option<PathBuf>,
}

impl ProjectDirs {
  /// Project directories for a literal relative path on the current host
  pub fn from_path(project_path: impl AsRef<Path>) -> Result<Self, DirsError> {
    Self::from_path_in(&NativeHost::new().host(), project_path)
  }

  /// Project directories for an application identity on the current host.
  ///
  /// ```no_run
  /// use stddirs_lib::ProjectDirs;
  ///
  /// let dirs = ProjectDirs::from("com.example", "Acme", "Widget Maker")?;
  /// // Linux:   ~/.config/widget-maker
  /// // macOS:   ~/Library/Application Support/com.example.acme.widget-maker
  /// // Windows: %APPDATA%\Acme\Widget Maker\config
  /// println!("{:?}", dirs.config_dir());
  /// # Ok::<(), stddirs_lib::DirsError>(())
  /// ```
  pub fn from(qualifier: &str, organization: &str, application: &str) -> Result<Self, DirsError> {
    let identity = AppIdentity::new(qualifier, organization, application);
    Self::from_identity_in(&NativeHost::new().host(), &identity)
  }

  /// Project directories for an application identity on `host`.
  ///
  /// On Windows and macOS an identity with no usable segments resolves to the
  /// base roots themselves. Unix names projects by application alone, so an
  /// identity without one fails with [`DirsError::EmptyProjectPath`].
  pub fn from_identity_in(host: &Host<'_>, identity: &AppIdentity) -> Result<Self, DirsError> {
    let os = host.os()?;
    let project_path = identity.project_path(os);
    if os == Os::Unix && project_path.as_os_str().is_empty() {
      return Err(DirsError::EmptyProjectPath { platform: os });
    }

    debug!(os = %os, project_path = ?project_path, "derived project path from identity");
    Self::from_path_in(host, project_path)
  }

  pub fn from_path_in(host: &Host<'_>, project_path: impl AsRef<Path>) -> Result<Self, DirsError> {
    let os = host.os()?;
    let project_path = project_path.as_ref().to_path_buf();
    debug!(os = %os, project_path = ?project_path, "resolving project directories");

    match os {
      Os::Windows => windows(host, project_path),
      Os::Unix => unix(host, project_path),
      Os::MacOs => macos(host, project_path),
    }
  }

  pub fn project_path(&self) -> &Path {
    &self.project_path
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

  pub fn preference_dir(&self) -> Option<&Path> {
    self.preference.as_deref()
  }

  pub fn runtime_dir(&self) -> Option<&Path> {
    self.runtime.as_deref()
  }
}

fn windows(host: &Host<'_>, project_path: PathBuf) -> Result<ProjectDirs, DirsError> {
  let roaming = host.folders.known_folder(KnownFolder::RoamingAppData)?;
  let local = host.folders.known_folder(KnownFolder::LocalAppData)?;
  let roaming = join_opt(roaming.as_deref(), &project_path);
  let local = join_opt(local.as_deref(), &project_path);

  let config = join_opt(roaming.as_deref(), "config");
  Ok(ProjectDirs {
    cache: join_opt(local.as_deref(), "cache"),
    data: join_opt(roaming.as_deref(), "data"),
    data_local: join_opt(local.as_deref(), "data"),
    preference: config.clone(),
    config,
    runtime: None,
    project_path,
  })
}

fn unix(host: &Host<'_>, project_path: PathBuf) -> Result<ProjectDirs, DirsError> {
  let home = host.folders.known_folder(KnownFolder::Profile)?;
  let root = |var: &str, fallback: &str| {
    host
      .env
      .path(var)
      .or_else(|| join_opt(home.as_deref(), fallback))
      .map(|root| root.join(&project_path))
  };

  let cache = root(XDG_CACHE_HOME, ".cache");
  let config = root(XDG_CONFIG_HOME, ".config");
  let data = root(XDG_DATA_HOME, ".local/share");
  // No home-based fallback: a runtime dir must come from the session
  let runtime = host.env.path(XDG_RUNTIME_DIR).map(|run| run.join(&project_path));

  Ok(ProjectDirs {
    cache,
    preference: config.clone(),
    config,
    data_local: data.clone(),
    data,
    runtime,
    project_path,
  })
}

fn macos(host: &Host<'_>, project_path: PathBuf) -> Result<ProjectDirs, DirsError> {
  let home = host.folders.known_folder(KnownFolder::Profile)?;
  let library = |dir: &str| join_opt(home.as_deref(), Path::new("Library").join(dir).join(&project_path));

  let app_support = library("Application Support");
  Ok(ProjectDirs {
    cache: library("Caches"),
    preference: library("Preferences"),
    config: app_support.clone(),
    data: app_support.clone(),
    data_local: app_support,
    runtime: None,
    project_path,
  })
}
