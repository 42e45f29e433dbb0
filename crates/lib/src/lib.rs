//! stddirs-lib: standard directory resolution
//!
//! Computes where an application or user session should keep its files,
//! following each platform's own convention:
//! - `BaseDirs`: the shared cache, config, data, executable and runtime roots
//! - `UserDirs`: desktop, documents, downloads, music and friends
//! - `ProjectDirs`: an application's subtree beneath the base roots
//!
//! Nothing here touches the filesystem. Environment, OS folder APIs and the
//! `xdg-user-dir` helper are reached through the capabilities in
//! [`platform`], so every resolver can also run against a synthetic
//! [`platform::Host`].

pub mod base;
pub mod error;
pub mod platform;
pub mod project;
pub mod user;

#[cfg(test)]
mod util;

pub use base::BaseDirs;
pub use error::{DirsError, LookupError};
pub use platform::os::Os;
pub use platform::{Host, NativeHost};
pub use project::{AppIdentity, ProjectDirs};
pub use user::UserDirs;
