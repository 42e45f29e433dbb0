//! User command implementation.
//!
//! On Unix this runs `xdg-user-dir` once per directory.

use anyhow::{Context, Result};
use stddirs_lib::{Host, UserDirs};

use crate::output::{OutputFormat, print_dir, print_json};

pub fn cmd_user(host: &Host<'_>, format: OutputFormat) -> Result<()> {
  let dirs = UserDirs::resolve(host).context("Failed to resolve user directories")?;

  if format.is_json() {
    return print_json(&dirs);
  }

  print_dir("home", dirs.home_dir());
  print_dir("audio", dirs.audio_dir());
  print_dir("desktop", dirs.desktop_dir());
  print_dir("document", dirs.document_dir());
  print_dir("download", dirs.download_dir());
  print_dir("font", dirs.font_dir());
  print_dir("picture", dirs.picture_dir());
  print_dir("public", dirs.public_dir());
  print_dir("template", dirs.template_dir());
  print_dir("video", dirs.video_dir());

  Ok(())
}
