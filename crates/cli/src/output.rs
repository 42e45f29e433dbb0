//! CLI output formatting utilities.
//!
//! Resolved directories are printed either as aligned `label: path` lines or
//! as pretty JSON.

use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const ERROR: &str = "✗";
  pub const INFO: &str = "•";
}

/// Text shown for a directory that does not apply on the platform.
pub const NOT_APPLICABLE: &str = "(none)";

/// Width of the label column in text output.
const LABEL_WIDTH: usize = 12;

pub fn format_dir(dir: Option<&Path>) -> String {
  match dir {
    Some(dir) => dir.display().to_string(),
    None => NOT_APPLICABLE.to_string(),
  }
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    format!("{:<width$}", label, width = LABEL_WIDTH).if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

/// Print one directory row, dimming directories that do not apply.
pub fn print_dir(label: &str, dir: Option<&Path>) {
  let value = match dir {
    Some(_) => format_dir(dir),
    None => NOT_APPLICABLE
      .if_supports_color(Stream::Stdout, |s| s.dimmed())
      .to_string(),
  };
  print_stat(label, &value);
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
