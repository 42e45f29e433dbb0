mod cmd;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use stddirs_lib::NativeHost;
use tracing_subscriber::EnvFilter;

use cmd::{ProjectArgs, cmd_base, cmd_info, cmd_project, cmd_user};
use output::{OutputFormat, print_error};

/// stddirs - print the standard directories of this platform
#[derive(Parser)]
#[command(name = "stddirs")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(long, global = true, value_enum, default_value_t)]
  output: OutputFormat,

  /// Resolve as if running on this OS (e.g. linux, macos, windows)
  #[arg(long, global = true)]
  target: Option<String>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Show base directories (cache, config, data, ...)
  Base,

  /// Show user directories (desktop, documents, downloads, ...)
  User,

  /// Show the directories of one application
  Project(ProjectArgs),

  /// Show the detected platform
  Info,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let native = NativeHost::new();
  let mut host = native.host();
  if let Some(target) = cli.target.as_deref() {
    host = host.with_target(target);
  }
  tracing::debug!(target_os = host.target, "resolved host");

  let result = match &cli.command {
    Commands::Base => cmd_base(&host, cli.output),
    Commands::User => cmd_user(&host, cli.output),
    Commands::Project(args) => cmd_project(&host, args, cli.output),
    Commands::Info => cmd_info(&host, cli.output),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}
