//! Command line front end for research logbooks.
//!
//! This crate provides the `logbook` binary on top of the `logbook` library.
//! It supports:
//! - Writing a default configuration
//! - Filling in a logbook form interactively
//! - Rendering form files into a PDF document and a CSV table
//! - Checking form files for missing required fields
//! - Printing the text of generated documents
//!
//! # Usage
//!
//! ```bash
//! # Write ~/.config/logbook/config.toml
//! logbook init
//!
//! # Fill in a form on the terminal
//! logbook new --output ./out
//!
//! # Render a form file with the flowing layout
//! logbook render form.toml --layout flowing
//!
//! # Check a form without writing anything
//! logbook check form.toml
//!
//! # Show what a generated document contains
//! logbook inspect research_logbook.pdf
//! ```
//!
//! Overwriting existing files asks for confirmation. Verbosity is raised with
//! `-v`, and `RUST_LOG` takes precedence when set.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  path::{Path, PathBuf},
  process::ExitCode,
};

use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use logbook::{
  pdf::{PDFAnalyzer, PDFContent},
  prelude::*,
  Config, FormBuilder, Publication, ResearcherForm,
};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Fill in research logbooks and export them as PDF and CSV")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the configuration file. If not specified, uses the default
  /// platform-specific config directory.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// Logs go to stderr so they never mix with command output.
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .with_target(true)
    .init();
}

/// Loads the configuration and dispatches the command.
fn run<I: UserInteraction>(cli: &Cli, interaction: &I) -> Result<()> {
  let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
  debug!("Using config path {config_path:?}");

  let load_config = || -> Result<Config> {
    let config = Config::load(&config_path)?;
    trace!("Config: {config:?}");
    Ok(config)
  };

  match &cli.command {
    Commands::Init => init(interaction, &config_path),
    Commands::New(args) => new_form(interaction, load_config()?, args),
    Commands::Render(args) => render(interaction, load_config()?, args),
    Commands::Check { form } => check(interaction, form),
    Commands::Inspect { document } => inspect(interaction, document),
  }
}

/// Entry point for the `logbook` CLI application
///
/// Parses arguments, sets up logging and runs the requested command. Any
/// failure is printed with the error prefix and turns into a non-zero exit
/// status.
fn main() -> ExitCode {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let interaction = Terminal::new(cli.accept_defaults);
  match run(&cli, &interaction) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      if let Err(reply_error) = interaction.reply(ResponseContent::Error(e)) {
        eprintln!("{}{reply_error}", style(ERROR_PREFIX).red());
      }
      ExitCode::FAILURE
    },
  }
}
