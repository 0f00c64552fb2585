//! Tinyt CLI - A command-line driver for the tinyc lexer.
//!
//! This is the main entry point for the tinyt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_lex, CheckArgs, LexArgs};
use config::{Config, OutputFormat};
use error::{Result, TinytError};

/// Tinyt - A command-line driver for the tinyc lexer
///
/// Tinyt tokenizes tinyc source files and reports lexical errors.
#[derive(Parser, Debug)]
#[command(name = "tinyt")]
#[command(author = "Tinyc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A command-line driver for the tinyc lexer", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "TINYT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TINYT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "TINYT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the tinyt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of source files
    ///
    /// Each file is tokenized and its tokens are written to stdout, one
    /// `TYPE<TAB>text` line per token or one JSON array per file.
    Lex(LexCommand),

    /// Check source files for lexical errors
    ///
    /// Each file is tokenized and its token count reported. Exits with a
    /// failure status if any file has an error.
    Check(CheckCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source files to tokenize
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

/// Main entry point for the tinyt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging
/// at the resulting verbosity, and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    // Initialize logging
    init_logging(verbose, cli.no_color)?;
    debug!(?config, "configuration loaded");

    // Execute the selected command
    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| TinytError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, verbose, config),
        Commands::Check(args) => execute_check(args, verbose, config),
    }
}

/// Execute the lex command.
fn execute_lex(args: LexCommand, verbose: bool, config: Config) -> Result<()> {
    let lex_args = LexArgs {
        verbose,
        input: args.input,
        format: args.format,
    };
    run_lex(lex_args, config)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        verbose,
        input: args.input,
    };
    run_check(check_args, config)
}
