//! Check command implementation.
//!
//! Runs lexical analysis over each input file and reports token counts
//! without printing the tokens themselves.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::commands::common::{
    check_for_failures, lex_file, output_messages, report_file_error, validate_input_files,
};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source files to check.
    pub input: Vec<PathBuf>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

/// Outcome of checking a batch of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Files that lexed cleanly.
    pub files_ok: usize,
    /// Files with a lexical or IO error.
    pub files_failed: usize,
    /// Tokens across all clean files.
    pub tokens: usize,
}

impl CheckCommand {
    /// Create a new CheckCommand.
    pub fn new(args: CheckArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        validate_input_files(&self.args.input)?;

        let summary = self.check_all_files();
        self.log_completion(start_time.elapsed(), &summary);

        check_for_failures(summary.files_failed)
    }

    /// Check every input file, reporting each one.
    pub fn check_all_files(&self) -> CheckSummary {
        let keywords = self.config.lex.keywords();
        let mut summary = CheckSummary::default();

        for path in &self.args.input {
            match lex_file(path, &keywords) {
                Ok(tokens) => {
                    summary.files_ok += 1;
                    summary.tokens += tokens.len();
                    Self::report_ok(path, tokens.len());
                },
                Err(e) => {
                    summary.files_failed += 1;
                    report_file_error(path, &e);
                },
            }
        }

        summary
    }

    fn report_ok(path: &Path, tokens: usize) {
        println!("{} {}: {} tokens", output_messages::OK, path.display(), tokens);
    }

    /// Log completion statistics if verbose.
    fn log_completion(&self, elapsed: Duration, summary: &CheckSummary) {
        if self.args.verbose || self.config.verbose {
            eprintln!(
                "{} Files: {} ok, {} failed, {} tokens in {:.2}s",
                output_messages::SUMMARY,
                summary.files_ok,
                summary.files_failed,
                summary.tokens,
                elapsed.as_secs_f64()
            );
        }
        debug!(
            ok = summary.files_ok,
            failed = summary.files_failed,
            tokens = summary.tokens,
            "check finished"
        );
    }
}

/// Run the check command with the given arguments.
pub fn run_check(args: CheckArgs, config: Config) -> Result<()> {
    CheckCommand::new(args, config).run()
}
