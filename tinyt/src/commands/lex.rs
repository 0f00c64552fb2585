//! Lex command implementation.
//!
//! Tokenizes each input file and prints its tokens either as text lines or
//! as a JSON array.

use std::io::{self, Write};
use std::path::PathBuf;

use tinyc_lex::Token;
use tracing::info;

use crate::commands::common::{
    check_for_failures, lex_file, report_file_error, validate_input_files,
};
use crate::config::{Config, OutputFormat};
use crate::error::Result;

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source files to tokenize.
    pub input: Vec<PathBuf>,
    /// Output format; falls back to the configured one.
    pub format: Option<OutputFormat>,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
    config: Config,
}

impl LexCommand {
    /// Create a new LexCommand.
    pub fn new(args: LexArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command, writing tokens to stdout.
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Execute the command, writing tokens to `out`.
    ///
    /// Every file is attempted; failures are reported on stderr and counted.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        validate_input_files(&self.args.input)?;

        let format = self.output_format();
        let keywords = self.config.lex.keywords();
        let with_headers = self.args.input.len() > 1 && format == OutputFormat::Text;
        let mut files_failed = 0;

        for path in &self.args.input {
            match lex_file(path, &keywords) {
                Ok(tokens) => {
                    if with_headers {
                        writeln!(out, "==> {} <==", path.display())?;
                    }
                    write_tokens(out, &tokens, format)?;
                },
                Err(e) => {
                    files_failed += 1;
                    report_file_error(path, &e);
                },
            }
        }

        if self.args.verbose || self.config.verbose {
            info!(
                files = self.args.input.len(),
                failed = files_failed,
                %format,
                "lex finished"
            );
        }

        check_for_failures(files_failed)
    }

    /// Get the effective output format.
    pub fn output_format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.config.lex.format)
    }
}

/// Print one file's tokens in the requested format.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(out, "{}\t{}", token.token_type(), token.text())?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, tokens)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

/// Run the lex command with the given arguments.
pub fn run_lex(args: LexArgs, config: Config) -> Result<()> {
    LexCommand::new(args, config).run()
}
