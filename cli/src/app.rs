//! Mode dispatch and session wiring
//!
//! Resolves the effective options from configuration and arguments, runs
//! the selected session against the given streams, and emits the result.

use imc_calculator_shared::{run_interactive_session, BmiReport, LineSource, SessionMode};
use std::io::Write;
use tracing::{debug, info};

use crate::args::Args;
use crate::config::{AppConfig, OutputFormat};
use crate::error::CliResult;
use crate::output::write_report;

/// Prompts shown before each input line, in read order
pub const PROMPTS: [&str; 2] = ["Digite o peso (kg): ", "Digite a altura (m): "];

/// Effective options for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: SessionMode,
    pub format: OutputFormat,
    pub prompts: bool,
}

impl RunOptions {
    /// Apply command-line arguments on top of loaded configuration
    ///
    /// `interactive` reports whether input comes from a terminal; prompts
    /// are only printed in that case.
    pub fn resolve(config: &AppConfig, args: &Args, interactive: bool) -> CliResult<Self> {
        let mode = match &args.mode {
            Some(token) => token.parse::<SessionMode>()?,
            None => config.session.default_mode,
        };

        Ok(Self {
            mode,
            format: args.format.unwrap_or(config.output.format),
            prompts: interactive && config.session.prompts && !args.no_prompt,
        })
    }
}

/// Line source that writes a prompt before each read
pub struct PromptingSource<'a, S: ?Sized, W> {
    inner: &'a mut S,
    prompts: &'a mut W,
    next: usize,
}

impl<'a, S: LineSource + ?Sized, W: Write> PromptingSource<'a, S, W> {
    pub fn new(inner: &'a mut S, prompts: &'a mut W) -> Self {
        Self {
            inner,
            prompts,
            next: 0,
        }
    }
}

impl<S: LineSource + ?Sized, W: Write> LineSource for PromptingSource<'_, S, W> {
    fn next_line(&mut self) -> Option<String> {
        if let Some(prompt) = PROMPTS.get(self.next) {
            // A prompt that cannot be shown does not stop the session
            if let Err(e) = write!(self.prompts, "{}", prompt).and_then(|_| self.prompts.flush()) {
                debug!("Failed to write prompt: {}", e);
            }
        }
        self.next += 1;
        self.inner.next_line()
    }
}

/// Run one session and emit its result
///
/// On success the report is written to `out`. On a validation failure the
/// fixed message is written to `err` and nothing reaches `out`.
pub fn run<S, O, E>(
    options: &RunOptions,
    input: &mut S,
    out: &mut O,
    err: &mut E,
) -> CliResult<BmiReport>
where
    S: LineSource + ?Sized,
    O: Write,
    E: Write,
{
    info!(mode = %options.mode, format = ?options.format, "Running session");

    let result = if options.prompts {
        let mut prompting = PromptingSource::new(input, err);
        run_interactive_session(options.mode, &mut prompting)
    } else {
        run_interactive_session(options.mode, input)
    };

    match result {
        Ok(report) => {
            write_report(out, &report, options.format)?;
            Ok(report)
        }
        Err(e) => {
            writeln!(err, "{}", e)?;
            Err(e.into())
        }
    }
}
