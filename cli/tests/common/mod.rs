//! Common test utilities for integration tests
//!
//! Drives the CLI library against in-memory streams, so every test owns
//! its input and tests can run in parallel.

use imc_calculator_cli::{
    app::{self, RunOptions},
    args::Args,
    config::{AppConfig, OutputFormat},
    error::CliResult,
};
use imc_calculator_shared::{BmiReport, ReaderLines};
use std::io::Cursor;

/// Captured outcome of one run
pub struct TestRun {
    pub result: CliResult<BmiReport>,
    pub stdout: String,
    pub stderr: String,
}

/// Test application wrapper
pub struct TestApp {
    pub options: RunOptions,
}

impl TestApp {
    /// Text output, no prompts
    pub fn new() -> Self {
        Self::with_format(OutputFormat::Text)
    }

    pub fn with_format(format: OutputFormat) -> Self {
        let args = Args {
            mode: Some("1".to_string()),
            format: Some(format),
            no_prompt: true,
        };
        let options = RunOptions::resolve(&AppConfig::default(), &args, false)
            .expect("Failed to resolve options");
        Self { options }
    }

    /// Run a session over the given input text
    pub fn run(&self, input: &str) -> TestRun {
        let mut input = ReaderLines::new(Cursor::new(input.to_string()));
        let mut stdout: Vec<u8> = Vec::new();
        let mut stderr: Vec<u8> = Vec::new();

        let result = app::run(&self.options, &mut input, &mut stdout, &mut stderr);

        TestRun {
            result,
            stdout: String::from_utf8(stdout).expect("stdout is not UTF-8"),
            stderr: String::from_utf8(stderr).expect("stderr is not UTF-8"),
        }
    }
}
