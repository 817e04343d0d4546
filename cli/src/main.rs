//! IMC Calculator
//!
//! Reads a weight (kg) and a height (m) from stdin, one per line, and
//! prints the body mass index with its category.
//!
//! ## Exit codes
//!
//! - 0: result printed
//! - 1: invalid weight or height
//! - 2: unknown session mode
//! - 3: configuration or I/O failure

use anyhow::Result;
use clap::Parser;
use imc_calculator_cli::{
    app::{self, RunOptions},
    args::Args,
    config,
    error::CliError,
};
use imc_calculator_shared::ReaderLines;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = match config::AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Ok(CliError::from(e).into_exit_code());
        }
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting IMC calculator"
    );

    let stdin = io::stdin();
    let options = match RunOptions::resolve(&config, &args, stdin.is_terminal()) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(e.into_exit_code());
        }
    };

    let mut input = ReaderLines::new(stdin.lock());
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    match app::run(&options, &mut input, &mut stdout, &mut stderr) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => Ok(e.into_exit_code()),
    }
}

/// Initialize tracing/logging on stderr
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "imc_calculator_cli=warn,imc_calculator_shared=warn".into()
        } else {
            "imc_calculator_cli=info,imc_calculator_shared=info".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(io::stderr))
            .init();
    }
}
