//! IMC Calculator CLI Library
//!
//! This library exposes the command-line modules for use in tests and the binary.

pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod output;
