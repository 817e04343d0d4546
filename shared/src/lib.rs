//! IMC Calculator Shared Library
//!
//! This crate contains the BMI calculation, classification, input
//! validation and session logic used by the command-line frontend.

pub mod bmi;
pub mod errors;
pub mod input;
pub mod session;
pub mod validation;

// Re-export commonly used items
pub use bmi::*;
pub use errors::*;
pub use input::{parse_decimal, LineSource, ReaderLines};
pub use session::{run_interactive_session, SessionMode};
pub use validation::*;
