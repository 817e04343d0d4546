//! Line-oriented input sources and decimal parsing
//!
//! Sessions read from an explicit [`LineSource`] rather than process stdin,
//! so each caller owns its input and sessions never share state.

use std::collections::VecDeque;
use std::io::BufRead;
use tracing::warn;

/// Sequential supplier of input lines
pub trait LineSource {
    /// Next line without its terminator, or `None` at end of input
    fn next_line(&mut self) -> Option<String>;
}

/// Adapts any buffered reader into a [`LineSource`]
#[derive(Debug)]
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed_len);
                Some(line)
            }
            Err(e) => {
                // Unreadable input is treated like missing input
                warn!("Failed to read input line: {}", e);
                None
            }
        }
    }
}

impl LineSource for VecDeque<String> {
    fn next_line(&mut self) -> Option<String> {
        self.pop_front()
    }
}

/// Parse a decimal number written with either `.` or `,` as separator
///
/// Surrounding whitespace is ignored. Every `,` is replaced by `.` before
/// parsing, so `"95,00"` and `"95.00"` yield the same value. Returns `None`
/// for anything that is not a number, e.g. `"100kg"`.
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().replace(',', ".").parse::<f64>().ok()
}
