//! Command-line arguments

use clap::Parser;

use crate::config::OutputFormat;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "imc-calculator", version, about = "Body mass index (IMC) calculator")]
pub struct Args {
    /// Session mode token ("1" = interactive console calculation)
    pub mode: Option<String>,

    /// Result format, overrides output.format from configuration
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Never print input prompts
    #[arg(long)]
    pub no_prompt: bool,
}
