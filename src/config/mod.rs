use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mailcheck")]
#[command(about = "Check candidate strings for a plausible email shape")]
pub struct CliConfig {
    /// Candidates to check. The built-in sample set is used when none are
    /// given.
    #[arg(value_name = "CANDIDATE")]
    pub candidates: Vec<String>,

    #[arg(long, help = "Parse each candidate as a JSON value before checking")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
