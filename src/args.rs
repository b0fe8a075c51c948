use clap::Parser;

use crate::{scoring::ScoringConfig, session::SessionConfig};

#[derive(Parser, Debug)]
#[command(name = "word-trove", about = "Find the hidden words in a pool of shuffled letters")]
pub struct Args {
    /// Level document to play: a file path or an http(s) URL
    #[arg(long, value_name = "PATH|URL")]
    pub levels: Option<String>,

    /// Start directly in this built-in category
    #[arg(long)]
    pub category: Option<String>,

    /// Use the 5s/10s per-word star thresholds instead of 3.33s/5s
    #[arg(long)]
    pub relaxed_scoring: bool,

    /// Let hints point at any letter of the word when its first letter is taken
    #[arg(long)]
    pub hint_fallback: bool,

    /// Seed for tile shuffles and hints
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable the terminal bell
    #[arg(long)]
    pub mute: bool,
}

impl Args {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            scoring: if self.relaxed_scoring {
                ScoringConfig::RELAXED
            } else {
                ScoringConfig::STANDARD
            },
            hint_fallback: self.hint_fallback,
        }
    }
}
