/// Upper bounds on average seconds per word for each star tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    pub three_star_secs: f64,
    pub two_star_secs: f64,
}

impl ScoringConfig {
    pub const STANDARD: Self = Self {
        three_star_secs: 3.33,
        two_star_secs: 5.0,
    };

    pub const RELAXED: Self = Self {
        three_star_secs: 5.0,
        two_star_secs: 10.0,
    };
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Stars (1..=3) for a finished level. A level with no words scores 1.
pub fn star_rating(config: &ScoringConfig, elapsed_seconds: u64, word_count: usize) -> u8 {
    if word_count == 0 {
        return 1;
    }

    let average = elapsed_seconds as f64 / word_count as f64;

    if average <= config.three_star_secs {
        3
    } else if average <= config.two_star_secs {
        2
    } else {
        1
    }
}
