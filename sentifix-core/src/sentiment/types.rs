use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentCategory {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentCategory::Positive => write!(f, "Positive"),
            SentimentCategory::Neutral => write!(f, "Neutral"),
            SentimentCategory::Negative => write!(f, "Negative"),
        }
    }
}

/// Polarity in [-1.0, 1.0] and subjectivity in [0.0, 1.0] of a text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentScore {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn category(&self) -> SentimentCategory {
        if self.polarity > 0.0 {
            SentimentCategory::Positive
        } else if self.polarity < 0.0 {
            SentimentCategory::Negative
        } else {
            SentimentCategory::Neutral
        }
    }

    pub fn is_negative(&self) -> bool {
        self.category() == SentimentCategory::Negative
    }
}

/// Scores the sentiment of a text. Must be deterministic for a given text.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentScore;
}
