use serde::{Deserialize, Serialize};

use crate::rewriter::RewrittenText;
use crate::sentiment::{SentimentCategory, SentimentScore};

pub const POSITIVE_MESSAGE: &str = "Text is already positive. No changes needed.";
pub const NEUTRAL_MESSAGE: &str = "Text is neutral. Consider adding more emotional expression.";

/// What was done with the analyzed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    AlreadyPositive,
    Neutral,
    Rewritten(RewrittenText),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub score: SentimentScore,
    pub outcome: Outcome,
}

impl Analysis {
    pub fn category(&self) -> SentimentCategory {
        self.score.category()
    }

    /// `Sentiment: Negative (Score: -1.00)`
    pub fn label(&self) -> String {
        format!("Sentiment: {} (Score: {:.2})", self.category(), self.score.polarity)
    }

    pub fn message(&self) -> String {
        match &self.outcome {
            Outcome::AlreadyPositive => POSITIVE_MESSAGE.to_string(),
            Outcome::Neutral => NEUTRAL_MESSAGE.to_string(),
            Outcome::Rewritten(rewritten) => format!("Fixed Text: {}", rewritten),
        }
    }

    pub fn rewritten(&self) -> Option<&RewrittenText> {
        match &self.outcome {
            Outcome::Rewritten(rewritten) => Some(rewritten),
            _ => None,
        }
    }
}
