use std::fmt;

use serde::{Deserialize, Serialize};

/// How synonym candidates of one word are ordered before the first is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateOrder {
    /// Most frequent sense first, then lemma order within the sense.
    #[default]
    SenseRank,
    /// Alphabetical.
    Lexical,
    /// Shuffled on every call.
    Unordered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteOptions {
    pub order: CandidateOrder,
    /// Drop candidates that score negative on their own.
    pub screen_candidates: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            order: CandidateOrder::default(),
            screen_candidates: true,
        }
    }
}

impl RewriteOptions {
    pub fn with_order(mut self, order: CandidateOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_screening(mut self, enabled: bool) -> Self {
        self.screen_candidates = enabled;
        self
    }
}

/// A token that was swapped for a synonym.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    pub index: usize,
    pub original: String,
    pub replacement: String,
    pub polarity: f64,
}

/// Tokens of the input after rewriting, one per input token.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RewrittenText {
    pub tokens: Vec<String>,
    pub substitutions: Vec<Substitution>,
}

impl RewrittenText {
    pub fn is_changed(&self) -> bool {
        !self.substitutions.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for RewrittenText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}
