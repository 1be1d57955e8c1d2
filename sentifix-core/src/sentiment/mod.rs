pub mod types;
pub mod lexicon;
pub mod analyzer;


pub use types::{SentimentScore, SentimentCategory, SentimentScorer};
pub use lexicon::{Lexicon, LexiconEntry};
pub use analyzer::{PatternAnalyzer, Assessment};
