pub mod config;
pub mod error;
pub mod fixer;
pub mod logging;
pub mod nlp;
pub mod resources;
pub mod rewriter;
pub mod sentiment;
pub mod wordnet;

#[cfg(test)]
mod testing;

pub use config::SentifixConfig;
pub use error::{FixerError, FixerResult};
pub use fixer::{Analysis, Fixer, Outcome};
pub use rewriter::{CandidateOrder, RewriteOptions, RewrittenText};
pub use sentiment::{SentimentCategory, SentimentScore};
