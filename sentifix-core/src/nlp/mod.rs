pub mod types;
pub mod tokenizer;
pub mod perceptron;

#[cfg(test)]
mod tests;

pub use types::{TaggedToken, TextTagger, ADJECTIVE_TAGS};
pub use tokenizer::WordTokenizer;
pub use perceptron::{PerceptronTagger, PerceptronModel};
