pub mod types;
pub mod morphy;
pub mod database;


pub use types::{PartOfSpeech, Synset, Lemma, LexicalDatabase};
pub use database::WordNet;
