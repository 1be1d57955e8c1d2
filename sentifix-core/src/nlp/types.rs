use serde::{Deserialize, Serialize};

/// Penn Treebank labels of the adjective family: base, comparative, superlative.
pub const ADJECTIVE_TAGS: [&str; 3] = ["JJ", "JJR", "JJS"];

/// A word with its part-of-speech label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub word: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    pub fn is_adjective(&self) -> bool {
        ADJECTIVE_TAGS.contains(&self.tag.as_str())
    }
}

/// Splits raw text into tokens and labels each one.
pub trait TextTagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}
