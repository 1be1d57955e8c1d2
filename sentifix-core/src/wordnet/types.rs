use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    AdjectiveSatellite,
    Adverb,
}

impl PartOfSpeech {
    /// Lookup order used when no part of speech is requested.
    pub const SEARCH_ORDER: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "n" => Some(PartOfSpeech::Noun),
            "v" => Some(PartOfSpeech::Verb),
            "a" => Some(PartOfSpeech::Adjective),
            "s" => Some(PartOfSpeech::AdjectiveSatellite),
            "r" => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::AdjectiveSatellite => 's',
            PartOfSpeech::Adverb => 'r',
        }
    }

    /// Suffix of the `index.*`, `data.*` and `*.exc` files holding this part of speech.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }

    /// Satellites share the adjective files.
    pub fn file_pos(&self) -> PartOfSpeech {
        match self {
            PartOfSpeech::AdjectiveSatellite => PartOfSpeech::Adjective,
            other => *other,
        }
    }
}

/// One word form of a synset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lemma {
    /// Name as stored in the database, multi-word forms joined with `_`.
    pub name: String,
    pub lex_id: u8,
    /// Names of the lemmas recorded as antonyms of this specific lemma.
    pub antonyms: Vec<String>,
}

impl Lemma {
    pub fn has_antonym(&self) -> bool {
        !self.antonyms.is_empty()
    }

    /// The name with `_` rendered as spaces.
    pub fn display_name(&self) -> String {
        self.name.replace('_', " ")
    }
}

/// A set of lemmas sharing one sense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synset {
    pub pos: PartOfSpeech,
    pub offset: u64,
    pub lemmas: Vec<Lemma>,
    pub gloss: String,
}

impl fmt::Display for Synset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.lemmas.first().map(|l| l.name.as_str()).unwrap_or("?");
        write!(f, "{}.{}.{:08}", first, self.pos.symbol(), self.offset)
    }
}

/// Source of synonym sets for a word.
pub trait LexicalDatabase: Send + Sync {
    /// Every sense of `word` across parts of speech, most frequent sense first
    /// within each part of speech.
    fn synsets(&self, word: &str) -> Vec<Synset>;
}
