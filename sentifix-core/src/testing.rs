//! On-disk fixtures shared by unit tests.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::json;

use crate::nlp::{TaggedToken, TextTagger, WordTokenizer};
use crate::sentiment::{SentimentScore, SentimentScorer};
use crate::wordnet::{Lemma, LexicalDatabase, PartOfSpeech, Synset};

const LICENSE: &str = "  1 This software and database is being provided to you, the LICENSEE, by\n  2 Princeton University under the following license.\n";

const INDEX_NOUN: &str = "\
bad n 1 1 ! 1 0 00020000
badness n 1 1 ! 1 0 00020000
good n 1 1 ! 1 0 00010000
goodness n 1 1 ! 1 0 00010000
";

const DATA_NOUN: &str = "\
00010000 04 n 02 good 0 goodness 0 001 ! 00020000 n 0101 | moral excellence or admirableness
00020000 04 n 02 bad 0 badness 0 001 ! 00010000 n 0101 | that which is below standard or expectations
";

const INDEX_VERB: &str = "run v 1 0 1 0 00030000\n";
const DATA_VERB: &str = "00030000 38 v 01 run 0 000 01 + 02 00 | move fast by using one's feet\n";

const INDEX_ADJ: &str = "\
awful a 1 1 & 1 0 00300000
bad a 1 2 ! & 1 1 00200000
dreadful a 1 1 & 1 0 00300000
frightful a 1 1 & 1 0 00300000
good a 1 1 ! 1 1 00100000
healthy a 1 1 ! 1 0 00600000
ill a 1 1 ! 1 0 00500000
severe a 1 1 & 1 0 00400000
sick a 1 1 ! 1 0 00500000
terrible a 2 1 & 2 0 00300000 00400000
well a 2 1 ! 2 0 00100000 00600000
wicked a 1 1 & 1 0 00400000
";

const DATA_ADJ: &str = "\
00100000 00 a 02 good 0 well 1 001 ! 00200000 a 0101 | having desirable or positive qualities
00200000 00 a 01 bad 0 002 ! 00100000 a 0101 & 00300000 s 0000 | having undesirable or negative qualities
00300000 00 s 04 terrible 0 awful 0 dreadful 0 frightful(a) 0 001 & 00200000 a 0000 | exceptionally bad or displeasing
00400000 00 s 03 terrible 1 severe 0 wicked 0 001 & 00200000 a 0000 | intensely or extremely bad or unpleasant in degree or quality
00500000 00 a 02 ill 0 sick 0 001 ! 00600000 a 0202 | affected by an impairment of normal physical or mental function
00600000 00 a 02 well 0 healthy 0 001 ! 00500000 a 0202 | in good health
";

const ADJ_EXC: &str = "worse bad\nworst bad\n";

const INDEX_ADV: &str = "badly r 1 0 1 0 00040000\n";
const DATA_ADV: &str = "00040000 02 r 01 badly 0 000 | in a bad way\n";

/// Writes a small WordNet `dict` directory into `dir`.
pub(crate) fn write_wordnet(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    let files = [
        ("index.noun", INDEX_NOUN),
        ("data.noun", DATA_NOUN),
        ("index.verb", INDEX_VERB),
        ("data.verb", DATA_VERB),
        ("index.adj", INDEX_ADJ),
        ("data.adj", DATA_ADJ),
        ("index.adv", INDEX_ADV),
        ("data.adv", DATA_ADV),
    ];
    for (name, body) in files {
        fs::write(dir.join(name), format!("{}{}", LICENSE, body)).unwrap();
    }
    fs::write(dir.join("adj.exc"), ADJ_EXC).unwrap();
}

/// Writes a perceptron model tagging `-ible`/`-ful` words as adjectives.
pub(crate) fn write_tagger(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    let prefix = "averaged_perceptron_tagger_eng";
    fs::write(dir.join(format!("{}.weights.json", prefix)), json!({
        "bias": {"NN": 1.0},
        "i suffix ble": {"JJ": 3.0},
        "i suffix ful": {"JJ": 3.0}
    }).to_string()).unwrap();
    fs::write(dir.join(format!("{}.tagdict.json", prefix)), json!({
        "This": "DT", "is": "VBZ", "was": "VBD", "a": "DT", "day": "NN", ".": ".", "great": "JJ", "The": "DT"
    }).to_string()).unwrap();
    fs::write(dir.join(format!("{}.classes.json", prefix)), json!(["DT", "JJ", "NN", "VBD", "VBZ", "."]).to_string()).unwrap();
}

/// Tags words from a fixed table, everything else as `NN`.
pub(crate) struct TableTagger {
    tokenizer: WordTokenizer,
    tags: HashMap<String, String>,
}

impl TableTagger {
    pub(crate) fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            tokenizer: WordTokenizer::new(),
            tags: entries.iter().map(|(w, t)| (w.to_string(), t.to_string())).collect(),
        }
    }
}

impl TextTagger for TableTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .map(|word| {
                let tag = self.tags.get(&word).cloned().unwrap_or_else(|| "NN".to_string());
                TaggedToken::new(word, tag)
            })
            .collect()
    }
}

/// Scores whole texts from a fixed table, everything else as neutral.
pub(crate) struct TableScorer {
    scores: HashMap<String, f64>,
}

impl TableScorer {
    pub(crate) fn new(entries: &[(&str, f64)]) -> Self {
        Self {
            scores: entries.iter().map(|(text, p)| (text.to_lowercase(), *p)).collect(),
        }
    }
}

impl SentimentScorer for TableScorer {
    fn score(&self, text: &str) -> SentimentScore {
        let polarity = self.scores.get(&text.trim().to_lowercase()).copied().unwrap_or(0.0);
        SentimentScore::new(polarity, polarity.abs())
    }
}

/// Builds an adjective synset. A lemma written `name!antonym` records an antonym.
pub(crate) fn synset(offset: u64, lemmas: &[&str]) -> Synset {
    Synset {
        pos: PartOfSpeech::Adjective,
        offset,
        lemmas: lemmas
            .iter()
            .map(|entry| {
                let (name, antonyms) = match entry.split_once('!') {
                    Some((name, antonym)) => (name, vec![antonym.to_string()]),
                    None => (*entry, Vec::new()),
                };
                Lemma {
                    name: name.to_string(),
                    lex_id: 0,
                    antonyms,
                }
            })
            .collect(),
        gloss: String::new(),
    }
}

/// Lexical database answering from a fixed word to synsets table.
#[derive(Default)]
pub(crate) struct TableLexicon {
    entries: HashMap<String, Vec<Synset>>,
}

impl TableLexicon {
    pub(crate) fn with(mut self, word: &str, synsets: Vec<Synset>) -> Self {
        self.entries.insert(word.to_string(), synsets);
        self
    }
}

impl LexicalDatabase for TableLexicon {
    fn synsets(&self, word: &str) -> Vec<Synset> {
        self.entries.get(&word.trim().to_lowercase()).cloned().unwrap_or_default()
    }
}
