use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::tokenizer::WordTokenizer;
use super::types::{TaggedToken, TextTagger};
use crate::error::{FixerError, FixerResult};

const START: [&str; 2] = ["-START-", "-START2-"];
const END: [&str; 2] = ["-END-", "-END2-"];

/// Weights, frequent-word dictionary and label set of an averaged perceptron.
#[derive(Debug, Clone, Default)]
pub struct PerceptronModel {
    pub weights: HashMap<String, HashMap<String, f64>>,
    pub tagdict: HashMap<String, String>,
    pub classes: Vec<String>,
}

impl PerceptronModel {
    /// Loads the `*.weights.json`, `*.tagdict.json` and `*.classes.json`
    /// files found in `dir`.
    pub fn load(dir: &Path) -> FixerResult<Self> {
        let weights_path = find_model_file(dir, ".weights.json")?;
        let tagdict_path = find_model_file(dir, ".tagdict.json")?;
        let classes_path = find_model_file(dir, ".classes.json")?;

        let weights = read_json(&weights_path)?;
        let tagdict = read_json(&tagdict_path)?;
        let mut classes: Vec<String> = read_json(&classes_path)?;
        classes.sort();
        classes.dedup();

        if classes.is_empty() {
            return Err(FixerError::ModelError(format!("{} lists no tags", classes_path.display())));
        }

        Ok(Self { weights, tagdict, classes })
    }

    /// Highest scoring label; ties go to the greater label.
    pub fn predict(&self, features: &HashMap<String, u32>) -> String {
        let mut scores: HashMap<&str, f64> = HashMap::new();
        for (feature, &value) in features {
            if value == 0 {
                continue;
            }
            let Some(weights) = self.weights.get(feature) else {
                continue;
            };
            for (label, weight) in weights {
                *scores.entry(label.as_str()).or_insert(0.0) += value as f64 * weight;
            }
        }

        let mut best: Option<(&str, f64)> = None;
        for label in &self.classes {
            let score = scores.get(label.as_str()).copied().unwrap_or(0.0);
            best = match best {
                Some((best_label, best_score))
                    if best_score > score || (best_score == score && best_label > label.as_str()) =>
                {
                    Some((best_label, best_score))
                }
                _ => Some((label.as_str(), score)),
            };
        }
        best.map(|(label, _)| label.to_string()).unwrap_or_default()
    }
}

fn find_model_file(dir: &Path, suffix: &str) -> FixerResult<PathBuf> {
    let entries = fs::read_dir(dir).map_err(|e| FixerError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| FixerError::io(dir, e))?;
        let name = entry.file_name();
        if name.to_string_lossy().ends_with(suffix) {
            return Ok(entry.path());
        }
    }
    Err(FixerError::ResourceMissing(format!("tagger model file *{} in {}", suffix, dir.display())))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> FixerResult<T> {
    let content = fs::read_to_string(path).map_err(|e| FixerError::io(path, e))?;
    serde_json::from_str(&content)
        .map_err(|e| FixerError::ModelError(format!("{}: {}", path.display(), e)))
}

fn suffix(word: &str, n: usize) -> String {
    let chars: Vec<char> = word.chars().collect();
    chars[chars.len().saturating_sub(n)..].iter().collect()
}

/// Averaged perceptron part-of-speech tagger producing Penn Treebank labels.
pub struct PerceptronTagger {
    model: PerceptronModel,
    tokenizer: WordTokenizer,
}

impl PerceptronTagger {
    pub fn new(model: PerceptronModel) -> Self {
        Self {
            model,
            tokenizer: WordTokenizer::new(),
        }
    }

    pub fn load(dir: &Path) -> FixerResult<Self> {
        let model = PerceptronModel::load(dir)?;
        debug!(target: "fixer::tagger", dir = %dir.display(), features = model.weights.len(), tags = model.classes.len(), "tagger loaded");
        Ok(Self::new(model))
    }

    pub fn model(&self) -> &PerceptronModel {
        &self.model
    }

    /// Tags an already tokenized text.
    pub fn tag_tokens(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let mut context: Vec<String> = START.iter().map(|s| s.to_string()).collect();
        context.extend(tokens.iter().map(|t| Self::normalize(t)));
        context.extend(END.iter().map(|s| s.to_string()));

        let mut prev = START[0].to_string();
        let mut prev2 = START[1].to_string();
        let mut output = Vec::with_capacity(tokens.len());

        for (i, word) in tokens.iter().enumerate() {
            let tag = match self.model.tagdict.get(word) {
                Some(tag) => tag.clone(),
                None => {
                    let features = Self::features(i, word, &context, &prev, &prev2);
                    self.model.predict(&features)
                }
            };
            output.push(TaggedToken::new(word.clone(), tag.clone()));
            prev2 = std::mem::replace(&mut prev, tag);
        }
        output
    }

    pub(crate) fn normalize(word: &str) -> String {
        if word.contains('-') && !word.starts_with('-') {
            "!HYPHEN".to_string()
        } else if word.chars().count() == 4 && word.chars().all(|c| c.is_ascii_digit()) {
            "!YEAR".to_string()
        } else if word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            "!DIGITS".to_string()
        } else {
            word.to_lowercase()
        }
    }

    pub(crate) fn features(i: usize, word: &str, context: &[String], prev: &str, prev2: &str) -> HashMap<String, u32> {
        let i = i + START.len();
        let mut features = HashMap::new();
        let mut add = |parts: &[&str]| {
            *features.entry(parts.join(" ")).or_insert(0) += 1;
        };

        let first = word.chars().next().map(String::from).unwrap_or_default();
        add(&["bias"]);
        add(&["i suffix", suffix(word, 3).as_str()]);
        add(&["i pref1", first.as_str()]);
        add(&["i-1 tag", prev]);
        add(&["i-2 tag", prev2]);
        add(&["i tag+i-2 tag", prev, prev2]);
        add(&["i word", context[i].as_str()]);
        add(&["i-1 tag+i word", prev, context[i].as_str()]);
        add(&["i-1 word", context[i - 1].as_str()]);
        add(&["i-1 suffix", suffix(&context[i - 1], 3).as_str()]);
        add(&["i-2 word", context[i - 2].as_str()]);
        add(&["i+1 word", context[i + 1].as_str()]);
        add(&["i+1 suffix", suffix(&context[i + 1], 3).as_str()]);
        add(&["i+2 word", context[i + 2].as_str()]);
        features
    }
}

impl TextTagger for PerceptronTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        // one pass over the whole post, context carries across sentences
        let tokens = self.tokenizer.tokenize(text);
        self.tag_tokens(&tokens)
    }
}
