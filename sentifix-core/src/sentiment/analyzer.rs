use tracing::trace;

use super::lexicon::{Lexicon, LexiconEntry};
use super::types::{SentimentScore, SentimentScorer};
use crate::nlp::WordTokenizer;

const NEGATIONS: &[&str] = &["no", "not", "n't", "never"];

/// Scores of one sentiment-bearing chunk, e.g. `["not", "very", "good"]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub words: Vec<String>,
    pub polarity: f64,
    pub subjectivity: f64,
    intensity: f64,
    negated: bool,
}

impl Assessment {
    fn new(word: &str, entry: &LexiconEntry) -> Self {
        Self {
            words: vec![word.to_string()],
            polarity: entry.polarity,
            subjectivity: entry.subjectivity,
            intensity: entry.intensity,
            negated: false,
        }
    }
}

/// Lexicon-based analyzer: averages the polarity of known words, with
/// adverb modifiers scaling the next word, negations flipping it and
/// exclamation marks boosting it.
#[derive(Debug, Clone)]
pub struct PatternAnalyzer {
    lexicon: Lexicon,
    tokenizer: WordTokenizer,
}

impl Default for PatternAnalyzer {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl PatternAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            tokenizer: WordTokenizer::new(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn assessments(&self, text: &str) -> Vec<Assessment> {
        let words = self.tokenizer.tokenize_lowercase(text);
        let mut assessments: Vec<Assessment> = Vec::new();
        let mut modifier: Option<String> = None;
        let mut negation: Option<String> = None;

        for word in &words {
            let is_negation = NEGATIONS.contains(&word.as_str());

            if let Some(entry) = self.lexicon.get(word) {
                match (modifier.is_some(), assessments.last_mut()) {
                    // "really good"
                    (true, Some(last)) => {
                        last.words.push(word.clone());
                        last.polarity = (entry.polarity * last.intensity).clamp(-1.0, 1.0);
                        last.subjectivity = (entry.subjectivity * last.intensity).clamp(-1.0, 1.0);
                        last.intensity = entry.intensity;
                    }
                    _ => assessments.push(Assessment::new(word, entry)),
                }

                // "not really good"
                if let (Some(n), Some(last)) = (negation.take(), assessments.last_mut()) {
                    last.words.insert(0, n);
                    last.intensity = 1.0 / if last.intensity == 0.0 { 1.0 } else { last.intensity };
                    last.negated = true;
                }

                modifier = entry.modifier.then(|| word.clone());
                if is_negation {
                    negation = Some(word.clone());
                }
                continue;
            }

            if is_negation {
                negation = Some(word.clone());
            } else if negation.is_some() && word.trim_matches('\'').chars().count() > 1 {
                // negation carries across short words: "not a good"
                negation = None;
            }

            let modifies = modifier.as_deref().is_some_and(|m| self.lexicon.is_modifier(m));
            if negation.is_some() && modifies {
                // "really not good"
                if let (Some(n), Some(last)) = (negation.take(), assessments.last_mut()) {
                    last.words.push(n);
                    last.negated = true;
                }
            } else if modifier.is_some() && word.chars().count() > 2 {
                modifier = None;
            }

            if word == "!" {
                if let Some(last) = assessments.last_mut() {
                    last.words.push(word.clone());
                    last.polarity = (last.polarity * 1.25).clamp(-1.0, 1.0);
                }
            }
        }

        for assessment in &mut assessments {
            if assessment.negated {
                // "not good" is slightly bad, "not bad" slightly good
                assessment.polarity *= -0.5;
            }
        }
        assessments
    }
}

impl SentimentScorer for PatternAnalyzer {
    fn score(&self, text: &str) -> SentimentScore {
        let assessments = self.assessments(text);
        if assessments.is_empty() {
            return SentimentScore::neutral();
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.polarity).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / n;
        trace!(target: "fixer::analyze", text, polarity, subjectivity, chunks = assessments.len(), "scored");
        SentimentScore::new(polarity, subjectivity)
    }
}
