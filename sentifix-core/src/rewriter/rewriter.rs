use std::collections::HashSet;

use rand::seq::SliceRandom;
use tracing::{debug, trace};

use super::structs::{CandidateOrder, RewriteOptions, RewrittenText, Substitution};
use crate::nlp::TextTagger;
use crate::sentiment::SentimentScorer;
use crate::wordnet::LexicalDatabase;

/// Replaces negative adjectives of a text with synonyms.
///
/// Each capability is borrowed so the same rewriter logic runs against the
/// real models or against test stubs.
pub struct PositivityRewriter<'a> {
    tagger: &'a dyn TextTagger,
    scorer: &'a dyn SentimentScorer,
    lexicon: &'a dyn LexicalDatabase,
    options: RewriteOptions,
}

impl<'a> PositivityRewriter<'a> {
    pub fn new(
        tagger: &'a dyn TextTagger,
        scorer: &'a dyn SentimentScorer,
        lexicon: &'a dyn LexicalDatabase,
    ) -> Self {
        Self {
            tagger,
            scorer,
            lexicon,
            options: RewriteOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RewriteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    pub fn rewrite(&self, text: &str) -> RewrittenText {
        let tagged = self.tagger.tag(text);
        let mut result = RewrittenText {
            tokens: Vec::with_capacity(tagged.len()),
            substitutions: Vec::new(),
        };

        for (index, token) in tagged.into_iter().enumerate() {
            if !token.is_adjective() {
                result.tokens.push(token.word);
                continue;
            }

            let polarity = self.scorer.score(&token.word).polarity;
            if polarity >= 0.0 {
                result.tokens.push(token.word);
                continue;
            }

            match self.candidates(&token.word).into_iter().next() {
                Some(replacement) => {
                    debug!(target: "fixer::rewrite", index, word = %token.word, %replacement, polarity, "replacing adjective");
                    result.substitutions.push(Substitution {
                        index,
                        original: token.word,
                        replacement: replacement.clone(),
                        polarity,
                    });
                    result.tokens.push(replacement);
                }
                None => {
                    debug!(target: "fixer::rewrite", index, word = %token.word, polarity, "no usable synonym, keeping word");
                    result.tokens.push(token.word);
                }
            }
        }

        result
    }

    /// Synonyms of `word` eligible as replacements, best first.
    ///
    /// A lemma qualifies when it is not `word` itself (ignoring case) and has
    /// no recorded antonym. With screening enabled it must also not score
    /// negative on its own.
    pub fn candidates(&self, word: &str) -> Vec<String> {
        let source = word.trim().to_lowercase();
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for synset in self.lexicon.synsets(word) {
            for lemma in &synset.lemmas {
                let name = lemma.display_name();
                if name.to_lowercase() == source || lemma.has_antonym() {
                    continue;
                }
                if seen.insert(name.clone()) {
                    candidates.push(name);
                }
            }
        }

        match self.options.order {
            CandidateOrder::SenseRank => {}
            CandidateOrder::Lexical => candidates.sort(),
            CandidateOrder::Unordered => candidates.shuffle(&mut rand::rng()),
        }

        if self.options.screen_candidates {
            candidates.retain(|candidate| {
                let polarity = self.scorer.score(candidate).polarity;
                if polarity < 0.0 {
                    trace!(target: "fixer::rewrite", %candidate, polarity, "screened out negative synonym");
                }
                polarity >= 0.0
            });
        }

        candidates
    }
}
