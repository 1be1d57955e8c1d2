use tracing::{debug, info};

use super::analysis::{Analysis, Outcome};
use crate::config::SentifixConfig;
use crate::error::FixerResult;
use crate::nlp::{PerceptronTagger, TextTagger};
use crate::resources::{ResourceKind, ResourceManager};
use crate::rewriter::{PositivityRewriter, RewriteOptions, RewrittenText};
use crate::sentiment::{Lexicon, PatternAnalyzer, SentimentCategory, SentimentScore, SentimentScorer};
use crate::wordnet::{LexicalDatabase, WordNet};

/// Scores texts and rewrites the negative ones.
///
/// Owns the three capabilities it needs. They are plain trait objects so
/// any tagger, scorer or lexical database can be plugged in.
pub struct Fixer {
    tagger: Box<dyn TextTagger>,
    scorer: Box<dyn SentimentScorer>,
    lexicon: Box<dyn LexicalDatabase>,
    options: RewriteOptions,
}

impl Fixer {
    pub fn new(
        tagger: Box<dyn TextTagger>,
        scorer: Box<dyn SentimentScorer>,
        lexicon: Box<dyn LexicalDatabase>,
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

    /// Resolves the model data for `config`, downloading it if allowed, and
    /// loads every capability. Any failure is fatal for the caller.
    pub async fn from_config(config: &SentifixConfig) -> FixerResult<Self> {
        let manager = ResourceManager::from_config(config)?;
        manager.ensure().await?;
        Ok(Self::load(&manager)?.with_options(config.rewrite_options()))
    }

    /// Loads the capabilities from installed resources.
    pub fn load(manager: &ResourceManager) -> FixerResult<Self> {
        let wordnet = WordNet::open(&manager.path(ResourceKind::WordNet))?;
        let tagger = PerceptronTagger::load(&manager.path(ResourceKind::Tagger))?;

        let lexicon = if manager.is_present(ResourceKind::Lexicon) {
            Lexicon::from_pattern_xml(&manager.path(ResourceKind::Lexicon))?
        } else {
            debug!(target: "fixer::analyze", "no sentiment lexicon installed, using the built-in one");
            Lexicon::builtin()
        };

        info!(
            target: "fixer::analyze",
            data_dir = %manager.data_dir().display(),
            lexicon_entries = lexicon.len(),
            "models loaded"
        );
        Ok(Self::new(
            Box::new(tagger),
            Box::new(PatternAnalyzer::new(lexicon)),
            Box::new(wordnet),
        ))
    }

    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    pub fn score(&self, text: &str) -> SentimentScore {
        self.scorer.score(text)
    }

    pub fn rewrite(&self, text: &str) -> RewrittenText {
        self.rewriter().rewrite(text)
    }

    pub fn candidates(&self, word: &str) -> Vec<String> {
        self.rewriter().candidates(word)
    }

    /// Scores `text` and rewrites it only when it is negative.
    pub fn analyze(&self, text: &str) -> Analysis {
        let score = self.score(text);
        let outcome = match score.category() {
            SentimentCategory::Positive => Outcome::AlreadyPositive,
            SentimentCategory::Neutral => Outcome::Neutral,
            SentimentCategory::Negative => Outcome::Rewritten(self.rewrite(text)),
        };

        debug!(
            target: "fixer::analyze",
            polarity = score.polarity,
            subjectivity = score.subjectivity,
            category = %score.category(),
            "analyzed"
        );
        Analysis { score, outcome }
    }

    fn rewriter(&self) -> PositivityRewriter<'_> {
        PositivityRewriter::new(self.tagger.as_ref(), self.scorer.as_ref(), self.lexicon.as_ref())
            .with_options(self.options.clone())
    }
}
