use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tempfile::TempDir;

use super::{Analysis, Fixer, Outcome};
use crate::config::SentifixConfig;
use crate::error::FixerError;
use crate::nlp::{PerceptronTagger, TaggedToken, TextTagger};
use crate::rewriter::{RewriteOptions, RewrittenText};
use crate::sentiment::{PatternAnalyzer, SentimentScore};
use crate::testing::{synset, write_tagger, write_wordnet, TableLexicon, TableScorer, TableTagger};
use crate::wordnet::WordNet;

/// Tagger that counts how often the rewriter asked for tags.
struct CountingTagger {
    inner: TableTagger,
    calls: Arc<AtomicUsize>,
}

impl TextTagger for CountingTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.tag(text)
    }
}

fn stub_fixer() -> (Fixer, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let tagger = CountingTagger {
        inner: TableTagger::new(&[("terrible", "JJ"), ("great", "JJ")]),
        calls: calls.clone(),
    };
    let scorer = TableScorer::new(&[
        ("This is terrible.", -1.0),
        ("terrible", -1.0),
        ("This is great.", 0.8),
        ("awful", -0.9),
    ]);
    let lexicon = TableLexicon::default().with("terrible", vec![synset(1, &["terrible", "awful", "tremendous"])]);
    let fixer = Fixer::new(Box::new(tagger), Box::new(scorer), Box::new(lexicon));
    (fixer, calls)
}

fn fixture_fixer(dir: &TempDir) -> Fixer {
    write_wordnet(&dir.path().join("wordnet"));
    write_tagger(&dir.path().join("tagger"));
    let wordnet = WordNet::open(&dir.path().join("wordnet")).expect("fixture wordnet");
    let tagger = PerceptronTagger::load(&dir.path().join("tagger")).expect("fixture tagger");
    Fixer::new(Box::new(tagger), Box::new(PatternAnalyzer::default()), Box::new(wordnet))
}

#[test]
fn test_positive_text_is_left_alone() {
    let (fixer, calls) = stub_fixer();
    let analysis = fixer.analyze("This is great.");

    assert_eq!(analysis.outcome, Outcome::AlreadyPositive);
    assert_eq!(analysis.label(), "Sentiment: Positive (Score: 0.80)");
    assert_eq!(analysis.message(), "Text is already positive. No changes needed.");
    assert_eq!(calls.load(Ordering::SeqCst), 0, "rewrite must not run for positive text");
}

#[test]
fn test_neutral_and_empty_text() {
    let (fixer, calls) = stub_fixer();

    for text in ["", "   ", "The cat sat on the mat."] {
        let analysis = fixer.analyze(text);
        assert_eq!(analysis.outcome, Outcome::Neutral);
        assert_eq!(analysis.label(), "Sentiment: Neutral (Score: 0.00)");
        assert_eq!(analysis.message(), "Text is neutral. Consider adding more emotional expression.");
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(fixer.rewrite("").is_empty());
}

#[test]
fn test_negative_text_is_rewritten() {
    let (fixer, calls) = stub_fixer();
    let analysis = fixer.analyze("This is terrible.");

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(analysis.label(), "Sentiment: Negative (Score: -1.00)");
    assert_eq!(analysis.message(), "Fixed Text: This is tremendous .");

    let rewritten = analysis.rewritten().expect("negative text is rewritten");
    assert_eq!(rewritten.tokens.len(), 4);
    assert_eq!(rewritten.tokens[2], "tremendous");
}

#[test]
fn test_options_reach_the_rewriter() {
    let (fixer, _) = stub_fixer();
    let fixer = fixer.with_options(RewriteOptions::default().with_screening(false));

    assert_eq!(fixer.candidates("terrible"), vec!["awful", "tremendous"]);
    assert_eq!(fixer.rewrite("This is terrible.").to_string(), "This is awful .");
}

#[test]
fn test_message_of_rewritten_outcome() {
    let analysis = Analysis {
        score: SentimentScore::new(-0.5, 0.5),
        outcome: Outcome::Rewritten(RewrittenText {
            tokens: vec!["a".to_string(), "fine".to_string(), "day".to_string()],
            substitutions: Vec::new(),
        }),
    };
    assert_eq!(analysis.message(), "Fixed Text: a fine day");
    assert_eq!(analysis.label(), "Sentiment: Negative (Score: -0.50)");
}

#[test]
fn test_end_to_end_with_real_models() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let fixer = fixture_fixer(&temp_dir);

    let analysis = fixer.analyze("This is terrible.");
    assert_eq!(analysis.label(), "Sentiment: Negative (Score: -1.00)");
    // awful and dreadful score negative themselves
    assert_eq!(analysis.message(), "Fixed Text: This is frightful .");

    let analysis = fixer.analyze("This is great.");
    assert_eq!(analysis.message(), "Text is already positive. No changes needed.");
}

#[test]
fn test_end_to_end_keeps_words_without_synonyms() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let fixer = fixture_fixer(&temp_dir);

    // "horrible" is tagged JJ and scores negative, but WordNet has no entry for it
    let analysis = fixer.analyze("The day was horrible.");
    assert_eq!(analysis.message(), "Fixed Text: The day was horrible .");
}

#[tokio::test]
async fn test_from_config_loads_installed_resources() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let data = temp_dir.path().join("data");
    write_wordnet(&data.join("corpora/wordnet"));
    write_tagger(&data.join("taggers/averaged_perceptron_tagger_eng"));

    let mut config = SentifixConfig::default();
    config.data_dir = Some(data);
    config.auto_download = false;
    config.screen_candidates = false;

    let fixer = Fixer::from_config(&config).await.expect("fixer should load");
    assert!(!fixer.options().screen_candidates);
    assert_eq!(fixer.analyze("This is terrible.").message(), "Fixed Text: This is awful .");
}

#[tokio::test]
async fn test_from_config_fails_without_resources() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut config = SentifixConfig::default();
    config.data_dir = Some(temp_dir.path().to_path_buf());
    config.auto_download = false;

    match Fixer::from_config(&config).await {
        Err(FixerError::ResourceMissing(_)) => {}
        Err(other) => panic!("expected ResourceMissing, got {}", other),
        Ok(_) => panic!("expected ResourceMissing, got a fixer"),
    }
}
