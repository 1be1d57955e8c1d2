use std::collections::HashMap;
use std::fs;

use serde_json::json;
use tempfile::TempDir;

use super::{PerceptronModel, PerceptronTagger, TaggedToken, TextTagger, WordTokenizer};

fn tokens(text: &str) -> Vec<String> {
    WordTokenizer::new().tokenize(text)
}

#[test]
fn test_tokenizer_splits_final_period() {
    assert_eq!(tokens("This is terrible."), vec!["This", "is", "terrible", "."]);
}

#[test]
fn test_tokenizer_empty_and_blank_input() {
    assert!(tokens("").is_empty());
    assert!(tokens("   \n\t ").is_empty());
}

#[test]
fn test_tokenizer_clitics_and_punctuation() {
    assert_eq!(tokens("I can't believe it's this bad!"), vec!["I", "ca", "n't", "believe", "it", "'s", "this", "bad", "!"]);
    assert_eq!(tokens("Well, that was (sort of) rude; really?"), vec![
        "Well", ",", "that", "was", "(", "sort", "of", ")", "rude", ";", "really", "?"
    ]);
}

#[test]
fn test_tokenizer_quotes() {
    assert_eq!(tokens("\"Awful\" he said."), vec!["``", "Awful", "''", "he", "said", "."]);
}

#[test]
fn test_tokenizer_split_contractions() {
    assert_eq!(tokens("I cannot stay"), vec!["I", "can", "not", "stay"]);
    assert_eq!(tokens("we are gonna win"), vec!["we", "are", "gon", "na", "win"]);
}

#[test]
fn test_tokenizer_numbers_keep_commas() {
    assert_eq!(tokens("It cost $1,000 today"), vec!["It", "cost", "$", "1,000", "today"]);
}

#[test]
fn test_sentences_split_on_terminal_punctuation() {
    let tokenizer = WordTokenizer::new();
    assert_eq!(tokenizer.sentences("Bad day. Worse night! Why?"), vec!["Bad day.", "Worse night!", "Why?"]);
    assert_eq!(tokenizer.sentences("Mr. Smith is rude."), vec!["Mr. Smith is rude."]);
    assert_eq!(tokens("Bad day. Worse night."), vec!["Bad", "day", ".", "Worse", "night", "."]);
}

#[test]
fn test_sentences_end_after_no() {
    let tokenizer = WordTokenizer::new();
    assert_eq!(
        tokenizer.sentences("The answer is no. It was terrible."),
        vec!["The answer is no.", "It was terrible."]
    );
    assert_eq!(tokens("The answer is no. Sorry"), vec!["The", "answer", "is", "no", ".", "Sorry"]);
}

#[test]
fn test_tagged_token_adjective_family() {
    assert!(TaggedToken::new("bad", "JJ").is_adjective());
    assert!(TaggedToken::new("worse", "JJR").is_adjective());
    assert!(TaggedToken::new("worst", "JJS").is_adjective());
    assert!(!TaggedToken::new("badly", "RB").is_adjective());
    assert!(!TaggedToken::new("J", "NNP").is_adjective());
}

#[test]
fn test_normalize_word_classes() {
    assert_eq!(PerceptronTagger::normalize("well-known"), "!HYPHEN");
    assert_eq!(PerceptronTagger::normalize("-minus"), "-minus");
    assert_eq!(PerceptronTagger::normalize("1999"), "!YEAR");
    assert_eq!(PerceptronTagger::normalize("42nd"), "!DIGITS");
    assert_eq!(PerceptronTagger::normalize("Terrible"), "terrible");
}

#[test]
fn test_features_use_context_window() {
    let context: Vec<String> = ["-START-", "-START2-", "this", "is", "terrible", ".", "-END-", "-END2-"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let features = PerceptronTagger::features(2, "terrible", &context, "VBZ", "DT");

    assert_eq!(features.get("bias"), Some(&1));
    assert_eq!(features.get("i suffix ble"), Some(&1));
    assert_eq!(features.get("i pref1 t"), Some(&1));
    assert_eq!(features.get("i-1 tag VBZ"), Some(&1));
    assert_eq!(features.get("i tag+i-2 tag VBZ DT"), Some(&1));
    assert_eq!(features.get("i-1 word is"), Some(&1));
    assert_eq!(features.get("i+1 word ."), Some(&1));
    assert_eq!(features.get("i+2 word -END-"), Some(&1));
}

fn toy_model() -> PerceptronModel {
    let mut weights: HashMap<String, HashMap<String, f64>> = HashMap::new();
    weights.insert("i suffix ble".to_string(), HashMap::from([("JJ".to_string(), 2.0), ("NN".to_string(), 0.5)]));
    weights.insert("bias".to_string(), HashMap::from([("NN".to_string(), 1.0)]));
    weights.insert("i-1 tag DT".to_string(), HashMap::from([("NN".to_string(), 0.5)]));

    PerceptronModel {
        weights,
        tagdict: HashMap::from([
            ("This".to_string(), "DT".to_string()),
            ("is".to_string(), "VBZ".to_string()),
            (".".to_string(), ".".to_string()),
        ]),
        classes: vec!["DT".to_string(), "JJ".to_string(), "NN".to_string(), "VBZ".to_string(), ".".to_string()],
    }
}

#[test]
fn test_predict_ties_go_to_greater_label() {
    let model = PerceptronModel {
        weights: HashMap::from([("bias".to_string(), HashMap::from([("NN".to_string(), 1.0), ("VB".to_string(), 1.0)]))]),
        tagdict: HashMap::new(),
        classes: vec!["NN".to_string(), "VB".to_string()],
    };
    let features = HashMap::from([("bias".to_string(), 1u32)]);
    assert_eq!(model.predict(&features), "VB");
}

#[test]
fn test_perceptron_tags_sentence() {
    let tagger = PerceptronTagger::new(toy_model());
    let tagged = tagger.tag("This is terrible.");

    assert_eq!(tagged, vec![
        TaggedToken::new("This", "DT"),
        TaggedToken::new("is", "VBZ"),
        TaggedToken::new("terrible", "JJ"),
        TaggedToken::new(".", "."),
    ]);
    assert!(tagger.tag("").is_empty());
}

#[test]
fn test_perceptron_context_spans_sentences() {
    let model = PerceptronModel {
        weights: HashMap::from([
            ("bias".to_string(), HashMap::from([("NN".to_string(), 1.0)])),
            ("i-1 tag .".to_string(), HashMap::from([("JJ".to_string(), 5.0)])),
        ]),
        tagdict: HashMap::from([(".".to_string(), ".".to_string())]),
        classes: vec!["NN".to_string(), "JJ".to_string(), ".".to_string()],
    };
    let tagger = PerceptronTagger::new(model);

    // the tag of "." must still be visible to the first word of the next sentence
    assert_eq!(tagger.tag("Go. Now"), vec![
        TaggedToken::new("Go", "NN"),
        TaggedToken::new(".", "."),
        TaggedToken::new("Now", "JJ"),
    ]);
}

#[test]
fn test_perceptron_model_load_from_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let dir = temp_dir.path();

    fs::write(dir.join("averaged_perceptron_tagger_eng.weights.json"), json!({
        "i suffix ble": {"JJ": 2.0},
        "bias": {"NN": 1.0}
    }).to_string()).unwrap();
    fs::write(dir.join("averaged_perceptron_tagger_eng.tagdict.json"), json!({"is": "VBZ"}).to_string()).unwrap();
    fs::write(dir.join("averaged_perceptron_tagger_eng.classes.json"), json!(["NN", "JJ", "VBZ", "NN"]).to_string()).unwrap();

    let tagger = PerceptronTagger::load(dir).expect("model should load");
    assert_eq!(tagger.model().classes, vec!["JJ", "NN", "VBZ"]);

    let tagged = tagger.tag("is horrible");
    assert_eq!(tagged[0].tag, "VBZ");
    assert_eq!(tagged[1].tag, "JJ");
}

#[test]
fn test_perceptron_model_missing_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let err = PerceptronModel::load(temp_dir.path()).err().expect("load should fail");
    assert!(err.to_string().contains(".weights.json"), "got: {}", err);
}
