use regex::Regex;
use std::sync::LazyLock;

type Rules = Vec<(Regex, &'static str)>;

fn rules(table: &[(&str, &'static str)]) -> Rules {
    table
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).expect("static tokenizer pattern"), *replacement))
        .collect()
}

static STARTING_QUOTES: LazyLock<Rules> = LazyLock::new(|| {
    rules(&[
        (r"([«“‘„]|[`]+)", " ${1} "),
        (r#"^""#, "``"),
        (r"(``)", " ${1} "),
        (r#"([ (\[{<])("|'{2})"#, "${1} `` "),
    ])
});

static PUNCTUATION: LazyLock<Rules> = LazyLock::new(|| {
    rules(&[
        (r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2} ${3} "),
        (r"([:,])([^\d])", " ${1} ${2}"),
        (r"([:,])$", " ${1} "),
        (r"\.{2,}", " ${0} "),
        (r"[;@#$%&]", " ${0} "),
        (r"[?!]", " ${0} "),
        (r"([^'])' ", "${1} ' "),
        (r"[*]", " ${0} "),
    ])
});

static PARENS_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\]\[(){}<>]").expect("static tokenizer pattern"));

static DOUBLE_DASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--").expect("static tokenizer pattern"));

static ENDING_QUOTES: LazyLock<Rules> = LazyLock::new(|| {
    rules(&[
        (r"([»”’])", " ${1} "),
        (r"''", " '' "),
        (r#"""#, " '' "),
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
    ])
});

static CONTRACTIONS: LazyLock<Rules> = LazyLock::new(|| {
    rules(&[
        (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
        (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
        (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
        (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
        (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(more)('n)\b", " ${1} ${2} "),
        (r"(?i)\b(wan)(na)\b", " ${1} ${2} "),
        (r"(?i) ('t)(is)\b", " ${1} ${2} "),
        (r"(?i) ('t)(was)\b", " ${1} ${2} "),
    ])
});

/// Lower-cased abbreviations that end in a period without ending a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc", "ltd", "co",
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

/// Treebank-style word tokenizer.
///
/// Text is first cut into sentences at terminal punctuation followed by
/// whitespace, then each sentence is split into words with clitics,
/// punctuation and quotes separated: `"Don't!"` gives `` `` ``, `Do`, `n't`,
/// `!`, `''`.
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.sentences(text)
            .into_iter()
            .flat_map(|sentence| self.tokenize_sentence(sentence))
            .collect()
    }

    /// Tokens lower-cased, as used for lexicon lookups.
    pub fn tokenize_lowercase(&self, text: &str) -> Vec<String> {
        self.tokenize(text).into_iter().map(|t| t.to_lowercase()).collect()
    }

    pub fn sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, c) = chars[i];
            if !matches!(c, '.' | '!' | '?') {
                i += 1;
                continue;
            }

            let mut j = i + 1;
            while j < chars.len() && matches!(chars[j].1, '.' | '!' | '?' | '"' | '\'' | ')' | ']' | '”' | '’') {
                j += 1;
            }

            let at_boundary = j < chars.len() && chars[j].1.is_whitespace();
            if at_boundary && !(c == '.' && Self::ends_with_abbreviation(&text[start..pos])) {
                let end = chars[j].0;
                if !text[start..end].trim().is_empty() {
                    sentences.push(text[start..end].trim());
                }
                start = end;
            }
            i = j;
        }

        if !text[start..].trim().is_empty() {
            sentences.push(text[start..].trim());
        }
        sentences
    }

    fn ends_with_abbreviation(head: &str) -> bool {
        let last = head.rsplit(char::is_whitespace).next().unwrap_or("");
        let last = last.trim_start_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
        if last.chars().count() == 1 && last.chars().all(char::is_alphabetic) {
            // initials such as "J. Smith"
            return true;
        }
        ABBREVIATIONS.contains(&last.as_str())
    }

    pub(crate) fn tokenize_sentence(&self, sentence: &str) -> Vec<String> {
        let mut text = sentence.to_string();

        for (regex, replacement) in STARTING_QUOTES.iter() {
            text = regex.replace_all(&text, *replacement).into_owned();
        }
        for (regex, replacement) in PUNCTUATION.iter() {
            text = regex.replace_all(&text, *replacement).into_owned();
        }
        text = PARENS_BRACKETS.replace_all(&text, " ${0} ").into_owned();
        text = DOUBLE_DASHES.replace_all(&text, " -- ").into_owned();

        text = format!(" {} ", text);
        for (regex, replacement) in ENDING_QUOTES.iter() {
            text = regex.replace_all(&text, *replacement).into_owned();
        }
        for (regex, replacement) in CONTRACTIONS.iter() {
            text = regex.replace_all(&text, *replacement).into_owned();
        }

        text.split_whitespace().map(str::to_string).collect()
    }
}
