use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{FixerError, FixerResult};

static BUILTIN_LEXICON: &str = include_str!("../../data/en-sentiment.tsv");

static WORD_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<word\s([^>]*?)/?>").expect("static lexicon pattern"));
static ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([\w-]+)\s*=\s*"([^"]*)""#).expect("static lexicon pattern"));

/// Part-of-speech labels whose senses make a word a modifier of the next word.
const MODIFIER_TAGS: &[&str] = &["RB"];

/// Sense-averaged scores of a word form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    pub intensity: f64,
    /// The form has an adverb sense and scales the following word.
    pub modifier: bool,
}

#[derive(Default)]
struct Senses {
    polarity: f64,
    subjectivity: f64,
    intensity: f64,
    count: usize,
    modifier: bool,
}

/// Word form to sentiment mapping.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
}

impl Lexicon {
    /// The compiled-in lexicon.
    pub fn builtin() -> Self {
        let rows = BUILTIN_LEXICON
            .lines()
            .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
            .filter_map(|line| {
                let fields: Vec<&str> = line.split('\t').collect();
                match fields.as_slice() {
                    [form, pos, polarity, subjectivity, intensity] => Some((
                        form.to_string(),
                        pos.to_string(),
                        polarity.parse::<f64>().ok()?,
                        subjectivity.parse::<f64>().ok()?,
                        intensity.parse::<f64>().ok()?,
                    )),
                    _ => None,
                }
            });
        Self::from_senses(rows)
    }

    /// Loads a pattern `en-sentiment.xml` lexicon.
    pub fn from_pattern_xml(path: &Path) -> FixerResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| FixerError::io(path, e))?;
        let mut rows = Vec::new();

        for (index, line) in content.lines().enumerate() {
            for element in WORD_ELEMENT.captures_iter(line) {
                let attributes: HashMap<&str, &str> = ATTRIBUTE
                    .captures_iter(&element[1])
                    .filter_map(|c| Some((c.get(1)?.as_str(), c.get(2)?.as_str())))
                    .collect();

                let Some(form) = attributes.get("form") else {
                    return Err(FixerError::malformed(path, index + 1, "word element without form"));
                };
                let number = |name: &str, default: f64| -> FixerResult<f64> {
                    match attributes.get(name) {
                        Some(value) => value
                            .parse()
                            .map_err(|_| FixerError::malformed(path, index + 1, format!("bad {} {:?}", name, value))),
                        None => Ok(default),
                    }
                };
                rows.push((
                    form.to_lowercase(),
                    attributes.get("pos").copied().unwrap_or("").to_string(),
                    number("polarity", 0.0)?,
                    number("subjectivity", 0.0)?,
                    number("intensity", 1.0)?,
                ));
            }
        }

        if rows.is_empty() {
            return Err(FixerError::malformed(path, 0, "no word entries"));
        }
        debug!(target: "fixer::resources", path = %path.display(), senses = rows.len(), "sentiment lexicon loaded");
        Ok(Self::from_senses(rows))
    }

    /// Builds the lexicon from `(form, pos, polarity, subjectivity, intensity)`
    /// senses, averaging all senses of a form.
    pub fn from_senses<I>(senses: I) -> Self
    where
        I: IntoIterator<Item = (String, String, f64, f64, f64)>,
    {
        let mut grouped: HashMap<String, Senses> = HashMap::new();
        for (form, pos, polarity, subjectivity, intensity) in senses {
            let group = grouped.entry(form.to_lowercase()).or_default();
            group.polarity += polarity;
            group.subjectivity += subjectivity;
            group.intensity += intensity;
            group.count += 1;
            group.modifier |= MODIFIER_TAGS.contains(&pos.as_str());
        }

        let entries = grouped
            .into_iter()
            .map(|(form, group)| {
                let n = group.count as f64;
                let entry = LexiconEntry {
                    polarity: group.polarity / n,
                    subjectivity: group.subjectivity / n,
                    intensity: group.intensity / n,
                    modifier: group.modifier,
                };
                (form, entry)
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    pub fn is_modifier(&self, word: &str) -> bool {
        self.entries.get(word).is_some_and(|e| e.modifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
