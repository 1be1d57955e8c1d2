//! Base-form reduction of inflected words.
//!
//! A form listed in the exception file of its part of speech maps to the
//! listed base forms. Otherwise detachment rules strip inflectional endings
//! (`-ies` → `-y`, `-est` → ``, ...), repeatedly, until candidate forms exist
//! in the index.

use std::collections::{HashMap, HashSet};

use super::types::PartOfSpeech;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

pub fn detachment_rules(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos.file_pos() {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective => ADJECTIVE_RULES,
        _ => &[],
    }
}

fn apply_rules(forms: &[String], rules: &[(&str, &str)]) -> Vec<String> {
    forms
        .iter()
        .flat_map(|form| {
            rules.iter().filter_map(move |(old, new)| {
                form.strip_suffix(*old).map(|stem| format!("{}{}", stem, new))
            })
        })
        .collect()
}

fn filter_forms<F>(forms: Vec<String>, exists: &F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut seen = HashSet::new();
    forms
        .into_iter()
        .filter(|form| exists(form) && seen.insert(form.clone()))
        .collect()
}

/// Base forms of `form` for `pos` that `exists` accepts, in discovery order.
pub fn morphy<F>(form: &str, pos: PartOfSpeech, exceptions: &HashMap<String, Vec<String>>, exists: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    if let Some(bases) = exceptions.get(form) {
        let mut forms = vec![form.to_string()];
        forms.extend(bases.iter().cloned());
        return filter_forms(forms, &exists);
    }

    let rules = detachment_rules(pos);
    let mut forms = apply_rules(&[form.to_string()], rules);

    let mut candidates = vec![form.to_string()];
    candidates.extend(forms.iter().cloned());
    let results = filter_forms(candidates, &exists);
    if !results.is_empty() {
        return results;
    }

    while !forms.is_empty() {
        forms = apply_rules(&forms, rules);
        let results = filter_forms(forms.clone(), &exists);
        if !results.is_empty() {
            return results;
        }
    }
    Vec::new()
}
