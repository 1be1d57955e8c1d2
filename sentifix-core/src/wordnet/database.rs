use std::collections::HashMap;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::morphy::morphy;
use super::types::{Lemma, LexicalDatabase, PartOfSpeech, Synset};
use crate::error::{FixerError, FixerResult};

const ANTONYM: &str = "!";

/// Lemma-level pointer: `source` lemma of this synset to `target` lemma of
/// the synset at `offset`. Both indexes are 1-based.
#[derive(Debug, Clone, Copy)]
struct LexicalPointer {
    pos: PartOfSpeech,
    offset: u64,
    source: usize,
    target: usize,
}

#[derive(Debug)]
struct ParsedSynset {
    pos: PartOfSpeech,
    offset: u64,
    words: Vec<(String, u8)>,
    antonyms: Vec<LexicalPointer>,
    gloss: String,
}

#[derive(Debug)]
struct DataFile {
    path: PathBuf,
    content: String,
    lines: HashMap<u64, Range<usize>>,
}

impl DataFile {
    fn load(path: PathBuf) -> FixerResult<Self> {
        let content = fs::read_to_string(&path).map_err(|e| FixerError::io(&path, e))?;
        let mut lines = HashMap::new();
        let mut start = 0;

        for (index, line) in content.split_inclusive('\n').enumerate() {
            let range = start..start + line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
            start += line.len();
            if line.starts_with("  ") || line.trim().is_empty() {
                continue; // license header
            }
            let offset = line
                .split(' ')
                .next()
                .and_then(|field| field.parse::<u64>().ok())
                .ok_or_else(|| FixerError::malformed(&path, index + 1, "missing synset offset"))?;
            lines.insert(offset, range);
        }

        Ok(Self { path, content, lines })
    }

    fn line(&self, offset: u64) -> Option<&str> {
        self.lines.get(&offset).map(|range| &self.content[range.clone()])
    }
}

/// WordNet database read from the `dict` directory of a WordNet 3.x install.
#[derive(Debug)]
pub struct WordNet {
    dir: PathBuf,
    index: HashMap<PartOfSpeech, HashMap<String, Vec<u64>>>,
    data: HashMap<PartOfSpeech, DataFile>,
    exceptions: HashMap<PartOfSpeech, HashMap<String, Vec<String>>>,
}

impl WordNet {
    pub fn open(dir: &Path) -> FixerResult<Self> {
        let mut index = HashMap::new();
        let mut data = HashMap::new();
        let mut exceptions = HashMap::new();

        for pos in PartOfSpeech::SEARCH_ORDER {
            let suffix = pos.file_suffix();

            let index_path = dir.join(format!("index.{}", suffix));
            let data_path = dir.join(format!("data.{}", suffix));
            for path in [&index_path, &data_path] {
                if !path.is_file() {
                    return Err(FixerError::ResourceMissing(format!("WordNet file {}", path.display())));
                }
            }

            index.insert(pos, Self::load_index(&index_path)?);
            data.insert(pos, DataFile::load(data_path)?);

            // exception lists are optional
            let exc_path = dir.join(format!("{}.exc", suffix));
            let exc = if exc_path.is_file() {
                Self::load_exceptions(&exc_path)?
            } else {
                HashMap::new()
            };
            exceptions.insert(pos, exc);
        }

        let wordnet = Self {
            dir: dir.to_path_buf(),
            index,
            data,
            exceptions,
        };
        debug!(
            target: "fixer::wordnet",
            dir = %dir.display(),
            lemmas = wordnet.index.values().map(HashMap::len).sum::<usize>(),
            "WordNet loaded"
        );
        Ok(wordnet)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn load_index(path: &Path) -> FixerResult<HashMap<String, Vec<u64>>> {
        let content = fs::read_to_string(path).map_err(|e| FixerError::io(path, e))?;
        let mut index = HashMap::new();

        for (number, line) in content.lines().enumerate() {
            if line.starts_with("  ") || line.trim().is_empty() {
                continue;
            }
            let malformed = |reason: &str| FixerError::malformed(path, number + 1, reason);
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 4 {
                return Err(malformed("too few fields"));
            }

            let synset_count: usize = fields[2].parse().map_err(|_| malformed("bad synset count"))?;
            let pointer_count: usize = fields[3].parse().map_err(|_| malformed("bad pointer count"))?;
            // pointer symbols, then sense_cnt and tagsense_cnt
            let first_offset = 4 + pointer_count + 2;
            let offsets = fields
                .get(first_offset..first_offset + synset_count)
                .ok_or_else(|| malformed("truncated offsets"))?
                .iter()
                .map(|f| f.parse::<u64>().map_err(|_| malformed("bad offset")))
                .collect::<FixerResult<Vec<u64>>>()?;

            index.insert(fields[0].to_lowercase(), offsets);
        }
        Ok(index)
    }

    fn load_exceptions(path: &Path) -> FixerResult<HashMap<String, Vec<String>>> {
        let content = fs::read_to_string(path).map_err(|e| FixerError::io(path, e))?;
        Ok(content
            .lines()
            .filter_map(|line| {
                let mut fields = line.split_whitespace();
                let inflected = fields.next()?;
                Some((inflected.to_string(), fields.map(str::to_string).collect()))
            })
            .collect())
    }

    /// Base forms of `form` present in the index for `pos`.
    pub fn morphy(&self, form: &str, pos: PartOfSpeech) -> Vec<String> {
        let pos = pos.file_pos();
        let (Some(index), Some(exceptions)) = (self.index.get(&pos), self.exceptions.get(&pos)) else {
            return Vec::new();
        };
        morphy(form, pos, exceptions, |candidate| index.contains_key(candidate))
    }

    /// Senses of `word` restricted to one part of speech.
    pub fn synsets_for(&self, word: &str, pos: PartOfSpeech) -> Vec<Synset> {
        let word = word.trim().to_lowercase().replace(' ', "_");
        let pos = pos.file_pos();
        let Some(index) = self.index.get(&pos) else {
            return Vec::new();
        };

        self.morphy(&word, pos)
            .iter()
            .filter_map(|form| index.get(form))
            .flatten()
            .filter_map(|&offset| self.synset(pos, offset))
            .collect()
    }

    pub fn synset(&self, pos: PartOfSpeech, offset: u64) -> Option<Synset> {
        let parsed = self.parse_synset(pos, offset)?;
        let mut lemmas: Vec<Lemma> = parsed
            .words
            .iter()
            .map(|(name, lex_id)| Lemma {
                name: name.clone(),
                lex_id: *lex_id,
                antonyms: Vec::new(),
            })
            .collect();

        for pointer in &parsed.antonyms {
            let Some(lemma) = lemmas.get_mut(pointer.source - 1) else {
                continue;
            };
            let target = self
                .parse_synset(pointer.pos, pointer.offset)
                .and_then(|target| target.words.get(pointer.target - 1).map(|(name, _)| name.clone()));
            if let Some(name) = target {
                lemma.antonyms.push(name);
            }
        }

        Some(Synset {
            pos: parsed.pos,
            offset: parsed.offset,
            lemmas,
            gloss: parsed.gloss,
        })
    }

    fn parse_synset(&self, pos: PartOfSpeech, offset: u64) -> Option<ParsedSynset> {
        let file = self.data.get(&pos.file_pos())?;
        let line = file.line(offset)?;
        match parse_data_line(line) {
            Ok(parsed) => Some(parsed),
            Err(reason) => {
                warn!(target: "fixer::wordnet", path = %file.path.display(), offset, %reason, "skipping malformed synset");
                None
            }
        }
    }
}

fn strip_marker(word: &str) -> &str {
    // adjective position markers: (a), (p), (ip)
    match word.find('(') {
        Some(at) if word.ends_with(')') => &word[..at],
        _ => word,
    }
}

fn parse_data_line(line: &str) -> Result<ParsedSynset, String> {
    let (fields_part, gloss) = match line.split_once(" | ") {
        Some((fields, gloss)) => (fields, gloss.trim().to_string()),
        None => (line, String::new()),
    };
    let fields: Vec<&str> = fields_part.split_whitespace().collect();
    let field = |i: usize| fields.get(i).copied().ok_or_else(|| format!("missing field {}", i));

    let offset: u64 = field(0)?.parse().map_err(|_| "bad offset".to_string())?;
    let pos = PartOfSpeech::from_symbol(field(2)?).ok_or_else(|| "bad synset type".to_string())?;
    let word_count = usize::from_str_radix(field(3)?, 16).map_err(|_| "bad word count".to_string())?;

    let mut cursor = 4;
    let mut words = Vec::with_capacity(word_count);
    for _ in 0..word_count {
        let name = strip_marker(field(cursor)?).to_string();
        let lex_id = u8::from_str_radix(field(cursor + 1)?, 16).map_err(|_| "bad lex_id".to_string())?;
        words.push((name, lex_id));
        cursor += 2;
    }

    let pointer_count: usize = field(cursor)?.parse().map_err(|_| "bad pointer count".to_string())?;
    cursor += 1;

    let mut antonyms = Vec::new();
    for _ in 0..pointer_count {
        let symbol = field(cursor)?;
        if symbol == ANTONYM {
            let target_offset: u64 = field(cursor + 1)?.parse().map_err(|_| "bad pointer offset".to_string())?;
            let target_pos = PartOfSpeech::from_symbol(field(cursor + 2)?).ok_or_else(|| "bad pointer pos".to_string())?;
            let source_target = field(cursor + 3)?;
            let (Some(source), Some(target)) = (source_target.get(..2), source_target.get(2..)) else {
                return Err(format!("bad source/target {:?}", source_target));
            };
            if source_target.len() != 4 {
                return Err(format!("bad source/target {:?}", source_target));
            }
            let source = usize::from_str_radix(source, 16).map_err(|_| "bad pointer source".to_string())?;
            let target = usize::from_str_radix(target, 16).map_err(|_| "bad pointer target".to_string())?;
            // 0000 marks a semantic pointer between whole synsets
            if source > 0 && target > 0 {
                antonyms.push(LexicalPointer {
                    pos: target_pos,
                    offset: target_offset,
                    source,
                    target,
                });
            }
        }
        cursor += 4;
    }

    Ok(ParsedSynset {
        pos,
        offset,
        words,
        antonyms,
        gloss,
    })
}

impl LexicalDatabase for WordNet {
    fn synsets(&self, word: &str) -> Vec<Synset> {
        PartOfSpeech::SEARCH_ORDER
            .iter()
            .flat_map(|&pos| self.synsets_for(word, pos))
            .collect()
    }
}
