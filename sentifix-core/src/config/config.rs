use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FixerError, FixerResult};
use crate::rewriter::{CandidateOrder, RewriteOptions};

pub const DATA_DIR_ENV: &str = "SENTIFIX_DATA_DIR";

pub const WORDNET_URL: &str =
    "https://raw.githubusercontent.com/nltk/nltk_data/gh-pages/packages/corpora/wordnet.zip";
pub const TAGGER_URL: &str =
    "https://raw.githubusercontent.com/nltk/nltk_data/gh-pages/packages/taggers/averaged_perceptron_tagger_eng.zip";
pub const LEXICON_URL: &str =
    "https://raw.githubusercontent.com/sloria/TextBlob/dev/src/textblob/en/en-sentiment.xml";

/// Where each downloadable resource is fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceSources {
    pub wordnet_url: String,
    pub tagger_url: String,
    pub lexicon_url: String,
}

impl Default for ResourceSources {
    fn default() -> Self {
        Self {
            wordnet_url: WORDNET_URL.to_string(),
            tagger_url: TAGGER_URL.to_string(),
            lexicon_url: LEXICON_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentifixConfig {
    /// Root of the model data. Falls back to the platform data directory.
    pub data_dir: Option<PathBuf>,
    /// Download missing resources at startup instead of failing.
    pub auto_download: bool,
    pub candidate_order: CandidateOrder,
    pub screen_candidates: bool,
    pub sources: ResourceSources,
}

impl Default for SentifixConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            auto_download: true,
            candidate_order: CandidateOrder::default(),
            screen_candidates: true,
            sources: ResourceSources::default(),
        }
    }
}

impl SentifixConfig {
    pub fn config_path() -> FixerResult<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FixerError::ConfigurationError("Could not find home directory".to_string()))?;
        Ok(home.join(".sentifix.config"))
    }

    pub fn load() -> FixerResult<SentifixConfig> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> FixerResult<SentifixConfig> {
        if !path.exists() {
            return Err(FixerError::ConfigurationError(format!(
                "config file {} does not exist",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| FixerError::io(path, e))?;
        serde_json::from_str(&content)
            .map_err(|e| FixerError::ConfigurationError(format!("{}: {}", path.display(), e)))
    }

    /// The user's config, or defaults when there is none.
    pub fn load_or_default() -> FixerResult<SentifixConfig> {
        if Self::exists() {
            Self::load()
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> FixerResult<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> FixerResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| FixerError::ConfigurationError(e.to_string()))?;
        fs::write(path, content).map_err(|e| FixerError::io(path, e))
    }

    pub fn exists() -> bool {
        Self::config_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Data directory: `SENTIFIX_DATA_DIR`, then `data_dir`, then `<platform data dir>/sentifix`.
    pub fn data_dir(&self) -> FixerResult<PathBuf> {
        self.resolve_data_dir(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
    }

    pub(crate) fn resolve_data_dir(&self, env_override: Option<PathBuf>) -> FixerResult<PathBuf> {
        if let Some(dir) = env_override.filter(|dir| !dir.as_os_str().is_empty()) {
            return Ok(dir);
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join("sentifix"))
            .ok_or_else(|| FixerError::ConfigurationError("Could not find a data directory, set data_dir".to_string()))
    }

    pub fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions {
            order: self.candidate_order,
            screen_candidates: self.screen_candidates,
        }
    }
}
