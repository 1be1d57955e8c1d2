use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};

use super::archive::extract_archive;
use crate::config::{ResourceSources, SentifixConfig};
use crate::error::{FixerError, FixerResult};

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(300);

/// Files `WordNet::open` cannot do without.
const WORDNET_FILES: [&str; 8] = [
    "index.noun", "data.noun", "index.verb", "data.verb",
    "index.adj", "data.adj", "index.adv", "data.adv",
];

/// Model data the fixer reads from the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    WordNet,
    Tagger,
    Lexicon,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::WordNet, ResourceKind::Tagger, ResourceKind::Lexicon];

    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::WordNet => "wordnet",
            ResourceKind::Tagger => "averaged_perceptron_tagger_eng",
            ResourceKind::Lexicon => "en-sentiment",
        }
    }

    /// The lexicon is optional: it is downloaded along with the others, but
    /// the built-in one is used when it cannot be installed.
    pub fn is_required(&self) -> bool {
        !matches!(self, ResourceKind::Lexicon)
    }

    /// Location below the data directory, laid out like `nltk_data`.
    pub fn relative_path(&self) -> &'static str {
        match self {
            ResourceKind::WordNet => "corpora/wordnet",
            ResourceKind::Tagger => "taggers/averaged_perceptron_tagger_eng",
            ResourceKind::Lexicon => "sentiment/en-sentiment.xml",
        }
    }

    fn is_archive(&self) -> bool {
        !matches!(self, ResourceKind::Lexicon)
    }

    fn source<'s>(&self, sources: &'s ResourceSources) -> &'s str {
        match self {
            ResourceKind::WordNet => &sources.wordnet_url,
            ResourceKind::Tagger => &sources.tagger_url,
            ResourceKind::Lexicon => &sources.lexicon_url,
        }
    }

    fn is_installed(&self, path: &Path) -> bool {
        match self {
            ResourceKind::WordNet => WORDNET_FILES
                .iter()
                .all(|file| path.join(file).is_file()),
            ResourceKind::Tagger => fs::read_dir(path)
                .map(|entries| {
                    entries
                        .filter_map(Result::ok)
                        .any(|entry| entry.file_name().to_string_lossy().ends_with(".weights.json"))
                })
                .unwrap_or(false),
            ResourceKind::Lexicon => path.is_file(),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceStatus {
    pub kind: ResourceKind,
    pub path: PathBuf,
    pub present: bool,
}

/// Locates, checks and downloads the model data.
#[derive(Debug, Clone)]
pub struct ResourceManager {
    data_dir: PathBuf,
    sources: ResourceSources,
    auto_download: bool,
}

impl ResourceManager {
    pub fn new(data_dir: impl Into<PathBuf>, sources: ResourceSources) -> Self {
        Self {
            data_dir: data_dir.into(),
            sources,
            auto_download: false,
        }
    }

    pub fn from_config(config: &SentifixConfig) -> FixerResult<Self> {
        Ok(Self::new(config.data_dir()?, config.sources.clone()).auto_download(config.auto_download))
    }

    pub fn auto_download(mut self, enabled: bool) -> Self {
        self.auto_download = enabled;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path(&self, kind: ResourceKind) -> PathBuf {
        self.data_dir.join(kind.relative_path())
    }

    pub fn is_present(&self, kind: ResourceKind) -> bool {
        kind.is_installed(&self.path(kind))
    }

    pub fn status(&self) -> Vec<ResourceStatus> {
        ResourceKind::ALL
            .iter()
            .map(|&kind| ResourceStatus {
                kind,
                path: self.path(kind),
                present: self.is_present(kind),
            })
            .collect()
    }

    /// Makes sure the required resources are installed, downloading the
    /// missing ones when auto download is enabled. With auto download the
    /// sentiment lexicon is installed as well; failing to get it only falls
    /// back to the built-in lexicon.
    pub async fn ensure(&self) -> FixerResult<Vec<ResourceStatus>> {
        let missing: Vec<ResourceKind> = ResourceKind::ALL
            .into_iter()
            .filter(|kind| !self.is_present(*kind))
            .collect();

        if missing.is_empty() {
            debug!(target: "fixer::resources", dir = %self.data_dir.display(), "all resources present");
            return Ok(self.status());
        }

        if !self.auto_download {
            let names: Vec<String> = missing
                .iter()
                .filter(|kind| kind.is_required())
                .map(|kind| format!("{} ({})", kind, self.path(*kind).display()))
                .collect();
            if names.is_empty() {
                return Ok(self.status());
            }
            return Err(FixerError::ResourceMissing(names.join(", ")));
        }

        for kind in missing {
            match self.install(kind).await {
                Ok(()) => {}
                Err(e) if !kind.is_required() => {
                    warn!(target: "fixer::resources", resource = %kind, error = %e, "optional resource unavailable, using the built-in one");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(self.status())
    }

    /// Downloads every resource, skipping installed ones unless `force` is set.
    pub async fn fetch(&self, force: bool) -> FixerResult<Vec<ResourceStatus>> {
        for kind in ResourceKind::ALL {
            if !force && self.is_present(kind) {
                debug!(target: "fixer::resources", resource = %kind, "already installed");
                continue;
            }
            self.install(kind).await?;
        }
        Ok(self.status())
    }

    async fn install(&self, kind: ResourceKind) -> FixerResult<()> {
        let source = kind.source(&self.sources);
        info!(target: "fixer::resources", resource = %kind, %source, "downloading");
        let bytes = download(source).await?;

        let target = self.path(kind);
        if kind.is_archive() {
            // archives hold a top-level directory named after the resource
            let parent = target
                .parent()
                .ok_or_else(|| FixerError::ConfigurationError(format!("invalid resource path {}", target.display())))?;
            let files = extract_archive(&bytes, parent)?;
            if !kind.is_installed(&target) {
                return Err(FixerError::ArchiveError(format!(
                    "{} did not contain {}",
                    source,
                    kind.relative_path()
                )));
            }
            info!(target: "fixer::resources", resource = %kind, files, "installed");
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| FixerError::io(parent, e))?;
            }
            let partial = target.with_extension("part");
            fs::write(&partial, &bytes).map_err(|e| FixerError::io(&partial, e))?;
            fs::rename(&partial, &target).map_err(|e| FixerError::io(&target, e))?;
            info!(target: "fixer::resources", resource = %kind, bytes = bytes.len(), "installed");
        }
        Ok(())
    }
}

/// Reads `source` over HTTP(S), or from disk for `file://` URLs and plain paths.
async fn download(source: &str) -> FixerResult<Vec<u8>> {
    let download_error = |reason: String| FixerError::DownloadError {
        url: source.to_string(),
        reason,
    };

    if !source.starts_with("http://") && !source.starts_with("https://") {
        let path = source.strip_prefix("file://").unwrap_or(source);
        return tokio::fs::read(path).await.map_err(|e| download_error(e.to_string()));
    }

    let client = reqwest::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .build()
        .map_err(|e| download_error(format!("Failed to create HTTP client: {}", e)))?;

    let response = client
        .get(source)
        .send()
        .await
        .map_err(|e| download_error(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        warn!(target: "fixer::resources", %source, %status, "download refused");
        return Err(download_error(format!("HTTP {}", status)));
    }

    let bytes = response.bytes().await.map_err(|e| download_error(e.to_string()))?;
    Ok(bytes.to_vec())
}
