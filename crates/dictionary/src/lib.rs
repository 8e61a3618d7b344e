use std::time::Duration;

mod dictionary;
mod dictionary_api;
mod google_define;

pub use dictionary::{Word, WordDefinition, WordMeaning};

// Not derived via thiserror: the `source` field here names the dictionary
// endpoint, which thiserror would misread as an error-source chain.
#[derive(Debug)]
pub enum DictionaryError {
    AllSourcesUnavailable { word: String },
    MalformedResponse { source: String, reason: String },
}

impl std::fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllSourcesUnavailable { word } => {
                write!(f, "all dictionary sources are unavailable for \"{word}\"")
            }
            Self::MalformedResponse { source, reason } => {
                write!(f, "malformed response from {source}: {reason}")
            }
        }
    }
}

impl std::error::Error for DictionaryError {}

pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Body of a successful fetch, tagged with the source it came from.
pub(crate) struct RawResponse {
    pub body: String,
    pub source: String,
}

pub struct Dictionary {
    client: reqwest::Client,
    sources: Vec<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_sources(
            dictionary_api::DEFAULT_SOURCES
                .iter()
                .map(|source| source.to_string())
                .collect(),
        )
    }

    /// Overrides the api source chain. The first entry is the primary
    /// endpoint, the rest are mirrors tried in order after it fails.
    pub fn with_sources(sources: Vec<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            sources,
        }
    }

    /// Looks a word up through the dictionary api, one interpretation per
    /// distinct entry the source knows for it.
    pub async fn lookup(&self, word: &str) -> Result<Vec<Word>, DictionaryError> {
        dictionary_api::get_definitions(&self.client, &self.sources, word).await
    }

    /// Looks a word up by scraping google's `define:` results. A page without
    /// a result block yields an empty list, not an error.
    pub async fn lookup_google(&self, word: &str) -> Result<Vec<Word>, DictionaryError> {
        google_define::get_definitions(&self.client, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
