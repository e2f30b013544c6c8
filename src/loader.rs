//! Dictionary loading: one flat JSON resource per language.
//!
//! Each supported language has a retrievable document at
//! `{base_url}/{code}.json` whose top level is a flat mapping from
//! translation key to localized string. The loader only reports what went
//! wrong; the fallback policy (try the default language once) belongs to the
//! applier.

use crate::i18n::Language;
use crate::retry::{with_retry_if, RetryConfig};
use std::collections::HashMap;
use tracing::{debug, info};

/// A language's translation table: flat key to localized string.
pub type Dictionary = HashMap<String, String>;

/// Why a dictionary could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The request never produced a response (network failure, timeout)
    #[error("Failed to fetch dictionary: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Dictionary request returned status {0}")]
    Status(reqwest::StatusCode),

    /// The body was not a flat string-to-string JSON object
    #[error("Malformed dictionary: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl LoadError {
    /// Transient failures are retried; a missing or malformed resource is
    /// permanent and fails immediately.
    fn is_transient(&self) -> bool {
        match self {
            LoadError::Request(_) => true,
            LoadError::Status(status) => status.is_server_error(),
            LoadError::Malformed(_) => false,
        }
    }
}

/// Fetches per-language dictionaries over HTTP.
pub struct DictionaryLoader {
    client: reqwest::Client,
    base_url: String,
    retry: RetryConfig,
}

impl DictionaryLoader {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry: RetryConfig::dictionary_fetch(),
        }
    }

    /// Override the retry behavior (tests use a single attempt).
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// The URL a language's dictionary is served from.
    pub fn url_for(&self, language: Language) -> String {
        format!("{}/{}.json", self.base_url, language.code())
    }

    /// Fetch and parse the dictionary for one language.
    pub async fn fetch(&self, language: Language) -> Result<Dictionary, LoadError> {
        let url = self.url_for(language);
        debug!("Loading translations from {}", url);

        let dictionary = with_retry_if(
            &self.retry,
            &format!("Dictionary fetch for '{}'", language.code()),
            || async {
                let response = self.client.get(&url).send().await?;

                if !response.status().is_success() {
                    return Err(LoadError::Status(response.status()));
                }

                let body = response.text().await?;
                let dictionary: Dictionary = serde_json::from_str(&body)?;
                Ok(dictionary)
            },
            LoadError::is_transient,
        )
        .await?;

        info!(
            "Loaded {} translation keys for '{}'",
            dictionary.len(),
            language.code()
        );
        Ok(dictionary)
    }
}
