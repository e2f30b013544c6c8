//! Language resolution: which language is active, and who decides.
//!
//! Three ranked sources feed the decision: the URL fragment, the stored
//! preference, and the fixed default. Once a fragment exists it is the
//! single source of truth; the stored preference only matters at startup,
//! and the default is the floor nothing can fall below.

use crate::i18n::Language;
use crate::navigation::Navigator;
use crate::storage::PreferenceStore;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Decides the active language and persists user-driven changes.
pub struct LanguageResolver {
    navigator: Arc<dyn Navigator>,
    store: Arc<dyn PreferenceStore>,
}

impl LanguageResolver {
    pub fn new(navigator: Arc<dyn Navigator>, store: Arc<dyn PreferenceStore>) -> Self {
        Self { navigator, store }
    }

    /// Evaluate the ranked sources and return the active language.
    ///
    /// Priority: URL fragment (lower-cased, `#` stripped, must be
    /// supported), then stored preference, then the default. An
    /// explicit-but-unsupported fragment is left in place and resolution
    /// falls through to the next source. Total; never fails.
    pub fn resolve(&self) -> Language {
        if let Some(fragment) = self.navigator.fragment() {
            let code = fragment.trim_start_matches('#').to_lowercase();
            match Language::from_code(&code) {
                Ok(language) => return language,
                Err(_) => {
                    debug!("Fragment '{}' is not a supported language", fragment);
                }
            }
        }

        if let Some(stored) = self.store.get() {
            match Language::from_code(&stored) {
                Ok(language) => return language,
                Err(_) => {
                    debug!("Stored preference '{}' is not a supported language", stored);
                }
            }
        }

        Language::default_language()
    }

    /// Subscribe to fragment-change notifications.
    ///
    /// The notification carries no language code: the fragment may have been
    /// rewritten by any agent, so handlers re-run [`resolve`](Self::resolve).
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<()> {
        self.navigator.subscribe()
    }

    /// Write the current language into the URL when no fragment exists yet,
    /// making the resolved state shareable and bookmarkable. Idempotent; a
    /// URL that already carries a fragment (even an unsupported one) is
    /// never touched.
    pub fn ensure_fragment_initialized(&self, current: Language) {
        if self.navigator.fragment().is_none() {
            debug!("No fragment set, writing #{}", current.code());
            self.navigator.set_fragment(&format!("#{}", current.code()));
        }
    }

    /// Explicit user-driven switch.
    ///
    /// An unsupported code is silently corrected to the default. The valid
    /// code is persisted, then written to the fragment; the fragment write
    /// drives the change channel asynchronously, so this function itself
    /// never applies translations.
    pub fn switch_to(&self, code: &str) -> Language {
        let language = Language::coerce(code);

        if let Err(e) = self.store.set(language.code()) {
            // Losing the preference degrades reload behavior, nothing else
            warn!("Failed to persist language preference: {:#}", e);
        }

        info!("Switching language to '{}'", language.code());
        self.navigator.set_fragment(&format!("#{}", language.code()));
        language
    }
}
