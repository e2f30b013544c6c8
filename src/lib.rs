//! Hash-routed language switching for a single-page tool.
//!
//! The crate decides which language is active (URL fragment, then stored
//! preference, then default), fetches the matching JSON dictionary over HTTP
//! with a one-shot fallback to the default language, and projects the result
//! onto a document model: visible text, input placeholders, select option
//! labels, the document language attribute, and SEO metadata.
//!
//! The page itself is consumed through three narrow contracts so the whole
//! pipeline runs headless in tests:
//!
//! - [`navigation::Navigator`] — the URL fragment plus a change channel
//! - [`storage::PreferenceStore`] — the single persisted language preference
//! - [`document::DocumentProjector`] — the elements tagged for translation

pub mod applier;
pub mod config;
pub mod document;
pub mod i18n;
pub mod loader;
pub mod navigation;
pub mod resolver;
pub mod retry;
pub mod storage;
pub mod switcher;
