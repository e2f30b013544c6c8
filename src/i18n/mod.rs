//! Internationalization (i18n) module for multi-language support.
//!
//! This module provides a centralized architecture for the languages the
//! page can be displayed in. All language-related data lives here: the
//! registry of supported codes, the validated language type, and the
//! per-language SEO metadata records.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `metadata`: Per-language SEO records written to the document head
//!
//! # Example
//!
//! ```rust,ignore
//! use langswitch::i18n::Language;
//!
//! // Get the default language (English)
//! let default = Language::default_language();
//!
//! // Create a language from a code
//! let romanian = Language::from_code("ro")?;
//!
//! // Silently correct an unsupported code to the default
//! let coerced = Language::coerce("xx");
//! assert!(coerced.is_default());
//! ```

mod language;
mod metadata;
mod registry;

pub use language::Language;
pub use metadata::SeoMetadata;
pub use registry::{LanguageConfig, LanguageRegistry};
