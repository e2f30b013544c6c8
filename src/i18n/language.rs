//! Language type: Flexible, validated language representation.
//!
//! This module provides the `Language` type, a code that has been validated
//! against the registry. An unsupported code can never become a `Language`,
//! which is what keeps the active language invariant: whatever the fragment
//! or the stored preference contain, only registry members flow through the
//! rest of the pipeline.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use tracing::warn;

/// A validated language.
///
/// This type represents a language that has been validated against the
/// registry. It ensures that only supported languages can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "ro")
    code: &'static str,
}

impl Language {
    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "ro")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is supported
    /// * `Err` if the code is not in the registry
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unsupported language code: '{}'", code),
        }
    }

    /// Create a Language from a code, silently correcting unsupported input.
    ///
    /// An unsupported code is coerced to the default language; the caller is
    /// never told. This is the contract for user-driven switches: the worst
    /// outcome of a bad code is the default language, never an error.
    pub fn coerce(code: &str) -> Language {
        match Language::from_code(code) {
            Ok(language) => language,
            Err(_) => {
                warn!("Language '{}' not supported, using default", code);
                Language::default_language()
            }
        }
    }

    /// Get the default language.
    ///
    /// This is the fallback for unsupported codes and for failed dictionary
    /// loads.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via
    /// `from_code` or `coerce`).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the default language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_english() {
        let language = Language::from_code("en").expect("Should succeed");
        assert_eq!(language.code(), "en");
        assert_eq!(language.name(), "English");
    }

    #[test]
    fn test_from_code_all_supported() {
        for code in ["en", "ro", "it", "ru", "uk"] {
            assert!(Language::from_code(code).is_ok(), "code {}", code);
        }
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unsupported"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        // Callers lower-case fragments before resolution
        assert!(Language::from_code("RO").is_err());
    }

    // ==================== coerce Tests ====================

    #[test]
    fn test_coerce_supported_code_passes_through() {
        assert_eq!(Language::coerce("it").code(), "it");
    }

    #[test]
    fn test_coerce_unsupported_code_yields_default() {
        assert_eq!(Language::coerce("xx"), Language::default_language());
        assert_eq!(Language::coerce(""), Language::default_language());
    }

    proptest! {
        #[test]
        fn coerce_always_yields_supported_code(code in "\\PC*") {
            let language = Language::coerce(&code);
            prop_assert!(LanguageRegistry::get().is_supported(language.code()));
        }
    }

    // ==================== default_language Tests ====================

    #[test]
    fn test_default_language_is_english() {
        let default = Language::default_language();
        assert_eq!(default.code(), "en");
        assert!(default.is_default());
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_language_equality() {
        let lang1 = Language::default_language();
        let lang2 = Language::from_code("en").unwrap();
        assert_eq!(lang1, lang2);
        assert_ne!(lang1, Language::from_code("uk").unwrap());
    }

    #[test]
    fn test_language_copy() {
        let lang1 = Language::from_code("ru").unwrap();
        let lang2 = lang1; // Copy
        assert_eq!(lang1, lang2); // Both still valid
    }

    #[test]
    fn test_language_display() {
        let lang = Language::from_code("uk").unwrap();
        assert_eq!(lang.to_string(), "uk");
    }

    // ==================== Config Access Tests ====================

    #[test]
    fn test_config_access() {
        let lang = Language::from_code("it").unwrap();
        let config = lang.config();
        assert_eq!(config.code, "it");
        assert_eq!(config.native_name, "Italiano");
        assert_eq!(config.locale, "it_IT");
    }
}
