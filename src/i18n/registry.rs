//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of all languages the page
//! supports. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access. The set is fixed for the process
//! lifetime; the active language is always drawn from it.

use crate::i18n::SeoMetadata;
use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains all metadata for a specific language: its code, names, the
/// locale tag written to `og:locale`, whether it is the default, and the
/// SEO record projected onto the document head.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "ro", "uk")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Romanian")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Română")
    pub native_name: &'static str,

    /// Locale tag in language-region form (e.g., "en_US", "ro_RO")
    pub locale: &'static str,

    /// Whether this is the default/fallback language (only one should be true)
    pub is_default: bool,

    /// SEO metadata written to the document head for this language
    pub seo: SeoMetadata,
}

/// Global language registry singleton.
///
/// Contains all supported languages in their fixed order and provides
/// methods to query them. Initialized once on first access and immutable
/// thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: supported_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language is supported
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all supported languages in their fixed order.
    pub fn list(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// The default is the fallback for unsupported codes and for failed
    /// dictionary loads. There should be exactly one default language.
    ///
    /// # Panics
    /// Panics if no default language is found or if multiple defaults are
    /// defined (this indicates a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// The fixed set of supported languages.
///
/// Order matters: it is the order language options are presented in.
fn supported_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            locale: "en_US",
            is_default: true,
            seo: SeoMetadata {
                title: "QR Express | Free QR Code Generator - Create Custom QR Codes Online",
                description: "Create beautiful, customizable QR codes for free. No registration required. Generate QR codes for URLs, WiFi, Email, SMS, Contacts, and more.",
                keywords: "QR code generator, free QR code, QR code maker, custom QR code, QR code online",
            },
        },
        LanguageConfig {
            code: "ro",
            name: "Romanian",
            native_name: "Română",
            locale: "ro_RO",
            is_default: false,
            seo: SeoMetadata {
                title: "QR Express | Generator QR Code Gratuit - Creează QR Code Personalizate Online",
                description: "Creează QR code-uri frumoase și personalizabile gratuit. Fără înregistrare necesară. Generează QR code-uri pentru URL-uri, WiFi, Email, SMS, Contacte și multe altele.",
                keywords: "generator QR code, QR code gratuit, creator QR code, QR code personalizat, generator QR code online",
            },
        },
        LanguageConfig {
            code: "it",
            name: "Italian",
            native_name: "Italiano",
            locale: "it_IT",
            is_default: false,
            seo: SeoMetadata {
                title: "QR Express | Generatore QR Code Gratuito - Crea QR Code Personalizzati Online",
                description: "Crea bellissimi QR code personalizzabili gratuitamente. Nessuna registrazione richiesta. Genera QR code per URL, WiFi, Email, SMS, Contatti e altro ancora.",
                keywords: "generatore QR code, QR code gratuito, crea QR code, QR code personalizzato, generatore QR code online",
            },
        },
        LanguageConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            locale: "ru_RU",
            is_default: false,
            seo: SeoMetadata {
                title: "QR Express | Бесплатный Генератор QR Кодов - Создайте Персонализированные QR Коды Онлайн",
                description: "Создавайте красивые, настраиваемые QR коды бесплатно. Регистрация не требуется. Генерируйте QR коды для URL, WiFi, Email, SMS, Контактов и многого другого.",
                keywords: "генератор QR кодов, бесплатный QR код, создатель QR кодов, персонализированный QR код",
            },
        },
        LanguageConfig {
            code: "uk",
            name: "Ukrainian",
            native_name: "Українська",
            locale: "uk_UA",
            is_default: false,
            seo: SeoMetadata {
                title: "QR Express | Безкоштовний Генератор QR Кодів - Створіть Персоналізовані QR Коди Онлайн",
                description: "Створюйте красиві, налаштовувані QR коди безкоштовно. Реєстрація не потрібна. Генеруйте QR коди для URL, WiFi, Email, SMS, Контактів та багато іншого.",
                keywords: "генератор QR кодів, безкоштовний QR код, створювач QR кодів, персоналізований QR код",
            },
        },
    ]
}
