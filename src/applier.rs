//! Translation application: dictionary ownership, fallback, and projection.
//!
//! The applier owns the current dictionary and the language it belongs to.
//! Loading replaces the dictionary wholesale (never merged), falls back to
//! the default language exactly once when a fetch fails, and never surfaces
//! an error: the worst outcome is a document showing raw keys, which is
//! degraded service rather than a failure.

use crate::document::{DocumentProjector, ElementKind, MetaAttr};
use crate::i18n::Language;
use crate::loader::{Dictionary, DictionaryLoader};
use tracing::{info, warn};

/// Holds the active dictionary and projects it onto a document.
pub struct TranslationApplier {
    loader: DictionaryLoader,
    dictionary: Dictionary,
    active: Language,
}

impl TranslationApplier {
    pub fn new(loader: DictionaryLoader) -> Self {
        Self {
            loader,
            dictionary: Dictionary::new(),
            active: Language::default_language(),
        }
    }

    /// The language the current dictionary belongs to.
    ///
    /// After a failed load this may differ from the language that was
    /// requested: fallback adopts the default as active.
    pub fn active_language(&self) -> Language {
        self.active
    }

    /// Load the dictionary for `language`, with one-shot fallback.
    ///
    /// On a failed fetch for a non-default language the default language's
    /// dictionary is fetched once and adopted, together with the default as
    /// the active language. If the default itself cannot be loaded the
    /// dictionary is cleared and lookups degrade to raw keys. Infallible by
    /// design; failures are only observable through logging and degraded
    /// text.
    pub async fn load(&mut self, language: Language) {
        match self.loader.fetch(language).await {
            Ok(dictionary) => {
                self.dictionary = dictionary;
                self.active = language;
            }
            Err(e) => {
                warn!("Error loading language '{}': {}", language.code(), e);

                if language.is_default() {
                    // The requested language still becomes active: the
                    // dictionary is scoped to it, and the switcher's
                    // no-change guard must not see a stale language
                    self.dictionary = Dictionary::new();
                    self.active = language;
                    return;
                }

                let default = Language::default_language();
                match self.loader.fetch(default).await {
                    Ok(dictionary) => {
                        info!("Falling back to default language '{}'", default.code());
                        self.dictionary = dictionary;
                        self.active = default;
                    }
                    Err(e) => {
                        warn!(
                            "Error loading default language '{}': {}",
                            default.code(),
                            e
                        );
                        self.dictionary = Dictionary::new();
                        self.active = default;
                    }
                }
            }
        }
    }

    /// Look up a translation key.
    ///
    /// A missing key is logged and echoed back verbatim so the page never
    /// shows a blank label.
    pub fn translate(&self, key: &str) -> String {
        match self.dictionary.get(key) {
            Some(value) => value.clone(),
            None => {
                warn!("Missing translation key: {}", key);
                key.to_string()
            }
        }
    }

    /// Project the current dictionary onto the document.
    ///
    /// Every tagged element is rewritten on every call: text-input-like
    /// controls get their placeholder set, selection controls get each
    /// labeled option updated by the option's own key, everything else gets
    /// its text content replaced. The document language attribute and SEO
    /// metadata are set as well. Idempotent.
    pub fn apply(&self, doc: &mut dyn DocumentProjector) {
        for element in doc.tagged_elements() {
            match element.kind {
                ElementKind::Input => {
                    doc.set_placeholder(&element.key, &self.translate(&element.key));
                }
                ElementKind::Select { option_keys } => {
                    for option_key in &option_keys {
                        doc.set_option_label(&element.key, option_key, &self.translate(option_key));
                    }
                }
                ElementKind::Text => {
                    doc.set_text(&element.key, &self.translate(&element.key));
                }
            }
        }

        doc.set_language(self.active.code());
        self.apply_seo_metadata(doc);

        info!("Applied translations for '{}'", self.active.code());
    }

    /// Write the active language's SEO record into the document head.
    ///
    /// Each entry is an upsert: created when absent, updated in place
    /// otherwise.
    pub fn apply_seo_metadata(&self, doc: &mut dyn DocumentProjector) {
        let config = self.active.config();
        let seo = &config.seo;

        doc.set_title(seo.title);
        doc.set_metadata(MetaAttr::Property, "og:title", seo.title);
        doc.set_metadata(MetaAttr::Property, "twitter:title", seo.title);

        doc.set_metadata(MetaAttr::Name, "description", seo.description);
        doc.set_metadata(MetaAttr::Property, "og:description", seo.description);
        doc.set_metadata(MetaAttr::Property, "twitter:description", seo.description);

        doc.set_metadata(MetaAttr::Name, "keywords", seo.keywords);

        doc.set_metadata(MetaAttr::Property, "og:locale", config.locale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{MemoryDocument, TaggedElement};
    use crate::retry::RetryConfig;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn applier_for(server: &MockServer) -> TranslationApplier {
        let loader = DictionaryLoader::new(reqwest::Client::new(), &server.uri())
            .with_retry(RetryConfig::single_attempt());
        TranslationApplier::new(loader)
    }

    async fn mount_dictionary(server: &MockServer, code: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(format!("/{}.json", code)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    fn sample_document() -> MemoryDocument {
        MemoryDocument::with_elements(vec![
            TaggedElement::text("title"),
            TaggedElement::input("url.placeholder"),
            TaggedElement::select("format", &["format.png", "format.svg"]),
        ])
    }

    // ==================== load Tests ====================

    #[tokio::test]
    async fn test_load_success_replaces_dictionary_and_active() {
        let server = MockServer::start().await;
        mount_dictionary(&server, "ro", serde_json::json!({"title": "Titlu"})).await;

        let mut applier = applier_for(&server);
        applier.load(Language::from_code("ro").unwrap()).await;

        assert_eq!(applier.active_language().code(), "ro");
        assert_eq!(applier.translate("title"), "Titlu");
    }

    #[tokio::test]
    async fn test_load_replaces_wholesale_never_merges() {
        let server = MockServer::start().await;
        mount_dictionary(
            &server,
            "ro",
            serde_json::json!({"title": "Titlu", "only.in.ro": "da"}),
        )
        .await;
        mount_dictionary(&server, "it", serde_json::json!({"title": "Titolo"})).await;

        let mut applier = applier_for(&server);
        applier.load(Language::from_code("ro").unwrap()).await;
        applier.load(Language::from_code("it").unwrap()).await;

        assert_eq!(applier.translate("title"), "Titolo");
        // The previous dictionary's extra key is gone, not merged in
        assert_eq!(applier.translate("only.in.ro"), "only.in.ro");
    }

    #[tokio::test]
    async fn test_load_failure_falls_back_to_default() {
        let server = MockServer::start().await;
        mount_dictionary(&server, "en", serde_json::json!({"title": "Title"})).await;
        // /ro.json is not mounted: 404

        let mut applier = applier_for(&server);
        applier.load(Language::from_code("ro").unwrap()).await;

        assert_eq!(applier.active_language(), Language::default_language());
        assert_eq!(applier.translate("title"), "Title");
    }

    #[tokio::test]
    async fn test_load_failure_of_default_leaves_empty_dictionary() {
        let server = MockServer::start().await;
        // Nothing mounted: every fetch 404s

        let mut applier = applier_for(&server);
        applier.load(Language::default_language()).await;

        assert_eq!(applier.active_language(), Language::default_language());
        assert_eq!(applier.translate("title"), "title");
    }

    #[tokio::test]
    async fn test_failed_default_load_still_adopts_default_as_active() {
        let server = MockServer::start().await;
        mount_dictionary(&server, "ro", serde_json::json!({"title": "Titlu"})).await;
        // /en.json is not mounted: 404

        let mut applier = applier_for(&server);
        applier.load(Language::from_code("ro").unwrap()).await;
        applier.load(Language::default_language()).await;

        // The requested language wins even though its dictionary is gone;
        // the prior language must not linger as active
        assert_eq!(applier.active_language(), Language::default_language());
        assert_eq!(applier.translate("title"), "title");
    }

    #[tokio::test]
    async fn test_fallback_terminates_when_default_also_fails() {
        let server = MockServer::start().await;

        // Both the requested and the default language 404. Exactly one
        // fallback attempt must be made, then lookups echo keys.
        Mock::given(method("GET"))
            .and(path("/en.json"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/uk.json"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let mut applier = applier_for(&server);
        applier.load(Language::from_code("uk").unwrap()).await;

        assert_eq!(applier.translate("anything"), "anything");
        assert_eq!(applier.active_language(), Language::default_language());
    }

    #[tokio::test]
    async fn test_load_malformed_body_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/it.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{broken"))
            .mount(&server)
            .await;
        mount_dictionary(&server, "en", serde_json::json!({"title": "Title"})).await;

        let mut applier = applier_for(&server);
        applier.load(Language::from_code("it").unwrap()).await;

        assert_eq!(applier.active_language().code(), "en");
        assert_eq!(applier.translate("title"), "Title");
    }

    // ==================== translate Tests ====================

    #[tokio::test]
    async fn test_translate_missing_key_echoes_key() {
        let server = MockServer::start().await;
        mount_dictionary(&server, "en", serde_json::json!({"present": "here"})).await;

        let mut applier = applier_for(&server);
        applier.load(Language::default_language()).await;

        assert_eq!(applier.translate("missing.key"), "missing.key");
        assert_eq!(applier.translate("present"), "here");
    }

    #[test]
    fn test_translate_before_any_load_echoes_key() {
        let loader = DictionaryLoader::new(reqwest::Client::new(), "http://unused.test");
        let applier = TranslationApplier::new(loader);

        assert_eq!(applier.translate("title"), "title");
    }

    // ==================== apply Tests ====================

    #[tokio::test]
    async fn test_apply_projects_text_placeholder_and_options() {
        let server = MockServer::start().await;
        mount_dictionary(
            &server,
            "ro",
            serde_json::json!({
                "title": "Titlu",
                "url.placeholder": "Introduceți URL",
                "format.png": "Imagine PNG",
                "format.svg": "Vector SVG"
            }),
        )
        .await;

        let mut applier = applier_for(&server);
        applier.load(Language::from_code("ro").unwrap()).await;

        let mut doc = sample_document();
        applier.apply(&mut doc);

        assert_eq!(doc.text("title"), Some("Titlu"));
        assert_eq!(doc.placeholder("url.placeholder"), Some("Introduceți URL"));
        assert_eq!(doc.option_label("format", "format.png"), Some("Imagine PNG"));
        assert_eq!(doc.option_label("format", "format.svg"), Some("Vector SVG"));
        assert_eq!(doc.language(), Some("ro"));
    }

    #[tokio::test]
    async fn test_apply_select_uses_option_keys_not_container_key() {
        let server = MockServer::start().await;
        mount_dictionary(
            &server,
            "en",
            serde_json::json!({"format": "Format", "format.png": "PNG image"}),
        )
        .await;

        let mut applier = applier_for(&server);
        applier.load(Language::default_language()).await;

        let mut doc =
            MemoryDocument::with_elements(vec![TaggedElement::select("format", &["format.png"])]);
        applier.apply(&mut doc);

        assert_eq!(doc.option_label("format", "format.png"), Some("PNG image"));
        // The container's own key is never written as text
        assert_eq!(doc.text("format"), None);
    }

    #[tokio::test]
    async fn test_apply_is_idempotent() {
        let server = MockServer::start().await;
        mount_dictionary(
            &server,
            "it",
            serde_json::json!({
                "title": "Titolo",
                "url.placeholder": "Inserisci URL",
                "format.png": "PNG",
                "format.svg": "SVG"
            }),
        )
        .await;

        let mut applier = applier_for(&server);
        applier.load(Language::from_code("it").unwrap()).await;

        let mut doc = sample_document();
        applier.apply(&mut doc);
        let first = doc.snapshot();
        applier.apply(&mut doc);

        assert_eq!(first, doc.snapshot());
    }

    #[tokio::test]
    async fn test_apply_with_empty_dictionary_shows_raw_keys() {
        let server = MockServer::start().await;
        // Every fetch 404s; after fallback the dictionary is empty

        let mut applier = applier_for(&server);
        applier.load(Language::from_code("ru").unwrap()).await;

        let mut doc = sample_document();
        applier.apply(&mut doc);

        assert_eq!(doc.text("title"), Some("title"));
        assert_eq!(doc.placeholder("url.placeholder"), Some("url.placeholder"));
    }

    // ==================== SEO Metadata Tests ====================

    #[tokio::test]
    async fn test_apply_seo_metadata_writes_all_entries() {
        let server = MockServer::start().await;
        mount_dictionary(&server, "ro", serde_json::json!({})).await;

        let mut applier = applier_for(&server);
        applier.load(Language::from_code("ro").unwrap()).await;

        let mut doc = MemoryDocument::new();
        applier.apply_seo_metadata(&mut doc);

        let seo = &Language::from_code("ro").unwrap().config().seo;
        assert_eq!(doc.title(), Some(seo.title));
        assert_eq!(doc.metadata(MetaAttr::Property, "og:title"), Some(seo.title));
        assert_eq!(
            doc.metadata(MetaAttr::Property, "twitter:title"),
            Some(seo.title)
        );
        assert_eq!(
            doc.metadata(MetaAttr::Name, "description"),
            Some(seo.description)
        );
        assert_eq!(
            doc.metadata(MetaAttr::Property, "og:description"),
            Some(seo.description)
        );
        assert_eq!(
            doc.metadata(MetaAttr::Property, "twitter:description"),
            Some(seo.description)
        );
        assert_eq!(doc.metadata(MetaAttr::Name, "keywords"), Some(seo.keywords));
        assert_eq!(doc.metadata(MetaAttr::Property, "og:locale"), Some("ro_RO"));
    }

    #[tokio::test]
    async fn test_seo_metadata_updates_in_place_on_language_change() {
        let server = MockServer::start().await;
        mount_dictionary(&server, "ro", serde_json::json!({})).await;
        mount_dictionary(&server, "uk", serde_json::json!({})).await;

        let mut applier = applier_for(&server);
        let mut doc = MemoryDocument::new();

        applier.load(Language::from_code("ro").unwrap()).await;
        applier.apply_seo_metadata(&mut doc);
        applier.load(Language::from_code("uk").unwrap()).await;
        applier.apply_seo_metadata(&mut doc);

        assert_eq!(doc.metadata(MetaAttr::Property, "og:locale"), Some("uk_UA"));
    }
}
