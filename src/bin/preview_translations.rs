//! Preview binary - runs the full language pipeline against a sample
//! document and prints the projected result, without a browser.
//!
//! Usage:
//!   cargo run --bin preview              # resolve from stored preference/default
//!   cargo run --bin preview -- ro        # simulate opening the page at #ro
//!
//! Required environment variables:
//! - TRANSLATIONS_BASE_URL (e.g. http://localhost:8080/languages)
//!
//! Optional:
//! - PREFERENCE_FILE (defaults to data/language_preference)
//! - FETCH_TIMEOUT_SECS (defaults to 10)

use anyhow::Result;
use langswitch::applier::TranslationApplier;
use langswitch::config::Config;
use langswitch::document::{MemoryDocument, MetaAttr, TaggedElement};
use langswitch::loader::DictionaryLoader;
use langswitch::navigation::MemoryNavigator;
use langswitch::resolver::LanguageResolver;
use langswitch::storage::FilePreferenceStore;
use langswitch::switcher::LanguageSwitcher;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// A representative slice of the page: a heading, a search-style input,
/// and a format selector.
fn sample_document() -> MemoryDocument {
    MemoryDocument::with_elements(vec![
        TaggedElement::text("title"),
        TaggedElement::text("subtitle"),
        TaggedElement::input("url.placeholder"),
        TaggedElement::select("format", &["format.png", "format.svg"]),
    ])
}

fn print_document(doc: &MemoryDocument) {
    println!("\n=== Projected document ===");
    println!("lang attribute: {}", doc.language().unwrap_or("<unset>"));
    println!("title:          {}", doc.title().unwrap_or("<unset>"));

    for key in ["title", "subtitle"] {
        if let Some(text) = doc.text(key) {
            println!("text[{}]: {}", key, text);
        }
    }
    if let Some(placeholder) = doc.placeholder("url.placeholder") {
        println!("placeholder[url.placeholder]: {}", placeholder);
    }
    for option in ["format.png", "format.svg"] {
        if let Some(label) = doc.option_label("format", option) {
            println!("option[format/{}]: {}", option, label);
        }
    }

    println!("\n=== Metadata ===");
    for (attr, name) in [
        (MetaAttr::Name, "description"),
        (MetaAttr::Name, "keywords"),
        (MetaAttr::Property, "og:title"),
        (MetaAttr::Property, "og:description"),
        (MetaAttr::Property, "og:locale"),
    ] {
        if let Some(content) = doc.metadata(attr, name) {
            println!("{}: {}", name, content);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("langswitch=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    // An explicit code on the command line plays the role of opening the
    // page from a #code link
    let navigator = match std::env::args().nth(1) {
        Some(code) => Arc::new(MemoryNavigator::with_fragment(&format!("#{}", code))),
        None => Arc::new(MemoryNavigator::new()),
    };
    let store = Arc::new(FilePreferenceStore::new(&config.preference_file));

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .build()?;
    let loader = DictionaryLoader::new(client, &config.translations_base_url);

    let resolver = LanguageResolver::new(navigator, store);
    let mut switcher = LanguageSwitcher::new(resolver, TranslationApplier::new(loader));

    let mut doc = sample_document();
    let active = switcher.start(&mut doc).await;
    switcher.process_pending(&mut doc).await;

    info!("Active language: {} ({})", active.code(), active.name());
    print_document(&doc);

    Ok(())
}
