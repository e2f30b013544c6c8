//! Orchestration: wiring resolution, loading, and projection together.
//!
//! The switcher owns the resolver and the applier, subscribes to the
//! fragment-change channel at construction, and drives the
//! fetch-then-apply cycle on startup and on every notification. It holds
//! page-session state explicitly instead of in ambient globals; one
//! instance lives from page load to page unload.

use crate::applier::TranslationApplier;
use crate::document::DocumentProjector;
use crate::i18n::Language;
use crate::resolver::LanguageResolver;
use tokio::sync::mpsc;
use tracing::{debug, info};

pub struct LanguageSwitcher {
    resolver: LanguageResolver,
    applier: TranslationApplier,
    events: mpsc::UnboundedReceiver<()>,
}

impl LanguageSwitcher {
    /// Build the switcher and subscribe to fragment changes.
    ///
    /// Subscription happens here, before any resolution, so a fragment
    /// written during startup is buffered rather than lost.
    pub fn new(resolver: LanguageResolver, applier: TranslationApplier) -> Self {
        let events = resolver.subscribe();
        Self {
            resolver,
            applier,
            events,
        }
    }

    /// The language of the currently held dictionary.
    pub fn active_language(&self) -> Language {
        self.applier.active_language()
    }

    /// Startup cycle: resolve, normalize the fragment, load, apply.
    ///
    /// The fragment normalization may fire the change channel; the buffered
    /// notification re-resolves to the language that is already active and
    /// is dropped by the guard in
    /// [`handle_fragment_change`](Self::handle_fragment_change), so startup
    /// never loads twice.
    pub async fn start(&mut self, doc: &mut dyn DocumentProjector) -> Language {
        let initial = self.resolver.resolve();
        info!("Detected language '{}'", initial.code());

        self.resolver.ensure_fragment_initialized(initial);
        self.applier.load(initial).await;
        self.applier.apply(doc);

        self.applier.active_language()
    }

    /// Explicit user-driven switch; translations are applied when the
    /// resulting fragment change comes back through the channel.
    pub fn switch_to(&self, code: &str) -> Language {
        self.resolver.switch_to(code)
    }

    /// React to one fragment-change notification.
    ///
    /// The notification carries no code: the full priority evaluation is
    /// re-run, since the fragment is the single source of truth once set. A
    /// resolution equal to the active language is a no-op.
    pub async fn handle_fragment_change(&mut self, doc: &mut dyn DocumentProjector) {
        let resolved = self.resolver.resolve();
        if resolved == self.applier.active_language() {
            debug!("Fragment change resolved to active language, nothing to do");
            return;
        }

        info!("Language changed to '{}'", resolved.code());
        self.applier.load(resolved).await;
        self.applier.apply(doc);
    }

    /// Consume the change channel until it closes.
    ///
    /// Notifications are handled one at a time, so overlapping loads cannot
    /// happen through this path; the last event processed wins.
    pub async fn run(&mut self, doc: &mut dyn DocumentProjector) {
        while self.events.recv().await.is_some() {
            self.handle_fragment_change(doc).await;
        }
    }

    /// Drain any buffered notifications without waiting for new ones.
    ///
    /// Deterministic counterpart of [`run`](Self::run) for callers that
    /// drive the loop themselves.
    pub async fn process_pending(&mut self, doc: &mut dyn DocumentProjector) {
        while self.events.try_recv().is_ok() {
            self.handle_fragment_change(doc).await;
        }
    }
}
