//! Navigation contract: the URL fragment and its change notifications.
//!
//! The fragment (the portion after `#`) is the authoritative, shareable
//! representation of the active language. Any agent may rewrite it — user
//! navigation, a programmatic switch — so consumers never receive a language
//! code directly; they are only told *that* the fragment changed and re-run
//! resolution themselves.

use std::sync::Mutex;
use tokio::sync::mpsc;

/// Access to the URL fragment plus a change-notification channel.
pub trait Navigator: Send + Sync {
    /// The raw fragment including its leading `#`, or `None` when the URL
    /// carries no fragment at all.
    fn fragment(&self) -> Option<String>;

    /// Write the fragment (expects the leading `#`). Implementations notify
    /// subscribers only when the stored value actually changes, so
    /// re-writing the current fragment never produces a redundant
    /// reload-and-apply cycle.
    fn set_fragment(&self, fragment: &str);

    /// Subscribe to fragment-change notifications. The notification carries
    /// no payload: subscribers must re-read the fragment themselves.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<()>;
}

/// In-memory navigator used by tests and the preview binary.
///
/// Plays the role the browser's location bar plays in production: it holds
/// the fragment and fires the change channel on every effective write.
#[derive(Default)]
pub struct MemoryNavigator {
    state: Mutex<NavigatorState>,
}

#[derive(Default)]
struct NavigatorState {
    fragment: Option<String>,
    subscribers: Vec<mpsc::UnboundedSender<()>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a fragment already present, as when the page is opened
    /// from a shared `#ro` style link.
    pub fn with_fragment(fragment: &str) -> Self {
        Self {
            state: Mutex::new(NavigatorState {
                fragment: Some(fragment.to_string()),
                subscribers: Vec::new(),
            }),
        }
    }
}

impl Navigator for MemoryNavigator {
    fn fragment(&self) -> Option<String> {
        self.state.lock().expect("navigator lock poisoned").fragment.clone()
    }

    fn set_fragment(&self, fragment: &str) {
        let mut state = self.state.lock().expect("navigator lock poisoned");
        if state.fragment.as_deref() == Some(fragment) {
            // No-op write; the change channel stays quiet
            return;
        }
        state.fragment = Some(fragment.to_string());
        // Dropped receivers are pruned on the way through
        state.subscribers.retain(|tx| tx.send(()).is_ok());
    }

    fn subscribe(&self) -> mpsc::UnboundedReceiver<()> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.state
            .lock()
            .expect("navigator lock poisoned")
            .subscribers
            .push(tx);
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_starts_absent() {
        let nav = MemoryNavigator::new();
        assert_eq!(nav.fragment(), None);
    }

    #[test]
    fn test_with_fragment() {
        let nav = MemoryNavigator::with_fragment("#ro");
        assert_eq!(nav.fragment(), Some("#ro".to_string()));
    }

    #[test]
    fn test_set_fragment_stores_value() {
        let nav = MemoryNavigator::new();
        nav.set_fragment("#it");
        assert_eq!(nav.fragment(), Some("#it".to_string()));
    }

    #[tokio::test]
    async fn test_set_fragment_notifies_subscribers() {
        let nav = MemoryNavigator::new();
        let mut rx = nav.subscribe();

        nav.set_fragment("#ru");

        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_noop_write_does_not_notify() {
        let nav = MemoryNavigator::with_fragment("#en");
        let mut rx = nav.subscribe();

        nav.set_fragment("#en");

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_each_effective_write_notifies_once() {
        let nav = MemoryNavigator::new();
        let mut rx = nav.subscribe();

        nav.set_fragment("#ro");
        nav.set_fragment("#ro");
        nav.set_fragment("#uk");

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_multiple_subscribers_all_notified() {
        let nav = MemoryNavigator::new();
        let mut rx1 = nav.subscribe();
        let mut rx2 = nav.subscribe();

        nav.set_fragment("#uk");

        assert!(rx1.try_recv().is_ok());
        assert!(rx2.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_dropped_subscriber_is_pruned() {
        let nav = MemoryNavigator::new();
        let rx = nav.subscribe();
        drop(rx);

        // Must not panic or wedge on the dead channel
        nav.set_fragment("#it");
        assert_eq!(nav.fragment(), Some("#it".to_string()));
    }
}
