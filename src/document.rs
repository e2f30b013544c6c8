//! Document projection contract.
//!
//! The page's DOM is an external collaborator. The applier only sees it
//! through [`DocumentProjector`]: a listing of the elements tagged for
//! translation plus mutators for text, placeholders, select option labels,
//! the document language attribute, the title, and named metadata entries.
//! [`MemoryDocument`] implements the contract in-process so the whole
//! pipeline runs without a browser.

use std::collections::BTreeMap;

/// How a tagged element consumes its translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// Visible text content (the common case)
    Text,
    /// Text-input-like control; the translation goes to its placeholder
    Input,
    /// Selection control; each labeled option carries its own key
    Select {
        /// Translation keys of the options, in document order
        option_keys: Vec<String>,
    },
}

/// An element tagged for translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedElement {
    /// Translation key carried by the element
    pub key: String,
    pub kind: ElementKind,
}

impl TaggedElement {
    pub fn text(key: &str) -> Self {
        Self {
            key: key.to_string(),
            kind: ElementKind::Text,
        }
    }

    pub fn input(key: &str) -> Self {
        Self {
            key: key.to_string(),
            kind: ElementKind::Input,
        }
    }

    pub fn select(key: &str, option_keys: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            kind: ElementKind::Select {
                option_keys: option_keys.iter().map(|k| k.to_string()).collect(),
            },
        }
    }
}

/// Which attribute identifies a metadata entry in the document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MetaAttr {
    /// `<meta name="...">` (description, keywords)
    Name,
    /// `<meta property="...">` (Open Graph / Twitter entries)
    Property,
}

/// Minimal document surface the applier needs.
///
/// Every mutator is an upsert: setting a value that is already present
/// overwrites it in place, and setting a metadata entry that does not exist
/// creates it. That is what makes repeated application idempotent.
pub trait DocumentProjector {
    /// All elements currently tagged for translation.
    fn tagged_elements(&self) -> Vec<TaggedElement>;

    /// Set the visible text content of the element tagged with `key`.
    fn set_text(&mut self, key: &str, value: &str);

    /// Set the placeholder attribute of the input tagged with `key`.
    fn set_placeholder(&mut self, key: &str, value: &str);

    /// Set the label of one option (identified by its own key) inside the
    /// selection control tagged with `select_key`.
    fn set_option_label(&mut self, select_key: &str, option_key: &str, value: &str);

    /// Set the document's language attribute.
    fn set_language(&mut self, code: &str);

    /// Set the document title.
    fn set_title(&mut self, title: &str);

    /// Create or update a metadata entry in the document head.
    fn set_metadata(&mut self, attr: MetaAttr, name: &str, content: &str);
}

/// In-memory document used by tests and the preview binary.
///
/// Records every projected value so the final document state can be
/// inspected after one or more apply passes.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: Vec<TaggedElement>,
    texts: BTreeMap<String, String>,
    placeholders: BTreeMap<String, String>,
    option_labels: BTreeMap<(String, String), String>,
    language: Option<String>,
    title: Option<String>,
    metadata: BTreeMap<(MetaAttr, String), String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document with the given tagged elements.
    pub fn with_elements(elements: Vec<TaggedElement>) -> Self {
        Self {
            elements,
            ..Self::default()
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.texts.get(key).map(String::as_str)
    }

    pub fn placeholder(&self, key: &str) -> Option<&str> {
        self.placeholders.get(key).map(String::as_str)
    }

    pub fn option_label(&self, select_key: &str, option_key: &str) -> Option<&str> {
        self.option_labels
            .get(&(select_key.to_string(), option_key.to_string()))
            .map(String::as_str)
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn metadata(&self, attr: MetaAttr, name: &str) -> Option<&str> {
        self.metadata
            .get(&(attr, name.to_string()))
            .map(String::as_str)
    }

    /// Snapshot of the entire projected state, for idempotence comparisons.
    pub fn snapshot(&self) -> String {
        format!(
            "{:?}|{:?}|{:?}|{:?}|{:?}|{:?}",
            self.texts, self.placeholders, self.option_labels, self.language, self.title, self.metadata
        )
    }
}

impl DocumentProjector for MemoryDocument {
    fn tagged_elements(&self) -> Vec<TaggedElement> {
        self.elements.clone()
    }

    fn set_text(&mut self, key: &str, value: &str) {
        self.texts.insert(key.to_string(), value.to_string());
    }

    fn set_placeholder(&mut self, key: &str, value: &str) {
        self.placeholders.insert(key.to_string(), value.to_string());
    }

    fn set_option_label(&mut self, select_key: &str, option_key: &str, value: &str) {
        self.option_labels.insert(
            (select_key.to_string(), option_key.to_string()),
            value.to_string(),
        );
    }

    fn set_language(&mut self, code: &str) {
        self.language = Some(code.to_string());
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_metadata(&mut self, attr: MetaAttr, name: &str, content: &str) {
        self.metadata
            .insert((attr, name.to_string()), content.to_string());
    }
}
