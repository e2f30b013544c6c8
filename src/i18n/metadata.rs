//! Per-language SEO metadata records.
//!
//! These records are independent of the translation dictionaries: they are
//! compiled into the registry and written to the document head whenever the
//! active language changes, even when a dictionary fails to load.

/// SEO metadata for one language.
///
/// Projected onto the document as the title, the `description` and
/// `keywords` meta entries, and the Open Graph / Twitter social-preview
/// title and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoMetadata {
    /// Document title, also used for `og:title` and `twitter:title`
    pub title: &'static str,

    /// Meta description, also used for `og:description` and `twitter:description`
    pub description: &'static str,

    /// Meta keywords
    pub keywords: &'static str,
}
