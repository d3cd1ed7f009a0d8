//! Junk tag and attribute removal for extracted content.
//!
//! The junk lists are injected at construction, so the defaults from
//! [`Options`] can be swapped out wholesale.

use crate::dom::{self, Document, NodeRef};
use crate::options::Options;

/// Counts of what a sanitizing pass removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanitizeReport {
    /// Elements removed together with their subtree.
    pub removed_elements: usize,
    /// Attribute occurrences stripped from surviving elements.
    pub removed_attributes: usize,
}

/// Removes junk tags (whole subtree) and junk attributes from a tree.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    junk_tags: Vec<String>,
    junk_attributes: Vec<String>,
}

impl Sanitizer {
    /// Build a sanitizer from explicit junk lists. Names are matched
    /// case-insensitively.
    pub fn new<T, A>(junk_tags: T, junk_attributes: A) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        Self {
            junk_tags: junk_tags.into_iter().map(|t| t.as_ref().to_ascii_lowercase()).collect(),
            junk_attributes: junk_attributes
                .into_iter()
                .map(|a| a.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Build a sanitizer from the junk lists in `options`.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self::new(&options.junk_tags, &options.junk_attributes)
    }

    #[must_use]
    pub fn junk_tags(&self) -> &[String] {
        &self.junk_tags
    }

    #[must_use]
    pub fn junk_attributes(&self) -> &[String] {
        &self.junk_attributes
    }

    /// Sanitize the subtree rooted at `root` in place.
    ///
    /// All junk tags go first, then junk attributes are stripped from what
    /// is left, so no work is spent on elements that are about to vanish.
    /// `root` itself is never removed, even when its tag is on the junk
    /// list; only its attributes are stripped.
    pub fn sanitize(&self, root: &NodeRef) -> SanitizeReport {
        let mut report = SanitizeReport::default();

        for tag in &self.junk_tags {
            while let Some(node) = first_with_tag(root, tag) {
                dom::remove(&node);
                report.removed_elements += 1;
            }
        }

        let mut elements = vec![root.clone()];
        elements.extend(dom::descendant_elements(root));
        for attr in &self.junk_attributes {
            for element in &elements {
                if element.has_attr(attr) {
                    dom::remove_attribute(element, attr);
                    report.removed_attributes += 1;
                }
            }
        }

        tracing::debug!(
            removed_elements = report.removed_elements,
            removed_attributes = report.removed_attributes,
            "sanitized content"
        );
        report
    }

    /// Parse `html` as a body fragment, sanitize it and serialize it back.
    #[must_use]
    pub fn sanitize_html(&self, html: &str) -> String {
        let doc = Document::from(html);
        let Some(body) = doc.select("body").nodes().first().cloned() else {
            return String::new();
        };
        self.sanitize(&body);
        body.inner_html().to_string()
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}

/// First element strictly below `root` with the given tag.
fn first_with_tag<'a>(root: &NodeRef<'a>, tag: &str) -> Option<NodeRef<'a>> {
    dom::descendant_elements(root)
        .into_iter()
        .find(|node| dom::tag_name(node).as_deref() == Some(tag))
}
