//! Copies the winning container out of the source document.
//!
//! The copy is a standalone [`Document`], so sanitizing it leaves the
//! original tree untouched.

use crate::dom::{Document, NodeRef, StrTendril};

/// A detached deep copy of the selected container.
pub struct IsolatedContent {
    doc: Document,
}

impl IsolatedContent {
    /// Deep-copy `node` (with all descendants) into a fresh document.
    #[must_use]
    pub fn from_node(node: &NodeRef) -> Self {
        Self {
            doc: Document::from(node.html()),
        }
    }

    /// The element holding the copied container.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.doc.select("body").nodes().first().cloned()
    }

    /// The standalone document backing the copy.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Serialize the copied content back to markup.
    #[must_use]
    pub fn html(&self) -> String {
        self.root()
            .map(|root| root.inner_html().to_string())
            .unwrap_or_default()
    }

    /// Text of the copied content with all markup stripped.
    #[must_use]
    pub fn text(&self) -> StrTendril {
        self.root().map(|root| root.text()).unwrap_or_default()
    }
}
