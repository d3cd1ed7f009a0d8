//! Result type for extraction output.

use serde::{Deserialize, Serialize};

/// Result of readable-content extraction from an HTML document.
///
/// `content` is `None` when no container scored positively; the other
/// fields are still filled in from the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Cleaned document title.
    pub title: Option<String>,

    /// `src` of the first image inside the selected content, unvalidated.
    #[serde(rename = "lead_image_url")]
    pub lead_image: Option<String>,

    /// Number of characters in the content with markup stripped.
    pub word_count: usize,

    /// Sanitized content markup, or `None` if no candidate was found.
    pub content: Option<String>,
}

impl ExtractResult {
    /// Whether a content container was found.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }
}
