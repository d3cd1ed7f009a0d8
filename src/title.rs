//! Document title extraction and clean-up.

use crate::dom::Document;
use crate::patterns::TITLE_TRAILING_SEPARATORS;

/// Default delimiter between article title and site name.
pub const DEFAULT_DELIMITER: &str = " - ";

/// Read the first `<title>` of the document and clean it.
///
/// Returns `None` when the document has no title or the title is blank.
#[must_use]
pub fn extract_title(doc: &Document, delimiter: &str) -> Option<String> {
    let title = doc.select("title").nodes().first()?.text();
    clean_title(&title, delimiter)
}

/// Clean a raw title string.
///
/// The text before the last `delimiter` is kept (site names usually come
/// last), then trailing separator punctuation is dropped.
///
/// # Examples
///
/// ```
/// use rs_readability::title::clean_title;
///
/// assert_eq!(clean_title("My Great Post - Example Site", " - ").as_deref(), Some("My Great Post"));
/// assert_eq!(clean_title("Just A Title", " - ").as_deref(), Some("Just A Title"));
/// ```
#[must_use]
pub fn clean_title(raw: &str, delimiter: &str) -> Option<String> {
    let trimmed = raw.trim();

    let kept = if delimiter.is_empty() {
        trimmed
    } else {
        trimmed
            .rsplit_once(delimiter)
            .map_or(trimmed, |(head, _site)| head)
    };

    let cleaned = TITLE_TRAILING_SEPARATORS.replace(kept, "");
    let cleaned = cleaned.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}
