//! Character encoding resolution and transcoding.
//!
//! The caller names the charset of the raw bytes; this module maps that
//! label to an `encoding_rs` encoding and decodes the payload to UTF-8.
//! No sniffing is done beyond the label.

use encoding_rs::{Encoding, UTF_8};

/// Resolve a caller-supplied charset label.
///
/// Missing, blank or unknown labels fall back to UTF-8 silently.
#[must_use]
pub fn resolve_label(label: Option<&str>) -> &'static Encoding {
    label
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .and_then(|l| Encoding::for_label(l.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode raw bytes in the labelled charset to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than failing.
///
/// # Examples
///
/// ```
/// use rs_readability::encoding::transcode_to_utf8;
///
/// let html = b"<p>Caf\xE9</p>";
/// assert_eq!(transcode_to_utf8(html, Some("iso-8859-1")), "<p>Café</p>");
/// ```
#[must_use]
pub fn transcode_to_utf8(bytes: &[u8], label: Option<&str>) -> String {
    let encoding = resolve_label(label);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(bytes).into_owned();
    }

    let (decoded, _encoding_used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::debug!(charset = encoding.name(), "replaced malformed byte sequences");
    }
    decoded.into_owned()
}
