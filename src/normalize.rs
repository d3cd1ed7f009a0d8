//! Textual clean-up of raw markup before it reaches the parser.

use crate::encoding::transcode_to_utf8;
use crate::patterns::{CHARSET_DECLARATION, DOUBLE_BREAK, FONT_TAG, SCRIPT_BLOCK};

/// Decode raw bytes with the given charset label and normalize the markup.
#[must_use]
pub fn normalize_bytes(raw: &[u8], charset: Option<&str>) -> String {
    normalize_markup(&transcode_to_utf8(raw, charset))
}

/// Normalize already decoded markup.
///
/// In order: drops the first inline `charset=...;` declaration, turns
/// `<br><br>` pairs into paragraph breaks, strips `<font>` tags (keeping
/// their text), removes `<script>` blocks and trims surrounding whitespace.
#[must_use]
pub fn normalize_markup(html: &str) -> String {
    let html = CHARSET_DECLARATION.replace(html, "");
    let html = DOUBLE_BREAK.replace_all(&html, "</p><p>");
    let html = FONT_TAG.replace_all(&html, "");
    let html = SCRIPT_BLOCK.replace_all(&html, "");
    html.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_only_first_charset_declaration() {
        let html = r#"<meta content="text/html; charset=iso-8859-1;"><p>charset=utf-8; twice</p>"#;
        let out = normalize_markup(html);
        assert_eq!(
            out,
            r#"<meta content="text/html; "><p>charset=utf-8; twice</p>"#
        );
    }

    #[test]
    fn test_missing_charset_is_noop() {
        assert_eq!(normalize_markup("<p>plain</p>"), "<p>plain</p>");
    }

    #[test]
    fn test_charset_without_semicolon_is_kept() {
        let html = r#"<meta charset="utf-8"><p>Set charset=latin1 in the header</p>"#;
        assert_eq!(normalize_markup(html), html);
    }

    #[test]
    fn test_double_breaks_become_paragraphs() {
        let out = normalize_markup("<p>one<br>\n <br/>two</p>");
        assert_eq!(out, "<p>one</p><p>two</p>");
    }

    #[test]
    fn test_single_break_is_kept() {
        assert_eq!(normalize_markup("a<br>b"), "a<br>b");
    }

    #[test]
    fn test_font_tags_stripped_text_kept() {
        let out = normalize_markup(r#"<p><FONT color="red">red</font> text</p>"#);
        assert_eq!(out, "<p>red text</p>");
    }

    #[test]
    fn test_script_blocks_removed() {
        let out = normalize_markup("  <p>a</p><script>\nalert('<p>x</p>');\n</script><p>b</p>\n");
        assert_eq!(out, "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_bytes_are_decoded_before_normalizing() {
        let out = normalize_bytes(b"  <p>Caf\xE9</p>  ", Some("latin1"));
        assert_eq!(out, "<p>Café</p>");
    }
}
