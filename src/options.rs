//! Configuration options for content extraction.
//!
//! The `Options` struct carries the tunable heuristics of the scorer, the
//! title delimiter and the sanitizer's junk lists. Everything has a default,
//! so callers only override what they need.

/// Tags removed wholesale (with their subtree) from the extracted content.
pub const DEFAULT_JUNK_TAGS: &[&str] = &[
    "style", "form", "iframe", "script", "button", "input", "textarea",
    "noscript", "select", "option", "object", "applet", "basefont",
    "bgsound", "blink", "canvas", "command", "menu", "nav", "datalist",
    "embed", "frame", "frameset", "keygen", "label", "marquee", "link",
    "header", "footer", "aside",
    // social widget beacons
    "fb:like", "g:plusone",
];

/// Attributes stripped from every element left in the extracted content.
pub const DEFAULT_JUNK_ATTRIBUTES: &[&str] = &[
    "style", "class", "id", "onclick", "onmouseover", "onmouseout", "onload",
    "onerror", "align", "border", "margin", "bgcolor", "width", "height",
    "hspace", "vspace",
];

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_readability::Options;
///
/// let options = Options {
///     title_delimiter: " | ".to_string(),
///     ..Options::default()
/// };
/// assert_eq!(options.min_paragraph_len, 10);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Charset label of the raw input bytes.
    ///
    /// Unknown labels fall back to UTF-8 without reporting an error.
    ///
    /// Default: `None` (UTF-8)
    pub charset: Option<String>,

    /// Delimiter separating the article title from the site name.
    ///
    /// Default: `" - "`
    pub title_delimiter: String,

    /// Tag names treated as paragraphs by the scorer.
    ///
    /// Default: `["p"]`
    pub paragraph_tags: Vec<String>,

    /// Paragraph text longer than this (in characters) adds its length
    /// to the container score.
    ///
    /// Default: `10`
    pub min_paragraph_len: usize,

    /// Score for a class/id that looks like comments, footers or sidebars.
    ///
    /// Default: `-50`
    pub negative_score: i32,

    /// Score for a class/id that looks like article or post content.
    ///
    /// Default: `25`
    pub positive_score: i32,

    /// Score for a class/id that matches neither pattern.
    ///
    /// Stays at zero by default so that unclassified containers holding only
    /// short paragraphs never become candidates.
    ///
    /// Default: `0`
    pub neutral_score: i32,

    /// Tags removed, with their whole subtree, from the extracted content.
    ///
    /// Default: [`DEFAULT_JUNK_TAGS`]
    pub junk_tags: Vec<String>,

    /// Attributes removed from every element of the extracted content.
    ///
    /// Default: [`DEFAULT_JUNK_ATTRIBUTES`]
    pub junk_attributes: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            charset: None,
            title_delimiter: " - ".to_string(),
            paragraph_tags: vec!["p".to_string()],
            min_paragraph_len: 10,
            negative_score: -50,
            positive_score: 25,
            neutral_score: 0,
            junk_tags: DEFAULT_JUNK_TAGS.iter().map(|s| (*s).to_string()).collect(),
            junk_attributes: DEFAULT_JUNK_ATTRIBUTES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert!(opts.charset.is_none());
        assert_eq!(opts.title_delimiter, " - ");
        assert_eq!(opts.paragraph_tags, vec!["p".to_string()]);
        assert_eq!(opts.min_paragraph_len, 10);
        assert_eq!(opts.negative_score, -50);
        assert_eq!(opts.positive_score, 25);
        assert_eq!(opts.neutral_score, 0);
        assert_eq!(opts.junk_tags.len(), DEFAULT_JUNK_TAGS.len());
        assert_eq!(opts.junk_attributes.len(), DEFAULT_JUNK_ATTRIBUTES.len());
    }

    #[test]
    fn test_default_junk_lists_keep_content_attributes() {
        let opts = Options::default();

        for kept in ["src", "href", "alt", "title"] {
            assert!(!opts.junk_attributes.iter().any(|a| a == kept), "{kept} must survive");
        }
        assert!(opts.junk_tags.iter().any(|t| t == "script"));
        assert!(opts.junk_tags.iter().any(|t| t == "fb:like"));
    }

    #[test]
    fn test_custom_options() {
        let opts = Options {
            title_delimiter: " | ".to_string(),
            junk_tags: vec!["table".to_string()],
            ..Options::default()
        };

        assert_eq!(opts.title_delimiter, " | ");
        assert_eq!(opts.junk_tags, vec!["table".to_string()]);
        assert_eq!(opts.min_paragraph_len, 10);
    }
}
