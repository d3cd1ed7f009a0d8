//! Compiled regex patterns used by the extraction pipeline.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Markup Normalization Patterns
// =============================================================================

/// Matches an inline `charset=...;` declaration.
///
/// The payload is already decoded by the time this runs, so a stale
/// declaration would only mislead the parser.
pub static CHARSET_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)charset=[\w-]+;").expect("CHARSET_DECLARATION regex")
});

/// Matches two `<br>` tags separated only by whitespace.
pub static DOUBLE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>\s*<br\s*/?>").expect("DOUBLE_BREAK regex")
});

/// Matches opening and closing `<font>` tags (content is kept).
pub static FONT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?font\b[^>]*>").expect("FONT_TAG regex"));

/// Matches a whole `<script>...</script>` block, across lines.
pub static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?</script\s*>").expect("SCRIPT_BLOCK regex")
});

// =============================================================================
// Container Classification Patterns
// =============================================================================

/// Matches class/id values that are definitely not article content.
pub static NEGATIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)comment|meta|footer|footnote|sidebar|blogroll").expect("NEGATIVE_CLASS regex")
});

/// Matches class/id values carrying a whole-word post/entry/article token.
///
/// `entry` and `article` may be followed by `content`, `text`, `body` or
/// `post`, optionally joined with a hyphen (`entry-content`, `articlebody`).
pub static POSITIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|\s)(?:post|hentry|entry-?(?:content|text|body|post)?|article-?(?:content|text|body|post)?)(?:\s|$)",
    )
    .expect("POSITIVE_CLASS regex")
});

// =============================================================================
// Title Patterns
// =============================================================================

/// Matches a trailing run of separator punctuation plus whitespace.
pub static TITLE_TRAILING_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-\u{2013}\u{2014}.\u{2022}]+\s*$").expect("TITLE_TRAILING_SEPARATORS regex")
});
