//! # rs-readability
//!
//! Extracts the readable main content of an HTML document: a cleaned
//! content fragment, a normalized title, an optional lead image and a
//! character-based word count. Navigation, comments, sidebars and markup
//! clutter are discarded.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readability::extract;
//!
//! let html = r#"<html><head><title>My Article - My Blog</title></head>
//! <body><div class="post"><p>Main content of the article goes here.</p></div></body></html>"#;
//!
//! let result = extract(html)?;
//! assert_eq!(result.title.as_deref(), Some("My Article"));
//! assert_eq!(result.content.as_deref(), Some("<div><p>Main content of the article goes here.</p></div>"));
//! # Ok::<(), rs_readability::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. **Normalize** raw markup ([`normalize`]): decode the caller's charset,
//!    turn `<br><br>` into paragraph breaks, drop `<font>` and `<script>`.
//! 2. **Parse** into an arena-backed tree ([`dom`]).
//! 3. **Score** each paragraph's container by class/id and text length ([`scoring`]).
//! 4. **Select** the container with the greatest positive score ([`selector`]).
//! 5. **Isolate** it into a standalone document ([`isolate`]).
//! 6. **Find** the lead image ([`image`]) and **sanitize** junk tags and
//!    attributes ([`sanitize`]).
//! 7. **Assemble** the [`ExtractResult`] with the cleaned [`title`].
//!
//! No step performs I/O. Fetching by URL is delegated to a [`fetch::Fetcher`].

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Charset label resolution and transcoding.
pub mod encoding;

/// Textual markup clean-up before parsing.
pub mod normalize;

/// Tree building and DOM helpers.
pub mod dom;

/// Container scoring.
pub mod scoring;

/// Winning container selection.
pub mod selector;

/// Detached copies of the selected container.
pub mod isolate;

/// Lead image lookup.
pub mod image;

/// Junk tag and attribute removal.
pub mod sanitize;

/// Title extraction and clean-up.
pub mod title;

/// Fetch collaborator for the URL entry point.
pub mod fetch;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::Readability;
pub use options::{Options, DEFAULT_JUNK_ATTRIBUTES, DEFAULT_JUNK_TAGS};
pub use result::ExtractResult;
pub use sanitize::Sanitizer;

/// Extracts readable content from an HTML string using default options.
///
/// # Example
///
/// ```rust
/// use rs_readability::extract;
///
/// let result = extract("<html><body><p>short</p></body></html>")?;
/// assert!(result.content.is_none());
/// # Ok::<(), rs_readability::Error>(())
/// ```
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts readable content from an HTML string with custom options.
///
/// `options.charset` is ignored: the input is already a Rust string.
///
/// # Example
///
/// ```rust
/// use rs_readability::{extract_with_options, Options};
///
/// let html = "<title>Story | Paper</title><div class=\"entry\"><p>Some article text.</p></div>";
/// let options = Options {
///     title_delimiter: " | ".to_string(),
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// assert_eq!(result.title.as_deref(), Some("Story"));
/// # Ok::<(), rs_readability::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    Readability::from_html(html, options.clone()).content()
}

/// Extracts readable content from raw bytes in the given charset.
///
/// Unknown or missing labels are treated as UTF-8.
///
/// # Example
///
/// ```rust
/// use rs_readability::extract_bytes;
///
/// let html = b"<div class=\"post\"><p>Caf\xE9 au lait, tr\xE8s bien.</p></div>";
/// let result = extract_bytes(html, Some("iso-8859-1"))?;
/// assert!(result.content.unwrap().contains("Café"));
/// # Ok::<(), rs_readability::Error>(())
/// ```
pub fn extract_bytes(html: &[u8], charset: Option<&str>) -> Result<ExtractResult> {
    Readability::new(html, charset).content()
}
