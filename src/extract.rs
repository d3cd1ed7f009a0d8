//! The extraction pipeline and its owning object.
//!
//! Raw bytes are normalized and parsed once at construction. [`Readability::content`]
//! then scores paragraphs, picks the winning container, copies it out of the
//! document, records its lead image, sanitizes it and assembles the result.

use crate::dom::{self, Document, NodeRef};
use crate::error::{Error, Result};
use crate::fetch::{parse_location, Fetcher};
use crate::image::find_lead_image;
use crate::isolate::IsolatedContent;
use crate::normalize::{normalize_bytes, normalize_markup};
use crate::options::Options;
use crate::result::ExtractResult;
use crate::sanitize::Sanitizer;
use crate::scoring::score_paragraphs;
use crate::selector::select_best;
use crate::title;

/// Single-document readable-content extractor.
///
/// One instance handles one document; it is not meant to be shared between
/// threads. Independent instances share no state.
///
/// # Example
///
/// ```rust
/// use rs_readability::Readability;
///
/// let html = r#"<html><head><title>Hello - Site</title></head>
/// <body><div class="entry"><p>Readable paragraph text lives here.</p></div></body></html>"#;
///
/// let mut reader = Readability::new(html, None);
/// let result = reader.content()?;
/// assert_eq!(result.title.as_deref(), Some("Hello"));
/// assert!(result.content.is_some());
/// # Ok::<(), rs_readability::Error>(())
/// ```
pub struct Readability {
    doc: Option<Document>,
    options: Options,
    lead_image: Option<String>,
}

impl Readability {
    /// Build from raw bytes in the given charset (UTF-8 when `None` or unknown).
    pub fn new(raw: impl AsRef<[u8]>, charset: Option<&str>) -> Self {
        let options = Options {
            charset: charset.map(str::to_string),
            ..Options::default()
        };
        Self::with_options(raw, options)
    }

    /// Build from raw bytes, decoding with `options.charset`.
    pub fn with_options(raw: impl AsRef<[u8]>, options: Options) -> Self {
        let markup = normalize_bytes(raw.as_ref(), options.charset.as_deref());
        Self::build(&markup, options)
    }

    /// Build from markup that is already a Rust string; no charset decoding.
    #[must_use]
    pub fn from_html(html: &str, options: Options) -> Self {
        Self::build(&normalize_markup(html), options)
    }

    /// Build from either literal markup or an `http(s)` URL.
    ///
    /// URLs are retrieved through `fetcher` before anything else happens;
    /// text that starts like a URL but does not parse is an error.
    pub fn from_source(source: &str, charset: Option<&str>, fetcher: &dyn Fetcher) -> Result<Self> {
        match parse_location(source)? {
            Some(url) => {
                let raw = fetcher.fetch(&url)?;
                Ok(Self::new(raw, charset))
            }
            None => Ok(Self::new(source, charset)),
        }
    }

    fn build(markup: &str, options: Options) -> Self {
        tracing::debug!(len = markup.len(), "building document tree");
        let doc = dom::parse(markup);
        if doc.is_none() {
            tracing::warn!("document is empty after normalization");
        }
        Self {
            doc,
            options,
            lead_image: None,
        }
    }

    /// Whether construction produced a document tree.
    #[must_use]
    pub fn is_parsed(&self) -> bool {
        self.doc.is_some()
    }

    /// The options this instance was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Cleaned document title, splitting off the site name at `delimiter`.
    #[must_use]
    pub fn title(&self, delimiter: &str) -> Option<String> {
        title::extract_title(self.doc.as_ref()?, delimiter)
    }

    /// Lead image of `target`, or the one recorded by the last
    /// [`content`](Self::content) call when no target is given.
    #[must_use]
    pub fn lead_image(&self, target: Option<&NodeRef>) -> Option<String> {
        match target {
            Some(node) => find_lead_image(node),
            None => self.lead_image.clone(),
        }
    }

    /// Run the extraction pipeline.
    ///
    /// Fails only if construction produced no tree. A document without a
    /// content candidate yields `content: None` with the title still set.
    pub fn content(&mut self) -> Result<ExtractResult> {
        let Some(doc) = self.doc.as_ref() else {
            return Err(Error::ParseError("document is empty".to_string()));
        };

        let title = title::extract_title(doc, &self.options.title_delimiter);

        let scores = score_paragraphs(doc, &self.options);
        let Some(container) = select_best(&scores).and_then(|best| doc.tree.get(&best.node)) else {
            self.lead_image = None;
            return Ok(ExtractResult {
                title,
                ..ExtractResult::default()
            });
        };

        let isolated = IsolatedContent::from_node(&container);
        let Some(root) = isolated.root() else {
            self.lead_image = None;
            return Ok(ExtractResult {
                title,
                ..ExtractResult::default()
            });
        };

        let lead_image = find_lead_image(&root);
        Sanitizer::from_options(&self.options).sanitize(&root);

        let content = isolated.html();
        let word_count = isolated.text().chars().count();
        tracing::debug!(word_count, has_image = lead_image.is_some(), "extraction complete");

        self.lead_image.clone_from(&lead_image);
        Ok(ExtractResult {
            title,
            lead_image,
            word_count,
            content: Some(content),
        })
    }
}
