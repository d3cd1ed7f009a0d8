//! DOM construction and the thin adapter over `dom_query`.
//!
//! `dom_query` keeps every node in an arena addressed by `NodeId`; parent
//! links are plain ids, so detaching a subtree never leaves a dangling
//! reference behind. The helpers here give the rest of the crate a small,
//! stable vocabulary over that tree.

pub use dom_query::{Document, NodeId, NodeRef, Selection};
pub use tendril::StrTendril;

// === Tree Building ===

/// Build a document tree from normalized markup.
///
/// Parsing is forgiving: malformed markup still yields a tree. Only blank
/// input produces `None`, which the pipeline treats as an unusable document.
/// Top-level processing instructions are discarded and any declared
/// charset is rewritten to UTF-8, the encoding the text now has.
#[must_use]
pub fn parse(html: &str) -> Option<Document> {
    if html.trim().is_empty() {
        return None;
    }

    let doc = Document::from(html);
    let removed = discard_processing_instructions(&doc);
    if removed > 0 {
        tracing::debug!(removed, "discarded top-level processing instructions");
    }
    doc.select("meta[charset]").set_attr("charset", "utf-8");
    Some(doc)
}

/// Remove `<?...?>` directives sitting directly under the document root.
///
/// The HTML tokenizer turns them into comments whose data begins with `?`.
fn discard_processing_instructions(doc: &Document) -> usize {
    let directives: Vec<NodeRef> = doc
        .root()
        .children()
        .into_iter()
        .filter(|node| node.is_comment() && node.html().starts_with("<!--?"))
        .collect();

    for node in &directives {
        node.remove_from_parent();
    }
    directives.len()
}

// === Node Information ===

/// Get the lowercase tag name of an element node.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Get an attribute value.
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

/// Get the `class` attribute.
#[inline]
#[must_use]
pub fn class_name(node: &NodeRef) -> Option<String> {
    get_attribute(node, "class")
}

/// Get the `id` attribute.
#[inline]
#[must_use]
pub fn id(node: &NodeRef) -> Option<String> {
    get_attribute(node, "id")
}

/// Nearest ancestor that is an element.
#[must_use]
pub fn parent_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent().filter(NodeRef::is_element)
}

/// All element nodes below `node`, in document order.
#[must_use]
pub fn descendant_elements<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.descendants()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

// === Text Content ===

/// Get all text content of node and descendants.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Number of Unicode code points in the node's text.
#[must_use]
pub fn char_count(node: &NodeRef) -> usize {
    node.text().chars().count()
}

// === Tree Manipulation ===

/// Detach a node and its whole subtree from the tree.
#[inline]
pub fn remove(node: &NodeRef) {
    node.remove_from_parent();
}

/// Remove an attribute; no-op if absent.
#[inline]
pub fn remove_attribute(node: &NodeRef, name: &str) {
    node.remove_attr(name);
}
