//! Paragraph-driven container scoring.
//!
//! Every paragraph credits its nearest element ancestor (its container)
//! with a class/id score plus, for paragraphs of real length, the length of
//! its text. Scores live in a [`ScoreTable`] keyed by arena `NodeId`, never
//! in the tree itself, so nothing of the scoring pass can leak into the
//! serialized output.

use std::collections::HashMap;

use crate::dom::{self, Document, NodeId, NodeRef};
use crate::options::Options;
use crate::patterns::{NEGATIVE_CLASS, POSITIVE_CLASS};

/// Accumulated container scores, remembering first-touch order.
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    order: Vec<NodeId>,
    scores: HashMap<NodeId, i64>,
}

impl ScoreTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` to a container's score, registering it on first touch.
    pub fn add(&mut self, container: NodeId, delta: i64) {
        let score = self.scores.entry(container).or_insert_with(|| {
            self.order.push(container);
            0
        });
        *score = score.saturating_add(delta);
    }

    /// Score of a container, `None` if no paragraph touched it.
    #[must_use]
    pub fn get(&self, container: NodeId) -> Option<i64> {
        self.scores.get(&container).copied()
    }

    /// Containers and their scores in the order they were first touched.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, i64)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.scores.get(id).map(|score| (*id, *score)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Score a class or id attribute value.
///
/// Negative patterns win over positive ones. A value matching neither
/// scores `options.neutral_score`; an absent or blank value always scores
/// zero.
#[must_use]
pub fn classify(value: Option<&str>, options: &Options) -> i32 {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return 0;
    };

    if NEGATIVE_CLASS.is_match(value) {
        options.negative_score
    } else if POSITIVE_CLASS.is_match(value) {
        options.positive_score
    } else {
        options.neutral_score
    }
}

/// Walk every paragraph of the document and accumulate container scores.
///
/// Each paragraph contributes on its own, so a container's class/id score is
/// counted once per paragraph it holds.
#[must_use]
pub fn score_paragraphs(doc: &Document, options: &Options) -> ScoreTable {
    let mut table = ScoreTable::new();
    let mut paragraphs = 0usize;

    for node in dom::descendant_elements(&doc.root()) {
        if !is_paragraph(&node, options) {
            continue;
        }
        paragraphs += 1;

        let Some(container) = dom::parent_element(&node) else {
            continue;
        };
        let delta = paragraph_contribution(&node, &container, options);
        tracing::trace!(container = ?container.id, delta, "paragraph scored");
        table.add(container.id, delta);
    }

    tracing::debug!(paragraphs, containers = table.len(), "scored paragraphs");
    table
}

fn is_paragraph(node: &NodeRef, options: &Options) -> bool {
    dom::tag_name(node).is_some_and(|tag| options.paragraph_tags.iter().any(|p| p.eq_ignore_ascii_case(&tag)))
}

fn paragraph_contribution(paragraph: &NodeRef, container: &NodeRef, options: &Options) -> i64 {
    let class_score = classify(dom::class_name(container).as_deref(), options);
    let id_score = classify(dom::id(container).as_deref(), options);
    let mut delta = i64::from(class_score) + i64::from(id_score);

    let text_len = dom::char_count(paragraph);
    if text_len > options.min_paragraph_len {
        delta = delta.saturating_add(i64::try_from(text_len).unwrap_or(i64::MAX));
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Document {
        dom::parse(html).unwrap()
    }

    fn score_of(doc: &Document, table: &ScoreTable, selector: &str) -> Option<i64> {
        let id = doc.select(selector).nodes().first().unwrap().id;
        table.get(id)
    }

    #[test]
    fn test_classify() {
        let opts = Options::default();

        assert_eq!(classify(Some("comment-list"), &opts), -50);
        assert_eq!(classify(Some("footnote"), &opts), -50);
        assert_eq!(classify(Some("hentry"), &opts), 25);
        assert_eq!(classify(Some("wide entry-content"), &opts), 25);
        assert_eq!(classify(Some("wrapper"), &opts), 0);
        assert_eq!(classify(Some(""), &opts), 0);
        assert_eq!(classify(None, &opts), 0);
    }

    #[test]
    fn test_negative_wins_over_positive() {
        let opts = Options::default();
        assert_eq!(classify(Some("post comments"), &opts), -50);
    }

    #[test]
    fn test_classify_uses_configured_weights() {
        let opts = Options {
            negative_score: -5,
            positive_score: 7,
            neutral_score: 1,
            ..Options::default()
        };
        assert_eq!(classify(Some("sidebar"), &opts), -5);
        assert_eq!(classify(Some("post"), &opts), 7);
        assert_eq!(classify(Some("box"), &opts), 1);
        assert_eq!(classify(None, &opts), 0);
    }

    #[test]
    fn test_contributions_accumulate_per_paragraph() {
        let long = "x".repeat(40);
        let html = format!(r#"<div class="post"><p>{long}</p><p>short</p><p>{long}</p></div>"#);
        let d = doc(&html);
        let table = score_paragraphs(&d, &Options::default());

        // 3 × 25 for the class, plus 40 for each long paragraph
        assert_eq!(score_of(&d, &table, "div"), Some(75 + 80));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_length_bonus_requires_more_than_threshold() {
        let d = doc(r#"<div id="a"><p>0123456789</p></div><div id="b"><p>0123456789A</p></div>"#);
        let table = score_paragraphs(&d, &Options::default());

        assert_eq!(score_of(&d, &table, "#a"), Some(0));
        assert_eq!(score_of(&d, &table, "#b"), Some(11));
    }

    #[test]
    fn test_length_is_measured_in_code_points() {
        // 11 three-byte characters
        let text = "\u{4E2D}".repeat(11);
        let d = doc(&format!("<section><p>{text}</p></section>"));
        let table = score_paragraphs(&d, &Options::default());

        assert_eq!(score_of(&d, &table, "section"), Some(11));
    }

    #[test]
    fn test_table_keeps_first_touch_order() {
        let d = doc("<div id=\"a\"><p>1</p></div><div id=\"b\"><p>2</p></div><div id=\"a2\"></div>");
        let table = score_paragraphs(&d, &Options::default());

        let order: Vec<NodeId> = table.iter().map(|(id, _)| id).collect();
        let a = d.select("#a").nodes().first().unwrap().id;
        let b = d.select("#b").nodes().first().unwrap().id;
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn test_scores_do_not_touch_the_tree() {
        let d = doc(r#"<div class="post"><p>Long enough paragraph text.</p></div>"#);
        let before = d.html().to_string();
        let _ = score_paragraphs(&d, &Options::default());
        assert_eq!(d.html().to_string(), before);
    }

    #[test]
    fn test_custom_paragraph_tags() {
        let d = doc("<div><blockquote>A quotation of some length</blockquote></div>");
        let opts = Options {
            paragraph_tags: vec!["blockquote".to_string()],
            ..Options::default()
        };
        let table = score_paragraphs(&d, &opts);
        assert_eq!(score_of(&d, &table, "div"), Some(26));
    }

    #[test]
    fn test_neutral_class_with_short_paragraphs_scores_zero() {
        let d = doc(r#"<div class="wrapper" id="main"><p>tiny</p><p>0123456789</p></div>"#);
        let table = score_paragraphs(&d, &Options::default());
        assert_eq!(score_of(&d, &table, "div"), Some(0));
    }
}
