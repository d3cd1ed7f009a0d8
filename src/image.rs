//! Lead image lookup.

use crate::dom::{self, NodeRef};

/// `src` of the first `<img>` below `root`, in document order.
///
/// Only the given subtree is searched. The reference is returned exactly
/// as written in the markup; an `<img>` without a usable `src` yields `None`.
#[must_use]
pub fn find_lead_image(root: &NodeRef) -> Option<String> {
    let img = dom::descendant_elements(root)
        .into_iter()
        .find(|node| dom::tag_name(node).as_deref() == Some("img"))?;

    dom::get_attribute(&img, "src").filter(|src| !src.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    fn root_of<'a>(doc: &'a Document, selector: &str) -> NodeRef<'a> {
        doc.select(selector).nodes().first().cloned().unwrap()
    }

    #[test]
    fn test_first_image_in_document_order() {
        let doc = dom::parse(
            r#"<div><p><img src="/a.jpg"></p><img src="/b.jpg"></div>"#,
        )
        .unwrap();
        assert_eq!(find_lead_image(&root_of(&doc, "div")), Some("/a.jpg".to_string()));
    }

    #[test]
    fn test_search_is_scoped_to_subtree() {
        let doc = dom::parse(
            r#"<img src="/logo.png"><div id="c"><p>text</p></div>"#,
        )
        .unwrap();
        assert_eq!(find_lead_image(&root_of(&doc, "#c")), None);
    }

    #[test]
    fn test_src_returned_verbatim() {
        let doc = dom::parse(r#"<div><img src="images/pic one.jpg?x=1&amp;y=2"></div>"#).unwrap();
        assert_eq!(
            find_lead_image(&root_of(&doc, "div")),
            Some("images/pic one.jpg?x=1&y=2".to_string())
        );
    }

    #[test]
    fn test_image_without_src() {
        let doc = dom::parse(r#"<div><img alt="no source"></div>"#).unwrap();
        assert_eq!(find_lead_image(&root_of(&doc, "div")), None);
    }
}
