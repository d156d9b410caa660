//! DOM operations adapter.
//!
//! Thin layer over the `dom_query` crate: attribute helpers, the
//! block-element catalogue, and the non-recursive tree-walk primitive the
//! extraction walker is built on.

use std::collections::HashSet;
use std::sync::LazyLock;

// Re-export core types so downstream code does not need a direct
// dom_query dependency for the common cases.
pub use dom_query::{Document, NodeId, NodeRef, Selection};
pub use tendril::StrTendril;

/// Tags rendered as block-level boxes. `br` and `hr` are included: both
/// force a break in serialized output and therefore open their own
/// accumulator node. `td`/`th` are included so table cells accumulate
/// separately and can be tab-separated.
static BLOCK_ELEMENTS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "address", "article", "aside", "blockquote", "body", "br", "caption", "center",
        "dd", "details", "dialog", "div", "dl", "dt", "fieldset", "figcaption", "figure",
        "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hgroup", "hr",
        "html", "legend", "li", "main", "menu", "nav", "noscript", "ol", "p", "pre",
        "section", "summary", "table", "tbody", "td", "tfoot", "th", "thead", "tr", "ul",
    ]
    .into_iter()
    .collect()
});

/// Paragraph-like tags that introduce a blank line in formatted output.
static BIG_BLOCK_ELEMENTS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["p", "h1", "h2", "h3", "h4"].into_iter().collect());

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Whether `tag` names a block-level element.
#[inline]
#[must_use]
pub fn is_block_element(tag: &str) -> bool {
    BLOCK_ELEMENTS.contains(tag)
}

/// Whether `tag` names a paragraph-like block (blank-line margin).
#[inline]
#[must_use]
pub fn is_big_block(tag: &str) -> bool {
    BIG_BLOCK_ELEMENTS.contains(tag)
}

/// Lowercase tag name of an element node, empty string otherwise.
#[must_use]
pub fn tag_name(node: &NodeRef) -> String {
    node.node_name()
        .map(|t| t.to_lowercase())
        .unwrap_or_default()
}

/// Attribute value, or the empty string when absent.
#[inline]
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> String {
    node.attr(name).map(|v| v.to_string()).unwrap_or_default()
}

/// Whether the element carries the attribute at all (with any value).
#[inline]
#[must_use]
pub fn has_attr(node: &NodeRef, name: &str) -> bool {
    node.attr(name).is_some()
}

/// `class` and `id` attribute values joined with a space, for the
/// classifier patterns that test both at once.
#[must_use]
pub fn class_id(node: &NodeRef) -> String {
    let class = attr(node, "class");
    let id = attr(node, "id");
    if class.is_empty() {
        id
    } else if id.is_empty() {
        class
    } else {
        format!("{class} {id}")
    }
}

/// First child of `node` that is an element.
#[must_use]
pub fn first_element_child<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut child = node.first_child();
    while let Some(c) = child {
        if c.is_element() {
            return Some(c);
        }
        child = c.next_sibling();
    }
    None
}

/// Number of element hops from `node` up to (and excluding) `<body>`.
///
/// A direct child of `<body>` has length 1. When no `<body>` ancestor
/// exists the full chain length to the tree root is returned.
#[must_use]
pub fn length_to_body(node: &NodeRef) -> usize {
    let mut steps = 0usize;
    let mut current = node.parent();
    while let Some(parent) = current {
        steps += 1;
        if parent.is_element() && tag_name(&parent) == "body" {
            break;
        }
        current = parent.parent();
    }
    steps
}

/// Advance a depth-first traversal by one visit.
///
/// Every element and text node in the subtree under `root` is visited
/// exactly twice: once with `is_end_tag == false` (open) and once with
/// `is_end_tag == true` (close). `depth` tracks the DOM depth relative to
/// `root` and is updated in place. Returns `None` once the traversal has
/// produced the close visit of `root` itself.
pub fn next_node<'a>(
    root: &NodeRef<'a>,
    node: &NodeRef<'a>,
    depth: &mut usize,
    is_end_tag: &mut bool,
) -> Option<NodeRef<'a>> {
    if !*is_end_tag {
        if let Some(child) = node.first_child() {
            *depth += 1;
            return Some(child);
        }
        // Leaf: revisit the same node as its own close.
        *is_end_tag = true;
        return Some(node.clone());
    }
    if node.id == root.id {
        return None;
    }
    if let Some(sibling) = node.next_sibling() {
        *is_end_tag = false;
        return Some(sibling);
    }
    let parent = node.parent()?;
    *depth = depth.saturating_sub(1);
    Some(parent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_element_catalogue() {
        assert!(is_block_element("p"));
        assert!(is_block_element("br"));
        assert!(is_block_element("td"));
        assert!(!is_block_element("span"));
        assert!(!is_block_element("a"));
        assert!(!is_block_element("textarea"));
        assert!(is_big_block("h3"));
        assert!(!is_big_block("h5"));
        assert!(!is_big_block("div"));
    }

    #[test]
    fn walk_visits_every_node_twice() {
        let doc = parse("<div><p>a<b>b</b></p><span>c</span></div>");
        let sel = doc.select("div");
        let root = sel.nodes().first().expect("div").clone();

        let mut opens = 0usize;
        let mut closes = 0usize;
        let mut depth = 0usize;
        let mut is_end = false;
        let mut node = root.clone();
        loop {
            if is_end {
                closes += 1;
            } else {
                opens += 1;
            }
            match next_node(&root, &node, &mut depth, &mut is_end) {
                Some(n) => node = n,
                None => break,
            }
        }
        assert_eq!(opens, closes);
        // div, p, "a", b, "b", span, "c"
        assert_eq!(opens, 7);
        assert_eq!(depth, 0);
    }

    #[test]
    fn length_to_body_counts_element_hops() {
        let doc = parse("<html><body><div><section><p id=\"x\">t</p></section></div></body></html>");
        let sel = doc.select("#x");
        let p = sel.nodes().first().expect("p").clone();
        assert_eq!(length_to_body(&p), 3);

        let sel = doc.select("div");
        let div = sel.nodes().first().expect("div").clone();
        assert_eq!(length_to_body(&div), 1);
    }

    #[test]
    fn class_id_concatenation() {
        let doc = parse(r#"<div class="a b" id="c">x</div><p id="only">y</p>"#);
        let sel = doc.select("div");
        let div = sel.nodes().first().expect("div").clone();
        assert_eq!(class_id(&div), "a b c");
        let sel = doc.select("p");
        let p = sel.nodes().first().expect("p").clone();
        assert_eq!(class_id(&p), "only");
    }
}
