//! Extraction driver: composes the CSS pre-filter, the walker and the
//! serializer.

use std::collections::HashSet;

use dom_query::{Document, NodeId, NodeRef, Selection};

use crate::options::ExtractOpts;
use crate::patterns;
use crate::serializer;
use crate::walker;

/// Extract plain text from the subtree rooted at `node`.
///
/// Returns the empty string for an element-free subtree. Never fails:
/// the upstream parser is assumed to produce a well-formed DOM.
#[must_use]
pub fn extract_plain_text(node: &NodeRef, opts: &ExtractOpts) -> String {
    // A document node is not walkable itself; descend to its first
    // element child (usually <html>).
    let root = if node.is_element() || node.is_text() {
        node.clone()
    } else {
        match crate::dom::first_element_child(node) {
            Some(el) => el,
            None => return String::new(),
        }
    };

    let skip_selectors = build_skip_selectors(opts);

    // Main-content pre-selection: when exactly one node matches the
    // well-known article-container selectors, restrict the walk to it.
    let root = if opts.main_content {
        let matches = Selection::from(root.clone()).select(patterns::MAIN_CONTENT_SELECTOR);
        match matches.nodes() {
            [single] => single.clone(),
            _ => root,
        }
    } else {
        root
    };

    let joined = skip_selectors.join(", ");
    let skip_sel = Selection::from(root.clone()).select(&joined);
    let skip: HashSet<NodeId> = skip_sel.nodes().iter().map(|n| n.id).collect();

    let nodes = walker::walk(&root, &skip, opts);
    serializer::serialize(&nodes, opts)
}

/// Extract plain text from a whole parsed document.
#[must_use]
pub fn extract_document(doc: &Document, opts: &ExtractOpts) -> String {
    let html = doc.select("html");
    match html.nodes().first() {
        Some(root) => extract_plain_text(root, opts),
        None => String::new(),
    }
}

/// Selectors pruned before the walk. `script` and `style` always; media,
/// noscript and form controls join depending on the options; the caller's
/// own selectors are appended last.
fn build_skip_selectors(opts: &ExtractOpts) -> Vec<String> {
    let mut selectors: Vec<String> = vec!["script".into(), "style".into()];
    if !opts.alt_texts {
        for s in [
            "object", "video", "audio", "embed", "img", "area", "svg", "figcaption", "figure",
        ] {
            selectors.push(s.into());
        }
    }
    if !opts.noscript {
        selectors.push("noscript".into());
    }
    if !opts.form_fields {
        for s in ["textarea", "input", "button", "select", "option", "label"] {
            selectors.push(s.into());
        }
    }
    selectors.extend(opts.skip_elements.iter().cloned());
    selectors
}
