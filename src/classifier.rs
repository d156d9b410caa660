//! Heuristic main-content classifier.
//!
//! A per-node predicate deciding whether an element belongs to the primary
//! article text or to page chrome (navigation, headers, footers, ads,
//! comments, modals). The rules run as a short-circuit cascade: intrinsic
//! element rules first, then generic class/id patterns, then block-only
//! patterns with an article-container whitelist.

use dom_query::NodeRef;

use crate::dom;
use crate::patterns;
use crate::text_ops;

const REJECTED_RELS: &[&str] = &["bookmark", "author", "icon", "search", "prev", "next"];
const REJECTED_ITEMPROPS: &[&str] = &["datePublished", "author", "url"];
const REJECTED_ROLES: &[&str] = &[
    "contentinfo", "img", "menu", "menubar", "navigation", "menuitem", "alert", "dialog",
    "checkbox", "radio", "complementary",
];

/// Decide whether `node` may contribute to extracted main content.
///
/// Non-element nodes and the document `<body>` are always included.
/// `allow_comments` keeps comment sections when set.
#[must_use]
pub fn is_main_content(node: &NodeRef, allow_comments: bool) -> bool {
    if !node.is_element() {
        return true;
    }
    let tag = dom::tag_name(node);
    if tag == "body" || tag == "html" {
        return true;
    }

    let block = dom::is_block_element(&tag);

    // --- Section A: intrinsic element rules ---

    if tag == "iframe" {
        return false;
    }
    if !block && is_icon_anchor(node) {
        return false;
    }
    if dom::has_attr(node, "hidden") {
        return false;
    }
    if attr_token_in(node, "rel", REJECTED_RELS) {
        return false;
    }
    if attr_token_in(node, "itemprop", REJECTED_ITEMPROPS) {
        return false;
    }
    if dom::attr(node, "aria-hidden") == "true" || dom::attr(node, "aria-expanded") == "false" {
        return false;
    }
    let role = dom::attr(node, "role");
    if REJECTED_ROLES.contains(&role.as_str()) {
        return false;
    }

    // Computed lazily: only needed for block rules and the depth-gated
    // generic rules.
    let mut length_to_body = usize::MAX;

    if block {
        length_to_body = dom::length_to_body(node);
        match tag.as_str() {
            "main" => return true,
            "footer" if length_to_body >= 3 && is_global_footer(node) => return false,
            "ul" | "nav" if length_to_body < 8 => return false,
            "aside" if length_to_body < 8 => return false,
            _ => {}
        }
    }

    // --- Section B: generic class/id rules ---

    let class = dom::attr(node, "class");
    let class_id = dom::class_id(node);

    if patterns::DISPLAY_CLASS.is_match(&class)
        || patterns::DISPLAY_CSS.is_match(&dom::attr(node, "style"))
    {
        return false;
    }
    if matches!(tag.as_str(), "a" | "div" | "li") && patterns::SKIP_LINK_CLASS.is_match(&class_id)
    {
        return false;
    }
    if length_to_body == usize::MAX {
        length_to_body = dom::length_to_body(node);
    }
    if length_to_body > 2
        && (patterns::SIGNIN_CLASS.is_match(&class_id)
            || patterns::POST_META_CLASS.is_match(&class_id)
            || patterns::SOCIAL_CLASS.is_match(&class_id))
    {
        return false;
    }
    if patterns::LOGO_CLASS.is_match(&class_id) {
        return false;
    }
    if patterns::ADS_CLASS.is_match(&class_id)
        || patterns::AD_ATTRIBUTES.iter().any(|a| dom::has_attr(node, a))
    {
        return false;
    }

    // --- Section C: block-only class/id rules ---

    if !block {
        return true;
    }
    if patterns::ARTICLE_CLASS.is_match(&class_id) {
        return true;
    }
    if patterns::HEADER_CLASS.is_match(&class_id)
        || patterns::FOOTER_CLASS.is_match(&class_id)
        || patterns::NAVIGATION_CLASS.is_match(&class_id)
        || patterns::RECOMMENDED_CLASS.is_match(&class_id)
    {
        return false;
    }
    if !allow_comments && patterns::COMMENTS_CLASS.is_match(&class_id) {
        return false;
    }
    if patterns::SEARCH_CLASS.is_match(&class_id)
        || patterns::SIDEBAR_CLASS.is_match(&class_id)
        || patterns::MODAL_CLASS.is_match(&class_id)
    {
        return false;
    }

    true
}

/// Inline element whose only child is a lone pilcrow or a single
/// Private Use Area code point (U+E000..=U+F8FF), i.e. an icon-font
/// glyph or a heading permalink anchor.
fn is_icon_anchor(node: &NodeRef) -> bool {
    let Some(child) = node.first_child() else {
        return false;
    };
    if !child.is_text() || child.next_sibling().is_some() {
        return false;
    }
    let text = child.text();
    let content = text_ops::strip(&text);
    let mut chars = content.chars();
    match (chars.next(), chars.next()) {
        (Some('\u{b6}'), None) => true,
        (Some(c), None) => ('\u{e000}'..='\u{f8ff}').contains(&c),
        _ => false,
    }
}

/// Whether any whitespace-separated token of the attribute is in `values`.
fn attr_token_in(node: &NodeRef, name: &str, values: &[&str]) -> bool {
    let value = dom::attr(node, name);
    value
        .split_ascii_whitespace()
        .any(|token| values.contains(&token))
}

/// A footer is "global" when its recursive last-element chain terminates
/// at a direct child of `<body>`: nothing but text nodes follows it at any
/// ancestor level before the body.
fn is_global_footer(node: &NodeRef) -> bool {
    let mut current = node.clone();
    loop {
        let mut sibling = current.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return false;
            }
            sibling = s.next_sibling();
        }
        match current.parent() {
            Some(parent) if parent.is_element() && dom::tag_name(&parent) == "body" => {
                return true;
            }
            Some(parent) => current = parent,
            None => return false,
        }
    }
}
