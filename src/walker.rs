//! DFS walk producing the ordered extract-node sequence.
//!
//! The walker visits every element and text node in the subtree twice
//! (open and close), accumulating text into a linear, append-only buffer
//! of [`ExtractNode`]s. The serializer then folds that buffer into the
//! final string; the two stages never share mutable state.

use std::collections::HashSet;

use dom_query::{NodeId, NodeRef};

use crate::classifier;
use crate::dom;
use crate::options::ExtractOpts;
use crate::text_ops;

/// Input types that never contribute visible text.
const NON_TEXT_INPUT_TYPES: &[&str] = &["checkbox", "color", "file", "hidden", "radio", "reset"];

/// One accumulator produced by the walk. A new node opens whenever a block
/// element is visited, the DOM depth drops below the previous node's depth,
/// or a `<textarea>` boundary is crossed; everything else appends to the
/// current top node.
#[derive(Debug, Clone)]
pub struct ExtractNode {
    /// Originating tag, `None` for nodes opened by a text visit.
    pub tag: Option<String>,
    /// DOM depth at which this node was opened.
    pub depth: usize,
    /// Reserved; currently unused in serialization.
    #[allow(dead_code)]
    pub space_after: bool,
    /// `false` forces an explicit line break (`<br>`/`<hr>`).
    pub collapse_margins: bool,
    /// Paragraph-like block: separated by a blank line instead of a
    /// single newline.
    pub big_block: bool,
    /// Inside `<pre>`/`<textarea>`: whitespace is kept verbatim.
    pub is_pre: bool,
    /// Whether this node was opened by the closing visit of its tag.
    pub is_end_tag: bool,
    /// Accumulated text for this node.
    pub text: Option<String>,
}

impl ExtractNode {
    fn new(tag: Option<String>, depth: usize, is_end_tag: bool) -> Self {
        let (big_block, is_pre) = match tag.as_deref() {
            Some(t) => (
                dom::is_big_block(t),
                !is_end_tag && matches!(t, "pre" | "textarea"),
            ),
            None => (false, false),
        };
        Self {
            tag,
            depth,
            space_after: false,
            collapse_margins: true,
            big_block,
            is_pre,
            is_end_tag,
            text: None,
        }
    }

    fn text_mut(&mut self) -> &mut String {
        self.text.get_or_insert_with(String::new)
    }

    fn append(&mut self, s: &str) {
        self.text_mut().push_str(s);
    }
}

/// Walk the subtree under `root` and return the extract-node sequence.
///
/// `skip` holds the ids of nodes pruned by the skip-selector query; their
/// subtrees are stepped over without emitting anything. With
/// `opts.main_content` the classifier is consulted for every element on
/// its open visit.
pub(crate) fn walk(root: &NodeRef, skip: &HashSet<NodeId>, opts: &ExtractOpts) -> Vec<ExtractNode> {
    let mut nodes: Vec<ExtractNode> = Vec::new();
    let mut node = root.clone();
    let mut depth = 0usize;
    let mut is_end_tag = false;

    loop {
        let mut skipped = false;
        if !is_end_tag && node.is_element() {
            let tag = dom::tag_name(&node);
            skipped = tag == "head"
                || skip.contains(&node.id)
                || (opts.main_content && !classifier::is_main_content(&node, opts.comments));
        }

        if skipped {
            // Step to the node's close without descending or emitting.
            is_end_tag = true;
        } else {
            extract_cb(&mut nodes, &node, depth, is_end_tag, opts);
        }

        match dom::next_node(root, &node, &mut depth, &mut is_end_tag) {
            Some(next) => node = next,
            None => break,
        }
    }

    nodes
}

/// Per-visit accumulation policy.
fn extract_cb(
    nodes: &mut Vec<ExtractNode>,
    node: &NodeRef,
    depth: usize,
    is_end_tag: bool,
    opts: &ExtractOpts,
) {
    let is_element = node.is_element();
    let tag = if is_element {
        Some(dom::tag_name(node))
    } else {
        None
    };
    let tag_str = tag.as_deref().unwrap_or("");
    let is_block = is_element && dom::is_block_element(tag_str);

    let push = match nodes.last() {
        None => true,
        Some(top) => is_block || depth < top.depth || tag_str == "textarea",
    };
    if push {
        nodes.push(ExtractNode::new(tag.clone(), depth, is_end_tag));
    }
    let top = nodes.last_mut().expect("at least one extract node");

    if node.is_text() {
        if is_end_tag {
            return;
        }
        let raw = node.text();
        if top.is_pre && opts.preserve_formatting {
            top.append(&raw);
        } else {
            let collapsed = text_ops::collapse_ws(&raw);
            let acc = top.text_mut();
            let at_boundary = acc
                .chars()
                .last()
                .map_or(true, |c| c.is_ascii_whitespace());
            let candidate = if at_boundary {
                collapsed.trim_start_matches(' ')
            } else {
                collapsed.as_str()
            };
            acc.push_str(candidate);
        }
        return;
    }

    match tag_str {
        "br" | "hr" if !is_end_tag => {
            top.text_mut();
            top.collapse_margins = false;
        }
        "a" if is_end_tag && opts.links => {
            let href = dom::attr(node, "href");
            if !href.is_empty() {
                top.append(&format!(" ({href})"));
            }
        }
        "img" | "area" if !is_end_tag && opts.alt_texts => {
            let alt = dom::attr(node, "alt");
            if !alt.is_empty() {
                top.append(&alt);
            }
        }
        "textarea" | "button" if opts.form_fields => {
            if is_end_tag {
                top.append(" ]");
            } else {
                top.append("[ ");
            }
        }
        "input" if !is_end_tag && opts.form_fields => {
            let input_type = dom::attr(node, "type").to_ascii_lowercase();
            if !NON_TEXT_INPUT_TYPES.contains(&input_type.as_str()) {
                let mut value = dom::attr(node, "value");
                if value.is_empty() {
                    value = dom::attr(node, "placeholder");
                }
                top.append(&format!("[ {value} ]"));
            }
        }
        _ => {}
    }
}
