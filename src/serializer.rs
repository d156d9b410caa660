//! Folds the extract-node sequence into the final string.
//!
//! Carries the list state (depth, numbering, deferred bullets) and the
//! margin logic. The node buffer is consumed read-only; all mutation is
//! local to the output string and the list stacks.

use crate::options::ExtractOpts;
use crate::text_ops;
use crate::walker::ExtractNode;

/// Numbering stack entry: `None` for `<ul>`, 1-based counter for `<ol>`.
type ListCounter = Option<u64>;

pub(crate) fn serialize(nodes: &[ExtractNode], opts: &ExtractOpts) -> String {
    let mut output = String::new();
    let mut list_numbering: Vec<ListCounter> = Vec::new();
    let mut bullet_deferred = false;

    for node in nodes {
        let tag = node.tag.as_deref().unwrap_or("");

        if opts.preserve_formatting {
            match tag {
                "ul" | "ol" => {
                    if node.is_end_tag {
                        list_numbering.pop();
                        if list_numbering.is_empty() {
                            // an empty trailing <li> must not defer past its list
                            bullet_deferred = false;
                        }
                    } else {
                        list_numbering.push(if tag == "ol" { Some(0) } else { None });
                    }
                }
                "li" if !node.is_end_tag => {
                    if list_numbering.is_empty() {
                        // stray list item outside any list
                        list_numbering.push(None);
                    }
                    bullet_deferred = true;
                }
                _ => {}
            }
        }

        // Cells separate with tabs inside the row; rows and other blocks
        // get the regular margin treatment.
        if !matches!(tag, "textarea" | "td" | "th") {
            make_margin(&mut output, node, bullet_deferred, opts);
        }

        let Some(text) = node.text.as_deref() else {
            continue;
        };
        let keep_raw = node.is_pre && !node.is_end_tag;
        let text = if keep_raw {
            text
        } else {
            text.trim_end_matches(|c: char| c.is_ascii_whitespace())
        };
        if text.is_empty() {
            continue;
        }

        let list_depth = list_numbering.len();
        let mut text = text.to_string();
        if list_depth > 0 {
            if node.is_pre && opts.preserve_formatting {
                let extra = usize::from(opts.list_bullets);
                text = text_ops::indent_newlines(&text, list_depth + extra);
            }
            let indent_width =
                2 * list_depth + 2 * usize::from(opts.list_bullets && !bullet_deferred);
            let mut prefix = " ".repeat(indent_width);
            if bullet_deferred {
                if opts.list_bullets {
                    match list_numbering.last_mut().expect("non-empty list stack") {
                        Some(counter) => {
                            *counter += 1;
                            prefix.push_str(&format!("{counter}. "));
                        }
                        None => prefix.push_str("\u{2022} "),
                    }
                }
                bullet_deferred = false;
            }
            text.insert_str(0, &prefix);
        }

        if opts.preserve_formatting
            && matches!(tag, "td" | "th")
            && !output.is_empty()
            && !output.ends_with('\n')
        {
            output.push_str("\t\t");
        }

        output.push_str(&text);
    }

    let trimmed_len = output.trim_end_matches(|c: char| c.is_ascii_whitespace()).len();
    output.truncate(trimmed_len);
    output
}

/// Ensure the separation the node demands: newlines (one, or a blank line
/// for paragraph-like blocks) with formatting on, a single space otherwise.
/// No margin is emitted while the output is still empty.
fn make_margin(output: &mut String, node: &ExtractNode, bullet_deferred: bool, opts: &ExtractOpts) {
    if output.is_empty() {
        return;
    }
    if opts.preserve_formatting {
        if !node.collapse_margins || !output.ends_with('\n') {
            output.push('\n');
        }
        if node.big_block && !bullet_deferred {
            let bytes = output.as_bytes();
            if bytes.len() < 2 || bytes[bytes.len() - 2] != b'\n' {
                output.push('\n');
            }
        }
    } else if !output.ends_with(|c: char| c.is_ascii_whitespace()) {
        output.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::walker;
    use std::collections::HashSet;

    fn render(html: &str, opts: &ExtractOpts) -> String {
        let doc = dom::parse(html);
        let sel = doc.select("body");
        let root = sel.nodes().first().expect("body").clone();
        let nodes = walker::walk(&root, &HashSet::new(), opts);
        serialize(&nodes, opts)
    }

    #[test]
    fn paragraphs_separated_by_blank_lines() {
        let out = render("<body><p>one</p><p>two</p></body>", &ExtractOpts::default());
        assert_eq!(out, "one\n\ntwo");
    }

    #[test]
    fn unordered_list_bullets_and_indent() {
        let out = render(
            "<body><ul><li>a</li><li>b</li></ul></body>",
            &ExtractOpts::default(),
        );
        assert_eq!(out, "  \u{2022} a\n  \u{2022} b");
    }

    #[test]
    fn ordered_list_numbering_contiguous() {
        let out = render(
            "<body><ol><li>a</li><li>b</li><li>c</li></ol></body>",
            &ExtractOpts::default(),
        );
        assert_eq!(out, "  1. a\n  2. b\n  3. c");
    }

    #[test]
    fn nested_ordered_list_restarts_numbering() {
        let out = render(
            "<body><ol><li>a<ol><li>x</li><li>y</li></ol></li><li>b</li></ol></body>",
            &ExtractOpts::default(),
        );
        assert!(out.contains("1. a"));
        assert!(out.contains("1. x"));
        assert!(out.contains("2. y"));
        assert!(out.contains("2. b"));
    }

    #[test]
    fn list_without_bullets_still_indents() {
        let opts = ExtractOpts {
            list_bullets: false,
            ..ExtractOpts::default()
        };
        let out = render("<body><ul><li>a</li></ul></body>", &opts);
        assert_eq!(out, "  a");
    }

    #[test]
    fn br_forces_single_newline() {
        let out = render("<body><p>x<br>y</p></body>", &ExtractOpts::default());
        assert_eq!(out, "x\ny");
    }

    #[test]
    fn no_newlines_without_preserve_formatting() {
        let opts = ExtractOpts {
            preserve_formatting: false,
            ..ExtractOpts::default()
        };
        let out = render(
            "<body><p>one</p><ul><li>a</li><li>b</li></ul><p>two</p></body>",
            &opts,
        );
        assert!(!out.contains('\n'));
        assert!(!out.contains("  "));
        assert_eq!(out, "one a b two");
    }

    #[test]
    fn never_three_consecutive_newlines() {
        let out = render(
            "<body><div><p>a</p></div><div></div><h1>t</h1><p>b</p><div><div><p>c</p></div></div></body>",
            &ExtractOpts::default(),
        );
        assert!(!out.contains("\n\n\n"));
    }

    #[test]
    fn table_cells_tab_separated_rows_on_lines() {
        let out = render(
            "<body><table><tr><td>a</td><td>b</td></tr><tr><td>c</td><td>d</td></tr></table></body>",
            &ExtractOpts::default(),
        );
        assert_eq!(out, "a\t\tb\nc\t\td");
    }

    #[test]
    fn pre_round_trips_whitespace_in_list() {
        let out = render(
            "<body><ul><li><pre>x\ny</pre></li></ul></body>",
            &ExtractOpts::default(),
        );
        // indent_newlines with depth 2 (list depth 1 + bullet column)
        assert!(out.contains("\u{2022} x\n    y"));
    }

    #[test]
    fn output_has_no_trailing_whitespace() {
        let out = render("<body><p>x</p><ul><li>y</li></ul></body>", &ExtractOpts::default());
        assert!(!out.ends_with(|c: char| c.is_ascii_whitespace()));
    }

    #[test]
    fn headings_get_blank_line_margins() {
        let out = render("<body><h1>Title</h1><p>Body</p></body>", &ExtractOpts::default());
        assert_eq!(out, "Title\n\nBody");
    }
}
