//! HTML to plain-text conversion.

use std::sync::LazyLock;

use regex::Regex;
use ego_tree::NodeRef;
use scraper::{Html, Node};

static HORIZONTAL_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t\r\f]+").unwrap());
static NEWLINE_PADDING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" *\n *").unwrap());
static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Tags whose content never contributes to the extracted text.
const SKIPPED_TAGS: &[&str] = &["head", "script", "style", "noscript", "template"];

/// Tags that terminate a line of text on both sides.
const BLOCK_TAGS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "br",
    "div",
    "dd",
    "dl",
    "dt",
    "figcaption",
    "figure",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "td",
    "th",
    "tr",
    "ul",
];

/// Converts raw HTML into order-preserving plain text.
///
/// Pure transformation: no I/O, and malformed markup is handled best-effort
/// by the underlying parser rather than failing. Script, style, and head
/// content is dropped; block-level boundaries become newlines; horizontal
/// whitespace and blank-line runs collapse so the chunker sees compact,
/// newline-separated text.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut raw = String::new();
    collect_text(document.tree.root(), &mut raw);

    let collapsed = HORIZONTAL_WS.replace_all(&raw, " ");
    let collapsed = NEWLINE_PADDING.replace_all(&collapsed, "\n");
    let collapsed = BLANK_RUNS.replace_all(&collapsed, "\n\n");
    collapsed.trim().to_string()
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(&text),
        Node::Element(element) => {
            let name = element.name();
            if SKIPPED_TAGS.contains(&name) {
                return;
            }
            let block = BLOCK_TAGS.contains(&name);
            if block {
                out.push('\n');
            }
            for child in node.children() {
                collect_text(child, out);
            }
            if block {
                out.push('\n');
            }
        }
        _ => {
            for child in node.children() {
                collect_text(child, out);
            }
        }
    }
}
