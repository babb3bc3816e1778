//! Composes the pipeline: split, classify, tokenize, and wrap each block in
//! the HTML shape its kind implies.

use crate::html::HtmlNode;
use crate::parsing::blocks::kinds::{BlockQuote, CodeFence, Heading, ListMarker};
use crate::parsing::blocks::{BlockKind, classify, split_blocks};
use crate::parsing::inline::{InlineSpan, tokenize};

/// Tag of the root container node.
const ROOT_TAG: &str = "div";
/// Attribute value standing in for a link or image whose source had no url.
const MISSING_URL: &str = "None";

/// Converts a Markdown document into a single root [`HtmlNode`].
///
/// The root is a `<div>` parent with one child per block, in document
/// order. Every parent in the returned tree has at least one child (a
/// block that yields nothing gets an empty raw-text leaf), so serializing
/// the result cannot fail on structure. Performs no I/O and holds no state
/// between calls.
pub fn markdown_to_html(markdown: &str) -> HtmlNode {
    let children = split_blocks(markdown)
        .iter()
        .map(|block| block_to_node(block))
        .collect();
    HtmlNode::parent(ROOT_TAG, or_placeholder(children))
}

fn block_to_node(block: &str) -> HtmlNode {
    match classify(block) {
        BlockKind::Paragraph => wrap("p", tokenize(block)),
        BlockKind::Heading => wrap("h1", tokenize(Heading::strip(block))),
        BlockKind::Code => {
            let body = InlineSpan::Code(CodeFence::strip(block).to_string());
            HtmlNode::parent("pre", vec![span_to_node(body)])
        }
        BlockKind::Quote => wrap("blockquote", tokenize(&BlockQuote::strip(block))),
        BlockKind::UnorderedList => {
            let items = block
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| wrap("li", tokenize(ListMarker::strip_unordered(line))))
                .collect();
            HtmlNode::parent("ul", or_placeholder(items))
        }
        BlockKind::OrderedList => {
            let items = block
                .lines()
                .filter(|line| !line.trim().is_empty())
                .enumerate()
                .map(|(i, line)| wrap("li", tokenize(ListMarker::strip_ordered(line, i + 1))))
                .collect();
            HtmlNode::parent("ol", or_placeholder(items))
        }
    }
}

/// Converts one [`InlineSpan`] to its leaf shape. This is the single
/// span-kind dispatch point; the match is exhaustive over the closed set.
pub fn span_to_node(span: InlineSpan) -> HtmlNode {
    match span {
        InlineSpan::Plain(text) => HtmlNode::text(text),
        InlineSpan::Bold(text) => HtmlNode::element("b", text),
        InlineSpan::Italic(text) => HtmlNode::element("i", text),
        InlineSpan::Code(text) => HtmlNode::element("code", text),
        InlineSpan::Link { text, url } => HtmlNode::Leaf {
            tag: Some("a".to_string()),
            value: Some(text),
            attrs: vec![(
                "href".to_string(),
                url.unwrap_or_else(|| MISSING_URL.to_string()),
            )],
        },
        InlineSpan::Image { alt, url } => HtmlNode::Leaf {
            tag: Some("img".to_string()),
            value: Some(String::new()),
            attrs: vec![
                ("alt".to_string(), alt),
                (
                    "src".to_string(),
                    url.unwrap_or_else(|| MISSING_URL.to_string()),
                ),
            ],
        },
    }
}

fn wrap(tag: &str, spans: Vec<InlineSpan>) -> HtmlNode {
    let children = spans.into_iter().map(span_to_node).collect();
    HtmlNode::parent(tag, or_placeholder(children))
}

/// Every parent must serialize; a node with nothing in it gets one empty
/// raw-text leaf.
fn or_placeholder(mut children: Vec<HtmlNode>) -> Vec<HtmlNode> {
    if children.is_empty() {
        children.push(HtmlNode::text(""));
    }
    children
}
