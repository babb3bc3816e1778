use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker};

/// The closed set of top-level block shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Assigns a block string exactly one [`BlockKind`].
///
/// Each rule is a per-line prefix test applied in a fixed order; the first
/// match wins and anything unrecognized falls back to
/// [`BlockKind::Paragraph`]. Total over all inputs: an empty or
/// whitespace-only block is a paragraph, never an error.
pub fn classify(block: &str) -> BlockKind {
    if block.trim().is_empty() {
        return BlockKind::Paragraph;
    }

    let first_line = block.lines().next().unwrap_or_default();
    if Heading::matches(first_line) {
        return BlockKind::Heading;
    }
    if CodeFence::matches(block) {
        return BlockKind::Code;
    }
    if BlockQuote::matches(block) {
        return BlockKind::Quote;
    }
    if ListMarker::matches_unordered(block) {
        return BlockKind::UnorderedList;
    }
    if ListMarker::matches_ordered(block) {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}
