pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: &'static str = "> ";

    /// True when every line of the block carries the quote marker.
    pub fn matches(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips the quote marker from every line, rejoining with newlines.
    pub fn strip(block: &str) -> String {
        block
            .lines()
            .map(|line| line.strip_prefix(Self::PREFIX).unwrap_or(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
