pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// True when the line opens with one to six `#` characters followed by a
    /// single space.
    pub fn matches(line: &str) -> bool {
        let level = line.chars().take_while(|&c| c == Self::MARKER).count();
        (1..=Self::MAX_LEVEL).contains(&level) && line[level..].starts_with(' ')
    }

    /// Strips the leading `#` run and surrounding whitespace, regardless of
    /// how many markers the line carried.
    pub fn strip(block: &str) -> &str {
        block.trim_start_matches(Self::MARKER).trim()
    }
}
