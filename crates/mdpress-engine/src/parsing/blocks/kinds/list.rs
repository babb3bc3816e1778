pub struct ListMarker;

impl ListMarker {
    pub const BULLET: &'static str = "- ";

    /// True when every line of the block carries the bullet marker.
    pub fn matches_unordered(block: &str) -> bool {
        block.lines().all(|line| line.starts_with(Self::BULLET))
    }

    /// Ordered lists must count 1, 2, 3, … from the first line; a skipped or
    /// restarted number disqualifies the whole block.
    pub fn matches_ordered(block: &str) -> bool {
        block
            .lines()
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::ordered_prefix(i + 1)))
    }

    /// The exact marker an ordered-list line at 1-based `index` must carry.
    pub fn ordered_prefix(index: usize) -> String {
        format!("{index}. ")
    }

    pub fn strip_unordered(line: &str) -> &str {
        line.strip_prefix(Self::BULLET).unwrap_or(line)
    }

    pub fn strip_ordered(line: &str, index: usize) -> &str {
        line.strip_prefix(&Self::ordered_prefix(index)).unwrap_or(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_bulleted_lines() {
        assert!(ListMarker::matches_unordered("- a\n- b"));
    }

    #[test]
    fn rejects_mixed_bullet_block() {
        assert!(!ListMarker::matches_unordered("- a\nb"));
    }

    #[test]
    fn matches_sequential_numbering() {
        assert!(ListMarker::matches_ordered("1. a\n2. b\n3. c"));
    }

    #[test]
    fn skipped_number_disqualifies() {
        assert!(!ListMarker::matches_ordered("1. a\n3. b"));
    }

    #[test]
    fn restarted_number_disqualifies() {
        assert!(!ListMarker::matches_ordered("1. a\n1. b"));
    }

    #[test]
    fn numbering_must_start_at_one() {
        assert!(!ListMarker::matches_ordered("2. a\n3. b"));
    }

    #[test]
    fn double_digit_numbering_matches() {
        let block = (1..=12)
            .map(|i| format!("{i}. item"))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(ListMarker::matches_ordered(&block));
    }

    #[test]
    fn strips_markers() {
        assert_eq!(ListMarker::strip_unordered("- item"), "item");
        assert_eq!(ListMarker::strip_ordered("10. item", 10), "item");
    }
}
