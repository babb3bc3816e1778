pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// True when the block both opens and closes with a backtick fence.
    pub fn matches(block: &str) -> bool {
        block.starts_with(Self::FENCE) && block.ends_with(Self::FENCE)
    }

    /// Strips the fences and the newlines that hug them, leaving the code
    /// body. A language tag on the opening fence stays in the body.
    pub fn strip(block: &str) -> &str {
        block.trim_matches(['`', '\n'])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_fenced_block() {
        assert!(CodeFence::matches("```\ncode\n```"));
    }

    #[test]
    fn matches_fence_with_language_tag() {
        assert!(CodeFence::matches("```rust\nfn main() {}\n```"));
    }

    #[test]
    fn rejects_missing_close_fence() {
        assert!(!CodeFence::matches("```\ncode"));
    }

    #[test]
    fn rejects_unfenced_text() {
        assert!(!CodeFence::matches("code"));
    }

    #[test]
    fn strip_removes_fences_and_hugging_newlines() {
        assert_eq!(CodeFence::strip("```\nlet x = 1;\n```"), "let x = 1;");
    }

    #[test]
    fn strip_keeps_language_tag_in_body() {
        assert_eq!(CodeFence::strip("```rust\ncode\n```"), "rust\ncode");
    }

    #[test]
    fn strip_keeps_interior_newlines() {
        assert_eq!(CodeFence::strip("```\na\n\nb\n```"), "a\n\nb");
    }
}
