//! First-heading title extraction. Operates on raw document text,
//! independent of the tree-building pipeline.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleError {
    #[error("no top-level heading found")]
    NotFound,
}

/// Returns the trimmed content of the first top-level heading line.
///
/// Lines are trimmed before testing, so an indented `# ` heading still
/// counts. Deeper headings (`##` and below) never do.
pub fn extract_title(markdown: &str) -> Result<String, TitleError> {
    markdown
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(TitleError::NotFound)
}
