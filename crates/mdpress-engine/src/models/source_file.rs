use relative_path::{RelativePath, RelativePathBuf};

/// A discovered content file, addressed relative to the content root.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    relative_path: RelativePathBuf,
    output_path: RelativePathBuf,
    display_name: String,
}

impl SourceFile {
    /// Create a new SourceFile from a content-relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let output_path = {
            let path_str = relative_path.as_str();
            let stem = path_str.strip_suffix(".md").unwrap_or(path_str);
            RelativePathBuf::from(format!("{stem}.html"))
        };
        let display_name = Self::extract_display_name(&relative_path);

        Self {
            relative_path,
            output_path,
            display_name,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// The content-relative path of the markdown source
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Where the rendered page lands, mirroring the content tree
    pub fn output_path(&self) -> &RelativePath {
        &self.output_path
    }

    /// Get the display name (file name without .md extension)
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    fn extract_display_name(path: &RelativePath) -> String {
        path.file_name()
            .map(|name| name.strip_suffix(".md").unwrap_or(name))
            .unwrap_or("Untitled")
            .to_string()
    }
}

impl From<RelativePathBuf> for SourceFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for SourceFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
