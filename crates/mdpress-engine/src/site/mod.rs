//! Page generation: template substitution and batch builds around the
//! conversion core.

use crate::convert::markdown_to_html;
use crate::html::StructureError;
use crate::io::{self, IoError};
use crate::models::SourceFile;
use crate::title::{TitleError, extract_title};
use relative_path::RelativePathBuf;
use std::path::Path;

/// Template placeholder replaced by the extracted document title.
const TITLE_SLOT: &str = "{{ Title }}";
/// Template placeholder replaced by the serialized document body.
const CONTENT_SLOT: &str = "{{ Content }}";

/// Anything that can go wrong rendering a single document. Fatal for that
/// document only; a batch build records it and moves on.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Title(#[from] TitleError),
    #[error(transparent)]
    Structure(#[from] StructureError),
}

/// Renders one document into a full page string. Pure: no filesystem
/// access.
///
/// Fills the title and content slots of the template, then rebases
/// root-relative `href`/`src` attributes onto `base_path` so a site can be
/// served from a subdirectory.
pub fn render_page(
    markdown: &str,
    template: &str,
    base_path: &str,
) -> Result<String, PageError> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown).to_html()?;

    let page = template
        .replace(TITLE_SLOT, &title)
        .replace(CONTENT_SLOT, &content)
        .replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"));

    Ok(page)
}

/// Generates one page: read the source, render it, write the output file.
pub fn generate_page(
    source: &SourceFile,
    content_root: &Path,
    template: &str,
    out_root: &Path,
    base_path: &str,
) -> Result<(), PageError> {
    let markdown = io::read_file(source.relative_path(), content_root)?;
    let page = render_page(&markdown, template, base_path)?;
    io::write_file(source.output_path(), out_root, &page)?;
    Ok(())
}

/// Outcome of a batch build: pages written and per-document failures.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub written: Vec<RelativePathBuf>,
    pub failed: Vec<(RelativePathBuf, PageError)>,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Walks the content tree and renders every markdown file found, mirroring
/// the directory structure into `out_root`.
///
/// A document that fails aborts that document only: the failure lands in
/// the report and the batch keeps going.
pub fn generate_pages_recursive(
    content_root: &Path,
    template: &str,
    out_root: &Path,
    base_path: &str,
) -> Result<BuildReport, IoError> {
    let files = io::scan_markdown_files(content_root)?;
    let mut report = BuildReport::default();

    for path in files {
        let Ok(relative) = path.strip_prefix(content_root) else {
            continue;
        };
        let Ok(relative) = RelativePathBuf::from_path(relative) else {
            continue;
        };
        let source = SourceFile::new(relative);

        match generate_page(&source, content_root, template, out_root, base_path) {
            Ok(()) => report.written.push(source.output_path().to_owned()),
            Err(e) => report.failed.push((source.relative_path().to_owned(), e)),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_file, create_temp_dir};
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str =
        "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";

    #[test]
    fn render_page_fills_both_slots() {
        let page = render_page("# Welcome\n\nHello **there**", TEMPLATE, "/").unwrap();
        assert_eq!(
            page,
            "<html><head><title>Welcome</title></head><body><div><h1>Welcome</h1><p>Hello <b>there</b></p></div></body></html>"
        );
    }

    #[test]
    fn render_page_rebases_root_relative_urls() {
        let template = "<head><link href=\"/css/site.css\"><script src=\"/js/app.js\"></script></head><body>{{ Content }}</body>";
        let page = render_page("# T\n\n[home](/index.html)", template, "/repo/").unwrap();
        assert!(page.contains("href=\"/repo/css/site.css\""));
        assert!(page.contains("src=\"/repo/js/app.js\""));
        assert!(page.contains("href=\"/repo/index.html\""));
    }

    #[test]
    fn render_page_without_title_fails() {
        let result = render_page("no heading at all", TEMPLATE, "/");
        assert!(matches!(result, Err(PageError::Title(TitleError::NotFound))));
    }

    #[test]
    fn generate_page_writes_to_the_mirrored_path() {
        let content = create_temp_dir();
        let out = create_temp_dir();
        create_file(&content, "blog/post.md", "# A Post\n\nbody");

        let source = SourceFile::from_relative_str("blog/post.md");
        generate_page(&source, content.path(), TEMPLATE, out.path(), "/").unwrap();

        let written = std::fs::read_to_string(out.path().join("blog/post.html")).unwrap();
        assert!(written.contains("<title>A Post</title>"));
        assert!(written.contains("<p>body</p>"));
    }

    #[test]
    fn batch_build_mirrors_the_content_tree() {
        let content = create_temp_dir();
        let out = create_temp_dir();
        create_file(&content, "index.md", "# Home");
        create_file(&content, "blog/one.md", "# One");
        create_file(&content, "blog/deep/two.md", "# Two");

        let report =
            generate_pages_recursive(content.path(), TEMPLATE, out.path(), "/").unwrap();

        assert!(report.is_clean());
        assert_eq!(report.written.len(), 3);
        assert!(out.path().join("index.html").exists());
        assert!(out.path().join("blog/one.html").exists());
        assert!(out.path().join("blog/deep/two.html").exists());
    }

    #[test]
    fn failing_document_does_not_abort_the_batch() {
        let content = create_temp_dir();
        let out = create_temp_dir();
        create_file(&content, "good.md", "# Good");
        create_file(&content, "bad.md", "no title here");

        let report =
            generate_pages_recursive(content.path(), TEMPLATE, out.path(), "/").unwrap();

        assert_eq!(report.written.len(), 1);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0.as_str(), "bad.md");
        assert!(out.path().join("good.html").exists());
        assert!(!out.path().join("bad.html").exists());
    }
}
