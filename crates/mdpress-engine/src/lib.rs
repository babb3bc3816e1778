pub mod convert;
pub mod html;
pub mod io;
pub mod models;
pub mod parsing;
pub mod site;
pub mod title;


// Re-export key types for easier usage
pub use convert::{markdown_to_html, span_to_node};
pub use html::{HtmlNode, StructureError};
pub use models::SourceFile;
pub use parsing::blocks::{BlockKind, classify, split_blocks};
pub use parsing::inline::{InlineSpan, tokenize};
pub use site::{BuildReport, PageError, generate_page, generate_pages_recursive, render_page};
pub use title::{TitleError, extract_title};
