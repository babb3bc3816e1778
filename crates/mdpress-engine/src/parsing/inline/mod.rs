mod brackets;
mod delimiter;
mod types;

pub use types::InlineSpan;

use delimiter::Delimiter;

/// Tokenizes a block's text into a flat sequence of [`InlineSpan`]s.
///
/// Passes run in a fixed precedence order (bold, italic, inline code,
/// images, links) and each pass rewrites only spans still typed `Plain`,
/// so the interior of a matched construct is never re-scanned. Nested
/// emphasis is therefore not supported: the first matching delimiter class
/// wins its captured span.
///
/// The empty string is the identity case and comes back as one empty
/// `Plain` span; whitespace-only fragments produced by splitting are
/// dropped. Malformed or unterminated markup stays plain, so tokenization
/// never fails.
pub fn tokenize(text: &str) -> Vec<InlineSpan> {
    let mut spans = vec![InlineSpan::Plain(text.to_string())];
    for delim in [Delimiter::Bold, Delimiter::Italic, Delimiter::Code] {
        spans = delimiter::split_delimited(spans, delim);
    }
    spans = brackets::split_images(spans);
    spans = brackets::split_links(spans);
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain(text: &str) -> InlineSpan {
        InlineSpan::Plain(text.to_string())
    }

    #[test]
    fn applies_passes_in_precedence_order() {
        let spans = tokenize("**bold** and _italic_ and `code`");
        assert_eq!(
            spans,
            vec![
                InlineSpan::Bold("bold".to_string()),
                plain(" and "),
                InlineSpan::Italic("italic".to_string()),
                plain(" and "),
                InlineSpan::Code("code".to_string()),
            ]
        );
    }

    #[test]
    fn image_is_never_misread_as_link() {
        let spans = tokenize("![alt](url)");
        assert_eq!(
            spans,
            vec![InlineSpan::Image {
                alt: "alt".to_string(),
                url: Some("url".to_string()),
            }]
        );
    }

    #[test]
    fn mixes_all_kinds_in_one_line() {
        let spans = tokenize(
            "This is **text** with an _italic_ word and a `code block` and an \
             ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)",
        );
        assert_eq!(
            spans,
            vec![
                plain("This is "),
                InlineSpan::Bold("text".to_string()),
                plain(" with an "),
                InlineSpan::Italic("italic".to_string()),
                plain(" word and a "),
                InlineSpan::Code("code block".to_string()),
                plain(" and an "),
                InlineSpan::Image {
                    alt: "obi wan image".to_string(),
                    url: Some("https://i.imgur.com/fJRm4Vk.jpeg".to_string()),
                },
                plain(" and a "),
                InlineSpan::Link {
                    text: "link".to_string(),
                    url: Some("https://boot.dev".to_string()),
                },
            ]
        );
    }

    #[test]
    fn interior_of_a_matched_span_is_not_rescanned() {
        let spans = tokenize("**bold with _underscores_**");
        assert_eq!(
            spans,
            vec![InlineSpan::Bold("bold with _underscores_".to_string())]
        );
    }

    #[test]
    fn empty_input_is_the_identity_case() {
        assert_eq!(tokenize(""), vec![plain("")]);
    }

    #[test]
    fn whitespace_only_input_yields_no_spans() {
        assert_eq!(tokenize("   "), Vec::<InlineSpan>::new());
    }

    #[test]
    fn plain_text_passes_through_whole() {
        assert_eq!(tokenize("nothing special here"), vec![plain("nothing special here")]);
    }
}
