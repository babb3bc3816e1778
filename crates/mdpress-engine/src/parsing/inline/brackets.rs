use super::types::InlineSpan;

/// One `[text](url)` or `![alt](url)` occurrence located in a larger string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketMatch {
    /// Byte offset where the construct starts (the `!` for images).
    pub start: usize,
    /// Byte offset one past the closing `)`.
    pub end: usize,
    pub text: String,
    pub url: String,
}

/// Finds the next link-shaped construct at or after byte `from`.
///
/// `bang` selects image syntax (`![…](…)`). Bracket depth is counted while
/// scanning for the `]` that pairs with the opening `[`, so the text part
/// may itself contain balanced brackets. The url is the run up to the first
/// `)` and must be non-empty before trimming.
pub fn find_next(text: &str, from: usize, bang: bool) -> Option<BracketMatch> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        let opens_here = if bang {
            bytes[i] == b'!' && bytes.get(i + 1) == Some(&b'[')
        } else {
            bytes[i] == b'['
        };
        if !opens_here {
            i += 1;
            continue;
        }
        let open = if bang { i + 1 } else { i };
        if let Some(found) = match_at(text, i, open) {
            return Some(found);
        }
        i = open + 1;
    }
    None
}

/// Attempts a full match given the construct start and the `[` position.
fn match_at(text: &str, start: usize, open: usize) -> Option<BracketMatch> {
    let bytes = text.as_bytes();
    let mut depth = 1usize;
    let mut j = open + 1;
    while j < bytes.len() {
        match bytes[j] {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
        j += 1;
    }
    if depth != 0 {
        return None;
    }

    let close = j;
    if bytes.get(close + 1) != Some(&b'(') {
        return None;
    }
    let url_start = close + 2;
    let url_end = url_start + text.get(url_start..)?.find(')')?;
    if url_end == url_start {
        // `()`: an empty url is not a link.
        return None;
    }

    Some(BracketMatch {
        start,
        end: url_end + 1,
        text: text[open + 1..close].trim().to_string(),
        url: text[url_start..url_end].trim().to_string(),
    })
}

/// Rewrites every `Plain` span, splitting out `![alt](url)` images.
pub fn split_images(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_bracketed(spans, true)
}

/// Rewrites every `Plain` span, splitting out `[text](url)` links. Runs
/// after [`split_images`], so an image is never misread as a link.
pub fn split_links(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_bracketed(spans, false)
}

fn split_bracketed(spans: Vec<InlineSpan>, bang: bool) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        match span {
            InlineSpan::Plain(text) if text.is_empty() => out.push(InlineSpan::Plain(text)),
            InlineSpan::Plain(text) => {
                let mut cursor = 0;
                while let Some(found) = find_next(&text, cursor, bang) {
                    push_plain(&mut out, &text[cursor..found.start]);
                    out.push(if bang {
                        InlineSpan::Image {
                            alt: found.text,
                            url: Some(found.url),
                        }
                    } else {
                        InlineSpan::Link {
                            text: found.text,
                            url: Some(found.url),
                        }
                    });
                    cursor = found.end;
                }
                push_plain(&mut out, &text[cursor..]);
            }
            other => out.push(other),
        }
    }
    out
}

fn push_plain(out: &mut Vec<InlineSpan>, text: &str) {
    if !text.trim().is_empty() {
        out.push(InlineSpan::Plain(text.to_string()));
    }
}
