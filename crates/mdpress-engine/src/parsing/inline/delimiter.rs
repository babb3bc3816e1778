use super::types::InlineSpan;

/// A paired inline delimiter and the span kind its interior takes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    pub fn marker(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "_",
            Delimiter::Code => "`",
        }
    }

    fn wrap(self, text: &str) -> InlineSpan {
        match self {
            Delimiter::Bold => InlineSpan::Bold(text.to_string()),
            Delimiter::Italic => InlineSpan::Italic(text.to_string()),
            Delimiter::Code => InlineSpan::Code(text.to_string()),
        }
    }
}

/// Rewrites every `Plain` span, splitting out runs wrapped in `delim`.
///
/// Already-typed spans pass through untouched, as does an empty `Plain`
/// span (the empty-input identity). An opening marker with no closing
/// partner leaves the remainder in place as plain text.
pub fn split_delimited(spans: Vec<InlineSpan>, delim: Delimiter) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        match span {
            InlineSpan::Plain(text) if text.is_empty() => out.push(InlineSpan::Plain(text)),
            InlineSpan::Plain(text) => split_text(&text, delim, &mut out),
            other => out.push(other),
        }
    }
    out
}

fn split_text(text: &str, delim: Delimiter, out: &mut Vec<InlineSpan>) {
    let marker = delim.marker();
    let mut rest = text;
    loop {
        let Some(open) = rest.find(marker) else {
            push_plain(out, rest);
            return;
        };
        let after = &rest[open + marker.len()..];
        let Some(close) = after.find(marker) else {
            // Unterminated marker: the whole remainder stays plain.
            push_plain(out, rest);
            return;
        };
        push_plain(out, &rest[..open]);
        push_typed(out, delim, &after[..close]);
        rest = &after[close + marker.len()..];
    }
}

fn push_plain(out: &mut Vec<InlineSpan>, text: &str) {
    if !text.trim().is_empty() {
        out.push(InlineSpan::Plain(text.to_string()));
    }
}

fn push_typed(out: &mut Vec<InlineSpan>, delim: Delimiter, text: &str) {
    if !text.trim().is_empty() {
        out.push(delim.wrap(text));
    }
}
