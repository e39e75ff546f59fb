//! Message text → render segments.
//!
//! Assistant answers come from a remote service and are never interpreted
//! as HTML. The only structure recognised is the single-level link syntax
//! `[text](url)`; everything else stays plain text and is inserted as text
//! nodes, so markup in an answer shows up literally.
//!
//! Matching mirrors the pattern `\[([^\]]+)\]\(([^)]+)\)`: leftmost first,
//! non-overlapping, link text up to the first `]`, URL up to the first `)`.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

/// A piece of a rendered message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// Hyperlink opened in a new browsing context.
    Link { text: String, href: String },
}

/// Split `text` into plain-text and link segments.
pub fn segments(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find('[') {
        let open = cursor + offset;
        match match_link(text, open) {
            Some((label, href, end)) => {
                if let Some(href) = safe_href(href) {
                    push_text(&mut out, &text[plain_start..open]);
                    out.push(Segment::Link { text: label.to_owned(), href });
                    plain_start = end;
                }
                // Unsafe links stay in the pending text run as literals.
                cursor = end;
            }
            None => cursor = open + 1,
        }
    }

    push_text(&mut out, &text[plain_start..]);
    out
}

/// Try to match `[label](href)` starting at the `[` at byte `open`.
/// Returns the label, the href, and the byte index just past the `)`.
fn match_link(text: &str, open: usize) -> Option<(&str, &str, usize)> {
    let label_start = open + 1;
    let label_len = text[label_start..].find(']')?;
    if label_len == 0 {
        return None;
    }
    let close = label_start + label_len;

    let rest = &text[close + 1..];
    if !rest.starts_with('(') {
        return None;
    }
    let href_start = close + 2;
    let href_len = text[href_start..].find(')')?;
    if href_len == 0 {
        return None;
    }
    let href_end = href_start + href_len;

    Some((&text[label_start..close], &text[href_start..href_end], href_end + 1))
}

/// Normalise `href` the way a browser's URL parser does and return it when
/// it is a web, mail or relative link.
///
/// Tab, LF and CR are removed everywhere and leading/trailing C0 controls
/// and spaces are stripped, so `java\tscript:` cannot hide its scheme. Any
/// control character left after that rejects the link outright.
pub fn safe_href(href: &str) -> Option<String> {
    let cleaned: String = href.chars().filter(|c| !matches!(c, '\t' | '\n' | '\r')).collect();
    let cleaned = cleaned.trim_matches(|c: char| c <= ' ');
    if cleaned.is_empty() || cleaned.chars().any(char::is_control) {
        return None;
    }
    let allowed = match scheme_of(cleaned) {
        Some(scheme) => matches!(scheme.to_ascii_lowercase().as_str(), "http" | "https" | "mailto"),
        None => true,
    };
    allowed.then(|| cleaned.to_owned())
}

/// URL scheme, if `href` has one (`scheme:` before any `/`, `?` or `#`).
fn scheme_of(href: &str) -> Option<&str> {
    let colon = href.find(':')?;
    let candidate = &href[..colon];
    let mut chars = candidate.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')).then_some(candidate)
}

fn push_text(out: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Segment::Text(prev)) = out.last_mut() {
        prev.push_str(text);
    } else {
        out.push(Segment::Text(text.to_owned()));
    }
}
