//! Tag matcher: extracts the first complete tag from a text fragment.
//!
//! A tag is `<`, an optional `/`, an ASCII letter followed by ASCII
//! alphanumerics, attribute text running to the first `>`, and an optional
//! `/` directly before that `>`. This is a best-effort lexical match over
//! untrusted streamed text, not a tokenizer.
//!
//! Known limitations (intentional):
//! - A `>` inside a quoted attribute value terminates the tag early.
//! - A `<` inside attribute text is absorbed into the tag (`<a < b>` is one
//!   tag named `a`).
//! - Tag names are ASCII `[A-Za-z][A-Za-z0-9]*`; no `-`, `_` or `:`.

use memchr::memchr;

/// How a matched tag participates in nesting.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TagKind {
    Opening,
    Closing,
    SelfClosing,
}

/// One matched tag within a scanned fragment.
///
/// `start`/`end` are byte offsets **within the scanned fragment**, start
/// inclusive, end one past the matched `>`. Callers scanning a suffix of a
/// larger document must translate them. Both offsets land on ASCII bytes,
/// so slicing the fragment at them is always valid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TagMatch<'a> {
    /// Tag name without the leading `/`.
    pub name: &'a str,
    /// Attribute text between name and `>`, trimmed; for a self-closing tag
    /// the trailing `/` is not part of it.
    pub attributes: &'a str,
    pub kind: TagKind,
    pub start: usize,
    pub end: usize,
}

enum ScanStep<'a> {
    Match(TagMatch<'a>),
    /// `<` did not start a well-shaped tag; resume at the next `<`.
    Retry,
    /// No `>` remains in the fragment, so nothing later can match either.
    Exhausted,
}

/// Returns the first tag in `fragment`, or `None` when the fragment is empty
/// or contains no complete tag.
pub fn match_next_tag(fragment: &str) -> Option<TagMatch<'_>> {
    let bytes = fragment.as_bytes();
    let mut at = 0usize;
    while at < bytes.len() {
        let start = at + memchr(b'<', &bytes[at..])?;
        match match_tag_at(fragment, start) {
            ScanStep::Match(tag) => return Some(tag),
            ScanStep::Retry => at = start + 1,
            ScanStep::Exhausted => return None,
        }
    }
    None
}

fn match_tag_at(fragment: &str, start: usize) -> ScanStep<'_> {
    let bytes = fragment.as_bytes();
    debug_assert_eq!(bytes[start], b'<');

    let mut i = start + 1;
    let mut leading_slash = false;
    if i < bytes.len() && bytes[i] == b'/' {
        leading_slash = true;
        i += 1;
    }
    if i >= bytes.len() || !bytes[i].is_ascii_alphabetic() {
        return ScanStep::Retry;
    }
    let name_start = i;
    i += 1;
    while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
        i += 1;
    }
    let name_end = i;

    let Some(rel) = memchr(b'>', &bytes[name_end..]) else {
        return ScanStep::Exhausted;
    };
    let gt = name_end + rel;
    let end = gt + 1;

    // `/>` classification wins over `</`, so `</x/>` counts as self-closing.
    let self_closing = gt > name_end && bytes[gt - 1] == b'/';
    let attr_end = if self_closing { gt - 1 } else { gt };

    let kind = if self_closing {
        TagKind::SelfClosing
    } else if leading_slash {
        TagKind::Closing
    } else {
        TagKind::Opening
    };

    debug_assert!(fragment.is_char_boundary(name_start));
    debug_assert!(fragment.is_char_boundary(attr_end));
    ScanStep::Match(TagMatch {
        name: &fragment[name_start..name_end],
        attributes: fragment[name_end..attr_end].trim(),
        kind,
        start,
        end,
    })
}
