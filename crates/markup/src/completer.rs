//! Tag-completion driver: appends synthetic closing tags to partial markup.
//!
//! One pass over the input with [`match_next_tag`], tracking open tags on a
//! stack. Everything the matcher recognizes or skips is copied through
//! verbatim; the only bytes ever added are `</name>` closes appended at the
//! end, innermost tag first. Total for every input; no error path.

use crate::matcher::{TagKind, match_next_tag};
use crate::stack::OpenTagStack;

/// Completes `markup` so every opened tag is closed.
///
/// The input is always a prefix of the output, and an already-balanced input
/// comes back unchanged.
pub fn complete(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    complete_into(markup, &mut out);
    out
}

/// As [`complete`], appending into a caller-owned buffer so streaming callers
/// can reuse the allocation between passes. `out` is not cleared first.
pub fn complete_into(markup: &str, out: &mut String) {
    let mut stack = OpenTagStack::default();
    let mut cursor = 0usize;

    while cursor < markup.len() {
        let rest = &markup[cursor..];
        let Some(tag) = match_next_tag(rest) else {
            // No further tag: the remainder is plain (or truncated) text.
            out.push_str(rest);
            break;
        };
        log::trace!(
            target: "markup.completer",
            "matched {:?} <{}> at {}..{}",
            tag.kind,
            tag.name,
            cursor + tag.start,
            cursor + tag.end
        );
        out.push_str(&rest[..tag.end]);
        match tag.kind {
            TagKind::Opening => stack.push(tag.name),
            TagKind::Closing => {
                // Pops are name-blind; a close with nothing open is dropped.
                if stack.pop().is_none() {
                    log::debug!(
                        target: "markup.completer",
                        "dropping stray close </{}> at byte {}",
                        tag.name,
                        cursor + tag.start
                    );
                }
            }
            TagKind::SelfClosing => {}
        }
        debug_assert!(tag.end > tag.start, "matcher must consume at least one byte");
        cursor += tag.end;
    }

    if !stack.is_empty() {
        log::debug!(
            target: "markup.completer",
            "appending {} synthetic closes (max depth {})",
            stack.len(),
            stack.max_depth()
        );
    }
    while let Some(name) = stack.pop() {
        out.push_str("</");
        out.push_str(&name);
        out.push('>');
    }
}

/// Returns true when `markup` is already tag-balanced, i.e. [`complete`]
/// would return it unchanged.
///
/// Balance follows the driver's lenient semantics: a stray close on an empty
/// stack does not unbalance the input, it is simply dropped.
pub fn is_balanced(markup: &str) -> bool {
    let mut depth = 0usize;
    let mut cursor = 0usize;
    while cursor < markup.len() {
        let Some(tag) = match_next_tag(&markup[cursor..]) else {
            break;
        };
        match tag.kind {
            TagKind::Opening => depth += 1,
            TagKind::Closing => depth = depth.saturating_sub(1),
            TagKind::SelfClosing => {}
        }
        cursor += tag.end;
    }
    depth == 0
}
