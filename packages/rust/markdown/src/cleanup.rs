//! Cleanup passes for captured overview text.
//!
//! A bullet group comes out of the overview block as raw Markdown list lines.
//! [`format_bullets`] rewrites it into the `* item` form the table uses.

use std::borrow::Cow;

/// Characters stripped from both ends of a bullet line.
const BULLET_MARKER_CHARS: [char; 2] = ['-', ' '];

/// Line boundaries inside a bullet group: `\n`, `\r`, vertical tab, form
/// feed, the ASCII file/group/record separators, NEL and the Unicode line and
/// paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Rewrite a captured bullet group as `* `-prefixed lines joined by `\n`.
///
/// Blank lines are dropped. Each remaining line loses surrounding whitespace
/// and any `-`/space marker characters at either end.
pub fn format_bullets(group: &str) -> String {
    group
        .trim()
        .split(is_line_break)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("* {}", strip_marker(line)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip Markdown list markers (`- `) from a trimmed line.
fn strip_marker(line: &str) -> &str {
    line.trim_matches(&BULLET_MARKER_CHARS[..])
}

/// Convert CRLF and lone CR line endings to LF so the overview patterns see
/// `\n` only.
pub(crate) fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
