//! Lessons-section parser for index documents.
//!
//! The section looks like this in the index document:
//!
//! ```text
//! Lessons
//! -------
//!
//! intro
//! basics
//!
//! ```
//!
//! - A line exactly equal to the label opens the section.
//! - The first blank line after it starts the list.
//! - The list runs until the next blank line, which must exist.

use lessontable_shared::{LessonTableError, Result};

/// Split text into lines, dropping a trailing `\r` from each.
///
/// Unlike [`str::lines`], a trailing newline yields a final empty line, so a
/// list that ends at end-of-file is still terminated by a blank line.
fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

fn is_blank(line: &&str) -> bool {
    line.trim().is_empty()
}

/// Extract the lesson identifiers listed under `label`, in document order.
///
/// Each identifier is trimmed of surrounding whitespace. Fails if the label,
/// either blank-line delimiter, or the list itself is missing.
pub fn extract_lesson_ids(text: &str, label: &str) -> Result<Vec<String>> {
    let lines = split_lines(text);

    let label_idx = lines
        .iter()
        .position(|line| *line == label)
        .ok_or_else(|| LessonTableError::manifest(format!("section label \"{label}\" not found")))?;

    let list_offset = lines[label_idx..].iter().position(is_blank).ok_or_else(|| {
        LessonTableError::manifest(format!("no blank line after section label \"{label}\""))
    })?;

    let list = &lines[label_idx + list_offset + 1..];

    let end = list.iter().position(is_blank).ok_or_else(|| {
        LessonTableError::manifest(format!(
            "lessons list under \"{label}\" is not terminated by a blank line"
        ))
    })?;

    let ids: Vec<String> = list[..end]
        .iter()
        .map(|line| line.trim().to_string())
        .collect();

    if ids.is_empty() {
        return Err(LessonTableError::manifest(format!(
            "section \"{label}\" lists no lessons"
        )));
    }

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_ids_in_order() {
        let text = "Day 1\n=====\n\nLessons\n\nintro\nbasics\n  advanced  \n\nMore text\n";
        let ids = extract_lesson_ids(text, "Lessons").unwrap();
        assert_eq!(ids, vec!["intro", "basics", "advanced"]);
    }

    #[test]
    fn skips_underline_before_blank_line() {
        let text = "Lessons\n-------\n\nintro\n\n";
        let ids = extract_lesson_ids(text, "Lessons").unwrap();
        assert_eq!(ids, vec!["intro"]);
    }

    #[test]
    fn trailing_newline_terminates_list() {
        let text = "Lessons\n\nintro\nbasics\n";
        let ids = extract_lesson_ids(text, "Lessons").unwrap();
        assert_eq!(ids, vec!["intro", "basics"]);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let text = "Lessons\r\n\r\nintro\r\nbasics\r\n\r\n";
        let ids = extract_lesson_ids(text, "Lessons").unwrap();
        assert_eq!(ids, vec!["intro", "basics"]);
    }

    #[test]
    fn uses_first_matching_label() {
        let text = "Lessons\n\nfirst\n\nLessons\n\nsecond\n\n";
        let ids = extract_lesson_ids(text, "Lessons").unwrap();
        assert_eq!(ids, vec!["first"]);
    }

    #[test]
    fn custom_label() {
        let text = "Episodes\n\none\ntwo\n\n";
        let ids = extract_lesson_ids(text, "Episodes").unwrap();
        assert_eq!(ids, vec!["one", "two"]);
    }

    #[test]
    fn missing_label_is_an_error() {
        let err = extract_lesson_ids("Schedule\n\nintro\n\n", "Lessons").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn label_must_match_whole_line() {
        let err = extract_lesson_ids("Lessons learned\n\nintro\n\n", "Lessons").unwrap_err();
        assert!(matches!(err, LessonTableError::Manifest { .. }));
    }

    #[test]
    fn missing_blank_after_label_is_an_error() {
        let err = extract_lesson_ids("Lessons", "Lessons").unwrap_err();
        assert!(err.to_string().contains("no blank line"));
    }

    #[test]
    fn unterminated_list_is_an_error() {
        let err = extract_lesson_ids("Lessons\n\nintro\nbasics", "Lessons").unwrap_err();
        assert!(err.to_string().contains("not terminated"));
    }

    #[test]
    fn empty_list_is_an_error() {
        let err = extract_lesson_ids("Lessons\n\n\nintro\n", "Lessons").unwrap_err();
        assert!(err.to_string().contains("lists no lessons"));
    }
}
