//! Overview extraction from lesson Markdown documents.
//!
//! Lesson documents follow a fixed template: a level-1 heading carrying the
//! title, and a fenced `{admonition} Overview` block holding two labeled
//! bullet groups:
//!
//! `````text
//! # Intro
//!
//! ````{admonition} Overview
//! :class: note
//!
//! Questions:
//! - What?
//!
//! Objectives:
//! - Learn X
//! ````
//! `````
//!
//! Callers go through the [`OverviewParser`] trait so the matching strategy
//! can change without touching the pipeline.

mod cleanup;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace};

pub use cleanup::format_bullets;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Fields extracted from one lesson document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    /// Heading text, trimmed.
    pub title: String,
    /// Objectives as `* `-prefixed lines.
    pub objectives: String,
    /// Questions as `* `-prefixed lines.
    pub questions: String,
}

/// Extracts an [`Overview`] from document text.
pub trait OverviewParser {
    /// Returns `None` when the document does not follow the template.
    fn parse(&self, content: &str) -> Option<Overview>;
}

// ---------------------------------------------------------------------------
// Regex patterns (compiled once)
// ---------------------------------------------------------------------------

/// Matches `# Title` at the start of a line.
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# (.+)$").expect("title regex"));

/// Matches the overview admonition and captures the questions and objectives.
static OVERVIEW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)````\{admonition\} Overview.*?Questions:\n(.*?)\nObjectives:\n(.*?)```")
        .expect("overview regex")
});

// ---------------------------------------------------------------------------
// Template parser
// ---------------------------------------------------------------------------

/// Regex-based parser for the lesson documentation template.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateParser;

impl OverviewParser for TemplateParser {
    fn parse(&self, content: &str) -> Option<Overview> {
        let content = cleanup::normalize_line_endings(content);

        let Some(title) = extract_title(&content) else {
            trace!("no level-1 heading");
            return None;
        };

        let Some(caps) = OVERVIEW_RE.captures(&content) else {
            debug!(%title, "no overview block");
            return None;
        };

        Some(Overview {
            title,
            questions: format_bullets(&caps[1]),
            objectives: format_bullets(&caps[2]),
        })
    }
}

/// Extract the first level-1 heading. A heading with no text counts as absent.
fn extract_title(md: &str) -> Option<String> {
    TITLE_RE
        .captures(md)
        .map(|c| c[1].trim().to_string())
        .filter(|title| !title.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
