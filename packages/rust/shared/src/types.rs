//! Core domain types for lessontable.

use std::path::PathBuf;

use serde::Serialize;

// ---------------------------------------------------------------------------
// LessonRef
// ---------------------------------------------------------------------------

/// One entry of the lessons section, resolved to a document path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonRef {
    /// Identifier as listed in the index document (no prefix, no extension).
    pub id: String,
    /// Path of the lesson document on disk.
    pub path: PathBuf,
}

impl std::fmt::Display for LessonRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

// ---------------------------------------------------------------------------
// LessonRecord
// ---------------------------------------------------------------------------

/// One row of the output table.
///
/// Field order is column order; the serde names become the header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonRecord {
    /// Link-style display title, e.g. `` `Intro <intro.html>`_ ``.
    #[serde(rename = "Lesson Title")]
    pub title: String,
    /// `* `-prefixed objective lines joined by newlines.
    #[serde(rename = "Objectives")]
    pub objectives: String,
    /// `* `-prefixed question lines joined by newlines.
    #[serde(rename = "Questions")]
    pub questions: String,
}

// ---------------------------------------------------------------------------
// LessonOutcome
// ---------------------------------------------------------------------------

/// What happened to a single manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonOutcome {
    /// The document parsed and produced a record.
    Parsed {
        lesson: LessonRef,
        record: LessonRecord,
    },
    /// The document does not exist.
    Missing { lesson: LessonRef },
    /// The document exists but has no title or no overview block.
    NoOverview { lesson: LessonRef },
}

impl LessonOutcome {
    /// The manifest entry this outcome belongs to.
    pub fn lesson(&self) -> &LessonRef {
        match self {
            Self::Parsed { lesson, .. }
            | Self::Missing { lesson }
            | Self::NoOverview { lesson } => lesson,
        }
    }

    /// The produced record, if any.
    pub fn record(&self) -> Option<&LessonRecord> {
        match self {
            Self::Parsed { record, .. } => Some(record),
            _ => None,
        }
    }

    /// Short machine-friendly label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Parsed { .. } => "parsed",
            Self::Missing { .. } => "missing",
            Self::NoOverview { .. } => "no-overview",
        }
    }
}

// ---------------------------------------------------------------------------
// TableReport
// ---------------------------------------------------------------------------

/// Result of a table build (or a dry run).
#[derive(Debug, Clone)]
pub struct TableReport {
    /// Where the table was written; `None` for dry runs.
    pub output_path: Option<PathBuf>,
    /// One outcome per manifest entry, in manifest order.
    pub outcomes: Vec<LessonOutcome>,
}

impl TableReport {
    /// Records in manifest order.
    pub fn records(&self) -> Vec<LessonRecord> {
        self.outcomes
            .iter()
            .filter_map(LessonOutcome::record)
            .cloned()
            .collect()
    }

    /// Number of lessons that produced a row.
    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, LessonOutcome::Parsed { .. }))
    }

    /// Number of lessons whose document was not found.
    pub fn missing(&self) -> usize {
        self.count(|o| matches!(o, LessonOutcome::Missing { .. }))
    }

    /// Number of lessons without a recognizable overview.
    pub fn unmatched(&self) -> usize {
        self.count(|o| matches!(o, LessonOutcome::NoOverview { .. }))
    }

    fn count(&self, pred: impl Fn(&LessonOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}
