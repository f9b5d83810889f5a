//! End-to-end pipeline: index document → lessons → overviews → CSV table.

use tracing::{debug, info, instrument};

use lessontable_markdown::OverviewParser;
use lessontable_shared::{LessonOutcome, LessonRef, Result, TableConfig, TableReport};

use crate::aggregate;
use crate::loader;
use crate::table;

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter {
    /// Called once the manifest has been read.
    fn started(&self, total: usize);
    /// Called after each lesson has been processed.
    fn lesson_done(&self, outcome: &LessonOutcome, current: usize, total: usize);
    /// Called when the pipeline completes.
    fn done(&self, report: &TableReport);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn started(&self, _total: usize) {}
    fn lesson_done(&self, _outcome: &LessonOutcome, _current: usize, _total: usize) {}
    fn done(&self, _report: &TableReport) {}
}

/// Load and parse a single lesson.
pub fn process_lesson(
    lesson: &LessonRef,
    parser: &dyn OverviewParser,
    config: &TableConfig,
) -> Result<LessonOutcome> {
    let Some(content) = loader::load_document(&lesson.path)? else {
        return Ok(LessonOutcome::Missing {
            lesson: lesson.clone(),
        });
    };

    let outcome = match parser.parse(&content) {
        Some(overview) => LessonOutcome::Parsed {
            lesson: lesson.clone(),
            record: aggregate::to_record(overview, lesson, &config.link_extension),
        },
        None => LessonOutcome::NoOverview {
            lesson: lesson.clone(),
        },
    };

    debug!(lesson = %lesson.id, outcome = outcome.label(), "processed lesson");
    Ok(outcome)
}

/// Read the manifest and process every lesson, without writing anything.
///
/// Lessons are handled one at a time in manifest order; the first fatal
/// error aborts the run.
#[instrument(skip_all, fields(day = %config.day))]
pub fn inspect_lessons(
    config: &TableConfig,
    parser: &dyn OverviewParser,
    progress: &dyn ProgressReporter,
) -> Result<TableReport> {
    config.validate()?;

    let lessons = lessontable_manifest::read_manifest(config)?;
    let total = lessons.len();
    progress.started(total);

    let mut outcomes = Vec::with_capacity(total);
    for (i, lesson) in lessons.iter().enumerate() {
        let outcome = process_lesson(lesson, parser, config)?;
        progress.lesson_done(&outcome, i + 1, total);
        outcomes.push(outcome);
    }

    Ok(TableReport {
        output_path: None,
        outcomes,
    })
}

/// Run the full pipeline and write `<output_dir>/<day>.csv`.
///
/// 1. Read the lessons section of the index document
/// 2. Load and parse each lesson document
/// 3. Write one row per parsed lesson
///
/// Fails without writing when no lesson produced a record.
#[instrument(skip_all, fields(day = %config.day))]
pub fn build_table(
    config: &TableConfig,
    parser: &dyn OverviewParser,
    progress: &dyn ProgressReporter,
) -> Result<TableReport> {
    let mut report = inspect_lessons(config, parser, &DeferDone(progress))?;

    let output_path = config.output_path();
    table::write_table(&report.records(), &output_path)?;

    info!(
        output = %output_path.display(),
        written = report.written(),
        missing = report.missing(),
        unmatched = report.unmatched(),
        "table written"
    );

    report.output_path = Some(output_path);
    progress.done(&report);
    Ok(report)
}

/// Forwards per-lesson events but holds back `done` until the table is written.
struct DeferDone<'a>(&'a dyn ProgressReporter);

impl ProgressReporter for DeferDone<'_> {
    fn started(&self, total: usize) {
        self.0.started(total);
    }
    fn lesson_done(&self, outcome: &LessonOutcome, current: usize, total: usize) {
        self.0.lesson_done(outcome, current, total);
    }
    fn done(&self, _report: &TableReport) {}
}
