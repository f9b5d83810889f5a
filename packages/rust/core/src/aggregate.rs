//! Turning parsed overviews into table records.

use lessontable_markdown::Overview;
use lessontable_shared::{LessonRecord, LessonRef};

/// Build the link-style display title: `` `<title> <<id>.<link_extension>>`_ ``.
///
/// The link target is the lesson identifier relative to the source root, so
/// it stays valid wherever the rendered pages end up.
pub fn display_title(title: &str, lesson_id: &str, link_extension: &str) -> String {
    format!("`{title} <{lesson_id}.{link_extension}>`_")
}

/// Combine a parsed overview with its manifest entry into one table row.
pub fn to_record(overview: Overview, lesson: &LessonRef, link_extension: &str) -> LessonRecord {
    LessonRecord {
        title: display_title(&overview.title, &lesson.id, link_extension),
        objectives: overview.objectives,
        questions: overview.questions,
    }
}
