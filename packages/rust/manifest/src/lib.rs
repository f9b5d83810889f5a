//! Manifest reading: turns an index document into an ordered lesson list.
//!
//! The index document (`<source_root>/<day>.rst` by default) carries a
//! "Lessons" section listing lesson identifiers. Each identifier resolves to
//! `<source_root>/<id>.<lesson_extension>`.

mod parser;

use lessontable_shared::{LessonRef, LessonTableError, Result, TableConfig};
use tracing::{debug, info, instrument};

pub use parser::extract_lesson_ids;

/// Resolve identifiers to lesson document paths, preserving order.
pub fn resolve(ids: &[String], config: &TableConfig) -> Vec<LessonRef> {
    ids.iter()
        .map(|id| LessonRef {
            id: id.clone(),
            path: config.lesson_path(id),
        })
        .collect()
}

/// Parse index document text into resolved lesson references.
pub fn parse_manifest(text: &str, config: &TableConfig) -> Result<Vec<LessonRef>> {
    let ids = extract_lesson_ids(text, &config.section_label)?;
    debug!(count = ids.len(), "extracted lesson identifiers");
    Ok(resolve(&ids, config))
}

/// Read the index document for `config.day` and return its lessons.
///
/// Any failure here is fatal: without a manifest there is nothing to build.
#[instrument(skip_all, fields(day = %config.day))]
pub fn read_manifest(config: &TableConfig) -> Result<Vec<LessonRef>> {
    let path = config.index_path();
    let text = std::fs::read_to_string(&path).map_err(|e| LessonTableError::io(&path, e))?;

    let lessons = parse_manifest(&text, config)?;
    info!(index = %path.display(), lessons = lessons.len(), "read manifest");
    Ok(lessons)
}
