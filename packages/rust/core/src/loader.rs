//! Lesson document loading.

use std::io::ErrorKind;
use std::path::Path;

use lessontable_shared::{LessonTableError, Result};
use tracing::warn;

/// Read a lesson document.
///
/// A missing file is the one per-lesson failure the pipeline tolerates: it is
/// reported as a warning and yields `Ok(None)`. Any other I/O error
/// (permissions, invalid UTF-8, a directory in place of a file) is fatal.
pub fn load_document(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "File not found");
            Ok(None)
        }
        Err(e) => Err(LessonTableError::io(path, e)),
    }
}
