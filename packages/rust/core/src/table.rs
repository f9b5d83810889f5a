//! CSV output.
//!
//! The header row comes from the serde field names of [`LessonRecord`], so it
//! is always `Lesson Title,Objectives,Questions`. Multi-line cells are quoted
//! per standard CSV rules and records end in CRLF.

use std::io::Write;
use std::path::{Path, PathBuf};

use lessontable_shared::{LessonRecord, LessonTableError, Result};
use tracing::{debug, instrument};

/// Path used in errors when rendering to memory.
const IN_MEMORY: &str = "<memory>";

fn writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(inner)
}

fn ensure_records(records: &[LessonRecord], path: &Path) -> Result<()> {
    if records.is_empty() {
        return Err(LessonTableError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Write `records` as a CSV table at `path`, creating parent directories.
///
/// Fails with [`LessonTableError::EmptyTable`] before touching the filesystem
/// when there are no records.
#[instrument(skip_all, fields(path = %path.display(), rows = records.len()))]
pub fn write_table(records: &[LessonRecord], path: &Path) -> Result<()> {
    ensure_records(records, path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| LessonTableError::io(parent, e))?;
    }

    let file = std::fs::File::create(path).map_err(|e| LessonTableError::io(path, e))?;
    let mut wtr = writer(file);

    for record in records {
        wtr.serialize(record)
            .map_err(|e| LessonTableError::csv(path, e))?;
    }
    wtr.flush().map_err(|e| LessonTableError::io(path, e))?;

    debug!("table written");
    Ok(())
}

/// Render `records` as CSV text.
pub fn render_table(records: &[LessonRecord]) -> Result<String> {
    let path = PathBuf::from(IN_MEMORY);
    ensure_records(records, &path)?;

    let mut wtr = writer(Vec::new());
    for record in records {
        wtr.serialize(record)
            .map_err(|e| LessonTableError::csv(&path, e))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| LessonTableError::csv(&path, e))?;
    String::from_utf8(bytes).map_err(|e| LessonTableError::csv(&path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, objectives: &str, questions: &str) -> LessonRecord {
        LessonRecord {
            title: title.into(),
            objectives: objectives.into(),
            questions: questions.into(),
        }
    }

    #[test]
    fn render_header_and_rows() {
        let csv = render_table(&[record("`Intro <intro.html>`_", "* Learn X", "* What?")]).unwrap();
        assert_eq!(
            csv,
            "Lesson Title,Objectives,Questions\r\n`Intro <intro.html>`_,* Learn X,* What?\r\n"
        );
    }

    #[test]
    fn render_quotes_multiline_and_commas() {
        let csv = render_table(&[record(
            "`Files, Dirs <files.html>`_",
            "* a\n* b",
            "* say \"hi\"",
        )])
        .unwrap();
        assert_eq!(
            csv,
            "Lesson Title,Objectives,Questions\r\n\
             \"`Files, Dirs <files.html>`_\",\"* a\n* b\",\"* say \"\"hi\"\"\"\r\n"
        );
    }

    #[test]
    fn render_preserves_order() {
        let csv = render_table(&[
            record("second", "* o", "* q"),
            record("first", "* o", "* q"),
        ])
        .unwrap();
        let second = csv.find("second").unwrap();
        let first = csv.find("first").unwrap();
        assert!(second < first);
    }

    #[test]
    fn empty_records_are_rejected() {
        let err = render_table(&[]).unwrap_err();
        assert!(matches!(err, LessonTableError::EmptyTable { .. }));
    }

    #[test]
    fn write_table_creates_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out").join("day1.csv");

        write_table(&[record("t", "* o", "* q")], &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Lesson Title,Objectives,Questions\r\n"));
        assert!(written.ends_with("t,* o,* q\r\n"));
    }

    #[test]
    fn write_table_empty_leaves_no_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("day1.csv");

        let err = write_table(&[], &path).unwrap_err();
        assert!(matches!(err, LessonTableError::EmptyTable { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn write_table_unwritable_destination() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A regular file where a directory is expected.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").expect("write");

        let err = write_table(&[record("t", "* o", "* q")], &blocker.join("day1.csv")).unwrap_err();
        assert!(matches!(err, LessonTableError::Io { .. }));
    }
}
