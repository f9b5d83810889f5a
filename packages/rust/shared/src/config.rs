//! Application configuration for lessontable.
//!
//! User config lives at `~/.lessontable/lessontable.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LessonTableError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "lessontable.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".lessontable";

/// Extension of the generated table.
const TABLE_EXTENSION: &str = "csv";

// ---------------------------------------------------------------------------
// Config structs (matching lessontable.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Where documents are read from and the table is written to.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Index document layout.
    #[serde(default)]
    pub manifest: ManifestConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Day identifier used when `--day` is not given.
    #[serde(default = "default_day")]
    pub day: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self { day: default_day() }
    }
}

fn default_day() -> String {
    "day6".into()
}

/// `[paths]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the index document and the lesson documents.
    #[serde(default = "default_source_root")]
    pub source_root: String,

    /// Directory the table is written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Extension of the index document.
    #[serde(default = "default_index_extension")]
    pub index_extension: String,

    /// Extension appended to each lesson identifier.
    #[serde(default = "default_lesson_extension")]
    pub lesson_extension: String,

    /// Extension used in the display-title link.
    #[serde(default = "default_link_extension")]
    pub link_extension: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            output_dir: default_output_dir(),
            index_extension: default_index_extension(),
            lesson_extension: default_lesson_extension(),
            link_extension: default_link_extension(),
        }
    }
}

fn default_source_root() -> String {
    "..".into()
}
fn default_output_dir() -> String {
    ".".into()
}
fn default_index_extension() -> String {
    "rst".into()
}
fn default_lesson_extension() -> String {
    "md".into()
}
fn default_link_extension() -> String {
    "html".into()
}

/// `[manifest]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Line that introduces the lesson list in the index document.
    #[serde(default = "default_section_label")]
    pub section_label: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            section_label: default_section_label(),
        }
    }
}

fn default_section_label() -> String {
    "Lessons".into()
}

// ---------------------------------------------------------------------------
// Table config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime configuration for one table build — merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Day identifier selecting the index document and the output file name.
    pub day: String,
    /// Directory holding the index and lesson documents.
    pub source_root: PathBuf,
    /// Directory the table is written into.
    pub output_dir: PathBuf,
    /// Extension of the index document.
    pub index_extension: String,
    /// Extension appended to lesson identifiers.
    pub lesson_extension: String,
    /// Extension used in display-title links.
    pub link_extension: String,
    /// Label line of the lessons section.
    pub section_label: String,
}

impl From<&AppConfig> for TableConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            day: config.defaults.day.clone(),
            source_root: PathBuf::from(&config.paths.source_root),
            output_dir: PathBuf::from(&config.paths.output_dir),
            index_extension: config.paths.index_extension.clone(),
            lesson_extension: config.paths.lesson_extension.clone(),
            link_extension: config.paths.link_extension.clone(),
            section_label: config.manifest.section_label.clone(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl TableConfig {
    /// Path of the index document: `<source_root>/<day>.<index_extension>`.
    pub fn index_path(&self) -> PathBuf {
        self.source_root
            .join(format!("{}.{}", self.day, self.index_extension))
    }

    /// Path of a lesson document: `<source_root>/<id>.<lesson_extension>`.
    pub fn lesson_path(&self, id: &str) -> PathBuf {
        self.source_root
            .join(format!("{id}.{}", self.lesson_extension))
    }

    /// Path of the generated table: `<output_dir>/<day>.csv`.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{TABLE_EXTENSION}", self.day))
    }

    /// Reject values that would produce nonsensical paths.
    pub fn validate(&self) -> Result<()> {
        if self.day.trim().is_empty() {
            return Err(LessonTableError::validation("day must not be empty"));
        }
        if self.day.contains(['/', '\\']) {
            return Err(LessonTableError::validation(format!(
                "day '{}' must not contain path separators",
                self.day
            )));
        }
        if self.section_label.is_empty() {
            return Err(LessonTableError::validation(
                "manifest section label must not be empty",
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.lessontable/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| LessonTableError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.lessontable/lessontable.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| LessonTableError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        LessonTableError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    init_config_at(&config_file_path()?)
}

/// Write a default config file at `path`, creating parent directories.
pub fn init_config_at(path: &Path) -> Result<PathBuf> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| LessonTableError::io(dir, e))?;
    }

    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| LessonTableError::config(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| LessonTableError::io(path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("source_root"));
        assert!(toml_str.contains("Lessons"));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[defaults]
day = "day2"

[paths]
source_root = "docs"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.defaults.day, "day2");
        assert_eq!(config.paths.source_root, "docs");
        assert_eq!(config.paths.lesson_extension, "md");
        assert_eq!(config.manifest.section_label, "Lessons");
    }

    #[test]
    fn table_config_paths() {
        let table = TableConfig::default();
        assert_eq!(table.day, "day6");
        assert_eq!(table.index_path(), Path::new("..").join("day6.rst"));
        assert_eq!(table.lesson_path("intro"), Path::new("..").join("intro.md"));
        assert_eq!(table.output_path(), Path::new(".").join("day6.csv"));
    }

    #[test]
    fn table_config_rejects_bad_day() {
        let mut table = TableConfig::default();
        table.day = "  ".into();
        assert!(table.validate().is_err());

        table.day = "../day1".into();
        let err = table.validate().unwrap_err();
        assert!(err.to_string().contains("path separators"));

        table.day = "day1".into();
        assert!(table.validate().is_ok());
    }

    #[test]
    fn init_then_load_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let written = init_config_at(&path).expect("init config");
        assert_eq!(written, path);

        let loaded = load_config_from(&path).expect("load config");
        assert_eq!(loaded.defaults.day, "day6");
        assert_eq!(loaded.paths.link_extension, "html");
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[defaults\nday = ").expect("write");

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
