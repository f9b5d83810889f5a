//! Shared types, error model, and configuration for lessontable.
//!
//! This crate is the foundation depended on by all other lessontable crates.
//! It provides:
//! - [`LessonTableError`] — the unified error type
//! - Domain types ([`LessonRef`], [`LessonRecord`], [`LessonOutcome`], [`TableReport`])
//! - Configuration ([`AppConfig`], [`TableConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, ManifestConfig, PathsConfig, TableConfig, config_dir,
    config_file_path, init_config, init_config_at, load_config, load_config_from,
};
pub use error::{LessonTableError, Result};
pub use types::{LessonOutcome, LessonRecord, LessonRef, TableReport};
