//! Core pipeline orchestration for lessontable.
//!
//! This crate ties together manifest reading, document loading, overview
//! parsing, and CSV output into the end-to-end `build_table` workflow.

pub mod aggregate;
pub mod loader;
pub mod pipeline;
pub mod table;
