#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Text-to-record extraction pipeline for the weekly incident report.
//!
//! The input is the raw text dump of a fixed-layout PDF: a run of detail
//! lines grouped under `DISTRICT <n>` headers, where each detail line
//! concatenates the incident type, date, and address without a reliable
//! separator. The pipeline is a one-way flow:
//!
//! raw text → lines → per-district blocks ([`segment`]) → classified
//! records ([`parse`]) → assembled weekly report ([`assemble`]) → rendered
//! text ([`render`]) / exported JSON ([`export`]).
//!
//! Parsing is deliberately best-effort: a line without a recognizable date
//! or a district whose header never appears degrades to fewer records, not
//! an error. The report is allowed to undercount rather than abort, since
//! the source layout is noisy by nature.

pub mod assemble;
pub mod export;
pub mod parse;
pub mod render;
pub mod segment;

/// Errors that can occur while persisting a report.
///
/// Parsing itself cannot fail: malformed input degrades to skipped lines,
/// never to an error.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Creating the export directory or writing the report file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the report to JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
