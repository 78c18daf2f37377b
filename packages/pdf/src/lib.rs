#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Weekly report PDF download and text extraction.
//!
//! Downloads the report PDF and extracts its text with [`pdf_extract`]. The
//! downloaded bytes are staged in a [`tempfile::NamedTempFile`] scoped to
//! the extraction call: the file is removed when the guard drops, whether
//! extraction succeeded or failed, so no report PDFs accumulate on disk.

use std::io::Write as _;

/// Errors specific to PDF retrieval and extraction.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    /// The HTTP request to download the PDF failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Staging the PDF bytes on disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF text extraction failed.
    #[error("PDF extraction error: {0}")]
    Extraction(String),
}

/// Downloads the PDF at `url` and extracts its text content.
///
/// # Errors
///
/// Returns [`PdfError::Http`] if the download fails, [`PdfError::Io`] if
/// the bytes cannot be staged, and [`PdfError::Extraction`] if the document
/// cannot be read as a PDF.
pub async fn download_and_extract_text(url: &str) -> Result<String, PdfError> {
    let client = reqwest::Client::builder()
        .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36")
        .timeout(std::time::Duration::from_secs(120))
        .connect_timeout(std::time::Duration::from_secs(30))
        .build()?;

    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;

    log::debug!("downloaded {} bytes from {url}", bytes.len());

    extract_text(&bytes)
}

/// Stages PDF bytes in a scoped temp file and extracts their text.
///
/// The temp file lives exactly as long as this call: `NamedTempFile`
/// removes it on drop, on the success and failure paths alike.
///
/// # Errors
///
/// Returns [`PdfError::Io`] if the temp file cannot be written and
/// [`PdfError::Extraction`] if the bytes are not a readable PDF.
pub fn extract_text(bytes: &[u8]) -> Result<String, PdfError> {
    let mut staged = tempfile::NamedTempFile::new()?;
    staged.write_all(bytes)?;

    let text = pdf_extract::extract_text(staged.path())
        .map_err(|e| PdfError::Extraction(format!("failed to extract text from PDF: {e}")))?;

    log::debug!("extracted {} characters of text", text.len());

    Ok(text)
}
