//! Error types for the images2pdf library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`Images2PdfError`] — **Fatal**: the run cannot proceed at all
//!   (input directory missing or unreadable, output not writable). Returned
//!   as `Err(Images2PdfError)` from the top-level `convert*` functions.
//!
//! * [`FileError`] — **Non-fatal**: a single directory entry produced no page
//!   (wrong extension, unreadable, corrupt) but the other files are fine.
//!   Stored inside [`crate::output::SkippedFile`] so callers can inspect what
//!   was left out instead of losing the whole document to one bad file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the images2pdf library.
///
/// Per-file failures use [`FileError`] and are stored in
/// [`crate::output::SkippedFile`] rather than propagated here.
#[derive(Debug, Error)]
pub enum Images2PdfError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The input folder does not exist.
    #[error("Input folder not found: '{path}'\nCheck the path exists and is readable.")]
    InputNotFound { path: PathBuf },

    /// The input path exists but is a file, not a folder.
    #[error("Input path is not a folder: '{path}'")]
    NotADirectory { path: PathBuf },

    /// The folder could not be opened or its entries could not be listed.
    #[error("Failed to read input folder '{path}': {source}")]
    ReadDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write the output PDF file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A non-fatal error for a single directory entry.
///
/// The entry contributes no page; the conversion continues with the next one.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FileError {
    /// Extension is not one of the supported image extensions.
    #[error("{file}: not a supported image extension")]
    UnsupportedExtension { file: String },

    /// The file could not be opened for reading.
    #[error("{file}: could not be opened: {detail}")]
    OpenFailed { file: String, detail: String },

    /// The codec rejected the file contents.
    #[error("{file}: could not be decoded: {detail}")]
    DecodeFailed { file: String, detail: String },
}

impl FileError {
    /// Name of the entry this error refers to.
    pub fn file(&self) -> &str {
        match self {
            FileError::UnsupportedExtension { file }
            | FileError::OpenFailed { file, .. }
            | FileError::DecodeFailed { file, .. } => file,
        }
    }

    /// `true` when the entry was filtered out by extension rather than failing.
    pub fn is_ignored(&self) -> bool {
        matches!(self, FileError::UnsupportedExtension { .. })
    }
}
