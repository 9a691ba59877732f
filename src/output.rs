//! Result types returned by the conversion entry points.

use crate::error::FileError;
use serde::{Deserialize, Serialize};

/// Everything produced by [`crate::convert::convert`].
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// Serialised PDF document.
    pub pdf: Vec<u8>,
    /// One entry per emitted page, in page order.
    pub pages: Vec<PageResult>,
    /// Entries that produced no page, in directory order.
    pub skipped: Vec<SkippedFile>,
    pub stats: ConversionStats,
}

/// One page of the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    /// 1-indexed page number.
    pub page_num: usize,
    /// Source file name.
    pub file_name: String,
    pub width_px: u32,
    pub height_px: u32,
    /// Page width in PDF points.
    pub page_width_pt: f32,
    /// Page height in PDF points.
    pub page_height_pt: f32,
}

/// An entry that contributed no page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub file_name: String,
    pub error: FileError,
}

/// Counters and timings for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Regular files found in the input folder.
    pub total_files: usize,
    /// Files that passed the extension filter.
    pub candidate_files: usize,
    /// Pages in the output document.
    pub converted_pages: usize,
    /// Files rejected by the extension filter.
    pub ignored_files: usize,
    /// Candidates that could not be opened or decoded.
    pub failed_files: usize,
    pub decode_duration_ms: u64,
    pub total_duration_ms: u64,
}

impl ConversionStats {
    /// `true` when every candidate became a page.
    pub fn is_complete(&self) -> bool {
        self.failed_files == 0
    }
}
