//! Progress-callback trait for per-file conversion events.
//!
//! Inject an [`Arc<dyn ConversionProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to receive
//! events as the pipeline walks the input folder.
//!
//! # Example
//!
//! ```rust
//! use images2pdf::{ConversionConfig, ConversionProgressCallback};
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//!
//! struct CountingCallback {
//!     pages: AtomicUsize,
//! }
//!
//! impl ConversionProgressCallback for CountingCallback {
//!     fn on_page_added(&self, page_num: usize, file_name: &str) {
//!         self.pages.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("page {page_num} <- {file_name}");
//!     }
//! }
//!
//! let counter = Arc::new(CountingCallback { pages: AtomicUsize::new(0) });
//!
//! let config = ConversionConfig::builder()
//!     .progress_callback(counter as Arc<dyn ConversionProgressCallback>)
//!     .build()
//!     .unwrap();
//! ```

use crate::error::FileError;
use std::sync::Arc;

/// Called by the conversion pipeline as it processes each directory entry.
///
/// Calls happen in file order on the thread that invoked
/// [`crate::convert::convert`]. The `Send + Sync` bound only exists so a
/// [`crate::config::ConversionConfig`] can be shared between threads.
/// All methods have default no-op implementations.
pub trait ConversionProgressCallback: Send + Sync {
    /// Called once after listing, before any file is opened.
    ///
    /// # Arguments
    /// * `total_files` — number of regular files found in the input folder
    fn on_conversion_start(&self, total_files: usize) {
        let _ = total_files;
    }

    /// Called before an entry is filtered and decoded.
    ///
    /// # Arguments
    /// * `index` — 1-indexed position in sorted order
    /// * `total` — number of files being walked
    /// * `file_name` — entry name
    fn on_file_start(&self, index: usize, total: usize, file_name: &str) {
        let _ = (index, total, file_name);
    }

    /// Called when an entry has been appended to the document.
    fn on_page_added(&self, page_num: usize, file_name: &str) {
        let _ = (page_num, file_name);
    }

    /// Called when an entry produced no page.
    fn on_file_skipped(&self, file_name: &str, error: &FileError) {
        let _ = (file_name, error);
    }

    /// Called once after the last entry, before the document is serialised.
    ///
    /// # Arguments
    /// * `page_count` — pages in the document
    /// * `candidate_count` — entries that passed the extension filter
    fn on_conversion_complete(&self, page_count: usize, candidate_count: usize) {
        let _ = (page_count, candidate_count);
    }
}

/// Type alias for the shared callback handle stored in the config.
pub type ProgressCallback = Arc<dyn ConversionProgressCallback>;

/// A no-op callback that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgressCallback;

impl ConversionProgressCallback for NoopProgressCallback {}
