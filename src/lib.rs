//! # images2pdf
//!
//! Collect the images in a folder into a single PDF, one page per image.
//!
//! ## Pipeline Overview
//!
//! ```text
//! folder
//!  │
//!  ├─ 1. Input     list regular files, sort byte-wise by name
//!  ├─ 2. Filter    keep .png .jpg .jpeg .gif .tiff .bmp (lowercase)
//!  ├─ 3. Decode    one scoped file handle per image
//!  ├─ 4. Layout    page sized to the image, or fixed A4
//!  └─ 5. Assemble  printpdf document, serialised once
//! ```
//!
//! Files that cannot be opened or decoded are logged and skipped; only a
//! missing or unreadable input folder, or an unwritable output file, aborts
//! the run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use images2pdf::{convert_to_file, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::default();
//!     let stats = convert_to_file("scans/", "scans.pdf", &config)?;
//!     eprintln!("{} pages, {} skipped",
//!         stats.converted_pages,
//!         stats.ignored_files + stats.failed_files);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `images2pdf` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, PageSizing, DEFAULT_IMAGE_DPI};
pub use convert::{convert, convert_to_file, inspect};
pub use error::{FileError, Images2PdfError};
pub use output::{ConversionOutput, ConversionStats, PageResult, SkippedFile};
pub use pipeline::input::{FileEntry, SUPPORTED_EXTENSIONS};
pub use progress::{ConversionProgressCallback, NoopProgressCallback, ProgressCallback};
