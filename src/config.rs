//! Configuration types for image-folder-to-PDF conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. The CLI maps its flags onto one of
//! these and hands it to [`crate::convert::convert_to_file`] by reference;
//! nothing is read from global state afterwards.

use crate::error::Images2PdfError;
use crate::progress::ProgressCallback;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixel density used to map image pixels to PDF points. Default: 128.
///
/// 128 px per inch makes a 128 px wide image exactly one inch (72 pt) wide.
pub const DEFAULT_IMAGE_DPI: f32 = 128.0;

/// Configuration for a conversion run.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use images2pdf::{ConversionConfig, PageSizing};
///
/// let config = ConversionConfig::builder()
///     .page_sizing(PageSizing::A4)
///     .image_dpi(150.0)
///     .title("Scans")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// How each page is sized. Default: [`PageSizing::FitImage`].
    pub page_sizing: PageSizing,

    /// Image resolution in pixels per inch used to compute the drawn image
    /// size (and, under [`PageSizing::FitImage`], the page size).
    /// Range: 1–2400. Default: [`DEFAULT_IMAGE_DPI`].
    pub image_dpi: f32,

    /// Document title written to the PDF info dictionary.
    /// If None, [`crate::convert::convert_to_file`] uses the output file stem.
    pub title: Option<String>,

    /// Optional per-file progress events.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            page_sizing: PageSizing::default(),
            image_dpi: DEFAULT_IMAGE_DPI,
            title: None,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("page_sizing", &self.page_sizing)
            .field("image_dpi", &self.image_dpi)
            .field("title", &self.title)
            .field(
                "progress_callback",
                &self
                    .progress_callback
                    .as_ref()
                    .map(|_| "<dyn ConversionProgressCallback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn page_sizing(mut self, sizing: PageSizing) -> Self {
        self.config.page_sizing = sizing;
        self
    }

    /// Set the image resolution. Out-of-range values are rejected by [`Self::build`].
    pub fn image_dpi(mut self, dpi: f32) -> Self {
        self.config.image_dpi = dpi;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Images2PdfError> {
        let dpi = self.config.image_dpi;
        if !dpi.is_finite() || !(1.0..=2400.0).contains(&dpi) {
            return Err(Images2PdfError::InvalidConfig(format!(
                "image DPI must be 1–2400, got {dpi}"
            )));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Page geometry policy.
///
/// | Policy | Page size | Image placement |
/// |--------|-----------|-----------------|
/// | `FitImage` | image pixels at `image_dpi` | fills the page |
/// | `A4` | 210 × 297 mm | natural size, anchored top-left |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSizing {
    /// Each page takes the dimensions of its image. (default)
    #[default]
    FitImage,
    /// Every page is A4 portrait regardless of image size.
    A4,
}

impl fmt::Display for PageSizing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSizing::FitImage => f.write_str("fit-image"),
            PageSizing::A4 => f.write_str("a4"),
        }
    }
}
