//! Image decoding: one file on disk → one `DynamicImage` in memory.
//!
//! The codec is picked from the file extension, not by sniffing, so a PNG
//! renamed to `.jpg` is reported as a decode failure. The file handle is
//! owned by [`decode_file`] and closed when it returns, whichever way it
//! returns, so a large folder never holds more than one handle open.

use crate::error::FileError;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::trace;

/// A decoded image ready to be placed on a page.
pub struct DecodedImage {
    pub image: DynamicImage,
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Open `path` and decode it with the codec for `format`.
///
/// GIF animations yield their first frame.
pub fn decode_file(
    path: &Path,
    file_name: &str,
    format: ImageFormat,
) -> Result<DecodedImage, FileError> {
    let file = File::open(path).map_err(|e| FileError::OpenFailed {
        file: file_name.to_string(),
        detail: e.to_string(),
    })?;

    let image = ImageReader::with_format(BufReader::new(file), format)
        .decode()
        .map_err(|e| FileError::DecodeFailed {
            file: file_name.to_string(),
            detail: e.to_string(),
        })?;

    if image.width() == 0 || image.height() == 0 {
        return Err(FileError::DecodeFailed {
            file: file_name.to_string(),
            detail: "image has zero width or height".to_string(),
        });
    }

    trace!(
        "Decoded {} as {:?}: {}x{}",
        file_name,
        format,
        image.width(),
        image.height()
    );
    Ok(DecodedImage { image })
}
