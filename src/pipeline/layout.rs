//! Page geometry: where a decoded image goes and how big its page is.
//!
//! All values are PDF points (1/72 inch) with the origin at the bottom-left
//! corner of the page, which is what `printpdf` expects. The image is always
//! drawn at its natural size, `pixels * 72 / dpi`, with its top-left corner
//! on the page's top-left corner.

use crate::config::PageSizing;

/// A4 portrait in points (210 × 297 mm).
pub const A4_WIDTH_PT: f32 = 595.276;
pub const A4_HEIGHT_PT: f32 = 841.89;

const POINTS_PER_INCH: f32 = 72.0;

/// Placement of one image on one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    /// Drawn image size.
    pub image_width_pt: f32,
    pub image_height_pt: f32,
    /// Bottom-left corner of the drawn image.
    pub image_x_pt: f32,
    pub image_y_pt: f32,
}

/// Convert a pixel length to points at `dpi`.
pub fn px_to_pt(px: u32, dpi: f32) -> f32 {
    px as f32 * POINTS_PER_INCH / dpi
}

/// Compute the page for a `width_px` × `height_px` image.
pub fn page_geometry(sizing: PageSizing, width_px: u32, height_px: u32, dpi: f32) -> PageGeometry {
    let image_width_pt = px_to_pt(width_px, dpi);
    let image_height_pt = px_to_pt(height_px, dpi);

    let (page_width_pt, page_height_pt) = match sizing {
        PageSizing::FitImage => (image_width_pt, image_height_pt),
        PageSizing::A4 => (A4_WIDTH_PT, A4_HEIGHT_PT),
    };

    PageGeometry {
        page_width_pt,
        page_height_pt,
        image_width_pt,
        image_height_pt,
        image_x_pt: 0.0,
        // Anchor the top edge; taller-than-page images run off the bottom.
        image_y_pt: page_height_pt - image_height_pt,
    }
}
