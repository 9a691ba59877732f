//! Document assembly: accumulate one printpdf page per decoded image.
//!
//! printpdf 0.8 is data-oriented: images are registered once as XObjects on
//! the [`PdfDocument`], pages are plain `Vec<Op>` lists that reference them,
//! and the whole thing is serialised in one `save()` call. The assembler owns
//! that document for the length of a run and is consumed by [`DocumentAssembler::finish`].

use crate::pipeline::decode::DecodedImage;
use crate::pipeline::layout::PageGeometry;
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use tracing::{debug, warn};

const MM_PER_PT: f32 = 25.4 / 72.0;

/// The in-progress output document.
pub struct DocumentAssembler {
    doc: PdfDocument,
    pages: Vec<PdfPage>,
    image_dpi: f32,
}

impl DocumentAssembler {
    /// Start an empty document. `image_dpi` must match the DPI used for layout.
    pub fn new(title: &str, image_dpi: f32) -> Self {
        Self {
            doc: PdfDocument::new(title),
            pages: Vec::new(),
            image_dpi,
        }
    }

    /// Append a page holding `image`, placed per `geometry`.
    ///
    /// Takes the decoded image by value: its pixels move into the document's
    /// image store and nothing else of it outlives this call.
    pub fn add_page(&mut self, image: DecodedImage, geometry: &PageGeometry) -> usize {
        let xobject_id = self.doc.add_image(&raw_image(image));

        // At `dpi`, printpdf draws the XObject at pixels * 72 / dpi points,
        // which is exactly `geometry.image_*_pt`; no extra scaling needed.
        let ops = vec![Op::UseXobject {
            id: xobject_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(geometry.image_x_pt)),
                translate_y: Some(Pt(geometry.image_y_pt)),
                dpi: Some(self.image_dpi),
                ..Default::default()
            },
        }];

        self.pages.push(PdfPage::new(
            Mm(geometry.page_width_pt * MM_PER_PT),
            Mm(geometry.page_height_pt * MM_PER_PT),
            ops,
        ));
        self.pages.len()
    }

    /// Serialise the document. Consumes the assembler.
    pub fn finish(mut self) -> Vec<u8> {
        let page_count = self.pages.len();
        // The default options downscale anything over 2 MB raw; pixels must
        // reach the file as decoded.
        let options = PdfSaveOptions {
            image_optimization: None,
            ..Default::default()
        };
        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let bytes = self.doc.with_pages(self.pages).save(&options, &mut warnings);

        for w in &warnings {
            warn!("PDF writer: {:?}", w);
        }
        debug!("Serialised {} pages → {} bytes", page_count, bytes.len());
        bytes
    }
}

/// Hand the decoded pixels to printpdf at 8 bits per channel.
///
/// Images with an alpha channel stay RGBA; printpdf writes the alpha plane
/// as a soft mask.
fn raw_image(image: DecodedImage) -> RawImage {
    let width = image.width() as usize;
    let height = image.height() as usize;
    let (pixels, data_format) = if image.image.color().has_alpha() {
        (image.image.into_rgba8().into_raw(), RawImageFormat::RGBA8)
    } else {
        (image.image.into_rgb8().into_raw(), RawImageFormat::RGB8)
    };
    RawImage {
        pixels: RawImageData::U8(pixels),
        width,
        height,
        data_format,
        tag: Vec::new(),
    }
}
