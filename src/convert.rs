//! Conversion entry points.
//!
//! [`convert`] builds the whole document in memory and returns it together
//! with per-page and per-skip records; [`convert_to_file`] does the same and
//! then writes the bytes to disk. [`inspect`] only lists what would be
//! converted.

use crate::config::{ConversionConfig, PageSizing};
use crate::error::{FileError, Images2PdfError};
use crate::output::{ConversionOutput, ConversionStats, PageResult, SkippedFile};
use crate::pipeline::assemble::DocumentAssembler;
use crate::pipeline::input::{self, FileEntry};
use crate::pipeline::{decode, layout};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Title used when neither the config nor the output path provides one.
const DEFAULT_TITLE: &str = "images2pdf";

/// Convert every supported image directly inside `input_dir` into one PDF.
///
/// Files are taken in byte-wise filename order, one page per image.
///
/// # Returns
/// `Ok(ConversionOutput)` on success, even if some files were skipped
/// (check `output.skipped`). A folder with no usable images yields a valid
/// PDF with zero pages.
///
/// # Errors
/// Returns `Err(Images2PdfError)` only for fatal errors: the folder is
/// missing, is not a folder, or cannot be listed.
pub fn convert(
    input_dir: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Images2PdfError> {
    let total_start = Instant::now();
    let input_dir = input_dir.as_ref();
    info!("Starting conversion: {}", input_dir.display());

    // ── Step 1: List and sort ────────────────────────────────────────────
    let files = input::list_files(input_dir)?;
    let total = files.len();

    if config.page_sizing == PageSizing::A4 {
        debug!(
            "A4 page size (x, y) => ({}, {})",
            layout::A4_WIDTH_PT,
            layout::A4_HEIGHT_PT
        );
    }
    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_start(total);
    }

    // ── Step 2: Filter, decode and append, one file at a time ────────────
    let title = config.title.as_deref().unwrap_or(DEFAULT_TITLE);
    let mut assembler = DocumentAssembler::new(title, config.image_dpi);
    let mut pages = Vec::new();
    let mut skipped = Vec::new();
    let mut candidates = 0usize;

    let decode_start = Instant::now();
    for (i, entry) in files.iter().enumerate() {
        let name = entry.display_name();
        debug!("file => {}", name);
        if let Some(ref cb) = config.progress_callback {
            cb.on_file_start(i + 1, total, &name);
        }

        let outcome = match entry.image_format() {
            None => {
                info!("file ignored => {}", name);
                Err(FileError::UnsupportedExtension { file: name.clone() })
            }
            Some(format) => {
                candidates += 1;
                decode::decode_file(&entry.path, &name, format)
            }
        };

        match outcome {
            Ok(image) => {
                let (width_px, height_px) = (image.width(), image.height());
                let geometry =
                    layout::page_geometry(config.page_sizing, width_px, height_px, config.image_dpi);
                let page_num = assembler.add_page(image, &geometry);
                info!(
                    "added page {} <- {} ({}x{} px)",
                    page_num, name, width_px, height_px
                );
                if let Some(ref cb) = config.progress_callback {
                    cb.on_page_added(page_num, &name);
                }
                pages.push(PageResult {
                    page_num,
                    file_name: name,
                    width_px,
                    height_px,
                    page_width_pt: geometry.page_width_pt,
                    page_height_pt: geometry.page_height_pt,
                });
            }
            Err(error) => {
                if !error.is_ignored() {
                    warn!("Skipping {}", error);
                }
                if let Some(ref cb) = config.progress_callback {
                    cb.on_file_skipped(&name, &error);
                }
                skipped.push(SkippedFile {
                    file_name: name,
                    error,
                });
            }
        }
    }
    let decode_duration_ms = decode_start.elapsed().as_millis() as u64;

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_complete(pages.len(), candidates);
    }

    // ── Step 3: Serialise ────────────────────────────────────────────────
    let pdf = assembler.finish();

    let ignored = skipped.iter().filter(|s| s.error.is_ignored()).count();
    let stats = ConversionStats {
        total_files: total,
        candidate_files: candidates,
        converted_pages: pages.len(),
        ignored_files: ignored,
        failed_files: skipped.len() - ignored,
        decode_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    if pages.is_empty() {
        warn!(
            "No pages produced from {}; the PDF will be empty",
            input_dir.display()
        );
    }
    info!(
        "{} of {} candidate files converted ({} ignored, {} failed) in {}ms",
        stats.converted_pages,
        stats.candidate_files,
        stats.ignored_files,
        stats.failed_files,
        stats.total_duration_ms
    );

    Ok(ConversionOutput {
        pdf,
        pages,
        skipped,
        stats,
    })
}

/// Convert `input_dir` and write the PDF to `output_path`.
///
/// Missing parent folders are created. The bytes are written to a temp file
/// next to the target and renamed over it, so an existing file at
/// `output_path` is either fully replaced or left untouched.
pub fn convert_to_file(
    input_dir: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, Images2PdfError> {
    let path = output_path.as_ref();

    let output = if config.title.is_some() {
        convert(input_dir, config)?
    } else {
        let mut config = config.clone();
        config.title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string);
        convert(input_dir, &config)?
    };

    write_atomic(path, &output.pdf)?;
    info!("Wrote {} bytes to {}", output.pdf.len(), path.display());
    Ok(output.stats)
}

/// List the entries of `input_dir` that would become pages, in page order.
///
/// Nothing is decoded, so a listed entry can still fail during [`convert`].
pub fn inspect(input_dir: impl AsRef<Path>) -> Result<Vec<FileEntry>, Images2PdfError> {
    let files = input::list_files(input_dir.as_ref())?;
    Ok(files
        .into_iter()
        .filter(|f| f.image_format().is_some())
        .collect())
}

// ── Internal helpers ─────────────────────────────────────────────────────

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), Images2PdfError> {
    use std::io::Write;

    let write_err = |source| Images2PdfError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(write_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(bytes).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
