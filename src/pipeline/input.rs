//! Input resolution: list the input folder and decide which entries are images.
//!
//! The folder is read exactly once. Entries are sorted by the raw bytes of
//! their file names (so `img10.png` sorts before `img2.png`) and only regular
//! files are kept; the walk is not recursive.

use crate::error::Images2PdfError;
use image::ImageFormat;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extensions accepted by the filter, compared case-sensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "tiff", "bmp"];

/// A regular file found directly inside the input folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub file_name: OsString,
    pub path: PathBuf,
}

impl FileEntry {
    /// File name for logs and reports; lossy on non-UTF-8 names.
    pub fn display_name(&self) -> String {
        self.file_name.to_string_lossy().into_owned()
    }

    /// Codec for this entry, or `None` if its extension is not supported.
    pub fn image_format(&self) -> Option<ImageFormat> {
        self.file_name.to_str().and_then(image_format_for)
    }
}

/// Everything after the last `.` of a file name.
///
/// Unlike [`Path::extension`], a leading dot counts: `.png` has extension `png`.
pub fn extension_of(file_name: &str) -> Option<&str> {
    file_name.rfind('.').map(|i| &file_name[i + 1..])
}

/// Map a file name to its codec. Only lowercase [`SUPPORTED_EXTENSIONS`] match.
pub fn image_format_for(file_name: &str) -> Option<ImageFormat> {
    match extension_of(file_name)? {
        "png" => Some(ImageFormat::Png),
        "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
        "gif" => Some(ImageFormat::Gif),
        "tiff" => Some(ImageFormat::Tiff),
        "bmp" => Some(ImageFormat::Bmp),
        _ => None,
    }
}

/// List the regular files of `dir`, sorted byte-wise by name.
///
/// Any failure to open the folder or to read one of its entries is fatal.
pub fn list_files(dir: &Path) -> Result<Vec<FileEntry>, Images2PdfError> {
    if !dir.exists() {
        return Err(Images2PdfError::InputNotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(Images2PdfError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let read_err = |source| Images2PdfError::ReadDirFailed {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        // Follow symlinks so a linked image still counts as a file.
        let is_file = std::fs::metadata(&path)
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            debug!("skipping non-file entry: {}", path.display());
            continue;
        }
        files.push(FileEntry {
            file_name: entry.file_name(),
            path,
        });
    }

    files.sort_by(|a, b| {
        a.file_name
            .as_encoded_bytes()
            .cmp(b.file_name.as_encoded_bytes())
    });

    debug!("Listed {} files in {}", files.len(), dir.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("a.png"), Some("png"));
        assert_eq!(extension_of("archive.tar.gz"), Some("gz"));
        assert_eq!(extension_of(".png"), Some("png"));
        assert_eq!(extension_of("trailing."), Some(""));
        assert_eq!(extension_of("README"), None);
    }

    #[test]
    fn test_extension_filter() {
        for name in ["a.png", "b.jpg", "c.jpeg", "d.gif", "e.tiff", "f.bmp"] {
            assert!(image_format_for(name).is_some(), "{name} should be accepted");
        }
        for name in ["a.PNG", "b.Jpg", "c.tif", "d.webp", "notes.txt", "png", ""] {
            assert!(image_format_for(name).is_none(), "{name} should be rejected");
        }
    }

    #[test]
    fn test_image_format_for() {
        assert_eq!(image_format_for("x.jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(image_format_for("x.jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(image_format_for("x.tiff"), Some(ImageFormat::Tiff));
        assert_eq!(image_format_for("x.bmp"), Some(ImageFormat::Bmp));
        assert_eq!(image_format_for("x.gif"), Some(ImageFormat::Gif));
        assert_eq!(image_format_for("x.txt"), None);
    }

    #[test]
    fn list_files_sorts_bytewise_and_skips_dirs() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["img2.png", "img10.png", "B.png", "a.png"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();

        let names: Vec<String> = list_files(dir.path())
            .unwrap()
            .iter()
            .map(FileEntry::display_name)
            .collect();
        assert_eq!(names, vec!["B.png", "a.png", "img10.png", "img2.png"]);
    }

    #[test]
    fn list_files_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            list_files(&missing),
            Err(Images2PdfError::InputNotFound { .. })
        ));
    }

    #[test]
    fn list_files_on_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.png");
        std::fs::write(&file, b"x").unwrap();
        assert!(matches!(
            list_files(&file),
            Err(Images2PdfError::NotADirectory { .. })
        ));
    }
}
