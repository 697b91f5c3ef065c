// SPDX-License-Identifier: MPL-2.0
//! Image selection and decoding for composer previews.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

/// Image file extensions offered by the photo picker.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// A decoded image ready to become a preview.
///
/// Decoding happens off the update loop; the result is only turned into a
/// tracked [`PreviewHandle`](super::preview::PreviewHandle) once the
/// composer accepts it.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// File the image was read from.
    pub source: PathBuf,
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl DecodedImage {
    /// Creates a decoded image from raw RGBA pixels.
    #[must_use]
    pub fn from_rgba(source: PathBuf, width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            source,
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decodes an image file into RGBA pixels.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`] if
/// its content is not a supported image.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<DecodedImage> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let img = image_rs::load_from_memory(&bytes)?;

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Image("image has empty dimensions".into()));
    }

    let pixels = img.to_rgba8().into_vec();
    Ok(DecodedImage::from_rgba(path.to_path_buf(), width, height, pixels))
}

/// Opens the native photo picker and decodes the chosen file on a
/// blocking worker thread.
///
/// Returns `Ok(None)` when the user cancels the dialog.
pub async fn pick_image(start_dir: Option<PathBuf>) -> Result<Option<DecodedImage>> {
    let mut dialog = rfd::AsyncFileDialog::new().add_filter("Images", IMAGE_EXTENSIONS);

    if let Some(dir) = start_dir {
        if dir.exists() {
            dialog = dialog.set_directory(&dir);
        }
    }

    let Some(file) = dialog.pick_file().await else {
        return Ok(None);
    };

    // Decoding is CPU-bound; keep it off the async executor.
    let path = file.path().to_path_buf();
    tokio::task::spawn_blocking(move || decode_image(path))
        .await
        .map_err(|err| Error::Io(format!("decode task failed: {err}")))?
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn decode_image_reads_png_dimensions() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("photo.png");
        RgbaImage::from_pixel(3, 2, Rgba([0, 128, 0, 255]))
            .save(&path)
            .expect("write png");

        let decoded = decode_image(&path).expect("decode");

        assert_eq!(decoded.width, 3);
        assert_eq!(decoded.height, 2);
        assert_eq!(decoded.source, path);
    }

    #[test]
    fn decode_image_rejects_non_image_content() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("notes.png");
        fs::write(&path, b"definitely not a png").expect("write file");

        let err = decode_image(&path).expect_err("should fail");
        assert!(matches!(err, Error::Image(_)));
    }

    #[test]
    fn decode_image_reports_missing_file_as_io() {
        let temp_dir = tempdir().expect("temp dir");
        let err = decode_image(temp_dir.path().join("missing.png")).expect_err("should fail");
        assert!(matches!(err, Error::Io(_)));
    }
}
