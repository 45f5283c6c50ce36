pub mod orient;
pub mod split;

pub use orient::{OrientationCorrector, Rotation};
pub use split::split_columns;

use std::io::Cursor;

use image::{DynamicImage, GenericImageView, GrayImage, ImageReader};

use crate::ocr::OcrError;

/// Pixels above this luma value become white, the rest black.
const BINARIZE_THRESHOLD: u8 = 180;

/// Images narrower than this are upscaled before recognition.
const MIN_RECOGNITION_WIDTH: u32 = 2000;

/// Decodes raw page-image bytes. Undecodable input is a hard failure with
/// a decode error kind, never silently reinterpreted.
pub fn decode_page(bytes: &[u8]) -> Result<DynamicImage, OcrError> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()
        .map_err(OcrError::Decode)
}

/// Grayscale plus hard threshold. Scanned tables recognize noticeably
/// better as clean black-on-white.
pub fn binarize(image: &DynamicImage) -> DynamicImage {
    let gray = image.to_luma8();
    let (width, height) = gray.dimensions();
    let binary = GrayImage::from_fn(width, height, |x, y| {
        if gray.get_pixel(x, y).0[0] > BINARIZE_THRESHOLD {
            image::Luma([255])
        } else {
            image::Luma([0])
        }
    });
    DynamicImage::ImageLuma8(binary)
}

/// Lanczos upscale for small photos; full-resolution page scans pass
/// through untouched.
pub fn upscale_small(image: DynamicImage) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    if width >= MIN_RECOGNITION_WIDTH {
        return image;
    }
    let scale = MIN_RECOGNITION_WIDTH as f32 / width as f32;
    let new_height = (height as f32 * scale) as u32;
    image.resize_exact(
        MIN_RECOGNITION_WIDTH,
        new_height.max(1),
        image::imageops::FilterType::Lanczos3,
    )
}
