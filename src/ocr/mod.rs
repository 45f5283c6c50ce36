pub mod bridge;

pub use bridge::TesseractBridge;

use image::DynamicImage;
use thiserror::Error;

/// Collaborator failures at the image/recognition boundary. Parsing never
/// produces these; a matcher that finds nothing is simply empty-handed.
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("could not decode page image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("recognition engine failed: {0}")]
    Engine(String),
    #[error("recognition I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// External text-recognition engine.
///
/// The core treats recognition as an opaque, possibly slow, possibly
/// failing call: empty text is a valid result, and retry or backoff
/// policy belongs to the caller, never here.
pub trait OcrEngine {
    /// Recognize text in the image.
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError>;

    /// Rotation estimate in degrees for engines with orientation
    /// detection. `None` sends the orientation corrector to its scoring
    /// heuristic instead.
    fn detect_rotation(&self, _image: &DynamicImage) -> Result<Option<i32>, OcrError> {
        Ok(None)
    }
}
