use image::DynamicImage;

use crate::core::script;
use crate::ocr::{OcrEngine, OcrError};

/// Side length of the downsampled probe used by the scoring heuristic.
const PROBE_MAX_DIM: u32 = 800;

/// The flipped probe must beat the upright one by this factor before the
/// page is rotated.
const FLIP_RATIO: f32 = 1.5;

/// Rotation hint for a page image. `Auto` asks the corrector to decide;
/// the fixed variants are the angle the page is known to be off by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Auto,
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

/// Decides whether a scanned page must be rotated before recognition.
///
/// A fixed hint always wins. In auto mode the engine's own orientation
/// detection is consulted first; without it, the page is recognized
/// downsampled both as-is and flipped 180°, and the side with clearly
/// more alphabetic tokens wins. Upside-down pages that slip past the
/// ratio are a known limitation, not an error.
pub struct OrientationCorrector<'a> {
    engine: &'a dyn OcrEngine,
}

impl<'a> OrientationCorrector<'a> {
    pub fn new(engine: &'a dyn OcrEngine) -> Self {
        Self { engine }
    }

    pub fn correct(&self, image: DynamicImage, hint: Rotation) -> Result<DynamicImage, OcrError> {
        match hint {
            Rotation::Deg0 => Ok(image),
            Rotation::Deg90 => Ok(image.rotate90()),
            Rotation::Deg180 => Ok(image.rotate180()),
            Rotation::Deg270 => Ok(image.rotate270()),
            Rotation::Auto => self.auto_correct(image),
        }
    }

    fn auto_correct(&self, image: DynamicImage) -> Result<DynamicImage, OcrError> {
        match self.engine.detect_rotation(&image) {
            Ok(Some(0)) => return Ok(image),
            Ok(Some(degrees)) => return Ok(undo_rotation(image, degrees)),
            Ok(None) | Err(_) => {}
        }

        let probe = image.thumbnail(PROBE_MAX_DIM, PROBE_MAX_DIM);
        let upright = match self.engine.recognize(&probe) {
            Ok(text) => script::alpha_token_count(&text),
            Err(_) => return Ok(image),
        };
        let flipped = match self.engine.recognize(&probe.rotate180()) {
            Ok(text) => script::alpha_token_count(&text),
            Err(_) => return Ok(image),
        };

        if flipped as f32 > upright as f32 * FLIP_RATIO {
            Ok(image.rotate180())
        } else {
            Ok(image)
        }
    }
}

/// Rotates clockwise by the engine-reported skew, bringing the page
/// upright. Estimates come back in right-angle steps.
fn undo_rotation(image: DynamicImage, degrees: i32) -> DynamicImage {
    match degrees.rem_euclid(360) {
        90 => image.rotate90(),
        180 => image.rotate180(),
        270 => image.rotate270(),
        _ => image,
    }
}
