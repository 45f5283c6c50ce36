use image::DynamicImage;

use crate::core::model::{Column, PassOrigin, VocabEntry};
use crate::extract::ParseCascade;
use crate::merge::{merge_tagged, CandidateList};
use crate::ocr::{OcrEngine, OcrError};
use crate::vision::{self, OrientationCorrector, Rotation};

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub rotation: Rotation,
    /// Recognize left/right halves separately (two-column tables).
    pub split_columns: bool,
    /// Grayscale + threshold before recognition.
    pub binarize: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            rotation: Rotation::Auto,
            split_columns: true,
            binarize: true,
        }
    }
}

/// Drives one page image through the full extraction flow: decode,
/// upscale, orientation correction, binarization, column split, one
/// recognition pass per crop, and the parse cascade per pass.
///
/// Pages carry no data dependencies on each other, so callers may scan
/// them concurrently; the origin tags on the returned lists let
/// `merge_tagged` produce the same final list no matter the completion
/// order.
pub struct PageScanner<'a> {
    engine: &'a dyn OcrEngine,
    cascade: ParseCascade,
    config: ScanConfig,
}

impl<'a> PageScanner<'a> {
    pub fn new(engine: &'a dyn OcrEngine, config: ScanConfig) -> Self {
        Self {
            engine,
            cascade: ParseCascade::new(),
            config,
        }
    }

    /// Scan one page from raw image bytes.
    pub fn scan_page(&self, page: usize, bytes: &[u8]) -> Result<Vec<CandidateList>, OcrError> {
        let image = vision::decode_page(bytes)?;
        self.scan_decoded(page, image)
    }

    /// Scan one page that is already decoded.
    pub fn scan_decoded(
        &self,
        page: usize,
        image: DynamicImage,
    ) -> Result<Vec<CandidateList>, OcrError> {
        let image = vision::upscale_small(image);
        let corrector = OrientationCorrector::new(self.engine);
        let image = corrector.correct(image, self.config.rotation)?;
        let image = if self.config.binarize {
            vision::binarize(&image)
        } else {
            image
        };

        let mut lists = Vec::new();
        if self.config.split_columns {
            let (left, right) = vision::split_columns(&image);
            for (column, half) in [(Column::Left, left), (Column::Right, right)] {
                lists.push(self.recognize_crop(page, column, &half)?);
            }
        } else {
            lists.push(self.recognize_crop(page, Column::Full, &image)?);
        }
        Ok(lists)
    }

    /// Scan a whole document sequentially and merge the passes. An empty
    /// result is a valid outcome, not an error: it tells the caller to
    /// try another source.
    pub fn scan_pages(&self, pages: &[Vec<u8>]) -> Result<Vec<VocabEntry>, OcrError> {
        let mut lists = Vec::new();
        for (page, bytes) in pages.iter().enumerate() {
            lists.extend(self.scan_page(page, bytes)?);
        }
        Ok(merge_tagged(lists))
    }

    fn recognize_crop(
        &self,
        page: usize,
        column: Column,
        crop: &DynamicImage,
    ) -> Result<CandidateList, OcrError> {
        let text = self.engine.recognize(crop)?;
        Ok(CandidateList::new(
            PassOrigin::new(page, column),
            self.cascade.extract(&text),
        ))
    }
}
