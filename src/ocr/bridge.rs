use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::sync::atomic::{AtomicU64, Ordering};

use image::DynamicImage;

use crate::ocr::{OcrEngine, OcrError};

static INPUT_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Bridge to the tesseract CLI.
///
/// Images are written to the work directory as PNG and recognized with
/// `tesseract <image> stdout -l <lang> --psm <psm>`. PSM 6 (single
/// uniform block) reads vocabulary-table crops best. Orientation
/// estimates come from the OSD mode (`--psm 0`), parsed from its
/// `Rotate:` line; OSD trouble degrades to "no estimate" rather than an
/// error, since the corrector has its own fallback.
#[derive(Debug, Clone)]
pub struct TesseractBridge {
    work_dir: PathBuf,
    lang: String,
    psm: u8,
}

impl TesseractBridge {
    pub fn new(work_dir: PathBuf) -> Self {
        Self {
            work_dir,
            lang: "eng+kor".to_string(),
            psm: 6,
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_psm(mut self, psm: u8) -> Self {
        self.psm = psm;
        self
    }

    fn write_input(&self, image: &DynamicImage) -> Result<PathBuf, OcrError> {
        fs::create_dir_all(&self.work_dir)?;
        let seq = INPUT_COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = self
            .work_dir
            .join(format!("ocr-input-{}-{seq}.png", std::process::id()));
        image
            .save(&path)
            .map_err(|e| OcrError::Engine(format!("failed to write recognition input: {e}")))?;
        Ok(path)
    }

    fn run_tesseract(&self, image: &DynamicImage, extra: &[&str]) -> Result<String, OcrError> {
        let path = self.write_input(image)?;
        let output = Command::new("tesseract")
            .arg(&path)
            .arg("stdout")
            .args(extra)
            .output();
        let _ = fs::remove_file(&path);

        let output = output?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Engine(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl OcrEngine for TesseractBridge {
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let psm = self.psm.to_string();
        self.run_tesseract(image, &["-l", &self.lang, "--psm", &psm])
    }

    fn detect_rotation(&self, image: &DynamicImage) -> Result<Option<i32>, OcrError> {
        match self.run_tesseract(image, &["--psm", "0"]) {
            Ok(osd) => Ok(parse_osd_rotation(&osd)),
            // OSD needs its own traineddata and fails on short text; the
            // heuristic fallback covers those cases.
            Err(OcrError::Engine(_)) => Ok(None),
            Err(other) => Err(other),
        }
    }
}

fn parse_osd_rotation(osd: &str) -> Option<i32> {
    osd.lines().find_map(|line| {
        let rest = line.trim().strip_prefix("Rotate:")?;
        rest.trim().parse().ok()
    })
}
