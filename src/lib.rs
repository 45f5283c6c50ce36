pub mod core;
pub mod export;
pub mod extract;
pub mod merge;
pub mod ocr;
pub mod pipeline;
pub mod vision;

pub use crate::core::model::{Column, PassOrigin, VocabEntry, MEANING_PLACEHOLDER};
pub use crate::extract::{extract_entries, ParseCascade};
pub use crate::merge::{merge, merge_tagged, CandidateList};
pub use crate::pipeline::{PageScanner, ScanConfig};
