use serde::{Deserialize, Serialize};

/// Placeholder meaning for words the stateful scanner detected but could
/// not pair with any native-script line. Entries carrying it are meant to
/// be fixed up manually, not discarded.
pub const MEANING_PLACEHOLDER: &str = "[뜻 입력 필요]";

/// A single vocabulary entry: display number, English word, Korean meaning
/// and an advisory part-of-speech tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VocabEntry {
    pub number: u32,
    pub word: String,
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
}

impl VocabEntry {
    pub fn new(number: u32, word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            number,
            word: word.into(),
            meaning: meaning.into(),
            pos: None,
        }
    }

    /// True if the meaning is the scanner's not-found sentinel.
    pub fn needs_meaning(&self) -> bool {
        self.meaning == MEANING_PLACEHOLDER
    }
}

/// Which crop of the page a recognition pass ran on.
///
/// Ordering matters: merged output must be deterministic, and the left
/// column of a two-column table precedes the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Full,
    Left,
    Right,
}

/// Identifies where a candidate list came from. The derived ordering
/// (page, then column, then pass) is the deterministic processing order
/// the merger restores before deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PassOrigin {
    pub page: usize,
    pub column: Column,
    pub pass: u32,
}

impl PassOrigin {
    pub fn new(page: usize, column: Column) -> Self {
        Self {
            page,
            column,
            pass: 0,
        }
    }
}
