pub mod block_table;
pub mod delimited;
pub mod line_scan;
pub mod normalize;
pub mod one_line;
pub mod two_line;

pub use block_table::BlockTableMatcher;
pub use line_scan::LineScanner;
pub use one_line::OneLineMatcher;
pub use two_line::TwoLineMatcher;

use crate::core::model::VocabEntry;
use crate::merge;

/// A single extraction strategy: pure function from raw text to candidate
/// entries. Finding nothing is not an error; the cascade just moves on.
pub trait Matcher {
    fn name(&self) -> &'static str;
    fn attempt(&self, text: &str) -> Vec<VocabEntry>;
}

/// Ordered list of strategies tried until one yields entries.
///
/// This is a precedence policy, not a pick-best policy: the first strategy
/// with a non-empty result wins and the rest are never attempted. Only the
/// final scanner is exhaustive.
pub struct ParseCascade {
    strategies: Vec<Box<dyn Matcher>>,
}

impl ParseCascade {
    /// Default order for OCR text, most noise-tolerant first: the two-line
    /// matcher, then the one-line pattern, then the stateful line scanner.
    pub fn new() -> Self {
        Self::with_strategies(vec![
            Box::new(TwoLineMatcher),
            Box::new(OneLineMatcher),
            Box::new(LineScanner),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn Matcher>>) -> Self {
        Self { strategies }
    }

    pub fn extract(&self, text: &str) -> Vec<VocabEntry> {
        for strategy in &self.strategies {
            let found = strategy.attempt(text);
            if !found.is_empty() {
                return found;
            }
        }
        Vec::new()
    }
}

impl Default for ParseCascade {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry point for text from direct extraction rather than OCR.
///
/// The boundary-based table matcher reads clean blobs best, so it runs
/// ahead of the OCR-tolerant cascade; the delimited line schemas are the
/// final fallback. The result is sorted and deduplicated by number.
pub fn extract_entries(text: &str) -> Vec<VocabEntry> {
    let cascade = ParseCascade::with_strategies(vec![
        Box::new(BlockTableMatcher),
        Box::new(TwoLineMatcher),
        Box::new(OneLineMatcher),
        Box::new(LineScanner),
    ]);
    let mut entries = cascade.extract(text);
    if entries.is_empty() {
        entries = delimited::parse_delimited(text);
    }
    merge::merge([entries])
}

/// Recovers a sequence number from a matched token. Tokens that fail to
/// parse (OCR noise, overflow) take the caller's positional fallback.
pub(crate) fn parse_number(token: &str, fallback: usize) -> u32 {
    token.parse().unwrap_or(fallback as u32)
}
