use lazy_static::lazy_static;
use regex::Regex;

use crate::core::model::{VocabEntry, MEANING_PLACEHOLDER};
use crate::core::script;
use crate::extract::normalize::normalize_meaning;
use crate::extract::{parse_number, Matcher};

lazy_static! {
    static ref FULL_LINE: Regex =
        Regex::new(r"^(\d+)\s*[□☐\[\]O]?\s*([a-zA-Z][a-zA-Z\-]*)\s+(.+)$").unwrap();
    static ref NUM_WORD_ONLY: Regex =
        Regex::new(r"^(\d+)\s*[□☐\[\]O]?\s*([a-zA-Z][a-zA-Z\-]*)$").unwrap();
    static ref BARE_WORD: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z\-]*$").unwrap();
}

/// Fallback of last resort: a stateful accumulator over trimmed non-empty
/// lines, carrying a pending number and word until a meaning turns up.
///
/// Unlike the stricter matchers it never discards a detected word. A word
/// flushed without a meaning gets the placeholder sentinel, and a word
/// that never saw a number gets the next free list position.
#[derive(Debug, Default)]
pub struct LineScanner;

struct ScanState {
    entries: Vec<VocabEntry>,
    pending_number: Option<u32>,
    pending_word: Option<String>,
}

impl ScanState {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            pending_number: None,
            pending_word: None,
        }
    }

    fn save(&mut self, number: Option<u32>, word: String, meaning: String) {
        let number = number.unwrap_or(self.entries.len() as u32 + 1);
        let meaning = if meaning.is_empty() {
            MEANING_PLACEHOLDER.to_string()
        } else {
            meaning
        };
        self.entries.push(VocabEntry::new(number, word, meaning));
    }

    fn flush_pending(&mut self) {
        if let Some(word) = self.pending_word.take() {
            let number = self.pending_number.take();
            self.save(number, word, String::new());
        }
    }
}

impl Matcher for LineScanner {
    fn name(&self) -> &'static str {
        "line-scan"
    }

    fn attempt(&self, text: &str) -> Vec<VocabEntry> {
        let mut state = ScanState::new();

        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            // Number, word and meaning all on one line.
            if let Some(caps) = FULL_LINE.captures(line) {
                let meaning = normalize_meaning(&caps[3]);
                if script::has_hangul(&meaning) {
                    let number = parse_number(&caps[1], state.entries.len() + 1);
                    state.save(Some(number), caps[2].to_string(), meaning);
                    state.pending_number = None;
                    state.pending_word = None;
                    continue;
                }
            }

            // Number and word, meaning still to come.
            if let Some(caps) = NUM_WORD_ONLY.captures(line) {
                state.flush_pending();
                state.pending_number = Some(parse_number(&caps[1], state.entries.len() + 1));
                state.pending_word = Some(caps[2].to_string());
                continue;
            }

            // Meaning line completing a pending word.
            if script::has_hangul(line) && state.pending_word.is_some() {
                let meaning = normalize_meaning(line);
                let word = state.pending_word.take().unwrap();
                let number = state.pending_number.take();
                state.save(number, word, meaning);
                continue;
            }

            // A word on its own, no number attached.
            if BARE_WORD.is_match(line) {
                state.flush_pending();
                state.pending_word = Some(line.to_string());
                continue;
            }
        }

        state.flush_pending();
        state.entries
    }
}
