use lazy_static::lazy_static;
use regex::Regex;

use crate::core::model::VocabEntry;
use crate::core::script;
use crate::extract::normalize::{extract_pos_tags, normalize_meaning};
use crate::extract::{parse_number, Matcher};

lazy_static! {
    // "51 □ empty", "51 O empty", "51 empty"
    static ref NUM_WORD: Regex =
        Regex::new(r"^(\d+)\s*[O□☐\[\]o]?\s*([a-zA-Z][a-zA-Z\-]*)").unwrap();
}

/// Number and word on one line, meaning on the next.
///
/// The noise-tolerant first stage of the cascade: OCR of table scans
/// usually splits each record across two lines, with the part-of-speech
/// tag leading the meaning line. When the following line carries no
/// Hangul, the remainder of the word line itself is checked before the
/// record is given up on.
#[derive(Debug, Default)]
pub struct TwoLineMatcher;

impl Matcher for TwoLineMatcher {
    fn name(&self) -> &'static str {
        "two-line"
    }

    fn attempt(&self, text: &str) -> Vec<VocabEntry> {
        let mut entries = Vec::new();
        let lines: Vec<&str> = text.lines().map(str::trim).collect();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];
            if let Some(caps) = NUM_WORD.captures(line) {
                let number = parse_number(&caps[1], entries.len() + 1);
                let word = caps[2].to_string();

                let mut meaning = String::new();
                let mut pos = None;
                if i + 1 < lines.len() && script::has_hangul(lines[i + 1]) {
                    meaning = normalize_meaning(lines[i + 1]);
                    pos = extract_pos_tags(lines[i + 1]);
                    i += 1;
                }

                // Same-line meaning: "51 O empty a. 비어 있는"
                if meaning.is_empty() {
                    let rest = line[caps.get(0).unwrap().end()..].trim();
                    if script::has_hangul(rest) {
                        meaning = normalize_meaning(rest);
                        pos = extract_pos_tags(rest);
                    }
                }

                if word.len() > 1 && !meaning.is_empty() {
                    entries.push(VocabEntry {
                        number,
                        word,
                        meaning,
                        pos,
                    });
                }
            }
            i += 1;
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pairs_word_line_with_meaning_line() {
        let entries = TwoLineMatcher.attempt("51 □ empty\na. 비어 있는\n");
        assert_eq!(
            entries,
            vec![VocabEntry {
                number: 51,
                word: "empty".to_string(),
                meaning: "비어 있는".to_string(),
                pos: Some("a".to_string()),
            }]
        );
    }

    #[test]
    fn accepts_meaning_on_the_same_line() {
        let entries = TwoLineMatcher.attempt("52 O vacant 텅 빈\nnoise line\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].meaning, "텅 빈");
        assert_eq!(entries[0].pos, None);
    }

    #[test]
    fn skips_records_without_any_meaning() {
        assert!(TwoLineMatcher.attempt("53 □ hollow\nno hangul here\n").is_empty());
    }

    #[test]
    fn skips_single_letter_words() {
        assert!(TwoLineMatcher.attempt("54 a\n가나다\n").is_empty());
    }
}
