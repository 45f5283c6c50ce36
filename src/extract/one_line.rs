use lazy_static::lazy_static;
use regex::Regex;

use crate::core::model::VocabEntry;
use crate::extract::normalize::{extract_pos_tags, normalize_meaning};
use crate::extract::{parse_number, Matcher};

lazy_static! {
    // "301 heal v. 치료하다", with an optional parenthetical after the word
    static ref ONE_LINE: Regex = Regex::new(
        r"(\d+)\s*[□☐\[\]O]?\s*([a-zA-Z][a-zA-Z\-]*(?:\s*\([^)]+\))?)\s+((?:ad|[avn])\.\s*[가-힣][^\n]*)",
    )
    .unwrap();
}

/// Whole record on a single line: number, word, part-of-speech tag,
/// meaning. High precision but easy to under-match (a record whose tag
/// the OCR dropped is invisible to it), so the cascade tries it after
/// the two-line pattern.
#[derive(Debug, Default)]
pub struct OneLineMatcher;

impl Matcher for OneLineMatcher {
    fn name(&self) -> &'static str {
        "one-line"
    }

    fn attempt(&self, text: &str) -> Vec<VocabEntry> {
        let mut entries = Vec::new();
        for caps in ONE_LINE.captures_iter(text) {
            let number = parse_number(&caps[1], entries.len() + 1);
            let word = caps[2].trim().to_string();
            let raw_meaning = &caps[3];
            let meaning = normalize_meaning(raw_meaning);
            if !word.is_empty() && !meaning.is_empty() {
                entries.push(VocabEntry {
                    number,
                    word,
                    meaning,
                    pos: extract_pos_tags(raw_meaning),
                });
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_single_line_record() {
        let entries = OneLineMatcher.attempt("301 heal v. 치료하다");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].number, 301);
        assert_eq!(entries[0].word, "heal");
        assert_eq!(entries[0].meaning, "치료하다");
    }

    #[test]
    fn keeps_word_parentheticals() {
        let entries = OneLineMatcher.attempt("302 break (down) v. 고장나다");
        assert_eq!(entries[0].word, "break (down)");
    }

    #[test]
    fn requires_a_pos_tag_before_the_meaning() {
        assert!(OneLineMatcher.attempt("301 heal 치료하다").is_empty());
    }

    #[test]
    fn collects_every_record_in_the_blob() {
        let text = "301 heal v. 치료하다\n302 breath n. 숨 n. 호흡";
        let entries = OneLineMatcher.attempt(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].meaning, "숨, 호흡");
        assert_eq!(entries[1].pos.as_deref(), Some("n, n"));
    }
}
