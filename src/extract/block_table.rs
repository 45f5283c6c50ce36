use lazy_static::lazy_static;
use regex::Regex;

use crate::core::model::VocabEntry;
use crate::extract::normalize::{extract_pos_tags, normalize_meaning};
use crate::extract::{parse_number, Matcher};

lazy_static! {
    // Record head: "51 □ empty", "51 [ ] empty", "51 O empty", "51 empty"
    static ref RECORD_HEAD: Regex =
        Regex::new(r"(\d+)\s*[□☐\[\]O]?\s*([a-zA-Z][a-zA-Z\-]*)").unwrap();
}

/// Matches the whole text as a run of records delimited by number+checkbox
/// heads. Everything between one head and the next is that record's
/// trailing content: part-of-speech tags and the meaning, newlines and all.
///
/// Best on clean, directly-extracted text; random line breaks inside a
/// record do not bother it, but OCR tends to mangle the heads themselves,
/// which is what the line-oriented cascade is for.
#[derive(Debug, Default)]
pub struct BlockTableMatcher;

impl Matcher for BlockTableMatcher {
    fn name(&self) -> &'static str {
        "block-table"
    }

    fn attempt(&self, text: &str) -> Vec<VocabEntry> {
        // The next head bounds the current record, which classic regex
        // lookahead would express; the regex crate has none, so the heads
        // are located first and the gaps between them sliced out.
        let heads: Vec<(usize, usize, &str, &str)> = RECORD_HEAD
            .captures_iter(text)
            .map(|caps| {
                let whole = caps.get(0).unwrap();
                (
                    whole.start(),
                    whole.end(),
                    caps.get(1).unwrap().as_str(),
                    caps.get(2).unwrap().as_str(),
                )
            })
            .collect();

        let mut entries = Vec::new();
        for (idx, &(_, content_start, number_token, word)) in heads.iter().enumerate() {
            let content_end = heads
                .get(idx + 1)
                .map(|next| next.0)
                .unwrap_or_else(|| text.len());
            let trailing = &text[content_start..content_end];

            let meaning = normalize_meaning(trailing);
            if word.is_empty() || meaning.is_empty() {
                continue;
            }
            entries.push(VocabEntry {
                number: parse_number(number_token, entries.len() + 1),
                word: word.to_string(),
                meaning,
                pos: extract_pos_tags(trailing),
            });
        }
        entries
    }
}
