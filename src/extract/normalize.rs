/// Meaning-string cleanup shared by every matcher: part-of-speech markers
/// stripped or rewritten, whitespace collapsed, decomposed jamo composed.
use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref LEADING_POS: Regex = Regex::new(r"^(?:ad|[avn])\.\s*").unwrap();
    static ref INTERIOR_POS: Regex = Regex::new(r"\s+(?:ad|[avn])\.\s*").unwrap();
    static ref POS_TAG: Regex = Regex::new(r"\b(ad|[avn])\.\s*").unwrap();
}

/// Normalizes a raw meaning string.
///
/// Leading part-of-speech markers are removed; interior markers separate
/// additional senses on the same line, so each becomes `", "`. Runs of
/// whitespace (including newlines) collapse to single spaces. Interior
/// replacement runs to a fixed point, which makes the whole function
/// idempotent. Script validity is not checked here; that is the matchers'
/// call.
pub fn normalize_meaning(raw: &str) -> String {
    let composed: String = raw.nfc().collect();
    let mut text = composed.trim().to_string();

    loop {
        let end = match LEADING_POS.find(&text) {
            Some(found) => found.end(),
            None => break,
        };
        text.drain(..end);
    }
    loop {
        let next = INTERIOR_POS.replace_all(&text, ", ").into_owned();
        if next == text {
            break;
        }
        text = next;
    }

    collapse_whitespace(&text)
}

/// Collects the part-of-speech tags present in a raw meaning, joined with
/// `", "` when a record carries several senses. None if the text has no tag.
pub fn extract_pos_tags(raw: &str) -> Option<String> {
    let tags: Vec<&str> = POS_TAG
        .captures_iter(raw)
        .map(|caps| caps.get(1).unwrap().as_str())
        .collect();
    if tags.is_empty() {
        None
    } else {
        Some(tags.join(", "))
    }
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
