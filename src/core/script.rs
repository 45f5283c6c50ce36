use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ALPHA_TOKEN: Regex = Regex::new(r"\b[a-zA-Z]{2,}\b").unwrap();
}

/// True if the text contains any Hangul. Syllable blocks count, and so do
/// bare jamo ranges, since OCR of low-quality scans emits decomposed jamo.
pub fn has_hangul(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(
            c as u32,
            0xAC00..=0xD7A3 | // Hangul Syllables
            0x1100..=0x11FF | // Hangul Jamo
            0x3130..=0x318F | // Hangul Compatibility Jamo
            0xA960..=0xA97F | // Hangul Jamo Extended-A
            0xD7B0..=0xD7FF   // Hangul Jamo Extended-B
        )
    })
}

/// Number of alphabetic tokens of two or more letters. Used as the
/// recognition-quality score by the orientation heuristic.
pub fn alpha_token_count(text: &str) -> usize {
    ALPHA_TOKEN.find_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_hangul_syllables_and_jamo() {
        assert!(has_hangul("치료하다"));
        assert!(has_hangul("ㅅㅏㄱㅘ"));
        assert!(!has_hangul("heal (up)"));
        assert!(!has_hangul("301 ..."));
    }

    #[test]
    fn counts_multi_letter_tokens_only() {
        assert_eq!(alpha_token_count("a heal of 3 words"), 3);
        assert_eq!(alpha_token_count("ㅂ ㅈ ㄷ"), 0);
        assert_eq!(alpha_token_count(""), 0);
    }
}
