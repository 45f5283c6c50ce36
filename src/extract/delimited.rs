use crate::core::model::VocabEntry;

/// Line-oriented fallback for prepared files rather than page text.
///
/// Two schemas per line: `number,word,meaning` and `word,meaning`. The
/// meaning keeps any further commas. A number that fails to parse, or the
/// two-field schema, takes the 1-based line index. Blank lines and `#`
/// comments are ignored but still count toward line numbering.
pub fn parse_delimited(text: &str) -> Vec<VocabEntry> {
    let mut entries = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_number = (idx + 1) as u32;
        let fields: Vec<&str> = line.splitn(3, ',').collect();
        let (number, word, meaning) = match fields.as_slice() {
            [number, word, meaning] => {
                (number.trim().parse().unwrap_or(line_number), *word, *meaning)
            }
            [word, meaning] => (line_number, *word, *meaning),
            _ => continue,
        };

        let word = word.trim();
        let meaning = meaning.trim();
        if !word.is_empty() && !meaning.is_empty() {
            entries.push(VocabEntry::new(number, word, meaning));
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_field_schema() {
        let entries = parse_delimited("1,apple,사과\n2,banana,바나나\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].number, 1);
        assert_eq!(entries[0].word, "apple");
        assert_eq!(entries[0].meaning, "사과");
    }

    #[test]
    fn two_field_schema_numbers_by_line() {
        let entries = parse_delimited("apple,사과\n\nbanana,바나나\n");
        assert_eq!(entries[0].number, 1);
        assert_eq!(entries[1].number, 3);
    }

    #[test]
    fn malformed_number_takes_line_index() {
        let entries = parse_delimited("one,apple,사과");
        assert_eq!(entries[0].number, 1);
        assert_eq!(entries[0].word, "apple");
    }

    #[test]
    fn skips_comments_and_single_fields() {
        let entries = parse_delimited("# 단어장\nword-without-meaning\n3,grape,포도");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].number, 3);
    }

    #[test]
    fn meaning_keeps_embedded_commas() {
        let entries = parse_delimited("2,breath,숨, 호흡");
        assert_eq!(entries[0].meaning, "숨, 호흡");
    }
}
