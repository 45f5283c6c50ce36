use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::core::model::VocabEntry;
use crate::export::Exporter;

/// Writes `vocab.csv` in the `number,word,meaning` line schema, so an
/// exported list loads straight back through the delimited fallback.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    out_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }
}

impl Exporter for CsvExporter {
    fn export(&self, entries: &[VocabEntry]) -> Result<()> {
        fs::create_dir_all(&self.out_dir)?;
        let mut lines = String::new();
        for entry in entries {
            lines.push_str(&format!("{},{},{}\n", entry.number, entry.word, entry.meaning));
        }
        fs::write(self.out_dir.join("vocab.csv"), lines)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::delimited::parse_delimited;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn exported_file_reloads_through_the_delimited_schema() -> Result<()> {
        let mut out = std::env::temp_dir();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis();
        out.push(format!("vocascan-csv-{}-{now}", std::process::id()));

        let entries = vec![
            VocabEntry::new(1, "apple", "사과"),
            VocabEntry::new(2, "breath", "숨, 호흡"),
        ];
        CsvExporter::new(out.clone()).export(&entries)?;

        let written = fs::read_to_string(out.join("vocab.csv"))?;
        let reloaded = parse_delimited(&written);
        assert_eq!(reloaded, entries);

        let _ = fs::remove_dir_all(&out);
        Ok(())
    }
}
