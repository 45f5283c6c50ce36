pub mod csv_export;
pub mod json_export;

pub use csv_export::CsvExporter;
pub use json_export::JsonExporter;

use anyhow::Result;

use crate::core::model::VocabEntry;

pub trait Exporter {
    fn export(&self, entries: &[VocabEntry]) -> Result<()>;
}
