use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use image::DynamicImage;

use vocascan::export::{CsvExporter, Exporter, JsonExporter};
use vocascan::extract::extract_entries;
use vocascan::merge::merge_tagged;
use vocascan::ocr::{OcrEngine, OcrError};
use vocascan::pipeline::{PageScanner, ScanConfig};
use vocascan::vision::Rotation;
use vocascan::{Column, VocabEntry, MEANING_PLACEHOLDER};

/// Recognition stub that replays scripted page text, one response per
/// recognition call, in the order the scanner asks.
struct ScriptedEngine {
    responses: RefCell<VecDeque<String>>,
}

impl ScriptedEngine {
    fn new(responses: &[&str]) -> Self {
        Self {
            responses: RefCell::new(responses.iter().map(|s| s.to_string()).collect()),
        }
    }
}

impl OcrEngine for ScriptedEngine {
    fn recognize(&self, _image: &DynamicImage) -> Result<String, OcrError> {
        Ok(self.responses.borrow_mut().pop_front().unwrap_or_default())
    }

    fn detect_rotation(&self, _image: &DynamicImage) -> Result<Option<i32>, OcrError> {
        Ok(Some(0))
    }
}

fn temp_output_dir(prefix: &str) -> PathBuf {
    let mut out = std::env::temp_dir();
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis();
    let pid = std::process::id();
    out.push(format!("{prefix}-{pid}-{now}"));
    out
}

fn page_image() -> DynamicImage {
    DynamicImage::new_luma8(120, 80)
}

#[test]
fn two_column_pages_merge_into_one_sorted_list() -> Result<()> {
    // Two pages, each split into halves: four recognition passes. The
    // right column of page one repeats number 2 with a different word;
    // the left-column reading must win.
    let engine = ScriptedEngine::new(&[
        "1 □ empty\na. 비어 있는\n2 □ vacant\na. 텅 빈",
        "2 □ vacate\nv. 비우다\n4 □ heal\nv. 치료하다",
        "3 □ breath\nn. 숨",
        "5 □ lean\nv. 기울다",
    ]);
    let scanner = PageScanner::new(&engine, ScanConfig::default());

    let mut lists = Vec::new();
    for page in 0..2 {
        lists.extend(scanner.scan_decoded(page, page_image())?);
    }
    let entries = merge_tagged(lists);

    let numbers: Vec<u32> = entries.iter().map(|e| e.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    // First occurrence wins for the duplicated number 2.
    assert_eq!(entries[1].word, "vacant");
    assert_eq!(entries[0].pos.as_deref(), Some("a"));
    Ok(())
}

#[test]
fn merge_is_stable_under_out_of_order_completion() -> Result<()> {
    let scripted = [
        "1 □ empty\na. 비어 있는",
        "2 □ vacant\na. 텅 빈",
    ];
    let forward = {
        let engine = ScriptedEngine::new(&scripted);
        let scanner = PageScanner::new(&engine, ScanConfig::default());
        merge_tagged(scanner.scan_decoded(0, page_image())?)
    };
    let reversed = {
        let engine = ScriptedEngine::new(&scripted);
        let scanner = PageScanner::new(&engine, ScanConfig::default());
        let mut lists = scanner.scan_decoded(0, page_image())?;
        lists.reverse();
        merge_tagged(lists)
    };
    assert_eq!(forward, reversed);
    Ok(())
}

#[test]
fn forced_rotation_skips_orientation_probing() -> Result<()> {
    // With a fixed rotation the engine must only see the two column
    // passes; any probe call would desynchronize the script.
    let engine = ScriptedEngine::new(&["6 □ stray\n길 잃은", ""]);
    let config = ScanConfig {
        rotation: Rotation::Deg180,
        ..ScanConfig::default()
    };
    let scanner = PageScanner::new(&engine, config);
    let lists = scanner.scan_decoded(0, page_image())?;
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].entries[0].word, "stray");
    assert_eq!(lists[1].origin.column, Column::Right);
    assert!(lists[1].entries.is_empty());
    Ok(())
}

#[test]
fn scanner_fallback_keeps_unmatched_words() -> Result<()> {
    // No strategy above the line scanner matches this page; the bare
    // word must survive with the placeholder meaning.
    let engine = ScriptedEngine::new(&["stray", ""]);
    let scanner = PageScanner::new(&engine, ScanConfig::default());
    let entries = merge_tagged(scanner.scan_decoded(0, page_image())?);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].word, "stray");
    assert_eq!(entries[0].meaning, MEANING_PLACEHOLDER);
    Ok(())
}

#[test]
fn clean_text_entry_point_handles_table_and_csv() {
    let table = "51 □ empty a. 비어 있는 v. 비우다 52 □ vacant a. 텅 빈";
    let entries = extract_entries(table);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].meaning, "비어 있는, 비우다");

    let csv = "1,apple,사과\n2,banana,바나나";
    let entries = extract_entries(csv);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].word, "banana");
}

#[test]
fn exporters_write_json_and_reloadable_csv() -> Result<()> {
    let out = temp_output_dir("vocascan-export");
    let entries = vec![
        VocabEntry::new(1, "empty", "비어 있는"),
        VocabEntry::new(2, "heal", "치료하다"),
    ];

    JsonExporter::new(out.clone()).export(&entries)?;
    CsvExporter::new(out.clone()).export(&entries)?;

    let json = fs::read_to_string(out.join("vocab.json"))?;
    assert!(json.contains("비어 있는"));
    let reloaded: Vec<VocabEntry> = serde_json::from_str(&json)?;
    assert_eq!(reloaded, entries);

    let csv = fs::read_to_string(out.join("vocab.csv"))?;
    assert_eq!(extract_entries(&csv), entries);

    let _ = fs::remove_dir_all(&out);
    Ok(())
}
