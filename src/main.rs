use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use vocascan::export::{CsvExporter, Exporter, JsonExporter};
use vocascan::extract::extract_entries;
use vocascan::merge::merge_tagged;
use vocascan::ocr::TesseractBridge;
use vocascan::pipeline::{PageScanner, ScanConfig};
use vocascan::vision::Rotation;
use vocascan::VocabEntry;

#[derive(Parser, Debug)]
#[command(name = "vocascan")]
#[command(version, about = "Vocabulary list extraction from scanned word-book pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recognize and extract entries from page images
    Scan {
        /// Page images (PNG/JPEG) in reading order
        inputs: Vec<PathBuf>,

        /// Output directory (default: ./<first_input_name>_vocab)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fixed rotation instead of automatic orientation detection
        #[arg(long, value_enum, default_value_t = RotateArg::Auto)]
        rotate: RotateArg,

        /// Treat pages as a single column instead of splitting halves
        #[arg(long)]
        no_split: bool,

        /// Skip grayscale binarization before recognition
        #[arg(long)]
        no_binarize: bool,

        /// Recognition languages handed to tesseract
        #[arg(long, default_value = "eng+kor")]
        lang: String,

        /// Print entries without writing output files
        #[arg(short, long)]
        preview: bool,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Extract entries from an already-extracted text or delimited file
    Parse {
        /// Input text/CSV file
        input: PathBuf,

        /// Output directory (default: ./<input_name>_vocab)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print entries without writing output files
        #[arg(short, long)]
        preview: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RotateArg {
    Auto,
    #[value(name = "0")]
    Upright,
    #[value(name = "90")]
    Quarter,
    #[value(name = "180")]
    Half,
    #[value(name = "270")]
    ThreeQuarter,
}

impl From<RotateArg> for Rotation {
    fn from(arg: RotateArg) -> Self {
        match arg {
            RotateArg::Auto => Rotation::Auto,
            RotateArg::Upright => Rotation::Deg0,
            RotateArg::Quarter => Rotation::Deg90,
            RotateArg::Half => Rotation::Deg180,
            RotateArg::ThreeQuarter => Rotation::Deg270,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            inputs,
            output,
            rotate,
            no_split,
            no_binarize,
            lang,
            preview,
            quiet,
        } => scan_images(
            inputs,
            output,
            rotate.into(),
            !no_split,
            !no_binarize,
            lang,
            preview,
            quiet,
        ),
        Commands::Parse {
            input,
            output,
            preview,
        } => parse_text(input, output, preview),
    }
}

#[allow(clippy::too_many_arguments)]
fn scan_images(
    inputs: Vec<PathBuf>,
    output: Option<PathBuf>,
    rotation: Rotation,
    split_columns: bool,
    binarize: bool,
    lang: String,
    preview: bool,
    quiet: bool,
) -> Result<()> {
    if inputs.is_empty() {
        anyhow::bail!("No input images specified");
    }
    for input in &inputs {
        if !input.is_file() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }
    }

    let output_dir = output.unwrap_or_else(|| default_output_dir(&inputs[0]));

    let bridge = TesseractBridge::new(output_dir.join("ocr")).with_lang(lang);
    let config = ScanConfig {
        rotation,
        split_columns,
        binarize,
    };
    let scanner = PageScanner::new(&bridge, config);

    let mut lists = Vec::new();
    for (page, input) in inputs.iter().enumerate() {
        if !quiet {
            println!("[*] Page {}/{}: {}", page + 1, inputs.len(), input.display());
        }
        let bytes = fs::read(input)
            .with_context(|| format!("Failed to read image: {}", input.display()))?;
        let page_lists = scanner
            .scan_page(page, &bytes)
            .with_context(|| format!("Failed to scan page: {}", input.display()))?;
        lists.extend(page_lists);
    }

    let entries = merge_tagged(lists);
    report_entries(&entries, quiet);
    if entries.is_empty() {
        println!("[!] Nothing extracted. Try --rotate, --no-split, or a higher-resolution scan.");
        return Ok(());
    }

    if preview {
        return Ok(());
    }
    write_outputs(&entries, &output_dir, quiet)
}

fn parse_text(input: PathBuf, output: Option<PathBuf>, preview: bool) -> Result<()> {
    let text = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read input: {}", input.display()))?;

    let entries = extract_entries(&text);
    report_entries(&entries, false);
    if entries.is_empty() {
        println!("[!] Nothing extracted. If this is a scanned page, use `vocascan scan`.");
        return Ok(());
    }

    if preview {
        return Ok(());
    }
    let output_dir = output.unwrap_or_else(|| default_output_dir(&input));
    write_outputs(&entries, &output_dir, false)
}

fn default_output_dir(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "vocascan".to_string());
    PathBuf::from(format!("{stem}_vocab"))
}

fn report_entries(entries: &[VocabEntry], quiet: bool) {
    if quiet {
        return;
    }
    println!("\n[+] Extracted {} entries", entries.len());
    for entry in entries.iter().take(10) {
        println!("  {}. {} - {}", entry.number, entry.word, entry.meaning);
    }
    if entries.len() > 10 {
        println!("  ... and {} more", entries.len() - 10);
    }
}

fn write_outputs(entries: &[VocabEntry], output_dir: &Path, quiet: bool) -> Result<()> {
    JsonExporter::new(output_dir.to_path_buf()).export(entries)?;
    CsvExporter::new(output_dir.to_path_buf()).export(entries)?;
    if !quiet {
        println!("\n[✓] Done! Results saved to: {}", output_dir.display());
    }
    Ok(())
}
