//! FPGA Lab CLI — MIF generation and inspection commands.
//!
//! Commands:
//! - `rom` — convert a values file (plain text or CSV) into a MIF memory
//!   image, one-shot from flags or in batch from a TOML job file
//! - `check` — parse an existing MIF and report its shape

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use fpgalab_core::mif::{read_mif, width_max, write_mif};

#[derive(Parser)]
#[command(
    name = "fpgalab",
    about = "FPGA Lab CLI — MIF generation and inspection"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a values file into a MIF memory image.
    Rom {
        /// Input values file (.csv: first column; otherwise one value per line).
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output MIF path.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Number of words in the image. Defaults to the input length;
        /// rows past the input are zero-filled.
        #[arg(long)]
        depth: Option<usize>,

        /// Word width in bits.
        #[arg(long, default_value_t = 8)]
        width: u32,

        /// TOML job file with one [[rom]] entry per image.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Parse a MIF file and report width, depth, and word statistics.
    Check {
        /// MIF file to inspect.
        file: PathBuf,

        /// Emit the report as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// One conversion job from a TOML config.
#[derive(Debug, Deserialize)]
struct RomJob {
    input: PathBuf,
    output: PathBuf,
    /// Defaults to the input length.
    depth: Option<usize>,
    #[serde(default = "default_width")]
    width: u32,
}

#[derive(Debug, Deserialize)]
struct RomConfig {
    rom: Vec<RomJob>,
}

fn default_width() -> u32 {
    8
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rom {
            input,
            output,
            depth,
            width,
            config,
        } => run_rom(input, output, depth, width, config),
        Commands::Check { file, json } => run_check(&file, json),
    }
}

fn run_rom(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    depth: Option<usize>,
    width: u32,
    config: Option<PathBuf>,
) -> Result<()> {
    match (config, input, output) {
        (Some(config_path), None, None) => {
            if depth.is_some() {
                bail!("--depth belongs in the job file when --config is used");
            }
            let text = std::fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read {}", config_path.display()))?;
            let config: RomConfig = toml::from_str(&text)
                .with_context(|| format!("failed to parse {}", config_path.display()))?;
            if config.rom.is_empty() {
                bail!("{} defines no [[rom]] jobs", config_path.display());
            }
            for job in &config.rom {
                convert(&job.input, &job.output, job.depth, job.width)?;
            }
            println!("{} images written", config.rom.len());
            Ok(())
        }
        (None, Some(input), Some(output)) => convert(&input, &output, depth, width),
        (Some(_), _, _) => bail!("--config cannot be combined with --input/--output"),
        _ => bail!("provide either --config or both --input and --output"),
    }
}

fn convert(input: &Path, output: &Path, depth: Option<usize>, width: u32) -> Result<()> {
    let values = load_values(input)?;
    let depth = depth.unwrap_or(values.len());

    let file = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let mut sink = BufWriter::new(file);
    write_mif(&mut sink, &values, depth, width)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "{} -> {} ({} words, {} bits)",
        input.display(),
        output.display(),
        depth,
        width
    );
    Ok(())
}

/// Report produced by `check`.
#[derive(Debug, Serialize)]
struct CheckReport {
    file: String,
    width: u32,
    depth: usize,
    min_word: u64,
    max_word: u64,
    /// Words above `2^width - 1` — a malformed image.
    oversized_words: usize,
}

fn run_check(path: &Path, json: bool) -> Result<()> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let contents = read_mif(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let max_allowed = width_max(contents.width);
    let report = CheckReport {
        file: path.display().to_string(),
        width: contents.width,
        depth: contents.depth,
        min_word: contents.words.iter().copied().min().unwrap_or(0),
        max_word: contents.words.iter().copied().max().unwrap_or(0),
        oversized_words: contents
            .words
            .iter()
            .filter(|&&w| w > max_allowed)
            .count(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("file:   {}", report.file);
        println!("width:  {} bits", report.width);
        println!("depth:  {} words", report.depth);
        println!("range:  {}..={}", report.min_word, report.max_word);
        if report.oversized_words > 0 {
            println!(
                "warning: {} words exceed the {}-bit range",
                report.oversized_words, report.width
            );
        }
    }
    Ok(())
}

/// Load a values file: `.csv` takes the first column (a header row is
/// tolerated), anything else is one value per line with `#` comments.
/// Fractional values truncate toward zero.
fn load_values(path: &Path) -> Result<Vec<i64>> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        load_csv_values(BufReader::new(file))
            .with_context(|| format!("failed to read {}", path.display()))
    } else {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        parse_plain_values(&text)
    }
}

fn load_csv_values<R: std::io::Read>(reader: R) -> Result<Vec<i64>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut values = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let record = record?;
        let field = record.get(0).unwrap_or("").trim();
        if field.is_empty() {
            continue;
        }
        match parse_number(field) {
            Some(v) => values.push(v),
            // A non-numeric first row is a header.
            None if i == 0 => continue,
            None => bail!("record {}: '{field}' is not a number", i + 1),
        }
    }
    Ok(values)
}

fn parse_plain_values(text: &str) -> Result<Vec<i64>> {
    let mut values = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_number(line) {
            Some(v) => values.push(v),
            None => bail!("line {}: '{line}' is not a number", i + 1),
        }
    }
    Ok(values)
}

/// Integers parse exactly; floats truncate toward zero (saturating).
fn parse_number(s: &str) -> Option<i64> {
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v as i64)
}
