//! Quartus MIF (Memory Initialization File) writer and reader.
//!
//! The writer emits the fixed five-section layout FPGA toolchains expect:
//! width and depth declarations, unsigned address/data radixes, and a
//! `CONTENT BEGIN … END;` block with one row per address. Formatting is
//! byte-for-byte stable — downstream tools diff these files.
//!
//! Values are saturated into `[0, 2^width - 1]`, never rejected and never
//! wrapped. Addresses at or beyond the input length are zero-filled, so
//! `depth` is independent of the input length.

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from MIF serialization and parsing.
#[derive(Debug, Error)]
pub enum MifError {
    #[error("width must be at least 1 bit")]
    ZeroWidth,

    #[error("depth must be at least 1 word")]
    ZeroDepth,

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Parsed contents of a MIF file. `words.len() == depth`, addresses in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MifContents {
    pub width: u32,
    pub depth: usize,
    pub words: Vec<u64>,
}

/// Largest word representable in `width` bits.
pub fn width_max(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Saturate `value` into `[0, 2^width - 1]`.
pub fn clamp_to_width(value: i64, width: u32) -> u64 {
    if value < 0 {
        0
    } else {
        (value as u64).min(width_max(width))
    }
}

/// Write `values` as a MIF with exactly `depth` rows of `width`-bit words.
///
/// Each value is clamped into the word range; addresses past the end of
/// `values` are zero-filled. Fails before writing anything if `width` or
/// `depth` is zero.
pub fn write_mif<W: Write>(
    sink: &mut W,
    values: &[i64],
    depth: usize,
    width: u32,
) -> Result<(), MifError> {
    if width == 0 {
        return Err(MifError::ZeroWidth);
    }
    if depth == 0 {
        return Err(MifError::ZeroDepth);
    }

    writeln!(sink, "WIDTH={width};")?;
    writeln!(sink, "DEPTH={depth};")?;
    writeln!(sink)?;
    writeln!(sink, "ADDRESS_RADIX=UNS;")?;
    writeln!(sink, "DATA_RADIX=UNS;")?;
    writeln!(sink)?;
    writeln!(sink, "CONTENT BEGIN")?;
    for addr in 0..depth {
        let word = values
            .get(addr)
            .map_or(0, |&v| clamp_to_width(v, width));
        writeln!(sink, "  {addr}\t:\t{word};")?;
    }
    writeln!(sink, "END;")?;
    Ok(())
}

/// Parse a MIF back into its word vector.
///
/// Accepts the dialect `write_mif` emits plus whitespace variations and
/// `--` comments. Both radixes must be `UNS`. Content rows may appear in
/// any order; unlisted addresses stay zero. Addresses at or beyond the
/// declared depth are rejected.
pub fn read_mif<R: BufRead>(source: R) -> Result<MifContents, MifError> {
    let mut width: Option<u32> = None;
    let mut depth: Option<usize> = None;
    let mut words: Option<Vec<u64>> = None;
    let mut in_content = false;
    let mut saw_end = false;

    for (idx, line) in source.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let text = match line.split_once("--") {
            Some((before, _)) => before.trim(),
            None => line.trim(),
        };
        if text.is_empty() {
            continue;
        }
        if saw_end {
            return Err(parse_err(lineno, "content after END;"));
        }

        if in_content {
            if text.eq_ignore_ascii_case("END;") {
                saw_end = true;
                continue;
            }
            let row = text
                .strip_suffix(';')
                .ok_or_else(|| parse_err(lineno, "content row missing ';'"))?;
            let (addr_part, word_part) = row
                .split_once(':')
                .ok_or_else(|| parse_err(lineno, "content row missing ':'"))?;
            let addr: usize = addr_part
                .trim()
                .parse()
                .map_err(|_| parse_err(lineno, "bad address"))?;
            let word: u64 = word_part
                .trim()
                .parse()
                .map_err(|_| parse_err(lineno, "bad word value"))?;
            let words = words.as_mut().expect("depth seen before CONTENT");
            if addr >= words.len() {
                return Err(parse_err(
                    lineno,
                    format!("address {addr} outside depth {}", words.len()),
                ));
            }
            words[addr] = word;
            continue;
        }

        if text.eq_ignore_ascii_case("CONTENT BEGIN") {
            let d = depth.ok_or_else(|| parse_err(lineno, "CONTENT before DEPTH"))?;
            if width.is_none() {
                return Err(parse_err(lineno, "CONTENT before WIDTH"));
            }
            words = Some(vec![0; d]);
            in_content = true;
            continue;
        }

        let decl = text
            .strip_suffix(';')
            .ok_or_else(|| parse_err(lineno, "declaration missing ';'"))?;
        let (key, value) = decl
            .split_once('=')
            .ok_or_else(|| parse_err(lineno, "expected KEY=VALUE;"))?;
        let (key, value) = (key.trim().to_ascii_uppercase(), value.trim());
        match key.as_str() {
            "WIDTH" => {
                let w: u32 = value.parse().map_err(|_| parse_err(lineno, "bad width"))?;
                if w == 0 {
                    return Err(MifError::ZeroWidth);
                }
                width = Some(w);
            }
            "DEPTH" => {
                let d: usize = value.parse().map_err(|_| parse_err(lineno, "bad depth"))?;
                if d == 0 {
                    return Err(MifError::ZeroDepth);
                }
                depth = Some(d);
            }
            "ADDRESS_RADIX" | "DATA_RADIX" => {
                if !value.eq_ignore_ascii_case("UNS") {
                    return Err(parse_err(lineno, format!("unsupported radix '{value}'")));
                }
            }
            other => {
                return Err(parse_err(lineno, format!("unknown declaration '{other}'")));
            }
        }
    }

    if !saw_end {
        return Err(parse_err(0, "missing END;"));
    }
    Ok(MifContents {
        width: width.expect("checked at CONTENT BEGIN"),
        depth: depth.expect("checked at CONTENT BEGIN"),
        words: words.expect("allocated at CONTENT BEGIN"),
    })
}

fn parse_err(line: usize, reason: impl Into<String>) -> MifError {
    MifError::Parse {
        line,
        reason: reason.into(),
    }
}
