//! Fixed-station file rewriter
//!
//! A fixed file lists the stations held fixed in a network adjustment, one
//! per line:
//!
//! ```text
//! 5 285000.0000 6215000.0000 "STN01" 0.010 0.010
//! ```
//!
//! Lines whose quoted station is in the coordinate index are replaced by
//! `<line> <easting>  <northing> "<station>"`; trailing columns are dropped.
//! Every other line is copied byte-for-byte, terminator included. Line
//! order and count never change, so rewriting twice gives the same text.

use super::quoted_station;
use crate::core::io::{read_text, write_atomic};
use crate::core::{CoordinateIndex, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Station used for lines without a quoted name
pub const UNKNOWN_STATION: &str = "UNKNOWN";

/// Line number used for lines that do not start with one
pub const UNKNOWN_LINE_NUMBER: &str = "???";

static LINE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s").expect("line number pattern"));

/// Counters for one rewrite
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteStats {
    pub total: usize,
    pub updated: usize,
    pub passed_through: usize,
    /// Quoted stations with no coordinates in the index, in file order
    pub missing: Vec<String>,
}

/// Rewritten fixed-file text and what happened to it
#[derive(Debug, Clone, Default)]
pub struct Rewrite {
    pub text: String,
    pub stats: RewriteStats,
}

impl Rewrite {
    /// True when the rewrite differs from `original`
    pub fn changed(&self, original: &str) -> bool {
        self.text != original
    }
}

/// Station name of a fixed-file line, or `UNKNOWN`
pub fn station(line: &str) -> &str {
    quoted_station(line).unwrap_or(UNKNOWN_STATION)
}

/// Leading line number of a fixed-file line, or `???`
pub fn line_number(line: &str) -> &str {
    LINE_NUMBER
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or(UNKNOWN_LINE_NUMBER)
}

/// Format an updated fixed-file row
pub fn format_row(line_number: &str, easting: &str, northing: &str, station: &str) -> String {
    format!("{} {}  {} \"{}\"\n", line_number, easting, northing, station)
}

/// Rewrite fixed-file text against a coordinate index
pub fn rewrite(fixed_text: &str, index: &CoordinateIndex) -> Rewrite {
    let mut out = Rewrite {
        text: String::with_capacity(fixed_text.len()),
        stats: RewriteStats::default(),
    };

    for line in fixed_text.split_inclusive('\n') {
        out.stats.total += 1;
        let name = station(line);

        match index.get(name) {
            Some(pair) => {
                let number = line_number(line);
                log::debug!(
                    "Station {} (line {}): {} {}",
                    name,
                    number,
                    pair.easting(),
                    pair.northing()
                );
                out.text
                    .push_str(&format_row(number, pair.easting(), pair.northing(), name));
                out.stats.updated += 1;
            }
            None => {
                if name != UNKNOWN_STATION || quoted_station(line).is_some() {
                    out.stats.missing.push(name.to_string());
                }
                out.text.push_str(line);
                out.stats.passed_through += 1;
            }
        }
    }

    out
}

/// Options for [`update_fixed_file`]
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateOptions {
    /// Compute the rewrite but leave the file untouched
    pub dry_run: bool,
}

/// Rewrite a fixed file in place from a coordinate index
///
/// The file is read fully, rewritten in memory and replaced atomically.
/// On any error the original file is left unchanged. Two updates must not
/// run against the same path at once.
pub fn update_fixed_file<P: AsRef<Path>>(
    fixed_path: P,
    index: &CoordinateIndex,
    options: UpdateOptions,
) -> Result<Rewrite> {
    let fixed_path = fixed_path.as_ref();
    let original = read_text(fixed_path)?;
    let result = rewrite(&original, index);

    log::info!(
        "{}: {} lines, {} updated, {} unchanged",
        fixed_path.display(),
        result.stats.total,
        result.stats.updated,
        result.stats.passed_through
    );
    for name in &result.stats.missing {
        log::debug!("No coordinates for station {}", name);
    }

    if options.dry_run {
        log::info!("Dry run: {} not written", fixed_path.display());
    } else if result.changed(&original) {
        write_atomic(fixed_path, &result.text)?;
    } else {
        log::info!("{} already up to date", fixed_path.display());
    }

    Ok(result)
}
