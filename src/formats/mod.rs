//! Coordinate file format adapters
//!
//! Builds a [`CoordinateIndex`] from one of the three legacy export layouts
//! (CRD, STD, ASC) and rewrites fixed-station files from an index.
//!
//! Every layout carries data rows of the same shape: a station token plus
//! an easting matching `2[789]dddd.dddd` and a northing matching
//! `6[123]ddddd.dddd`. The layouts differ only in their header and in how
//! the station token is written.

pub mod asc;
pub mod crd;
pub mod fixed;
pub mod standard;

pub use fixed::{rewrite, update_fixed_file, Rewrite, RewriteStats, UpdateOptions};

use crate::core::io::read_text;
use crate::core::{CompnetError, CoordinateIndex, CoordinatePair, ParseResult, Result};
use regex::Regex;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

static EASTING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b2[789]\d{4}\.\d{4}").expect("easting pattern"));

static NORTHING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b6[123]\d{5}\.\d{4}").expect("northing pattern"));

/// Text between a pair of double quotes, possibly empty
static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)""#).expect("quoted station pattern"));

/// Coordinate file layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateFormat {
    /// 10-line preamble, `DESCRIPTION` line, blank line, then rows led by the station
    Crd,
    /// No preamble; station names in double quotes
    Std,
    /// 3-line preamble and a projection-set line; stations prefixed with `@#`
    Asc,
}

impl CoordinateFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoordinateFormat::Crd => "CRD",
            CoordinateFormat::Std => "STD",
            CoordinateFormat::Asc => "ASC",
        }
    }

    /// Infer the format from a file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "crd" => Some(CoordinateFormat::Crd),
            "std" => Some(CoordinateFormat::Std),
            "asc" => Some(CoordinateFormat::Asc),
            _ => None,
        }
    }

    /// Infer the format from a path's extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| CompnetError::UnsupportedFormat(path.to_path_buf()))
    }

    /// Index of the first data line, after validating the header
    fn data_start(&self, lines: &[&str]) -> ParseResult<usize> {
        match self {
            CoordinateFormat::Crd => crd::data_start(lines),
            CoordinateFormat::Std => Ok(0),
            CoordinateFormat::Asc => asc::data_start(lines),
        }
    }

    fn station_token<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self {
            CoordinateFormat::Crd => crd::station_token(line),
            CoordinateFormat::Std => standard::station_token(line),
            CoordinateFormat::Asc => asc::station_token(line),
        }
    }
}

impl fmt::Display for CoordinateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoordinateFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_extension(s).ok_or_else(|| format!("unknown coordinate format '{}'", s))
    }
}

/// First non-empty double-quoted token (STD rows and fixed-file rows)
///
/// Quote pairs are consumed left to right, so an empty `""` is skipped
/// without pairing its closing quote with the next opening one.
pub fn quoted_station(line: &str) -> Option<&str> {
    QUOTED
        .captures_iter(line)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .find(|s| !s.is_empty())
}

/// Strip surrounding quotes and a leading `@#` marker from a station token
pub fn normalize_station(token: &str) -> &str {
    let token = token.trim_matches('"');
    token.strip_prefix("@#").unwrap_or(token)
}

/// Extract the easting/northing pair from a data row
pub fn find_coordinates(line: &str) -> Option<CoordinatePair> {
    let easting = EASTING.find(line)?;
    let northing = NORTHING.find(line)?;
    CoordinatePair::parse(easting.as_str(), northing.as_str())
}

/// Parse one data row into a station and its coordinates
///
/// Returns None for rows that are not data (blank lines, trailers, rows
/// without a station token or a recognisable coordinate pair).
pub fn parse_data_line(line: &str, format: CoordinateFormat) -> Option<(String, CoordinatePair)> {
    let pair = find_coordinates(line)?;
    let station = normalize_station(format.station_token(line)?);
    if station.is_empty() {
        return None;
    }
    Some((station.to_string(), pair))
}

/// Build a coordinate index from the text of a coordinate file
///
/// Fails only when the header does not match `format`; rows that are not
/// data are skipped. A station listed more than once keeps its last row.
pub fn build_index(text: &str, format: CoordinateFormat) -> ParseResult<CoordinateIndex> {
    let lines: Vec<&str> = text.lines().collect();
    let start = format.data_start(&lines)?;

    let mut index = CoordinateIndex::new();
    for (i, line) in lines.iter().enumerate().skip(start) {
        index.stats_mut().lines += 1;
        match parse_data_line(line, format) {
            Some((station, pair)) => {
                if index.insert(station.as_str(), pair).is_some() {
                    log::warn!(
                        "{} line {}: station {} listed again, keeping the later coordinates",
                        format,
                        i + 1,
                        station
                    );
                }
            }
            None => {
                index.stats_mut().skipped += 1;
                log::debug!("{} line {}: not a data row, skipped", format, i + 1);
            }
        }
    }

    let stats = index.stats();
    log::debug!(
        "{} parsed: {} data lines, {} indexed, {} skipped, {} duplicates",
        format,
        stats.lines,
        stats.indexed,
        stats.skipped,
        stats.duplicates
    );
    Ok(index)
}

/// Read and index a coordinate file
///
/// The format is inferred from the extension unless given explicitly.
pub fn load_index<P: AsRef<Path>>(path: P, format: Option<CoordinateFormat>) -> Result<CoordinateIndex> {
    let path = path.as_ref();
    let format = match format {
        Some(f) => f,
        None => CoordinateFormat::from_path(path)?,
    };
    let text = read_text(path)?;
    let index = build_index(&text, format)?;
    log::info!(
        "Loaded {} stations from {} ({})",
        index.len(),
        path.display(),
        format
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(CoordinateFormat::from_path("a/b/JOB.CRD").unwrap(), CoordinateFormat::Crd);
        assert_eq!(CoordinateFormat::from_path("job.std").unwrap(), CoordinateFormat::Std);
        assert_eq!(CoordinateFormat::from_path("job.Asc").unwrap(), CoordinateFormat::Asc);
        assert!(matches!(
            CoordinateFormat::from_path("job.txt"),
            Err(CompnetError::UnsupportedFormat(_))
        ));
        assert!(CoordinateFormat::from_path("job").is_err());
    }

    #[test]
    fn test_quoted_station_skips_empty_quotes() {
        assert_eq!(
            quoted_station("5 \"\" 285000.0000 6215000.0000 \"STN01\""),
            Some("STN01")
        );
        assert_eq!(quoted_station("\"\" \"\""), None);
        assert_eq!(quoted_station("no quotes"), None);
    }

    #[test]
    fn test_normalize_station() {
        assert_eq!(normalize_station("\"STN01\""), "STN01");
        assert_eq!(normalize_station("@#STN01"), "STN01");
        assert_eq!(normalize_station("STN01"), "STN01");
    }

    #[test]
    fn test_find_coordinates() {
        let pair = find_coordinates("PM1234  285123.4567  6215456.7890  12.345").unwrap();
        assert_eq!(pair.easting(), "285123.4567");
        assert_eq!(pair.northing(), "6215456.7890");
    }

    #[test]
    fn test_find_coordinates_out_of_range() {
        // Easting prefix 30 and northing prefix 64 are outside the patterns
        assert!(find_coordinates("X 305000.0000 6215000.0000").is_none());
        assert!(find_coordinates("X 285000.0000 6415000.0000").is_none());
        // Three fractional digits do not match
        assert!(find_coordinates("X 285000.000 6215000.0000").is_none());
    }

    #[test]
    fn test_parse_data_line_requires_station() {
        assert!(parse_data_line("285000.0000 6215000.0000", CoordinateFormat::Std).is_none());
        assert!(parse_data_line("285000.0000 6215000.0000", CoordinateFormat::Asc).is_none());
    }
}
