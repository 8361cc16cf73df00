//! CRD coordinate file adapter
//!
//! CRD exports start with a fixed 10-line preamble, followed by a column
//! heading line containing `DESCRIPTION` and one blank line. Each data row
//! then starts with the station name:
//!
//! ```text
//! <10 preamble lines>
//! STATION      EASTING        NORTHING       ELEVATION  DESCRIPTION
//!
//! PM1234       285123.4567    6215456.7890   12.345     PM
//! ```

use crate::core::{ParseError, ParseResult};

/// Lines before the column heading
pub const PREAMBLE_LINES: usize = 10;

/// Marker the column heading line must contain
pub const HEADER_MARKER: &str = "DESCRIPTION";

/// Index of the first data line
///
/// Skips the preamble, the `DESCRIPTION` line and the blank line after it.
pub fn data_start(lines: &[&str]) -> ParseResult<usize> {
    let heading = lines.get(PREAMBLE_LINES).ok_or(ParseError::TruncatedHeader {
        format: "CRD",
        expected: PREAMBLE_LINES + 1,
        found: lines.len(),
    })?;

    if !heading.contains(HEADER_MARKER) {
        return Err(ParseError::MissingHeaderMarker {
            format: "CRD",
            line: PREAMBLE_LINES + 1,
            marker: HEADER_MARKER,
        });
    }

    Ok(PREAMBLE_LINES + 2)
}

/// First non-whitespace token on the row
pub fn station_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}
