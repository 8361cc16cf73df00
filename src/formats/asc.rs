//! ASC coordinate file adapter
//!
//! ASC exports start with a 3-line preamble and a projection-set line.
//! Data rows mark the station with `@#`:
//!
//! ```text
//! <3 preamble lines>
//! @%Projection set: MGA94 Zone 56
//! @#PM1234  285123.4567  6215456.7890  12.345
//! ```

use crate::core::{ParseError, ParseResult};
use regex::Regex;
use std::sync::LazyLock;

/// Lines before the projection-set line
pub const PREAMBLE_LINES: usize = 3;

/// Marker the projection-set line must contain
pub const PROJECTION_MARKER: &str = "Projection set";

static STATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@#(\S+)").expect("ASC station pattern"));

/// Index of the first data line
pub fn data_start(lines: &[&str]) -> ParseResult<usize> {
    let projection = lines.get(PREAMBLE_LINES).ok_or(ParseError::TruncatedHeader {
        format: "ASC",
        expected: PREAMBLE_LINES + 1,
        found: lines.len(),
    })?;

    if !projection.contains(PROJECTION_MARKER) {
        return Err(ParseError::MissingHeaderMarker {
            format: "ASC",
            line: PREAMBLE_LINES + 1,
            marker: PROJECTION_MARKER,
        });
    }

    Ok(PREAMBLE_LINES + 1)
}

/// Token following the `@#` marker
pub fn station_token(line: &str) -> Option<&str> {
    STATION.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str())
}
