//! STD coordinate file adapter
//!
//! STD exports have no preamble. Every data row names its station in
//! double quotes:
//!
//! ```text
//! 1 285123.4567 6215456.7890 12.345 "PM1234"
//! ```

use super::quoted_station;

/// Station name enclosed in double quotes, without the quotes
pub fn station_token(line: &str) -> Option<&str> {
    quoted_station(line)
}
