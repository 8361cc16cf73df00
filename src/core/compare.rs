//! Coordinate comparison between two indexes
//!
//! Flags stations whose easting or northing differs by more than a
//! tolerance. Each station holds a single outlier slot: when both axes are
//! out of tolerance the northing record replaces the easting one.

use crate::core::error::{CompnetError, Result};
use crate::core::index::CoordinateIndex;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Easting,
    Northing,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Easting => "Easting",
            Axis::Northing => "Northing",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-axis comparison tolerances
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub easting: f64,
    pub northing: f64,
}

impl Tolerance {
    /// Create a tolerance, rejecting negative or non-finite values
    pub fn new(easting: f64, northing: f64) -> Result<Self> {
        for (axis, value) in [(Axis::Easting, easting), (Axis::Northing, northing)] {
            if !value.is_finite() || value < 0.0 {
                return Err(CompnetError::InvalidTolerance {
                    axis: axis.as_str(),
                    value,
                });
            }
        }
        Ok(Self { easting, northing })
    }

    /// Same tolerance on both axes
    pub fn uniform(value: f64) -> Result<Self> {
        Self::new(value, value)
    }
}

/// A station whose coordinates disagree between two files
#[derive(Debug, Clone, PartialEq)]
pub struct Outlier {
    pub station: String,
    pub axis: Axis,
    /// `a - b` on `axis`
    pub delta: f64,
}

impl Outlier {
    /// Axis name and signed delta to three decimals, e.g. `Easting +0.070`
    pub fn description(&self) -> String {
        format!("{} {:+.3}", self.axis, self.delta)
    }
}

impl fmt::Display for Outlier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.station, self.description())
    }
}

/// Result of comparing two indexes
#[derive(Debug, Clone, Default)]
pub struct OutlierSet {
    outliers: BTreeMap<String, Outlier>,
    /// Stations present in both indexes
    pub compared: usize,
}

impl OutlierSet {
    fn record(&mut self, outlier: Outlier) {
        self.outliers.insert(outlier.station.clone(), outlier);
    }

    pub fn get(&self, station: &str) -> Option<&Outlier> {
        self.outliers.get(station)
    }

    pub fn len(&self) -> usize {
        self.outliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outliers.is_empty()
    }

    /// Outliers in ascending station order
    pub fn iter(&self) -> impl Iterator<Item = &Outlier> {
        self.outliers.values()
    }

    pub fn into_vec(self) -> Vec<Outlier> {
        self.outliers.into_values().collect()
    }
}

/// Compare the stations common to `a` and `b`
///
/// Deltas are computed from the parsed `f64` values, and a station is an
/// outlier when `|delta| > tolerance` on an axis. A computed delta equal to
/// the tolerance is not an outlier, but a decimal difference written as
/// exactly the tolerance may round to either side of it.
pub fn compare(a: &CoordinateIndex, b: &CoordinateIndex, tolerance: Tolerance) -> OutlierSet {
    let mut result = OutlierSet::default();

    for (station, pa) in a.iter() {
        let Some(pb) = b.get(station) else {
            continue;
        };
        result.compared += 1;

        let delta_easting = pa.easting_value() - pb.easting_value();
        let delta_northing = pa.northing_value() - pb.northing_value();

        if delta_easting.abs() > tolerance.easting {
            result.record(Outlier {
                station: station.to_string(),
                axis: Axis::Easting,
                delta: delta_easting,
            });
        }
        if delta_northing.abs() > tolerance.northing {
            result.record(Outlier {
                station: station.to_string(),
                axis: Axis::Northing,
                delta: delta_northing,
            });
        }
    }

    log::info!(
        "Compared {} common stations, {} outside tolerance",
        result.compared,
        result.len()
    );
    result
}

/// Stations present in only one of the two indexes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unmatched {
    pub only_in_a: Vec<String>,
    pub only_in_b: Vec<String>,
}

/// List the stations that `compare` could not pair up, sorted
pub fn unmatched(a: &CoordinateIndex, b: &CoordinateIndex) -> Unmatched {
    let only = |x: &CoordinateIndex, y: &CoordinateIndex| -> Vec<String> {
        x.iter()
            .map(|(s, _)| s)
            .filter(|s| !y.contains(s))
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    };
    Unmatched {
        only_in_a: only(a, b),
        only_in_b: only(b, a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::index::CoordinatePair;

    fn index(entries: &[(&str, &str, &str)]) -> CoordinateIndex {
        entries
            .iter()
            .map(|(s, e, n)| (s.to_string(), CoordinatePair::parse(e, n).unwrap()))
            .collect()
    }

    #[test]
    fn test_tolerance_rejects_negative() {
        assert!(Tolerance::new(-0.01, 0.05).is_err());
        assert!(Tolerance::new(0.05, f64::NAN).is_err());
        assert!(Tolerance::uniform(0.0).is_ok());
    }

    #[test]
    fn test_easting_outlier() {
        let a = index(&[("STN02", "285000.000", "6215000.000")]);
        let b = index(&[("STN02", "285000.070", "6215000.000")]);
        let set = compare(&a, &b, Tolerance::uniform(0.05).unwrap());

        let o = set.get("STN02").unwrap();
        assert_eq!(o.axis, Axis::Easting);
        assert_eq!(o.description(), "Easting -0.070");
    }

    #[test]
    fn test_within_tolerance() {
        let a = index(&[("STN02", "285000.000", "6215000.000")]);
        let b = index(&[("STN02", "285000.040", "6215000.000")]);
        assert!(compare(&a, &b, Tolerance::uniform(0.05).unwrap()).is_empty());
    }

    #[test]
    fn test_northing_replaces_easting() {
        let a = index(&[("S", "285001.000", "6215001.000")]);
        let b = index(&[("S", "285000.000", "6215000.000")]);
        let set = compare(&a, &b, Tolerance::uniform(0.1).unwrap());

        assert_eq!(set.len(), 1);
        let o = set.get("S").unwrap();
        assert_eq!(o.axis, Axis::Northing);
        assert_eq!(o.description(), "Northing +1.000");
    }

    #[test]
    fn test_zero_tolerance_flags_any_difference() {
        let a = index(&[("S", "285000.0001", "6215000.0000")]);
        let b = index(&[("S", "285000.0000", "6215000.0000")]);
        assert_eq!(compare(&a, &b, Tolerance::uniform(0.0).unwrap()).len(), 1);
    }

    #[test]
    fn test_sorted_output_and_unmatched() {
        let a = index(&[
            ("Z1", "285000.0", "6215000.0"),
            ("A1", "285000.0", "6215000.0"),
            ("ONLY_A", "285000.0", "6215000.0"),
        ]);
        let b = index(&[
            ("Z1", "285009.0", "6215000.0"),
            ("A1", "285009.0", "6215000.0"),
            ("ONLY_B", "285000.0", "6215000.0"),
        ]);
        let set = compare(&a, &b, Tolerance::uniform(1.0).unwrap());
        assert_eq!(set.compared, 2);
        let names: Vec<&str> = set.iter().map(|o| o.station.as_str()).collect();
        assert_eq!(names, vec!["A1", "Z1"]);

        let u = unmatched(&a, &b);
        assert_eq!(u.only_in_a, vec!["ONLY_A"]);
        assert_eq!(u.only_in_b, vec!["ONLY_B"]);
    }
}
