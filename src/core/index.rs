//! Station coordinate index
//!
//! Maps station identifiers to the easting/northing pair read from a
//! coordinate file. Coordinates keep their original text so a rewrite
//! reproduces them exactly; the parsed values are only used for comparison.

use std::collections::HashMap;

/// Easting/northing pair for one station
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinatePair {
    easting: String,
    northing: String,
    easting_value: f64,
    northing_value: f64,
}

impl CoordinatePair {
    /// Build a pair from its text form
    ///
    /// Returns None if either component is not a decimal number.
    pub fn parse(easting: &str, northing: &str) -> Option<Self> {
        let easting_value = easting.parse::<f64>().ok()?;
        let northing_value = northing.parse::<f64>().ok()?;
        Some(Self {
            easting: easting.to_string(),
            northing: northing.to_string(),
            easting_value,
            northing_value,
        })
    }

    /// Easting exactly as it appeared in the source file
    pub fn easting(&self) -> &str {
        &self.easting
    }

    /// Northing exactly as it appeared in the source file
    pub fn northing(&self) -> &str {
        &self.northing
    }

    pub fn easting_value(&self) -> f64 {
        self.easting_value
    }

    pub fn northing_value(&self) -> f64 {
        self.northing_value
    }
}

/// Counters collected while building an index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Data lines after the header
    pub lines: usize,
    /// Lines that produced an entry
    pub indexed: usize,
    /// Lines without a station token or coordinate pair
    pub skipped: usize,
    /// Entries that replaced an earlier one for the same station
    pub duplicates: usize,
}

/// Station identifier -> coordinate pair
///
/// Keys are unique. Inserting a station that is already present replaces
/// its coordinates, so for a file the last matching line wins.
#[derive(Debug, Clone, Default)]
pub struct CoordinateIndex {
    stations: HashMap<String, CoordinatePair>,
    stats: IndexStats,
}

impl CoordinateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a station, returning the pair it replaced
    pub fn insert(&mut self, station: impl Into<String>, pair: CoordinatePair) -> Option<CoordinatePair> {
        let previous = self.stations.insert(station.into(), pair);
        self.stats.indexed += 1;
        if previous.is_some() {
            self.stats.duplicates += 1;
        }
        previous
    }

    pub fn get(&self, station: &str) -> Option<&CoordinatePair> {
        self.stations.get(station)
    }

    pub fn contains(&self, station: &str) -> bool {
        self.stations.contains_key(station)
    }

    /// Number of distinct stations
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Iterate stations in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CoordinatePair)> {
        self.stations.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Stations sorted by identifier
    pub fn sorted(&self) -> Vec<(&str, &CoordinatePair)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut IndexStats {
        &mut self.stats
    }

    /// Fold `other` into this index; stations in `other` take precedence
    ///
    /// Stats are summed, and every station `other` overrides counts as a
    /// duplicate.
    pub fn merge(&mut self, other: CoordinateIndex) {
        self.stats.lines += other.stats.lines;
        self.stats.indexed += other.stats.indexed;
        self.stats.skipped += other.stats.skipped;
        self.stats.duplicates += other.stats.duplicates;

        for (station, pair) in other.stations {
            if let Some(previous) = self.stations.get(&station) {
                log::warn!(
                    "Station {} overridden by a later coordinate file: {} {} -> {} {}",
                    station,
                    previous.easting(),
                    previous.northing(),
                    pair.easting(),
                    pair.northing()
                );
                self.stats.duplicates += 1;
            }
            self.stations.insert(station, pair);
        }
    }
}

impl FromIterator<(String, CoordinatePair)> for CoordinateIndex {
    fn from_iter<T: IntoIterator<Item = (String, CoordinatePair)>>(iter: T) -> Self {
        let mut index = CoordinateIndex::new();
        for (station, pair) in iter {
            index.insert(station, pair);
        }
        index
    }
}
