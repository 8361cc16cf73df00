//! ASC format property tests

mod common;

use common::*;
use compnet_fix::formats::{build_index, CoordinateFormat};
use compnet_fix::ParseError;
use proptest::prelude::*;

proptest! {
    /// Property: @#-marked rows after the projection line are indexed
    #[test]
    fn test_asc_indexes_marked_rows(points in prop::collection::vec(arb_point(), 1..30)) {
        let rows: Vec<String> = points
            .iter()
            .map(|(s, e, n)| format!("@#{}  {}  {}  10.000", s, e, n))
            .collect();
        let index = build_index(&asc_file(&rows), CoordinateFormat::Asc).unwrap();

        for (s, _, _) in &points {
            prop_assert!(index.contains(s));
            let marked = format!("@#{}", s);
            prop_assert!(!index.contains(&marked));
        }
        let (last_s, last_e, last_n) = points.last().unwrap();
        let pair = index.get(last_s).unwrap();
        prop_assert_eq!(pair.easting(), last_e.as_str());
        prop_assert_eq!(pair.northing(), last_n.as_str());
    }
}

#[test]
fn test_asc_requires_projection_marker() {
    let text = format!("{}@%Units: metres\n@#STN01 285123.4567 6215456.7890\n", ASC_PREAMBLE);
    let err = build_index(&text, CoordinateFormat::Asc).unwrap_err();
    assert!(matches!(err, ParseError::MissingHeaderMarker { line: 4, .. }));
}

#[test]
fn test_asc_ignores_preamble_rows() {
    let text = "@#PRE1 285000.0000 6215000.0000\nb\nc\n@%Projection set: MGA94\n@#STN01 285123.4567 6215456.7890\n";
    let index = build_index(text, CoordinateFormat::Asc).unwrap();
    assert_eq!(index.len(), 1);
    assert!(index.contains("STN01"));
}

#[test]
fn test_asc_rows_without_marker_are_skipped() {
    let rows = vec![
        "STN01 285123.4567 6215456.7890".to_string(),
        "@#STN02 285123.4567 6215456.7890".to_string(),
        "@%End".to_string(),
    ];
    let index = build_index(&asc_file(&rows), CoordinateFormat::Asc).unwrap();
    assert_eq!(index.len(), 1);
    assert!(index.contains("STN02"));
}
