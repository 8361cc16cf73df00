//! Shared generators and fixtures for the integration tests

#![allow(dead_code)]

use proptest::prelude::*;

/// 10-line CRD preamble as written by the export
pub const CRD_PREAMBLE: &str = "\
COORDINATE LISTING
Job:        AA9 ARTC
Date:       13/01/2020
Datum:      GDA94
Projection: MGA Zone 56
Units:      Metres
Operator:   RW
Software:   survey export 4.2
Points:     3

";

pub const CRD_HEADING: &str = "STATION      EASTING        NORTHING       ELEVATION  DESCRIPTION";

pub const ASC_PREAMBLE: &str = "\
@%Job: AA9 ARTC
@%Date: 13/01/2020
@%Units: metres
";

pub const ASC_PROJECTION: &str = "@%Projection set: MGA94 Zone 56";

/// Wrap data rows in a complete CRD file
pub fn crd_file(rows: &[String]) -> String {
    let mut text = String::from(CRD_PREAMBLE);
    text.push_str(CRD_HEADING);
    text.push_str("\n\n");
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

/// Wrap data rows in a complete ASC file
pub fn asc_file(rows: &[String]) -> String {
    let mut text = String::from(ASC_PREAMBLE);
    text.push_str(ASC_PROJECTION);
    text.push('\n');
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

pub fn arb_station() -> impl Strategy<Value = String> {
    "[A-Z]{2,4}[0-9]{1,4}"
}

pub fn arb_easting() -> impl Strategy<Value = String> {
    (27u32..=29, 0u32..10_000, 0u32..10_000)
        .prop_map(|(p, whole, frac)| format!("{}{:04}.{:04}", p, whole, frac))
}

pub fn arb_northing() -> impl Strategy<Value = String> {
    (61u32..=63, 0u32..100_000, 0u32..10_000)
        .prop_map(|(p, whole, frac)| format!("{}{:05}.{:04}", p, whole, frac))
}

/// Station with a coordinate pair
pub fn arb_point() -> impl Strategy<Value = (String, String, String)> {
    (arb_station(), arb_easting(), arb_northing())
}
