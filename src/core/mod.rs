//! Core coordinate reconciliation functionality
//!
//! This module contains the station coordinate index, the two-file
//! comparator, error types and file I/O helpers.

pub mod compare;
mod error;
mod index;
pub mod io;

pub use compare::{compare, unmatched, Axis, Outlier, OutlierSet, Tolerance, Unmatched};
pub use error::{CompnetError, ParseError, ParseResult, Result};
pub use index::{CoordinateIndex, CoordinatePair, IndexStats};
