//! compnet-fix - survey fixed-station file maintenance
//!
//! Keeps the fixed-station constraint file of a CompNet network adjustment
//! in step with the coordinates exported by survey processing software.
//!
//! # Features
//!
//! - Reads CRD, STD and ASC coordinate exports into a station index
//! - Rewrites a fixed file in place, replacing coordinates of known stations
//!   and copying every other line verbatim
//! - Compares two coordinate files and reports stations that moved by more
//!   than a tolerance
//!
//! # Example
//!
//! ```ignore
//! use compnet_fix::{load_index, update_fixed_file, UpdateOptions};
//!
//! let index = load_index("JOB.CRD", None)?;
//! let result = update_fixed_file("JOB.FIX", &index, UpdateOptions::default())?;
//! println!("{} stations updated", result.stats.updated);
//! ```

pub mod core;
pub mod formats;

// Re-export commonly used types
pub use crate::core::{
    compare, unmatched, Axis, CompnetError, CoordinateIndex, CoordinatePair, IndexStats,
    Outlier, OutlierSet, ParseError, Result, Tolerance, Unmatched,
};
pub use formats::{
    build_index, load_index, rewrite, update_fixed_file, CoordinateFormat, Rewrite,
    RewriteStats, UpdateOptions,
};
