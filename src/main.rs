//! compnet-fix CLI entry point
//!
//! Updates CompNet fixed-station files from coordinate exports and compares
//! coordinate exports against each other.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use compnet_fix::core::{compare, unmatched, CoordinateIndex, Tolerance};
use compnet_fix::formats::{self, CoordinateFormat, UpdateOptions};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Coordinate file format (CLI enum)
#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    #[value(name = "crd")]
    Crd,
    #[value(name = "std")]
    Std,
    #[value(name = "asc")]
    Asc,
}

impl From<FormatArg> for CoordinateFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Crd => CoordinateFormat::Crd,
            FormatArg::Std => CoordinateFormat::Std,
            FormatArg::Asc => CoordinateFormat::Asc,
        }
    }
}

#[derive(Parser)]
#[command(name = "compnet-fix")]
#[command(about = "Update survey fixed-station files from coordinate exports")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a fixed file with coordinates from one or more coordinate files
    Update {
        /// Fixed-station file to update in place
        fixed: PathBuf,
        /// Coordinate files (CRD/STD/ASC); later files take precedence
        #[arg(required = true)]
        coordinates: Vec<PathBuf>,
        /// Coordinate file format (default: from file extension)
        #[arg(short = 'f', long)]
        format: Option<FormatArg>,
        /// Print the updated file instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Report stations whose coordinates differ between two files
    Compare {
        /// First coordinate file
        a: PathBuf,
        /// Second coordinate file
        b: PathBuf,
        /// Format of the first file (default: from file extension)
        #[arg(long = "format-a")]
        format_a: Option<FormatArg>,
        /// Format of the second file (default: from file extension)
        #[arg(long = "format-b")]
        format_b: Option<FormatArg>,
        /// Easting tolerance
        #[arg(short = 'e', long = "tolerance-e", default_value = "0.05")]
        tolerance_e: f64,
        /// Northing tolerance
        #[arg(short = 'n', long = "tolerance-n", default_value = "0.05")]
        tolerance_n: f64,
    },
    /// List the stations parsed from a coordinate file
    Index {
        /// Coordinate file
        coordinates: PathBuf,
        /// Coordinate file format (default: from file extension)
        #[arg(short = 'f', long)]
        format: Option<FormatArg>,
    },
}

fn load(path: &Path, format: Option<FormatArg>) -> anyhow::Result<CoordinateIndex> {
    let start = Instant::now();
    eprintln!("Loading coordinate file: {:?}", path);

    let index = formats::load_index(path, format.map(Into::into))
        .with_context(|| format!("Failed to load coordinate file {}", path.display()))?;

    let stats = index.stats();
    eprintln!(
        "Loaded {} stations ({} rows skipped) in {:.2}s",
        index.len(),
        stats.skipped,
        start.elapsed().as_secs_f64()
    );
    Ok(index)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    match cli.command {
        Commands::Update { fixed, coordinates, format, dry_run } => {
            let mut index = CoordinateIndex::new();
            for path in &coordinates {
                index.merge(load(path, format)?);
            }

            eprintln!("Updating fixed file: {:?}", fixed);
            let result = formats::update_fixed_file(&fixed, &index, UpdateOptions { dry_run })
                .with_context(|| format!("Failed to update {}", fixed.display()))?;

            if dry_run {
                print!("{}", result.text);
            }

            eprintln!("\n=== Update Statistics ===");
            eprintln!("Total lines:     {}", result.stats.total);
            eprintln!("Updated:         {}", result.stats.updated);
            eprintln!("Unchanged:       {}", result.stats.passed_through);
            if !result.stats.missing.is_empty() {
                eprintln!("No coordinates:  {}", result.stats.missing.join(", "));
            }
            eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
            eprintln!("{}", if dry_run { "DRY RUN" } else { "SUCCESS" });
        }

        Commands::Compare { a, b, format_a, format_b, tolerance_e, tolerance_n } => {
            let tolerance = Tolerance::new(tolerance_e, tolerance_n)?;
            let index_a = load(&a, format_a)?;
            let index_b = load(&b, format_b)?;

            let outliers = compare(&index_a, &index_b, tolerance);
            for outlier in outliers.iter() {
                println!("{}\t{}", outlier.station, outlier.description());
            }

            let missing = unmatched(&index_a, &index_b);
            eprintln!("\n=== Comparison Statistics ===");
            eprintln!("Common stations: {}", outliers.compared);
            eprintln!("Outliers:        {}", outliers.len());
            eprintln!("Only in A:       {}", missing.only_in_a.len());
            eprintln!("Only in B:       {}", missing.only_in_b.len());
            eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
        }

        Commands::Index { coordinates, format } => {
            let index = load(&coordinates, format)?;
            for (station, pair) in index.sorted() {
                println!("{}\t{}\t{}", station, pair.easting(), pair.northing());
            }
        }
    }

    Ok(())
}
