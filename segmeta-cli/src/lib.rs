/// Command line front end converting segmentation transforms to JSON
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use segmeta_core::{json, parser, JsonStyle, SegmentationRecord};
use thiserror::Error;
use tracing::Level;

/// Suffix appended to the input path to name the default output file
pub const OUTPUT_SUFFIX: &str = ".out.json";

/// Convert a scene segmentation transform file into a JSON array of
/// oriented bounding boxes.
#[derive(Parser, Debug)]
#[command(name = "segmeta", version)]
pub struct Args {
    /// Segmentation transform file to read
    pub filename: PathBuf,

    /// Write the JSON here instead of <FILENAME>.out.json
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the array on a single line
    #[arg(long)]
    pub compact: bool,

    /// Raise log verbosity (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.filename))
    }

    pub fn style(&self) -> JsonStyle {
        if self.compact {
            JsonStyle::Compact
        } else {
            JsonStyle::Pretty
        }
    }

    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// `<input>.out.json`
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_owned();
    path.push(OUTPUT_SUFFIX);
    PathBuf::from(path)
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unable to open file \"{}\": {source}", .path.display())]
    OpenInput { path: PathBuf, source: io::Error },

    #[error("Unable to write \"{}\": {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        source: segmeta_core::Error,
    },
}

impl CliError {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::OpenInput { .. } => -1,
            CliError::WriteOutput { .. } => 1,
        }
    }
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub output: PathBuf,
    pub records: usize,
    pub skipped_tokens: usize,
    pub truncated: bool,
}

/// Install a stderr log subscriber at `level`.
pub fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Read the input file, rebuild every record and write the JSON output.
pub fn run(args: &Args) -> Result<Conversion, CliError> {
    let input = &args.filename;
    let data = fs::read(input).map_err(|source| CliError::OpenInput {
        path: input.clone(),
        source,
    })?;

    tracing::info!("Reading records from {}", input.display());
    let outcome = parser::parse_records_with_stats(&String::from_utf8_lossy(&data));

    let output = args.output_path();
    write_output(&output, &outcome.records, args.style()).map_err(|source| {
        CliError::WriteOutput {
            path: output.clone(),
            source,
        }
    })?;
    tracing::info!(
        "Wrote {} records to {}",
        outcome.records.len(),
        output.display()
    );

    Ok(Conversion {
        output,
        records: outcome.records.len(),
        skipped_tokens: outcome.skipped_tokens,
        truncated: outcome.truncated,
    })
}

fn write_output(
    path: &Path,
    records: &[SegmentationRecord],
    style: JsonStyle,
) -> segmeta_core::Result<()> {
    let file = File::create(path)?;
    json::write_records(BufWriter::new(file), records, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("scans/house.txt")),
            PathBuf::from("scans/house.txt.out.json")
        );
    }

    #[test]
    fn test_missing_filename_is_usage_error() {
        let err = Args::try_parse_from(["segmeta"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["segmeta", "house.txt"]).unwrap();
        assert_eq!(args.output_path(), PathBuf::from("house.txt.out.json"));
        assert_eq!(args.style(), JsonStyle::Pretty);
        assert_eq!(args.log_level(), Level::INFO);
    }

    #[test]
    fn test_options() {
        let args =
            Args::try_parse_from(["segmeta", "-vv", "--compact", "-o", "boxes.json", "house.txt"])
                .unwrap();
        assert_eq!(args.output_path(), PathBuf::from("boxes.json"));
        assert_eq!(args.style(), JsonStyle::Compact);
        assert_eq!(args.log_level(), Level::TRACE);

        let args = Args::try_parse_from(["segmeta", "-q", "house.txt"]).unwrap();
        assert_eq!(args.log_level(), Level::ERROR);
    }

    #[test]
    fn test_open_error_exit_code() {
        let args = Args::try_parse_from(["segmeta", "/nonexistent/segmeta/input.txt"]).unwrap();
        let err = run(&args).unwrap_err();
        assert!(matches!(err, CliError::OpenInput { .. }));
        assert_eq!(err.exit_code(), -1);
    }
}
