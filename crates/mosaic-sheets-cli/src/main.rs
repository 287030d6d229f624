//! Mosaic CLI - paint an image onto spreadsheet cells

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use mosaic_sheets::prelude::*;
use mosaic_sheets::DEFAULT_STEP;

#[derive(Parser)]
#[command(name = "mosaic")]
#[command(
    author,
    version,
    about = "Convert an image into a spreadsheet of solid-filled cells"
)]
struct Cli {
    /// Source image (png, jpeg, gif, bmp, tiff, webp); format is detected from content
    input: PathBuf,

    /// Output XLSX file (default: input path with an .xlsx extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Edge length in pixels of the block averaged into each cell
    #[arg(short, long, default_value_t = DEFAULT_STEP as i64, allow_negative_numbers = true)]
    step: i64,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output(&cli.input));
    let step = parse_step(cli.step)?;

    let grid = convert(&cli.input, &output, &MosaicOptions::with_step(step)).with_context(|| {
        format!(
            "Failed to convert '{}' into '{}'",
            cli.input.display(),
            output.display()
        )
    })?;

    eprintln!(
        "Wrote {} rows x {} columns to '{}'",
        grid.rows(),
        grid.cols(),
        output.display()
    );
    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Non-positive steps are rejected the same way the library rejects zero
fn parse_step(step: i64) -> Result<u32> {
    u32::try_from(step)
        .ok()
        .filter(|&s| s > 0)
        .ok_or_else(|| {
            MosaicError::InvalidParameter(format!(
                "step must be a positive number of pixels, got {step}"
            ))
        })
        .context("Invalid --step")
}

fn default_output(input: &Path) -> PathBuf {
    input.with_extension("xlsx")
}
