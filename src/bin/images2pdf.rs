//! CLI binary for images2pdf.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ConversionConfig` and prints the result.

use anyhow::{Context, Result};
use clap::Parser;
use images2pdf::{convert_to_file, ConversionConfig};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// images2pdf - images convert to pdf
#[derive(Parser, Debug)]
#[command(
    name = "images2pdf",
    version,
    about = "images2pdf - images convert to pdf",
    long_about = "Collect the .png, .jpg, .jpeg, .gif, .tiff and .bmp files directly inside \
a folder, sorted by file name, into a single PDF with one page per image. Each page takes \
the size of its image. Files that cannot be decoded are logged and skipped."
)]
struct Cli {
    /// input folder path
    #[arg(short, long)]
    input_folder: PathBuf,

    /// output file path
    #[arg(short, long)]
    output_file: PathBuf,

    /// log verbosity level (0 or less = info, 1 = debug, 2+ = trace)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    verbose: i32,
}

impl Cli {
    fn log_filter(&self) -> &'static str {
        match self.verbose {
            i32::MIN..=0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Verbosity comes from the flag alone; RUST_LOG is not consulted.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_filter()))
        .with_writer(io::stderr)
        .init();

    let config = ConversionConfig::builder()
        .build()
        .context("Failed to build conversion config")?;

    convert_to_file(&cli.input_folder, &cli.output_file, &config).with_context(|| {
        format!(
            "Failed to convert {} to {}",
            cli.input_folder.display(),
            cli.output_file.display()
        )
    })?;

    println!("PDF file saved as {}.", cli.output_file.display());
    Ok(())
}
