//! Downsamples a raw binary cubic grid file to a smaller grid size by block averaging.
//!
//! ```text
//! downsample_grid -f density_256.bin -o density_128.bin -p double -s 256 -d 128
//! ```

use grid_downsample::prelude::*;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "downsample_grid", version)]
#[command(about = "Downsample a raw binary cubic grid by averaging disjoint blocks of cells")]
struct Args {
    /// Path to the input grid file
    #[arg(short = 'f', long = "fname-in")]
    fname_in: PathBuf,

    /// Path to the output grid file
    #[arg(short = 'o', long = "fname-out")]
    fname_out: PathBuf,

    /// Precision of the cells in both grids: "float" or "double"
    #[arg(short, long)]
    precision: Precision,

    /// Number of cells per dimension of the input grid
    #[arg(short = 's', long)]
    gridsize_in: i32,

    /// Number of cells per dimension of the output grid
    #[arg(short = 'd', long)]
    gridsize_out: i32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Checks the grid sizes before touching any file. Returns the block factor.
fn validate(args: &Args) -> Result<i32> {
    if args.gridsize_in < args.gridsize_out {
        bail!(
            "this is a downsampler, the output gridsize ({}) must not exceed the input gridsize ({})",
            args.gridsize_out,
            args.gridsize_in
        );
    }

    block_factor(args.gridsize_in, args.gridsize_out).context("invalid grid sizes")
}

fn run<T>(args: &Args) -> Result<()>
where
    T: GridValue,
{
    let input: Array3<T> = read_grid(&args.fname_in, args.gridsize_in)
        .with_context(|| format!("failed to read {}", args.fname_in.display()))?;
    info!("Input grid read, now averaging blocks");

    let output = downsample(&input, args.gridsize_out)?;

    write_grid(&args.fname_out, &output)
        .with_context(|| format!("failed to write {}", args.fname_out.display()))?;
    info!("Downsampled grid saved to {}", args.fname_out.display());

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let factor = validate(&args)?;

    info!("Input grid: {}", args.fname_in.display());
    info!("Output grid: {}", args.fname_out.display());
    info!("Input gridsize: {}", args.gridsize_in);
    info!("Output gridsize: {}", args.gridsize_out);
    info!("Block factor: {}", factor);
    info!("Precision: {}", args.precision);

    match args.precision {
        Precision::Float => run::<f32>(&args),
        Precision::Double => run::<f64>(&args),
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
