//! midi-chart - convert a MIDI file into a rhythm-game chart
//!
//! # Usage
//!
//! ```bash
//! # Default lanes (60-63), 4 steps per beat, 4 rows per step
//! midi-chart song.mid chart.txt
//!
//! # Drum lanes at eighth-note resolution
//! midi-chart drums.mid chart.txt --lanes 36,38,42,46 --subdivision 2
//! ```
//!
//! Set `RUST_LOG` to control log output (`info` by default).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use midichart::{
    ChartError,
    config::{DEFAULT_ROWS_PER_STEP, DEFAULT_SUBDIVISION},
    prelude::*,
};
use tracing_subscriber::EnvFilter;

/// Convert a MIDI file into a chart of 8-digit binary rows
#[derive(Parser)]
#[command(name = "midi-chart")]
#[command(about = "Convert a MIDI file into a rhythm-game chart")]
#[command(version)]
struct Cli {
    /// MIDI file to read
    input: PathBuf,

    /// Chart text file to write (replaced if it exists)
    output: PathBuf,

    /// Note number for each of the 4 lanes, comma separated
    #[arg(long, default_value_t = LaneMap::default())]
    lanes: LaneMap,

    /// Quantized steps per beat
    #[arg(long, default_value_t = DEFAULT_SUBDIVISION)]
    subdivision: u32,

    /// Chart rows emitted per step
    #[arg(long, default_value_t = DEFAULT_ROWS_PER_STEP)]
    rows_per_step: u32,

    /// Log at debug level when RUST_LOG is unset
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = EncoderConfig::default()
        .with_lane_map(cli.lanes)
        .with_subdivision(cli.subdivision)
        .with_rows_per_step(cli.rows_per_step);
    let encoder = ChartEncoder::new(config).context("Invalid encoder settings")?;

    let config = encoder.config();
    tracing::info!(
        "Lanes {}, {} step(s) per beat, {} row(s) per step",
        config.lane_map,
        config.subdivision,
        config.rows_per_step
    );

    match encoder.convert(&cli.input, &cli.output) {
        Ok(stats) => {
            tracing::info!(
                "Wrote {} row(s) to {} ({} of {} note(s) charted)",
                stats.rows,
                cli.output.display(),
                stats.painted,
                stats.intervals
            );
            if stats.out_of_lane > 0 {
                tracing::info!("{} note(s) had no lane", stats.out_of_lane);
            }
            if stats.degenerate > 0 {
                tracing::info!("{} note(s) were shorter than one step", stats.degenerate);
            }
            Ok(())
        }
        Err(ChartError::NoNotesFound) => {
            tracing::warn!("No notes found in {}, nothing written", cli.input.display());
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("Converting {}", cli.input.display())),
    }
}
