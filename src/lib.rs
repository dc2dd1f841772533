#![warn(missing_docs)]
#![doc = r#"
Encode MIDI note events into fixed-width binary chart rows.

A chart is a list of rows, each holding a 2-bit code for each of four lanes
(buttons). It is written as plain text, one line of eight binary digits per
row, which is the format the rhythm-game hardware loads.

# Example
```rust,no_run
use midichart::prelude::*;

let config = EncoderConfig::default()
    .with_lane_map("60,61,62,63".parse()?)
    .with_subdivision(4)
    .with_rows_per_step(4);

let encoder = ChartEncoder::new(config)?;
match encoder.convert("song.mid", "chart.txt") {
    Ok(stats) => println!("wrote {} rows", stats.rows),
    Err(e) if e.is_no_notes() => println!("No notes found"),
    Err(e) => return Err(e.into()),
}
# Ok::<(), Box<dyn std::error::Error>>(())
```

# Feature flags
- `tracing`: emit [`tracing`](https://docs.rs/tracing) events while encoding
- `cli`: the `midi-chart` binary
- `serde`: `Serialize`/`Deserialize` for configuration and chart types
"#]

pub mod chart;
pub mod config;
pub mod encoder;
pub mod event;
pub mod file;
pub mod pairing;
pub mod quantize;

mod error;
pub use error::*;

mod note;
pub use note::*;

mod ticks;
pub use ticks::*;

/// Common re-exports
pub mod prelude {
    pub use crate::{
        ChartError, ChartResult, ConfigError, DecodeError, Key, Note, Octave, SourceError, Ticks,
        chart::{Chart, LANES, LaneCode, RESERVED_CODE, Row},
        config::{EncoderConfig, LaneMap},
        encoder::{ChartEncoder, EncodeStats, EncodedChart},
        event::NoteEvent,
        file::{FormatType, MidiFile, SmpteFps, Timing, Track},
        pairing::{NoteInterval, pair_track, pair_tracks},
        quantize::{Quantizer, quantize},
    };
}
