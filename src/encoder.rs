#![doc = r#"
Turns a [`MidiFile`] into a [`Chart`].

# Pipeline

1. Pair press and release events into [`NoteInterval`]s, track by track.
2. Quantize both ends of each interval to a step.
3. Expand each step into `rows_per_step` rows and paint the interval's lane.
4. Render the rows as text.

Intervals are painted in the order pairing produced them: tracks in file
order, then intervals in the order they were released. Where two intervals
on one lane cover the same rows, the later one overwrites the earlier.

The chart is sized from the latest release in the file:
`(last_step + 1) * rows_per_step` rows. It is fully built before any output
is opened, so a failed encode never leaves a partial file behind.
"#]

use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::prelude::*;

/// Counts describing one encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodeStats {
    /// Intervals produced by pairing, across all tracks
    pub intervals: usize,
    /// Intervals that painted at least one row
    pub painted: usize,
    /// Intervals whose note has no lane
    pub out_of_lane: usize,
    /// Intervals that started and ended on the same step
    pub degenerate: usize,
    /// Quantized steps in the chart
    pub steps: u64,
    /// Rows in the chart
    pub rows: usize,
}

/// A chart along with how it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedChart {
    chart: Chart,
    stats: EncodeStats,
}

impl EncodedChart {
    /// The encoded chart
    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    /// Counts from the encode
    pub fn stats(&self) -> EncodeStats {
        self.stats
    }
}

#[doc = r#"
Encodes MIDI files into charts with a fixed configuration.

# Example
```rust
# use midichart::prelude::*;
let c4 = Note::from_byte(60).unwrap();
let track = Track::new(vec![
    NoteEvent::on(c4, 64, Ticks::new(0)),
    NoteEvent::off(c4, Ticks::new(240)),
]);
let file = MidiFile::new(Timing::new_ticks_per_quarter_note(480), vec![track]);

let encoder = ChartEncoder::new(EncoderConfig::default()).unwrap();
let encoded = encoder.encode(&file).unwrap();

assert_eq!(encoded.chart().len(), 12);
assert_eq!(encoded.chart().rows()[0].to_string(), "10000000");
assert_eq!(encoded.chart().rows()[4].to_string(), "01000000");
assert_eq!(encoded.chart().rows()[8].to_string(), "00000000");
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartEncoder {
    config: EncoderConfig,
}

impl ChartEncoder {
    /// Create an encoder, checking the configuration first.
    pub fn new(config: EncoderConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encodes every track of `file` into one chart.
    ///
    /// Returns [`ChartError::NoNotesFound`] if no note in the file was ever
    /// released.
    pub fn encode(&self, file: &MidiFile) -> ChartResult<EncodedChart> {
        let ticks_per_beat = file.timing().ticks_per_beat()?;
        let quantizer = Quantizer::new(ticks_per_beat, self.config.subdivision)?;

        let intervals = pair_tracks(file.tracks());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Paired {} interval(s) from {} track(s), {} ticks per step",
            intervals.len(),
            file.tracks().len(),
            quantizer.ticks_per_step()
        );

        self.expand(&intervals, quantizer)
    }

    /// Paints `intervals`, in order, onto a fresh chart.
    pub fn expand(&self, intervals: &[NoteInterval], quantizer: Quantizer) -> ChartResult<EncodedChart> {
        let Some(max_end) = intervals.iter().map(|i| i.end_tick).max() else {
            return Err(ChartError::NoNotesFound);
        };

        let rows_per_step = self.config.rows_per_step as usize;
        let steps = quantizer.step(max_end) + 1;
        let num_rows = usize::try_from(steps)
            .ok()
            .and_then(|steps| steps.checked_mul(rows_per_step))
            .ok_or(ConfigError::ChartTooLarge {
                steps,
                rows_per_step: self.config.rows_per_step,
            })?;

        let mut chart = Chart::blank(num_rows);
        let mut stats = EncodeStats {
            intervals: intervals.len(),
            steps,
            rows: num_rows,
            ..Default::default()
        };

        for interval in intervals {
            let Some(lane) = self.config.lane_map.lane_of(interval.note) else {
                #[cfg(feature = "tracing")]
                tracing::trace!("Note {} has no lane, skipping", interval.note);
                stats.out_of_lane += 1;
                continue;
            };

            let start_step = quantizer.step(interval.start_tick);
            let end_step = quantizer.step(interval.end_tick);
            if start_step == end_step {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    "Note {} at {} is {} tick(s) long, shorter than a step, skipping",
                    interval.note,
                    interval.start_tick,
                    interval.duration()
                );
                stats.degenerate += 1;
                continue;
            }

            // Both steps are below `steps`, so these stay under `num_rows`.
            let start_row = start_step as usize * rows_per_step;
            let end_row = end_step as usize * rows_per_step;
            if chart.paint(lane, start_row, end_row, rows_per_step) > 0 {
                stats.painted += 1;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Painted {} of {} interval(s) onto {} row(s)",
            stats.painted,
            stats.intervals,
            stats.rows
        );

        Ok(EncodedChart { chart, stats })
    }

    /// Encodes `file` and writes the chart to `path`, replacing any existing file.
    pub fn encode_to_path(&self, file: &MidiFile, path: impl AsRef<Path>) -> ChartResult<EncodeStats> {
        let encoded = self.encode(file)?;
        write_chart(encoded.chart(), path.as_ref())?;
        Ok(encoded.stats())
    }

    /// Reads the MIDI file at `input` and writes its chart to `output`.
    pub fn convert(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> ChartResult<EncodeStats> {
        let input = input.as_ref();
        let file = MidiFile::open(input)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Read {} note event(s) from {} ({:?}, {} track(s))",
            file.event_count(),
            input.display(),
            file.format_type(),
            file.tracks().len()
        );

        self.encode_to_path(&file, output)
    }
}

/// Writes a finished chart to `path` through a buffered writer.
pub fn write_chart(chart: &Chart, path: &Path) -> ChartResult<()> {
    let output_err = |source| ChartError::OutputWrite {
        path: PathBuf::from(path),
        source,
    };
    let file = File::create(path).map_err(output_err)?;
    chart.write_to(BufWriter::new(file)).map_err(output_err)
}
