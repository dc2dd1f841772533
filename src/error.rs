use std::{io, path::PathBuf};

use thiserror::Error;

#[doc = r#"
A set of errors that can occur while turning a MIDI file into a chart
"#]
#[derive(Debug, Error)]
pub enum ChartError {
    /// Pairing produced no intervals. Nothing is written.
    #[error("No notes found")]
    NoNotesFound,
    /// The encoder configuration cannot produce a chart
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// The MIDI source could not be read
    #[error("Reading MIDI source: {0}")]
    Source(#[from] SourceError),
    /// The chart could not be written to its destination
    #[error("Writing chart to {}: {source}", .path.display())]
    OutputWrite {
        /// Destination path
        path: PathBuf,
        /// Underlying io error
        source: io::Error,
    },
}

impl ChartError {
    /// True if the source produced no intervals.
    ///
    /// This is the one non-fatal outcome of an encode.
    pub const fn is_no_notes(&self) -> bool {
        matches!(self, Self::NoNotesFound)
    }
}

/// Problems with the caller-supplied lane map, subdivision or row rate
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The lane map must have exactly four entries
    #[error("Expected 4 lane notes, got {0}")]
    LaneCount(usize),
    /// A lane list entry was not a note number
    #[error("Could not read lane note from {0:?}")]
    InvalidLaneList(String),
    /// Note numbers are 7-bit
    #[error("Note {0} is out of range (0-127)")]
    InvalidNote(u8),
    /// Subdivision must be positive
    #[error("Subdivision must be a positive integer")]
    ZeroSubdivision,
    /// Rows per step must be positive
    #[error("Rows per step must be a positive integer")]
    ZeroRowsPerStep,
    /// `ticks_per_beat / subdivision` truncated to zero
    #[error(
        "{ticks_per_beat} ticks per beat cannot be split into {subdivision} steps of at least one tick"
    )]
    StepTooSmall {
        /// Resolution of the source
        ticks_per_beat: u16,
        /// Requested steps per beat
        subdivision: u32,
    },
    /// `steps * rows_per_step` does not fit in memory addressing
    #[error("A chart of {steps} steps at {rows_per_step} rows per step is too large")]
    ChartTooLarge {
        /// Quantized steps the chart would hold
        steps: u64,
        /// Configured rows per step
        rows_per_step: u32,
    },
}

/// Failures from the MIDI source, surfaced as reported.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The bytes are not a readable standard MIDI file
    #[error("Parsing {0}")]
    Parse(#[from] midly::Error),
    /// The file could not be opened
    #[error("Opening {}: {source}", .path.display())]
    Io {
        /// Source path
        path: PathBuf,
        /// Underlying io error
        source: io::Error,
    },
    /// Timecode-based files have no beat to subdivide
    #[error("SMPTE timing ({fps} fps, {ticks_per_frame} ticks per frame) has no ticks per beat")]
    UnsupportedTiming {
        /// Frame rate from the header
        fps: u8,
        /// Subframe resolution from the header
        ticks_per_frame: u8,
    },
}

/// Errors reading chart text back into rows
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Each line must be exactly eight digits
    #[error("Line {line}: expected 8 digits, found {len}")]
    LineLength {
        /// 1-based line number
        line: usize,
        /// Length found
        len: usize,
    },
    /// Only `0` and `1` may appear
    #[error("Line {line}, column {column}: not a binary digit")]
    InvalidDigit {
        /// 1-based line number
        line: usize,
        /// 1-based column
        column: usize,
    },
    /// `11` is never emitted by the encoder
    #[error("Line {line}, lane {lane}: reserved code 11")]
    ReservedCode {
        /// 1-based line number
        line: usize,
        /// Lane index, 0-3
        lane: usize,
    },
}

/// The chart result type (see [`ChartError`])
pub type ChartResult<T> = Result<T, ChartError>;
