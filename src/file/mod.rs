#![doc = r#"
The MIDI source the chart encoder reads from.

Byte-level parsing is handled by [`midly`]. A [`MidiFile`] keeps only
what the encoder needs: the header [`Timing`] and, per track, the
note-on and note-off events placed at absolute ticks.
"#]

mod note_event_iter;
pub use note_event_iter::*;

mod timing;
pub use timing::*;

mod track;
pub use track::*;

use std::{fs, path::Path};

use crate::SourceError;

/// How the tracks of a file relate to one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// Format 0
    SingleMultiChannel,
    /// Format 1
    Simultaneous,
    /// Format 2
    SequentiallyIndependent,
}

impl From<midly::Format> for FormatType {
    fn from(value: midly::Format) -> Self {
        match value {
            midly::Format::SingleTrack => Self::SingleMultiChannel,
            midly::Format::Parallel => Self::Simultaneous,
            midly::Format::Sequential => Self::SequentiallyIndependent,
        }
    }
}

#[doc = r#"
Timing and note events of a standard MIDI file.

Tracks keep their file order; the encoder relies on it.
"#]
#[derive(Clone, Debug, PartialEq)]
pub struct MidiFile {
    timing: Timing,
    format: FormatType,
    tracks: Vec<Track>,
}

impl MidiFile {
    /// Build a source from tracks that have already been read.
    pub fn new(timing: Timing, tracks: Vec<Track>) -> Self {
        let format = if tracks.len() == 1 {
            FormatType::SingleMultiChannel
        } else {
            FormatType::Simultaneous
        };
        Self {
            timing,
            format,
            tracks,
        }
    }

    /// Parse a set of bytes into a file struct
    pub fn parse(bytes: &[u8]) -> Result<Self, SourceError> {
        let smf = midly::Smf::parse(bytes)?;
        let tracks = smf
            .tracks
            .iter()
            .map(|events| Track::from_midly(events))
            .collect();

        Ok(Self {
            timing: smf.header.timing.into(),
            format: smf.header.format.into(),
            tracks,
        })
    }

    /// Read and parse the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&bytes)
    }

    /// Returns header info
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Returns the format type for the file.
    pub fn format_type(&self) -> FormatType {
        self.format
    }

    /// Returns the tracks, in file order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Total number of note events across all tracks
    pub fn event_count(&self) -> usize {
        self.tracks.iter().map(|t| t.events().len()).sum()
    }
}
