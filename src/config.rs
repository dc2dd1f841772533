//! Lane assignment and rates for the chart encoder.

use core::{fmt, str::FromStr};

use crate::{chart::LANES, prelude::*};

/// Steps per beat unless configured otherwise
pub const DEFAULT_SUBDIVISION: u32 = 4;
/// Rows per step unless configured otherwise
pub const DEFAULT_ROWS_PER_STEP: u32 = 4;

#[doc = r#"
Assigns one note to each lane.

Notes outside the map are ignored by the encoder. If a note is listed
twice, the first lane holding it wins.

# Example
```rust
# use midichart::prelude::*;
let lanes: LaneMap = "36, 38, 42, 46".parse().unwrap();
assert_eq!(lanes.lane_of(Note::from_byte(42).unwrap()), Some(2));
assert_eq!(lanes.lane_of(Note::from_byte(60).unwrap()), None);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneMap([Note; LANES]);

impl LaneMap {
    /// Create a lane map, lane 0 first
    pub const fn new(notes: [Note; LANES]) -> Self {
        Self(notes)
    }

    /// Create a lane map from a slice that must hold exactly four notes.
    pub fn from_slice(notes: &[Note]) -> Result<Self, ConfigError> {
        <[Note; LANES]>::try_from(notes)
            .map(Self)
            .map_err(|_| ConfigError::LaneCount(notes.len()))
    }

    /// The lane `note` is assigned to, if any
    pub fn lane_of(&self, note: Note) -> Option<usize> {
        self.0.iter().position(|lane_note| *lane_note == note)
    }

    /// Returns the notes, lane 0 first
    pub fn notes(&self) -> &[Note; LANES] {
        &self.0
    }
}

impl Default for LaneMap {
    /// Middle C and the three semitones above it
    fn default() -> Self {
        Self([60, 61, 62, 63].map(Note::from_byte_lossy))
    }
}

impl FromStr for LaneMap {
    type Err = ConfigError;
    /// Reads a comma-separated list of note numbers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notes = s
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<Note>, _>>()?;
        Self::from_slice(&notes)
    }
}

impl fmt::Display for LaneMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0.map(|note| note.byte());
        write!(f, "{a},{b},{c},{d}")
    }
}

#[doc = r#"
How a MIDI file is turned into a chart.

# Example
```rust
# use midichart::prelude::*;
let config = EncoderConfig::default()
    .with_subdivision(8)
    .with_rows_per_step(2);
assert!(config.validate().is_ok());

let bad = EncoderConfig::default().with_rows_per_step(0);
assert_eq!(bad.validate(), Err(ConfigError::ZeroRowsPerStep));
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncoderConfig {
    /// Which note each lane listens for
    pub lane_map: LaneMap,
    /// Steps per beat
    pub subdivision: u32,
    /// Hardware rows per step
    pub rows_per_step: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            lane_map: LaneMap::default(),
            subdivision: DEFAULT_SUBDIVISION,
            rows_per_step: DEFAULT_ROWS_PER_STEP,
        }
    }
}

impl EncoderConfig {
    /// Replace the lane map
    pub fn with_lane_map(mut self, lane_map: LaneMap) -> Self {
        self.lane_map = lane_map;
        self
    }

    /// Replace the steps per beat
    pub fn with_subdivision(mut self, subdivision: u32) -> Self {
        self.subdivision = subdivision;
        self
    }

    /// Replace the rows per step
    pub fn with_rows_per_step(mut self, rows_per_step: u32) -> Self {
        self.rows_per_step = rows_per_step;
        self
    }

    /// Checks the parts of the configuration that do not depend on the source.
    ///
    /// Whether the subdivision fits the file's resolution is checked once the
    /// file is known (see [`Quantizer::new`]).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.subdivision == 0 {
            return Err(ConfigError::ZeroSubdivision);
        }
        if self.rows_per_step == 0 {
            return Err(ConfigError::ZeroRowsPerStep);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lanes_are_60_to_63() {
        assert_eq!(LaneMap::default().to_string(), "60,61,62,63");
        let config = EncoderConfig::default();
        assert_eq!(config.subdivision, 4);
        assert_eq!(config.rows_per_step, 4);
    }

    #[test]
    fn lane_count_must_be_four() {
        assert_eq!(
            "60,61,62".parse::<LaneMap>(),
            Err(ConfigError::LaneCount(3))
        );
        assert_eq!(
            "60,61,62,63,64".parse::<LaneMap>(),
            Err(ConfigError::LaneCount(5))
        );
    }

    #[test]
    fn lane_list_entries_must_be_notes() {
        assert_eq!(
            "60,x,62,63".parse::<LaneMap>(),
            Err(ConfigError::InvalidLaneList("x".to_owned()))
        );
        assert_eq!(
            "60,61,62,128".parse::<LaneMap>(),
            Err(ConfigError::InvalidNote(128))
        );
    }

    #[test]
    fn duplicate_note_resolves_to_first_lane() {
        let lanes: LaneMap = "40,41,40,42".parse().unwrap();
        assert_eq!(lanes.lane_of(Note::from_byte(40).unwrap()), Some(0));
    }

    #[test]
    fn zero_subdivision_is_rejected() {
        let config = EncoderConfig::default().with_subdivision(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroSubdivision));
    }
}
