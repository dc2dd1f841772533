use crate::SourceError;

/// The header timing type.
///
/// This is either the number of ticks per quarter note or
/// the alternative SMPTE format. Only the former has a beat for
/// the chart encoder to subdivide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    /// The midi file's delta times are defined using a tick rate per quarter note
    TicksPerQuarterNote(TicksPerQuarterNote),

    /// The midi file's delta times are defined using an SMPTE and MIDI Time Code
    Smpte(SmpteHeader),
}

impl Timing {
    /// The tickrate per quarter note defines what a "quarter note" means.
    ///
    /// The leading bit of the u16 is disregarded, so 1-32767
    pub const fn new_ticks_per_quarter_note(tpqn: u16) -> Self {
        Self::TicksPerQuarterNote(TicksPerQuarterNote(tpqn & 0x7FFF))
    }

    /// Define the timing in terms of fps and ticks per frame
    pub const fn new_smpte(fps: SmpteFps, ticks_per_frame: u8) -> Self {
        Self::Smpte(SmpteHeader {
            fps,
            ticks_per_frame,
        })
    }

    /// Returns Some if the midi timing is defined
    /// as ticks per quarter note
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        match self {
            Self::TicksPerQuarterNote(t) => Some(t.ticks_per_quarter_note()),
            _ => None,
        }
    }

    /// Returns the pulses per beat, or an error for timecode-based files.
    pub fn ticks_per_beat(&self) -> Result<u16, SourceError> {
        match self {
            Self::TicksPerQuarterNote(t) => Ok(t.ticks_per_quarter_note()),
            Self::Smpte(s) => Err(SourceError::UnsupportedTiming {
                fps: s.fps().as_division(),
                ticks_per_frame: s.ticks_per_frame(),
            }),
        }
    }
}

impl From<midly::Timing> for Timing {
    fn from(value: midly::Timing) -> Self {
        match value {
            midly::Timing::Metrical(tpqn) => Self::new_ticks_per_quarter_note(tpqn.as_int()),
            midly::Timing::Timecode(fps, ticks_per_frame) => {
                let fps = match fps {
                    midly::Fps::Fps24 => SmpteFps::TwentyFour,
                    midly::Fps::Fps25 => SmpteFps::TwentyFive,
                    midly::Fps::Fps29 => SmpteFps::TwentyNine,
                    midly::Fps::Fps30 => SmpteFps::Thirty,
                };
                Self::new_smpte(fps, ticks_per_frame)
            }
        }
    }
}

/// A representation of the `tpqn` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub struct TicksPerQuarterNote(u16);

impl TicksPerQuarterNote {
    /// Returns the ticks per quarter note for the file.
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        self.0
    }
}

/// A representation of the `smpte` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub struct SmpteHeader {
    fps: SmpteFps,
    ticks_per_frame: u8,
}

impl SmpteHeader {
    /// Returns the frames per second
    pub const fn fps(&self) -> SmpteFps {
        self.fps
    }

    /// Returns the ticks per frame
    pub const fn ticks_per_frame(&self) -> u8 {
        self.ticks_per_frame
    }
}

/// The possible FPS (Frames Per Second) for MIDI tracks and files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmpteFps {
    /// 24 frames per second
    TwentyFour,
    /// 25 frames per second
    TwentyFive,
    /// 29.97 frames per second, drop-frame
    TwentyNine,
    /// 30 frames per second
    Thirty,
}

impl SmpteFps {
    /// Get the nominal frame rate as an integer division value.
    ///
    /// Drop-frame 29.97 fps returns 30 here, as MIDI uses the nominal rate
    /// for division calculations.
    pub const fn as_division(&self) -> u8 {
        match self {
            Self::TwentyFour => 24,
            Self::TwentyFive => 25,
            Self::TwentyNine => 30,
            Self::Thirty => 30,
        }
    }
}

#[test]
fn metrical_timing_has_a_beat() {
    let timing = Timing::from(midly::Timing::Metrical(midly::num::u15::new(480)));
    assert_eq!(timing.ticks_per_quarter_note(), Some(480));
    assert_eq!(timing.ticks_per_beat().unwrap(), 480);
}

#[test]
fn leading_bit_is_disregarded() {
    let timing = Timing::new_ticks_per_quarter_note(0x8000 | 96);
    assert_eq!(timing.ticks_per_quarter_note(), Some(96));
}

#[test]
fn timecode_timing_is_unsupported() {
    let timing = Timing::from(midly::Timing::Timecode(midly::Fps::Fps29, 40));
    let Timing::Smpte(header) = timing else {
        panic!("expected smpte timing");
    };
    assert_eq!(header.fps(), SmpteFps::TwentyNine);
    assert!(matches!(
        timing.ticks_per_beat(),
        Err(SourceError::UnsupportedTiming {
            fps: 30,
            ticks_per_frame: 40
        })
    ));
}
