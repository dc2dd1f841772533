use core::fmt;
use core::str::FromStr;

use crate::ConfigError;

#[doc = r#"
Identifies the note a lane listens for.

Notes are interpreted as a 7-bit number, exactly as they appear in
note-on and note-off messages. Each value corresponds to some [`Key`] and [`Octave`].

[`Note`] `0` is `C(-1)`, and [`Note`] `127` is `G9`.

# Example
```rust
# use midichart::prelude::*;
let note = Note::from_byte(63).unwrap(); // 63 is between 0-127

assert_eq!(note.key(), Key::DSharp);
assert_eq!(note.octave().value(), 4);
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Note(u8);

impl Note {
    /// Create a new note.
    ///
    /// Checks for correctness (leading 0 bit).
    pub fn from_byte(byte: u8) -> Result<Self, ConfigError> {
        if byte > 127 {
            return Err(ConfigError::InvalidNote(byte));
        }
        Ok(Self(byte))
    }

    /// Creates a new note, masking off the leading bit.
    ///
    /// Used for bytes already validated by the MIDI parser.
    pub const fn from_byte_lossy(byte: u8) -> Self {
        Self(byte & 0x7F)
    }

    /// Identifies the key of the note
    #[inline]
    pub const fn key(&self) -> Key {
        Key::from_byte(self.0)
    }

    /// Identifies the octave of the note
    #[inline]
    pub const fn octave(&self) -> Octave {
        Octave::from_byte(self.0)
    }

    /// Returns the underlying byte of the note
    #[inline]
    pub const fn byte(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.0, self.key(), self.octave())
    }
}

impl TryFrom<u8> for Note {
    type Error = ConfigError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_byte(value)
    }
}

impl From<Note> for u8 {
    fn from(value: Note) -> Self {
        value.0
    }
}

impl From<midly::num::u7> for Note {
    fn from(value: midly::num::u7) -> Self {
        Self(value.as_int())
    }
}

impl FromStr for Note {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let byte = s
            .trim()
            .parse::<u8>()
            .map_err(|_| ConfigError::InvalidLaneList(s.to_owned()))?;
        Self::from_byte(byte)
    }
}

#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[doc = r#"
The pitch class of a [`Note`], independent of octave.
"#]
pub enum Key {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Key {
    /// Identify the key from a note byte.
    #[inline]
    pub const fn from_byte(byte: u8) -> Self {
        use Key::*;
        match byte % 12 {
            0 => C,
            1 => CSharp,
            2 => D,
            3 => DSharp,
            4 => E,
            5 => F,
            6 => FSharp,
            7 => G,
            8 => GSharp,
            9 => A,
            10 => ASharp,
            11 => B,
            _ => unreachable!(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Key::*;
        let name = match self {
            C => "C",
            CSharp => "C#",
            D => "D",
            DSharp => "D#",
            E => "E",
            F => "F",
            FSharp => "F#",
            G => "G",
            GSharp => "G#",
            A => "A",
            ASharp => "A#",
            B => "B",
        };
        f.write_str(name)
    }
}

#[doc = r#"
Identifies the octave for a [`Key`]. Values range from -1 to 9.
"#]
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Octave(i8);

impl Octave {
    /// Identify an octave from a note byte.
    pub const fn from_byte(byte: u8) -> Self {
        Self((byte / 12) as i8 - 1)
    }

    /// The octave, from `[-1,9]`
    pub const fn value(&self) -> i8 {
        self.0
    }
}

impl fmt::Display for Octave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[test]
fn middle_c_is_sixty() {
    let c4 = Note::from_byte(60).unwrap();
    assert_eq!(c4.key(), Key::C);
    assert_eq!(c4.octave().value(), 4);
}

#[test]
fn rejects_bytes_with_leading_bit() {
    assert!(matches!(
        Note::from_byte(128),
        Err(ConfigError::InvalidNote(128))
    ));
    assert_eq!(Note::from_byte_lossy(0x80 | 60).byte(), 60);
}

#[test]
fn parses_decimal_note_numbers() {
    assert_eq!("61".parse::<Note>().unwrap().byte(), 61);
    assert_eq!(" 62 ".parse::<Note>().unwrap().byte(), 62);
    assert!("C4".parse::<Note>().is_err());
    assert!(matches!(
        "200".parse::<Note>(),
        Err(ConfigError::InvalidNote(200))
    ));
}

#[test]
fn key_and_octave_follow_the_note_number() {
    for byte in 0..128 {
        let note = Note::from_byte(byte).unwrap();
        assert_eq!(note.key(), Key::from_byte(byte % 12));
        assert_eq!(note.octave().value(), (byte / 12) as i8 - 1);
    }
    assert_eq!(Note::from_byte(0).unwrap().octave().value(), -1);
    assert_eq!(Note::from_byte(127).unwrap().key(), Key::G);
    assert_eq!(Note::from_byte(127).unwrap().octave().value(), 9);
}

#[test]
fn displays_number_and_pitch() {
    let note = Note::from_byte(61).unwrap();
    assert_eq!(note.to_string(), "61 (C#:4)");
}
