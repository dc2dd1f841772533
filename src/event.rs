#![doc = r#"
Contains the note events the chart encoder consumes

# Hierarchy
```text
            |-------------|
            |  NoteEvent  |
            |-------------|
             /           \
|----------------|   |-----------------|
| note-on (vel>0)|   | release         |
|----------------|   | note-off, or    |
                     | note-on (vel=0) |
                     |-----------------|
```
"#]

use crate::prelude::*;

#[doc = r#"
A note-on or note-off message placed at an absolute tick within its track.

Every other kind of track message (controllers, meta events, sysex) is
dropped before it becomes a [`NoteEvent`].
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteEvent {
    /// The note this event presses or releases
    pub note: Note,
    /// Velocity, `0..=127`
    pub velocity: u8,
    /// True for a note-on message
    pub is_on: bool,
    /// Running sum of delta times within the track
    pub absolute_tick: Ticks,
}

impl NoteEvent {
    /// A note-on message
    pub const fn on(note: Note, velocity: u8, absolute_tick: Ticks) -> Self {
        Self {
            note,
            velocity,
            is_on: true,
            absolute_tick,
        }
    }

    /// A note-off message
    pub const fn off(note: Note, absolute_tick: Ticks) -> Self {
        Self {
            note,
            velocity: 0,
            is_on: false,
            absolute_tick,
        }
    }

    /// True if this event starts a note: a note-on with a positive velocity.
    #[inline]
    pub const fn is_press(&self) -> bool {
        self.is_on && self.velocity > 0
    }

    /// True if this event ends a note.
    ///
    /// A note-on with zero velocity is treated identically to a note-off.
    #[inline]
    pub const fn is_release(&self) -> bool {
        !self.is_press()
    }

    /// Converts a parsed MIDI message into a note event, if it is one.
    pub fn from_midi(message: &midly::MidiMessage, absolute_tick: Ticks) -> Option<Self> {
        use midly::MidiMessage::*;
        match *message {
            NoteOn { key, vel } => Some(Self::on(key.into(), vel.as_int(), absolute_tick)),
            NoteOff { key, vel } => Some(Self {
                note: key.into(),
                velocity: vel.as_int(),
                is_on: false,
                absolute_tick,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use midly::num::u7;

    #[test]
    fn zero_velocity_note_on_is_a_release() {
        let note = Note::from_byte(60).unwrap();
        assert!(NoteEvent::on(note, 64, Ticks::ZERO).is_press());
        assert!(NoteEvent::on(note, 0, Ticks::ZERO).is_release());
        assert!(NoteEvent::off(note, Ticks::ZERO).is_release());
    }

    #[test]
    fn converts_only_note_messages() {
        let on = midly::MidiMessage::NoteOn {
            key: u7::new(61),
            vel: u7::new(100),
        };
        let event = NoteEvent::from_midi(&on, Ticks::new(96)).unwrap();
        assert_eq!(event.note.byte(), 61);
        assert_eq!(event.velocity, 100);
        assert_eq!(event.absolute_tick, Ticks::new(96));

        let off = midly::MidiMessage::NoteOff {
            key: u7::new(61),
            vel: u7::new(64),
        };
        let event = NoteEvent::from_midi(&off, Ticks::new(192)).unwrap();
        assert!(!event.is_on);
        assert!(event.is_release());

        let program = midly::MidiMessage::ProgramChange { program: u7::new(3) };
        assert_eq!(NoteEvent::from_midi(&program, Ticks::ZERO), None);
    }
}
