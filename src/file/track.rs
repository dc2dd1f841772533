use crate::prelude::*;

use super::NoteEventIter;

#[doc = r#"
The note events of a single track, in file order
"#]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Track {
    events: Vec<NoteEvent>,
}

impl Track {
    /// Create a track from events already placed at absolute ticks.
    pub fn new(events: Vec<NoteEvent>) -> Self {
        Self { events }
    }

    /// Collects the note events out of a parsed track.
    pub fn from_midly(events: &[midly::TrackEvent<'_>]) -> Self {
        Self::new(NoteEventIter::new(events).collect())
    }

    /// Returns the note events of the track
    pub fn events(&self) -> &[NoteEvent] {
        &self.events
    }

    /// True if the track holds no note events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
