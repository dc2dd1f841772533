use crate::prelude::*;

/// An iterator over the note events of one parsed track.
///
/// Delta times of every message, including the ones that are skipped,
/// are summed so that `absolute_tick` reflects the position in the track.
pub struct NoteEventIter<'a, 'b> {
    position: Ticks,
    events: core::slice::Iter<'b, midly::TrackEvent<'a>>,
}

impl<'a, 'b> NoteEventIter<'a, 'b> {
    /// Begins at tick zero of the given track.
    pub fn new(events: &'b [midly::TrackEvent<'a>]) -> Self {
        Self {
            position: Ticks::ZERO,
            events: events.iter(),
        }
    }
}

impl Iterator for NoteEventIter<'_, '_> {
    type Item = NoteEvent;
    fn next(&mut self) -> Option<Self::Item> {
        for event in self.events.by_ref() {
            self.position += event.delta.as_int();
            if let midly::TrackEventKind::Midi { message, .. } = &event.kind
                && let Some(note_event) = NoteEvent::from_midi(message, self.position)
            {
                return Some(note_event);
            }
        }
        None
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.events.len()))
    }
}
