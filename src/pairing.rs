#![doc = r#"
Event pairing: turns press and release events into closed note intervals.

Within a track, a press records the start tick for its note, and the next
release of that note closes it. A second press before the release moves
the pending start; notes are never stacked. Releases with nothing pending
and presses never released contribute nothing.

Tracks are paired independently and their intervals are pooled in track
order, then in the order each interval closed. Row expansion paints in
this order, so it decides which interval wins where two overlap.
"#]

use std::collections::HashMap;

use crate::prelude::*;

/// A note held from `start_tick` until `end_tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteInterval {
    /// The note identity
    pub note: Note,
    /// Tick of the press
    pub start_tick: Ticks,
    /// Tick of the release, never before `start_tick`
    pub end_tick: Ticks,
}

impl NoteInterval {
    /// Create a new interval.
    pub const fn new(note: Note, start_tick: Ticks, end_tick: Ticks) -> Self {
        Self {
            note,
            start_tick,
            end_tick,
        }
    }

    /// Length of the interval in ticks
    pub fn duration(&self) -> Ticks {
        self.end_tick.saturating_sub(self.start_tick)
    }
}

/// Pairs the events of a single track, in the order they appear.
pub fn pair_track(events: &[NoteEvent]) -> Vec<NoteInterval> {
    let mut pending: HashMap<Note, Ticks> = HashMap::new();
    let mut intervals = Vec::new();

    for event in events {
        if event.is_press() {
            pending.insert(event.note, event.absolute_tick);
        } else if let Some(start_tick) = pending.remove(&event.note) {
            intervals.push(NoteInterval::new(event.note, start_tick, event.absolute_tick));
        }
    }

    #[cfg(feature = "tracing")]
    if !pending.is_empty() {
        tracing::warn!(
            "{} note(s) never released before end of track, dropping them",
            pending.len()
        );
    }

    intervals
}

/// Pairs every track of the source and pools the intervals.
pub fn pair_tracks<'a, I>(tracks: I) -> Vec<NoteInterval>
where
    I: IntoIterator<Item = &'a Track>,
{
    tracks
        .into_iter()
        .flat_map(|track| pair_track(track.events()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn note(byte: u8) -> Note {
        Note::from_byte(byte).unwrap()
    }

    fn on(byte: u8, velocity: u8, tick: u64) -> NoteEvent {
        NoteEvent::on(note(byte), velocity, Ticks::new(tick))
    }

    fn off(byte: u8, tick: u64) -> NoteEvent {
        NoteEvent::off(note(byte), Ticks::new(tick))
    }

    fn interval(byte: u8, start: u64, end: u64) -> NoteInterval {
        NoteInterval::new(note(byte), Ticks::new(start), Ticks::new(end))
    }

    #[test]
    fn pairs_on_with_off() {
        let intervals = pair_track(&[on(60, 100, 10), off(60, 50)]);
        assert_eq!(intervals, [interval(60, 10, 50)]);
        assert_eq!(intervals[0].duration(), Ticks::new(40));
    }

    #[test]
    fn zero_velocity_on_closes_like_off() {
        let with_off = pair_track(&[on(60, 100, 0), off(60, 96)]);
        let with_zero = pair_track(&[on(60, 100, 0), on(60, 0, 96)]);
        assert_eq!(with_off, with_zero);
        assert_eq!(with_zero, [interval(60, 0, 96)]);
    }

    #[test]
    fn unmatched_on_is_dropped() {
        assert!(pair_track(&[on(60, 100, 0)]).is_empty());
        let intervals = pair_track(&[on(60, 100, 0), on(61, 100, 10), off(61, 20)]);
        assert_eq!(intervals, [interval(61, 10, 20)]);
    }

    #[test]
    fn stray_off_is_ignored() {
        let intervals = pair_track(&[off(60, 5), on(60, 100, 10), off(60, 20), off(60, 30)]);
        assert_eq!(intervals, [interval(60, 10, 20)]);
    }

    #[test]
    fn second_on_overwrites_pending_start() {
        let intervals = pair_track(&[on(60, 100, 0), on(60, 90, 40), off(60, 100)]);
        assert_eq!(intervals, [interval(60, 40, 100)]);
    }

    #[test]
    fn intervals_follow_closing_order() {
        let intervals = pair_track(&[on(60, 100, 0), on(61, 100, 10), off(61, 20), off(60, 30)]);
        assert_eq!(intervals, [interval(61, 10, 20), interval(60, 0, 30)]);
    }

    #[test]
    fn tracks_pool_in_track_order() {
        let first = Track::new(vec![on(62, 100, 240), off(62, 360)]);
        let second = Track::new(vec![on(60, 100, 0), off(60, 120)]);
        let intervals = pair_tracks([&first, &second]);
        assert_eq!(intervals, [interval(62, 240, 360), interval(60, 0, 120)]);
    }

    #[test]
    fn pending_notes_do_not_cross_tracks() {
        let first = Track::new(vec![on(60, 100, 0)]);
        let second = Track::new(vec![off(60, 120)]);
        assert!(pair_tracks([&first, &second]).is_empty());
    }
}
