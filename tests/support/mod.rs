#![allow(dead_code)]

use midly::{
    Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind,
    num::{u4, u7, u15, u24, u28},
};

pub fn note_on_event(delta_ticks: u32, note: u8, velocity: u8, channel: u8) -> TrackEvent<'static> {
    TrackEvent {
        delta: u28::new(delta_ticks),
        kind: TrackEventKind::Midi {
            channel: u4::new(channel),
            message: MidiMessage::NoteOn {
                key: u7::new(note),
                vel: u7::new(velocity),
            },
        },
    }
}

pub fn note_off_event(delta_ticks: u32, note: u8, channel: u8) -> TrackEvent<'static> {
    TrackEvent {
        delta: u28::new(delta_ticks),
        kind: TrackEventKind::Midi {
            channel: u4::new(channel),
            message: MidiMessage::NoteOff {
                key: u7::new(note),
                vel: u7::new(64),
            },
        },
    }
}

pub fn tempo_event(delta_ticks: u32, micros_per_quarter: u32) -> TrackEvent<'static> {
    TrackEvent {
        delta: u28::new(delta_ticks),
        kind: TrackEventKind::Meta(MetaMessage::Tempo(u24::new(micros_per_quarter))),
    }
}

pub fn end_of_track() -> TrackEvent<'static> {
    TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    }
}

/// Writes a metrical-timed standard MIDI file holding `tracks`.
pub fn smf_bytes(ticks_per_beat: u16, tracks: Vec<Vec<TrackEvent<'static>>>) -> Vec<u8> {
    let format = if tracks.len() == 1 {
        Format::SingleTrack
    } else {
        Format::Parallel
    };
    let mut smf = Smf::new(Header::new(format, Timing::Metrical(u15::new(ticks_per_beat))));
    for mut track in tracks {
        track.push(end_of_track());
        smf.tracks.push(track);
    }

    let mut bytes = Vec::new();
    smf.write_std(&mut bytes).unwrap();
    bytes
}
