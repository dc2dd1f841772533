mod support;

use std::fs;

use midichart::prelude::*;
use support::*;

fn encoder() -> ChartEncoder {
    ChartEncoder::new(EncoderConfig::default()).unwrap()
}

#[test]
fn converts_file_to_text() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("song.mid");
    let output = dir.path().join("chart.txt");
    fs::write(
        &input,
        smf_bytes(
            480,
            vec![vec![note_on_event(0, 60, 64, 0), note_off_event(240, 60, 0)]],
        ),
    )
    .unwrap();

    let stats = encoder().convert(&input, &output).unwrap();
    assert_eq!(stats.rows, 12);

    let text = fs::read_to_string(&output).unwrap();
    let expected = format!(
        "{}{}{}",
        "10000000\n".repeat(4),
        "01000000\n".repeat(4),
        "00000000\n".repeat(4)
    );
    assert_eq!(text, expected);
    assert!(text.bytes().all(|b| b == b'0' || b == b'1' || b == b'\n'));

    let chart = Chart::parse(&text).unwrap();
    assert_eq!(chart.len(), 12);
}

#[test]
fn existing_output_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("chart.txt");
    fs::write(&output, "stale contents that are longer than the new chart\n".repeat(20)).unwrap();

    let file = MidiFile::parse(&smf_bytes(
        480,
        vec![vec![note_on_event(0, 61, 64, 0), note_off_event(120, 61, 0)]],
    ))
    .unwrap();
    encoder().encode_to_path(&file, &output).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text, format!("{}{}", "00100000\n".repeat(4), "00000000\n".repeat(4)));
}

#[test]
fn no_notes_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.mid");
    let output = dir.path().join("chart.txt");
    fs::write(&input, smf_bytes(480, vec![vec![tempo_event(0, 500_000)]])).unwrap();

    let err = encoder().convert(&input, &output).unwrap_err();
    assert!(err.is_no_notes());
    assert!(!output.exists());
}

#[test]
fn missing_input_is_a_source_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = encoder()
        .convert(dir.path().join("missing.mid"), dir.path().join("chart.txt"))
        .unwrap_err();
    assert!(matches!(err, ChartError::Source(SourceError::Io { .. })));
}

#[test]
fn unwritable_output_is_an_output_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = MidiFile::parse(&smf_bytes(
        480,
        vec![vec![note_on_event(0, 60, 64, 0), note_off_event(240, 60, 0)]],
    ))
    .unwrap();

    let output = dir.path().join("no-such-dir").join("chart.txt");
    let err = encoder().encode_to_path(&file, &output).unwrap_err();
    match err {
        ChartError::OutputWrite { path, .. } => assert_eq!(path, output),
        other => panic!("expected an output error, got {other:?}"),
    }
}
