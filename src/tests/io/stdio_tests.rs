//! Tests for standard IO targets and file-backed channels.

use std::fs;
use std::io::Write;

use crate::{BufferedChannel, Destination, OutputTarget, StderrOutput, StdoutOutput};

#[test]
fn std_targets_open() {
    let out = StdoutOutput::new();
    let err = StderrOutput::default();

    assert_eq!(out.id(), "stdout");
    assert_eq!(err.id(), "stderr");
    assert!(out.open().is_ok());
    assert!(err.open().is_ok());
}

#[test]
fn channel_over_file_flushes_in_chunks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.txt");
    let file = fs::File::create(&path).unwrap();

    let ch: BufferedChannel<fs::File, 8> = BufferedChannel::with_sink(Destination::Error, file);
    let mut w = &ch;
    w.write_all(b"0123456789").unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"01234567".to_vec());

    assert!(ch.close());
    assert_eq!(fs::read(&path).unwrap(), b"0123456789".to_vec());
}
