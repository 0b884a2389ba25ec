//! Sink failures never reach the writer.

use std::io::{self, Write};

use crate::channel::{BufferedChannel, WriteOnlyChannel};
use crate::config::{Destination, FailurePolicy};
use crate::io::FailingSink;

#[test]
fn swallowed_failures_are_counted() {
    let ch: BufferedChannel<FailingSink, 4> =
        BufferedChannel::with_sink(Destination::Error, FailingSink::default());
    assert_eq!(ch.failure_policy(), FailurePolicy::Swallow);

    let mut w = &ch;
    w.write_all(b"abcdef").unwrap();
    w.flush().unwrap();

    assert_eq!(ch.buffered(), 0);
    let stats = ch.stats();
    assert_eq!(stats.flushes, 2);
    assert_eq!(stats.failed_flushes, 2);
    assert_eq!(stats.bytes_flushed, 6);
}

#[test]
fn reported_failures_still_succeed_for_the_writer() {
    let ch: BufferedChannel<FailingSink, 4> =
        BufferedChannel::with_sink(Destination::Info, FailingSink::new(io::ErrorKind::Other))
            .with_failure_policy(FailurePolicy::Report);

    assert_eq!(ch.write_byte(Some(b'z')).unwrap(), Some(b'z'));
    ch.sync();
    assert!(ch.close());

    assert_eq!(ch.stats().failed_flushes, 3);
}
