//! `tracing-subscriber` integration.
//!
//! Lets a fmt layer write through channels:
//! - a single [`BufferedChannel`] receives every event,
//! - [`Channels`] routes `WARN` and `ERROR` events to its error channel and
//!   everything else to its informational channel.

use std::io::Write;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

use crate::channel::BufferedChannel;
use crate::channels::Channels;

impl<'a, W: Write + 'a, const N: usize> MakeWriter<'a> for BufferedChannel<W, N> {
    type Writer = &'a BufferedChannel<W, N>;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl<'a> MakeWriter<'a> for Channels {
    type Writer = &'a BufferedChannel;

    fn make_writer(&'a self) -> Self::Writer {
        self.info()
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        if *meta.level() <= Level::WARN {
            self.error()
        } else {
            self.info()
        }
    }
}
