//! The buffered, write-only channel.
//!
//! A [`BufferedChannel`] accumulates bytes into a fixed-size buffer and hands
//! them to its sink in one write whenever:
//! - the buffer becomes full,
//! - [`WriteOnlyChannel::sync`] (or `Write::flush`) is called,
//! - the channel is closed or dropped.
//!
//! Every flush is followed by a flush of the sink itself so nothing is left
//! in an intermediate buffer. All buffer state lives behind one mutex; a
//! single `write` call is copied in while holding it, so the bytes of one call
//! never interleave with another thread's.
//!
//! Reading is never possible. Both [`WriteOnlyChannel::read_byte`] and the
//! `Read` impl fail with [`ChannelError::UnsupportedOperation`].

mod stats;

pub use stats::{ChannelStats, StatsSnapshot};

use std::cell::Cell;
use std::fmt;
use std::io::{self, Read, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::{Destination, FailurePolicy, Severity};
use crate::error::ChannelError;
use crate::io::OutputTarget;
use stats::FlushReport;

/// Buffer capacity of a channel unless its type names another one.
pub const DEFAULT_CAPACITY: usize = 1024;

thread_local! {
    /// Set while this thread emits a sink-failure warning.
    static REPORTING: Cell<bool> = const { Cell::new(false) };
}

/// The operations every write-only channel offers.
pub trait WriteOnlyChannel: Send + Sync {
    /// Append `c` (if any) and flush.
    ///
    /// `None` flushes without appending. Returns `c` unchanged.
    fn write_byte(&self, c: Option<u8>) -> Result<Option<u8>, ChannelError>;

    /// Flush whatever is buffered, possibly nothing.
    fn sync(&self);

    /// Always fails: channels are write-only.
    fn read_byte(&self) -> Result<u8, ChannelError>;
}

struct State<W> {
    /// `None` once the channel is closed.
    buf: Option<Box<[u8]>>,
    pos: usize,
    sink: Option<W>,
}

impl<W: Write> State<W> {
    fn is_closed(&self) -> bool {
        self.buf.is_none()
    }

    fn push(&mut self, byte: u8, report: &mut FlushReport) {
        let capacity = self.buf.as_ref().map_or(0, |buf| buf.len());
        if self.pos == capacity {
            self.flush(report);
        }
        if let Some(buf) = self.buf.as_deref_mut() {
            buf[self.pos] = byte;
            self.pos += 1;
        }
    }

    fn append(&mut self, mut data: &[u8], report: &mut FlushReport) {
        while !data.is_empty() {
            let Some(buf) = self.buf.as_deref_mut() else {
                return;
            };
            let take = (buf.len() - self.pos).min(data.len());
            buf[self.pos..self.pos + take].copy_from_slice(&data[..take]);
            self.pos += take;
            data = &data[take..];

            if self.pos == buf.len() {
                self.flush(report);
            }
        }
    }

    /// Hand the buffered bytes to the sink and reset the buffer.
    ///
    /// Sink errors are recorded in `report`, never returned.
    fn flush(&mut self, report: &mut FlushReport) -> usize {
        let n = std::mem::take(&mut self.pos);
        if let (Some(buf), Some(sink)) = (self.buf.as_deref(), self.sink.as_mut()) {
            let result = sink.write_all(&buf[..n]).and_then(|()| sink.flush());
            report.record(n, result);
        }
        n
    }
}

/// A thread-safe, write-only channel with a fixed-capacity buffer.
///
/// `W` is the sink the buffer drains into and `N` the buffer capacity. The
/// defaults are what [`BufferedChannel::open`] produces: a process output
/// behind a 1024-byte buffer.
///
/// ```rust,ignore
/// use std::io::Write;
/// use chanio::{BufferedChannel, WriteOnlyChannel};
///
/// let channel = BufferedChannel::open(Some("stderr"))?;
/// writeln!(&channel, "index build started")?;
/// channel.sync();
/// ```
pub struct BufferedChannel<W: Write = Box<dyn Write + Send>, const N: usize = DEFAULT_CAPACITY> {
    destination: Destination,
    severity: Severity,
    policy: FailurePolicy,
    state: Mutex<State<W>>,
    stats: ChannelStats,
}

impl BufferedChannel {
    /// Open a channel on the process output named by `identity`.
    ///
    /// Fails with [`ChannelError::Configuration`] when the identity is
    /// missing, empty, or anything other than stdout or stderr.
    pub fn open(identity: Option<&str>) -> Result<Self, ChannelError> {
        let destination = Destination::from_identity(identity)?;
        Self::from_target(destination, destination.output_target().as_ref())
    }

    /// Open a channel draining into `target`, tagged as `destination`.
    pub fn from_target(
        destination: Destination,
        target: &dyn OutputTarget,
    ) -> Result<Self, ChannelError> {
        let sink = target.open().map_err(|e| {
            ChannelError::configuration(target.id(), format!("failed to open output: {e}"))
        })?;
        Ok(Self::with_sink(destination, sink))
    }
}

impl<W: Write, const N: usize> BufferedChannel<W, N> {
    /// Create a channel draining into `sink`.
    pub fn with_sink(destination: Destination, sink: W) -> Self {
        const { assert!(N > 0, "channel capacity must be non-zero") };

        tracing::debug!(channel = %destination, capacity = N, "channel opened");
        Self {
            destination,
            severity: destination.severity(),
            policy: FailurePolicy::default(),
            state: Mutex::new(State {
                buf: Some(vec![0u8; N].into_boxed_slice()),
                pos: 0,
                sink: Some(sink),
            }),
            stats: ChannelStats::default(),
        }
    }

    /// Set the sink failure policy.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Where this channel's output goes.
    pub fn destination(&self) -> Destination {
        self.destination
    }

    /// The default severity for output on this channel.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// How sink failures are surfaced.
    pub fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Buffer size in bytes; no flush ever carries more.
    pub fn capacity(&self) -> usize {
        N
    }

    /// Number of bytes waiting in the buffer.
    pub fn buffered(&self) -> usize {
        self.lock().pos
    }

    /// Whether [`close`](Self::close) has run.
    pub fn is_closed(&self) -> bool {
        self.lock().is_closed()
    }

    /// Flush counters so far.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Copy `data` into the buffer, flushing each time it fills.
    ///
    /// The guard is held for the whole slice. Returns `data.len()`.
    pub fn write_bytes(&self, data: &[u8]) -> Result<usize, ChannelError> {
        let mut report = FlushReport::default();
        let result = {
            let mut state = self.lock();
            if state.is_closed() {
                Err(self.closed())
            } else {
                state.append(data, &mut report);
                Ok(data.len())
            }
        };
        self.settle(report);
        result
    }

    /// Drain the buffer and release it.
    ///
    /// Returns `false` if the channel was already closed, in which case
    /// nothing is flushed or released again. The sink is dropped, which never
    /// closes the process's own stdout/stderr.
    pub fn close(&self) -> bool {
        let mut report = FlushReport::default();
        let drained = {
            let mut state = self.lock();
            if state.is_closed() {
                return false;
            }
            let n = state.flush(&mut report);
            state.buf = None;
            state.sink = None;
            n
        };
        self.settle(report);
        tracing::debug!(channel = %self.destination, bytes = drained, "channel closed");
        true
    }

    fn drain(&self) {
        let mut report = FlushReport::default();
        {
            let mut state = self.lock();
            if !state.is_closed() {
                state.flush(&mut report);
            }
        }
        self.settle(report);
    }

    // The buffer only ever holds plain bytes, so a panic in another writer
    // cannot leave it inconsistent.
    fn lock(&self) -> MutexGuard<'_, State<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Account for finished flushes. Must run with the guard released.
    fn settle(&self, report: FlushReport) {
        self.stats.apply(&report);
        if self.policy != FailurePolicy::Report {
            return;
        }
        let Some(err) = &report.last_error else {
            return;
        };
        // A warning written back into a failing channel fails again; those
        // nested failures are only counted.
        if REPORTING.with(|reporting| reporting.replace(true)) {
            return;
        }
        tracing::warn!(
            channel = %self.destination,
            failures = report.failures,
            error = %err,
            "dropped buffered output after sink failure"
        );
        REPORTING.with(|reporting| reporting.set(false));
    }

    fn closed(&self) -> ChannelError {
        ChannelError::Closed {
            channel: self.destination,
        }
    }

    fn write_only(&self) -> ChannelError {
        ChannelError::UnsupportedOperation {
            channel: self.destination,
        }
    }
}

impl<W: Write + Send, const N: usize> WriteOnlyChannel for BufferedChannel<W, N> {
    fn write_byte(&self, c: Option<u8>) -> Result<Option<u8>, ChannelError> {
        let mut report = FlushReport::default();
        let result = {
            let mut state = self.lock();
            if state.is_closed() {
                Err(self.closed())
            } else {
                if let Some(byte) = c {
                    state.push(byte, &mut report);
                }
                state.flush(&mut report);
                Ok(c)
            }
        };
        self.settle(report);
        result
    }

    fn sync(&self) {
        self.drain();
    }

    fn read_byte(&self) -> Result<u8, ChannelError> {
        Err(self.write_only())
    }
}

impl<W: Write, const N: usize> Write for &BufferedChannel<W, N> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        Ok(self.write_bytes(data)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.drain();
        Ok(())
    }
}

impl<W: Write, const N: usize> Write for BufferedChannel<W, N> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        (&*self).write(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        (&*self).flush()
    }
}

impl<W: Write, const N: usize> Read for &BufferedChannel<W, N> {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(self.write_only().into())
    }
}

impl<W: Write, const N: usize> Read for BufferedChannel<W, N> {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(self.write_only().into())
    }
}

impl<W: Write, const N: usize> Drop for BufferedChannel<W, N> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<W: Write, const N: usize> fmt::Debug for BufferedChannel<W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedChannel")
            .field("destination", &self.destination)
            .field("severity", &self.severity)
            .field("capacity", &N)
            .field("buffered", &self.buffered())
            .field("closed", &self.is_closed())
            .finish()
    }
}
