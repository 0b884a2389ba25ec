//! Flush counters kept by every channel.

use std::io;
use std::sync::atomic::{AtomicU64, Ordering};

/// Outcome of the flushes performed while the guard was held.
///
/// Collected under the lock and applied once it is released, so that
/// logging never runs with the buffer locked.
#[derive(Debug, Default)]
pub(crate) struct FlushReport {
    pub(crate) flushes: u64,
    pub(crate) bytes: u64,
    pub(crate) failures: u64,
    pub(crate) last_error: Option<io::Error>,
}

impl FlushReport {
    pub(crate) fn record(&mut self, bytes: usize, result: io::Result<()>) {
        self.flushes += 1;
        self.bytes += bytes as u64;
        if let Err(e) = result {
            self.failures += 1;
            self.last_error = Some(e);
        }
    }
}

/// Lock-free counters describing a channel's flush history.
#[derive(Debug, Default)]
pub struct ChannelStats {
    flushes: AtomicU64,
    bytes_flushed: AtomicU64,
    failed_flushes: AtomicU64,
}

impl ChannelStats {
    pub(crate) fn apply(&self, report: &FlushReport) {
        if report.flushes == 0 {
            return;
        }
        self.flushes.fetch_add(report.flushes, Ordering::Relaxed);
        self.bytes_flushed.fetch_add(report.bytes, Ordering::Relaxed);
        self.failed_flushes.fetch_add(report.failures, Ordering::Relaxed);
    }

    /// Copy the current counter values.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            flushes: self.flushes.load(Ordering::Relaxed),
            bytes_flushed: self.bytes_flushed.load(Ordering::Relaxed),
            failed_flushes: self.failed_flushes.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of [`ChannelStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    /// Flushes performed, including empty ones
    pub flushes: u64,
    /// Bytes handed to the sink, including bytes of failed flushes
    pub bytes_flushed: u64,
    /// Flushes whose write or force-to-destination failed
    pub failed_flushes: u64,
}
