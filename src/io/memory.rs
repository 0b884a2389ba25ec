//! In-memory sinks for testing.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use super::OutputTarget;

#[derive(Debug, Default)]
struct Recorded {
    chunks: Vec<Vec<u8>>,
    flushes: usize,
}

/// In-memory output sink that records every write call separately.
///
/// Each `write` a channel performs lands as its own chunk, so tests can tell
/// how output was split into flushes.
#[derive(Debug, Clone)]
pub struct InMemorySink {
    id: String,
    recorded: Arc<Mutex<Recorded>>,
}

impl InMemorySink {
    /// Create a new empty in-memory sink.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            recorded: Arc::new(Mutex::new(Recorded::default())),
        }
    }

    /// A write handle appending to this sink.
    pub fn writer(&self) -> InMemoryWriter {
        InMemoryWriter {
            recorded: self.recorded.clone(),
        }
    }

    /// Every write received so far, in order.
    pub fn chunks(&self) -> Vec<Vec<u8>> {
        self.lock().chunks.clone()
    }

    /// Get the contents of the sink as bytes.
    pub fn contents(&self) -> Vec<u8> {
        self.lock().chunks.concat()
    }

    /// Get the contents of the sink as a string.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Number of times the sink was flushed.
    pub fn flush_count(&self) -> usize {
        self.lock().flushes
    }

    /// Clear the sink contents.
    pub fn clear(&self) {
        let mut recorded = self.lock();
        recorded.chunks.clear();
        recorded.flushes = 0;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OutputTarget for InMemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(self.writer()))
    }
}

/// Write handle for an in-memory sink.
pub struct InMemoryWriter {
    recorded: Arc<Mutex<Recorded>>,
}

impl std::fmt::Debug for InMemoryWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryWriter").finish()
    }
}

impl Write for InMemoryWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut guard = self.recorded.lock().unwrap_or_else(PoisonError::into_inner);
        guard.chunks.push(data.to_vec());
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self.recorded.lock().unwrap_or_else(PoisonError::into_inner);
        guard.flushes += 1;
        Ok(())
    }
}

/// A sink whose writes and flushes always fail.
#[derive(Debug, Clone, Copy)]
pub struct FailingSink {
    kind: io::ErrorKind,
}

impl FailingSink {
    /// Create a sink failing with the given error kind.
    pub fn new(kind: io::ErrorKind) -> Self {
        Self { kind }
    }
}

impl Default for FailingSink {
    fn default() -> Self {
        Self::new(io::ErrorKind::BrokenPipe)
    }
}

impl Write for FailingSink {
    fn write(&mut self, _data: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(self.kind, "sink rejected write"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(self.kind, "sink rejected flush"))
    }
}
