//! Output target trait definition.

use std::fmt::Debug;
use std::io::Write;

/// Trait for the sinks a channel can be bound to.
///
/// Implementors hand out a writable stream to the process outputs or to an
/// in-memory buffer. The channel borrows what `open` returns; it never closes
/// the underlying handle.
pub trait OutputTarget: Send + Sync + Debug {
    /// Returns a unique identifier for this output target.
    ///
    /// This is used for error messages and logging.
    fn id(&self) -> &str;

    /// Open the target for writing.
    fn open(&self) -> std::io::Result<Box<dyn Write + Send>>;
}
