//! I/O abstractions for the sinks behind a channel.
//!
//! This module provides:
//! - `OutputTarget`: Trait for output destinations
//! - Standard implementations for stdout/stderr
//! - In-memory and failing implementations for testing

mod memory;
mod output;
mod std_io;

pub use memory::{FailingSink, InMemorySink, InMemoryWriter};
pub use output::OutputTarget;
pub use std_io::{StderrOutput, StdoutOutput};
