//! # chanio
//!
//! Thread-safe, fixed-capacity, write-only buffered channels for a process's
//! standard outputs.
//!
//! ## Overview
//!
//! A library embedded in a larger host can log through an ordinary
//! `std::io::Write` while chanio guarantees:
//! - **Bounded chunks**: writes are coalesced into a fixed-size buffer and
//!   reach stdout/stderr in one write per flush, never more than the capacity
//! - **Thread safety**: any number of threads may share a channel; the bytes
//!   of one `write` call are never interleaved with another thread's
//! - **Write-only**: every read attempt fails loudly
//! - **Crash safety**: failures of stdout/stderr never reach the writer
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::io::Write;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Dropping the guard at the end of `main` drains both channels.
//!     let channels = chanio::init()?;
//!
//!     writeln!(channels.info(), "loaded {} points", 1_000_000)?;
//!     writeln!(channels.error(), "skipped malformed vector")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `json` - Load `ChannelsConfig` from JSON (enabled by default)
//! - `yaml` - Load `ChannelsConfig` from YAML
//! - `miette` - Pretty error reporting with miette
//! - `subscriber` - Use channels as a `tracing-subscriber` fmt writer
//!
//! ## Flush semantics
//!
//! A channel flushes when its buffer fills, on `sync`/`Write::flush`, on
//! `write_byte`, and when it is closed or dropped. Each flush is a single
//! write of the buffered bytes followed by a flush of the sink itself.
//!
//! The process-wide pair lives in a static and is never dropped. [`init`]
//! returns a [`ChannelsGuard`]; when the last guard is dropped the pair is
//! drained and closed. Call [`shutdown`] before `std::process::exit`, which
//! skips destructors.

pub mod builder;
pub mod channel;
pub mod channels;
pub mod config;
pub mod error;
pub mod io;

#[cfg(feature = "subscriber")]
pub mod subscriber;

// Re-exports for convenience
pub use builder::ChannelsBuilder;
pub use channel::{
    BufferedChannel, ChannelStats, DEFAULT_CAPACITY, StatsSnapshot, WriteOnlyChannel,
};
pub use channels::{
    Channels, ChannelsGuard, error_channel, global, info_channel, init, init_with, shutdown,
};
pub use config::{ChannelsConfig, Destination, FailurePolicy, Severity};
pub use error::{AggregateError, ChannelError, ErrorPolicy};
pub use io::{
    FailingSink, InMemorySink, InMemoryWriter, OutputTarget, StderrOutput, StdoutOutput,
};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::ChannelDiagnostic;
