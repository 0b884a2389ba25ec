//! Error types and policies for chanio channels.
//!
//! This module provides:
//! - `ChannelError`: Everything a channel can report to its caller
//! - `ErrorPolicy`: Controls whether the builder fails fast or accumulates errors
//! - `AggregateError`: A collection of errors when using `Accumulate` policy

use std::fmt;
use std::io;

use thiserror::Error;

use crate::config::Destination;

/// How [`ChannelsBuilder`](crate::ChannelsBuilder) reacts to bad identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first error encountered
    FastFail,
    /// Collect all errors and return them together
    #[default]
    Accumulate,
}

/// Errors surfaced by a channel.
///
/// Failures of the underlying sink are absent: they never reach the caller
/// (see `FailurePolicy`).
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The destination identity was missing, empty, or not supported.
    #[error("invalid channel destination '{identity}': {reason}")]
    Configuration { identity: String, reason: String },

    /// A read was attempted on a write-only channel.
    #[error("attempt to read from the {channel} channel, which is write-only")]
    UnsupportedOperation { channel: Destination },

    /// A write was attempted after the channel was closed.
    #[error("the {channel} channel is closed")]
    Closed { channel: Destination },

    /// The process-wide channels were initialized more than once.
    #[error("process-wide channels are already initialized")]
    AlreadyInitialized,
}

impl ChannelError {
    pub(crate) fn configuration(identity: impl Into<String>, reason: impl Into<String>) -> Self {
        ChannelError::Configuration {
            identity: identity.into(),
            reason: reason.into(),
        }
    }

    /// The `io::ErrorKind` this error maps to when crossing a `Read`/`Write` boundary.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            ChannelError::Configuration { .. } => io::ErrorKind::InvalidInput,
            ChannelError::UnsupportedOperation { .. } => io::ErrorKind::Unsupported,
            ChannelError::Closed { .. } => io::ErrorKind::BrokenPipe,
            ChannelError::AlreadyInitialized => io::ErrorKind::AlreadyExists,
        }
    }
}

impl From<ChannelError> for io::Error {
    fn from(err: ChannelError) -> Self {
        io::Error::new(err.kind(), err)
    }
}

/// An aggregate of multiple channel errors.
///
/// This is returned by the builder when using `ErrorPolicy::Accumulate` and
/// several destinations failed to resolve.
#[derive(Debug, Error)]
pub struct AggregateError {
    /// Collection of individual errors
    pub errors: Vec<ChannelError>,
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "channel setup encountered {} error(s):", self.errors.len())?;
        for (i, e) in self.errors.iter().enumerate() {
            writeln!(f, "  #{}: {}", i + 1, e)?;
        }
        Ok(())
    }
}

impl AggregateError {
    /// Create a new aggregate error with a single error.
    pub fn single(error: ChannelError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Check if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl From<ChannelError> for AggregateError {
    fn from(error: ChannelError) -> Self {
        Self::single(error)
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
