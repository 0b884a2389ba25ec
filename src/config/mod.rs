//! Configuration types for channels.
//!
//! This module provides:
//! - `Destination`: The process output a channel writes to
//! - `Severity`: The default classification derived from a destination
//! - `FailurePolicy`: What to do when the underlying sink fails
//! - `ChannelsConfig`: Configuration for the process-wide channel pair

mod channels;
mod destination;
mod policy;

pub use channels::ChannelsConfig;
pub use destination::{Destination, Severity};
pub use policy::FailurePolicy;
