//! Destination identities and the severity hint derived from them.

use std::fmt;
use std::str::FromStr;

use crate::error::ChannelError;
use crate::io::{OutputTarget, StderrOutput, StdoutOutput};

/// The process output a channel is bound to.
///
/// Only the two standard outputs are permitted. Any other identity is
/// rejected by [`Destination::from_identity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// The informational output (stdout).
    Info,
    /// The error output (stderr).
    Error,
}

impl Destination {
    /// Resolve a raw destination identity.
    ///
    /// Only the exact names `"stdout"` and `"stderr"` are accepted. A missing
    /// or empty identity is an error.
    pub fn from_identity(identity: Option<&str>) -> Result<Self, ChannelError> {
        let Some(raw) = identity else {
            return Err(ChannelError::configuration("<unset>", "destination identity is missing"));
        };

        match raw {
            "" => Err(ChannelError::configuration(raw, "destination identity is empty")),
            "stdout" => Ok(Destination::Info),
            "stderr" => Ok(Destination::Error),
            _ => Err(ChannelError::configuration(raw, "only stdout and stderr are supported")),
        }
    }

    /// Canonical name of the destination.
    pub fn name(&self) -> &'static str {
        match self {
            Destination::Info => "stdout",
            Destination::Error => "stderr",
        }
    }

    /// Default severity for output written to this destination.
    pub fn severity(&self) -> Severity {
        match self {
            Destination::Info => Severity::Info,
            Destination::Error => Severity::Error,
        }
    }

    /// The process output target backing this destination.
    pub fn output_target(&self) -> Box<dyn OutputTarget> {
        match self {
            Destination::Info => Box::new(StdoutOutput::new()),
            Destination::Error => Box::new(StderrOutput::new()),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Destination {
    type Err = ChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Destination::from_identity(Some(s))
    }
}

/// Default classification for output on a channel.
///
/// The channel never interprets it; logging policy code reads it to pick a
/// level when the caller supplied none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl From<Severity> for tracing::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => tracing::Level::INFO,
            Severity::Error => tracing::Level::ERROR,
        }
    }
}
