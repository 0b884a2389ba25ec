//! What a channel does when its sink fails.

use serde::Deserialize;

/// Policy for failures of the underlying sink during a flush.
///
/// Either way the failure never reaches the writer and the buffered bytes are
/// dropped; it is always counted in the channel's statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    #[default]
    /// Drop the bytes silently
    Swallow,
    /// Drop the bytes and emit a `tracing` warning
    Report,
}

impl FailurePolicy {
    /// Parse a policy from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "swallow" => Some(FailurePolicy::Swallow),
            "report" => Some(FailurePolicy::Report),
            _ => None,
        }
    }
}
