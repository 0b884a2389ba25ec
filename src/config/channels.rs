//! Configuration for the process-wide channel pair.

use serde::Deserialize;

use super::FailurePolicy;

/// Configuration for the informational and error channels.
///
/// Identities are kept raw and resolved by `ChannelsBuilder`, so a bad value
/// is reported as a configuration error naming the input rather than as a
/// parse failure. Either role may be bound to either destination, e.g. a tool
/// that reserves stdout for data can send its informational output to stderr.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelsConfig {
    /// Destination of the informational channel (defaults to "stdout")
    #[serde(default)]
    pub info: Option<String>,
    /// Destination of the error channel (defaults to "stderr")
    #[serde(default)]
    pub error: Option<String>,
    /// Sink failure policy: "swallow" or "report"
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl ChannelsConfig {
    /// Create a configuration with the default destinations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the informational channel's destination.
    pub fn with_info(mut self, identity: impl Into<String>) -> Self {
        self.info = Some(identity.into());
        self
    }

    /// Set the error channel's destination.
    pub fn with_error(mut self, identity: impl Into<String>) -> Self {
        self.error = Some(identity.into());
        self
    }

    /// Set the sink failure policy.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Parse a configuration from JSON.
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Parse a configuration from YAML.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }
}
