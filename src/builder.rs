//! Builder for the informational/error channel pair.

use crate::channel::BufferedChannel;
use crate::channels::Channels;
use crate::config::{ChannelsConfig, Destination, FailurePolicy};
use crate::error::{AggregateError, ChannelError, ErrorPolicy};
use crate::io::OutputTarget;

/// Resolves raw destination identities into a [`Channels`] pair.
///
/// Both identities default to their own stream. Under
/// [`ErrorPolicy::Accumulate`] (the default) every bad identity is reported;
/// [`ErrorPolicy::FastFail`] stops at the first.
pub struct ChannelsBuilder {
    info_arg: Option<String>,
    error_arg: Option<String>,
    error_policy: ErrorPolicy,
    failure_policy: FailurePolicy,
}

impl Default for ChannelsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelsBuilder {
    /// Stdout for information, stderr for errors.
    pub fn new() -> Self {
        Self {
            info_arg: Some(Destination::Info.name().into()),
            error_arg: Some(Destination::Error.name().into()),
            error_policy: ErrorPolicy::Accumulate,
            failure_policy: FailurePolicy::default(),
        }
    }

    /// Start from a parsed configuration. Unset destinations keep their defaults.
    pub fn from_config(config: ChannelsConfig) -> Self {
        let mut builder = Self::new().with_failure_policy(config.failure_policy);
        if let Some(info) = config.info {
            builder.info_arg = Some(info);
        }
        if let Some(error) = config.error {
            builder.error_arg = Some(error);
        }
        builder
    }

    /// Set the raw identity of the informational channel's destination.
    pub fn info(mut self, arg: Option<&str>) -> Self {
        self.info_arg = arg.map(str::to_owned);
        self
    }

    /// Set the raw identity of the error channel's destination.
    pub fn error(mut self, arg: Option<&str>) -> Self {
        self.error_arg = arg.map(str::to_owned);
        self
    }

    /// Choose whether resolution stops at the first error.
    pub fn with_mode(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Failure policy applied to both channels.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Resolve both destinations and open the process outputs.
    pub fn build(self) -> Result<Channels, AggregateError> {
        self.build_with(|destination| Ok(destination.output_target()))
    }

    /// Like [`build`](Self::build), but `open` picks the target behind each
    /// resolved destination.
    pub fn build_with<F>(self, mut open: F) -> Result<Channels, AggregateError>
    where
        F: FnMut(Destination) -> Result<Box<dyn OutputTarget>, ChannelError>,
    {
        let info = self.resolve_single(self.info_arg.as_deref(), &mut open);
        if info.is_err() && matches!(self.error_policy, ErrorPolicy::FastFail) {
            return Err(AggregateError {
                errors: info.err().into_iter().collect(),
            });
        }
        let error = self.resolve_single(self.error_arg.as_deref(), &mut open);

        match (info, error) {
            (Ok(info), Ok(error)) => Ok(Channels::new(info, error)),
            (info, error) => Err(AggregateError {
                errors: info.err().into_iter().chain(error.err()).collect(),
            }),
        }
    }

    fn resolve_single<F>(
        &self,
        raw: Option<&str>,
        open: &mut F,
    ) -> Result<BufferedChannel, ChannelError>
    where
        F: FnMut(Destination) -> Result<Box<dyn OutputTarget>, ChannelError>,
    {
        let destination = Destination::from_identity(raw)?;
        let target = open(destination)?;
        let channel = BufferedChannel::from_target(destination, target.as_ref())?;
        Ok(channel.with_failure_policy(self.failure_policy))
    }
}
