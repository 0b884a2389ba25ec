//! The informational/error channel pair and its process-wide instance.

use std::ops::Deref;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::builder::ChannelsBuilder;
use crate::channel::{BufferedChannel, WriteOnlyChannel};
use crate::config::ChannelsConfig;
use crate::error::{AggregateError, ChannelError};

static CHANNELS: OnceLock<Channels> = OnceLock::new();
static LIVE_GUARDS: AtomicUsize = AtomicUsize::new(0);

/// One channel for informational output and one for errors.
#[derive(Debug)]
pub struct Channels {
    info: BufferedChannel,
    error: BufferedChannel,
}

impl Channels {
    /// Pair two already opened channels.
    pub fn new(info: BufferedChannel, error: BufferedChannel) -> Self {
        Self { info, error }
    }

    /// The informational channel.
    pub fn info(&self) -> &BufferedChannel {
        &self.info
    }

    /// The error channel.
    pub fn error(&self) -> &BufferedChannel {
        &self.error
    }

    /// Flush both channels.
    pub fn sync_all(&self) {
        self.info.sync();
        self.error.sync();
    }

    /// Close both channels, draining what they still buffer.
    pub fn close_all(&self) {
        self.info.close();
        self.error.close();
    }
}

/// Keeps the process-wide channels open.
///
/// Returned by [`init`] and [`init_with`]. Statics are never dropped, so the
/// guard is what drains the pair: when the last live guard goes away both
/// channels are flushed and closed, exactly like [`shutdown`]. Bind it in
/// `main` so it lives until the process returns:
///
/// ```rust,ignore
/// fn main() -> Result<(), chanio::AggregateError> {
///     let _channels = chanio::init()?;
///     // ...
///     Ok(())
/// }
/// ```
///
/// `std::process::exit` skips destructors; call [`shutdown`] before it.
#[must_use = "dropping the guard drains and closes the process-wide channels"]
#[derive(Debug)]
pub struct ChannelsGuard {
    channels: &'static Channels,
}

impl ChannelsGuard {
    fn acquire(channels: &'static Channels) -> Self {
        LIVE_GUARDS.fetch_add(1, Ordering::AcqRel);
        Self { channels }
    }

    /// The guarded pair.
    pub fn channels(&self) -> &'static Channels {
        self.channels
    }
}

impl Deref for ChannelsGuard {
    type Target = Channels;

    fn deref(&self) -> &Channels {
        self.channels
    }
}

impl Clone for ChannelsGuard {
    fn clone(&self) -> Self {
        Self::acquire(self.channels)
    }
}

impl Drop for ChannelsGuard {
    fn drop(&mut self) {
        if LIVE_GUARDS.fetch_sub(1, Ordering::AcqRel) == 1 {
            tracing::debug!("last channels guard dropped");
            self.channels.close_all();
        }
    }
}

/// Create the process-wide channels on stdout and stderr.
///
/// Idempotent: later calls return another guard on the pair created by the
/// first one. A pair closed by its last guard or by [`shutdown`] stays closed.
pub fn init() -> Result<ChannelsGuard, AggregateError> {
    if let Some(channels) = CHANNELS.get() {
        return Ok(ChannelsGuard::acquire(channels));
    }
    let built = ChannelsBuilder::new().build()?;
    // A racing caller may have won; the surplus pair is dropped empty.
    Ok(ChannelsGuard::acquire(CHANNELS.get_or_init(|| built)))
}

/// Create the process-wide channels from `config`.
///
/// Fails with [`ChannelError::AlreadyInitialized`] if they already exist.
pub fn init_with(config: ChannelsConfig) -> Result<ChannelsGuard, AggregateError> {
    if CHANNELS.get().is_some() {
        return Err(ChannelError::AlreadyInitialized.into());
    }
    let built = ChannelsBuilder::from_config(config).build()?;
    CHANNELS
        .set(built)
        .map_err(|_| AggregateError::single(ChannelError::AlreadyInitialized))?;
    global()
        .map(ChannelsGuard::acquire)
        .ok_or_else(|| AggregateError::single(ChannelError::AlreadyInitialized))
}

/// The process-wide channels, if initialized.
pub fn global() -> Option<&'static Channels> {
    CHANNELS.get()
}

/// The process-wide informational channel, if initialized.
pub fn info_channel() -> Option<&'static BufferedChannel> {
    global().map(Channels::info)
}

/// The process-wide error channel, if initialized.
pub fn error_channel() -> Option<&'static BufferedChannel> {
    global().map(Channels::error)
}

/// Drain and close the process-wide channels now, whatever guards are live.
///
/// Needed before `std::process::exit`, which skips the guard's destructor.
/// Writes afterwards fail with [`ChannelError::Closed`].
pub fn shutdown() {
    if let Some(channels) = CHANNELS.get() {
        channels.close_all();
    }
}
