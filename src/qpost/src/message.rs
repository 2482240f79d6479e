//! The single message a basic-publish run places on the bus.

use std::borrow::Cow;

use amqp::Publish;

use crate::error::ConfigError;
use crate::profile::ConnectionProfile;

/// One message bound for a named queue through the default exchange.
#[derive(Debug)]
pub struct BasicMessage {
    queue: String,
    body: Vec<u8>,
}

impl BasicMessage {
    /// Requires `rabbit_queue` to be set. Checked here so a profile without
    /// a queue fails before any connection is attempted.
    pub fn from_profile(profile: &ConnectionProfile, body: Vec<u8>) -> Result<Self, ConfigError> {
        let queue = profile.queue.clone().ok_or(ConfigError::MissingQueue)?;
        Ok(Self { queue, body })
    }

    pub fn queue(&self) -> &str {
        &self.queue
    }
}

impl Publish for BasicMessage {
    fn exchange(&self) -> &str {
        ""
    }

    fn routing_key(&self) -> &str {
        &self.queue
    }

    fn payload(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self.body)
    }
}
