//! qpost places a single message on a RabbitMQ bus and exits.
//!
//! A named profile in an INI-style config file supplies the broker
//! endpoint, credentials, queue, and a literal message body. Everything is
//! validated before any connection is attempted, so a bad profile never
//! costs a network round-trip.

pub mod cli;
pub mod error;
pub mod literal;
pub mod logging;
pub mod message;
pub mod payload;
pub mod profile;
pub mod store;

use anyhow::Context;
use tracing::debug;

use crate::cli::Cli;
use crate::message::BasicMessage;
use crate::profile::ConnectionProfile;
use crate::store::ConfigStore;

/// One scheduled run: resolve, validate, connect, publish, close.
pub async fn run(cli: &Cli) -> anyhow::Result<()> {
    let path = cli.config_path()?;
    let store = ConfigStore::load(&path)?;
    let profile = ConnectionProfile::resolve(&store, &cli.service)?;
    debug!(
        service = %cli.service,
        host = %profile.host,
        port = profile.port,
        "resolved profile"
    );

    let body = payload::build(&profile.message_body)?;

    anyhow::ensure!(
        cli.basic,
        "no publish mode selected; pass --basic to publish to a basic queue"
    );
    let message = BasicMessage::from_profile(&profile, body)?;

    let connection = profile
        .connect_options()
        .connect()
        .await
        .with_context(|| format!("cannot connect to {}:{}", profile.host, profile.port))?;
    let publisher = amqp::AmqpPublisher::new(&connection).await?;
    publisher
        .publish(&message)
        .await
        .with_context(|| format!("publish to queue {:?} failed", message.queue()))?;
    debug!(queue = %message.queue(), "published");

    // Error paths above drop the connection instead, which tears it down.
    connection
        .close(200, "done")
        .await
        .context("closing connection")?;
    Ok(())
}
