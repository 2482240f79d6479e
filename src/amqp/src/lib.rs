use std::borrow::Cow;

use lapin::{
    options::BasicPublishOptions,
    uri::{AMQPAuthority, AMQPUri, AMQPUserInfo},
    BasicProperties, ConnectionProperties,
};

pub use lapin::Connection;

/// Broker endpoint and credentials for one transient connection.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub host: String,
    pub port: u16,
    pub vhost: String,
    pub username: String,
    pub password: String,
}

impl ConnectOptions {
    /// Builds the URI structurally, so vhost names never need percent-escaping.
    pub fn amqp_uri(&self) -> AMQPUri {
        AMQPUri {
            authority: AMQPAuthority {
                userinfo: AMQPUserInfo {
                    username: self.username.clone(),
                    password: self.password.clone(),
                },
                host: self.host.clone(),
                port: self.port,
            },
            vhost: self.vhost.clone(),
            ..AMQPUri::default()
        }
    }

    pub async fn connect(&self) -> anyhow::Result<Connection> {
        let connection =
            Connection::connect_uri(self.amqp_uri(), ConnectionProperties::default()).await?;
        Ok(connection)
    }
}

pub trait Publish {
    fn exchange(&self) -> &str;

    fn routing_key(&self) -> &str;

    fn payload(&self) -> Cow<'_, [u8]>;
}

pub struct AmqpPublisher {
    channel: lapin::Channel,
}

impl AmqpPublisher {
    pub async fn new(connection: &Connection) -> anyhow::Result<Self> {
        let channel = connection.create_channel().await?;
        Ok(Self { channel })
    }

    /// Issues a single publish. No confirm-select and no ack tracking; a
    /// transport failure surfaces as the error of this call.
    pub async fn publish(&self, m: &impl Publish) -> anyhow::Result<()> {
        let _confirm = self
            .channel
            .basic_publish(
                m.exchange(),
                m.routing_key(),
                BasicPublishOptions::default(),
                m.payload().as_ref(),
                BasicProperties::default(),
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_keeps_vhost_and_credentials() {
        let options = ConnectOptions {
            host: "broker.internal".into(),
            port: 5673,
            vhost: "/".into(),
            username: "svc".into(),
            password: "secret".into(),
        };
        let uri = options.amqp_uri();
        assert_eq!(uri.authority.host, "broker.internal");
        assert_eq!(uri.authority.port, 5673);
        assert_eq!(uri.authority.userinfo.username, "svc");
        assert_eq!(uri.authority.userinfo.password, "secret");
        assert_eq!(uri.vhost, "/");
    }
}
