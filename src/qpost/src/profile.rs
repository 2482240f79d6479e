//! Profile resolution: one named config section becomes a fully-defaulted
//! connection profile.

use amqp::ConnectOptions;

use crate::error::ConfigError;
use crate::store::ConfigStore;

/// Resolved settings for one service profile. Every field except
/// `message_body` has a documented default; the optional trio stays `None`
/// when the key is absent so downstream code can leave it off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionProfile {
    pub host: String,
    pub user: String,
    pub password: String,
    pub vhost: String,
    pub port: u16,
    pub queue: Option<String>,
    pub exchange: Option<String>,
    pub routing_key: Option<String>,
    pub message_body: String,
}

impl ConnectionProfile {
    /// Pure lookup and defaulting over the config snapshot. An empty value
    /// is taken literally; only a wholly absent key takes the default or
    /// unset path. Nothing is trimmed.
    pub fn resolve(store: &ConfigStore, service: &str) -> Result<Self, ConfigError> {
        if !store.has_section(service) {
            return Err(ConfigError::MissingProfile(service.to_string()));
        }

        let lookup = |key: &str| store.get(service, key).map(str::to_string);

        let port = match store.get(service, "rabbit_port") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort {
                profile: service.to_string(),
                value: raw.to_string(),
            })?,
            None => 5672,
        };

        let message_body = lookup("rabbit_message_body")
            .ok_or_else(|| ConfigError::MissingMessageBody(service.to_string()))?;

        Ok(Self {
            host: lookup("rabbit_host").unwrap_or_else(|| "localhost".to_string()),
            user: lookup("rabbit_user").unwrap_or_else(|| "guest".to_string()),
            password: lookup("rabbit_pass").unwrap_or_else(|| "guest".to_string()),
            vhost: lookup("rabbit_vhost").unwrap_or_else(|| "/".to_string()),
            port,
            queue: lookup("rabbit_queue"),
            exchange: lookup("rabbit_exchange"),
            routing_key: lookup("rabbit_routing_key"),
            message_body,
        })
    }

    pub fn connect_options(&self) -> ConnectOptions {
        ConnectOptions {
            host: self.host.clone(),
            port: self.port,
            vhost: self.vhost.clone(),
            username: self.user.clone(),
            password: self.password.clone(),
        }
    }
}
