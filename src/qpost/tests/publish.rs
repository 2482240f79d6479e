//! Everything that happens before the wire: resolution, payload building,
//! and message construction for a basic publish.

use amqp::Publish;
use qpost::error::ConfigError;
use qpost::message::BasicMessage;
use qpost::payload;
use qpost::profile::ConnectionProfile;
use qpost::store::ConfigStore;

fn resolve(conf: &str, service: &str) -> Result<ConnectionProfile, ConfigError> {
    let store = ConfigStore::from_str(conf).unwrap();
    ConnectionProfile::resolve(&store, service)
}

#[test]
fn basic_publish_message_is_fully_formed() {
    let profile = resolve(
        "[sync]\n\
         rabbit_queue = jobs\n\
         rabbit_message_body = {'task': 'sync'}\n",
        "sync",
    )
    .unwrap();

    let body = payload::build(&profile.message_body).unwrap();
    let message = BasicMessage::from_profile(&profile, body).unwrap();

    assert_eq!(message.exchange(), "");
    assert_eq!(message.routing_key(), "jobs");
    assert_eq!(message.payload().as_ref(), br#"{"task":"sync"}"#);
}

#[test]
fn missing_queue_fails_before_any_connection() {
    let profile = resolve("[sync]\nrabbit_message_body = {'task': 'sync'}\n", "sync").unwrap();

    let body = payload::build(&profile.message_body).unwrap();
    assert!(matches!(
        BasicMessage::from_profile(&profile, body),
        Err(ConfigError::MissingQueue)
    ));
}

#[test]
fn malformed_body_fails_before_any_connection() {
    let profile = resolve(
        "[sync]\n\
         rabbit_queue = jobs\n\
         rabbit_message_body = import os\n",
        "sync",
    )
    .unwrap();

    assert!(payload::build(&profile.message_body).is_err());
}

#[test]
fn connection_options_come_from_the_profile() {
    let profile = resolve(
        "[sync]\n\
         rabbit_host = mq.internal\n\
         rabbit_vhost = /jobs\n\
         rabbit_port = 5673\n\
         rabbit_queue = jobs\n\
         rabbit_message_body = 'ping'\n",
        "sync",
    )
    .unwrap();

    let uri = profile.connect_options().amqp_uri();
    assert_eq!(uri.authority.host, "mq.internal");
    assert_eq!(uri.authority.port, 5673);
    assert_eq!(uri.vhost, "/jobs");
    assert_eq!(uri.authority.userinfo.username, "guest");
    assert_eq!(uri.authority.userinfo.password, "guest");
}
