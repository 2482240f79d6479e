//! Scheduled-run behavior of the built binary: every failure path exits
//! non-zero with a message, before touching the network.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn write_conf(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn qpost() -> Command {
    let mut cmd = Command::cargo_bin("qpost").unwrap();
    cmd.env_remove("QPOST_CONF_DIR").env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_config_location() {
    qpost()
        .args(["-s", "sync", "-b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("QPOST_CONF_DIR"));
}

#[test]
fn missing_config_file() {
    qpost()
        .args(["-s", "sync", "-b", "-f", "/nonexistent/qpost.conf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file"));
}

#[test]
fn unknown_service_profile() {
    let conf = write_conf("[other]\nrabbit_message_body = 'ping'\n");
    qpost()
        .args(["-s", "sync", "-b", "-f"])
        .arg(conf.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("[sync]"));
}

#[test]
fn missing_message_body() {
    let conf = write_conf("[sync]\nrabbit_queue = jobs\n");
    qpost()
        .args(["-s", "sync", "-b", "-f"])
        .arg(conf.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("rabbit_message_body"));
}

#[test]
fn malformed_message_body() {
    let conf = write_conf("[sync]\nrabbit_queue = jobs\nrabbit_message_body = import os\n");
    qpost()
        .args(["-s", "sync", "-b", "-f"])
        .arg(conf.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a literal"));
}

#[test]
fn missing_queue_in_basic_mode() {
    let conf = write_conf("[sync]\nrabbit_message_body = 'ping'\n");
    qpost()
        .args(["-s", "sync", "-b", "-f"])
        .arg(conf.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("rabbit_queue"));
}

#[test]
fn publish_mode_is_required() {
    let conf = write_conf("[sync]\nrabbit_queue = jobs\nrabbit_message_body = 'ping'\n");
    qpost()
        .args(["-s", "sync", "-f"])
        .arg(conf.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--basic"));
}

#[test]
#[ignore = "requires a RabbitMQ broker on 127.0.0.1:5672"]
fn publishes_one_message_and_stays_silent() {
    let conf = write_conf(
        "[sync]\n\
         rabbit_host = 127.0.0.1\n\
         rabbit_queue = qpost-test\n\
         rabbit_message_body = {'task': 'sync'}\n",
    );
    qpost()
        .args(["-s", "sync", "-b", "-f"])
        .arg(conf.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
