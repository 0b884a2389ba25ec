//! Tests for ChannelsBuilder.

use std::io::Write;

use crate::channel::WriteOnlyChannel;
use crate::config::{ChannelsConfig, Destination, FailurePolicy, Severity};
use crate::error::{ChannelError, ErrorPolicy};
use crate::io::{InMemorySink, OutputTarget};
use crate::ChannelsBuilder;

#[test]
fn default_build_binds_stdout_and_stderr() {
    let channels = ChannelsBuilder::new().build().unwrap();

    assert_eq!(channels.info().destination(), Destination::Info);
    assert_eq!(channels.info().severity(), Severity::Info);
    assert_eq!(channels.error().destination(), Destination::Error);
    assert_eq!(channels.error().severity(), Severity::Error);
}

#[test]
fn build_with_routes_to_chosen_targets() {
    let out = InMemorySink::new("out");
    let err = InMemorySink::new("err");

    let channels = ChannelsBuilder::new()
        .build_with(|dest| {
            let sink = match dest {
                Destination::Info => out.clone(),
                Destination::Error => err.clone(),
            };
            Ok(Box::new(sink) as Box<dyn OutputTarget>)
        })
        .unwrap();

    writeln!(channels.info(), "progress").unwrap();
    writeln!(channels.error(), "failure").unwrap();
    channels.sync_all();

    assert_eq!(out.contents_string(), "progress\n");
    assert_eq!(err.contents_string(), "failure\n");
}

#[test]
fn accumulate_collects_both_errors() {
    let err = ChannelsBuilder::new()
        .info(Some("stdin"))
        .error(None)
        .build()
        .unwrap_err();

    assert_eq!(err.len(), 2);
    assert!(
        err.errors
            .iter()
            .all(|e| matches!(e, ChannelError::Configuration { .. }))
    );
}

#[test]
fn fast_fail_stops_at_first_error() {
    let err = ChannelsBuilder::new()
        .with_mode(ErrorPolicy::FastFail)
        .info(Some(""))
        .error(Some("nowhere"))
        .build()
        .unwrap_err();

    assert_eq!(err.len(), 1);
}

#[test]
fn from_config_applies_destinations_and_policy() {
    let config = ChannelsConfig::new()
        .with_info("stderr")
        .with_failure_policy(FailurePolicy::Report);

    let channels = ChannelsBuilder::from_config(config).build().unwrap();

    assert_eq!(channels.info().destination(), Destination::Error);
    assert_eq!(channels.error().destination(), Destination::Error);
    assert_eq!(channels.info().failure_policy(), FailurePolicy::Report);
}

#[test]
fn close_all_closes_both() {
    let sink = InMemorySink::new("mem");
    let channels = ChannelsBuilder::new()
        .build_with(|_| Ok(Box::new(sink.clone()) as Box<dyn OutputTarget>))
        .unwrap();

    channels.info().write_bytes(b"a").unwrap();
    channels.error().write_bytes(b"b").unwrap();
    channels.close_all();

    assert!(channels.info().is_closed());
    assert!(channels.error().is_closed());
    assert_eq!(sink.contents_string(), "ab");
    assert!(channels.info().read_byte().is_err());
}
