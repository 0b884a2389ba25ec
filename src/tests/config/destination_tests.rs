//! Tests for destination resolution and severity hints.

use crate::config::{Destination, Severity};
use crate::error::ChannelError;

#[test]
fn standard_identities_resolve() {
    assert_eq!(Destination::from_identity(Some("stdout")).unwrap(), Destination::Info);
    assert_eq!(Destination::from_identity(Some("stderr")).unwrap(), Destination::Error);
}

#[test]
fn near_miss_identities_are_rejected() {
    for identity in ["-", "STDOUT", "Stdout", " stdout", " stderr\n", "StdErr", "stderr "] {
        let err = Destination::from_identity(Some(identity)).unwrap_err();
        match err {
            ChannelError::Configuration { identity: got, .. } => assert_eq!(got, identity),
            other => panic!("unexpected error for {identity:?}: {other}"),
        }
    }
}

#[test]
fn missing_identity_is_rejected() {
    let err = Destination::from_identity(None).unwrap_err();
    match err {
        ChannelError::Configuration { reason, .. } => assert!(reason.contains("missing")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unsupported_identity_is_rejected() {
    let err: ChannelError = "stdin".parse::<Destination>().unwrap_err();
    match err {
        ChannelError::Configuration { identity, reason } => {
            assert_eq!(identity, "stdin");
            assert!(reason.contains("stdout and stderr"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn severity_follows_destination() {
    assert_eq!(Destination::Info.severity(), Severity::Info);
    assert_eq!(Destination::Error.severity(), Severity::Error);
    assert_eq!(tracing::Level::from(Severity::Error), tracing::Level::ERROR);
    assert_eq!(tracing::Level::from(Severity::Info), tracing::Level::INFO);
}

#[test]
fn names_round_trip_through_from_str() {
    for dest in [Destination::Info, Destination::Error] {
        assert_eq!(dest.to_string().parse::<Destination>().unwrap(), dest);
        assert_eq!(dest.output_target().id(), dest.name());
    }
}
