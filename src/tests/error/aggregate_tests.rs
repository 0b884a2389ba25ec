//! Tests for ErrorPolicy and AggregateError.

use crate::config::Destination;
use crate::error::{AggregateError, ChannelError, ErrorPolicy};

#[test]
fn error_policy_default_is_accumulate() {
    let policy = ErrorPolicy::default();
    assert_eq!(policy, ErrorPolicy::Accumulate);
}

#[test]
fn aggregate_error_single_and_len() {
    let agg = AggregateError::single(ChannelError::Closed {
        channel: Destination::Info,
    });
    assert_eq!(agg.len(), 1);
    assert!(!agg.is_empty());
}

#[test]
fn aggregate_error_lists_every_error() {
    let agg = AggregateError {
        errors: vec![
            ChannelError::configuration("stdin", "only stdout and stderr are supported"),
            ChannelError::AlreadyInitialized,
        ],
    };

    let text = agg.to_string();
    assert!(text.contains("2 error(s)"));
    assert!(text.contains("#1: invalid channel destination 'stdin'"));
    assert!(text.contains("#2: process-wide channels are already initialized"));
}
