//! Tests for ChannelsConfig and FailurePolicy.

use crate::config::{ChannelsConfig, FailurePolicy};

#[test]
fn failure_policy_default_is_swallow() {
    assert_eq!(FailurePolicy::default(), FailurePolicy::Swallow);
}

#[test]
fn failure_policy_from_str() {
    assert_eq!(FailurePolicy::from_str("Report"), Some(FailurePolicy::Report));
    assert_eq!(FailurePolicy::from_str("swallow"), Some(FailurePolicy::Swallow));
    assert_eq!(FailurePolicy::from_str("panic"), None);
}

#[test]
fn builder_helpers_set_fields() {
    let cfg = ChannelsConfig::new()
        .with_info("stderr")
        .with_failure_policy(FailurePolicy::Report);

    assert_eq!(cfg.info.as_deref(), Some("stderr"));
    assert_eq!(cfg.error, None);
    assert_eq!(cfg.failure_policy, FailurePolicy::Report);
}

#[cfg(feature = "json")]
#[test]
fn parse_json_config() {
    let cfg = ChannelsConfig::from_json_str(
        r#"{"info": "stdout", "error": "stderr", "failure_policy": "report"}"#,
    )
    .unwrap();

    assert_eq!(cfg.info.as_deref(), Some("stdout"));
    assert_eq!(cfg.error.as_deref(), Some("stderr"));
    assert_eq!(cfg.failure_policy, FailurePolicy::Report);
}

#[cfg(feature = "json")]
#[test]
fn dash_identity_from_json_is_rejected_at_build() {
    use crate::ChannelsBuilder;
    use crate::error::ChannelError;

    let cfg = ChannelsConfig::from_json_str(r#"{"info": "-", "error": "STDERR"}"#).unwrap();
    let err = ChannelsBuilder::from_config(cfg).build().unwrap_err();

    let identities: Vec<_> = err
        .errors
        .iter()
        .map(|e| match e {
            ChannelError::Configuration { identity, .. } => identity.as_str(),
            other => panic!("unexpected error: {other}"),
        })
        .collect();
    assert_eq!(identities, ["-", "STDERR"]);
}

#[cfg(feature = "json")]
#[test]
fn empty_json_config_uses_defaults() {
    let cfg = ChannelsConfig::from_json_str("{}").unwrap();
    assert!(cfg.info.is_none());
    assert!(cfg.error.is_none());
    assert_eq!(cfg.failure_policy, FailurePolicy::Swallow);
}

#[cfg(feature = "yaml")]
#[test]
fn parse_yaml_config() {
    let yaml = r#"
info: stderr
failure_policy: swallow
"#;
    let cfg = ChannelsConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(cfg.info.as_deref(), Some("stderr"));
    assert!(cfg.error.is_none());
}
