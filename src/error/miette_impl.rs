//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{AggregateError, ChannelError};

/// A diagnostic wrapper for channel errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct ChannelDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(error: &ChannelError) -> &'static str {
    match error {
        ChannelError::Configuration { .. } => {
            "Use exactly \"stdout\" or \"stderr\" as the destination"
        }
        ChannelError::UnsupportedOperation { .. } => {
            "Channels only accept writes; read from the source instead"
        }
        ChannelError::Closed { .. } => {
            "Keep the guard from chanio::init alive while writing, and write before close()"
        }
        ChannelError::AlreadyInitialized => {
            "Call chanio::init or chanio::init_with once at startup"
        }
    }
}

impl From<ChannelError> for ChannelDiagnostic {
    fn from(e: ChannelError) -> Self {
        ChannelDiagnostic {
            message: e.to_string(),
            help: Some(help_for(&e).into()),
            source: Some(Box::new(e)),
            severity: Severity::Error,
        }
    }
}

impl From<AggregateError> for ChannelDiagnostic {
    fn from(agg: AggregateError) -> Self {
        let first = agg.errors.into_iter().next();
        if let Some(e) = first {
            ChannelDiagnostic::from(e)
        } else {
            ChannelDiagnostic {
                message: "Unknown channel error".into(),
                source: None,
                help: None,
                severity: Severity::Error,
            }
        }
    }
}

impl From<AggregateError> for miette::Report {
    fn from(agg: AggregateError) -> Self {
        miette::Report::new(ChannelDiagnostic::from(agg))
    }
}
