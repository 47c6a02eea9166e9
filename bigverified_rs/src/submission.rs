//! Contact form send action.
//!
//! The form shell never talks to the network itself. What happens on send is
//! decided by the [`SubmissionHandler`] passed into composition:
//!
//! - [`NoopSubmission`] discards everything; the form has no action.
//! - [`NetworkedSubmission`] posts a JSON payload through a [`Transport`].
//!
//! No concrete transport ships with this crate.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::layout::FormAction;

/// Values entered into the contact form, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub fields: BTreeMap<String, String>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

/// Result of a handled submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Dropped without leaving the process.
    Discarded,
    /// Handed to the transport.
    Sent { endpoint: String },
}

#[derive(Debug, Error)]
#[error("transport failed: {message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Delivers an encoded submission to an endpoint.
pub trait Transport {
    fn post(&self, endpoint: &str, body: &str) -> Result<(), TransportError>;
}

/// Capability behind the contact form's send button.
pub trait SubmissionHandler {
    /// Action carried by the composed form shell.
    fn form_action(&self) -> FormAction;

    fn submit(&self, submission: &Submission) -> Result<SubmissionOutcome, SubmitError>;
}

/// Send does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSubmission;

impl SubmissionHandler for NoopSubmission {
    fn form_action(&self) -> FormAction {
        FormAction::None
    }

    fn submit(&self, submission: &Submission) -> Result<SubmissionOutcome, SubmitError> {
        debug!(fields = submission.fields.len(), "discarding contact submission");
        Ok(SubmissionOutcome::Discarded)
    }
}

/// Posts submissions as JSON to a fixed endpoint.
#[derive(Clone, Debug)]
pub struct NetworkedSubmission<T> {
    endpoint: String,
    transport: T,
}

impl<T: Transport> NetworkedSubmission<T> {
    pub fn new(endpoint: impl Into<String>, transport: T) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> SubmissionHandler for NetworkedSubmission<T> {
    fn form_action(&self) -> FormAction {
        FormAction::Post {
            endpoint: self.endpoint.clone(),
        }
    }

    fn submit(&self, submission: &Submission) -> Result<SubmissionOutcome, SubmitError> {
        let body = serde_json::to_string(submission)?;
        self.transport.post(&self.endpoint, &body)?;
        debug!(endpoint = %self.endpoint, "contact submission sent");
        Ok(SubmissionOutcome::Sent {
            endpoint: self.endpoint.clone(),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingTransport;
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Submission {
        Submission::new()
            .with("name", "Ada")
            .with("email", "ada@example.com")
    }

    #[test]
    fn noop_discards_and_has_no_action() {
        let handler = NoopSubmission;
        assert_eq!(handler.form_action(), FormAction::None);
        assert_eq!(
            handler.submit(&sample()).expect("noop submit"),
            SubmissionOutcome::Discarded
        );
    }

    #[test]
    fn networked_posts_json_once() {
        let handler =
            NetworkedSubmission::new("https://example.com/leads", RecordingTransport::default());
        assert_eq!(handler.endpoint(), "https://example.com/leads");
        assert_eq!(
            handler.form_action(),
            FormAction::Post {
                endpoint: "https://example.com/leads".into()
            }
        );

        let outcome = handler.submit(&sample()).expect("submit");
        assert_eq!(
            outcome,
            SubmissionOutcome::Sent {
                endpoint: "https://example.com/leads".into()
            }
        );

        let calls = handler.transport().calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, handler.endpoint());
        assert_eq!(
            calls[0].1,
            r#"{"fields":{"email":"ada@example.com","name":"Ada"}}"#
        );
    }

    #[test]
    fn networked_surfaces_transport_errors() {
        let transport = RecordingTransport {
            fail: true,
            ..Default::default()
        };
        let handler = NetworkedSubmission::new("https://example.com/leads", transport);

        let err = handler.submit(&sample()).expect_err("failing transport");
        assert!(matches!(err, SubmitError::Transport(_)));
        assert_eq!(err.to_string(), "transport failed: connection refused");
    }
}
