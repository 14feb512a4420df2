//! Error types for the LTI gateway client.
//!
//! # Design
//! Failures are layered the same way the call path is. `TransportError` comes
//! out of a `Transport`, `HttpGateway` wraps it into a `GatewayError`, and every
//! operation client turns a `GatewayError` (or a status-code mismatch) into one
//! `ClientError::Event` naming the event that could not be triggered. The error
//! code of the innermost failure is copied eagerly at each step so callers can
//! read it without walking the `source()` chain.

use std::fmt;

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Raised when a gateway is built from an unusable configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("lti gateway url cannot be empty")]
    EmptyBaseUrl,
}

/// A failure reported by the underlying HTTP transport.
///
/// Non-2xx statuses are not transport failures: they are returned as
/// `HttpResponse` data and judged by the operation clients.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    code: i64,
    #[source]
    source: Option<BoxError>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 0,
            source: None,
        }
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> i64 {
        self.code
    }
}

/// The single error kind raised by `LtiGateway::send`.
#[derive(Debug, Error)]
#[error("Cannot perform request: {message}")]
pub struct GatewayError {
    message: String,
    code: i64,
    #[source]
    source: Option<BoxError>,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 0,
            source: None,
        }
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The message of the underlying failure, without the gateway prefix.
    ///
    /// Clients report this as their reason. `Display` keeps the
    /// `Cannot perform request: ` prefix for callers logging the gateway
    /// error directly.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> i64 {
        self.code
    }
}

impl From<TransportError> for GatewayError {
    fn from(err: TransportError) -> Self {
        Self {
            message: err.message.clone(),
            code: err.code,
            source: Some(Box::new(err)),
        }
    }
}

/// A domain serializer could not turn a response body into its model.
#[derive(Debug, Error)]
#[error("failed to deserialize {model}: {message}")]
pub struct DeserializeError {
    model: &'static str,
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl DeserializeError {
    pub fn new(model: &'static str, message: impl Into<String>) -> Self {
        Self {
            model,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn model(&self) -> &'static str {
        self.model
    }
}

/// The operation client an error originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientFamily {
    Ags,
    BasicOutcome,
    Core,
    Nrps,
    Proctoring,
}

impl fmt::Display for ClientFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClientFamily::Ags => "ags",
            ClientFamily::BasicOutcome => "basic-outcome",
            ClientFamily::Core => "core",
            ClientFamily::Nrps => "nrps",
            ClientFamily::Proctoring => "proctoring",
        };
        f.write_str(name)
    }
}

/// Errors returned by the operation clients.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The event could not be sent, or the gateway answered with an
    /// unexpected status code.
    #[error("Failed to trigger the following event: {event_type}, reason: {reason}")]
    Event {
        family: ClientFamily,
        event_type: &'static str,
        reason: String,
        code: i64,
        #[source]
        source: Option<GatewayError>,
    },

    /// The domain serializer rejected the response body. Passed through
    /// untouched.
    #[error(transparent)]
    Deserialize(#[from] DeserializeError),
}

impl ClientError {
    pub(crate) fn gateway(family: ClientFamily, event_type: &'static str, err: GatewayError) -> Self {
        ClientError::Event {
            family,
            event_type,
            reason: err.message().to_string(),
            code: err.code(),
            source: Some(err),
        }
    }

    pub(crate) fn unexpected_status(
        family: ClientFamily,
        event_type: &'static str,
        expected: u16,
        actual: u16,
    ) -> Self {
        ClientError::Event {
            family,
            event_type,
            reason: format!("Expected status code is {expected}, got {actual}"),
            code: 0,
            source: None,
        }
    }

    /// `None` for deserialization failures, which belong to no client.
    pub fn family(&self) -> Option<ClientFamily> {
        match self {
            ClientError::Event { family, .. } => Some(*family),
            ClientError::Deserialize(_) => None,
        }
    }

    pub fn event_type(&self) -> Option<&'static str> {
        match self {
            ClientError::Event { event_type, .. } => Some(*event_type),
            ClientError::Deserialize(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            ClientError::Event { reason, .. } => Some(reason.as_str()),
            ClientError::Deserialize(_) => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            ClientError::Event { code, .. } => *code,
            ClientError::Deserialize(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn gateway_error_keeps_transport_message_and_code() {
        let transport = TransportError::new("connection refused").with_code(111);
        let err = GatewayError::from(transport);
        assert_eq!(err.message(), "connection refused");
        assert_eq!(err.code(), 111);
        assert_eq!(err.to_string(), "Cannot perform request: connection refused");
        assert_eq!(err.source().unwrap().to_string(), "connection refused");
    }

    #[test]
    fn client_error_from_gateway_uses_raw_message_as_reason() {
        let gateway = GatewayError::new("something wrong").with_code(7);
        let err = ClientError::gateway(ClientFamily::Nrps, "nrpsGetContextMembership", gateway);
        assert_eq!(
            err.to_string(),
            "Failed to trigger the following event: nrpsGetContextMembership, reason: something wrong"
        );
        assert_eq!(err.code(), 7);
        assert_eq!(err.family(), Some(ClientFamily::Nrps));
        assert!(err.source().is_some());
    }

    #[test]
    fn status_mismatch_has_no_cause_and_zero_code() {
        let err = ClientError::unexpected_status(ClientFamily::Ags, "agsCreateLineItem", 201, 400);
        assert_eq!(
            err.to_string(),
            "Failed to trigger the following event: agsCreateLineItem, reason: Expected status code is 201, got 400"
        );
        assert_eq!(err.reason(), Some("Expected status code is 201, got 400"));
        assert_eq!(err.code(), 0);
        assert!(err.source().is_none());
    }

    #[test]
    fn deserialize_error_is_transparent() {
        let err = ClientError::from(DeserializeError::new("Membership", "expected value"));
        assert_eq!(err.to_string(), "failed to deserialize Membership: expected value");
        assert_eq!(err.family(), None);
        assert_eq!(err.event_type(), None);
    }

    #[test]
    fn config_error_message() {
        assert_eq!(ConfigError::EmptyBaseUrl.to_string(), "lti gateway url cannot be empty");
    }
}
