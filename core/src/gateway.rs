//! The single HTTP sink every event goes through.
//!
//! # Design
//! `HttpGateway` holds only its target URL and injected collaborators, so one
//! instance can be shared by all operation clients (and threads, as long as the
//! transport allows it). `send` performs exactly one `POST` to
//! `<base_url>/api/v1/lti/events` and returns the response whatever its status;
//! only failures to obtain a response become a `GatewayError`.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ConfigError, GatewayError};
use crate::event::{EventSerializer, JsonEventSerializer, LtiEvent};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

pub const EVENTS_PATH: &str = "/api/v1/lti/events";

/// Sends events to the remote LTI gateway.
pub trait LtiGateway: Send + Sync {
    fn send(&self, event: &LtiEvent) -> Result<HttpResponse, GatewayError>;
}

/// Where the gateway lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GatewayConfig {
    pub base_url: String,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// `LtiGateway` over an HTTP `Transport`.
#[derive(Debug, Clone)]
pub struct HttpGateway<T, S = JsonEventSerializer> {
    events_url: String,
    transport: T,
    serializer: S,
}

impl<T: Transport, S: EventSerializer> HttpGateway<T, S> {
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyBaseUrl` if `base_url` is empty.
    pub fn new(base_url: impl Into<String>, transport: T, serializer: S) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(Self {
            events_url: format!("{base_url}{EVENTS_PATH}"),
            transport,
            serializer,
        })
    }

    pub fn from_config(config: GatewayConfig, transport: T, serializer: S) -> Result<Self, ConfigError> {
        Self::new(config.base_url, transport, serializer)
    }

    pub fn events_url(&self) -> &str {
        &self.events_url
    }
}

impl<T: Transport, S: EventSerializer> LtiGateway for HttpGateway<T, S> {
    fn send(&self, event: &LtiEvent) -> Result<HttpResponse, GatewayError> {
        let event_type = event.event_type();

        let body = self.serializer.serialize(event).map_err(|e| {
            warn!(event_type, error = %e, "failed to serialize event");
            GatewayError::new(e.to_string()).with_source(e)
        })?;

        let request = HttpRequest {
            method: HttpMethod::Post,
            url: self.events_url.clone(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
        };

        debug!(event_type, url = %self.events_url, "sending event to lti gateway");
        match self.transport.request(request) {
            Ok(response) => {
                debug!(event_type, status = response.status, "lti gateway responded");
                Ok(response)
            }
            Err(e) => {
                warn!(event_type, code = e.code(), error = %e, "lti gateway request failed");
                Err(GatewayError::from(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::client::NrpsClient;
    use crate::error::{ClientFamily, TransportError};
    use crate::event::{DeleteLineItemEvent, MembershipFilter};
    use crate::serializer::JsonSerializer;

    /// Records every request and answers with a fixed outcome.
    #[derive(Debug)]
    struct RecordingTransport {
        requests: Mutex<Vec<HttpRequest>>,
        fail_with: Option<(&'static str, i64)>,
    }

    impl RecordingTransport {
        fn ok() -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(message: &'static str, code: i64) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                fail_with: Some((message, code)),
            }
        }
    }

    impl Transport for RecordingTransport {
        fn request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(request);
            match self.fail_with {
                Some((message, code)) => Err(TransportError::new(message).with_code(code)),
                None => Ok(HttpResponse::new(418, "teapot")),
            }
        }
    }

    #[derive(Debug)]
    struct FixedSerializer;

    impl EventSerializer for FixedSerializer {
        fn serialize(&self, _event: &LtiEvent) -> Result<String, serde_json::Error> {
            Ok("json-serialized-body".to_string())
        }
    }

    fn event() -> LtiEvent {
        DeleteLineItemEvent::new("reg-1", "http://example.url").into()
    }

    #[test]
    fn empty_url_is_rejected() {
        let err = HttpGateway::new("", RecordingTransport::ok(), JsonEventSerializer).unwrap_err();
        assert_eq!(err, ConfigError::EmptyBaseUrl);

        let config: GatewayConfig = serde_json::from_str(r#"{"base_url":""}"#).unwrap();
        assert!(HttpGateway::from_config(config, RecordingTransport::ok(), FixedSerializer).is_err());
    }

    #[test]
    fn send_posts_serialized_event_once() {
        let gateway = HttpGateway::new("http://local.mock", RecordingTransport::ok(), FixedSerializer).unwrap();
        let response = gateway.send(&event()).unwrap();

        // Any status is handed back untouched.
        assert_eq!(response, HttpResponse::new(418, "teapot"));

        let requests = gateway.transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let req = &requests[0];
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://local.mock/api/v1/lti/events");
        assert_eq!(
            req.headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
        assert_eq!(req.body.as_deref(), Some("json-serialized-body"));
    }

    #[test]
    fn default_serializer_writes_event_json() {
        let gateway = HttpGateway::new("http://local.mock", RecordingTransport::ok(), JsonEventSerializer).unwrap();
        gateway.send(&event()).unwrap();

        let requests = gateway.transport.requests.lock().unwrap();
        let body: serde_json::Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["eventType"], "agsDeleteLineItem");
        assert_eq!(body["lineItemUrl"], "http://example.url");
    }

    #[test]
    fn transport_failure_becomes_gateway_error() {
        let gateway = HttpGateway::new(
            "http://local.mock",
            RecordingTransport::failing("something wrong", 28),
            JsonEventSerializer,
        )
        .unwrap();
        let err = gateway.send(&event()).unwrap_err();
        assert_eq!(err.to_string(), "Cannot perform request: something wrong");
        assert_eq!(err.message(), "something wrong");
        assert_eq!(err.code(), 28);
        assert_eq!(gateway.transport.requests.lock().unwrap().len(), 1);
    }

    #[test]
    fn transport_failure_surfaces_as_client_reason() {
        let gateway = HttpGateway::new(
            "http://local.mock",
            RecordingTransport::failing("something wrong", 9),
            JsonEventSerializer,
        )
        .unwrap();
        let client = NrpsClient::new(Arc::new(gateway), Arc::new(JsonSerializer::new()));

        let err = client
            .get_context_membership("reg-1", "http://example.url", MembershipFilter::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to trigger the following event: nrpsGetContextMembership, reason: something wrong"
        );
        assert_eq!(err.code(), 9);
        assert_eq!(err.family(), Some(ClientFamily::Nrps));
    }

    #[test]
    fn events_url_is_appended_verbatim() {
        let config = GatewayConfig::new("https://gateway.example/tenant");
        let gateway = HttpGateway::from_config(config, RecordingTransport::ok(), JsonEventSerializer).unwrap();
        assert_eq!(gateway.events_url(), "https://gateway.example/tenant/api/v1/lti/events");
    }
}
