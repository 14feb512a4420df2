//! Core service client: arbitrary authenticated platform requests.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::client::Dispatcher;
use crate::error::{ClientError, ClientFamily};
use crate::event::RequestEvent;
use crate::gateway::LtiGateway;
use crate::http::HttpMethod;
use crate::serializer::DomainSerializer;
use crate::types::CoreResponse;

/// Generic, authenticated platform requests performed by the gateway on behalf
/// of a registration.
#[derive(Clone)]
pub struct CoreClient {
    dispatcher: Dispatcher,
    response_serializer: Arc<dyn DomainSerializer<CoreResponse>>,
}

impl CoreClient {
    pub fn new(gateway: Arc<dyn LtiGateway>, response_serializer: Arc<dyn DomainSerializer<CoreResponse>>) -> Self {
        Self {
            dispatcher: Dispatcher::new(gateway, ClientFamily::Core),
            response_serializer,
        }
    }

    /// The returned `CoreResponse` is the platform's answer as relayed by the
    /// gateway; its own status code is not checked here.
    pub fn request(
        &self,
        registration_id: &str,
        method: HttpMethod,
        uri: &str,
        options: Map<String, Value>,
        scopes: Vec<String>,
    ) -> Result<CoreResponse, ClientError> {
        let event = RequestEvent::new(registration_id, method, uri, options, scopes);
        self.dispatcher.fetch(event, 200, self.response_serializer.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;
    use crate::client::testing::{assert_gateway_failure, assert_status_mismatch, StubGateway, StubSerializer};
    use crate::event::LtiEvent;
    use crate::serializer::JsonSerializer;

    fn relayed() -> CoreResponse {
        CoreResponse {
            status_code: 204,
            headers: BTreeMap::new(),
            body: String::new(),
        }
    }

    #[test]
    fn request_success() {
        let gateway = StubGateway::responding(200, "test body");
        let client = CoreClient::new(gateway.clone(), StubSerializer::new("test body", relayed()));

        let mut options = Map::new();
        options.insert("headers".to_string(), json!({"Accept": "application/json"}));
        let got = client
            .request("reg-1", HttpMethod::Post, "/example-uri", options.clone(), Vec::new())
            .unwrap();
        assert_eq!(got, relayed());

        match gateway.only_event() {
            LtiEvent::CoreRequest(event) => {
                assert_eq!(event.registration_id(), "reg-1");
                assert_eq!(event.uri(), "/example-uri");
                assert_eq!(event.method(), "POST");
                assert_eq!(event.options(), &options);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn request_reads_json_relay() {
        let body = r#"{"statusCode":200,"headers":{"Content-Type":["text/plain"]},"body":"hello"}"#;
        let client = CoreClient::new(StubGateway::responding(200, body), Arc::new(JsonSerializer::new()));
        let got = client
            .request("reg-1", HttpMethod::Get, "/example-uri", Map::new(), Vec::new())
            .unwrap();
        assert_eq!(got.status_code, 200);
        assert_eq!(got.headers["Content-Type"], vec!["text/plain".to_string()]);
        assert_eq!(got.body, "hello");
    }

    #[test]
    fn request_gateway_failure() {
        let client = CoreClient::new(
            StubGateway::failing("Cannot perform request"),
            Arc::new(JsonSerializer::new()),
        );
        let err = client
            .request("reg-1", HttpMethod::Post, "/example-uri", Map::new(), Vec::new())
            .unwrap_err();
        assert_gateway_failure(err, ClientFamily::Core, "coreRequest");
    }

    #[test]
    fn request_unexpected_status() {
        let client = CoreClient::new(StubGateway::responding(400, ""), Arc::new(JsonSerializer::new()));
        let err = client
            .request("reg-1", HttpMethod::Post, "/example-uri", Map::new(), Vec::new())
            .unwrap_err();
        assert_status_mismatch(err, ClientFamily::Core, "coreRequest", 200, 400);
    }
}
