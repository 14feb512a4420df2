//! LTI Basic Outcome client.

use std::sync::Arc;

use crate::client::Dispatcher;
use crate::error::{ClientError, ClientFamily};
use crate::event::{DeleteResultEvent, ReadResultEvent, ReplaceResultEvent, SendBasicOutcomeEvent};
use crate::gateway::LtiGateway;
use crate::serializer::DomainSerializer;
use crate::types::BasicOutcomeResponse;

#[derive(Clone)]
pub struct BasicOutcomeClient {
    dispatcher: Dispatcher,
    response_serializer: Arc<dyn DomainSerializer<BasicOutcomeResponse>>,
}

impl BasicOutcomeClient {
    pub fn new(
        gateway: Arc<dyn LtiGateway>,
        response_serializer: Arc<dyn DomainSerializer<BasicOutcomeResponse>>,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(gateway, ClientFamily::BasicOutcome),
            response_serializer,
        }
    }

    pub fn delete_result(
        &self,
        registration_id: &str,
        lis_outcome_service_url: &str,
        lis_result_sourced_id: &str,
    ) -> Result<(), ClientError> {
        let event = DeleteResultEvent::new(registration_id, lis_outcome_service_url, lis_result_sourced_id);
        self.dispatcher.trigger(event, 201)?;
        Ok(())
    }

    pub fn read_result(
        &self,
        registration_id: &str,
        lis_outcome_service_url: &str,
        lis_result_sourced_id: &str,
    ) -> Result<BasicOutcomeResponse, ClientError> {
        let event = ReadResultEvent::new(registration_id, lis_outcome_service_url, lis_result_sourced_id);
        self.dispatcher.fetch(event, 200, self.response_serializer.as_ref())
    }

    /// `language` defaults to `"en"` when `None`.
    pub fn replace_result(
        &self,
        registration_id: &str,
        lis_outcome_service_url: &str,
        lis_result_sourced_id: &str,
        score: f64,
        language: Option<&str>,
    ) -> Result<(), ClientError> {
        let event = ReplaceResultEvent::new(
            registration_id,
            lis_outcome_service_url,
            lis_result_sourced_id,
            score,
            language.unwrap_or(ReplaceResultEvent::DEFAULT_LANGUAGE),
        );
        self.dispatcher.trigger(event, 201)?;
        Ok(())
    }

    /// Relays a caller-built Basic Outcome XML document.
    pub fn send_basic_outcome(
        &self,
        registration_id: &str,
        lis_outcome_service_url: &str,
        xml: &str,
    ) -> Result<BasicOutcomeResponse, ClientError> {
        let event = SendBasicOutcomeEvent::new(registration_id, lis_outcome_service_url, xml);
        self.dispatcher.fetch(event, 200, self.response_serializer.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{assert_gateway_failure, assert_status_mismatch, StubGateway, StubSerializer};
    use crate::event::LtiEvent;

    const FAMILY: ClientFamily = ClientFamily::BasicOutcome;

    fn response() -> BasicOutcomeResponse {
        BasicOutcomeResponse {
            identifier: "resp-1".to_string(),
            operation: "readResult".to_string(),
            success: true,
            reference_request_identifier: Some("req-1".to_string()),
            description: None,
            score: Some(0.42),
            language: Some("en".to_string()),
        }
    }

    fn client(gateway: Arc<StubGateway>) -> BasicOutcomeClient {
        BasicOutcomeClient::new(gateway, StubSerializer::new("test body", response()))
    }

    #[test]
    fn delete_result() {
        let gateway = StubGateway::responding(201, "");
        client(gateway.clone())
            .delete_result("reg-1", "http://example.url", "sourced-id")
            .unwrap();
        match gateway.only_event() {
            LtiEvent::BasicOutcomeDeleteResult(event) => {
                assert_eq!(event.lis_outcome_service_url(), "http://example.url");
                assert_eq!(event.lis_result_sourced_id(), "sourced-id");
            }
            other => panic!("unexpected event {other:?}"),
        }

        let err = client(StubGateway::failing("Cannot perform request"))
            .delete_result("reg-1", "http://example.url", "sourced-id")
            .unwrap_err();
        assert_gateway_failure(err, FAMILY, "basicOutcomeDeleteResult");

        let err = client(StubGateway::responding(400, ""))
            .delete_result("reg-1", "http://example.url", "sourced-id")
            .unwrap_err();
        assert_status_mismatch(err, FAMILY, "basicOutcomeDeleteResult", 201, 400);
    }

    #[test]
    fn read_result() {
        let got = client(StubGateway::responding(200, "test body"))
            .read_result("reg-1", "http://example.url", "sourced-id")
            .unwrap();
        assert_eq!(got, response());

        let err = client(StubGateway::failing("Cannot perform request"))
            .read_result("reg-1", "http://example.url", "sourced-id")
            .unwrap_err();
        assert_gateway_failure(err, FAMILY, "basicOutcomeReadResult");

        let err = client(StubGateway::responding(400, ""))
            .read_result("reg-1", "http://example.url", "sourced-id")
            .unwrap_err();
        assert_status_mismatch(err, FAMILY, "basicOutcomeReadResult", 200, 400);
    }

    #[test]
    fn replace_result_defaults_language() {
        let gateway = StubGateway::responding(201, "");
        client(gateway.clone())
            .replace_result("reg-1", "http://example.url", "sourced-id", 0.42, None)
            .unwrap();
        match gateway.only_event() {
            LtiEvent::BasicOutcomeReplaceResult(event) => {
                assert_eq!(event.score(), 0.42);
                assert_eq!(event.language(), "en");
            }
            other => panic!("unexpected event {other:?}"),
        }

        let gateway = StubGateway::responding(201, "");
        client(gateway.clone())
            .replace_result("reg-1", "http://example.url", "sourced-id", 1.0, Some("fr"))
            .unwrap();
        assert!(matches!(gateway.only_event(), LtiEvent::BasicOutcomeReplaceResult(e) if e.language() == "fr"));
    }

    #[test]
    fn replace_result_failures() {
        let err = client(StubGateway::failing("Cannot perform request"))
            .replace_result("reg-1", "http://example.url", "sourced-id", 0.42, None)
            .unwrap_err();
        assert_gateway_failure(err, FAMILY, "basicOutcomeReplaceResult");

        let err = client(StubGateway::responding(200, ""))
            .replace_result("reg-1", "http://example.url", "sourced-id", 0.42, None)
            .unwrap_err();
        assert_status_mismatch(err, FAMILY, "basicOutcomeReplaceResult", 201, 200);
    }

    #[test]
    fn send_basic_outcome() {
        let gateway = StubGateway::responding(200, "test body");
        let got = client(gateway.clone())
            .send_basic_outcome("reg-1", "http://example.url", "<xml/>")
            .unwrap();
        assert_eq!(got, response());
        assert!(matches!(gateway.only_event(), LtiEvent::BasicOutcomeSendBasicOutcome(e) if e.xml() == "<xml/>"));

        let err = client(StubGateway::failing("Cannot perform request"))
            .send_basic_outcome("reg-1", "http://example.url", "<xml/>")
            .unwrap_err();
        assert_gateway_failure(err, FAMILY, "basicOutcomeSendBasicOutcome");

        let err = client(StubGateway::responding(201, ""))
            .send_basic_outcome("reg-1", "http://example.url", "<xml/>")
            .unwrap_err();
        assert_status_mismatch(err, FAMILY, "basicOutcomeSendBasicOutcome", 200, 201);
    }
}
