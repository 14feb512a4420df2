//! Every operation client against the live mock gateway.
//!
//! # Design
//! Starts the mock server on a random port, then drives each client through a
//! real `HttpGateway` + `UreqTransport` stack. Validates that the event wire
//! shapes, status expectations and model deserialization agree with the
//! server end-to-end.

use std::sync::Arc;

use lti_client::{
    AcsAction, AcsControl, AcsResourceLink, AcsStatus, ActivityProgress, AgsClient, BasicOutcomeClient,
    ClientError, ClientFamily, CoreClient, GradingProgress, HttpGateway, HttpMethod, JsonEventSerializer,
    JsonSerializer, LineItem, LineItemsFilter, LtiGateway, MembershipFilter, NrpsClient, ProctoringClient,
    ResultsFilter, Score, TransportConfig, UreqTransport,
};

const CONTAINER: &str = "http://platform.test/lineitems";
const UNKNOWN_REGISTRATION: &str = "unknown-registration";

/// Start the mock gateway on a background thread and return its base URL.
fn start_mock_gateway() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn gateway(base_url: &str) -> Arc<dyn LtiGateway> {
    let transport = UreqTransport::new(TransportConfig {
        timeout: Some(std::time::Duration::from_secs(10)),
        user_agent: Some("lti-client-tests".to_string()),
    });
    Arc::new(HttpGateway::new(base_url, transport, JsonEventSerializer).unwrap())
}

fn ags(gateway: Arc<dyn LtiGateway>) -> AgsClient {
    AgsClient::new(
        gateway,
        Arc::new(JsonSerializer::new()),
        Arc::new(JsonSerializer::new()),
        Arc::new(JsonSerializer::new()),
    )
}

fn score(user_id: &str, given: f64) -> Score {
    Score {
        user_id: user_id.to_string(),
        activity_progress: ActivityProgress::Completed,
        grading_progress: GradingProgress::FullyGraded,
        timestamp: "2021-01-01T00:00:00+00:00".to_string(),
        score_given: Some(given),
        score_maximum: Some(10.0),
        comment: None,
    }
}

#[test]
fn ags_lifecycle() {
    let base_url = start_mock_gateway();
    let client = ags(gateway(&base_url));

    // Step 1: empty container.
    let items = client.list_line_items("reg-1", CONTAINER, LineItemsFilter::default()).unwrap();
    assert!(items.line_items.is_empty(), "expected empty container");

    // Step 2: create two line items.
    let quiz = LineItem {
        tag: Some("quiz".to_string()),
        ..LineItem::new(10.0, "Quiz 1")
    };
    client.create_line_item("reg-1", quiz, CONTAINER).unwrap();
    client.create_line_item("reg-1", LineItem::new(100.0, "Exam"), CONTAINER).unwrap();

    // Step 3: list with and without filter.
    let all = client.list_line_items("reg-1", CONTAINER, LineItemsFilter::default()).unwrap();
    assert_eq!(all.line_items.len(), 2);
    let quizzes = client
        .list_line_items(
            "reg-1",
            CONTAINER,
            LineItemsFilter {
                tag: Some("quiz".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(quizzes.line_items.len(), 1);
    let quiz = quizzes.line_items.into_iter().next().unwrap();
    let url = quiz.id.clone().expect("platform assigns an id");
    assert!(url.starts_with(CONTAINER));

    // Step 4: get it back.
    let fetched = client.get_line_item("reg-1", &url, Vec::new()).unwrap();
    assert_eq!(fetched, quiz);

    // Step 5: update through the line item id.
    let renamed = LineItem {
        label: "Quiz 1 (revised)".to_string(),
        ..fetched
    };
    client.update_line_item("reg-1", renamed, None).unwrap();
    let fetched = client.get_line_item("reg-1", &url, Vec::new()).unwrap();
    assert_eq!(fetched.label, "Quiz 1 (revised)");

    // Step 6: publish scores and read them back as results.
    client.publish_score("reg-1", score("user-1", 6.0), &url).unwrap();
    client.publish_score("reg-1", score("user-2", 9.0), &url).unwrap();
    let results = client.list_results("reg-1", &url, ResultsFilter::default()).unwrap();
    assert_eq!(results.results.len(), 2);
    let user_two = client
        .list_results(
            "reg-1",
            &url,
            ResultsFilter {
                user_identifier: Some("user-2".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(user_two.results.len(), 1);
    assert_eq!(user_two.results[0].result_score, Some(9.0));

    // Step 7: delete; the gateway then reports 404 for it.
    client.delete_line_item("reg-1", &url).unwrap();
    let err = client.get_line_item("reg-1", &url, Vec::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to trigger the following event: agsGetLineItem, reason: Expected status code is 200, got 404"
    );
    let err = client.delete_line_item("reg-1", &url).unwrap_err();
    assert_eq!(err.reason(), Some("Expected status code is 201, got 404"));
}

#[test]
fn ags_create_line_item_status_mismatch() {
    let base_url = start_mock_gateway();
    let err = ags(gateway(&base_url))
        .create_line_item(UNKNOWN_REGISTRATION, LineItem::new(10.0, "Test Line Item"), CONTAINER)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to trigger the following event: agsCreateLineItem, reason: Expected status code is 201, got 404"
    );
    assert_eq!(err.family(), Some(ClientFamily::Ags));
    assert_eq!(err.code(), 0);
}

#[test]
fn basic_outcome_round_trip() {
    let base_url = start_mock_gateway();
    let client = BasicOutcomeClient::new(gateway(&base_url), Arc::new(JsonSerializer::new()));
    let service = "http://platform.test/outcomes";

    client.replace_result("reg-1", service, "sourced-1", 0.75, None).unwrap();
    let read = client.read_result("reg-1", service, "sourced-1").unwrap();
    assert!(read.success);
    assert_eq!(read.operation, "readResult");
    assert_eq!(read.score, Some(0.75));

    client.delete_result("reg-1", service, "sourced-1").unwrap();
    let read = client.read_result("reg-1", service, "sourced-1").unwrap();
    assert!(!read.success);
    assert_eq!(read.score, None);

    let sent = client.send_basic_outcome("reg-1", service, "<imsx_POXEnvelopeRequest/>").unwrap();
    assert!(sent.success);

    // Out-of-range scores are refused by the platform with 422.
    let err = client.replace_result("reg-1", service, "sourced-1", 4.0, Some("en")).unwrap_err();
    assert_eq!(err.reason(), Some("Expected status code is 201, got 422"));
    assert_eq!(err.family(), Some(ClientFamily::BasicOutcome));
}

#[test]
fn core_request_relays_platform_response() {
    let base_url = start_mock_gateway();
    let client = CoreClient::new(gateway(&base_url), Arc::new(JsonSerializer::new()));

    let response = client
        .request("reg-1", HttpMethod::Get, "/example-uri", serde_json::Map::new(), Vec::new())
        .unwrap();
    assert_eq!(response.status_code, 200);
    assert_eq!(response.headers["Content-Type"], vec!["application/json".to_string()]);
    let relayed: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(relayed["method"], "GET");
    assert_eq!(relayed["uri"], "/example-uri");
}

#[test]
fn nrps_memberships() {
    let base_url = start_mock_gateway();
    let client = NrpsClient::new(gateway(&base_url), Arc::new(JsonSerializer::new()));
    let service = "http://platform.test/memberships";

    let all = client.get_context_membership("reg-1", service, MembershipFilter::default()).unwrap();
    assert_eq!(all.id, service);
    assert_eq!(all.members.len(), 2);

    let learners = client
        .get_resource_link_membership_for_payload(
            "reg-1",
            service,
            "resource-link-1",
            MembershipFilter {
                role: Some("Learner".to_string()),
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(learners.members.len(), 1);
    assert_eq!(learners.members[0].user_id, "learner-1");

    let err = client
        .get_context_membership(UNKNOWN_REGISTRATION, service, MembershipFilter::default())
        .unwrap_err();
    assert_eq!(err.event_type(), Some("nrpsGetContextMembership"));
}

#[test]
fn proctoring_send_control() {
    let base_url = start_mock_gateway();
    let client = ProctoringClient::new(gateway(&base_url), Arc::new(JsonSerializer::new()));
    let control = AcsControl {
        resource_link: AcsResourceLink {
            id: "resource-link-1".to_string(),
        },
        user_id: "user-1".to_string(),
        action: AcsAction::Pause,
        incident_time: "2021-01-01T00:00:00+00:00".to_string(),
        attempt_number: 1,
        issuer_identifier: None,
        extra_time: Some(123),
        incident_severity: None,
        reason_code: None,
        reason_msg: None,
    };

    let result = client.send_control("reg-1", control, "http://platform.test/acs").unwrap();
    assert_eq!(result.status, AcsStatus::Paused);
    assert_eq!(result.extra_time, Some(123));
}

#[test]
fn unreachable_gateway_is_reported_per_client() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = NrpsClient::new(gateway(&format!("http://127.0.0.1:{port}")), Arc::new(JsonSerializer::new()));

    let err = client
        .get_context_membership("reg-1", "http://platform.test/memberships", MembershipFilter::default())
        .unwrap_err();
    let ClientError::Event { family, event_type, reason, source, .. } = &err else {
        panic!("expected an event failure, got {err:?}");
    };
    assert_eq!(*family, ClientFamily::Nrps);
    assert_eq!(*event_type, "nrpsGetContextMembership");
    let gateway_error = source.as_ref().expect("gateway error is chained");
    assert_eq!(reason, gateway_error.message());
    assert_eq!(
        err.to_string(),
        format!("Failed to trigger the following event: nrpsGetContextMembership, reason: {reason}")
    );
}
