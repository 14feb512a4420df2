//! In-memory stand-in for the remote LTI gateway.
//!
//! Accepts `POST /api/v1/lti/events`, dispatches on the `eventType` member and
//! answers the way the real gateway does: 201 for writes, 200 with a JSON body
//! for reads. Line items, scores and basic outcome results live in a shared
//! in-memory platform so a client can observe its own writes.
//!
//! Registration `unknown-registration` is rejected with 404, which lets tests
//! provoke a status mismatch on any operation.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

pub const EVENTS_PATH: &str = "/api/v1/lti/events";
pub const UNKNOWN_REGISTRATION: &str = "unknown-registration";

const MEMBERSHIP_ROLE_PREFIX: &str = "http://purl.imsglobal.org/vocab/lis/v2/membership#";

// --- stored models ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub score_maximum: f64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_link_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
}

impl LineItem {
    pub fn new(score_maximum: f64, label: impl Into<String>) -> Self {
        Self {
            id: None,
            score_maximum,
            label: label.into(),
            resource_id: None,
            resource_link_id: None,
            tag: None,
            start_date_time: None,
            end_date_time: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_given: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_maximum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_progress: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grading_progress: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Platform state observed through the gateway.
#[derive(Debug, Default)]
pub struct Platform {
    /// Line items keyed by their URL.
    pub line_items: HashMap<String, LineItem>,
    /// Published scores keyed by line item URL.
    pub scores: HashMap<String, Vec<Score>>,
    /// Basic outcome scores keyed by `lisResultSourcedId`.
    pub outcomes: HashMap<String, f64>,
    /// Every event accepted, in arrival order.
    pub events: Vec<Value>,
}

pub type Db = Arc<RwLock<Platform>>;

// --- event payloads ---

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLineItem {
    pub line_items_container_url: String,
    pub line_item: LineItem,
}

/// Get and delete only need the line item URL.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRef {
    pub line_item_url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLineItems {
    pub line_items_container_url: String,
    pub resource_identifier: Option<String>,
    pub resource_link_identifier: Option<String>,
    pub tag: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLineItem {
    pub line_item_url: Option<String>,
    pub line_item: LineItem,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishScore {
    pub line_item_url: String,
    pub score: Score,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResults {
    pub line_item_url: String,
    pub user_identifier: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Read and delete only need the sourced id.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeRef {
    pub lis_result_sourced_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceResult {
    pub lis_result_sourced_id: String,
    pub score: f64,
    pub language: Option<String>,
}

#[derive(Deserialize)]
pub struct SendBasicOutcome {
    pub xml: String,
}

#[derive(Deserialize)]
pub struct CoreRequest {
    pub method: String,
    pub uri: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipRequest {
    pub membership_service_url: String,
    pub role: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    pub action: String,
    pub extra_time: Option<u32>,
}

#[derive(Deserialize)]
pub struct SendControl {
    pub control: Control,
}

// --- responses ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemContainer {
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgsResult {
    pub id: String,
    pub score_of: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResultContainer {
    pub results: Vec<AgsResult>,
}

#[derive(Debug, Serialize)]
pub struct OutcomeResponse {
    pub identifier: String,
    pub operation: &'static str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl OutcomeResponse {
    fn new(operation: &'static str, success: bool) -> Self {
        Self {
            identifier: Uuid::new_v4().to_string(),
            operation,
            success,
            score: None,
            language: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreResponse {
    pub status_code: u16,
    pub headers: HashMap<String, Vec<String>>,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub user_id: String,
    pub roles: Vec<String>,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MembershipContext {
    pub id: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Membership {
    pub id: String,
    pub context: MembershipContext,
    pub members: Vec<Member>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlResult {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_time: Option<u32>,
}

// --- routing ---

pub fn app() -> Router {
    app_with_state(Db::default())
}

/// Build the router around an existing platform, so tests can inspect it.
pub fn app_with_state(db: Db) -> Router {
    Router::new().route(EVENTS_PATH, post(handle_event)).with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock lti gateway listening");
    }
    axum::serve(listener, app()).await
}

async fn handle_event(State(db): State<Db>, Json(event): Json<Value>) -> Response {
    let Some(event_type) = event.get("eventType").and_then(Value::as_str).map(str::to_string) else {
        return error(StatusCode::BAD_REQUEST, "missing eventType");
    };
    debug!(%event_type, "received event");

    if event.get("registrationId").and_then(Value::as_str) == Some(UNKNOWN_REGISTRATION) {
        return error(StatusCode::NOT_FOUND, "unknown registration");
    }

    let mut platform = db.write().await;
    platform.events.push(event.clone());

    let reply = match event_type.as_str() {
        "agsCreateLineItem" => parse(event).map(|e| create_line_item(&mut platform, e)),
        "agsGetLineItem" => parse(event).map(|e| get_line_item(&platform, e)),
        "agsListLineItems" => parse(event).map(|e| list_line_items(&platform, e)),
        "agsUpdateLineItem" => parse(event).map(|e| update_line_item(&mut platform, e)),
        "agsDeleteLineItem" => parse(event).map(|e| delete_line_item(&mut platform, e)),
        "agsPublishScore" => parse(event).map(|e| publish_score(&mut platform, e)),
        "agsListResults" => parse(event).map(|e| list_results(&platform, e)),
        "basicOutcomeReplaceResult" => parse(event).map(|e| replace_result(&mut platform, e)),
        "basicOutcomeReadResult" => parse(event).map(|e| read_result(&platform, e)),
        "basicOutcomeDeleteResult" => parse(event).map(|e| delete_result(&mut platform, e)),
        "basicOutcomeSendBasicOutcome" => parse(event).map(send_basic_outcome),
        "coreRequest" => parse(event).map(core_request),
        "nrpsGetContextMembership" | "nrpsGetResourceLinkMembership" => parse(event).map(membership),
        "proctoringSendControl" => parse(event).map(send_control),
        other => Err(error(StatusCode::BAD_REQUEST, &format!("unsupported event type {other}"))),
    };
    reply.unwrap_or_else(|rejected| rejected)
}

/// Decode the event payload, answering 400 when it does not fit.
fn parse<T: DeserializeOwned>(event: Value) -> Result<T, Response> {
    serde_json::from_value(event).map_err(|e| error(StatusCode::BAD_REQUEST, &format!("invalid event: {e}")))
}

fn reply<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}

fn error(status: StatusCode, message: &str) -> Response {
    reply(status, json!({ "error": message }))
}

fn created() -> Response {
    reply(StatusCode::CREATED, Value::Null)
}

fn line_item_not_found() -> Response {
    error(StatusCode::NOT_FOUND, "line item not found")
}

fn page<T>(items: impl IntoIterator<Item = T>, offset: Option<usize>, limit: Option<usize>) -> Vec<T> {
    items
        .into_iter()
        .skip(offset.unwrap_or(0))
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

// --- ags ---

fn create_line_item(platform: &mut Platform, input: CreateLineItem) -> Response {
    let id = format!("{}/{}", input.line_items_container_url.trim_end_matches('/'), Uuid::new_v4());
    let line_item = LineItem {
        id: Some(id.clone()),
        ..input.line_item
    };
    platform.line_items.insert(id, line_item);
    created()
}

fn get_line_item(platform: &Platform, input: LineItemRef) -> Response {
    match platform.line_items.get(&input.line_item_url) {
        Some(line_item) => reply(StatusCode::OK, line_item),
        None => line_item_not_found(),
    }
}

fn list_line_items(platform: &Platform, input: ListLineItems) -> Response {
    let prefix = format!("{}/", input.line_items_container_url.trim_end_matches('/'));
    let field_matches = |field: &Option<String>, filter: &Option<String>| filter.is_none() || field == filter;

    let mut items: Vec<&LineItem> = platform
        .line_items
        .iter()
        .filter(|(id, _)| id.starts_with(&prefix))
        .map(|(_, item)| item)
        .filter(|item| {
            field_matches(&item.tag, &input.tag)
                && field_matches(&item.resource_id, &input.resource_identifier)
                && field_matches(&item.resource_link_id, &input.resource_link_identifier)
        })
        .collect();
    items.sort_by(|a, b| a.label.cmp(&b.label));

    let line_items = page(items.into_iter().cloned(), input.offset, input.limit);
    reply(StatusCode::OK, LineItemContainer { line_items })
}

fn update_line_item(platform: &mut Platform, input: UpdateLineItem) -> Response {
    let Some(url) = input.line_item_url.or_else(|| input.line_item.id.clone()) else {
        return error(StatusCode::BAD_REQUEST, "missing lineItemUrl");
    };
    match platform.line_items.get_mut(&url) {
        Some(existing) => {
            *existing = LineItem {
                id: Some(url),
                ..input.line_item
            };
            created()
        }
        None => line_item_not_found(),
    }
}

fn delete_line_item(platform: &mut Platform, input: LineItemRef) -> Response {
    match platform.line_items.remove(&input.line_item_url) {
        Some(_) => {
            platform.scores.remove(&input.line_item_url);
            created()
        }
        None => line_item_not_found(),
    }
}

fn publish_score(platform: &mut Platform, input: PublishScore) -> Response {
    if !platform.line_items.contains_key(&input.line_item_url) {
        return line_item_not_found();
    }
    let scores = platform.scores.entry(input.line_item_url).or_default();
    // Latest score per user wins.
    scores.retain(|s| s.user_id != input.score.user_id);
    scores.push(input.score);
    created()
}

fn list_results(platform: &Platform, input: ListResults) -> Response {
    let url = &input.line_item_url;
    let scores = platform
        .scores
        .get(url)
        .into_iter()
        .flatten()
        .filter(|score| input.user_identifier.as_ref().map_or(true, |user| &score.user_id == user));

    let results = page(scores, input.offset, input.limit)
        .into_iter()
        .map(|score| AgsResult {
            id: format!("{url}/results/{}", score.user_id),
            score_of: url.clone(),
            user_id: score.user_id.clone(),
            result_score: score.score_given,
            result_maximum: score.score_maximum,
            comment: score.comment.clone(),
        })
        .collect();

    reply(StatusCode::OK, ResultContainer { results })
}

// --- basic outcome ---

fn replace_result(platform: &mut Platform, input: ReplaceResult) -> Response {
    if !(0.0..=1.0).contains(&input.score) {
        return error(StatusCode::UNPROCESSABLE_ENTITY, "score must be within [0, 1]");
    }
    platform.outcomes.insert(input.lis_result_sourced_id, input.score);
    created()
}

fn read_result(platform: &Platform, input: OutcomeRef) -> Response {
    let score = platform.outcomes.get(&input.lis_result_sourced_id).copied();
    let response = OutcomeResponse {
        score,
        language: Some("en".to_string()),
        ..OutcomeResponse::new("readResult", score.is_some())
    };
    reply(StatusCode::OK, response)
}

fn delete_result(platform: &mut Platform, input: OutcomeRef) -> Response {
    platform.outcomes.remove(&input.lis_result_sourced_id);
    created()
}

fn send_basic_outcome(input: SendBasicOutcome) -> Response {
    if input.xml.is_empty() {
        return error(StatusCode::BAD_REQUEST, "missing xml");
    }
    reply(StatusCode::OK, OutcomeResponse::new("replaceResult", true))
}

// --- core, nrps, proctoring ---

fn core_request(input: CoreRequest) -> Response {
    let response = CoreResponse {
        status_code: 200,
        headers: HashMap::from([("Content-Type".to_string(), vec!["application/json".to_string()])]),
        body: json!({ "method": input.method, "uri": input.uri }).to_string(),
    };
    reply(StatusCode::OK, response)
}

/// Static roster, narrowed by role suffix and limit.
fn members(role: Option<&str>, limit: Option<usize>) -> Vec<Member> {
    let roster = [("learner-1", "Learner"), ("instructor-1", "Instructor")];
    let matching = roster
        .into_iter()
        .filter(|(_, member_role)| role.map_or(true, |wanted| member_role.ends_with(wanted)))
        .map(|(user_id, member_role)| Member {
            user_id: user_id.to_string(),
            roles: vec![format!("{MEMBERSHIP_ROLE_PREFIX}{member_role}")],
            status: "Active",
        });
    page(matching, None, limit)
}

fn membership(input: MembershipRequest) -> Response {
    let membership = Membership {
        members: members(input.role.as_deref(), input.limit),
        id: input.membership_service_url,
        context: MembershipContext {
            id: "context-1",
            title: "Mock course",
        },
    };
    reply(StatusCode::OK, membership)
}

/// Status the platform reports after applying `control`, if the action is known.
fn control_result(control: &Control) -> Option<ControlResult> {
    let status = match control.action.as_str() {
        "pause" => "paused",
        "resume" | "update" | "flag" => "running",
        "terminate" => "terminated",
        _ => return None,
    };
    Some(ControlResult {
        status,
        extra_time: control.extra_time,
    })
}

fn send_control(input: SendControl) -> Response {
    match control_result(&input.control) {
        Some(result) => reply(StatusCode::OK, result),
        None => error(StatusCode::BAD_REQUEST, "unknown action"),
    }
}
