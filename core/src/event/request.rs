//! Core service events.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::http::HttpMethod;

/// Asks the gateway to perform an arbitrary authenticated request against the
/// platform on behalf of a registration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEvent {
    registration_id: String,
    method: String,
    uri: String,
    /// Transport options (headers, query, body...) forwarded as-is.
    options: Map<String, Value>,
    scopes: Vec<String>,
}

impl RequestEvent {
    pub const TYPE: &'static str = "coreRequest";

    pub fn new(
        registration_id: impl Into<String>,
        method: HttpMethod,
        uri: impl Into<String>,
        options: Map<String, Value>,
        scopes: Vec<String>,
    ) -> Self {
        Self {
            registration_id: registration_id.into(),
            method: method.as_str().to_string(),
            uri: uri.into(),
            options,
            scopes,
        }
    }

    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }
}
