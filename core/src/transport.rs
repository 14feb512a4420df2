//! Blocking `Transport` backed by ureq.

use std::time::Duration;

use serde::Deserialize;
use tracing::trace;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

/// Settings for [`UreqTransport`].
///
/// The defaults leave ureq's own behaviour untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Upper bound for a whole request, connect included.
    #[serde(with = "optional_secs")]
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

/// Executes `HttpRequest` values with a ureq agent.
///
/// Status codes are never turned into errors; ureq's `http_status_as_error`
/// is disabled so 4xx/5xx answers come back as data.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    user_agent: Option<String>,
}

impl UreqTransport {
    pub fn new(config: TransportConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();
        Self {
            agent,
            user_agent: config.user_agent,
        }
    }

    /// Wrap a caller-built agent. The agent must be configured with
    /// `http_status_as_error(false)`.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self {
            agent,
            user_agent: None,
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(TransportConfig::default())
    }
}

impl Transport for UreqTransport {
    fn request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        trace!(method = request.method.as_str(), url = %request.url, "executing request");

        let mut headers = request.headers;
        if let Some(agent) = &self.user_agent {
            if !headers.iter().any(|(k, _)| k.eq_ignore_ascii_case("user-agent")) {
                headers.push(("User-Agent".to_string(), agent.clone()));
            }
        }

        let url = request.url.as_str();
        let result = match (request.method, request.body) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(url), &headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(url), &headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(url), &headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(url), &headers).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(url), &headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => with_headers(self.agent.put(url), &headers).send_empty(),
            (HttpMethod::Patch, Some(body)) => {
                with_headers(self.agent.patch(url), &headers).send(body.as_bytes())
            }
            (HttpMethod::Patch, None) => with_headers(self.agent.patch(url), &headers).send_empty(),
        };

        let mut response = result.map_err(transport_error)?;
        let status = response.status().as_u16();
        let response_headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string().map_err(transport_error)?;

        Ok(HttpResponse {
            status,
            headers: response_headers,
            body,
        })
    }
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn transport_error(err: ureq::Error) -> TransportError {
    let code = match &err {
        ureq::Error::Io(io) => io.raw_os_error().map(i64::from).unwrap_or(0),
        ureq::Error::StatusCode(status) => i64::from(*status),
        _ => 0,
    };
    TransportError::new(err.to_string()).with_code(code).with_source(err)
}

mod optional_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
    }
}
