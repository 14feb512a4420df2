//! Operation clients, one per LTI service area.
//!
//! # Design
//! Every method follows the same template: build the event, send it through
//! the shared `LtiGateway`, compare the status code with the one the gateway
//! documents for that operation, then (for reads) hand the body to the
//! injected `DomainSerializer`. `Dispatcher` holds that template once; the
//! per-area clients only pick the event, expected status and serializer.
//! Nothing is retried.

pub mod ags;
pub mod basic_outcome;
pub mod nrps;
pub mod proctoring;
pub mod request;

use std::sync::Arc;

use tracing::warn;

use crate::error::{ClientError, ClientFamily};
use crate::event::LtiEvent;
use crate::gateway::LtiGateway;
use crate::http::HttpResponse;
use crate::serializer::DomainSerializer;

pub use self::ags::AgsClient;
pub use self::basic_outcome::BasicOutcomeClient;
pub use self::nrps::NrpsClient;
pub use self::proctoring::ProctoringClient;
pub use self::request::CoreClient;

#[derive(Clone)]
pub(crate) struct Dispatcher {
    gateway: Arc<dyn LtiGateway>,
    family: ClientFamily,
}

impl Dispatcher {
    pub(crate) fn new(gateway: Arc<dyn LtiGateway>, family: ClientFamily) -> Self {
        Self { gateway, family }
    }

    /// Send the event and insist on `expected`.
    pub(crate) fn trigger(&self, event: impl Into<LtiEvent>, expected: u16) -> Result<HttpResponse, ClientError> {
        let event = event.into();
        let event_type = event.event_type();

        let response = self
            .gateway
            .send(&event)
            .map_err(|e| ClientError::gateway(self.family, event_type, e))?;

        if response.status != expected {
            warn!(
                family = %self.family,
                event_type,
                expected,
                actual = response.status,
                "unexpected lti gateway status"
            );
            return Err(ClientError::unexpected_status(
                self.family,
                event_type,
                expected,
                response.status,
            ));
        }

        Ok(response)
    }

    /// `trigger`, then deserialize the body.
    pub(crate) fn fetch<T>(
        &self,
        event: impl Into<LtiEvent>,
        expected: u16,
        serializer: &dyn DomainSerializer<T>,
    ) -> Result<T, ClientError> {
        let body = self.trigger(event, expected)?.into_body();
        Ok(serializer.deserialize(&body)?)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").field("family", &self.family).finish_non_exhaustive()
    }
}
