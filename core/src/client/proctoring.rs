//! LTI Proctoring Services client.

use std::sync::Arc;

use crate::client::Dispatcher;
use crate::error::{ClientError, ClientFamily};
use crate::event::SendControlEvent;
use crate::gateway::LtiGateway;
use crate::serializer::DomainSerializer;
use crate::types::{AcsControl, AcsControlResult};

#[derive(Clone)]
pub struct ProctoringClient {
    dispatcher: Dispatcher,
    control_result_serializer: Arc<dyn DomainSerializer<AcsControlResult>>,
}

impl ProctoringClient {
    pub fn new(
        gateway: Arc<dyn LtiGateway>,
        control_result_serializer: Arc<dyn DomainSerializer<AcsControlResult>>,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(gateway, ClientFamily::Proctoring),
            control_result_serializer,
        }
    }

    /// Sends an assessment control to the platform and returns its verdict.
    pub fn send_control(
        &self,
        registration_id: &str,
        control: AcsControl,
        acs_url: &str,
    ) -> Result<AcsControlResult, ClientError> {
        let event = SendControlEvent::new(registration_id, control, acs_url);
        self.dispatcher.fetch(event, 200, self.control_result_serializer.as_ref())
    }
}
