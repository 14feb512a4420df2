//! Names and Role Provisioning Services client.

use std::sync::Arc;

use crate::client::Dispatcher;
use crate::error::{ClientError, ClientFamily};
use crate::event::{GetContextMembershipEvent, GetResourceLinkMembershipEvent, MembershipFilter};
use crate::gateway::LtiGateway;
use crate::serializer::DomainSerializer;
use crate::types::Membership;

#[derive(Clone)]
pub struct NrpsClient {
    dispatcher: Dispatcher,
    membership_serializer: Arc<dyn DomainSerializer<Membership>>,
}

impl NrpsClient {
    pub fn new(gateway: Arc<dyn LtiGateway>, membership_serializer: Arc<dyn DomainSerializer<Membership>>) -> Self {
        Self {
            dispatcher: Dispatcher::new(gateway, ClientFamily::Nrps),
            membership_serializer,
        }
    }

    pub fn get_context_membership(
        &self,
        registration_id: &str,
        membership_service_url: &str,
        filter: MembershipFilter,
    ) -> Result<Membership, ClientError> {
        let event = GetContextMembershipEvent::new(registration_id, membership_service_url, filter);
        self.dispatcher.fetch(event, 200, self.membership_serializer.as_ref())
    }

    /// Members of the context restricted to those who can access the given
    /// resource link.
    pub fn get_resource_link_membership_for_payload(
        &self,
        registration_id: &str,
        membership_service_url: &str,
        resource_link_identifier: &str,
        filter: MembershipFilter,
    ) -> Result<Membership, ClientError> {
        let event = GetResourceLinkMembershipEvent::new(
            registration_id,
            membership_service_url,
            resource_link_identifier,
            filter,
        );
        self.dispatcher.fetch(event, 200, self.membership_serializer.as_ref())
    }
}
