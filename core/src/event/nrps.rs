//! Names and Role Provisioning Services events.

use serde::Serialize;

/// Optional narrowing of a membership listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetContextMembershipEvent {
    registration_id: String,
    membership_service_url: String,
    #[serde(flatten)]
    filter: MembershipFilter,
}

impl GetContextMembershipEvent {
    pub const TYPE: &'static str = "nrpsGetContextMembership";

    pub fn new(
        registration_id: impl Into<String>,
        membership_service_url: impl Into<String>,
        filter: MembershipFilter,
    ) -> Self {
        Self {
            registration_id: registration_id.into(),
            membership_service_url: membership_service_url.into(),
            filter,
        }
    }

    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    pub fn membership_service_url(&self) -> &str {
        &self.membership_service_url
    }

    pub fn filter(&self) -> &MembershipFilter {
        &self.filter
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResourceLinkMembershipEvent {
    registration_id: String,
    membership_service_url: String,
    resource_link_identifier: String,
    #[serde(flatten)]
    filter: MembershipFilter,
}

impl GetResourceLinkMembershipEvent {
    pub const TYPE: &'static str = "nrpsGetResourceLinkMembership";

    pub fn new(
        registration_id: impl Into<String>,
        membership_service_url: impl Into<String>,
        resource_link_identifier: impl Into<String>,
        filter: MembershipFilter,
    ) -> Self {
        Self {
            registration_id: registration_id.into(),
            membership_service_url: membership_service_url.into(),
            resource_link_identifier: resource_link_identifier.into(),
            filter,
        }
    }

    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    pub fn membership_service_url(&self) -> &str {
        &self.membership_service_url
    }

    pub fn resource_link_identifier(&self) -> &str {
        &self.resource_link_identifier
    }

    pub fn filter(&self) -> &MembershipFilter {
        &self.filter
    }
}
