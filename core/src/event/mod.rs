//! Events: one tagged value per remote operation.
//!
//! # Design
//! Every operation is described by its own event struct, built once by an
//! operation client and dropped after the gateway sent it. `LtiEvent` gathers
//! them so the gateway has a single type to serialize. On the wire an event is
//! a flat JSON object whose `eventType` member carries the operation tag,
//! followed by the event's own camelCase fields.

pub mod ags;
pub mod basic_outcome;
pub mod nrps;
pub mod proctoring;
pub mod request;

use serde::Serialize;

pub use self::ags::{
    CreateLineItemEvent, DeleteLineItemEvent, GetLineItemEvent, LineItemsFilter, ListLineItemsEvent,
    ListResultsEvent, PublishScoreEvent, ResultsFilter, UpdateLineItemEvent,
};
pub use self::basic_outcome::{DeleteResultEvent, ReadResultEvent, ReplaceResultEvent, SendBasicOutcomeEvent};
pub use self::nrps::{GetContextMembershipEvent, GetResourceLinkMembershipEvent, MembershipFilter};
pub use self::proctoring::SendControlEvent;
pub use self::request::RequestEvent;

macro_rules! lti_events {
    ($($variant:ident($event:ident) => $tag:literal,)+) => {
        /// Any event the gateway accepts.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(tag = "eventType")]
        pub enum LtiEvent {
            $(
                #[serde(rename = $tag)]
                $variant($event),
            )+
        }

        impl LtiEvent {
            /// The operation tag, as written to the `eventType` member.
            pub fn event_type(&self) -> &'static str {
                match self {
                    $(LtiEvent::$variant(_) => $event::TYPE,)+
                }
            }

            pub fn registration_id(&self) -> &str {
                match self {
                    $(LtiEvent::$variant(event) => event.registration_id(),)+
                }
            }
        }

        $(
            impl From<$event> for LtiEvent {
                fn from(event: $event) -> Self {
                    LtiEvent::$variant(event)
                }
            }
        )+
    };
}

lti_events! {
    AgsCreateLineItem(CreateLineItemEvent) => "agsCreateLineItem",
    AgsDeleteLineItem(DeleteLineItemEvent) => "agsDeleteLineItem",
    AgsGetLineItem(GetLineItemEvent) => "agsGetLineItem",
    AgsListLineItems(ListLineItemsEvent) => "agsListLineItems",
    AgsListResults(ListResultsEvent) => "agsListResults",
    AgsPublishScore(PublishScoreEvent) => "agsPublishScore",
    AgsUpdateLineItem(UpdateLineItemEvent) => "agsUpdateLineItem",
    BasicOutcomeDeleteResult(DeleteResultEvent) => "basicOutcomeDeleteResult",
    BasicOutcomeReadResult(ReadResultEvent) => "basicOutcomeReadResult",
    BasicOutcomeReplaceResult(ReplaceResultEvent) => "basicOutcomeReplaceResult",
    BasicOutcomeSendBasicOutcome(SendBasicOutcomeEvent) => "basicOutcomeSendBasicOutcome",
    CoreRequest(RequestEvent) => "coreRequest",
    NrpsGetContextMembership(GetContextMembershipEvent) => "nrpsGetContextMembership",
    NrpsGetResourceLinkMembership(GetResourceLinkMembershipEvent) => "nrpsGetResourceLinkMembership",
    ProctoringSendControl(SendControlEvent) => "proctoringSendControl",
}

/// Turns an event into the request body sent to the gateway.
pub trait EventSerializer: Send + Sync {
    fn serialize(&self, event: &LtiEvent) -> Result<String, serde_json::Error>;
}

/// Serializes events as compact JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEventSerializer;

impl EventSerializer for JsonEventSerializer {
    fn serialize(&self, event: &LtiEvent) -> Result<String, serde_json::Error> {
        serde_json::to_string(event)
    }
}
