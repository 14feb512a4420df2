//! LTI domain models carried by events and returned by the operation clients.
//!
//! # Design
//! These mirror the JSON shapes of the LTI 1.3 services (AGS, NRPS, Basic
//! Outcome, Proctoring) closely enough to round-trip through the gateway. They
//! are defined independently from the mock-server crate; the integration
//! tests catch schema drift between the two.

pub mod ags;
pub mod basic_outcome;
pub mod nrps;
pub mod proctoring;
pub mod request;

pub use self::ags::{
    ActivityProgress, AgsResult, GradingProgress, LineItem, LineItemContainer, ResultContainer, Score,
};
pub use self::basic_outcome::BasicOutcomeResponse;
pub use self::nrps::{Member, Membership, MembershipContext};
pub use self::proctoring::{AcsAction, AcsControl, AcsControlResult, AcsResourceLink, AcsStatus};
pub use self::request::CoreResponse;
