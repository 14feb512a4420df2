//! Synchronous client for a remote LTI gateway.
//!
//! # Overview
//! Each operation client method (create a line item, publish a score, fetch a
//! membership, send a proctoring control...) builds a tagged event, posts it to
//! `<base_url>/api/v1/lti/events` through an `LtiGateway`, checks the status
//! code the gateway documents for that operation and, for reads, turns the
//! body into a domain model.
//!
//! # Design
//! - Every collaborator is injected: the HTTP `Transport`, the
//!   `EventSerializer` and one `DomainSerializer` per returned model. Stock
//!   implementations (`UreqTransport`, `JsonEventSerializer`,
//!   `JsonSerializer`) are provided but never picked implicitly.
//! - Clients and gateway hold no per-call state; one `Arc<dyn LtiGateway>` can
//!   back every client.
//! - One blocking round trip per call, no retries.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use lti_client::{AgsClient, HttpGateway, JsonEventSerializer, JsonSerializer, LineItem, UreqTransport};
//!
//! let gateway = HttpGateway::new("http://gateway.local", UreqTransport::default(), JsonEventSerializer)?;
//! let ags = AgsClient::new(
//!     Arc::new(gateway),
//!     Arc::new(JsonSerializer::new()),
//!     Arc::new(JsonSerializer::new()),
//!     Arc::new(JsonSerializer::new()),
//! );
//! ags.create_line_item("reg-1", LineItem::new(10.0, "Quiz 1"), "https://platform.example/lineitems")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod error;
pub mod event;
pub mod gateway;
pub mod http;
pub mod serializer;
pub mod transport;
pub mod types;

pub use client::{AgsClient, BasicOutcomeClient, CoreClient, NrpsClient, ProctoringClient};
pub use error::{ClientError, ClientFamily, ConfigError, DeserializeError, GatewayError, TransportError};
pub use event::{EventSerializer, JsonEventSerializer, LineItemsFilter, LtiEvent, MembershipFilter, ResultsFilter};
pub use gateway::{GatewayConfig, HttpGateway, LtiGateway, EVENTS_PATH};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use serializer::{DomainSerializer, JsonSerializer};
pub use transport::{TransportConfig, UreqTransport};
pub use types::{
    AcsAction, AcsControl, AcsControlResult, AcsResourceLink, AcsStatus, ActivityProgress, AgsResult,
    BasicOutcomeResponse, CoreResponse, GradingProgress, LineItem, LineItemContainer, Member, Membership,
    MembershipContext, ResultContainer, Score,
};
