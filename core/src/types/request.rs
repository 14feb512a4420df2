//! Models of the generic `coreRequest` passthrough.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The platform response relayed back by a `coreRequest` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreResponse {
    pub status_code: u16,
    #[serde(default)]
    pub headers: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub body: String,
}
