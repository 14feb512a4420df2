//! LTI Proctoring Services (Assessment Control Service) models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcsAction {
    Pause,
    Resume,
    Terminate,
    Update,
    Flag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcsResourceLink {
    pub id: String,
}

/// A control request sent to the platform's assessment control service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcsControl {
    pub resource_link: AcsResourceLink,
    pub user_id: String,
    pub action: AcsAction,
    /// RFC 3339 timestamp.
    pub incident_time: String,
    pub attempt_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident_severity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_msg: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcsStatus {
    None,
    Running,
    Paused,
    Terminated,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcsControlResult {
    pub status: AcsStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_time: Option<u32>,
}
