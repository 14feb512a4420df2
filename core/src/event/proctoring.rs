//! LTI Proctoring Services events.

use serde::Serialize;

use crate::types::AcsControl;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendControlEvent {
    registration_id: String,
    control: AcsControl,
    acs_url: String,
}

impl SendControlEvent {
    pub const TYPE: &'static str = "proctoringSendControl";

    pub fn new(registration_id: impl Into<String>, control: AcsControl, acs_url: impl Into<String>) -> Self {
        Self {
            registration_id: registration_id.into(),
            control,
            acs_url: acs_url.into(),
        }
    }

    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    pub fn control(&self) -> &AcsControl {
        &self.control
    }

    pub fn acs_url(&self) -> &str {
        &self.acs_url
    }
}
