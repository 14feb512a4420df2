//! Basic Outcome events.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResultEvent {
    registration_id: String,
    lis_outcome_service_url: String,
    lis_result_sourced_id: String,
}

impl DeleteResultEvent {
    pub const TYPE: &'static str = "basicOutcomeDeleteResult";

    pub fn new(
        registration_id: impl Into<String>,
        lis_outcome_service_url: impl Into<String>,
        lis_result_sourced_id: impl Into<String>,
    ) -> Self {
        Self {
            registration_id: registration_id.into(),
            lis_outcome_service_url: lis_outcome_service_url.into(),
            lis_result_sourced_id: lis_result_sourced_id.into(),
        }
    }

    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    pub fn lis_outcome_service_url(&self) -> &str {
        &self.lis_outcome_service_url
    }

    pub fn lis_result_sourced_id(&self) -> &str {
        &self.lis_result_sourced_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadResultEvent {
    registration_id: String,
    lis_outcome_service_url: String,
    lis_result_sourced_id: String,
}

impl ReadResultEvent {
    pub const TYPE: &'static str = "basicOutcomeReadResult";

    pub fn new(
        registration_id: impl Into<String>,
        lis_outcome_service_url: impl Into<String>,
        lis_result_sourced_id: impl Into<String>,
    ) -> Self {
        Self {
            registration_id: registration_id.into(),
            lis_outcome_service_url: lis_outcome_service_url.into(),
            lis_result_sourced_id: lis_result_sourced_id.into(),
        }
    }

    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    pub fn lis_outcome_service_url(&self) -> &str {
        &self.lis_outcome_service_url
    }

    pub fn lis_result_sourced_id(&self) -> &str {
        &self.lis_result_sourced_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceResultEvent {
    registration_id: String,
    lis_outcome_service_url: String,
    lis_result_sourced_id: String,
    score: f64,
    language: String,
}

impl ReplaceResultEvent {
    pub const TYPE: &'static str = "basicOutcomeReplaceResult";
    pub const DEFAULT_LANGUAGE: &'static str = "en";

    pub fn new(
        registration_id: impl Into<String>,
        lis_outcome_service_url: impl Into<String>,
        lis_result_sourced_id: impl Into<String>,
        score: f64,
        language: impl Into<String>,
    ) -> Self {
        Self {
            registration_id: registration_id.into(),
            lis_outcome_service_url: lis_outcome_service_url.into(),
            lis_result_sourced_id: lis_result_sourced_id.into(),
            score,
            language: language.into(),
        }
    }

    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    pub fn lis_outcome_service_url(&self) -> &str {
        &self.lis_outcome_service_url
    }

    pub fn lis_result_sourced_id(&self) -> &str {
        &self.lis_result_sourced_id
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

/// Carries a caller-built Basic Outcome XML document verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendBasicOutcomeEvent {
    registration_id: String,
    lis_outcome_service_url: String,
    xml: String,
}

impl SendBasicOutcomeEvent {
    pub const TYPE: &'static str = "basicOutcomeSendBasicOutcome";

    pub fn new(
        registration_id: impl Into<String>,
        lis_outcome_service_url: impl Into<String>,
        xml: impl Into<String>,
    ) -> Self {
        Self {
            registration_id: registration_id.into(),
            lis_outcome_service_url: lis_outcome_service_url.into(),
            xml: xml.into(),
        }
    }

    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    pub fn lis_outcome_service_url(&self) -> &str {
        &self.lis_outcome_service_url
    }

    pub fn xml(&self) -> &str {
        &self.xml
    }
}
