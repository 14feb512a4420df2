//! Assignment and Grade Services events.

use serde::Serialize;

use crate::types::{LineItem, Score};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLineItemEvent {
    registration_id: String,
    line_item: LineItem,
    line_items_container_url: String,
}

impl CreateLineItemEvent {
    pub const TYPE: &'static str = "agsCreateLineItem";

    pub fn new(
        registration_id: impl Into<String>,
        line_item: LineItem,
        line_items_container_url: impl Into<String>,
    ) -> Self {
        Self {
            registration_id: registration_id.into(),
            line_item,
            line_items_container_url: line_items_container_url.into(),
        }
    }

    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    pub fn line_item(&self) -> &LineItem {
        &self.line_item
    }

    pub fn line_items_container_url(&self) -> &str {
        &self.line_items_container_url
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLineItemEvent {
    registration_id: String,
    line_item_url: String,
}

impl DeleteLineItemEvent {
    pub const TYPE: &'static str = "agsDeleteLineItem";

    pub fn new(registration_id: impl Into<String>, line_item_url: impl Into<String>) -> Self {
        Self {
            registration_id: registration_id.into(),
            line_item_url: line_item_url.into(),
        }
    }

    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    pub fn line_item_url(&self) -> &str {
        &self.line_item_url
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLineItemEvent {
    registration_id: String,
    line_item_url: String,
    scopes: Vec<String>,
}

impl GetLineItemEvent {
    pub const TYPE: &'static str = "agsGetLineItem";

    pub fn new(registration_id: impl Into<String>, line_item_url: impl Into<String>, scopes: Vec<String>) -> Self {
        Self {
            registration_id: registration_id.into(),
            line_item_url: line_item_url.into(),
            scopes,
        }
    }

    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    pub fn line_item_url(&self) -> &str {
        &self.line_item_url
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }
}

/// Optional narrowing of a line item listing. All fields are passed through
/// to the platform untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemsFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_link_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLineItemsEvent {
    registration_id: String,
    line_items_container_url: String,
    #[serde(flatten)]
    filter: LineItemsFilter,
}

impl ListLineItemsEvent {
    pub const TYPE: &'static str = "agsListLineItems";

    pub fn new(
        registration_id: impl Into<String>,
        line_items_container_url: impl Into<String>,
        filter: LineItemsFilter,
    ) -> Self {
        Self {
            registration_id: registration_id.into(),
            line_items_container_url: line_items_container_url.into(),
            filter,
        }
    }

    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    pub fn line_items_container_url(&self) -> &str {
        &self.line_items_container_url
    }

    pub fn filter(&self) -> &LineItemsFilter {
        &self.filter
    }
}

/// Optional narrowing of a result listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResultsEvent {
    registration_id: String,
    line_item_url: String,
    #[serde(flatten)]
    filter: ResultsFilter,
}

impl ListResultsEvent {
    pub const TYPE: &'static str = "agsListResults";

    pub fn new(registration_id: impl Into<String>, line_item_url: impl Into<String>, filter: ResultsFilter) -> Self {
        Self {
            registration_id: registration_id.into(),
            line_item_url: line_item_url.into(),
            filter,
        }
    }

    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    pub fn line_item_url(&self) -> &str {
        &self.line_item_url
    }

    pub fn filter(&self) -> &ResultsFilter {
        &self.filter
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishScoreEvent {
    registration_id: String,
    score: Score,
    line_item_url: String,
}

impl PublishScoreEvent {
    pub const TYPE: &'static str = "agsPublishScore";

    pub fn new(registration_id: impl Into<String>, score: Score, line_item_url: impl Into<String>) -> Self {
        Self {
            registration_id: registration_id.into(),
            score,
            line_item_url: line_item_url.into(),
        }
    }

    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn line_item_url(&self) -> &str {
        &self.line_item_url
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLineItemEvent {
    registration_id: String,
    line_item: LineItem,
    /// When absent the platform falls back to the line item's own id.
    #[serde(skip_serializing_if = "Option::is_none")]
    line_item_url: Option<String>,
}

impl UpdateLineItemEvent {
    pub const TYPE: &'static str = "agsUpdateLineItem";

    pub fn new(registration_id: impl Into<String>, line_item: LineItem, line_item_url: Option<String>) -> Self {
        Self {
            registration_id: registration_id.into(),
            line_item,
            line_item_url,
        }
    }

    pub fn registration_id(&self) -> &str {
        &self.registration_id
    }

    pub fn line_item(&self) -> &LineItem {
        &self.line_item
    }

    pub fn line_item_url(&self) -> Option<&str> {
        self.line_item_url.as_deref()
    }
}
