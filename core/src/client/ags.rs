//! Assignment and Grade Services client.

use std::sync::Arc;

use crate::client::Dispatcher;
use crate::error::{ClientError, ClientFamily};
use crate::event::{
    CreateLineItemEvent, DeleteLineItemEvent, GetLineItemEvent, LineItemsFilter, ListLineItemsEvent,
    ListResultsEvent, PublishScoreEvent, ResultsFilter, UpdateLineItemEvent,
};
use crate::gateway::LtiGateway;
use crate::serializer::DomainSerializer;
use crate::types::{LineItem, LineItemContainer, ResultContainer, Score};

/// Line items, scores and results of a platform gradebook.
#[derive(Clone)]
pub struct AgsClient {
    dispatcher: Dispatcher,
    line_item_serializer: Arc<dyn DomainSerializer<LineItem>>,
    line_item_container_serializer: Arc<dyn DomainSerializer<LineItemContainer>>,
    result_container_serializer: Arc<dyn DomainSerializer<ResultContainer>>,
}

impl AgsClient {
    pub fn new(
        gateway: Arc<dyn LtiGateway>,
        line_item_serializer: Arc<dyn DomainSerializer<LineItem>>,
        line_item_container_serializer: Arc<dyn DomainSerializer<LineItemContainer>>,
        result_container_serializer: Arc<dyn DomainSerializer<ResultContainer>>,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(gateway, ClientFamily::Ags),
            line_item_serializer,
            line_item_container_serializer,
            result_container_serializer,
        }
    }

    pub fn create_line_item(
        &self,
        registration_id: &str,
        line_item: LineItem,
        line_items_container_url: &str,
    ) -> Result<(), ClientError> {
        let event = CreateLineItemEvent::new(registration_id, line_item, line_items_container_url);
        self.dispatcher.trigger(event, 201)?;
        Ok(())
    }

    pub fn delete_line_item(&self, registration_id: &str, line_item_url: &str) -> Result<(), ClientError> {
        let event = DeleteLineItemEvent::new(registration_id, line_item_url);
        self.dispatcher.trigger(event, 201)?;
        Ok(())
    }

    pub fn get_line_item(
        &self,
        registration_id: &str,
        line_item_url: &str,
        scopes: Vec<String>,
    ) -> Result<LineItem, ClientError> {
        let event = GetLineItemEvent::new(registration_id, line_item_url, scopes);
        self.dispatcher.fetch(event, 200, self.line_item_serializer.as_ref())
    }

    pub fn list_line_items(
        &self,
        registration_id: &str,
        line_items_container_url: &str,
        filter: LineItemsFilter,
    ) -> Result<LineItemContainer, ClientError> {
        let event = ListLineItemsEvent::new(registration_id, line_items_container_url, filter);
        self.dispatcher
            .fetch(event, 200, self.line_item_container_serializer.as_ref())
    }

    pub fn list_results(
        &self,
        registration_id: &str,
        line_item_url: &str,
        filter: ResultsFilter,
    ) -> Result<ResultContainer, ClientError> {
        let event = ListResultsEvent::new(registration_id, line_item_url, filter);
        self.dispatcher
            .fetch(event, 200, self.result_container_serializer.as_ref())
    }

    pub fn publish_score(&self, registration_id: &str, score: Score, line_item_url: &str) -> Result<(), ClientError> {
        let event = PublishScoreEvent::new(registration_id, score, line_item_url);
        self.dispatcher.trigger(event, 201)?;
        Ok(())
    }

    /// Without `line_item_url` the platform updates the line item named by
    /// `line_item.id`.
    pub fn update_line_item(
        &self,
        registration_id: &str,
        line_item: LineItem,
        line_item_url: Option<&str>,
    ) -> Result<(), ClientError> {
        let event = UpdateLineItemEvent::new(registration_id, line_item, line_item_url.map(str::to_string));
        self.dispatcher.trigger(event, 201)?;
        Ok(())
    }
}
