//! Domain serializers: raw response bodies in, models out.
//!
//! Operation clients receive one `DomainSerializer` per model they return and
//! hand it the response body unchanged. `JsonSerializer` covers the JSON
//! bodies the gateway relays; hosts that get XML (Basic Outcome) or another
//! encoding plug in their own implementation.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::DeserializeError;

pub trait DomainSerializer<T>: Send + Sync {
    fn deserialize(&self, raw: &str) -> Result<T, DeserializeError>;
}

/// Reads any serde model from a JSON body.
pub struct JsonSerializer<T> {
    _model: PhantomData<fn() -> T>,
}

impl<T> JsonSerializer<T> {
    pub fn new() -> Self {
        Self { _model: PhantomData }
    }
}

impl<T> Default for JsonSerializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonSerializer<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for JsonSerializer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSerializer").field("model", &model_name::<T>()).finish()
    }
}

impl<T: DeserializeOwned> DomainSerializer<T> for JsonSerializer<T> {
    fn deserialize(&self, raw: &str) -> Result<T, DeserializeError> {
        serde_json::from_str(raw)
            .map_err(|e| DeserializeError::new(model_name::<T>(), e.to_string()).with_source(e))
    }
}

/// Last path segment of the model's type name, e.g. `Membership`.
fn model_name<T>() -> &'static str {
    let full = type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
