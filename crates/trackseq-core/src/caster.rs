//! Element casting contract
//!
//! A caster turns a raw input into a typed element, or rejects it. The
//! sequence only depends on the `Caster` trait; concrete validation rules
//! live with the schema that registers the caster.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::document::Document;
use crate::errors::ValidationError;

/// Validates and converts raw input into an element of type `T`
///
/// Implementations must be deterministic and must not touch the sequence
/// that calls them. The owning document, when still alive, is passed as
/// context.
pub trait Caster<T>: Send + Sync {
    /// Cast one raw value
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` when the value cannot become a `T`.
    fn cast(&self, raw: &Value, owner: Option<&dyn Document>) -> Result<T, ValidationError>;
}

/// Caster backed by a closure
pub struct FnCaster<F> {
    f: F,
}

impl<T, F> Caster<T> for FnCaster<F>
where
    F: Fn(&Value, Option<&dyn Document>) -> Result<T, ValidationError> + Send + Sync,
{
    fn cast(&self, raw: &Value, owner: Option<&dyn Document>) -> Result<T, ValidationError> {
        (self.f)(raw, owner)
    }
}

/// Build a shareable caster from a closure
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use trackseq_core::caster::from_fn;
/// use trackseq_core::{Caster, ValidationError};
///
/// let upper = from_fn(|raw, _owner| {
///     raw.as_str()
///         .map(str::to_uppercase)
///         .ok_or_else(|| ValidationError::new(raw.clone(), "expected a string"))
/// });
/// assert_eq!(upper.cast(&json!("tag"), None).unwrap(), "TAG");
/// ```
pub fn from_fn<T, F>(f: F) -> Arc<dyn Caster<T>>
where
    T: 'static,
    F: Fn(&Value, Option<&dyn Document>) -> Result<T, ValidationError> + Send + Sync + 'static,
{
    Arc::new(FnCaster { f })
}

/// Caster that deserializes the raw value with serde
///
/// Anything `T: DeserializeOwned` accepts is a valid element; the serde
/// message becomes the rejection reason.
pub struct JsonCaster<T> {
    _element: PhantomData<fn() -> T>,
}

impl<T> JsonCaster<T> {
    pub fn new() -> Self {
        Self {
            _element: PhantomData,
        }
    }
}

impl<T> Default for JsonCaster<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> Caster<T> for JsonCaster<T> {
    fn cast(&self, raw: &Value, _owner: Option<&dyn Document>) -> Result<T, ValidationError> {
        T::deserialize(raw).map_err(|e| ValidationError::new(raw.clone(), e.to_string()))
    }
}

/// Shareable `JsonCaster` for element type `T`
pub fn json<T: DeserializeOwned + 'static>() -> Arc<dyn Caster<T>> {
    Arc::new(JsonCaster::<T>::new())
}
