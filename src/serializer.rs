//! Serializer Module
//!
//! The codec seam between typed values and the text stored by a backend.
//! Typed values are first lowered to a `serde_json::Value`, then handed to
//! a pair of injected functions that produce and parse the stored text.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{BoxError, CacheError, Result};

/// Encodes a structural value into its stored text form.
pub type SerializeFn = Arc<dyn Fn(&Value) -> std::result::Result<String, BoxError> + Send + Sync>;

/// Decodes stored text back into a structural value.
pub type UnserializeFn = Arc<dyn Fn(&str) -> std::result::Result<Value, BoxError> + Send + Sync>;

// == Serializer ==
/// A pair of codec functions used by a backend to store values as text.
///
/// The two functions must be inverses for every value the application stores.
#[derive(Clone)]
pub struct Serializer {
    serialize: SerializeFn,
    unserialize: UnserializeFn,
}

impl Serializer {
    // == Constructor ==
    /// Creates a serializer from a custom codec pair.
    pub fn new<S, U>(serialize: S, unserialize: U) -> Self
    where
        S: Fn(&Value) -> std::result::Result<String, BoxError> + Send + Sync + 'static,
        U: Fn(&str) -> std::result::Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self {
            serialize: Arc::new(serialize),
            unserialize: Arc::new(unserialize),
        }
    }

    /// The default codec: compact JSON text.
    pub fn json() -> Self {
        Self::new(
            |value| Ok(serde_json::to_string(value)?),
            |text| Ok(serde_json::from_str(text)?),
        )
    }

    // == Serialize ==
    /// Converts a typed value into its stored text form.
    pub fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let value = serde_json::to_value(value)?;
        (self.serialize)(&value).map_err(CacheError::Serialization)
    }

    // == Unserialize ==
    /// Converts stored text back into a typed value.
    pub fn unserialize<T: DeserializeOwned>(&self, text: &str) -> Result<T> {
        let value = (self.unserialize)(text).map_err(CacheError::Serialization)?;
        Ok(serde_json::from_value(value)?)
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::json()
    }
}

impl fmt::Debug for Serializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Serializer").finish_non_exhaustive()
    }
}
