//! JSON bridge.
//!
//! Two ways to turn JSON back into something with behaviour:
//!
//! - [`from_json`] deserializes into a concrete type, whose impls are the
//!   behaviour and whose fields are the data.
//! - [`from_json_with`] keeps the parsed object as an open record of own
//!   fields and pairs it with a prototype value that carries the behaviour.
//!   The prototype's methods are reachable through `Deref`. Methods that
//!   need the data are called with [`Prototyped::invoke`].
//!
//! Parse failures are returned as the underlying [`serde_json::Error`].

use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Serialize `value` as compact JSON.
///
/// Struct fields appear in declaration order and maps in their iteration
/// order.
///
/// # Errors
///
/// Returns an error if `value`'s `Serialize` impl fails, e.g. a map with
/// non-string keys.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Deserialize `text` into `T`.
///
/// # Errors
///
/// Returns an error if `text` is not valid JSON or does not match `T`.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(text)
}

/// Parse `text` as a JSON object and pair it with `prototype`.
///
/// The own fields are exactly the object's keys, assigned as parsed; nothing
/// is copied from the prototype.
///
/// # Errors
///
/// Returns an error if `text` is not valid JSON or is not an object.
pub fn from_json_with<P>(prototype: P, text: &str) -> Result<Prototyped<P>, serde_json::Error> {
    let fields: Map<String, Value> = serde_json::from_str(text)?;
    Ok(Prototyped::new(prototype, fields))
}

/// A behaviour object composed with a record of own fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototyped<P> {
    prototype: P,
    fields: Map<String, Value>,
}

impl<P> Prototyped<P> {
    /// Compose `prototype` with `fields`.
    #[must_use]
    pub const fn new(prototype: P, fields: Map<String, Value>) -> Self {
        Self { prototype, fields }
    }

    /// The behaviour half.
    #[must_use]
    pub const fn prototype(&self) -> &P {
        &self.prototype
    }

    /// The own fields, in parse order.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// One own field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Assign an own field, returning the previous value.
    pub fn set_field(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(name.into(), value)
    }

    /// Read the own fields as a typed record.
    ///
    /// # Errors
    ///
    /// Returns an error if the fields do not match `T`.
    pub fn typed<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.fields.clone()))
    }

    /// Call a prototype method with this record's own fields.
    ///
    /// `Deref` only reaches the prototype, so methods that need the parsed
    /// data take them as `&Map<String, Value>`:
    ///
    /// ```
    /// use quill_exercises::from_json_with;
    /// use serde_json::{Map, Value};
    ///
    /// struct Square;
    ///
    /// impl Square {
    ///     fn area(&self, fields: &Map<String, Value>) -> Option<f64> {
    ///         fields.get("side")?.as_f64().map(|side| side * side)
    ///     }
    /// }
    ///
    /// let square = from_json_with(Square, r#"{"side": 3}"#).unwrap();
    /// assert_eq!(square.invoke(Square::area), Some(9.0));
    /// ```
    #[must_use]
    pub fn invoke<R>(&self, method: impl FnOnce(&P, &Map<String, Value>) -> R) -> R {
        method(&self.prototype, &self.fields)
    }

    /// Split into prototype and fields.
    #[must_use]
    pub fn into_parts(self) -> (P, Map<String, Value>) {
        (self.prototype, self.fields)
    }
}

impl<P> Deref for Prototyped<P> {
    type Target = P;

    fn deref(&self) -> &P {
        &self.prototype
    }
}

/// Only the own fields are serialized.
impl<P> Serialize for Prototyped<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_object_is_rejected() {
        assert!(from_json_with((), "[1, 2, 3]").is_err());
        assert!(from_json_with((), "42").is_err());
    }

    #[test]
    fn test_set_field_returns_previous() {
        let mut record = from_json_with((), r#"{"a": 1}"#).unwrap();
        assert_eq!(record.set_field("a", Value::from(2)), Some(Value::from(1)));
        assert_eq!(record.set_field("b", Value::Null), None);
        assert_eq!(record.fields().len(), 2);
    }
}
