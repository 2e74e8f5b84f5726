use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;

use crate::selector::PrimitiveKind;

/// Represents a JSON value.
/// - Primitive(JsonPrimitive)
/// - Array(JsonArray)
/// - Object(JsonObject)
///
/// The three shapes are mutually exclusive, so matching on this enum is the
/// exhaustive form of the `is_*` predicates.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Primitive(JsonPrimitive),
    Array(JsonArray),
    Object(JsonObject),
}

/// A leaf JSON value.
/// - String(String)
/// - Boolean(bool)
/// - Number(f64)
/// - Null
#[derive(Debug, Clone, PartialEq)]
pub enum JsonPrimitive {
    String(String),
    Boolean(bool),
    Number(f64),
    Null,
}

/// An ordered sequence of JSON values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonArray(Vec<JsonValue>);

/// A mapping from string keys to JSON values, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonObject(IndexMap<String, JsonValue>);

/// The non-primitive half of a [`JsonValue`], what remains once
/// [`JsonValue::try_primitive`] has ruled primitives out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Container<'a> {
    Array(&'a JsonArray),
    Object(&'a JsonObject),
}

impl JsonValue {
    pub fn null() -> Self {
        JsonValue::Primitive(JsonPrimitive::Null)
    }

    /// Splits the value into its primitive and container halves.
    pub fn try_primitive(&self) -> Result<&JsonPrimitive, Container<'_>> {
        match self {
            JsonValue::Primitive(primitive) => Ok(primitive),
            JsonValue::Array(array) => Err(Container::Array(array)),
            JsonValue::Object(object) => Err(Container::Object(object)),
        }
    }

    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            JsonValue::Primitive(primitive) => Some(primitive.kind()),
            _ => None,
        }
    }
}

impl JsonPrimitive {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            JsonPrimitive::String(_) => PrimitiveKind::String,
            JsonPrimitive::Boolean(_) => PrimitiveKind::Boolean,
            JsonPrimitive::Number(_) => PrimitiveKind::Number,
            JsonPrimitive::Null => PrimitiveKind::Null,
        }
    }
}

impl JsonArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> Vec<JsonValue> {
        self.0
    }
}

impl JsonObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> IndexMap<String, JsonValue> {
        self.0
    }
}

impl Deref for JsonArray {
    type Target = Vec<JsonValue>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for JsonArray {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Deref for JsonObject {
    type Target = IndexMap<String, JsonValue>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for JsonObject {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<JsonValue>> for JsonArray {
    fn from(values: Vec<JsonValue>) -> Self {
        JsonArray(values)
    }
}

impl FromIterator<JsonValue> for JsonArray {
    fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
        JsonArray(iter.into_iter().collect())
    }
}

impl From<IndexMap<String, JsonValue>> for JsonObject {
    fn from(entries: IndexMap<String, JsonValue>) -> Self {
        JsonObject(entries)
    }
}

impl<K: Into<String>> FromIterator<(K, JsonValue)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (K, JsonValue)>>(iter: I) -> Self {
        JsonObject(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

macro_rules! primitive_from {
    ($($ty:ty => |$v:ident| $expr:expr),* $(,)?) => {
        $(
            impl From<$ty> for JsonPrimitive {
                fn from($v: $ty) -> Self {
                    $expr
                }
            }

            impl From<$ty> for JsonValue {
                fn from(value: $ty) -> Self {
                    JsonValue::Primitive(value.into())
                }
            }
        )*
    };
}

primitive_from! {
    bool => |v| JsonPrimitive::Boolean(v),
    f64 => |v| JsonPrimitive::Number(v),
    i32 => |v| JsonPrimitive::Number(f64::from(v)),
    u32 => |v| JsonPrimitive::Number(f64::from(v)),
    // Same precision as a JSON number decoded from text.
    i64 => |v| JsonPrimitive::Number(v as f64),
    u64 => |v| JsonPrimitive::Number(v as f64),
    &str => |v| JsonPrimitive::String(v.to_owned()),
    String => |v| JsonPrimitive::String(v),
    () => |_v| JsonPrimitive::Null,
}

impl From<JsonPrimitive> for JsonValue {
    fn from(primitive: JsonPrimitive) -> Self {
        JsonValue::Primitive(primitive)
    }
}

impl From<JsonArray> for JsonValue {
    fn from(array: JsonArray) -> Self {
        JsonValue::Array(array)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(values: Vec<JsonValue>) -> Self {
        JsonValue::Array(values.into())
    }
}

impl From<JsonObject> for JsonValue {
    fn from(object: JsonObject) -> Self {
        JsonValue::Object(object)
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => JsonValue::null(),
            Value::Bool(b) => b.into(),
            // Arbitrary precision numbers may not fit; JSON text of those decodes the same way.
            Value::Number(num) => num.as_f64().map_or_else(JsonValue::null, JsonValue::from),
            Value::String(s) => s.into(),
            Value::Array(values) => values
                .into_iter()
                .map(JsonValue::from)
                .collect::<JsonArray>()
                .into(),
            Value::Object(entries) => entries
                .into_iter()
                .map(|(k, v)| (k, JsonValue::from(v)))
                .collect::<JsonObject>()
                .into(),
        }
    }
}

impl PartialEq<serde_json::Value> for JsonValue {
    fn eq(&self, other: &serde_json::Value) -> bool {
        eq(other, self)
    }
}

impl PartialEq<JsonValue> for serde_json::Value {
    fn eq(&self, other: &JsonValue) -> bool {
        eq(self, other)
    }
}

fn eq(lhs: &serde_json::Value, rhs: &JsonValue) -> bool {
    use serde_json::Value;

    match (lhs, rhs) {
        (Value::Array(l), JsonValue::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(l, r)| eq(l, r))
        }
        // Key order is not part of object equality.
        (Value::Object(l), JsonValue::Object(r)) => {
            l.len() == r.len()
                && l
                    .iter()
                    .all(|(key, l)| r.get(key.as_str()).is_some_and(|r| eq(l, r)))
        }
        (_, JsonValue::Primitive(primitive)) => match (lhs, primitive) {
            (Value::Null, JsonPrimitive::Null) => true,
            (Value::Bool(l), JsonPrimitive::Boolean(r)) => l == r,
            (Value::Number(l), JsonPrimitive::Number(r)) => l.as_f64() == Some(*r),
            (Value::String(l), JsonPrimitive::String(r)) => l == r,
            _ => false,
        },
        _ => false,
    }
}
