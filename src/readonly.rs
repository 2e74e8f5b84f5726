//! Read-only views.
//!
//! A view borrows the value it wraps and exposes only read accessors. It never
//! copies; [`ReadonlyJsonValue::get_ref`] hands back the same borrowed value.

use crate::{JsonArray, JsonObject, JsonPrimitive, JsonValue};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadonlyJsonValue<'a>(&'a JsonValue);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadonlyJsonArray<'a>(&'a JsonArray);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadonlyJsonObject<'a>(&'a JsonObject);

impl JsonValue {
    pub fn as_readonly(&self) -> ReadonlyJsonValue<'_> {
        ReadonlyJsonValue(self)
    }
}

impl JsonArray {
    pub fn as_readonly(&self) -> ReadonlyJsonArray<'_> {
        ReadonlyJsonArray(self)
    }
}

impl JsonObject {
    pub fn as_readonly(&self) -> ReadonlyJsonObject<'_> {
        ReadonlyJsonObject(self)
    }
}

impl<'a> From<&'a JsonValue> for ReadonlyJsonValue<'a> {
    fn from(value: &'a JsonValue) -> Self {
        ReadonlyJsonValue(value)
    }
}

impl<'a> ReadonlyJsonValue<'a> {
    pub fn get_ref(self) -> &'a JsonValue {
        self.0
    }

    pub fn primitive(self) -> Option<&'a JsonPrimitive> {
        match self.0 {
            JsonValue::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }

    pub fn array(self) -> Option<ReadonlyJsonArray<'a>> {
        match self.0 {
            JsonValue::Array(array) => Some(ReadonlyJsonArray(array)),
            _ => None,
        }
    }

    pub fn object(self) -> Option<ReadonlyJsonObject<'a>> {
        match self.0 {
            JsonValue::Object(object) => Some(ReadonlyJsonObject(object)),
            _ => None,
        }
    }
}

impl<'a> ReadonlyJsonArray<'a> {
    pub fn get_ref(self) -> &'a JsonArray {
        self.0
    }

    pub fn len(self) -> usize {
        self.0.len()
    }

    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    pub fn get(self, index: usize) -> Option<ReadonlyJsonValue<'a>> {
        self.0.get(index).map(ReadonlyJsonValue)
    }

    pub fn iter(self) -> impl ExactSizeIterator<Item = ReadonlyJsonValue<'a>> {
        self.0.iter().map(ReadonlyJsonValue)
    }
}

impl<'a> ReadonlyJsonObject<'a> {
    pub fn get_ref(self) -> &'a JsonObject {
        self.0
    }

    pub fn len(self) -> usize {
        self.0.len()
    }

    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    pub fn get(self, key: &str) -> Option<ReadonlyJsonValue<'a>> {
        self.0.get(key).map(ReadonlyJsonValue)
    }

    pub fn contains_key(self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(self) -> impl ExactSizeIterator<Item = &'a str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(self) -> impl ExactSizeIterator<Item = (&'a str, ReadonlyJsonValue<'a>)> {
        self.0
            .iter()
            .map(|(key, value)| (key.as_str(), ReadonlyJsonValue(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> JsonValue {
        JsonObject::from_iter([
            ("a", JsonValue::from(vec![JsonValue::from(1), JsonValue::from(true)])),
            ("b", JsonValue::null()),
        ])
        .into()
    }

    #[test]
    fn views_borrow_without_copying() {
        let value = sample();
        let view = value.as_readonly();

        assert!(std::ptr::eq(view.get_ref(), &value));

        let object = view.object().unwrap();
        let JsonValue::Object(inner) = &value else {
            unreachable!()
        };
        assert!(std::ptr::eq(object.get_ref(), inner));
    }

    #[test]
    fn object_view_reads() {
        let value = sample();
        let object = value.as_readonly().object().unwrap();

        assert_eq!(object.len(), 2);
        assert!(object.contains_key("a"));
        assert!(!object.contains_key("c"));
        assert_eq!(object.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(
            object.get("b").and_then(ReadonlyJsonValue::primitive),
            Some(&JsonPrimitive::Null)
        );
    }

    #[test]
    fn array_view_reads() {
        let value = sample();
        let array = value
            .as_readonly()
            .object()
            .and_then(|o| o.get("a"))
            .and_then(ReadonlyJsonValue::array)
            .unwrap();

        assert_eq!(array.len(), 2);
        assert!(!array.is_empty());
        assert_eq!(
            array.get(1).and_then(ReadonlyJsonValue::primitive),
            Some(&JsonPrimitive::Boolean(true))
        );
        assert!(array.get(2).is_none());
        assert!(array.iter().all(|item| item.primitive().is_some()));
    }

    #[test]
    fn shape_accessors_are_exclusive() {
        let value = JsonValue::from("text");
        let view = ReadonlyJsonValue::from(&value);

        assert!(view.primitive().is_some());
        assert!(view.array().is_none());
        assert!(view.object().is_none());
    }
}
