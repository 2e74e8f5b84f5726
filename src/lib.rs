//! A JSON value model with predicates that check and narrow in one call.
//!
//! # Example
//! ```
//! use typed_json::{Narrow, PrimitiveKind, StringClass, is_array, is_object, is_primitive, parse_json};
//!
//! let value = parse_json(r#"{"name": "yarso", "tags": ["a", "b"]}"#).unwrap();
//! assert!(is_object(&value));
//!
//! let tags = value.as_object().and_then(|o| o.get("tags"));
//! assert!(is_array(tags));
//! assert!(!is_primitive(tags, None));
//!
//! let name = value.as_object().and_then(|o| o.get("name"));
//! assert!(is_primitive(name, PrimitiveKind::String));
//!
//! let name: Option<&str> = name.as_class::<StringClass>();
//! assert_eq!(name, Some("yarso"));
//! ```
//!
//! [`JsonValue`] is a sum of [`JsonPrimitive`], [`JsonArray`] and [`JsonObject`].
//! Every value is exactly one of the three; `Option::None` stands for a value
//! that was not provided and satisfies none of the predicates.
//!
//! [`parse_json`] decodes JSON text with `serde_json` and does no validation of
//! its own.

mod error;
mod parser;
mod predicate;
mod readonly;
mod selector;
mod value;

pub use error::JsonError;
pub use predicate::{Narrow, as_primitive_of, is_array, is_object, is_primitive};
pub use readonly::{ReadonlyJsonArray, ReadonlyJsonObject, ReadonlyJsonValue};
pub use selector::{
    BooleanClass, NullClass, NumberClass, Primitive, PrimitiveClass, PrimitiveKind, StringClass,
};
pub use value::{Container, JsonArray, JsonObject, JsonPrimitive, JsonValue};

/// Parse a JSON string into a `JsonValue` type.
pub fn parse_json(input: &str) -> Result<JsonValue, JsonError> {
    parser::from_str(input)
}
