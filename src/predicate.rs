//! Shape predicates.
//!
//! [`Narrow`] is implemented for every way of holding a JSON value: borrowed
//! values, borrowed sub-shapes, read-only views, and `Option` of any of those
//! (where `None` is a value that was not provided). Each narrowing method
//! returns the refined type on success, so a check and its narrowing are the
//! same call.
//!
//! Holders that can never be primitive (`&JsonArray`, `&JsonObject` and their
//! views) narrow primitives to [`Infallible`]: the success branch of
//! [`Narrow::as_primitive`] cannot be entered, and the type checker knows it.

use std::convert::Infallible;

use crate::readonly::{ReadonlyJsonArray, ReadonlyJsonObject, ReadonlyJsonValue};
use crate::selector::{PrimitiveClass, PrimitiveKind};
use crate::{JsonArray, JsonObject, JsonPrimitive, JsonValue};

pub trait Narrow: Copy {
    type Primitive;
    type Array;
    type Object;
    type Class<C: PrimitiveClass>;

    fn as_primitive(self) -> Option<Self::Primitive>;

    fn as_array(self) -> Option<Self::Array>;

    fn as_object(self) -> Option<Self::Object>;

    /// Narrows to the host type selected by `C`, e.g. `&str` for `StringClass`.
    fn as_class<C: PrimitiveClass>(self) -> Option<Self::Class<C>>;

    /// The runtime kind, if the value is a primitive.
    fn primitive_kind(self) -> Option<PrimitiveKind>;
}

/// Returns `true` if `value` is an object.
pub fn is_object<V: Narrow>(value: V) -> bool {
    value.as_object().is_some()
}

/// Returns `true` if `value` is an array.
pub fn is_array<V: Narrow>(value: V) -> bool {
    value.as_array().is_some()
}

/// Returns `true` if `value` is a primitive, and of the `selector`'s kind when
/// one is given.
///
/// ```
/// use typed_json::{is_primitive, JsonValue, PrimitiveKind};
///
/// let value = JsonValue::from(42);
/// assert!(is_primitive(&value, None));
/// assert!(is_primitive(&value, PrimitiveKind::Number));
/// assert!(!is_primitive(&value, PrimitiveKind::String));
/// ```
pub fn is_primitive<V, S>(value: V, selector: S) -> bool
where
    V: Narrow,
    S: Into<Option<PrimitiveKind>>,
{
    match (value.primitive_kind(), selector.into()) {
        (Some(_), None) => true,
        (Some(kind), Some(selected)) => kind == selected,
        (None, _) => false,
    }
}

/// Free-function form of [`Narrow::as_class`].
pub fn as_primitive_of<C, V>(value: V) -> Option<V::Class<C>>
where
    C: PrimitiveClass,
    V: Narrow,
{
    value.as_class::<C>()
}

impl<'a> Narrow for &'a JsonValue {
    type Primitive = &'a JsonPrimitive;
    type Array = &'a JsonArray;
    type Object = &'a JsonObject;
    type Class<C: PrimitiveClass> = C::Narrowed<'a>;

    fn as_primitive(self) -> Option<&'a JsonPrimitive> {
        self.try_primitive().ok()
    }

    fn as_array(self) -> Option<&'a JsonArray> {
        match self {
            JsonValue::Array(array) => Some(array),
            _ => None,
        }
    }

    fn as_object(self) -> Option<&'a JsonObject> {
        match self {
            JsonValue::Object(object) => Some(object),
            _ => None,
        }
    }

    fn as_class<C: PrimitiveClass>(self) -> Option<C::Narrowed<'a>> {
        self.as_primitive().and_then(C::narrow)
    }

    fn primitive_kind(self) -> Option<PrimitiveKind> {
        JsonValue::primitive_kind(self)
    }
}

impl<'a> Narrow for &'a JsonPrimitive {
    type Primitive = &'a JsonPrimitive;
    type Array = Infallible;
    type Object = Infallible;
    type Class<C: PrimitiveClass> = C::Narrowed<'a>;

    fn as_primitive(self) -> Option<&'a JsonPrimitive> {
        Some(self)
    }

    fn as_array(self) -> Option<Infallible> {
        None
    }

    fn as_object(self) -> Option<Infallible> {
        None
    }

    fn as_class<C: PrimitiveClass>(self) -> Option<C::Narrowed<'a>> {
        C::narrow(self)
    }

    fn primitive_kind(self) -> Option<PrimitiveKind> {
        Some(self.kind())
    }
}

impl<'a> Narrow for &'a JsonArray {
    type Primitive = Infallible;
    type Array = &'a JsonArray;
    type Object = Infallible;
    type Class<C: PrimitiveClass> = Infallible;

    fn as_primitive(self) -> Option<Infallible> {
        None
    }

    fn as_array(self) -> Option<&'a JsonArray> {
        Some(self)
    }

    fn as_object(self) -> Option<Infallible> {
        None
    }

    fn as_class<C: PrimitiveClass>(self) -> Option<Infallible> {
        None
    }

    fn primitive_kind(self) -> Option<PrimitiveKind> {
        None
    }
}

impl<'a> Narrow for &'a JsonObject {
    type Primitive = Infallible;
    type Array = Infallible;
    type Object = &'a JsonObject;
    type Class<C: PrimitiveClass> = Infallible;

    fn as_primitive(self) -> Option<Infallible> {
        None
    }

    fn as_array(self) -> Option<Infallible> {
        None
    }

    fn as_object(self) -> Option<&'a JsonObject> {
        Some(self)
    }

    fn as_class<C: PrimitiveClass>(self) -> Option<Infallible> {
        None
    }

    fn primitive_kind(self) -> Option<PrimitiveKind> {
        None
    }
}

impl<'a> Narrow for ReadonlyJsonValue<'a> {
    type Primitive = &'a JsonPrimitive;
    type Array = ReadonlyJsonArray<'a>;
    type Object = ReadonlyJsonObject<'a>;
    type Class<C: PrimitiveClass> = C::Narrowed<'a>;

    fn as_primitive(self) -> Option<&'a JsonPrimitive> {
        self.primitive()
    }

    fn as_array(self) -> Option<ReadonlyJsonArray<'a>> {
        self.array()
    }

    fn as_object(self) -> Option<ReadonlyJsonObject<'a>> {
        self.object()
    }

    fn as_class<C: PrimitiveClass>(self) -> Option<C::Narrowed<'a>> {
        self.primitive().and_then(C::narrow)
    }

    fn primitive_kind(self) -> Option<PrimitiveKind> {
        self.get_ref().primitive_kind()
    }
}

impl<'a> Narrow for ReadonlyJsonArray<'a> {
    type Primitive = Infallible;
    type Array = ReadonlyJsonArray<'a>;
    type Object = Infallible;
    type Class<C: PrimitiveClass> = Infallible;

    fn as_primitive(self) -> Option<Infallible> {
        None
    }

    fn as_array(self) -> Option<ReadonlyJsonArray<'a>> {
        Some(self)
    }

    fn as_object(self) -> Option<Infallible> {
        None
    }

    fn as_class<C: PrimitiveClass>(self) -> Option<Infallible> {
        None
    }

    fn primitive_kind(self) -> Option<PrimitiveKind> {
        None
    }
}

impl<'a> Narrow for ReadonlyJsonObject<'a> {
    type Primitive = Infallible;
    type Array = Infallible;
    type Object = ReadonlyJsonObject<'a>;
    type Class<C: PrimitiveClass> = Infallible;

    fn as_primitive(self) -> Option<Infallible> {
        None
    }

    fn as_array(self) -> Option<Infallible> {
        None
    }

    fn as_object(self) -> Option<ReadonlyJsonObject<'a>> {
        Some(self)
    }

    fn as_class<C: PrimitiveClass>(self) -> Option<Infallible> {
        None
    }

    fn primitive_kind(self) -> Option<PrimitiveKind> {
        None
    }
}

impl<V: Narrow> Narrow for Option<V> {
    type Primitive = V::Primitive;
    type Array = V::Array;
    type Object = V::Object;
    type Class<C: PrimitiveClass> = V::Class<C>;

    fn as_primitive(self) -> Option<V::Primitive> {
        self.and_then(V::as_primitive)
    }

    fn as_array(self) -> Option<V::Array> {
        self.and_then(V::as_array)
    }

    fn as_object(self) -> Option<V::Object> {
        self.and_then(V::as_object)
    }

    fn as_class<C: PrimitiveClass>(self) -> Option<V::Class<C>> {
        self.and_then(V::as_class::<C>)
    }

    fn primitive_kind(self) -> Option<PrimitiveKind> {
        self.and_then(V::primitive_kind)
    }
}
