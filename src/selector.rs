//! Primitive-class selectors.
//!
//! A selector names one of the four primitive subtypes of a JSON value. It
//! exists at two levels:
//!
//! - [`PrimitiveKind`] is the runtime tag passed to [`is_primitive`](crate::is_primitive).
//! - [`PrimitiveClass`] is implemented by the zero-sized markers [`StringClass`],
//!   [`BooleanClass`], [`NumberClass`] and [`NullClass`]. Its
//!   [`Narrowed`](PrimitiveClass::Narrowed) type is what a successful check narrows to.
//!
//! | Selector | Narrowed type |
//! | -------- | ------------- |
//! | `StringClass` | `&str` |
//! | `BooleanClass` | `bool` |
//! | `NumberClass` | `f64` |
//! | `NullClass` | `()` |

use std::fmt;
use std::str::FromStr;

use crate::{JsonError, JsonPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Boolean,
    Number,
    Null,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 4] = [
        PrimitiveKind::String,
        PrimitiveKind::Boolean,
        PrimitiveKind::Number,
        PrimitiveKind::Null,
    ];

    /// The selector for a host primitive type, e.g. `PrimitiveKind::of::<bool>()`.
    pub fn of<T: Primitive + ?Sized>() -> Self {
        <T::Class as PrimitiveClass>::KIND
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Null => "null",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimitiveKind {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| JsonError::UnknownSelector(s.to_owned()))
    }
}

impl TryFrom<&str> for PrimitiveKind {
    type Error = JsonError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::StringClass {}
    impl Sealed for super::BooleanClass {}
    impl Sealed for super::NumberClass {}
    impl Sealed for super::NullClass {}
}

/// A type-level selector. Sealed: the four markers below are the only classes.
pub trait PrimitiveClass: sealed::Sealed {
    const KIND: PrimitiveKind;

    type Narrowed<'a>;

    fn narrow(primitive: &JsonPrimitive) -> Option<Self::Narrowed<'_>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StringClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BooleanClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullClass;

impl PrimitiveClass for StringClass {
    const KIND: PrimitiveKind = PrimitiveKind::String;

    type Narrowed<'a> = &'a str;

    fn narrow(primitive: &JsonPrimitive) -> Option<&str> {
        match primitive {
            JsonPrimitive::String(s) => Some(s),
            _ => None,
        }
    }
}

impl PrimitiveClass for BooleanClass {
    const KIND: PrimitiveKind = PrimitiveKind::Boolean;

    type Narrowed<'a> = bool;

    fn narrow(primitive: &JsonPrimitive) -> Option<bool> {
        match primitive {
            JsonPrimitive::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl PrimitiveClass for NumberClass {
    const KIND: PrimitiveKind = PrimitiveKind::Number;

    type Narrowed<'a> = f64;

    fn narrow(primitive: &JsonPrimitive) -> Option<f64> {
        match primitive {
            JsonPrimitive::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl PrimitiveClass for NullClass {
    const KIND: PrimitiveKind = PrimitiveKind::Null;

    type Narrowed<'a> = ();

    fn narrow(primitive: &JsonPrimitive) -> Option<()> {
        match primitive {
            JsonPrimitive::Null => Some(()),
            _ => None,
        }
    }
}

/// Host types a JSON primitive narrows to, mapped back to their selector.
pub trait Primitive {
    type Class: PrimitiveClass;
}

impl Primitive for str {
    type Class = StringClass;
}

impl Primitive for String {
    type Class = StringClass;
}

impl Primitive for bool {
    type Class = BooleanClass;
}

impl Primitive for f64 {
    type Class = NumberClass;
}

impl Primitive for () {
    type Class = NullClass;
}
