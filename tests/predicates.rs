//! Property-based tests for shape and primitive predicates

mod support;

use proptest::prelude::*;

use typed_json::{
    BooleanClass, JsonPrimitive, JsonValue, Narrow, NullClass, NumberClass, Primitive,
    PrimitiveClass, PrimitiveKind, StringClass, is_array, is_object, is_primitive,
};

/// The value satisfies its own kind's selector and no other.
fn only_kind(value: &JsonValue, kind: PrimitiveKind) -> bool {
    PrimitiveKind::ALL
        .into_iter()
        .all(|other| is_primitive(value, other) == (other == kind))
}

fn check_primitive<T>(value: &JsonValue) -> bool
where
    T: Primitive + ?Sized,
{
    value.as_class::<T::Class>().is_some()
        && is_primitive(value, <T::Class as PrimitiveClass>::KIND)
        && only_kind(value, PrimitiveKind::of::<T>())
        && !is_array(value)
        && !is_object(value)
}

proptest! {
    #[test]
    fn exactly_one_shape(value in support::value()) {
        let value = JsonValue::from(value);
        let shapes = [is_array(&value), is_object(&value), is_primitive(&value, None)];
        prop_assert_eq!(shapes.iter().filter(|shape| **shape).count(), 1);
    }

    #[test]
    fn primitives_are_only_primitives(value in support::primitive()) {
        let value = JsonValue::from(value);
        prop_assert!(is_primitive(&value, None));
        prop_assert!(!is_array(&value));
        prop_assert!(!is_object(&value));
        prop_assert!(value.as_primitive().is_some());
    }

    #[test]
    fn numbers_select_number(n in support::number()) {
        prop_assert!(check_primitive::<f64>(&JsonValue::from(n)));
    }

    #[test]
    fn strings_select_string(s in any::<String>()) {
        prop_assert!(check_primitive::<str>(&JsonValue::from(s)));
    }

    #[test]
    fn booleans_select_boolean(b in any::<bool>()) {
        prop_assert!(check_primitive::<bool>(&JsonValue::from(b)));
    }

    #[test]
    fn arrays_are_only_arrays(value in support::array()) {
        let value = JsonValue::from(value);
        prop_assert!(is_array(&value));
        prop_assert!(!is_object(&value));
        prop_assert!(!is_primitive(&value, None));
        for kind in PrimitiveKind::ALL {
            prop_assert!(!is_primitive(&value, kind));
        }
    }

    #[test]
    fn objects_are_only_objects(value in support::object()) {
        let value = JsonValue::from(value);
        prop_assert!(is_object(&value));
        prop_assert!(!is_array(&value));
        prop_assert!(!is_primitive(&value, None));
        for kind in PrimitiveKind::ALL {
            prop_assert!(!is_primitive(&value, kind));
        }
    }

    #[test]
    fn selector_matches_runtime_kind(value in support::value()) {
        let value = JsonValue::from(value);
        for kind in PrimitiveKind::ALL {
            prop_assert_eq!(is_primitive(&value, kind), value.primitive_kind() == Some(kind));
        }
    }

    #[test]
    fn readonly_view_agrees(value in support::value()) {
        let value = JsonValue::from(value);
        let view = value.as_readonly();
        prop_assert_eq!(is_array(view), is_array(&value));
        prop_assert_eq!(is_object(view), is_object(&value));
        prop_assert_eq!(is_primitive(view, None), is_primitive(&value, None));
        prop_assert_eq!(view.primitive_kind(), value.primitive_kind());
    }

    #[test]
    fn absent_is_nothing(kind in prop::sample::select(PrimitiveKind::ALL.to_vec())) {
        let absent: Option<&JsonValue> = None;
        prop_assert!(!is_array(absent));
        prop_assert!(!is_object(absent));
        prop_assert!(!is_primitive(absent, None));
        prop_assert!(!is_primitive(absent, kind));
    }
}

#[test]
fn null_selects_null() {
    assert!(check_primitive::<()>(&JsonValue::null()));
}

#[test]
fn narrowing_one_kind_at_a_time() {
    let values = [
        JsonValue::from("s"),
        JsonValue::from(1),
        JsonValue::from(true),
        JsonValue::null(),
    ];

    for value in &values {
        let primitive = value.as_primitive().expect("primitive");
        let narrowed = if let Some(s) = primitive.as_class::<StringClass>() {
            format!("string {s}")
        } else if let Some(n) = primitive.as_class::<NumberClass>() {
            format!("number {n}")
        } else if let Some(b) = primitive.as_class::<BooleanClass>() {
            format!("boolean {b}")
        } else if primitive.as_class::<NullClass>().is_some() {
            String::from("null")
        } else {
            unreachable!("every primitive has one of four kinds")
        };
        let expected = match primitive {
            JsonPrimitive::String(s) => format!("string {s}"),
            JsonPrimitive::Number(n) => format!("number {n}"),
            JsonPrimitive::Boolean(b) => format!("boolean {b}"),
            JsonPrimitive::Null => String::from("null"),
        };
        assert_eq!(narrowed, expected);
    }
}

#[test]
fn unknown_selector_text_is_an_error() {
    assert!("string".parse::<PrimitiveKind>().is_ok());
    assert!("Number".parse::<PrimitiveKind>().is_err());
    assert!(PrimitiveKind::try_from("undefined").is_err());
}
