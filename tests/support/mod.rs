//! Shared value generators for the property tests.
#![allow(dead_code)]

use proptest::prelude::*;
use serde_json::{Map, Number, Value};

pub fn number() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("JSON numbers are finite", |n| n.is_finite())
}

pub fn primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        number().prop_filter_map("finite", Number::from_f64).prop_map(Value::Number),
        any::<String>().prop_map(Value::String),
    ]
}

pub fn value() -> impl Strategy<Value = Value> {
    primitive().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::btree_map(any::<String>(), inner, 0..8)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

pub fn array() -> impl Strategy<Value = Value> {
    prop::collection::vec(value(), 0..8).prop_map(Value::Array)
}

pub fn object() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(any::<String>(), value(), 0..8)
        .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>()))
}
