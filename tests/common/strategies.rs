use proptest::prelude::*;
use proptest::strategy::Just;
use serde_json::{json, Map, Value};

/// Strategy for generating arbitrary JSON values of bounded depth
pub fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 _.-]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z]{1,8}", inner, 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

/// Strategy for generating job config overlay arrays
pub fn overlays_strategy() -> impl Strategy<Value = Value> {
    prop::collection::vec(
        prop::collection::btree_map("[a-zA-Z]{1,8}", json_value_strategy(), 0..3),
        0..3,
    )
    .prop_map(|overlays| {
        Value::Array(
            overlays
                .into_iter()
                .map(|overlay| Value::Object(overlay.into_iter().collect()))
                .collect(),
        )
    })
}

/// Strategy for generating submission objects that never carry a `"deploy"` key
pub fn submission_without_deploy_strategy() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-c][a-z]{0,7}", json_value_strategy(), 0..5)
        .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<String, Value>>()))
}

/// Strategy for generating deploy objects without job config overlays
pub fn deploy_without_overlays_strategy() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-i][a-z]{0,7}", json_value_strategy(), 0..5)
        .prop_map(|entries| entries.into_iter().collect())
}
