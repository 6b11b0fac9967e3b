use proptest::prelude::*;
use serde_json::{Map, Value};
use snp_records::{FieldDef, FieldValue, Schema, SchemaRecord, SemanticType};
use std::sync::Arc;

fn finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("JSON numbers are finite", |f| f.is_finite())
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        finite_f64().prop_map(Value::from),
        ".{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn arb_kind() -> impl Strategy<Value = SemanticType> {
    prop_oneof![
        Just(SemanticType::String),
        Just(SemanticType::Integer),
        Just(SemanticType::Float),
        Just(SemanticType::Boolean),
        Just(SemanticType::Object),
        Just(SemanticType::Array),
    ]
}

fn arb_field_value(kind: SemanticType) -> BoxedStrategy<FieldValue> {
    match kind {
        SemanticType::String => ".{0,12}".prop_map(FieldValue::String).boxed(),
        SemanticType::Integer => any::<i64>().prop_map(FieldValue::Integer).boxed(),
        SemanticType::Float => finite_f64().prop_map(FieldValue::Float).boxed(),
        SemanticType::Boolean => any::<bool>().prop_map(FieldValue::Boolean).boxed(),
        SemanticType::Object => proptest::collection::btree_map("[a-z]{1,4}", arb_json(), 0..3)
            .prop_map(|entries| FieldValue::Object(entries.into_iter().collect::<Map<_, _>>()))
            .boxed(),
        SemanticType::Array => proptest::collection::vec(arb_json(), 0..3)
            .prop_map(FieldValue::Array)
            .boxed(),
    }
}

prop_compose! {
    fn arb_schema()(
        names in proptest::collection::btree_set("f_[a-z]{1,6}", 0..6)
            .prop_map(|names| names.into_iter().collect::<Vec<_>>())
            .prop_shuffle(),
        kinds in proptest::collection::vec(arb_kind(), 6),
    ) -> Schema {
        let fields = names
            .into_iter()
            .zip(kinds)
            .map(|(name, kind)| FieldDef::new(name, kind))
            .collect();
        Schema::new("Generated", fields)
    }
}

/// A record populated in a random order, with random extension entries.
fn arb_record() -> impl Strategy<Value = SchemaRecord> {
    arb_schema()
        .prop_flat_map(|schema| {
            let values: Vec<_> = schema
                .fields
                .iter()
                .map(|def| proptest::option::of(arb_field_value(def.kind)))
                .collect();
            let order: Vec<usize> = (0..schema.fields.len()).collect();
            let extensions = proptest::collection::vec(("x_[a-z]{1,6}", arb_json()), 0..4);
            (Just(Arc::new(schema)), values, Just(order).prop_shuffle(), extensions)
        })
        .prop_map(|(schema, values, order, extensions)| {
            let mut record = SchemaRecord::new(schema.clone());
            for index in order {
                if let Some(value) = values[index].clone() {
                    record.set(&schema.fields[index].name, value).unwrap();
                }
            }
            for (key, value) in extensions {
                record.set_extension(key, value).unwrap();
            }
            record
        })
}

proptest! {
    #[test]
    fn record_value_round_trip_prop(record in arb_record()) {
        let back = SchemaRecord::from_json(record.shared_schema(), record.to_json()).unwrap();
        prop_assert_eq!(back, record);
    }

    #[test]
    fn record_text_round_trip_prop(record in arb_record(), pretty in any::<bool>()) {
        let text = record.to_json_string(pretty).unwrap();
        let back = SchemaRecord::from_json_str(record.shared_schema(), &text).unwrap();
        prop_assert_eq!(&back, &record);
        prop_assert_eq!(back.to_json_string(pretty).unwrap(), text);
    }

    #[test]
    fn declared_keys_follow_schema_order_prop(record in arb_record()) {
        let json = record.to_json();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();

        let expected_declared: Vec<&str> = record
            .schema()
            .field_names()
            .filter(|name| record.is_set(name).unwrap())
            .collect();
        let declared_count = expected_declared.len();

        prop_assert_eq!(&keys[..declared_count], &expected_declared[..]);
        prop_assert!(keys[declared_count..]
            .iter()
            .all(|key| record.extension(key).is_some()));
        prop_assert_eq!(keys.len(), declared_count + record.extensions().len());
    }

    #[test]
    fn serialize_matches_to_json_prop(record in arb_record()) {
        prop_assert_eq!(serde_json::to_value(&record).unwrap(), record.to_json());
    }
}
