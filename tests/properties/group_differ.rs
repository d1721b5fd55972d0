//! Property tests for group structure classification.

use proptest::prelude::*;
use serde_json::{json, Value};

use tariff::{classify, DiffLevel};

fn word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,6}").unwrap()
}

fn values() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(word(), 1..6)
}

fn one_dimension() -> impl Strategy<Value = Value> {
    (word(), values()).prop_map(|(key, values)| json!({ "key": key, "values": values }))
}

fn sub_groups() -> impl Strategy<Value = Vec<Value>> {
    proptest::collection::vec(
        (word(), word(), values())
            .prop_map(|(name, key, values)| json!({ "name": name, "key": key, "values": values })),
        1..4,
    )
}

fn two_dimension() -> impl Strategy<Value = Value> {
    (word(), sub_groups()).prop_map(|(key, values)| json!({ "key": key, "values": values }))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a structure and its own serialization never differ.
    #[test]
    fn property_parsed_and_serialized_forms_are_equal(
        group in prop_oneof![one_dimension(), two_dimension()]
    ) {
        let text = group.to_string();
        prop_assert_eq!(classify(group.clone(), text.clone()), DiffLevel::NoChange);
        prop_assert_eq!(classify(text, group), DiffLevel::NoChange);
    }

    /// PROPERTY: value order is irrelevant for one-dimension groups.
    #[test]
    fn property_one_dimension_value_order_is_ignored(
        key in word(),
        (original, shuffled) in values().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let old = json!({ "key": key, "values": original });
        let new = json!({ "key": key, "values": shuffled });
        prop_assert_eq!(classify(old, new), DiffLevel::NoChange);
    }

    /// PROPERTY: sub-group order is irrelevant for two-dimension groups.
    #[test]
    fn property_two_dimension_sub_group_order_is_ignored(
        key in word(),
        (original, shuffled) in sub_groups().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let old = json!({ "key": key, "values": original });
        let new = json!({ "key": key, "values": shuffled });
        prop_assert_eq!(classify(old, new), DiffLevel::NoChange);
    }

    /// PROPERTY: switching between one and two dimensions is structural.
    #[test]
    fn property_dimension_change_is_structural(
        one in one_dimension(),
        two in two_dimension()
    ) {
        prop_assert_eq!(classify(one.clone(), two.clone()), DiffLevel::StructuralChange);
        prop_assert_eq!(classify(two, one), DiffLevel::StructuralChange);
    }

    /// PROPERTY: an empty side always makes the change structural.
    #[test]
    fn property_empty_side_is_structural(
        group in prop_oneof![one_dimension(), two_dimension()]
    ) {
        prop_assert_eq!(classify("{}", group.clone()), DiffLevel::StructuralChange);
        prop_assert_eq!(classify(group, ""), DiffLevel::StructuralChange);
    }

    /// PROPERTY: editing the values of a one-dimension group is add/remove.
    #[test]
    fn property_value_edits_are_add_or_remove(
        key in word(),
        values in values(),
        extra in word()
    ) {
        let mut grown = values.clone();
        grown.push(extra);
        let old = json!({ "key": key, "values": values });
        let new = json!({ "key": key, "values": grown });
        prop_assert_eq!(classify(old, new), DiffLevel::AddOrRemove);
    }
}
