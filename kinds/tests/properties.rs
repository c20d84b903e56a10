//! Property-based tests for the classifier.
//!
//! Values are drawn from primitives, arrays, forged objects carrying random
//! marker flags on the instance, and instances of the built-in types.

use proptest::prelude::*;

use mathkind::classify::{self, Variant};
use mathkind::{Marker, Object, TypeRegistry, Value};

fn marker() -> impl Strategy<Value = Marker> {
    prop::sample::select(Marker::ALL.to_vec())
}

fn builtin_name() -> impl Strategy<Value = String> {
    let names: Vec<String> = TypeRegistry::builtin()
        .iter()
        .map(|d| d.name().to_owned())
        .collect();
    prop::sample::select(names)
}

fn primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>().prop_map(Value::Number),
        ".{0,8}".prop_map(Value::Str),
    ]
}

fn forged() -> impl Strategy<Value = Value> {
    prop::collection::vec(marker(), 0..4).prop_map(|markers| {
        let mut obj = Object::plain();
        for m in markers {
            obj.insert(m.as_str(), true);
        }
        Value::Object(obj)
    })
}

fn builtin_instance() -> impl Strategy<Value = Value> {
    builtin_name().prop_map(|name| {
        TypeRegistry::builtin()
            .instantiate(&name, Vec::<(String, Value)>::new())
            .unwrap_or_default()
    })
}

fn well_formed() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![primitive(), builtin_instance()];
    leaf.prop_recursive(2, 16, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Value::Array)
    })
}

fn anything() -> impl Strategy<Value = Value> {
    prop_oneof![well_formed(), forged()]
}

proptest! {
    /// Every predicate returns the same answer when asked twice.
    #[test]
    fn prop_predicates_idempotent(v in anything()) {
        for variant in Variant::ALL {
            prop_assert_eq!(variant.matches(&v), variant.matches(&v), "{:?}", variant);
        }
    }

    /// Instance-level flags never classify an object literal.
    #[test]
    fn prop_forged_objects_match_nothing(v in forged()) {
        prop_assert!(classify::variants_of(&v).is_empty());
    }

    /// At most one base kind holds for well-formed values.
    #[test]
    fn prop_base_kinds_exclusive(v in well_formed()) {
        let hits = [
            classify::is_number(&v),
            classify::is_complex(&v),
            classify::is_fraction(&v),
            classify::is_unit(&v),
            classify::is_matrix(&v),
        ]
        .iter()
        .filter(|b| **b)
        .count();
        prop_assert!(hits <= 1);
    }

    /// Dense and sparse never hold together for well-formed values.
    #[test]
    fn prop_refinements_exclusive(v in well_formed()) {
        prop_assert!(!(classify::is_dense_matrix(&v) && classify::is_sparse_matrix(&v)));
    }

    /// Refinements imply Matrix; Matrix and Array imply Collection.
    #[test]
    fn prop_hierarchy(v in anything()) {
        if classify::is_dense_matrix(&v) || classify::is_sparse_matrix(&v) {
            prop_assert!(classify::is_matrix(&v));
        }
        prop_assert_eq!(
            classify::is_collection(&v),
            classify::is_array(&v) || classify::is_matrix(&v)
        );
    }

    /// Numbers of every bit pattern, NaN included, are numbers and nothing else.
    #[test]
    fn prop_numbers_are_numbers(n in any::<f64>()) {
        prop_assert_eq!(classify::variants_of(&Value::Number(n)), vec![Variant::Number]);
    }
}
