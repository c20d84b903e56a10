//! The marker-lookup primitive.
//!
//! A marker counts only when the value's own type descriptor declares it as
//! boolean `true`. Members inherited from further up the descriptor chain
//! and flags stamped on the instance are ignored here; this is the one place
//! that rule is enforced.

use crate::model::{Marker, Value};

/// Name of the static predicate a big-decimal type may expose instead of
/// declaring [`Marker::BigNumber`].
pub const DECIMAL_STATIC: &str = "isDecimal";

/// Returns true if the descriptor of `value` declares `marker` itself.
///
/// Non-objects and objects without a descriptor never carry markers.
#[must_use]
pub fn has_own_marker(value: &Value, marker: Marker) -> bool {
    has_own_flag(value, marker.as_str())
}

/// [`has_own_marker`] for an arbitrary member name.
#[must_use]
pub fn has_own_flag(value: &Value, name: &str) -> bool {
    value
        .descriptor()
        .is_some_and(|d| matches!(d.own_member(name), Some(Value::Bool(true))))
}

/// Returns true if `value` itself carries `name` as boolean `true`.
pub(crate) fn has_instance_flag(value: &Value, name: &str) -> bool {
    matches!(value.own_property(name), Some(Value::Bool(true)))
}

/// Applies the static predicate `name` declared by the descriptor of
/// `value` to `value`. False when the descriptor declares no such static.
#[must_use]
pub fn static_predicate_holds(value: &Value, name: &str) -> bool {
    value
        .descriptor()
        .and_then(|d| d.static_predicate(name))
        .is_some_and(|p| p.test(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Object, TypeDescriptor};
    use std::sync::Arc;

    fn instance(desc: TypeDescriptor) -> Value {
        Value::from(Object::with_prototype(Arc::new(desc)))
    }

    #[test]
    fn own_marker_is_found() {
        let v = instance(TypeDescriptor::builder("Complex").marker(Marker::Complex).build());
        assert!(has_own_marker(&v, Marker::Complex));
        assert!(!has_own_marker(&v, Marker::Fraction));
    }

    #[test]
    fn inherited_marker_is_ignored() {
        let base = Arc::new(TypeDescriptor::builder("Base").marker(Marker::Complex).build());
        let v = instance(TypeDescriptor::builder("Derived").parent(base).build());
        assert!(!has_own_marker(&v, Marker::Complex));
    }

    #[test]
    fn instance_flag_is_ignored() {
        let v = Value::from(Object::plain().with("isComplex", true));
        assert!(!has_own_marker(&v, Marker::Complex));
        assert!(has_instance_flag(&v, "isComplex"));
    }

    #[test]
    fn non_boolean_marker_values_do_not_count() {
        let v = instance(TypeDescriptor::builder("T").member("isUnit", 1).build());
        assert!(!has_own_marker(&v, Marker::Unit));
        let v = instance(TypeDescriptor::builder("T").member("isUnit", "true").build());
        assert!(!has_own_marker(&v, Marker::Unit));
        let v = instance(TypeDescriptor::builder("T").member("isUnit", false).build());
        assert!(!has_own_marker(&v, Marker::Unit));
    }

    #[test]
    fn primitives_and_bare_objects_have_no_markers() {
        for v in [
            Value::Undefined,
            Value::Null,
            Value::Number(1.0),
            Value::from("isComplex"),
            Value::Array(vec![]),
            Value::from(Object::bare()),
        ] {
            assert!(!has_own_marker(&v, Marker::Complex));
        }
    }

    #[test]
    fn static_predicate_is_applied_to_the_value() {
        let v = instance(
            TypeDescriptor::builder("Decimal")
                .static_predicate(DECIMAL_STATIC, |x| x.is_instance_of("Decimal"))
                .build(),
        );
        assert!(static_predicate_holds(&v, DECIMAL_STATIC));
        assert!(!static_predicate_holds(&v, "isOther"));
        assert!(!static_predicate_holds(&Value::Null, DECIMAL_STATIC));
    }
}
