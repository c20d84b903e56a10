//! Classification validator.
//!
//! Instantiates every registered descriptor and classifies the instances
//! together with a fixed set of probes (primitives, arrays, and object
//! literals carrying forged marker flags):
//! - Every declared marker is recognized on the instance
//! - At most one of Number, Complex, Fraction, Unit, Matrix holds
//! - DenseMatrix and SparseMatrix never hold together
//! - Forged object literals match no variant
//! - Every predicate is idempotent

use mathkind::classify::{self, Variant};
use mathkind::{Marker, Object, TypeRegistry, Value};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "classification";

const BASE_KINDS: [Variant; 5] = [
    Variant::Number,
    Variant::Complex,
    Variant::Fraction,
    Variant::Unit,
    Variant::Matrix,
];

/// Classifies instances of every descriptor in `registry` and checks the
/// results against the declarations.
#[must_use]
pub fn validate(registry: &TypeRegistry) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let mut instances: Vec<(String, Value)> = Vec::new();
    for descriptor in registry.iter() {
        let instance = Value::from(Object::with_prototype(std::sync::Arc::clone(descriptor)));
        instances.push((descriptor.name().to_owned(), instance));
    }

    let mut declared = Vec::new();
    for ((name, instance), descriptor) in instances.iter().zip(registry.iter()) {
        for marker in descriptor.markers() {
            if !Variant::from(marker).matches(instance) {
                declared.push(format!("{name} declares {marker} but is not classified as such"));
            }
        }
    }
    report.push(TestResult::from_violations(
        VALIDATOR,
        "Every declared marker is recognized on instances",
        "Declared markers not recognized",
        declared,
    ));

    let mut probes = primitive_probes();
    probes.extend(instances.iter().cloned());

    let mut exclusive = Vec::new();
    for (name, value) in &probes {
        let base: Vec<&str> = BASE_KINDS
            .into_iter()
            .filter(|v| v.matches(value))
            .map(Variant::name)
            .collect();
        if base.len() > 1 {
            exclusive.push(format!("{name} is classified as {}", base.join(", ")));
        }
        if classify::is_dense_matrix(value) && classify::is_sparse_matrix(value) {
            exclusive.push(format!("{name} is both DenseMatrix and SparseMatrix"));
        }
    }
    report.push(TestResult::from_violations(
        VALIDATOR,
        "Base kinds and matrix refinements are mutually exclusive",
        "Values classified as several exclusive kinds",
        exclusive,
    ));

    let forged = forged_probes();
    let mut spoofed = Vec::new();
    for (name, value) in &forged {
        let hits = classify::variants_of(value);
        if !hits.is_empty() {
            let hits: Vec<&str> = hits.into_iter().map(Variant::name).collect();
            spoofed.push(format!("{name} is classified as {}", hits.join(", ")));
        }
    }
    report.push(TestResult::from_violations(
        VALIDATOR,
        "Instance-level flags never classify object literals",
        "Object literals spoofed a variant",
        spoofed,
    ));

    probes.extend(forged);
    let mut unstable = Vec::new();
    for (name, value) in &probes {
        for variant in Variant::ALL {
            if variant.matches(value) != variant.matches(value) {
                unstable.push(format!("{}({name}) changed between calls", variant.name()));
            }
        }
    }
    report.push(TestResult::from_violations(
        VALIDATOR,
        "All predicates are idempotent",
        "Predicates gave different answers on repeated calls",
        unstable,
    ));

    report
}

fn primitive_probes() -> Vec<(String, Value)> {
    vec![
        ("undefined".into(), Value::Undefined),
        ("null".into(), Value::Null),
        ("true".into(), Value::Bool(true)),
        ("0".into(), Value::Number(0.0)),
        ("NaN".into(), Value::Number(f64::NAN)),
        ("-Infinity".into(), Value::Number(f64::NEG_INFINITY)),
        ("\"text\"".into(), Value::from("text")),
        ("[]".into(), Value::Array(vec![])),
        ("{}".into(), Value::from(Object::plain())),
        ("bare object".into(), Value::from(Object::bare())),
    ]
}

fn forged_probes() -> Vec<(String, Value)> {
    let mut probes: Vec<(String, Value)> = Marker::ALL
        .into_iter()
        .map(|m| {
            (
                format!("{{{m}: true}}"),
                Value::from(Object::plain().with(m.as_str(), true)),
            )
        })
        .collect();
    let mut all = Object::plain();
    for m in Marker::ALL {
        all.insert(m.as_str(), true);
    }
    probes.push(("object literal with every marker".into(), Value::from(all)));
    probes
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathkind::TypeDescriptor;

    #[test]
    fn forged_probes_cover_every_marker() {
        assert_eq!(forged_probes().len(), Marker::ALL.len() + 1);
    }

    #[test]
    fn builtin_registry_classifies_cleanly() {
        let report = validate(TypeRegistry::builtin());
        assert!(report.all_passed(), "{:#?}", report.results);
    }

    #[test]
    fn overlapping_kinds_are_reported() {
        let mut registry = TypeRegistry::new();
        let registered = registry.register(
            TypeDescriptor::builder("ComplexFraction")
                .marker(Marker::Complex)
                .marker(Marker::Fraction)
                .build(),
        );
        assert!(registered.is_ok());
        let report = validate(&registry);
        let failed: Vec<&str> = report
            .results
            .iter()
            .filter(|r| r.is_failure())
            .map(|r| r.message.as_str())
            .collect();
        assert_eq!(failed, vec!["Values classified as several exclusive kinds"]);
    }
}
