//! Taxonomy structure validator.
//!
//! Checks the descriptors of a registry without classifying anything:
//! - Parents must be the registered descriptor of the same name
//! - Members named like a marker must hold booleans
//! - A refinement (DenseMatrix, SparseMatrix) must also declare Matrix
//! - No descriptor declares both refinements
//! - No descriptor declares more than one base kind; an `isDecimal` static
//!   counts as BigNumber
//! - Statics named like markers are never consulted (warning)

use std::sync::Arc;

use mathkind::{Marker, TypeDescriptor, TypeRegistry, Value, DECIMAL_STATIC};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "taxonomy";

/// Validates the structure of every descriptor in `registry`.
#[must_use]
pub fn validate(registry: &TypeRegistry) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    report.push(TestResult::from_violations(
        VALIDATOR,
        "All parents are registered descriptors",
        "Descriptors with unregistered parents",
        check_parents(registry),
    ));
    report.push(TestResult::from_violations(
        VALIDATOR,
        "All marker members hold booleans",
        "Marker members holding non-boolean values",
        check_marker_values(registry),
    ));
    report.push(TestResult::from_violations(
        VALIDATOR,
        "All refinements declare Matrix and at most one refinement",
        "Malformed matrix refinements",
        check_refinements(registry),
    ));
    report.push(TestResult::from_violations(
        VALIDATOR,
        "No descriptor declares more than one base kind",
        "Descriptors declaring several base kinds",
        check_exclusive(registry),
    ));

    let ignored = check_ignored_statics(registry);
    if ignored.is_empty() {
        report.push(TestResult::pass(VALIDATOR, "No ignored marker-like statics"));
    } else {
        report.push(
            TestResult::warn(VALIDATOR, "Statics the classifier never consults")
                .with_details(ignored),
        );
    }

    report
}

fn check_parents(registry: &TypeRegistry) -> Vec<String> {
    let mut violations = Vec::new();
    for descriptor in registry.iter() {
        let Some(parent) = descriptor.parent() else {
            continue;
        };
        match registry.get(parent.name()) {
            Some(registered) if Arc::ptr_eq(registered, parent) => {}
            Some(_) => violations.push(format!(
                "{} has a parent {} that is not the registered descriptor of that name",
                descriptor.name(),
                parent.name()
            )),
            None => violations.push(format!(
                "{} has unregistered parent {}",
                descriptor.name(),
                parent.name()
            )),
        }
    }
    violations
}

fn check_marker_values(registry: &TypeRegistry) -> Vec<String> {
    let mut violations = Vec::new();
    for descriptor in registry.iter() {
        for (name, value) in descriptor.members() {
            if Marker::from_name(name).is_some() && !matches!(value, Value::Bool(_)) {
                violations.push(format!(
                    "{}.{} holds a {} instead of a boolean",
                    descriptor.name(),
                    name,
                    value.kind_name()
                ));
            }
        }
    }
    violations
}

fn check_refinements(registry: &TypeRegistry) -> Vec<String> {
    let mut violations = Vec::new();
    for descriptor in registry.iter() {
        let refinements: Vec<Marker> = descriptor.markers().filter(|m| m.is_refinement()).collect();
        if refinements.is_empty() {
            continue;
        }
        if !descriptor.declares(Marker::Matrix) {
            violations.push(format!(
                "{} declares {} without declaring isMatrix",
                descriptor.name(),
                join(&refinements)
            ));
        }
        if refinements.len() > 1 {
            violations.push(format!(
                "{} declares both refinements: {}",
                descriptor.name(),
                join(&refinements)
            ));
        }
    }
    violations
}

fn check_exclusive(registry: &TypeRegistry) -> Vec<String> {
    let mut violations = Vec::new();
    for descriptor in registry.iter() {
        let kinds = base_kinds(descriptor);
        if kinds.len() > 1 {
            violations.push(format!("{} declares {}", descriptor.name(), join(&kinds)));
        }
    }
    violations
}

fn check_ignored_statics(registry: &TypeRegistry) -> Vec<String> {
    let mut ignored = Vec::new();
    for descriptor in registry.iter() {
        for name in descriptor.statics() {
            if name != DECIMAL_STATIC && Marker::from_name(name).is_some() {
                ignored.push(format!("{}.{} (static)", descriptor.name(), name));
            }
        }
    }
    ignored
}

fn base_kinds(descriptor: &TypeDescriptor) -> Vec<Marker> {
    let mut kinds: Vec<Marker> = Marker::EXCLUSIVE
        .into_iter()
        .filter(|m| descriptor.declares(*m))
        .collect();
    if descriptor.static_predicate(DECIMAL_STATIC).is_some() && !kinds.contains(&Marker::BigNumber) {
        kinds.insert(0, Marker::BigNumber);
    }
    kinds
}

fn join(markers: &[Marker]) -> String {
    markers
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
