//! mathkind conformance suite.
//!
//! Validates a [`TypeRegistry`] against the rules the classifier relies on:
//! descriptors declare their markers themselves, refinements also declare
//! Matrix, at most one base kind per type, and classification of instances
//! agrees with the declarations.
//!
//! # Entry Point
//!
//! ```
//! use mathkind::TypeRegistry;
//! use mathkind_conformance::run_all;
//!
//! let report = run_all(TypeRegistry::builtin());
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use mathkind::TypeRegistry;

pub use report::{ConformanceReport, Severity, TestResult};

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Taxonomy structure (parents, marker values, refinements, exclusivity)
/// 2. Classification of instances and forged objects
#[must_use]
pub fn run_all(registry: &TypeRegistry) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    report.extend(validators::taxonomy::validate(registry));
    report.extend(validators::classification::validate(registry));

    tracing::info!(
        types = registry.len(),
        checks = report.results.len(),
        failures = report.failure_count(),
        "conformance run finished"
    );
    report
}

#[cfg(test)]
mod tests_unit {
    use super::*;
    use mathkind::{Marker, TypeDescriptor};

    #[test]
    fn builtin_registry_passes() {
        let report = run_all(TypeRegistry::builtin());
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "Conformance failures: {:#?}", failures);
    }

    #[test]
    fn malformed_registry_fails() {
        let mut registry = TypeRegistry::new();
        let registered = registry.register(
            TypeDescriptor::builder("Hybrid")
                .marker(Marker::Complex)
                .marker(Marker::Unit)
                .build(),
        );
        assert!(registered.is_ok());
        assert!(!run_all(&registry).all_passed());
    }
}
