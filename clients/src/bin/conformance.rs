//! `mathkind-conformance` — Validates the built-in type registry.
//!
//! Runs the conformance suite across:
//! - Taxonomy structure (parents, marker values, refinements, base kinds)
//! - Classification of instances and forged object literals
//!
//! **Usage:**
//! ```
//! mathkind-conformance [--verbose]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::Result;
use clap::Parser;
use mathkind::TypeRegistry;
use mathkind_conformance::{run_all, Severity};

/// Run the mathkind conformance suite.
#[derive(Parser)]
#[command(
    name = "mathkind-conformance",
    about = "Validate the mathkind type registry against the marker taxonomy"
)]
struct Args {
    /// Log at debug level unless MATHKIND_LOG says otherwise.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    mathkind_clients::init_logging(args.verbose);

    let report = run_all(TypeRegistry::builtin());

    println!("mathkind Conformance Report");
    println!("===========================");
    println!();

    for result in &report.results {
        println!("[{}] {} — {}", result.severity.label(), result.validator, result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let passed = report.count(Severity::Pass);
    let warned = report.count(Severity::Warning);
    let failed = report.failure_count();

    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        passed, warned, failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
