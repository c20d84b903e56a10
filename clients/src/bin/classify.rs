//! `mathkind-classify` — Classifies the values in a JSON document.
//!
//! Objects tagged with `"@type": "<name>"` become instances of the named
//! built-in type; see `mathkind::serializer::json` for the other tags. A
//! top-level array is classified element by element and is not itself
//! reported as `Array` or `Collection`; wrap it (`[[1, 2]]`) to classify the
//! array as a whole.
//!
//! **Usage:**
//! ```
//! mathkind-classify [--input <file>] [--format text|json]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mathkind::classify::{variants_of, Variant};
use mathkind::{TypeRegistry, Value};
use mathkind_clients::decode_values;
use serde_json::json;

/// Output format.
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One line per value.
    Text,
    /// A JSON array of results.
    Json,
}

/// Classify values against the mathkind taxonomy.
#[derive(Parser)]
#[command(
    name = "mathkind-classify",
    about = "Classify the values of a JSON document against the mathkind taxonomy"
)]
struct Args {
    /// JSON document to read (default: stdin).
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Log at debug level unless MATHKIND_LOG says otherwise.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    mathkind_clients::init_logging(args.verbose);

    let source = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    let doc: serde_json::Value =
        serde_json::from_str(&source).context("Input is not valid JSON")?;

    let registry = TypeRegistry::builtin();
    let values = decode_values(&doc, registry).context("Failed to decode input")?;
    tracing::debug!(count = values.len(), "classifying values");

    let results: Vec<(&Value, Vec<Variant>)> = values.iter().map(|v| (v, variants_of(v))).collect();

    match args.format {
        Format::Text => {
            for (i, (value, variants)) in results.iter().enumerate() {
                let names: Vec<&str> = variants.iter().map(|v| v.name()).collect();
                let shown = if names.is_empty() {
                    "(none)".to_owned()
                } else {
                    names.join(", ")
                };
                println!("[{i}] {:<9} {}{}", value.kind_name(), type_label(value), shown);
            }
        }
        Format::Json => {
            let out: Vec<serde_json::Value> = results
                .iter()
                .enumerate()
                .map(|(i, (value, variants))| {
                    json!({
                        "index": i,
                        "kind": value.kind_name(),
                        "type": value.descriptor().map(|d| d.name()),
                        "variants": variants,
                    })
                })
                .collect();
            let text =
                serde_json::to_string_pretty(&out).context("Failed to serialize results")?;
            println!("{text}");
        }
    }

    Ok(())
}

fn type_label(value: &Value) -> String {
    value
        .descriptor()
        .map(|d| format!("<{}> ", d.name()))
        .unwrap_or_default()
}
