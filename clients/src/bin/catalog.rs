//! `mathkind-catalog` — Writes the built-in type registry as a JSON catalog.
//!
//! **Outputs:**
//! - `<out>/mathkind.types.json` — one node per registered descriptor
//!
//! **Usage:**
//! ```
//! mathkind-catalog [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mathkind::serializer::json::registry_to_json;
use mathkind::TypeRegistry;

/// Write the mathkind type catalog.
#[derive(Parser)]
#[command(name = "mathkind-catalog", about = "Write the mathkind type catalog")]
struct Args {
    /// Output directory for the catalog.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// Log at debug level unless MATHKIND_LOG says otherwise.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    mathkind_clients::init_logging(args.verbose);
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let registry = TypeRegistry::builtin();
    println!("mathkind registry: {} types", registry.len());

    let json_path = out.join("mathkind.types.json");
    let json_str = serde_json::to_string_pretty(&registry_to_json(registry))
        .context("Failed to serialize type catalog")?;
    fs::write(&json_path, &json_str)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;
    tracing::info!(path = %json_path.display(), bytes = json_str.len(), "catalog written");
    println!("  Written: {}", json_path.display());

    Ok(())
}
