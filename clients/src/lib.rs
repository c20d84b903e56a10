//! Shared setup for the mathkind client binaries: logging and input decoding.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use mathkind::serializer::json::{value_from_json, DecodeError};
use mathkind::{TypeRegistry, Value};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "MATHKIND_LOG";

/// Installs a stderr subscriber filtered by [`LOG_ENV`].
///
/// Falls back to `warn`, or to `debug` when `verbose` is set.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Decodes the values a classify run reports on.
///
/// A top-level array is split into its elements, so the array itself is
/// never reported; wrap it in another array (`[[1, 2]]`) to classify it as a
/// whole. Any other document yields a single value.
///
/// # Errors
///
/// Returns the [`DecodeError`] of the first malformed tagged object.
pub fn decode_values(
    doc: &serde_json::Value,
    registry: &TypeRegistry,
) -> Result<Vec<Value>, DecodeError> {
    Ok(match value_from_json(doc, registry)? {
        Value::Array(items) => items,
        single => vec![single],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathkind::classify::{is_array, is_collection, is_complex, is_number};
    use serde_json::json;

    fn decode(doc: serde_json::Value) -> Vec<Value> {
        decode_values(&doc, TypeRegistry::builtin()).unwrap_or_default()
    }

    #[test]
    fn top_level_array_is_split() {
        let values = decode(json!([1, {"@type": "Complex"}, [2]]));
        assert_eq!(values.len(), 3);
        assert!(is_number(&values[0]));
        assert!(is_complex(&values[1]));
        assert!(is_array(&values[2]));
    }

    #[test]
    fn nested_array_is_classified_whole() {
        let values = decode(json!([[1, 2]]));
        assert_eq!(values.len(), 1);
        assert!(is_collection(&values[0]));
    }

    #[test]
    fn scalar_document_is_one_value() {
        let values = decode(json!("text"));
        assert_eq!(values.len(), 1);
        assert!(!is_array(&values[0]));
    }

    #[test]
    fn decode_errors_propagate() {
        let doc = json!([{"@type": "Quaternion"}]);
        let err = decode_values(&doc, TypeRegistry::builtin()).err();
        assert_eq!(err, Some(DecodeError::UnknownType("Quaternion".into())));
    }
}
