//! JSON catalog output and JSON value input.
//!
//! Input conventions for [`value_from_json`]:
//!
//! | JSON | Value |
//! |------|-------|
//! | `null`, booleans, numbers, strings, arrays | the matching primitive / array |
//! | `{"@type": "Complex", "re": 1}` | instance of the registered `Complex` type |
//! | `{"@number": "NaN"}` (also `"Infinity"`, `"-Infinity"`) | non-finite number |
//! | `{"@boxed": "text"}` | boxed primitive |
//! | `{"@bare": {...}}` | object without a type descriptor |
//! | `{"@undefined": true}` | absent value |
//! | any other object | object literal |

use serde_json::{json, Map, Value as Json};

use crate::model::{Boxed, Object, Value};
use crate::registry::TypeRegistry;

/// Errors raised while decoding a JSON document into a [`Value`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// `@type` names a type the registry does not know.
    #[error("unknown type `{0}` in `@type`")]
    UnknownType(String),
    /// `@type` is not a string.
    #[error("`@type` must be a string, found {0}")]
    InvalidTypeTag(String),
    /// `@number` is not one of the accepted spellings.
    #[error("`@number` must be \"NaN\", \"Infinity\" or \"-Infinity\", found {0}")]
    InvalidNumber(String),
    /// `@boxed` does not wrap a primitive.
    #[error("`@boxed` must wrap a string, number or boolean, found {0}")]
    InvalidBoxed(String),
    /// `@bare` does not wrap an object.
    #[error("`@bare` must wrap an object, found {0}")]
    InvalidBare(String),
}

/// Serializes every descriptor of `registry` to a JSON catalog.
#[must_use]
pub fn registry_to_json(registry: &TypeRegistry) -> Json {
    let types: Vec<Json> = registry
        .iter()
        .map(|d| {
            let markers: Vec<&str> = d.markers().map(|m| m.as_str()).collect();
            let statics: Vec<&str> = d.statics().collect();
            json!({
                "@type": "TypeDescriptor",
                "name": d.name(),
                "comment": d.comment(),
                "parent": d.parent().map(|p| p.name()),
                "markers": markers,
                "statics": statics,
            })
        })
        .collect();
    json!({ "types": types })
}

/// Decodes a JSON document into a [`Value`], resolving `@type` names
/// against `registry`.
///
/// # Errors
///
/// Returns a [`DecodeError`] when a tagged object is malformed or names an
/// unregistered type.
pub fn value_from_json(doc: &Json, registry: &TypeRegistry) -> Result<Value, DecodeError> {
    Ok(match doc {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => Value::Number(number(n)),
        Json::String(s) => Value::Str(s.clone()),
        Json::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| value_from_json(item, registry))
                .collect::<Result<_, _>>()?,
        ),
        Json::Object(map) => object_from_json(map, registry)?,
    })
}

fn object_from_json(map: &Map<String, Json>, registry: &TypeRegistry) -> Result<Value, DecodeError> {
    if map.len() == 1 {
        if let Some(tagged) = single_tag(map)? {
            return Ok(tagged);
        }
        if let Some(inner) = map.get("@bare") {
            let Json::Object(inner) = inner else {
                return Err(DecodeError::InvalidBare(inner.to_string()));
            };
            return fill(Object::bare(), inner, registry).map(Value::Object);
        }
    }

    let base = match map.get("@type") {
        None => Object::plain(),
        Some(Json::String(name)) => {
            let descriptor = registry
                .get(name)
                .ok_or_else(|| DecodeError::UnknownType(name.clone()))?;
            Object::with_prototype(std::sync::Arc::clone(descriptor))
        }
        Some(other) => return Err(DecodeError::InvalidTypeTag(other.to_string())),
    };
    fill(base, map, registry).map(Value::Object)
}

fn single_tag(map: &Map<String, Json>) -> Result<Option<Value>, DecodeError> {
    if let Some(spelling) = map.get("@number") {
        let n = match spelling.as_str() {
            Some("NaN") => f64::NAN,
            Some("Infinity") => f64::INFINITY,
            Some("-Infinity") => f64::NEG_INFINITY,
            _ => return Err(DecodeError::InvalidNumber(spelling.to_string())),
        };
        return Ok(Some(Value::Number(n)));
    }
    if let Some(inner) = map.get("@boxed") {
        let boxed = match inner {
            Json::String(s) => Boxed::Str(s.clone()),
            Json::Number(n) => Boxed::Number(number(n)),
            Json::Bool(b) => Boxed::Bool(*b),
            other => return Err(DecodeError::InvalidBoxed(other.to_string())),
        };
        return Ok(Some(Value::Boxed(boxed)));
    }
    if map.contains_key("@undefined") {
        return Ok(Some(Value::Undefined));
    }
    Ok(None)
}

fn fill(
    mut obj: Object,
    map: &Map<String, Json>,
    registry: &TypeRegistry,
) -> Result<Object, DecodeError> {
    for (key, value) in map {
        if key == "@type" {
            continue;
        }
        obj.insert(key.clone(), value_from_json(value, registry)?);
    }
    Ok(obj)
}

// `as_f64` is always `Some` unless serde_json's `arbitrary_precision` is on.
fn number(n: &serde_json::Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}
