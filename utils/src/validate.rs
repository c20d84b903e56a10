//! Ad-hoc validation predicates.
//!
//! Each check is independent of the marker protocol and total over every
//! [`Value`]. Properties are read the way ordinary member access reads them
//! (instance first, then the descriptor chain).

use std::sync::OnceLock;

use mathkind::Value;
use regex::Regex;

fn finite(v: Option<&Value>) -> Option<f64> {
    v.and_then(Value::as_number).filter(|n| n.is_finite())
}

/// An object with finite numeric `start` and `end`, `start <= end`.
#[must_use]
pub fn is_range(x: &Value) -> bool {
    match (finite(x.get("start")), finite(x.get("end"))) {
        (Some(start), Some(end)) => start <= end,
        _ => false,
    }
}

/// A non-negative, even, integral number.
#[must_use]
pub fn is_even_index(x: &Value) -> bool {
    x.as_number()
        .is_some_and(|n| n.is_finite() && n.fract() == 0.0 && n >= 0.0 && n % 2.0 == 0.0)
}

/// A primitive boolean.
#[must_use]
pub fn is_boolean(x: &Value) -> bool {
    matches!(x, Value::Bool(_))
}

/// An object whose `values` is a non-empty array of finite numbers with a
/// non-zero mean.
#[must_use]
pub fn is_result_set(x: &Value) -> bool {
    let Some(values) = x.get("values").and_then(Value::as_array) else {
        return false;
    };
    if values.is_empty() {
        return false;
    }
    let numbers: Option<Vec<f64>> = values.iter().map(|v| finite(Some(v))).collect();
    numbers.is_some_and(|ns| mean(&ns) != 0.0)
}

/// An object whose `text` is longer than five characters and starts with an
/// ASCII uppercase letter.
#[must_use]
pub fn is_help(x: &Value) -> bool {
    static LEADING_UPPER: OnceLock<Option<Regex>> = OnceLock::new();
    let Some(re) = LEADING_UPPER.get_or_init(|| Regex::new("^[A-Z]").ok()) else {
        return false;
    };
    x.get("text")
        .and_then(Value::as_str)
        .is_some_and(|text| text.encode_utf16().count() > 5 && re.is_match(text))
}

/// A function that returns a finite number when called with `0`.
#[must_use]
pub fn is_numeric_function(x: &Value) -> bool {
    match x {
        Value::Function(f) => finite(Some(&f.call(&Value::Number(0.0)))).is_some(),
        _ => false,
    }
}

/// A valid date that is not in the future.
#[must_use]
pub fn is_past_date(x: &Value) -> bool {
    match x {
        Value::Date(millis) => {
            let now = chrono::Utc::now().timestamp_millis() as f64;
            !millis.is_nan() && *millis <= now
        }
        _ => false,
    }
}

/// A regular expression with a non-empty pattern.
#[must_use]
pub fn is_regexp(x: &Value) -> bool {
    matches!(x, Value::RegExp(re) if !re.as_str().is_empty())
}

/// An object literal with at least one own property holding a non-zero
/// number.
#[must_use]
pub fn is_nonzero_object(x: &Value) -> bool {
    x.as_object().is_some_and(|obj| {
        obj.properties()
            .any(|(_, v)| v.as_number().is_some_and(|n| n.abs() > 0.0))
    })
}

/// Explicit null.
#[must_use]
pub fn is_null(x: &Value) -> bool {
    matches!(x, Value::Null)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
