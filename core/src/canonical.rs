//! Canonical form of nested request payloads.
//!
//! A payload is flattened into a map of dotted keys to scalar values:
//!
//! ```text
//! {"a": {"b": 1}, "items": [{"id": 1}, {"id": 2}]}
//! => a.b=1, items0.id=1, items1.id=2
//! ```
//!
//! Nested object keys are joined with `.`; array elements append their
//! zero based index to the parent key without any separator. The server side
//! verifier uses exactly this convention, so it must not be changed.

use std::borrow::Cow;
use std::collections::BTreeMap;

use log::warn;
use serde_json::Value;

use crate::{Error, Result};

/// Flattened payload sorted by key in byte order.
///
/// Values are always scalars: string, number, bool or null.
pub type CanonicalForm = BTreeMap<String, Value>;

/// Flatten a nested value into its canonical form.
///
/// Object fields are visited in insertion order. If two different paths
/// produce the same key (for example `{"a.b": 1}` next to `{"a": {"b": 2}}`),
/// the value visited last wins.
pub fn flatten(value: &Value) -> CanonicalForm {
    let mut out = CanonicalForm::new();
    visit(value, "", &mut out, &mut |key: &str| {
        warn!("canonical key {key} is produced more than once, later value wins");
        Ok(())
    })
    // The collision handler above never fails.
    .unwrap_or_default();
    out
}

/// Flatten a nested value, failing on key collisions instead of overwriting.
pub fn flatten_strict(value: &Value) -> Result<CanonicalForm> {
    let mut out = CanonicalForm::new();
    visit(value, "", &mut out, &mut |key: &str| {
        Err(Error::signing_input(format!(
            "canonical key {key} is produced by more than one field"
        )))
    })?;
    Ok(out)
}

fn visit(
    value: &Value,
    key: &str,
    out: &mut CanonicalForm,
    on_collision: &mut impl FnMut(&str) -> Result<()>,
) -> Result<()> {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let child = if key.is_empty() {
                    k.clone()
                } else {
                    format!("{key}.{k}")
                };
                visit(v, &child, out, on_collision)?;
            }
        }
        Value::Array(items) => {
            for (idx, v) in items.iter().enumerate() {
                visit(v, &format!("{key}{idx}"), out, on_collision)?;
            }
        }
        scalar => {
            if out.contains_key(key) {
                on_collision(key)?;
            }
            out.insert(key.to_string(), scalar.clone());
        }
    }

    Ok(())
}

/// Render a scalar value the way it appears in the string to sign.
///
/// The server verifies against Python's `str()` of each value: strings are
/// used verbatim (no quotes), booleans and null are `True`, `False` and
/// `None`, and floats follow Python's shortest repr (`1.5`, `1e+20`).
pub fn scalar_to_string(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => Cow::Owned(float_to_string(f)),
            _ => Cow::Owned(n.to_string()),
        },
        Value::Bool(true) => Cow::Borrowed("True"),
        Value::Bool(false) => Cow::Borrowed("False"),
        Value::Null => Cow::Borrowed("None"),
        // Containers never reach a canonical form, keep a stable rendering anyway.
        other => Cow::Owned(other.to_string()),
    }
}

/// Format a float like Python's `repr`.
///
/// Positional notation is used for exponents in `-4..16`, scientific
/// notation with a signed, two digit exponent otherwise.
fn float_to_string(f: f64) -> String {
    let sign = if f.is_sign_negative() { "-" } else { "" };
    // `{:e}` yields the shortest round trip digits, e.g. `1.5e-5`.
    let sci = format!("{:e}", f.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or_default();
    let digits = mantissa.replace('.', "");

    if !(-4..16).contains(&exp) {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return format!("{sign}{mantissa}e{exp_sign}{:02}", exp.abs());
    }

    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("{sign}0.{zeros}{digits}");
    }

    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{sign}{digits}{zeros}.0")
    } else {
        format!("{sign}{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

/// Join a canonical form into `k1=v1{join}k2=v2...`.
///
/// ```
/// use rayvision_core::canonical::{flatten, join_pairs};
/// use serde_json::json;
///
/// let form = flatten(&json!({"b": 1, "a": {"y": 2, "x": 3}}));
/// assert_eq!(join_pairs(&form, "&"), "a.x=3&a.y=2&b=1");
/// ```
pub fn join_pairs(form: &CanonicalForm, join: &str) -> String {
    let mut s = String::with_capacity(16);

    for (idx, (k, v)) in form.iter().enumerate() {
        if idx != 0 {
            s.push_str(join);
        }

        s.push_str(k);
        s.push('=');
        s.push_str(&scalar_to_string(v));
    }

    s
}
