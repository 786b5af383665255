//! Scale lookup with literal passthrough.

use serde_json::Value;

use crate::util::get_path;

/// Resolves a raw prop value against a scale.
///
/// - Mapping scale: string keys look up directly, dotted keys
///   (`"gray.100"`) traverse nested entries, numbers look up their decimal
///   form.
/// - Sequence scale: non-negative in-range integers index the sequence.
/// - Everything else returns the raw value unchanged, so raw CSS values
///   (`"10px"`, `"#fff"`) flow through untouched.
///
/// Unknown keys and out-of-range indices fall back to passthrough rather
/// than erroring.
///
/// # Example
///
/// ```rust
/// use restyle::resolve_scale;
/// use serde_json::json;
///
/// let colors = json!({ "primary": "rebeccapurple" });
///
/// assert_eq!(
///     resolve_scale(&json!("primary"), Some(&colors)),
///     json!("rebeccapurple")
/// );
/// assert_eq!(resolve_scale(&json!("#fff"), Some(&colors)), json!("#fff"));
/// ```
pub fn resolve_scale(raw: &Value, scale: Option<&Value>) -> Value {
    match scale {
        Some(lookup @ Value::Object(_)) => {
            let key = match raw {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            };
            match key.and_then(|k| get_path(lookup, &k)) {
                Some(found) => found.clone(),
                None => raw.clone(),
            }
        }
        Some(Value::Array(items)) => {
            let found = raw
                .as_u64()
                .and_then(|index| items.get(index as usize));
            match found {
                Some(found) => found.clone(),
                None => raw.clone(),
            }
        }
        _ => raw.clone(),
    }
}
