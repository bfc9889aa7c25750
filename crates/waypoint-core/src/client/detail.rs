//! Extraction of the `detail` field from error bodies.

use serde_json::Value;

/// Reads the `detail` of an error body, if there is a usable one.
///
/// String details are used as-is. FastAPI validation failures send a list of
/// `{loc, msg}` objects, which are rendered as `loc: msg` joined by `; `.
/// Anything else is rendered as compact JSON. Bodies that are not JSON, or
/// have no `detail`, yield `None`.
pub(crate) fn extract_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let detail = match value.get("detail")? {
        Value::Null => return None,
        Value::String(detail) => detail.trim().to_string(),
        Value::Array(items) => {
            validation_messages(items).unwrap_or_else(|| Value::Array(items.clone()).to_string())
        }
        other => other.to_string(),
    };
    (!detail.is_empty()).then_some(detail)
}

fn validation_messages(items: &[Value]) -> Option<String> {
    let messages = items
        .iter()
        .map(|item| {
            let msg = item.get("msg")?.as_str()?;
            let loc = item
                .get("loc")
                .and_then(Value::as_array)
                .map(|parts| {
                    parts
                        .iter()
                        .map(|part| match part {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .collect::<Vec<_>>()
                        .join(".")
                })
                .unwrap_or_default();
            Some(if loc.is_empty() {
                msg.to_string()
            } else {
                format!("{loc}: {msg}")
            })
        })
        .collect::<Option<Vec<_>>>()?;
    (!messages.is_empty()).then(|| messages.join("; "))
}
