use serde_json::{Map, Value};

/// Wrap encoded content as `{ident: content}`.
pub fn wrap_type_tag(ident: impl Into<String>, content: Value) -> Value {
	let mut tag = Map::with_capacity(1);
	tag.insert(ident.into(), content);
	Value::Object(tag)
}

/// Split a single-key object into `(ident, content)`.
///
/// Returns `None` for anything that is not an object with exactly one key.
pub fn split_type_tag(json: &Value) -> Option<(&str, &Value)> {
	let Value::Object(entries) = json else {
		return None;
	};
	if entries.len() != 1 {
		return None;
	}
	entries.iter().next().map(|(ident, content)| (ident.as_str(), content))
}

/// Number of keys a wrapper candidate carries, for error reporting.
pub(crate) fn wrapper_key_count(json: &Value) -> usize {
	json.as_object().map_or(0, |entries| entries.len())
}
