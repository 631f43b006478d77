use std::path::Path;

use polyjson::codec::{Result, split_type_tag};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Read and parse a JSON document.
pub(crate) fn load_json(path: &Path) -> Result<Value> {
	let bytes = std::fs::read(path)?;
	debug!(path = %path.display(), bytes = bytes.len(), "loaded document");
	Ok(serde_json::from_slice(&bytes)?)
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize + ?Sized>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// Selects which single-key objects count as type-tag wrappers.
///
/// With no identifiers, any single-key object whose content is an object
/// qualifies; otherwise the key must be one of the identifiers.
#[derive(Debug, Default, Clone)]
pub(crate) struct IdentFilter {
	idents: Vec<String>,
}

impl IdentFilter {
	pub(crate) fn new(idents: Vec<String>) -> Self {
		Self { idents }
	}

	/// Split `json` into `(ident, content)` when it is a matching wrapper.
	pub(crate) fn wrapper<'a>(&self, json: &'a Value) -> Option<(&'a str, &'a Value)> {
		let (ident, content) = split_type_tag(json)?;
		let selected = if self.idents.is_empty() {
			content.is_object()
		} else {
			self.idents.iter().any(|wanted| wanted == ident)
		};
		selected.then_some((ident, content))
	}
}

/// Append one reference token to a JSON Pointer.
pub(crate) fn pointer_push(base: &str, token: &str) -> String {
	let escaped = token.replace('~', "~0").replace('/', "~1");
	format!("{base}/{escaped}")
}

/// JSON type label of a value.
pub(crate) fn value_kind(json: &Value) -> &'static str {
	match json {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::{IdentFilter, pointer_push};

	#[test]
	fn pointer_tokens_are_escaped() {
		assert_eq!(pointer_push("", "Stages"), "/Stages");
		assert_eq!(pointer_push("/Stages", "a/b~c"), "/Stages/a~1b~0c");
	}

	#[test]
	fn default_filter_requires_object_content() {
		let filter = IdentFilter::default();
		assert!(filter.wrapper(&json!({"TypeX": {"FastLimit": 0.3}})).is_some());
		assert!(filter.wrapper(&json!({"Alpha": 0.25})).is_none());
		assert!(filter.wrapper(&json!({"a": {}, "b": {}})).is_none());
	}

	#[test]
	fn explicit_idents_accept_any_content() {
		let filter = IdentFilter::new(vec!["i64".to_owned()]);
		assert_eq!(filter.wrapper(&json!({"i64": 5})).map(|(ident, _)| ident), Some("i64"));
		assert!(filter.wrapper(&json!({"TypeX": {}})).is_none());
	}
}
