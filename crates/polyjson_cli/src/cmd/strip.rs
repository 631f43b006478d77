use std::path::PathBuf;

use polyjson::codec::Result;
use serde_json::Value;
use tracing::debug;

use crate::cmd::util::{IdentFilter, load_json};

/// Print a document with matching wrappers replaced by their content.
pub fn run(path: PathBuf, idents: Vec<String>, pretty: bool) -> Result<()> {
	let doc = load_json(&path)?;
	let filter = IdentFilter::new(idents);

	let mut stripped = 0_usize;
	let plain = strip_tags(&doc, &filter, &mut stripped);
	debug!(stripped, "stripped type tags");

	let text = if pretty {
		serde_json::to_string_pretty(&plain)?
	} else {
		serde_json::to_string(&plain)?
	};
	println!("{text}");
	Ok(())
}

/// Copy of `json` with every matching wrapper, at any depth, replaced by its content.
pub(crate) fn strip_tags(json: &Value, filter: &IdentFilter, stripped: &mut usize) -> Value {
	if let Some((_, content)) = filter.wrapper(json) {
		*stripped += 1;
		return strip_tags(content, filter, stripped);
	}

	match json {
		Value::Object(entries) => Value::Object(
			entries
				.iter()
				.map(|(key, item)| (key.clone(), strip_tags(item, filter, stripped)))
				.collect(),
		),
		Value::Array(items) => Value::Array(items.iter().map(|item| strip_tags(item, filter, stripped)).collect()),
		other => other.clone(),
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::strip_tags;
	use crate::cmd::util::IdentFilter;

	#[test]
	fn nested_wrappers_are_removed() {
		let doc = json!({
			"Name": "ingest",
			"Stages": {
				"decode": {"Calculator": {"MovingAverage": {"Ema": {"Alpha": 0.25}}, "Inertia": 0.5}},
				"idle": null
			}
		});

		let mut stripped = 0;
		let plain = strip_tags(&doc, &IdentFilter::default(), &mut stripped);
		assert_eq!(stripped, 2);
		assert_eq!(
			plain,
			json!({
				"Name": "ingest",
				"Stages": {
					"decode": {"MovingAverage": {"Alpha": 0.25}, "Inertia": 0.5},
					"idle": null
				}
			})
		);
	}

	#[test]
	fn ident_filter_limits_stripping() {
		let doc = json!([{"TypeX": {"FastLimit": 0.3}}, {"Other": {"A": 1}}, {"i64": 5}]);

		let mut stripped = 0;
		let filter = IdentFilter::new(vec!["TypeX".to_owned(), "i64".to_owned()]);
		let plain = strip_tags(&doc, &filter, &mut stripped);
		assert_eq!(stripped, 2);
		assert_eq!(plain, json!([{"FastLimit": 0.3}, {"Other": {"A": 1}}, 5]));
	}
}
