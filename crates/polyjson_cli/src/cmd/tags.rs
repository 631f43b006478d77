use std::path::PathBuf;

use polyjson::codec::Result;
use serde::Serialize;
use serde_json::Value;

use crate::cmd::util::{IdentFilter, emit_json, load_json, pointer_push, value_kind};

/// One type-tag wrapper found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct TagRow {
	/// JSON Pointer of the wrapper object.
	pub(crate) pointer: String,
	/// Type identifier (the wrapper's only key).
	pub(crate) ident: String,
	/// JSON type of the wrapped content.
	pub(crate) content: &'static str,
}

#[derive(Serialize)]
struct TagsJson {
	path: String,
	tags: Vec<TagRow>,
}

/// Print every type-tag wrapper in a document.
pub fn run(path: PathBuf, idents: Vec<String>, json: bool) -> Result<()> {
	let doc = load_json(&path)?;
	let rows = collect_tags(&doc, &IdentFilter::new(idents));

	if json {
		return emit_json(&TagsJson {
			path: path.display().to_string(),
			tags: rows,
		});
	}

	println!("path: {}", path.display());
	println!("tags: {}", rows.len());
	println!("pointer\tident\tcontent");
	for row in rows {
		let pointer = if row.pointer.is_empty() { "/" } else { row.pointer.as_str() };
		println!("{pointer}\t{}\t{}", row.ident, row.content);
	}

	Ok(())
}

/// Wrappers in document order, outermost first.
pub(crate) fn collect_tags(doc: &Value, filter: &IdentFilter) -> Vec<TagRow> {
	let mut rows = Vec::new();
	walk(doc, "", filter, &mut rows);
	rows
}

fn walk(json: &Value, pointer: &str, filter: &IdentFilter, rows: &mut Vec<TagRow>) {
	if let Some((ident, content)) = filter.wrapper(json) {
		rows.push(TagRow {
			pointer: pointer.to_owned(),
			ident: ident.to_owned(),
			content: value_kind(content),
		});
	}

	match json {
		Value::Object(entries) => {
			for (key, item) in entries {
				walk(item, &pointer_push(pointer, key), filter, rows);
			}
		}
		Value::Array(items) => {
			for (index, item) in items.iter().enumerate() {
				walk(item, &pointer_push(pointer, &index.to_string()), filter, rows);
			}
		}
		_ => {}
	}
}
