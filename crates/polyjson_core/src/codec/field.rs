use std::collections::HashMap;

/// One entry of a struct's field descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDesc {
	/// Rust field name.
	pub name: &'static str,
	/// Wire name override.
	pub rename: Option<&'static str>,
	/// Field is never encoded or decoded.
	pub skip: bool,
	/// Field is public; private fields stay off the wire.
	pub exported: bool,
}

impl FieldDesc {
	/// JSON object key for this field.
	pub const fn wire_name(&self) -> &'static str {
		match self.rename {
			Some(name) => name,
			None => self.name,
		}
	}

	/// Whether the field takes part in encoding and decoding.
	pub const fn is_reflected(&self) -> bool {
		self.exported && !self.skip
	}
}

/// Build the `wire name -> table index` lookup used while decoding.
///
/// A later field with the same wire name shadows an earlier one.
pub(crate) fn wire_index(fields: &'static [FieldDesc]) -> HashMap<&'static str, usize> {
	fields
		.iter()
		.enumerate()
		.filter(|(_, field)| field.is_reflected())
		.map(|(index, field)| (field.wire_name(), index))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::{FieldDesc, wire_index};

	const TABLE: &[FieldDesc] = &[
		FieldDesc {
			name: "inertia",
			rename: Some("Inertia"),
			skip: false,
			exported: true,
		},
		FieldDesc {
			name: "scratch",
			rename: None,
			skip: false,
			exported: false,
		},
		FieldDesc {
			name: "cache",
			rename: None,
			skip: true,
			exported: true,
		},
		FieldDesc {
			name: "limit",
			rename: None,
			skip: false,
			exported: true,
		},
	];

	#[test]
	fn rename_overrides_field_name() {
		assert_eq!(TABLE[0].wire_name(), "Inertia");
		assert_eq!(TABLE[3].wire_name(), "limit");
	}

	#[test]
	fn skipped_and_private_fields_are_unreachable() {
		let index = wire_index(TABLE);
		assert_eq!(index.len(), 2);
		assert_eq!(index.get("Inertia"), Some(&0));
		assert_eq!(index.get("limit"), Some(&3));
		assert!(!index.contains_key("scratch"));
		assert!(!index.contains_key("cache"));
		assert!(!index.contains_key("inertia"), "original name is replaced by the override");
	}
}
