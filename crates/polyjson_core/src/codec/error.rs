use std::fmt;

use thiserror::Error;

use crate::codec::ResolveError;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PolyError>;

/// One step of the positional context attached to a traversal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
	/// Struct field, by wire name.
	Field(&'static str),
	/// Map entry, by stringified key.
	Key(String),
}

impl fmt::Display for PathSegment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Field(name) => write!(f, ".{name}"),
			Self::Key(key) => write!(f, "[{key:?}]"),
		}
	}
}

/// Errors produced while encoding, decoding, and resolving polymorphic values.
#[derive(Debug, Error)]
pub enum PolyError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input was not valid JSON, or a plain value failed to (de)serialize.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Resolver could not produce an identifier for a dynamic value.
	#[error("unable to get type identifier of {type_name}: {source}")]
	TypeIdent {
		/// Runtime type of the dynamic value.
		type_name: &'static str,
		/// Resolver failure.
		#[source]
		source: ResolveError,
	},
	/// Resolver could not construct an instance for an identifier.
	#[error("unable to construct an instance for type identifier '{ident}': {source}")]
	Construct {
		/// Identifier read from the wire.
		ident: String,
		/// Resolver failure.
		#[source]
		source: ResolveError,
	},
	/// Map key type has no string form.
	#[error("unable to stringify map key of type {type_name}: only string keys are supported")]
	KeyNotString {
		/// Runtime type of the key.
		type_name: &'static str,
	},
	/// Interface-typed slot did not hold a single-key wrapper object.
	#[error("expected a type-tag wrapper with exactly one key, got {keys}")]
	MalformedWrapper {
		/// Number of keys found (0 for non-object values).
		keys: usize,
	},
	/// Decoded instance satisfies neither the declared interface nor its boxed form.
	#[error("internal error: do not know how to assign {type_name} to {interface}")]
	AssignmentInconsistency {
		/// Concrete type vended by the resolver.
		type_name: &'static str,
		/// Declared interface of the slot.
		interface: &'static str,
	},
	/// Bare interface destination held no value to decode into.
	#[error("cannot decode into absent interface {interface}")]
	AbsentInterface {
		/// Declared interface of the slot.
		interface: &'static str,
	},
	/// Field table names a field the struct does not expose.
	#[error("field {field} of {type_name} is not addressable")]
	FieldUnavailable {
		/// Struct type name.
		type_name: &'static str,
		/// Rust field name.
		field: &'static str,
	},
	/// JSON value shape does not fit the destination kind.
	#[error("expected JSON {expected} for {type_name}, got {found}")]
	UnexpectedJson {
		/// Expected JSON shape.
		expected: &'static str,
		/// Actual JSON shape.
		found: &'static str,
		/// Destination type name.
		type_name: &'static str,
	},
	/// Strict decoding met a key with no matching field.
	#[error("unknown field '{field}' for {type_name}")]
	UnknownField {
		/// Struct type name.
		type_name: &'static str,
		/// Offending wire key.
		field: String,
	},
	/// Traversal recursion exceeded the configured limit.
	#[error("traversal depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Identifier is already bound to another type.
	#[error("type identifier '{ident}' is already bound to {existing}")]
	DuplicateTypeIdent {
		/// Requested identifier.
		ident: String,
		/// Type currently bound to it.
		existing: &'static str,
	},
	/// Type is already registered under another identifier.
	#[error("type {type_name} is already registered as '{ident}'")]
	DuplicateType {
		/// Type being registered.
		type_name: &'static str,
		/// Identifier it is already bound to.
		ident: String,
	},
	/// Failure inside a struct field.
	#[error("field '{field}' of {type_name}: {source}")]
	Field {
		/// Struct type name.
		type_name: &'static str,
		/// Wire name of the field.
		field: &'static str,
		/// Inner failure.
		#[source]
		source: Box<PolyError>,
	},
	/// Failure inside a map entry.
	#[error("map entry with key '{key}': {source}")]
	MapEntry {
		/// Stringified key.
		key: String,
		/// Inner failure.
		#[source]
		source: Box<PolyError>,
	},
}

impl PolyError {
	pub(crate) fn in_field(self, type_name: &'static str, field: &'static str) -> Self {
		Self::Field {
			type_name,
			field,
			source: Box::new(self),
		}
	}

	pub(crate) fn in_map_entry(self, key: &str) -> Self {
		Self::MapEntry {
			key: key.to_owned(),
			source: Box::new(self),
		}
	}

	/// Innermost error beneath all positional context.
	pub fn root(&self) -> &PolyError {
		let mut current = self;
		while let Self::Field { source, .. } | Self::MapEntry { source, .. } = current {
			current = source;
		}
		current
	}

	/// Positional context from the outermost container down to the failure.
	pub fn path(&self) -> Vec<PathSegment> {
		let mut out = Vec::new();
		let mut current = self;
		loop {
			match current {
				Self::Field { field, source, .. } => {
					out.push(PathSegment::Field(*field));
					current = source;
				}
				Self::MapEntry { key, source } => {
					out.push(PathSegment::Key(key.clone()));
					current = source;
				}
				_ => return out,
			}
		}
	}
}
