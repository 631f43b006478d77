use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::codec::{Node, PolyError, Reflect, Result, TypeIdOf, stringify_key, wrap_type_tag};

/// Runtime limits and output switches for encoding.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
	/// Maximum recursive nesting depth.
	pub max_depth: u32,
	/// Emit indented JSON.
	pub pretty: bool,
}

impl Default for EncodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 128,
			pretty: false,
		}
	}
}

impl EncodeOptions {
	/// Preset for human-readable output.
	pub fn pretty() -> Self {
		Self {
			pretty: true,
			..Self::default()
		}
	}
}

/// Encode `value` to JSON bytes, tagging every populated interface slot.
pub fn encode<T, R>(value: &T, resolver: &R) -> Result<Vec<u8>>
where
	T: Reflect + ?Sized,
	R: TypeIdOf + ?Sized,
{
	encode_with(value, resolver, &EncodeOptions::default())
}

/// Encode `value` to JSON bytes with explicit options.
pub fn encode_with<T, R>(value: &T, resolver: &R, opt: &EncodeOptions) -> Result<Vec<u8>>
where
	T: Reflect + ?Sized,
	R: TypeIdOf + ?Sized,
{
	let json = encode_to_value_with(value, resolver, opt)?;
	let bytes = if opt.pretty {
		serde_json::to_vec_pretty(&json)?
	} else {
		serde_json::to_vec(&json)?
	};
	debug!(type_name = value.type_name(), bytes = bytes.len(), "encoded value");
	Ok(bytes)
}

/// Encode `value` to a JSON tree.
pub fn encode_to_value<T, R>(value: &T, resolver: &R) -> Result<Value>
where
	T: Reflect + ?Sized,
	R: TypeIdOf + ?Sized,
{
	encode_to_value_with(value, resolver, &EncodeOptions::default())
}

/// Encode `value` to a JSON tree with explicit options.
pub fn encode_to_value_with<T, R>(value: &T, resolver: &R, opt: &EncodeOptions) -> Result<Value>
where
	T: Reflect + ?Sized,
	R: TypeIdOf + ?Sized,
{
	let encoder = Encoder {
		resolver,
		max_depth: opt.max_depth,
	};
	encoder.encode(value.as_reflect(), 0)
}

struct Encoder<'a, R: TypeIdOf + ?Sized> {
	resolver: &'a R,
	max_depth: u32,
}

impl<R: TypeIdOf + ?Sized> Encoder<'_, R> {
	fn encode(&self, value: &dyn Reflect, depth: u32) -> Result<Value> {
		if depth >= self.max_depth {
			return Err(PolyError::DepthExceeded { max_depth: self.max_depth });
		}

		match value.node() {
			Node::Interface(inner) | Node::Pointer(inner) => match inner {
				Some(inner) => self.encode(inner, depth + 1),
				None => Ok(Value::Null),
			},
			Node::Map(map) => {
				let mut out = Map::new();
				for (key, item) in map.entries() {
					let key = stringify_key(key)?;
					let item = self.encode_slot(item, depth + 1).map_err(|err| err.in_map_entry(&key))?;
					out.insert(key, item);
				}
				Ok(Value::Object(out))
			}
			Node::Struct(record) => {
				let type_name = value.type_name();
				let mut out = Map::new();
				for (index, desc) in record.fields().iter().enumerate() {
					if !desc.is_reflected() {
						continue;
					}
					let wire = desc.wire_name();
					let field = record.field(index).ok_or(PolyError::FieldUnavailable {
						type_name,
						field: desc.name,
					})?;
					let item = self.encode_slot(field, depth + 1).map_err(|err| err.in_field(type_name, wire))?;
					out.insert(wire.to_owned(), item);
				}
				Ok(Value::Object(out))
			}
			Node::Sequence(plain) | Node::Scalar(plain) => Ok(plain.to_json()?),
		}
	}

	/// Encode a struct field or map value, tagging it when its declared kind is Interface.
	fn encode_slot(&self, value: &dyn Reflect, depth: u32) -> Result<Value> {
		let content = self.encode(value, depth)?;
		let Node::Interface(Some(dynamic)) = value.node() else {
			return Ok(content);
		};

		let ident = self.resolver.type_id_of(dynamic).map_err(|source| PolyError::TypeIdent {
			type_name: dynamic.type_name(),
			source,
		})?;
		trace!(%ident, type_name = dynamic.type_name(), "wrapping type tag");
		Ok(wrap_type_tag(ident.into_string(), content))
	}
}
