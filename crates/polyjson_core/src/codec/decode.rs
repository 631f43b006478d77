use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::codec::field::wire_index;
use crate::codec::tag::wrapper_key_count;
use crate::codec::{InterfaceSlot, NewByTypeId, NodeMut, PolyError, Reflect, Result, split_type_tag};

/// Runtime limits and behavior switches for decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum recursive nesting depth.
	pub max_depth: u32,
	/// Error on object keys that match no struct field instead of ignoring them.
	pub deny_unknown_fields: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 128,
			deny_unknown_fields: false,
		}
	}
}

impl DecodeOptions {
	/// Preset rejecting unknown struct keys.
	pub fn strict() -> Self {
		Self {
			deny_unknown_fields: true,
			..Self::default()
		}
	}
}

/// Decode JSON bytes into `dst`, allocating concrete types for tagged interface slots.
///
/// On error `dst` may be partially updated and should be discarded.
pub fn decode<T, R>(bytes: &[u8], dst: &mut T, resolver: &R) -> Result<()>
where
	T: Reflect + ?Sized,
	R: NewByTypeId + ?Sized,
{
	decode_with(bytes, dst, resolver, &DecodeOptions::default())
}

/// Decode JSON bytes into `dst` with explicit options.
pub fn decode_with<T, R>(bytes: &[u8], dst: &mut T, resolver: &R, opt: &DecodeOptions) -> Result<()>
where
	T: Reflect + ?Sized,
	R: NewByTypeId + ?Sized,
{
	let json: Value = serde_json::from_slice(bytes)?;
	debug!(type_name = dst.type_name(), bytes = bytes.len(), "decoding value");
	decode_value_with(&json, dst, resolver, opt)
}

/// Decode an already parsed JSON tree into `dst`.
pub fn decode_value<T, R>(json: &Value, dst: &mut T, resolver: &R) -> Result<()>
where
	T: Reflect + ?Sized,
	R: NewByTypeId + ?Sized,
{
	decode_value_with(json, dst, resolver, &DecodeOptions::default())
}

/// Decode an already parsed JSON tree into `dst` with explicit options.
pub fn decode_value_with<T, R>(json: &Value, dst: &mut T, resolver: &R, opt: &DecodeOptions) -> Result<()>
where
	T: Reflect + ?Sized,
	R: NewByTypeId + ?Sized,
{
	let decoder = Decoder {
		resolver,
		max_depth: opt.max_depth,
		deny_unknown_fields: opt.deny_unknown_fields,
	};
	decoder.decode(json, dst.as_reflect_mut(), 0)
}

struct Decoder<'a, R: NewByTypeId + ?Sized> {
	resolver: &'a R,
	max_depth: u32,
	deny_unknown_fields: bool,
}

impl<R: NewByTypeId + ?Sized> Decoder<'_, R> {
	fn decode(&self, json: &Value, dst: &mut dyn Reflect, depth: u32) -> Result<()> {
		if depth >= self.max_depth {
			return Err(PolyError::DepthExceeded { max_depth: self.max_depth });
		}

		let type_name = dst.type_name();
		match dst.node_mut() {
			NodeMut::Interface(slot) => {
				let interface = slot.interface_name();
				let inner = slot.dynamic_mut().ok_or(PolyError::AbsentInterface { interface })?;
				self.decode(json, inner, depth + 1)
			}
			NodeMut::Pointer(pointer) => self.decode(json, pointer.pointee_or_default(), depth + 1),
			NodeMut::Map(map) => {
				map.clear();
				let Some(entries) = object_or_null(json, type_name)? else {
					return Ok(());
				};
				for (key, item) in entries {
					map.insert_with(key, &mut |slot: &mut dyn Reflect| self.decode_slot(item, slot, depth + 1))
						.map_err(|err| err.in_map_entry(key))?;
				}
				Ok(())
			}
			NodeMut::Struct(record) => {
				let Some(entries) = object_or_null(json, type_name)? else {
					return Ok(());
				};
				let fields = record.fields();
				let index = wire_index(fields);
				for (key, item) in entries {
					let Some(&at) = index.get(key.as_str()) else {
						if self.deny_unknown_fields {
							return Err(PolyError::UnknownField {
								type_name,
								field: key.clone(),
							});
						}
						trace!(type_name, key = key.as_str(), "ignoring unknown key");
						continue;
					};
					let desc = &fields[at];
					let field = record.field_mut(at).ok_or(PolyError::FieldUnavailable {
						type_name,
						field: desc.name,
					})?;
					self.decode_slot(item, field, depth + 1)
						.map_err(|err| err.in_field(type_name, desc.wire_name()))?;
				}
				Ok(())
			}
			NodeMut::Sequence(plain) | NodeMut::Scalar(plain) => {
				if !json.is_null() {
					plain.set_json(json)?;
				}
				Ok(())
			}
		}
	}

	/// Decode a struct field or map value according to its declared kind.
	fn decode_slot(&self, json: &Value, slot: &mut dyn Reflect, depth: u32) -> Result<()> {
		match slot.node_mut() {
			NodeMut::Pointer(pointer) if json.is_null() => {
				pointer.set_absent();
				return Ok(());
			}
			NodeMut::Interface(interface) => return self.decode_interface(json, interface, depth),
			_ => {}
		}
		self.decode(json, slot, depth)
	}

	fn decode_interface(&self, json: &Value, slot: &mut dyn InterfaceSlot, depth: u32) -> Result<()> {
		if json.is_null() {
			slot.set_absent();
			return Ok(());
		}

		let (ident, content) = split_type_tag(json).ok_or(PolyError::MalformedWrapper {
			keys: wrapper_key_count(json),
		})?;
		let mut instance = self.resolver.new_by_type_id(ident).map_err(|source| PolyError::Construct {
			ident: ident.to_owned(),
			source,
		})?;
		trace!(ident, type_name = (*instance).type_name(), "unwrapping type tag");
		self.decode(content, &mut *instance, depth + 1)?;

		let type_name = (*instance).type_name();
		let stored = if slot.accepts(&*instance) {
			slot.store(instance)
		} else if slot.accepts_boxed(&*instance) {
			trace!(ident, type_name, "storing boxed instance");
			slot.store_boxed(instance)
		} else {
			false
		};
		if !stored {
			return Err(PolyError::AssignmentInconsistency {
				type_name,
				interface: slot.interface_name(),
			});
		}
		Ok(())
	}
}

fn object_or_null<'a>(json: &'a Value, type_name: &'static str) -> Result<Option<&'a Map<String, Value>>> {
	match json {
		Value::Object(entries) => Ok(Some(entries)),
		Value::Null => Ok(None),
		other => Err(PolyError::UnexpectedJson {
			expected: "object",
			found: json_kind(other),
			type_name,
		}),
	}
}

fn json_kind(json: &Value) -> &'static str {
	match json {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
