use std::any::Any;
use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::codec::{FieldDesc, Result};

/// Structural kind of a value as seen by the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// Polymorphic slot holding an optional trait object.
	Interface,
	/// Optional or owning indirection to another value.
	Pointer,
	/// String-keyed associative container.
	Map,
	/// Record described by a field table.
	Struct,
	/// List-like container, encoded plainly.
	Sequence,
	/// JSON leaf, encoded plainly.
	Scalar,
}

impl Kind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Interface => "interface",
			Self::Pointer => "pointer",
			Self::Map => "map",
			Self::Struct => "struct",
			Self::Sequence => "sequence",
			Self::Scalar => "scalar",
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Read-only view of a value, by kind.
pub enum Node<'a> {
	/// Dynamic value behind an interface slot, if any.
	Interface(Option<&'a dyn Reflect>),
	/// Pointee, if any.
	Pointer(Option<&'a dyn Reflect>),
	/// Map entries.
	Map(&'a dyn MapValue),
	/// Struct fields.
	Struct(&'a dyn StructValue),
	/// Sequence handled by `serde_json`.
	Sequence(&'a dyn Plain),
	/// Leaf handled by `serde_json`.
	Scalar(&'a dyn Plain),
}

impl Node<'_> {
	/// Kind of this node.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Interface(_) => Kind::Interface,
			Self::Pointer(_) => Kind::Pointer,
			Self::Map(_) => Kind::Map,
			Self::Struct(_) => Kind::Struct,
			Self::Sequence(_) => Kind::Sequence,
			Self::Scalar(_) => Kind::Scalar,
		}
	}
}

/// Mutable view of a value, by kind.
pub enum NodeMut<'a> {
	/// Interface slot.
	Interface(&'a mut dyn InterfaceSlot),
	/// Pointer slot.
	Pointer(&'a mut dyn PointerSlot),
	/// Map container.
	Map(&'a mut dyn MapValue),
	/// Struct fields.
	Struct(&'a mut dyn StructValue),
	/// Sequence handled by `serde_json`.
	Sequence(&'a mut dyn Plain),
	/// Leaf handled by `serde_json`.
	Scalar(&'a mut dyn Plain),
}

/// A value the codec can traverse.
///
/// Implementations report the *declared* kind of their own type: a
/// [`Poly`](crate::codec::Poly) field is always `Interface`, whatever it holds.
pub trait Reflect: AsReflect + Any {
	/// Read-only view by kind.
	fn node(&self) -> Node<'_>;

	/// Mutable view by kind.
	fn node_mut(&mut self) -> NodeMut<'_>;

	/// Declared kind.
	fn kind(&self) -> Kind {
		self.node().kind()
	}

	/// String form when this is a string-kind value.
	fn as_string_key(&self) -> Option<&str> {
		None
	}

	/// Mutable string storage when this is a string-kind value.
	fn as_string_key_mut(&mut self) -> Option<&mut String> {
		None
	}

	/// Value behind one level of owning indirection (`Box<T>` -> `T`).
	fn unboxed(&self) -> Option<&dyn Reflect> {
		None
	}
}

/// Object-safe conversions available on every [`Reflect`] value.
pub trait AsReflect {
	/// Runtime type name of the concrete value.
	fn type_name(&self) -> &'static str;
	/// Upcast to `&dyn Reflect`.
	fn as_reflect(&self) -> &dyn Reflect;
	/// Upcast to `&mut dyn Reflect`.
	fn as_reflect_mut(&mut self) -> &mut dyn Reflect;
	/// Upcast to `&dyn Any` for downcasting.
	fn as_any(&self) -> &dyn Any;
	/// Upcast to `Box<dyn Any>` for downcasting.
	fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Reflect> AsReflect for T {
	fn type_name(&self) -> &'static str {
		std::any::type_name::<T>()
	}

	fn as_reflect(&self) -> &dyn Reflect {
		self
	}

	fn as_reflect_mut(&mut self) -> &mut dyn Reflect {
		self
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn into_any(self: Box<Self>) -> Box<dyn Any> {
		self
	}
}

/// Field access for struct-kind values.
pub trait StructValue {
	/// Field descriptor table in declaration order.
	fn fields(&self) -> &'static [FieldDesc];
	/// Field value at `index` in the table; `None` for skipped fields.
	fn field(&self, index: usize) -> Option<&dyn Reflect>;
	/// Mutable field value at `index` in the table; `None` for skipped fields.
	fn field_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;
}

/// Entry access for map-kind values.
pub trait MapValue {
	/// Number of entries.
	fn len(&self) -> usize;
	/// Whether the map holds no entries.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}
	/// Borrowed `(key, value)` pairs.
	fn entries(&self) -> Vec<(&dyn Reflect, &dyn Reflect)>;
	/// Remove every entry.
	fn clear(&mut self);
	/// Insert a new entry: the key is unstringified from `key`, the value
	/// starts at its default and is filled by `fill`.
	fn insert_with(&mut self, key: &str, fill: &mut dyn FnMut(&mut dyn Reflect) -> Result<()>) -> Result<()>;
}

/// Slot access for pointer-kind values.
pub trait PointerSlot {
	/// Current pointee, if any.
	fn pointee(&self) -> Option<&dyn Reflect>;
	/// Current pointee, allocating a default one when absent.
	fn pointee_or_default(&mut self) -> &mut dyn Reflect;
	/// Reset to the absent state.
	fn set_absent(&mut self);
}

/// Slot access for interface-kind values.
pub trait InterfaceSlot {
	/// Name of the declared interface.
	fn interface_name(&self) -> &'static str;
	/// Current dynamic value, if any.
	fn dynamic_mut(&mut self) -> Option<&mut dyn Reflect>;
	/// Reset to the absent state.
	fn set_absent(&mut self);
	/// Whether `value`'s concrete type satisfies the declared interface.
	fn accepts(&self, value: &dyn Reflect) -> bool;
	/// Whether `Box<T>` satisfies the declared interface, `T` being `value`'s concrete type.
	fn accepts_boxed(&self, value: &dyn Reflect) -> bool;
	/// Store `value`; returns `false` (dropping it) when it does not satisfy the interface.
	fn store(&mut self, value: Box<dyn Reflect>) -> bool;
	/// Store `value` behind one more `Box`; returns `false` (dropping it) when that does not satisfy the interface.
	fn store_boxed(&mut self, value: Box<dyn Reflect>) -> bool;
}

/// Values delegated to `serde_json` as a whole.
pub trait Plain {
	/// Serialize to a JSON value.
	fn to_json(&self) -> serde_json::Result<Value>;
	/// Replace `self` with the value deserialized from `json`.
	fn set_json(&mut self, json: &Value) -> serde_json::Result<()>;
}

impl<T: Serialize + DeserializeOwned> Plain for T {
	fn to_json(&self) -> serde_json::Result<Value> {
		serde_json::to_value(self)
	}

	fn set_json(&mut self, json: &Value) -> serde_json::Result<()> {
		*self = serde::Deserialize::deserialize(json)?;
		Ok(())
	}
}
