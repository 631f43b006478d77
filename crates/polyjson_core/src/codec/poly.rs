use std::fmt;

use crate::codec::{InterfaceSlot, Node, NodeMut, Reflect};

/// Trait-object type usable as the declared type of a [`Poly`] slot.
///
/// Implemented for `dyn Reflect` (accepts every value) and, through
/// [`interface!`](crate::interface), for user trait objects.
pub trait Interface: 'static {
	/// Name used in error messages.
	fn name() -> &'static str {
		std::any::type_name::<Self>()
	}

	/// Whether `value`'s concrete type satisfies this interface.
	fn accepts(value: &dyn Reflect) -> bool;

	/// Convert a boxed value into this interface, `None` if it does not satisfy it.
	fn from_reflect(value: Box<dyn Reflect>) -> Option<Box<Self>>;

	/// Whether `Box<T>` satisfies this interface, `T` being `value`'s concrete type.
	fn accepts_boxed(_value: &dyn Reflect) -> bool {
		false
	}

	/// Convert `value` into this interface behind one more `Box`.
	fn from_reflect_boxed(_value: Box<dyn Reflect>) -> Option<Box<Self>> {
		None
	}

	/// View the dynamic value.
	fn reflect(&self) -> &dyn Reflect;

	/// Mutably view the dynamic value.
	fn reflect_mut(&mut self) -> &mut dyn Reflect;
}

impl Interface for dyn Reflect {
	fn accepts(_value: &dyn Reflect) -> bool {
		true
	}

	fn from_reflect(value: Box<dyn Reflect>) -> Option<Box<Self>> {
		Some(value)
	}

	fn reflect(&self) -> &dyn Reflect {
		self
	}

	fn reflect_mut(&mut self) -> &mut dyn Reflect {
		self
	}
}

/// Interface slot: an optional trait object whose concrete type survives encoding.
///
/// As a struct field or map value it is written as `{"<type identifier>": content}`,
/// or `null` when empty.
pub struct Poly<I: ?Sized + Interface>(Option<Box<I>>);

impl<I: ?Sized + Interface> Poly<I> {
	/// Slot holding `value`.
	pub fn new(value: Box<I>) -> Self {
		Self(Some(value))
	}

	/// Empty slot.
	pub fn none() -> Self {
		Self(None)
	}

	/// Whether the slot holds a value.
	pub fn is_some(&self) -> bool {
		self.0.is_some()
	}

	/// Whether the slot is empty.
	pub fn is_none(&self) -> bool {
		self.0.is_none()
	}

	/// Borrow the held value.
	pub fn get(&self) -> Option<&I> {
		self.0.as_deref()
	}

	/// Mutably borrow the held value.
	pub fn get_mut(&mut self) -> Option<&mut I> {
		self.0.as_deref_mut()
	}

	/// Take the held value, leaving the slot empty.
	pub fn take(&mut self) -> Option<Box<I>> {
		self.0.take()
	}

	/// Unwrap into the held value.
	pub fn into_inner(self) -> Option<Box<I>> {
		self.0
	}

	/// Borrow the held value as concrete type `T`.
	pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
		self.get().and_then(|value| value.reflect().as_any().downcast_ref::<T>())
	}

	fn replace_with(&mut self, value: Option<Box<I>>) -> bool {
		match value {
			Some(value) => {
				self.0 = Some(value);
				true
			}
			None => false,
		}
	}
}

impl<I: ?Sized + Interface> Default for Poly<I> {
	fn default() -> Self {
		Self::none()
	}
}

impl<I: ?Sized + Interface> From<Box<I>> for Poly<I> {
	fn from(value: Box<I>) -> Self {
		Self::new(value)
	}
}

impl<I: ?Sized + Interface> fmt::Debug for Poly<I> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.get() {
			Some(value) => write!(f, "Poly({})", value.reflect().type_name()),
			None => f.write_str("Poly(None)"),
		}
	}
}

impl<I: ?Sized + Interface> Reflect for Poly<I> {
	fn node(&self) -> Node<'_> {
		Node::Interface(self.get().map(I::reflect))
	}

	fn node_mut(&mut self) -> NodeMut<'_> {
		NodeMut::Interface(self)
	}
}

impl<I: ?Sized + Interface> InterfaceSlot for Poly<I> {
	fn interface_name(&self) -> &'static str {
		I::name()
	}

	fn dynamic_mut(&mut self) -> Option<&mut dyn Reflect> {
		self.0.as_deref_mut().map(I::reflect_mut)
	}

	fn set_absent(&mut self) {
		self.0 = None;
	}

	fn accepts(&self, value: &dyn Reflect) -> bool {
		I::accepts(value)
	}

	fn accepts_boxed(&self, value: &dyn Reflect) -> bool {
		I::accepts_boxed(value)
	}

	fn store(&mut self, value: Box<dyn Reflect>) -> bool {
		self.replace_with(I::from_reflect(value))
	}

	fn store_boxed(&mut self, value: Box<dyn Reflect>) -> bool {
		self.replace_with(I::from_reflect_boxed(value))
	}
}
