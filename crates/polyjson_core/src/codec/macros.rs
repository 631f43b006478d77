/// Implement [`Reflect`](crate::codec::Reflect) for a struct from a field table.
///
/// Each entry names a field, in declaration order, with optional markers:
///
/// - `pub` marks the field as exported; private entries stay off the wire.
/// - `as "Name"` overrides the wire name.
/// - `#[skip]` keeps the field off the wire; its type need not implement `Reflect`.
///
/// ```
/// use polyjson::codec::Poly;
///
/// #[derive(Default)]
/// struct Limits {
/// 	fast: f64,
/// 	slow: f64,
/// 	source: Poly<dyn polyjson::codec::Reflect>,
/// 	cache: Vec<u8>,
/// }
///
/// polyjson::reflect_struct!(Limits {
/// 	pub fast as "FastLimit",
/// 	pub slow as "SlowLimit",
/// 	pub source,
/// 	#[skip] pub cache,
/// });
/// ```
#[macro_export]
macro_rules! reflect_struct {
	($ty:ty { $( $(#[$marker:ident])? $vis:vis $field:ident $(as $wire:literal)? ),+ $(,)? }) => {
		impl $crate::codec::Reflect for $ty {
			fn node(&self) -> $crate::codec::Node<'_> {
				$crate::codec::Node::Struct(self)
			}

			fn node_mut(&mut self) -> $crate::codec::NodeMut<'_> {
				$crate::codec::NodeMut::Struct(self)
			}
		}

		impl $crate::codec::StructValue for $ty {
			fn fields(&self) -> &'static [$crate::codec::FieldDesc] {
				const FIELDS: &[$crate::codec::FieldDesc] = &[$(
					$crate::codec::FieldDesc {
						name: stringify!($field),
						rename: $crate::__wire_name!($($wire)?),
						skip: $crate::__is_skipped!($($marker)?),
						exported: !stringify!($vis).is_empty(),
					}
				),+];
				FIELDS
			}

			fn field(&self, index: usize) -> Option<&dyn $crate::codec::Reflect> {
				[$( $crate::__field_ref!([$($marker)?] &self.$field) ),+].into_iter().nth(index).flatten()
			}

			fn field_mut(&mut self, index: usize) -> Option<&mut dyn $crate::codec::Reflect> {
				[$( $crate::__field_mut!([$($marker)?] &mut self.$field) ),+].into_iter().nth(index).flatten()
			}
		}
	};
}

/// Implement [`Interface`](crate::codec::Interface) for a trait object.
///
/// The trait must have [`Reflect`](crate::codec::Reflect) as a supertrait.
/// List every concrete type that implements it. A type whose trait impl
/// exists for `Box<T>` only is listed as `Box<T>`; decoding then allocates
/// `T` and stores it boxed.
///
/// ```
/// use polyjson::codec::Reflect;
///
/// trait Shape: Reflect {
/// 	fn area(&self) -> f64;
/// }
///
/// #[derive(Default)]
/// struct Square {
/// 	side: f64,
/// }
///
/// #[derive(Default)]
/// struct Circle {
/// 	radius: f64,
/// }
///
/// polyjson::reflect_struct!(Square { pub side });
/// polyjson::reflect_struct!(Circle { pub radius });
///
/// impl Shape for Square {
/// 	fn area(&self) -> f64 {
/// 		self.side * self.side
/// 	}
/// }
///
/// impl Shape for Box<Circle> {
/// 	fn area(&self) -> f64 {
/// 		std::f64::consts::PI * self.radius * self.radius
/// 	}
/// }
///
/// polyjson::interface!(dyn Shape: Square, Box<Circle>);
/// ```
#[macro_export]
macro_rules! interface {
	($iface:ty : $($entries:tt)+) => {
		$crate::__interface_impl!(@split [$iface] [] [] $($entries)+);
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __interface_impl {
	(@split [$iface:ty] [$($value:ty),*] [$($inner:ty),*] $(,)?) => {
		$crate::__interface_impl!(@emit [$iface] [$($value),*] [$($inner),*]);
	};
	(@split [$iface:ty] [$($value:ty),*] [$($inner:ty),*] Box<$boxed:ty> $(, $($rest:tt)*)?) => {
		$crate::__interface_impl!(@split [$iface] [$($value),*] [$($inner,)* $boxed] $($($rest)*)?);
	};
	(@split [$iface:ty] [$($value:ty),*] [$($inner:ty),*] $concrete:ty $(, $($rest:tt)*)?) => {
		$crate::__interface_impl!(@split [$iface] [$($value,)* $concrete] [$($inner),*] $($($rest)*)?);
	};
	(@emit [$iface:ty] [$($value:ty),*] [$($inner:ty),*]) => {
		impl $crate::codec::Interface for $iface {
			fn accepts(value: &dyn $crate::codec::Reflect) -> bool {
				let any = $crate::codec::AsReflect::as_any(value);
				false $(|| any.is::<$value>())* $(|| any.is::<Box<$inner>>())*
			}

			fn accepts_boxed(value: &dyn $crate::codec::Reflect) -> bool {
				let any = $crate::codec::AsReflect::as_any(value);
				false $(|| any.is::<$inner>())*
			}

			fn from_reflect(value: Box<dyn $crate::codec::Reflect>) -> Option<Box<Self>> {
				let any = $crate::codec::AsReflect::into_any(value);
				$(
					let any = match any.downcast::<$value>() {
						Ok(concrete) => return Some(concrete as Box<Self>),
						Err(any) => any,
					};
				)*
				$(
					let any = match any.downcast::<Box<$inner>>() {
						Ok(concrete) => return Some(concrete as Box<Self>),
						Err(any) => any,
					};
				)*
				drop(any);
				None
			}

			fn from_reflect_boxed(value: Box<dyn $crate::codec::Reflect>) -> Option<Box<Self>> {
				let any = $crate::codec::AsReflect::into_any(value);
				$(
					let any = match any.downcast::<$inner>() {
						Ok(concrete) => return Some(Box::new(concrete) as Box<Self>),
						Err(any) => any,
					};
				)*
				drop(any);
				None
			}

			fn reflect(&self) -> &dyn $crate::codec::Reflect {
				$crate::codec::AsReflect::as_reflect(self)
			}

			fn reflect_mut(&mut self) -> &mut dyn $crate::codec::Reflect {
				$crate::codec::AsReflect::as_reflect_mut(self)
			}
		}
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __wire_name {
	() => {
		None
	};
	($wire:literal) => {
		Some($wire)
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __is_skipped {
	() => {
		false
	};
	(skip) => {
		true
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_ref {
	([] $field:expr) => {
		Some($field as &dyn $crate::codec::Reflect)
	};
	([skip] $field:expr) => {
		None::<&dyn $crate::codec::Reflect>
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_mut {
	([] $field:expr) => {
		Some($field as &mut dyn $crate::codec::Reflect)
	};
	([skip] $field:expr) => {
		None::<&mut dyn $crate::codec::Reflect>
	};
}
