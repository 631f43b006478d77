use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::codec::{NewByTypeId, PolyError, Reflect, ResolveError, Result, TypeIdOf, TypeIdent};

type Constructor = fn() -> Box<dyn Reflect>;

#[derive(Clone, Copy)]
struct Binding {
	type_name: &'static str,
	construct: Constructor,
}

/// Bidirectional map between concrete types and wire identifiers.
///
/// Register every type before the first encode or decode; the registry is
/// read-only afterwards and can be shared across threads.
#[derive(Default, Clone)]
pub struct TypeRegistry {
	by_type: HashMap<TypeId, TypeIdent>,
	by_ident: HashMap<TypeIdent, Binding>,
}

impl TypeRegistry {
	/// Empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `T` under its Rust type path.
	pub fn register<T: Reflect + Default>(&mut self) -> Result<&mut Self> {
		self.register_as::<T>(std::any::type_name::<T>())
	}

	/// Register `T` under an explicit identifier.
	pub fn register_as<T: Reflect + Default>(&mut self, ident: impl Into<TypeIdent>) -> Result<&mut Self> {
		let ident = ident.into();
		let type_id = TypeId::of::<T>();
		let type_name = std::any::type_name::<T>();

		if let Some(existing) = self.by_ident.get(&ident) {
			if self.by_type.get(&type_id) == Some(&ident) {
				return Ok(self);
			}
			return Err(PolyError::DuplicateTypeIdent {
				ident: ident.into_string(),
				existing: existing.type_name,
			});
		}
		if let Some(bound) = self.by_type.get(&type_id) {
			return Err(PolyError::DuplicateType {
				type_name,
				ident: bound.to_string(),
			});
		}

		trace!(%ident, type_name, "registering type");
		self.by_type.insert(type_id, ident.clone());
		self.by_ident.insert(
			ident,
			Binding {
				type_name,
				construct: construct::<T>,
			},
		);
		Ok(self)
	}

	/// Whether `ident` is bound.
	pub fn contains(&self, ident: &str) -> bool {
		self.by_ident.contains_key(ident)
	}

	/// Identifier bound to `T`, if registered.
	pub fn ident_of<T: Reflect>(&self) -> Option<&TypeIdent> {
		self.by_type.get(&TypeId::of::<T>())
	}

	/// Number of registered types.
	pub fn len(&self) -> usize {
		self.by_ident.len()
	}

	/// Whether no type is registered.
	pub fn is_empty(&self) -> bool {
		self.by_ident.is_empty()
	}

	/// Registered identifiers, sorted.
	pub fn idents(&self) -> Vec<&TypeIdent> {
		let mut out: Vec<_> = self.by_ident.keys().collect();
		out.sort();
		out
	}
}

impl fmt::Debug for TypeRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut map = f.debug_map();
		for ident in self.idents() {
			if let Some(binding) = self.by_ident.get(ident) {
				map.entry(&ident.as_str(), &binding.type_name);
			}
		}
		map.finish()
	}
}

impl TypeIdOf for TypeRegistry {
	fn type_id_of(&self, sample: &dyn Reflect) -> std::result::Result<TypeIdent, ResolveError> {
		let mut current = sample;
		loop {
			if let Some(ident) = self.by_type.get(&Any::type_id(current.as_any())) {
				return Ok(ident.clone());
			}
			match current.unboxed() {
				Some(inner) => current = inner,
				None => {
					return Err(ResolveError::Unregistered {
						type_name: sample.type_name(),
					});
				}
			}
		}
	}
}

impl NewByTypeId for TypeRegistry {
	fn new_by_type_id(&self, ident: &str) -> std::result::Result<Box<dyn Reflect>, ResolveError> {
		self.by_ident
			.get(ident)
			.map(|binding| (binding.construct)())
			.ok_or_else(|| ResolveError::UnknownTypeIdent { ident: ident.to_owned() })
	}
}

fn construct<T: Reflect + Default>() -> Box<dyn Reflect> {
	Box::new(T::default())
}
