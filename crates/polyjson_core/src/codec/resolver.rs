use std::borrow::Borrow;
use std::fmt;

use thiserror::Error;

use crate::codec::Reflect;

/// String identifier naming a registered concrete type on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeIdent(Box<str>);

impl TypeIdent {
	/// Wrap an identifier string.
	pub fn new(ident: impl Into<Box<str>>) -> Self {
		Self(ident.into())
	}

	/// Borrow the identifier text.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Take the identifier text.
	pub fn into_string(self) -> String {
		self.0.into_string()
	}
}

impl fmt::Display for TypeIdent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for TypeIdent {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&str> for TypeIdent {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for TypeIdent {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

/// Failures reported by a resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
	/// Sample's runtime type has no identifier.
	#[error("type {type_name} is not registered")]
	Unregistered {
		/// Runtime type of the sample.
		type_name: &'static str,
	},
	/// No type is bound to the identifier.
	#[error("unknown type identifier '{ident}'")]
	UnknownTypeIdent {
		/// Identifier that failed to resolve.
		ident: String,
	},
	/// Resolver-specific failure.
	#[error("{0}")]
	Other(String),
}

/// Maps a sample value to the identifier of its concrete type.
pub trait TypeIdOf {
	/// Identifier for the runtime type of `sample`.
	fn type_id_of(&self, sample: &dyn Reflect) -> Result<TypeIdent, ResolveError>;
}

/// Allocates a fresh default instance for an identifier.
pub trait NewByTypeId {
	/// New default-valued instance of the type bound to `ident`.
	fn new_by_type_id(&self, ident: &str) -> Result<Box<dyn Reflect>, ResolveError>;
}

/// Bidirectional resolver used by both directions of the codec.
pub trait Resolver: TypeIdOf + NewByTypeId {}

impl<T: TypeIdOf + NewByTypeId + ?Sized> Resolver for T {}
