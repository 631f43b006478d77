mod decode;
mod encode;
mod error;
mod field;
mod impls;
mod key;
mod kind;
mod macros;
mod poly;
mod registry;
mod resolver;
mod tag;

#[cfg(test)]
mod test_support;

/// Type-tag aware decoding entry points and options.
pub use decode::{DecodeOptions, decode, decode_value, decode_value_with, decode_with};
/// Type-tag aware encoding entry points and options.
pub use encode::{EncodeOptions, encode, encode_to_value, encode_to_value_with, encode_with};
/// Error, positional context, and result aliases.
pub use error::{PathSegment, PolyError, Result};
/// Struct field descriptor table entries.
pub use field::FieldDesc;
/// Map key string codec.
pub use key::{stringify_key, unstringify_key};
/// Kind taxonomy and per-kind access traits.
pub use kind::{AsReflect, InterfaceSlot, Kind, MapValue, Node, NodeMut, Plain, PointerSlot, Reflect, StructValue};
/// Interface slots and trait-object adapters.
pub use poly::{Interface, Poly};
/// Built-in bidirectional type registry.
pub use registry::TypeRegistry;
/// Resolver contract consumed by the encoder and decoder.
pub use resolver::{NewByTypeId, ResolveError, Resolver, TypeIdOf, TypeIdent};
/// Wire-level type-tag helpers.
pub use tag::{split_type_tag, wrap_type_tag};
