//! JSON codec that keeps the concrete type of values stored behind polymorphic slots.
//!
//! Interface-typed struct fields and map values are written as single-key
//! wrapper objects `{"<type identifier>": <content>}` and read back through a
//! [`codec::Resolver`] that allocates the matching concrete type.

/// Reflection model, resolver contract, and the type-tagging encoder/decoder.
pub mod codec;
