/// Wrapper-stripping command.
pub mod strip;
/// Wrapper listing command.
pub mod tags;
/// Shared command helpers.
pub(crate) mod util;
