//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

use serde_json::Value;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read a fixture file as raw bytes, panicking with the path on failure.
pub fn fixture_bytes(name: &str) -> Vec<u8> {
	let path = fixture_path(name);
	std::fs::read(&path).unwrap_or_else(|err| panic!("failed to read fixture {}: {err}", path.display()))
}

/// Parse a JSON fixture, panicking with the path on failure.
pub fn fixture_json(name: &str) -> Value {
	let bytes = fixture_bytes(name);
	serde_json::from_slice(&bytes).unwrap_or_else(|err| panic!("fixture {name} is not valid JSON: {err}"))
}
