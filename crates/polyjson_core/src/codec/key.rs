use crate::codec::{PolyError, Reflect, Result};

/// Wire form of a map key; only string-kind keys have one.
pub fn stringify_key(key: &dyn Reflect) -> Result<String> {
	key.as_string_key()
		.map(str::to_owned)
		.ok_or(PolyError::KeyNotString { type_name: key.type_name() })
}

/// Fill a map key slot from its wire form; only string-kind keys accept one.
pub fn unstringify_key(slot: &mut dyn Reflect, raw: &str) -> Result<()> {
	let type_name = slot.type_name();
	let Some(key) = slot.as_string_key_mut() else {
		return Err(PolyError::KeyNotString { type_name });
	};
	key.clear();
	key.push_str(raw);
	Ok(())
}
