use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec::{MapValue, Node, NodeMut, PointerSlot, Reflect, Result, unstringify_key};

macro_rules! impl_scalar {
	($($ty:ty),+ $(,)?) => {
		$(
			impl Reflect for $ty {
				fn node(&self) -> Node<'_> {
					Node::Scalar(self)
				}

				fn node_mut(&mut self) -> NodeMut<'_> {
					NodeMut::Scalar(self)
				}
			}
		)+
	};
}

impl_scalar!(bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, serde_json::Value);

impl Reflect for String {
	fn node(&self) -> Node<'_> {
		Node::Scalar(self)
	}

	fn node_mut(&mut self) -> NodeMut<'_> {
		NodeMut::Scalar(self)
	}

	fn as_string_key(&self) -> Option<&str> {
		Some(self)
	}

	fn as_string_key_mut(&mut self) -> Option<&mut String> {
		Some(self)
	}
}

macro_rules! impl_sequence {
	($($ty:ident),+ $(,)?) => {
		$(
			impl<T: 'static> Reflect for $ty<T>
			where
				Self: Serialize + DeserializeOwned,
			{
				fn node(&self) -> Node<'_> {
					Node::Sequence(self)
				}

				fn node_mut(&mut self) -> NodeMut<'_> {
					NodeMut::Sequence(self)
				}
			}
		)+
	};
}

impl_sequence!(Vec, VecDeque, BTreeSet, HashSet);

impl<T: 'static, const N: usize> Reflect for [T; N]
where
	Self: Serialize + DeserializeOwned,
{
	fn node(&self) -> Node<'_> {
		Node::Sequence(self)
	}

	fn node_mut(&mut self) -> NodeMut<'_> {
		NodeMut::Sequence(self)
	}
}

impl<T: Reflect + Default> Reflect for Option<T> {
	fn node(&self) -> Node<'_> {
		Node::Pointer(self.as_ref().map(|value| value as &dyn Reflect))
	}

	fn node_mut(&mut self) -> NodeMut<'_> {
		NodeMut::Pointer(self)
	}
}

impl<T: Reflect + Default> PointerSlot for Option<T> {
	fn pointee(&self) -> Option<&dyn Reflect> {
		self.as_ref().map(|value| value as &dyn Reflect)
	}

	fn pointee_or_default(&mut self) -> &mut dyn Reflect {
		self.get_or_insert_with(T::default)
	}

	fn set_absent(&mut self) {
		*self = None;
	}
}

// Owning indirection is transparent: a `Box<T>` has the kind of `T`.
impl<T: Reflect> Reflect for Box<T> {
	fn node(&self) -> Node<'_> {
		(**self).node()
	}

	fn node_mut(&mut self) -> NodeMut<'_> {
		(**self).node_mut()
	}

	fn as_string_key(&self) -> Option<&str> {
		(**self).as_string_key()
	}

	fn as_string_key_mut(&mut self) -> Option<&mut String> {
		(**self).as_string_key_mut()
	}

	fn unboxed(&self) -> Option<&dyn Reflect> {
		Some(&**self)
	}
}

impl<K, V> Reflect for HashMap<K, V>
where
	K: Reflect + Default + Eq + Hash,
	V: Reflect + Default,
{
	fn node(&self) -> Node<'_> {
		Node::Map(self)
	}

	fn node_mut(&mut self) -> NodeMut<'_> {
		NodeMut::Map(self)
	}
}

impl<K, V> MapValue for HashMap<K, V>
where
	K: Reflect + Default + Eq + Hash,
	V: Reflect + Default,
{
	fn len(&self) -> usize {
		HashMap::len(self)
	}

	fn entries(&self) -> Vec<(&dyn Reflect, &dyn Reflect)> {
		self.iter().map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)).collect()
	}

	fn clear(&mut self) {
		HashMap::clear(self);
	}

	fn insert_with(&mut self, key: &str, fill: &mut dyn FnMut(&mut dyn Reflect) -> Result<()>) -> Result<()> {
		let (key, value) = new_entry::<K, V>(key, fill)?;
		self.insert(key, value);
		Ok(())
	}
}

impl<K, V> Reflect for BTreeMap<K, V>
where
	K: Reflect + Default + Ord,
	V: Reflect + Default,
{
	fn node(&self) -> Node<'_> {
		Node::Map(self)
	}

	fn node_mut(&mut self) -> NodeMut<'_> {
		NodeMut::Map(self)
	}
}

impl<K, V> MapValue for BTreeMap<K, V>
where
	K: Reflect + Default + Ord,
	V: Reflect + Default,
{
	fn len(&self) -> usize {
		BTreeMap::len(self)
	}

	fn entries(&self) -> Vec<(&dyn Reflect, &dyn Reflect)> {
		self.iter().map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)).collect()
	}

	fn clear(&mut self) {
		BTreeMap::clear(self);
	}

	fn insert_with(&mut self, key: &str, fill: &mut dyn FnMut(&mut dyn Reflect) -> Result<()>) -> Result<()> {
		let (key, value) = new_entry::<K, V>(key, fill)?;
		self.insert(key, value);
		Ok(())
	}
}

fn new_entry<K, V>(raw_key: &str, fill: &mut dyn FnMut(&mut dyn Reflect) -> Result<()>) -> Result<(K, V)>
where
	K: Reflect + Default,
	V: Reflect + Default,
{
	let mut key = K::default();
	unstringify_key(&mut key, raw_key)?;
	let mut value = V::default();
	fill(&mut value)?;
	Ok((key, value))
}

#[cfg(test)]
mod tests;
