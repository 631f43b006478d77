use std::collections::{BTreeMap, HashMap, VecDeque};

use serde_json::json;

use crate::codec::test_support::Known;
use crate::codec::{Kind, MapValue, Node, NodeMut, PointerSlot, Reflect, Result};

#[test]
fn builtin_kinds() {
	assert_eq!(3_i32.kind(), Kind::Scalar);
	assert_eq!(String::new().kind(), Kind::Scalar);
	assert_eq!(json!({"a": 1}).kind(), Kind::Scalar);
	assert_eq!(vec![1_u8].kind(), Kind::Sequence);
	assert_eq!(VecDeque::<u8>::new().kind(), Kind::Sequence);
	assert_eq!([0.5_f64; 3].kind(), Kind::Sequence);
	assert_eq!(None::<i64>.kind(), Kind::Pointer);
	assert_eq!(HashMap::<String, i64>::new().kind(), Kind::Map);
	assert_eq!(BTreeMap::<String, i64>::new().kind(), Kind::Map);
	assert_eq!(Known::default().kind(), Kind::Struct);
}

#[test]
fn box_is_transparent() {
	let boxed = Box::new(Known { a: 2 });
	assert_eq!(boxed.kind(), Kind::Struct);
	let inner = boxed.unboxed().expect("box has an inner value");
	assert_eq!(inner.as_any().downcast_ref::<Known>(), Some(&Known { a: 2 }));
	assert!(Known::default().unboxed().is_none());
}

#[test]
fn option_pointer_allocates_and_resets() {
	let mut limit: Option<i64> = None;
	assert!(limit.pointee().is_none());
	let NodeMut::Scalar(plain) = limit.pointee_or_default().node_mut() else {
		panic!("i64 pointee is scalar");
	};
	plain.set_json(&json!(12)).expect("number fits i64");
	assert_eq!(limit, Some(12));

	limit.set_absent();
	assert_eq!(limit, None);
}

#[test]
fn map_insert_with_fills_default_value() -> Result<()> {
	let mut map: BTreeMap<String, Known> = BTreeMap::new();
	map.insert_with("x", &mut |slot: &mut dyn Reflect| {
		let NodeMut::Struct(record) = slot.node_mut() else {
			panic!("Known is a struct");
		};
		let field = record.field_mut(0).expect("A is reflected");
		let NodeMut::Scalar(plain) = field.node_mut() else {
			panic!("A is scalar");
		};
		plain.set_json(&json!(9))?;
		Ok(())
	})?;

	assert_eq!(MapValue::len(&map), 1);
	assert_eq!(map.get("x"), Some(&Known { a: 9 }));
	MapValue::clear(&mut map);
	assert!(MapValue::is_empty(&map));
	Ok(())
}

#[test]
fn map_entries_expose_keys_and_values() {
	let mut map: HashMap<String, i64> = HashMap::new();
	map.insert("k".to_owned(), 4);

	let entries = MapValue::entries(&map);
	assert_eq!(entries.len(), 1);
	let (key, value) = entries[0];
	assert_eq!(key.as_string_key(), Some("k"));
	assert_eq!(value.as_any().downcast_ref::<i64>(), Some(&4));
}

#[test]
fn plain_values_round_trip_through_serde() {
	let mut sizes = vec![1_u32, 2];
	let Node::Sequence(plain) = sizes.node() else {
		panic!("Vec is a sequence");
	};
	assert_eq!(plain.to_json().expect("serialize"), json!([1, 2]));

	let NodeMut::Sequence(plain) = sizes.node_mut() else {
		panic!("Vec is a sequence");
	};
	plain.set_json(&json!([7])).expect("deserialize");
	assert_eq!(sizes, vec![7]);
}
