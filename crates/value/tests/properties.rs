#![allow(unused_crate_dependencies)]
//! Property tests for round trips and comparison consistency.

use std::cmp::Ordering;

use proptest::prelude::*;
use varia_value::{Kind, TextParse, Variant};

/// Small values of every kind, so that equal pairs across kinds are common.
fn mixed_kinds() -> impl Strategy<Value = Variant> {
	prop_oneof![
		(-3i8..=3).prop_map(Variant::from),
		(-3i64..=3).prop_map(Variant::from),
		(0u16..=3).prop_map(Variant::from),
		prop::sample::select(vec![u64::MAX, u64::MAX - 1, 1 << 53, (1 << 53) + 1])
			.prop_map(Variant::from),
		prop::sample::select(vec![u64::MAX as f64, 9007199254740992.0, -1.5, 0.5, 2.0])
			.prop_map(Variant::from),
		(-3i16..=3).prop_map(|v| Variant::from(f32::from(v))),
		(-3i64..=3, "[ ]?").prop_map(|(v, pad)| Variant::from(format!("{pad}{v}{pad}"))),
		(-3i64..=3).prop_map(|v| Variant::from(v.to_string().into_bytes())),
		Just(Variant::new()),
	]
}

macro_rules! round_trip {
	($($name:ident: $ty:ty;)*) => {
		proptest! {$(
			#[test]
			fn $name(v in any::<$ty>()) {
				let value = Variant::from(v);
				prop_assert_eq!(value.get::<$ty>(), Ok(v));
				prop_assert_eq!(value.size(), size_of::<$ty>());
			}
		)*}
	};
}

round_trip! {
	round_trip_i8: i8;
	round_trip_i16: i16;
	round_trip_i32: i32;
	round_trip_i64: i64;
	round_trip_u8: u8;
	round_trip_u16: u16;
	round_trip_u32: u32;
	round_trip_u64: u64;
}

proptest! {
	#[test]
	fn float_round_trip(v in any::<f64>().prop_filter("nan", |v| !v.is_nan())) {
		prop_assert_eq!(Variant::from(v).get::<f64>(), Ok(v));
	}

	#[test]
	fn decimal_text_round_trip(v in any::<i64>()) {
		let text = Variant::from(v).to_text().unwrap();
		prop_assert_eq!(Variant::from(text.as_str()).get_with::<i64>(TextParse::Strict), Ok(v));
	}

	#[test]
	fn text_round_trip(s in ".+") {
		let value = Variant::from(s.as_str());
		prop_assert_eq!(value.kind(), Kind::String);
		prop_assert_eq!(value.to_text(), Ok(s));
	}

	#[test]
	fn truncated_binary_is_unequal(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
		let a = Variant::from(bytes.clone());
		let mut b = Variant::from(bytes);
		prop_assert_eq!(&a, &b);
		let len = b.size();
		b.resize(len - 1);
		prop_assert_ne!(&a, &b);
	}

	#[test]
	fn mixed_integer_equality_is_exact(a in any::<i64>(), b in any::<u32>()) {
		let left = Variant::from(a);
		let right = Variant::from(b);
		prop_assert_eq!(left == right, a == i64::from(b));
		prop_assert_eq!(left == right, right == left);
	}

	#[test]
	fn equality_is_transitive_across_kinds(
		a in mixed_kinds(),
		b in mixed_kinds(),
		c in mixed_kinds()
	) {
		if a == b && b == c {
			prop_assert_eq!(&a, &c);
		}
		if a < b && b < c {
			prop_assert!(a < c);
		}
	}

	#[test]
	fn ordering_agrees_with_equality(a in mixed_kinds(), b in mixed_kinds()) {
		prop_assert_eq!(a == b, a.partial_cmp(&b) == Some(Ordering::Equal));
		prop_assert_eq!(a.partial_cmp(&b), b.partial_cmp(&a).map(Ordering::reverse));
	}
}
