//! Fixed-width numeric primitives a [`Variant`](crate::Variant) can store and read.

use std::fmt;
use std::str::FromStr;

use crate::parse::{TextParse, numeric_prefix};
use crate::{FloatWidth, IntWidth, Kind};

mod sealed {
	pub trait Sealed {}
}

/// Numeric class of a [`Scalar`], used to pick the lossless intermediate for casts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
	Signed,
	Unsigned,
	Float,
}

/// A fixed-width integer or float that round-trips through a variant buffer.
///
/// Implemented for `i8`..`i64`, `u8`..`u64`, `f32` and `f64`. Sealed.
pub trait Scalar:
	Copy
	+ PartialEq
	+ PartialOrd
	+ fmt::Debug
	+ fmt::Display
	+ FromStr
	+ sealed::Sealed
	+ 'static
{
	/// Type name used in error messages.
	const NAME: &'static str;
	/// Kind a value of this type is stored as.
	const KIND: Kind;
	/// Numeric class of this type.
	const CLASS: Class;

	#[doc(hidden)]
	fn from_i64(v: i64) -> Self;
	#[doc(hidden)]
	fn from_u64(v: u64) -> Self;
	#[doc(hidden)]
	fn from_f64(v: f64) -> Self;
	#[doc(hidden)]
	fn to_i64(self) -> i64;
	#[doc(hidden)]
	fn to_u64(self) -> u64;
	#[doc(hidden)]
	fn to_f64(self) -> f64;

	/// Reinterprets exactly `size_of::<Self>()` native-endian bytes.
	fn read_ne(bytes: &[u8]) -> Option<Self>;

	/// Calls `f` with the native-endian representation.
	fn with_ne_bytes<R>(self, f: impl FnOnce(&[u8]) -> R) -> R;

	/// Returns true when the value equals zero.
	fn is_zero(self) -> bool;

	/// Adds with two's complement wrap for integers, IEEE rounding for floats.
	fn wrapping_add(self, rhs: Self) -> Self;

	/// Converts to another scalar with `as` semantics.
	#[inline]
	fn cast<U: Scalar>(self) -> U {
		match Self::CLASS {
			Class::Signed => U::from_i64(self.to_i64()),
			Class::Unsigned => U::from_u64(self.to_u64()),
			Class::Float => U::from_f64(self.to_f64()),
		}
	}

	/// Parses text according to `mode`.
	///
	/// Lenient parsing never fails: a missing or unparsable prefix yields zero.
	fn parse_text(text: &str, mode: TextParse) -> Option<Self> {
		match mode {
			TextParse::Strict => text.trim().parse().ok(),
			TextParse::Lenient => {
				let prefix = numeric_prefix(text, Self::CLASS == Class::Float);
				match prefix.parse() {
					Ok(v) => Some(v),
					Err(_) => {
						tracing::trace!(ty = Self::NAME, text, "lenient parse fell back to zero");
						Some(Self::from_i64(0))
					}
				}
			}
		}
	}
}

macro_rules! impl_int_scalar {
	($($ty:ty => $class:ident, $kind:ident($width:ident);)*) => {$(
		impl sealed::Sealed for $ty {}

		impl Scalar for $ty {
			const NAME: &'static str = stringify!($ty);
			const KIND: Kind = Kind::$kind(IntWidth::$width);
			const CLASS: Class = Class::$class;

			#[inline]
			fn from_i64(v: i64) -> Self {
				v as $ty
			}
			#[inline]
			fn from_u64(v: u64) -> Self {
				v as $ty
			}
			#[inline]
			fn from_f64(v: f64) -> Self {
				v as $ty
			}
			#[inline]
			fn to_i64(self) -> i64 {
				self as i64
			}
			#[inline]
			fn to_u64(self) -> u64 {
				self as u64
			}
			#[inline]
			fn to_f64(self) -> f64 {
				self as f64
			}

			fn read_ne(bytes: &[u8]) -> Option<Self> {
				bytes.try_into().ok().map(<$ty>::from_ne_bytes)
			}

			fn with_ne_bytes<R>(self, f: impl FnOnce(&[u8]) -> R) -> R {
				f(&self.to_ne_bytes())
			}

			#[inline]
			fn is_zero(self) -> bool {
				self == 0
			}

			#[inline]
			fn wrapping_add(self, rhs: Self) -> Self {
				<$ty>::wrapping_add(self, rhs)
			}
		}
	)*};
}

macro_rules! impl_float_scalar {
	($($ty:ty => $width:ident;)*) => {$(
		impl sealed::Sealed for $ty {}

		impl Scalar for $ty {
			const NAME: &'static str = stringify!($ty);
			const KIND: Kind = Kind::Float(FloatWidth::$width);
			const CLASS: Class = Class::Float;

			#[inline]
			fn from_i64(v: i64) -> Self {
				v as $ty
			}
			#[inline]
			fn from_u64(v: u64) -> Self {
				v as $ty
			}
			#[inline]
			fn from_f64(v: f64) -> Self {
				v as $ty
			}
			#[inline]
			fn to_i64(self) -> i64 {
				self as i64
			}
			#[inline]
			fn to_u64(self) -> u64 {
				self as u64
			}
			#[inline]
			fn to_f64(self) -> f64 {
				self as f64
			}

			fn read_ne(bytes: &[u8]) -> Option<Self> {
				bytes.try_into().ok().map(<$ty>::from_ne_bytes)
			}

			fn with_ne_bytes<R>(self, f: impl FnOnce(&[u8]) -> R) -> R {
				f(&self.to_ne_bytes())
			}

			#[inline]
			fn is_zero(self) -> bool {
				self == 0.0
			}

			#[inline]
			fn wrapping_add(self, rhs: Self) -> Self {
				self + rhs
			}
		}
	)*};
}

impl_int_scalar! {
	i8 => Signed, SignedInt(W8);
	i16 => Signed, SignedInt(W16);
	i32 => Signed, SignedInt(W32);
	i64 => Signed, SignedInt(W64);
	u8 => Unsigned, UnsignedInt(W8);
	u16 => Unsigned, UnsignedInt(W16);
	u32 => Unsigned, UnsignedInt(W32);
	u64 => Unsigned, UnsignedInt(W64);
}

impl_float_scalar! {
	f32 => F32;
	f64 => F64;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cast_follows_as_semantics() {
		assert_eq!(300i32.cast::<u8>(), 44);
		assert_eq!((-1i8).cast::<u32>(), u32::MAX);
		assert_eq!(u64::MAX.cast::<i64>(), -1);
		assert_eq!(2.9f64.cast::<i32>(), 2);
		assert_eq!(1e10f32.cast::<i16>(), i16::MAX);
		assert_eq!(7u16.cast::<f32>(), 7.0);
	}

	#[test]
	fn read_requires_exact_width() {
		assert_eq!(i16::read_ne(&5i16.to_ne_bytes()), Some(5));
		assert_eq!(i16::read_ne(&[1, 2, 3]), None);
		assert_eq!(f64::read_ne(&1.25f64.to_ne_bytes()), Some(1.25));
	}

	#[test]
	fn lenient_parse_takes_prefix() {
		assert_eq!(i32::parse_text(" 12 apples", TextParse::Lenient), Some(12));
		assert_eq!(i32::parse_text("3.9", TextParse::Lenient), Some(3));
		assert_eq!(f64::parse_text("2.5kg", TextParse::Lenient), Some(2.5));
		assert_eq!(u8::parse_text("pear", TextParse::Lenient), Some(0));
		assert_eq!(u8::parse_text("999", TextParse::Lenient), Some(0));
	}

	#[test]
	fn strict_parse_rejects_trailing_text() {
		assert_eq!(i32::parse_text(" 12 ", TextParse::Strict), Some(12));
		assert_eq!(i32::parse_text("12 apples", TextParse::Strict), None);
		assert_eq!(f32::parse_text("1e3", TextParse::Strict), Some(1000.0));
	}
}
