//! Equality and ordering, between variants and against primitives.
//!
//! Two variants are compared by first resolving their tags to a [`Major`] type
//! with [`major_type`]. The table is total: every pair of tags either names a
//! common representation or is explicitly incomparable.
//!
//! Variant against variant `==` is an equivalence over every comparable pair:
//! numbers compare by exact value, text and binary by bytes, and text is never
//! parsed. [`Variant::loose_compare`] adds the number-against-text rule on top.

use std::cmp::Ordering;

use super::Variant;
use crate::scalar::{Class, Scalar};
use crate::{FloatWidth, IntWidth, Kind, Result, Tag};

/// 2^127, the first integral `f64` above `i128::MAX`.
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Representation two variants are compared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Major {
	/// Both sides are `Undefined`; they are equal.
	Undefined,
	/// Both sides are integers, compared exactly through `i128`.
	Int,
	/// Both sides are numbers and at least one is a float. Compared by exact
	/// value; an integer is never rounded to `f64`.
	Float,
	/// A number against text. Only [`Variant::loose_compare`] relates these, by
	/// parsing the text strictly. Plain comparison treats them as incomparable.
	Parsed,
	/// Text or binary on both sides: length and bytes for equality,
	/// lexicographic bytes for ordering.
	Bytes,
	/// No common representation.
	Incomparable,
}

/// Resolves the representation a pair of tags is compared in.
///
/// Symmetric: `major_type(a, b) == major_type(b, a)`.
pub fn major_type(a: Tag, b: Tag) -> Major {
	use Tag::*;
	match (a, b) {
		(Undefined, Undefined) => Major::Undefined,
		(SignedInt | UnsignedInt, SignedInt | UnsignedInt) => Major::Int,
		(Float, SignedInt | UnsignedInt | Float) | (SignedInt | UnsignedInt, Float) => Major::Float,
		(SignedInt | UnsignedInt | Float, String) | (String, SignedInt | UnsignedInt | Float) => {
			Major::Parsed
		}
		(String | Binary, String | Binary) => Major::Bytes,
		_ => Major::Incomparable,
	}
}

/// A stored or parsed number at full precision.
#[derive(Debug, Clone, Copy)]
enum Number {
	Int(i128),
	Float(f64),
}

impl Number {
	fn of<S: Scalar>(v: S) -> Self {
		match S::CLASS {
			Class::Signed => Self::Int(i128::from(v.to_i64())),
			Class::Unsigned => Self::Int(i128::from(v.to_u64())),
			Class::Float => Self::Float(v.to_f64()),
		}
	}

	/// Parses trimmed text as an integer, falling back to a float.
	fn parse(text: &str) -> Option<Self> {
		let text = text.trim();
		if let Ok(v) = text.parse::<i128>() {
			return Some(Self::Int(v));
		}
		text.parse::<f64>().ok().map(Self::Float)
	}

	fn compare(self, other: Self) -> Option<Ordering> {
		match (self, other) {
			(Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
			(Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
			(Self::Int(a), Self::Float(b)) => int_against_float(a, b),
			(Self::Float(a), Self::Int(b)) => int_against_float(b, a).map(Ordering::reverse),
		}
	}
}

/// Orders `i` against `f` without rounding either side.
fn int_against_float(i: i128, f: f64) -> Option<Ordering> {
	if f.is_nan() {
		return None;
	}
	let whole = f.trunc();
	if whole >= I128_BOUND {
		return Some(Ordering::Less);
	}
	if whole < -I128_BOUND {
		return Some(Ordering::Greater);
	}
	// `whole` is integral and in range, so the cast is exact.
	Some(i.cmp(&(whole as i128)).then(if f > whole {
		Ordering::Less
	} else if f < whole {
		Ordering::Greater
	} else {
		Ordering::Equal
	}))
}

impl Variant {
	/// Compares two variants, surfacing malformed numeric buffers as errors.
	///
	/// `Ok(None)` means the pair is incomparable (see [`major_type`]). Numbers
	/// against text are incomparable here; use
	/// [`loose_compare`](Self::loose_compare) to parse the text.
	pub fn try_compare(&self, other: &Variant) -> Result<Option<Ordering>> {
		Ok(match major_type(self.tag(), other.tag()) {
			Major::Undefined => Some(Ordering::Equal),
			Major::Int | Major::Float => self.number()?.compare(other.number()?),
			Major::Bytes => Some(self.buf.as_slice().cmp(other.buf.as_slice())),
			Major::Parsed | Major::Incomparable => None,
		})
	}

	/// Returns true if both variants compare equal under [`try_compare`](Self::try_compare).
	pub fn try_eq(&self, other: &Variant) -> Result<bool> {
		Ok(self.try_compare(other)? == Some(Ordering::Equal))
	}

	/// Like [`try_compare`](Self::try_compare), but a number against text parses
	/// the trimmed text strictly and compares the values. Text that is not a
	/// number stays incomparable.
	///
	/// This relation is not transitive (`"42"` and `" 42 "` both match `42` but
	/// not each other), which is why `==` does not use it.
	pub fn loose_compare(&self, other: &Variant) -> Result<Option<Ordering>> {
		if major_type(self.tag(), other.tag()) != Major::Parsed {
			return self.try_compare(other);
		}
		Ok(if self.tag() == Tag::String {
			other.against_text(self)?.map(Ordering::reverse)
		} else {
			self.against_text(other)?
		})
	}

	/// Returns true if both variants compare equal under
	/// [`loose_compare`](Self::loose_compare).
	pub fn loose_eq(&self, other: &Variant) -> Result<bool> {
		Ok(self.loose_compare(other)? == Some(Ordering::Equal))
	}

	fn against_text(&self, text: &Variant) -> Result<Option<Ordering>> {
		let number = self.number()?;
		Ok(text
			.as_str()
			.and_then(Number::parse)
			.and_then(|parsed| number.compare(parsed)))
	}

	fn number(&self) -> Result<Number> {
		match_numeric!(self, v => Ok(Number::of(v)), _ => Err(self.mismatch("number")))
	}
}

/// Built on [`Variant::try_compare`]. Malformed buffers compare unequal. Text
/// is compared as bytes and never parsed, so `Variant::from("0")` and
/// `Variant::from(0)` are unequal even though `Variant::from("0") == 0` holds.
impl PartialEq for Variant {
	fn eq(&self, other: &Self) -> bool {
		matches!(self.try_compare(other), Ok(Some(Ordering::Equal)))
	}
}

impl PartialOrd for Variant {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		self.try_compare(other).ok().flatten()
	}
}

macro_rules! impl_cmp_scalar {
	($($ty:ty),*) => {$(
		/// Reads the variant as the primitive through [`Variant::get`], so text is
		/// parsed leniently: `Variant::from("abc") == 0` holds, while
		/// `Variant::from("abc") == Variant::from(0)` does not.
		impl PartialEq<$ty> for Variant {
			fn eq(&self, other: &$ty) -> bool {
				self.get::<$ty>().is_ok_and(|v| v == *other)
			}
		}

		impl PartialOrd<$ty> for Variant {
			fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
				self.get::<$ty>().ok()?.partial_cmp(other)
			}
		}

		impl PartialEq<Variant> for $ty {
			fn eq(&self, other: &Variant) -> bool {
				other == self
			}
		}

		impl PartialOrd<Variant> for $ty {
			fn partial_cmp(&self, other: &Variant) -> Option<Ordering> {
				other.partial_cmp(self).map(Ordering::reverse)
			}
		}
	)*};
}

impl_cmp_scalar!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl PartialEq<bool> for Variant {
	fn eq(&self, other: &bool) -> bool {
		self.to_bool().is_ok_and(|v| v == *other)
	}
}

impl PartialEq<str> for Variant {
	fn eq(&self, other: &str) -> bool {
		self.to_text().is_ok_and(|v| v == other)
	}
}

impl PartialOrd<str> for Variant {
	fn partial_cmp(&self, other: &str) -> Option<Ordering> {
		Some(self.to_text().ok()?.as_str().cmp(other))
	}
}

impl PartialEq<&str> for Variant {
	fn eq(&self, other: &&str) -> bool {
		*self == **other
	}
}

impl PartialOrd<&str> for Variant {
	fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
		self.partial_cmp(*other)
	}
}

impl PartialEq<String> for Variant {
	fn eq(&self, other: &String) -> bool {
		*self == *other.as_str()
	}
}

impl PartialOrd<String> for Variant {
	fn partial_cmp(&self, other: &String) -> Option<Ordering> {
		self.partial_cmp(other.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn major_type_is_symmetric() {
		let tags = [
			Tag::Undefined,
			Tag::SignedInt,
			Tag::UnsignedInt,
			Tag::Float,
			Tag::String,
			Tag::Binary,
		];
		for a in tags {
			for b in tags {
				assert_eq!(major_type(a, b), major_type(b, a), "{a} vs {b}");
			}
		}
	}

	#[test]
	fn major_type_table() {
		assert_eq!(major_type(Tag::SignedInt, Tag::UnsignedInt), Major::Int);
		assert_eq!(major_type(Tag::Float, Tag::UnsignedInt), Major::Float);
		assert_eq!(major_type(Tag::String, Tag::SignedInt), Major::Parsed);
		assert_eq!(major_type(Tag::Float, Tag::String), Major::Parsed);
		assert_eq!(major_type(Tag::String, Tag::String), Major::Bytes);
		assert_eq!(major_type(Tag::Binary, Tag::String), Major::Bytes);
		assert_eq!(major_type(Tag::Binary, Tag::SignedInt), Major::Incomparable);
		assert_eq!(major_type(Tag::Undefined, Tag::String), Major::Incomparable);
	}

	#[test]
	fn integers_against_floats_are_exact() {
		let big = i128::from(u64::MAX);
		assert_eq!(int_against_float(big, u64::MAX as f64), Some(Ordering::Less));
		assert_eq!(int_against_float(1 << 53, 9007199254740992.0), Some(Ordering::Equal));
		assert_eq!(int_against_float((1 << 53) + 1, 9007199254740992.0), Some(Ordering::Greater));
		assert_eq!(int_against_float(2, 2.5), Some(Ordering::Less));
		assert_eq!(int_against_float(-3, -3.5), Some(Ordering::Greater));
		assert_eq!(int_against_float(0, -0.0), Some(Ordering::Equal));
		assert_eq!(int_against_float(i128::MAX, f64::INFINITY), Some(Ordering::Less));
		assert_eq!(int_against_float(i128::MIN, -1e300), Some(Ordering::Greater));
		assert_eq!(int_against_float(0, f64::NAN), None);
	}
}
