use super::Variant;
use crate::scalar::Scalar;
use crate::{FloatWidth, IntWidth, Kind, Result, TextParse, VariantError};

/// Strings that read as `true`, compared after ASCII lower-casing.
const TRUE_TOKENS: &[&str] = &["true", "yes", "1", "on", "enabled"];
/// Strings that read as `false`, compared after ASCII lower-casing.
const FALSE_TOKENS: &[&str] = &["false", "no", "0", "off", "disabled"];

impl Variant {
	/// Reads the value as `T`, parsing text leniently.
	///
	/// - `Undefined` fails.
	/// - Numbers are read at their stored width and cast with `as`.
	/// - Text is parsed per [`TextParse::Lenient`].
	/// - Binary up to `T`'s width is zero-extended on the high-address side and
	///   reinterpreted. Longer binary fails.
	pub fn get<T: Scalar>(&self) -> Result<T> {
		self.get_with(TextParse::default())
	}

	/// Reads the value as `T`, parsing text according to `mode`.
	pub fn get_with<T: Scalar>(&self, mode: TextParse) -> Result<T> {
		match_numeric!(self, v => Ok(v.cast::<T>()), _ => match self.kind {
			Kind::String => {
				let text = self.text_as(T::NAME)?;
				T::parse_text(text, mode).ok_or(VariantError::InvalidText { target: T::NAME })
			}
			Kind::Binary => {
				let width = size_of::<T>();
				if self.buf.len() > width {
					return Err(self.mismatch(T::NAME));
				}
				let mut raw = [0u8; 8];
				raw[..self.buf.len()].copy_from_slice(&self.buf);
				T::read_ne(&raw[..width]).ok_or(self.mismatch(T::NAME))
			}
			_ => Err(self.mismatch(T::NAME)),
		})
	}

	/// Reads the value as a boolean.
	///
	/// Numbers are true when nonzero. Text must be one of the recognised
	/// tokens, in any ASCII case. Every other tag fails.
	pub fn to_bool(&self) -> Result<bool> {
		match_numeric!(self, v => Ok(!v.is_zero()), _ => match self.kind {
			Kind::String => {
				let token = self.text_as("bool")?.to_ascii_lowercase();
				if TRUE_TOKENS.contains(&token.as_str()) {
					Ok(true)
				} else if FALSE_TOKENS.contains(&token.as_str()) {
					Ok(false)
				} else {
					Err(self.mismatch("bool"))
				}
			}
			_ => Err(self.mismatch("bool")),
		})
	}

	/// Renders the value as text.
	///
	/// `Undefined` renders empty, numbers in decimal at their stored width.
	/// Text and binary are returned byte for byte and must be valid UTF-8.
	pub fn to_text(&self) -> Result<String> {
		match_numeric!(self, v => Ok(v.to_string()), _ => match self.kind {
			Kind::Undefined => Ok(String::new()),
			_ => self.text_as("String").map(str::to_owned),
		})
	}

	/// Borrows text or binary content as `&str` when it is valid UTF-8.
	pub fn as_str(&self) -> Option<&str> {
		match self.kind {
			Kind::String | Kind::Binary => std::str::from_utf8(&self.buf).ok(),
			_ => None,
		}
	}

	fn text_as(&self, target: &'static str) -> Result<&str> {
		self.as_str().ok_or(self.mismatch(target))
	}
}

macro_rules! impl_try_from_variant {
	($($ty:ty),*) => {$(
		impl TryFrom<&Variant> for $ty {
			type Error = VariantError;

			fn try_from(value: &Variant) -> Result<Self> {
				value.get()
			}
		}
	)*};
}

impl_try_from_variant!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl TryFrom<&Variant> for bool {
	type Error = VariantError;

	fn try_from(value: &Variant) -> Result<Self> {
		value.to_bool()
	}
}

impl TryFrom<&Variant> for String {
	type Error = VariantError;

	fn try_from(value: &Variant) -> Result<Self> {
		value.to_text()
	}
}

impl From<&Variant> for Vec<u8> {
	fn from(value: &Variant) -> Self {
		value.to_bytes()
	}
}

impl From<Variant> for Vec<u8> {
	fn from(value: Variant) -> Self {
		value.into_bytes()
	}
}
