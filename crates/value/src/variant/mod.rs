//! The [`Variant`] type: a byte buffer plus the [`Kind`] that says how to read it.

use crate::scalar::Scalar;
use crate::{IntWidth, Kind, Result, Tag, VariantError};

/// Reads the stored number at its own width and binds it to `$v`.
///
/// `$body` runs once per numeric kind with `$v` typed as that kind's primitive.
/// Every other kind takes the `_` arm.
macro_rules! match_numeric {
	($this:expr, $v:ident => $body:expr, _ => $other:expr) => {
		match $this.kind() {
			Kind::SignedInt(IntWidth::W8) => {
				let $v: i8 = $this.read()?;
				$body
			}
			Kind::SignedInt(IntWidth::W16) => {
				let $v: i16 = $this.read()?;
				$body
			}
			Kind::SignedInt(IntWidth::W32) => {
				let $v: i32 = $this.read()?;
				$body
			}
			Kind::SignedInt(IntWidth::W64) => {
				let $v: i64 = $this.read()?;
				$body
			}
			Kind::UnsignedInt(IntWidth::W8) => {
				let $v: u8 = $this.read()?;
				$body
			}
			Kind::UnsignedInt(IntWidth::W16) => {
				let $v: u16 = $this.read()?;
				$body
			}
			Kind::UnsignedInt(IntWidth::W32) => {
				let $v: u32 = $this.read()?;
				$body
			}
			Kind::UnsignedInt(IntWidth::W64) => {
				let $v: u64 = $this.read()?;
				$body
			}
			Kind::Float(FloatWidth::F32) => {
				let $v: f32 = $this.read()?;
				$body
			}
			Kind::Float(FloatWidth::F64) => {
				let $v: f64 = $this.read()?;
				$body
			}
			_ => $other,
		}
	};
}

mod arith;
mod compare;
mod convert;

pub use compare::{Major, major_type};


/// A self-describing value: a tagged, exclusively owned byte buffer.
///
/// Numbers are stored in host byte order at the width recorded in [`Kind`].
/// Strings and blobs are stored verbatim. Clones never share the buffer.
#[derive(Debug, Clone, Default)]
pub struct Variant {
	kind: Kind,
	buf: Vec<u8>,
}

impl Variant {
	/// Creates an empty `Undefined` value.
	pub const fn new() -> Self {
		Self {
			kind: Kind::Undefined,
			buf: Vec::new(),
		}
	}

	/// Builds a value from a kind and its raw bytes.
	///
	/// Numeric kinds require exactly their width in bytes, and `Undefined`
	/// requires no bytes.
	pub fn from_raw(kind: Kind, bytes: &[u8]) -> Result<Self> {
		if let Some(width) = kind.width()
			&& width != bytes.len()
		{
			return Err(VariantError::InvalidWidth {
				tag: kind.tag(),
				len: bytes.len(),
			});
		}
		let mut out = Self::new();
		out.store(kind, bytes);
		Ok(out)
	}

	/// Replaces the contents with `value`.
	///
	/// Empty text and empty byte sequences leave the value untouched.
	pub fn set(&mut self, value: impl Assign) {
		value.assign_to(self);
	}

	/// Returns the full interpretation of the buffer.
	#[inline]
	pub fn kind(&self) -> Kind {
		self.kind
	}

	/// Returns the coarse tag.
	#[inline]
	pub fn tag(&self) -> Tag {
		self.kind.tag()
	}

	/// Returns true if nothing has been stored.
	#[inline]
	pub fn is_undefined(&self) -> bool {
		self.kind == Kind::Undefined
	}

	/// Number of stored bytes.
	#[inline]
	pub fn size(&self) -> usize {
		self.buf.len()
	}

	/// Alias of [`size`](Self::size).
	#[inline]
	pub fn len(&self) -> usize {
		self.buf.len()
	}

	/// Returns true if the buffer holds no bytes.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.buf.is_empty()
	}

	/// Bytes currently allocated for the buffer.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.buf.capacity()
	}

	/// Raw buffer.
	#[inline]
	pub fn data(&self) -> &[u8] {
		&self.buf
	}

	/// Raw buffer, writable in place. The kind is left as is.
	#[inline]
	pub fn data_mut(&mut self) -> &mut [u8] {
		&mut self.buf
	}

	/// Copies the raw buffer out. Never fails, whatever the tag.
	pub fn to_bytes(&self) -> Vec<u8> {
		self.buf.clone()
	}

	/// Consumes the value and returns its raw buffer.
	pub fn into_bytes(self) -> Vec<u8> {
		self.buf
	}

	/// Empties the buffer and resets the kind to `Undefined`.
	pub fn clear(&mut self) {
		self.buf.clear();
		self.kind = Kind::Undefined;
	}

	/// Sets the buffer length to `len`, zero-filling any new bytes.
	///
	/// The allocation is trimmed to fit whenever it ends up larger than `len`, so
	/// a value never holds on to its peak size after shrinking.
	pub fn resize(&mut self, len: usize) {
		self.buf.resize(len, 0);
		self.release_excess();
	}

	/// Copies every stored byte to the front of `dst` and returns the count.
	pub fn copy_to(&self, dst: &mut [u8]) -> Result<usize> {
		self.check_room(dst)?;
		dst[..self.buf.len()].copy_from_slice(&self.buf);
		Ok(self.buf.len())
	}

	/// Copies the first `count` stored bytes to the front of `dst`.
	///
	/// `dst` must still be able to hold the whole buffer.
	pub fn copy_to_count(&self, dst: &mut [u8], count: usize) -> Result<()> {
		self.check_room(dst)?;
		if count > self.buf.len() {
			return Err(VariantError::Length {
				requested: count,
				available: self.buf.len(),
			});
		}
		dst[..count].copy_from_slice(&self.buf[..count]);
		Ok(())
	}

	fn check_room(&self, dst: &[u8]) -> Result<()> {
		if dst.len() < self.buf.len() {
			return Err(VariantError::Overflow {
				required: self.buf.len(),
				capacity: dst.len(),
			});
		}
		Ok(())
	}

	/// Overwrites buffer and kind together.
	fn store(&mut self, kind: Kind, bytes: &[u8]) {
		self.buf.clear();
		self.buf.reserve_exact(bytes.len());
		self.buf.extend_from_slice(bytes);
		self.release_excess();
		self.kind = kind;
	}

	fn store_scalar<T: Scalar>(&mut self, value: T) {
		value.with_ne_bytes(|bytes| self.store(T::KIND, bytes));
	}

	fn release_excess(&mut self) {
		if self.buf.capacity() > self.buf.len() {
			self.buf = self.buf.as_slice().to_vec();
		}
	}

	/// Reads the buffer as `T` at exactly `T`'s width.
	fn read<T: Scalar>(&self) -> Result<T> {
		T::read_ne(&self.buf).ok_or(VariantError::InvalidWidth {
			tag: self.tag(),
			len: self.buf.len(),
		})
	}

	fn mismatch(&self, target: &'static str) -> VariantError {
		VariantError::TypeMismatch {
			tag: self.tag(),
			target,
		}
	}
}

/// Types that can be stored into a [`Variant`].
pub trait Assign {
	/// Writes `self` into `target`, replacing its contents.
	fn assign_to(self, target: &mut Variant);
}

impl<T: Scalar> Assign for T {
	fn assign_to(self, target: &mut Variant) {
		target.store_scalar(self);
	}
}

impl Assign for bool {
	fn assign_to(self, target: &mut Variant) {
		target.store(Kind::SignedInt(IntWidth::W8), &[self as u8]);
	}
}

impl Assign for &str {
	fn assign_to(self, target: &mut Variant) {
		if !self.is_empty() {
			target.store(Kind::String, self.as_bytes());
		}
	}
}

impl Assign for &String {
	fn assign_to(self, target: &mut Variant) {
		self.as_str().assign_to(target);
	}
}

impl Assign for String {
	fn assign_to(self, target: &mut Variant) {
		self.as_str().assign_to(target);
	}
}

impl Assign for &[u8] {
	fn assign_to(self, target: &mut Variant) {
		if !self.is_empty() {
			target.store(Kind::Binary, self);
		}
	}
}

impl Assign for &Vec<u8> {
	fn assign_to(self, target: &mut Variant) {
		self.as_slice().assign_to(target);
	}
}

impl Assign for Vec<u8> {
	fn assign_to(self, target: &mut Variant) {
		self.as_slice().assign_to(target);
	}
}

impl Assign for &Variant {
	fn assign_to(self, target: &mut Variant) {
		target.store(self.kind, &self.buf);
	}
}

macro_rules! impl_from_assign {
	($($ty:ty),* $(,)?) => {$(
		impl From<$ty> for Variant {
			fn from(value: $ty) -> Self {
				let mut out = Self::new();
				out.set(value);
				out
			}
		}
	)*};
}

impl_from_assign!(
	i8,
	i16,
	i32,
	i64,
	u8,
	u16,
	u32,
	u64,
	f32,
	f64,
	bool,
	&str,
	String,
	&String,
	&[u8],
	Vec<u8>,
);
