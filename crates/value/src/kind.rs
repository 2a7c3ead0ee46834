use std::fmt;

/// Coarse discriminant of a [`Variant`](crate::Variant).
///
/// This is what callers usually branch on. The width of numeric values lives in
/// [`Kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
	/// Nothing stored yet, or cleared.
	#[default]
	Undefined,
	/// Two's complement integer.
	SignedInt,
	/// Unsigned integer.
	UnsignedInt,
	/// IEEE 754 binary floating point.
	Float,
	/// Text bytes.
	String,
	/// Opaque bytes.
	Binary,
}

impl Tag {
	/// Returns true for the integer and float tags.
	#[inline]
	pub fn is_numeric(self) -> bool {
		matches!(self, Self::SignedInt | Self::UnsignedInt | Self::Float)
	}
}

impl fmt::Display for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Undefined => "undefined",
			Self::SignedInt => "signed int",
			Self::UnsignedInt => "unsigned int",
			Self::Float => "float",
			Self::String => "string",
			Self::Binary => "binary",
		})
	}
}

/// Byte width of a stored integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntWidth {
	W8,
	W16,
	W32,
	W64,
}

impl IntWidth {
	/// Number of bytes an integer of this width occupies.
	#[inline]
	pub const fn bytes(self) -> usize {
		match self {
			Self::W8 => 1,
			Self::W16 => 2,
			Self::W32 => 4,
			Self::W64 => 8,
		}
	}

	/// Maps a buffer length back to a width.
	pub const fn from_bytes(len: usize) -> Option<Self> {
		match len {
			1 => Some(Self::W8),
			2 => Some(Self::W16),
			4 => Some(Self::W32),
			8 => Some(Self::W64),
			_ => None,
		}
	}
}

/// Byte width of a stored float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FloatWidth {
	F32,
	F64,
}

impl FloatWidth {
	/// Number of bytes a float of this width occupies.
	#[inline]
	pub const fn bytes(self) -> usize {
		match self {
			Self::F32 => 4,
			Self::F64 => 8,
		}
	}

	/// Maps a buffer length back to a width.
	pub const fn from_bytes(len: usize) -> Option<Self> {
		match len {
			4 => Some(Self::F32),
			8 => Some(Self::F64),
			_ => None,
		}
	}
}

/// Full interpretation of a variant's buffer: the tag plus, for numbers, the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
	#[default]
	Undefined,
	SignedInt(IntWidth),
	UnsignedInt(IntWidth),
	Float(FloatWidth),
	String,
	Binary,
}

impl Kind {
	/// Drops the width.
	pub const fn tag(self) -> Tag {
		match self {
			Self::Undefined => Tag::Undefined,
			Self::SignedInt(_) => Tag::SignedInt,
			Self::UnsignedInt(_) => Tag::UnsignedInt,
			Self::Float(_) => Tag::Float,
			Self::String => Tag::String,
			Self::Binary => Tag::Binary,
		}
	}

	/// Buffer length this kind requires, or `None` when any length is valid.
	pub const fn width(self) -> Option<usize> {
		match self {
			Self::SignedInt(w) | Self::UnsignedInt(w) => Some(w.bytes()),
			Self::Float(w) => Some(w.bytes()),
			Self::Undefined => Some(0),
			Self::String | Self::Binary => None,
		}
	}
}

impl From<Kind> for Tag {
	fn from(kind: Kind) -> Self {
		kind.tag()
	}
}
