use thiserror::Error;

use crate::Tag;

/// Errors produced when reading, comparing, copying or adding variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
	/// The stored tag cannot be read as the requested type.
	#[error("type mismatch: cannot read {tag} as {target}")]
	TypeMismatch {
		/// Tag of the value being read.
		tag: Tag,
		/// Name of the requested type.
		target: &'static str,
	},
	/// A numeric tag whose buffer length is not a width the tag can hold.
	#[error("type mismatch: {len} byte buffer is not a valid {tag} width")]
	InvalidWidth {
		/// Tag of the value being read.
		tag: Tag,
		/// Actual buffer length.
		len: usize,
	},
	/// Text rejected by strict numeric parsing.
	#[error("type mismatch: text is not a valid {target}")]
	InvalidText {
		/// Name of the requested type.
		target: &'static str,
	},
	/// Destination buffer shorter than the stored bytes.
	#[error("destination buffer too small: need {required} bytes, have {capacity}")]
	Overflow { required: usize, capacity: usize },
	/// Copy count larger than the stored bytes.
	#[error("requested {requested} bytes but only {available} are stored")]
	Length { requested: usize, available: usize },
	/// Operation not defined for the stored tag.
	#[error("unsupported operation: {op} on {tag}")]
	Unsupported { op: &'static str, tag: Tag },
}

impl VariantError {
	/// Returns true for every error in the type-mismatch family.
	pub fn is_type_mismatch(&self) -> bool {
		matches!(
			self,
			Self::TypeMismatch { .. } | Self::InvalidWidth { .. } | Self::InvalidText { .. }
		)
	}
}

/// Result alias for variant operations.
pub type Result<T, E = VariantError> = std::result::Result<T, E>;
