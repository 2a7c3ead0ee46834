use super::Variant;
use crate::scalar::Scalar;
use crate::{FloatWidth, IntWidth, Kind, Result, VariantError};

impl Variant {
	/// Adds `rhs` in place, keeping the stored kind and width.
	///
	/// The addend is cast to the stored type first. Integers wrap at their width
	/// instead of widening. An `Undefined` value takes `rhs` as is. Text and
	/// binary values reject addition.
	pub fn try_add_assign<T: Scalar>(&mut self, rhs: T) -> Result<()> {
		match_numeric!(self, v => {
			self.set(v.wrapping_add(rhs.cast()));
			Ok(())
		}, _ => match self.kind {
			Kind::Undefined => {
				self.set(rhs);
				Ok(())
			}
			_ => Err(self.unsupported("add")),
		})
	}

	/// Returns the sum of a numeric value and `rhs`, leaving `self` untouched.
	///
	/// Only defined for numeric kinds.
	pub fn try_add<T: Scalar>(&self, rhs: T) -> Result<Variant> {
		if !self.tag().is_numeric() {
			return Err(self.unsupported("add"));
		}
		let mut sum = self.clone();
		sum.try_add_assign(rhs)?;
		Ok(sum)
	}

	fn unsupported(&self, op: &'static str) -> VariantError {
		VariantError::Unsupported {
			op,
			tag: self.tag(),
		}
	}
}
