#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Self-describing variant values.
//!
//! A [`Variant`] owns a byte buffer and a [`Kind`] describing how to read it:
//! a signed or unsigned integer of 1, 2, 4 or 8 bytes, a 4 or 8 byte float, text,
//! or an opaque blob. Numbers are kept in host byte order, so raw buffers are not
//! portable between hosts of different endianness.
//!
//! Reads are fallible and never panic:
//!
//! - [`Variant::get`] reads any numeric primitive, casting from the stored width.
//! - [`Variant::to_bool`], [`Variant::to_text`] and [`Variant::to_bytes`] cover
//!   the remaining targets.
//! - [`Variant::try_compare`] and the `PartialEq`/`PartialOrd` impls resolve
//!   mixed tags through [`major_type`]. [`Variant::loose_compare`] also parses
//!   text against numbers.
//! - [`Variant::try_add_assign`] adds a primitive in place at the stored width.
//!
//! A variant is meant for a single owner. Share it across threads behind your
//! own lock, or clone it.

mod error;
mod kind;
pub mod parse;
pub mod scalar;
mod variant;

pub use error::{Result, VariantError};
pub use kind::{FloatWidth, IntWidth, Kind, Tag};
pub use parse::TextParse;
pub use scalar::Scalar;
pub use variant::{Assign, Major, Variant, major_type};
