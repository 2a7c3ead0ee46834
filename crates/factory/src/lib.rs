#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Named class registry.
//!
//! A [`Factory`] maps string keys to constructors for implementations of a
//! common base type, usually a `dyn Trait`. Callers register concrete types
//! under names and later create fresh boxed instances by name.
//!
//! ```
//! use varia_factory::{Factory, instantiable};
//!
//! trait Codec: Send {
//! 	fn id(&self) -> &'static str;
//! }
//!
//! #[derive(Default)]
//! struct Gzip;
//!
//! impl Codec for Gzip {
//! 	fn id(&self) -> &'static str {
//! 		"gzip"
//! 	}
//! }
//!
//! instantiable!(dyn Codec => Gzip);
//!
//! let codecs: Factory<dyn Codec> = Factory::new("codecs");
//! assert!(codecs.register::<Gzip>("gzip"));
//! assert_eq!(codecs.create("gzip").map(|c| c.id()), Some("gzip"));
//! assert!(codecs.create("zstd").is_none());
//! ```

mod factory;
mod instantiate;

pub use factory::{Constructor, Factory};
pub use instantiate::Instantiate;

#[cfg(test)]
mod tests;
