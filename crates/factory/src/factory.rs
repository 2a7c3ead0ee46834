use std::collections::hash_map::Entry;
use std::fmt;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::Instantiate;

/// Constructor registered under a name.
pub type Constructor<B> = Box<dyn Fn() -> Box<B> + Send + Sync>;

/// Thread-safe map from names to constructors of `B`.
///
/// Every operation takes one lock around the whole map, so registration,
/// removal and creation never interleave. Constructors run while that lock is
/// held and must not call back into the same factory.
pub struct Factory<B: ?Sized + 'static> {
	label: &'static str,
	entries: Mutex<FxHashMap<String, Constructor<B>>>,
}

impl<B: ?Sized + 'static> Factory<B> {
	/// Creates an empty factory. `label` tags its log events.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			entries: Mutex::new(FxHashMap::default()),
		}
	}

	/// Returns the label given at construction.
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Registers `C` under `name`.
	///
	/// Returns false, leaving the existing entry in place, if `name` is taken.
	pub fn register<C: Instantiate<B>>(&self, name: impl Into<String>) -> bool {
		self.register_with(name, C::instantiate)
	}

	/// Registers an arbitrary constructor under `name`.
	///
	/// Returns false, leaving the existing entry in place, if `name` is taken.
	pub fn register_with<F>(&self, name: impl Into<String>, ctor: F) -> bool
	where
		F: Fn() -> Box<B> + Send + Sync + 'static,
	{
		let mut entries = self.entries.lock();
		match entries.entry(name.into()) {
			Entry::Occupied(slot) => {
				tracing::debug!(registry = self.label, name = %slot.key(), "duplicate registration rejected");
				false
			}
			Entry::Vacant(slot) => {
				tracing::debug!(registry = self.label, name = %slot.key(), "registered");
				slot.insert(Box::new(ctor));
				true
			}
		}
	}

	/// Removes and drops the constructor for `name`. Returns false if absent.
	pub fn unregister(&self, name: &str) -> bool {
		let removed = self.entries.lock().remove(name).is_some();
		if removed {
			tracing::debug!(registry = self.label, name, "unregistered");
		}
		removed
	}

	/// Drops every constructor.
	pub fn unregister_all(&self) {
		let mut entries = self.entries.lock();
		let count = entries.len();
		entries.clear();
		tracing::debug!(registry = self.label, count, "unregistered all");
	}

	/// Creates a new instance of the type registered as `name`.
	///
	/// An unknown name is not an error and yields `None`.
	pub fn create(&self, name: &str) -> Option<Box<B>> {
		let entries = self.entries.lock();
		let Some(ctor) = entries.get(name) else {
			tracing::trace!(registry = self.label, name, "no constructor registered");
			return None;
		};
		Some(ctor())
	}

	/// Returns true if `name` is registered.
	pub fn has(&self, name: &str) -> bool {
		self.entries.lock().contains_key(name)
	}

	/// Number of registered names.
	pub fn len(&self) -> usize {
		self.entries.lock().len()
	}

	/// Returns true if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.entries.lock().is_empty()
	}

	/// Snapshot of the registered names, sorted.
	pub fn names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.entries.lock().keys().cloned().collect();
		names.sort_unstable();
		names
	}
}

impl<B: ?Sized + 'static> fmt::Debug for Factory<B> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Factory")
			.field("label", &self.label)
			.field("names", &self.names())
			.finish()
	}
}
