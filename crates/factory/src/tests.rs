use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;

use crate::{Factory, instantiable};

trait Shape: Send {
	fn name(&self) -> &'static str;
}

#[derive(Default)]
struct Circle;

#[derive(Default)]
struct Square;

impl Shape for Circle {
	fn name(&self) -> &'static str {
		"circle"
	}
}

impl Shape for Square {
	fn name(&self) -> &'static str {
		"square"
	}
}

instantiable!(dyn Shape => Circle, Square);

fn shapes() -> Factory<dyn Shape> {
	Factory::new("shapes")
}

#[test]
fn duplicate_registration_keeps_first() {
	let factory = shapes();
	assert!(factory.register::<Circle>("A"));
	assert!(!factory.register::<Square>("A"));
	assert_eq!(factory.create("A").map(|s| s.name()), Some("circle"));
	assert_eq!(factory.len(), 1);
}

#[test]
fn unknown_names_are_soft_misses() {
	let factory = shapes();
	assert!(factory.register::<Circle>("A"));
	assert!(factory.create("B").is_none());
	assert!(!factory.has("B"));
	assert!(!factory.unregister("B"));
	assert!(factory.has("A"));
}

#[test]
fn unregister_removes_entry() {
	let factory = shapes();
	factory.register::<Circle>("A");
	assert!(factory.unregister("A"));
	assert!(factory.create("A").is_none());
	assert!(!factory.unregister("A"));
	assert!(factory.is_empty());
}

#[test]
fn unregister_all_clears_every_entry() {
	let factory = shapes();
	factory.register::<Circle>("circle");
	factory.register::<Square>("square");
	assert_eq!(factory.names(), vec!["circle".to_owned(), "square".to_owned()]);
	factory.unregister_all();
	assert!(factory.is_empty());
	assert!(factory.register::<Square>("circle"));
	assert_eq!(factory.create("circle").map(|s| s.name()), Some("square"));
}

#[test]
fn each_create_returns_a_fresh_instance() {
	let built = Arc::new(AtomicUsize::new(0));
	let factory: Factory<dyn Shape> = shapes();
	let counter = Arc::clone(&built);
	assert!(factory.register_with("counted", move || {
		counter.fetch_add(1, Ordering::SeqCst);
		Box::new(Circle) as Box<dyn Shape>
	}));

	let a = factory.create("counted");
	let b = factory.create("counted");
	assert!(a.is_some() && b.is_some());
	assert_eq!(built.load(Ordering::SeqCst), 2);
}

#[test]
fn dropping_factory_releases_constructors() {
	let token = Arc::new(());
	let factory = shapes();
	let held = Arc::clone(&token);
	factory.register_with("held", move || {
		let _ = &held;
		Box::new(Square) as Box<dyn Shape>
	});
	assert_eq!(Arc::strong_count(&token), 2);
	drop(factory);
	assert_eq!(Arc::strong_count(&token), 1);
}

#[test]
fn sized_bases_instantiate_through_default() {
	let factory: Factory<Vec<u8>> = Factory::new("buffers");
	assert!(factory.register::<Vec<u8>>("empty"));
	assert_eq!(factory.create("empty").as_deref(), Some(&Vec::new()));
}

#[test]
fn concurrent_registration_admits_one_winner() {
	let factory = shapes();
	let wins = AtomicUsize::new(0);
	std::thread::scope(|s| {
		for i in 0..8 {
			let factory = &factory;
			let wins = &wins;
			s.spawn(move || {
				let won = if i % 2 == 0 {
					factory.register::<Circle>("contested")
				} else {
					factory.register::<Square>("contested")
				};
				if won {
					wins.fetch_add(1, Ordering::SeqCst);
				}
				assert!(factory.create("contested").is_some());
			});
		}
	});
	assert_eq!(wins.load(Ordering::SeqCst), 1);
	assert_eq!(factory.len(), 1);
}

#[test]
fn debug_lists_label_and_names() {
	let factory = shapes();
	factory.register::<Circle>("c");
	assert_eq!(format!("{factory:?}"), r#"Factory { label: "shapes", names: ["c"] }"#);
}
