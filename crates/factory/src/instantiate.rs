/// A concrete type that can produce a boxed instance of the base `B`.
///
/// Every `Default` type instantiates itself. For trait-object bases, implement
/// this by hand or with [`instantiable!`](crate::instantiable).
pub trait Instantiate<B: ?Sized>: 'static {
	/// Creates a new instance, owned by the caller.
	fn instantiate() -> Box<B>;
}

impl<C: Default + 'static> Instantiate<C> for C {
	fn instantiate() -> Box<C> {
		Box::new(C::default())
	}
}

/// Implements [`Instantiate`] for each listed type through its `Default` impl.
///
/// ```
/// # use varia_factory::instantiable;
/// trait Shape {}
/// #[derive(Default)]
/// struct Circle;
/// #[derive(Default)]
/// struct Square;
/// impl Shape for Circle {}
/// impl Shape for Square {}
///
/// instantiable!(dyn Shape => Circle, Square);
/// ```
#[macro_export]
macro_rules! instantiable {
	($base:ty => $($concrete:ty),+ $(,)?) => {$(
		impl $crate::Instantiate<$base> for $concrete {
			fn instantiate() -> ::std::boxed::Box<$base> {
				::std::boxed::Box::new(<$concrete as ::std::default::Default>::default())
			}
		}
	)+};
}
