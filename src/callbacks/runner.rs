//! Callback invocation strategies.
//!
//! A runner decides *how* a registered callback executes: context-free, or
//! bound to a receiver so callbacks read the receiver's fields at dispatch
//! time. Registries and models are agnostic to the strategy.

/// A registered callback.
///
/// Callbacks are invoked with a receiver context and an opaque argument
/// value. Registries own these handles and never inspect or mutate them, so
/// any conforming closure or function is accepted.
pub type Callback<C, A> = Box<dyn Fn(&C, &A) + Send + Sync>;

/// Execution-context strategy used to invoke callbacks.
///
/// The single-method contract is the extension seam: any host object can
/// adopt the runner role. Runners are shared (`Arc`) between a model and its
/// machines, so `run` takes `&self`; hosts that mutate themselves from
/// callbacks use interior mutability.
pub trait CallbackRunner<C, A>: Send + Sync {
    /// Execute `callback` with `args`.
    fn run(&self, callback: &Callback<C, A>, args: &A);
}

/// Context-free runner: invokes the callback with the unit context.
///
/// This is the default strategy for models whose callbacks need no receiver.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCallbackRunner;

impl<A> CallbackRunner<(), A> for DefaultCallbackRunner {
    fn run(&self, callback: &Callback<(), A>, args: &A) {
        callback(&(), args);
    }
}

/// Opt-in marker for context-bound callback execution.
///
/// A type implementing `SelfContext` becomes a [`CallbackRunner`] that
/// executes callbacks with itself as the receiver, so callbacks written
/// against the host observe its fields as they stand at dispatch time.
///
/// # Example
///
/// ```rust
/// use composable_fsm::{Callback, CallbackRunner, SelfContext};
///
/// struct Greeter {
///     name: String,
/// }
///
/// impl SelfContext for Greeter {}
///
/// let greeter = Greeter { name: "Bob".to_string() };
/// let callback: Callback<Greeter, String> =
///     Box::new(|greeter, greeting| println!("{greeting}, {}!", greeter.name));
///
/// greeter.run(&callback, &"Hello".to_string());
/// ```
pub trait SelfContext {}

impl<H, A> CallbackRunner<H, A> for H
where
    H: SelfContext + Send + Sync,
{
    fn run(&self, callback: &Callback<H, A>, args: &A) {
        callback(self, args);
    }
}
