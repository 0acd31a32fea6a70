//! Callback registration and dispatch.
//!
//! Three cooperating pieces: [`Callbacks`] keeps ordered callables per
//! trigger (with a wildcard row), [`Behaviors`] groups registries by
//! lifecycle stage behind the [`BehaviorDispatch`] seam, and
//! [`CallbackRunner`] decides the execution context a callable runs in.

mod behaviors;
mod registry;
mod runner;

pub use behaviors::{BehaviorDispatch, Behaviors, NullBehaviors, ENTER, LEAVE};
pub use registry::{Callbacks, Trigger};
pub use runner::{Callback, CallbackRunner, DefaultCallbackRunner, SelfContext};
