//! Lifecycle-stage registries and the dispatch seam models consume.

use super::registry::{Callbacks, Trigger};
use super::runner::CallbackRunner;
use crate::error::MachineError;
use std::collections::HashMap;
use std::hash::Hash;

/// Lifecycle stage dispatched when a transition enters its new state.
pub const ENTER: &str = "enter";

/// Lifecycle stage wrapping models dispatch immediately before delegating
/// to the core transition. Not fired by [`Model`](crate::Model) itself.
pub const LEAVE: &str = "leave";

/// Dispatch seam for a set of lifecycle behaviors.
///
/// A model stores its behaviors through this trait, so a host can swap in
/// any dispatch strategy — the ready-made [`Behaviors`] mapping, the no-op
/// [`NullBehaviors`] stub, or something custom that routes behavior keys its
/// own way — without the model changing.
pub trait BehaviorDispatch<T, C, A>: Send + Sync {
    /// Run the callbacks registered for `behavior` and `trigger`.
    fn dispatch(
        &self,
        runner: &dyn CallbackRunner<C, A>,
        behavior: &str,
        trigger: Trigger<&T>,
        args: &A,
    ) -> Result<(), MachineError>;
}

/// Maps lifecycle-stage keys to callback registries.
///
/// Registries are created on first registration for a stage; dispatching a
/// stage nothing was ever registered for is a no-op.
///
/// # Example
///
/// ```rust
/// use composable_fsm::{Behaviors, Trigger, ENTER};
///
/// let behaviors: Behaviors<&str, (), String> = Behaviors::new()
///     .on(ENTER, Trigger::On("hired"), |_, name: &String| {
///         println!("Welcome, {name}!");
///     });
/// ```
pub struct Behaviors<T, C, A> {
    for_behavior: HashMap<&'static str, Callbacks<T, C, A>>,
}

impl<T, C, A> Default for Behaviors<T, C, A> {
    fn default() -> Self {
        Self {
            for_behavior: HashMap::new(),
        }
    }
}

impl<T, C, A> Behaviors<T, C, A>
where
    T: Eq + Hash,
{
    /// Create an empty behavior set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap ready-made callback registries, keyed by behavior.
    pub fn from_callbacks<I>(callbacks: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Callbacks<T, C, A>)>,
    {
        Self {
            for_behavior: callbacks.into_iter().collect(),
        }
    }

    /// Add a callback for a behavior, creating its registry if absent.
    pub fn on<F>(mut self, behavior: &'static str, trigger: Trigger<T>, callback: F) -> Self
    where
        F: Fn(&C, &A) + Send + Sync + 'static,
    {
        let registry = self.for_behavior.remove(behavior).unwrap_or_default();
        self.for_behavior.insert(behavior, registry.on(trigger, callback));
        self
    }
}

impl<T, C, A> BehaviorDispatch<T, C, A> for Behaviors<T, C, A>
where
    T: Eq + Hash + Send + Sync,
{
    fn dispatch(
        &self,
        runner: &dyn CallbackRunner<C, A>,
        behavior: &str,
        trigger: Trigger<&T>,
        args: &A,
    ) -> Result<(), MachineError> {
        match self.for_behavior.get(behavior) {
            Some(registry) => registry.dispatch(runner, trigger, args),
            None => Ok(()),
        }
    }
}

/// No-op behavior set.
///
/// The default when a model is built without behaviors: dispatch returns
/// immediately, so machines that need no callbacks pay nothing for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBehaviors;

impl<T, C, A> BehaviorDispatch<T, C, A> for NullBehaviors {
    fn dispatch(
        &self,
        _runner: &dyn CallbackRunner<C, A>,
        _behavior: &str,
        _trigger: Trigger<&T>,
        _args: &A,
    ) -> Result<(), MachineError> {
        Ok(())
    }
}
