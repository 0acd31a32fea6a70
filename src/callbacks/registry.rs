//! Ordered callback registries keyed by trigger.

use super::runner::{Callback, CallbackRunner};
use crate::error::MachineError;
use std::collections::HashMap;
use std::hash::Hash;

/// Selects which callbacks a registration or dispatch refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger<T> {
    /// A specific trigger key.
    On(T),
    /// The reserved wildcard. Callbacks registered under it run on every
    /// dispatch, after the trigger-specific callbacks. It is a meta-trigger:
    /// dispatching it directly is an error.
    Any,
}

/// Ordered list of callbacks per trigger, plus the wildcard row.
///
/// Dispatch order is a hard contract: the dispatched trigger's callbacks
/// run first in registration order, then the wildcard callbacks in
/// registration order, all with the same arguments. A trigger nothing was
/// registered under dispatches zero trigger-specific callbacks without
/// error (the wildcard row still runs).
///
/// # Example
///
/// ```rust
/// use composable_fsm::{Callbacks, DefaultCallbackRunner, Trigger};
///
/// let callbacks: Callbacks<&str, (), i32> = Callbacks::new()
///     .on(Trigger::On("opened"), |_, n| println!("opened with {n}"))
///     .on(Trigger::Any, |_, n| println!("something happened with {n}"));
///
/// callbacks
///     .dispatch(&DefaultCallbackRunner, Trigger::On(&"opened"), &42)
///     .unwrap();
/// ```
pub struct Callbacks<T, C, A> {
    for_trigger: HashMap<T, Vec<Callback<C, A>>>,
    any: Vec<Callback<C, A>>,
}

impl<T, C, A> Default for Callbacks<T, C, A> {
    fn default() -> Self {
        Self {
            for_trigger: HashMap::new(),
            any: Vec::new(),
        }
    }
}

impl<T, C, A> Callbacks<T, C, A>
where
    T: Eq + Hash,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a callback for a trigger, preserving registration order.
    pub fn on<F>(mut self, trigger: Trigger<T>, callback: F) -> Self
    where
        F: Fn(&C, &A) + Send + Sync + 'static,
    {
        match trigger {
            Trigger::On(key) => self
                .for_trigger
                .entry(key)
                .or_default()
                .push(Box::new(callback)),
            Trigger::Any => self.any.push(Box::new(callback)),
        }
        self
    }

    /// Run the callbacks for a trigger through a runner.
    ///
    /// Callbacks are fire-and-forget from the registry's point of view:
    /// there is no result value, only the error guarding direct dispatch of
    /// the wildcard.
    pub fn dispatch<R>(
        &self,
        runner: &R,
        trigger: Trigger<&T>,
        args: &A,
    ) -> Result<(), MachineError>
    where
        R: CallbackRunner<C, A> + ?Sized,
    {
        let key = match trigger {
            Trigger::On(key) => key,
            Trigger::Any => return Err(MachineError::InvalidTrigger),
        };
        if let Some(callbacks) = self.for_trigger.get(key) {
            for callback in callbacks {
                runner.run(callback, args);
            }
        }
        for callback in &self.any {
            runner.run(callback, args);
        }
        Ok(())
    }
}
