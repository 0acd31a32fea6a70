//! The immutable, shareable state machine model.
//!
//! A [`Model`] combines a transition table, a behavior set, a default
//! initial state, and a default callback runner. It is immutable after
//! construction and designed to be shared (`Arc`) across many machine
//! instances; all per-use-site mutability lives in the machines.

mod args;
mod builder;

pub use args::CallbackArgs;
pub use builder::ModelBuilder;

use crate::callbacks::{BehaviorDispatch, CallbackRunner, Trigger, ENTER};
use crate::core::{Event, State, Transitions};
use crate::error::MachineError;
use std::sync::Arc;

/// The transition contract machines consume.
///
/// [`Model`] implements it directly. Wrapping models implement it too: a
/// decorator owns an inner model and runs extra lifecycle stages (such as
/// [`LEAVE`](crate::LEAVE)) around the inner transition, re-exposing the
/// same contract to its machines. This is the system's primary extension
/// point, and wrappers must preserve the guarantee that behaviors fire only
/// on an actual state change.
pub trait TransitionModel<S: State, E: Event, A, C>: Send + Sync {
    /// Default initial state for machines built from this model.
    fn initial_state(&self) -> Option<&S>;

    /// Default runner for machines that do not override it.
    fn callback_runner(&self) -> Option<Arc<dyn CallbackRunner<C, CallbackArgs<S, E, A>>>>;

    /// Compute and commit a transition; see [`Model::transition_with`].
    fn transition(
        &self,
        current: Option<&S>,
        event: &E,
        extra: Vec<A>,
        runner: &dyn CallbackRunner<C, CallbackArgs<S, E, A>>,
        on_change: &mut dyn FnMut(&S),
    ) -> Result<Option<S>, MachineError>;
}

/// Immutable state machine definition.
///
/// Construct one with [`ModelBuilder`] and share it read-only across any
/// number of machine instances. The model owns the pure transition table
/// and the behavior dispatch seam; it holds no machine state.
///
/// Type parameters: `S` states, `E` events, `A` extra callback-argument
/// values (defaults to `()`), `C` the callback receiver context (defaults
/// to `()`, the context-free case).
pub struct Model<S: State, E: Event, A = (), C = ()> {
    initial_state: Option<S>,
    transitions: Transitions<S, E>,
    behaviors: Box<dyn BehaviorDispatch<S, C, CallbackArgs<S, E, A>>>,
    default_runner: Option<Arc<dyn CallbackRunner<C, CallbackArgs<S, E, A>>>>,
}

impl<S: State, E: Event, A, C> Model<S, E, A, C> {
    pub(crate) fn from_parts(
        initial_state: Option<S>,
        transitions: Transitions<S, E>,
        behaviors: Box<dyn BehaviorDispatch<S, C, CallbackArgs<S, E, A>>>,
        default_runner: Option<Arc<dyn CallbackRunner<C, CallbackArgs<S, E, A>>>>,
    ) -> Self {
        Self {
            initial_state,
            transitions,
            behaviors,
            default_runner,
        }
    }

    /// Default initial state for machines built from this model.
    pub fn initial_state(&self) -> Option<&S> {
        self.initial_state.as_ref()
    }

    /// The model's transition table.
    pub fn transitions(&self) -> &Transitions<S, E> {
        &self.transitions
    }

    /// The model's default callback runner, if one is configured.
    pub fn default_runner(&self) -> Option<Arc<dyn CallbackRunner<C, CallbackArgs<S, E, A>>>> {
        self.default_runner.clone()
    }

    /// Perform a transition with the model's default runner and no
    /// continuation.
    pub fn transition(&self, current: Option<&S>, event: &E) -> Result<Option<S>, MachineError> {
        self.transition_with(current, event, Vec::new(), None, |_| {})
    }

    /// Perform a transition, executing behaviors as needed.
    ///
    /// The table lookup propagates [`MachineError::InvalidEvent`]. When the
    /// looked-up target is absent or equal to `current`, nothing fires and
    /// the result is `Ok(None)` — "no transition". Otherwise the `enter`
    /// behavior is dispatched with the new state as its trigger and
    /// [`CallbackArgs`] `{ from, event, to, extra }`, then `on_change` runs
    /// with the new state, and the new state is returned.
    ///
    /// `runner` falls back to the model default; if neither exists the
    /// transition fails with [`MachineError::MissingCallbackRunner`].
    pub fn transition_with<F>(
        &self,
        current: Option<&S>,
        event: &E,
        extra: Vec<A>,
        runner: Option<&dyn CallbackRunner<C, CallbackArgs<S, E, A>>>,
        on_change: F,
    ) -> Result<Option<S>, MachineError>
    where
        F: FnOnce(&S),
    {
        let new_state = match self.transitions.transition(current, event)? {
            Some(target) if current != Some(target) => target.clone(),
            _ => return Ok(None),
        };
        let runner = runner
            .or_else(|| self.default_runner.as_deref())
            .ok_or(MachineError::MissingCallbackRunner)?;
        let args = CallbackArgs {
            from: current.cloned(),
            event: event.clone(),
            to: new_state.clone(),
            extra,
        };
        self.behaviors
            .dispatch(runner, ENTER, Trigger::On(&new_state), &args)?;
        on_change(&new_state);
        Ok(Some(new_state))
    }

    /// Dispatch one behavior stage directly.
    ///
    /// Public so wrapping models can fire additional stages (a `leave`
    /// stage before the core transition, say) through the same behavior
    /// set.
    pub fn run_behavior(
        &self,
        runner: &dyn CallbackRunner<C, CallbackArgs<S, E, A>>,
        behavior: &str,
        trigger: Trigger<&S>,
        args: &CallbackArgs<S, E, A>,
    ) -> Result<(), MachineError> {
        self.behaviors.dispatch(runner, behavior, trigger, args)
    }
}

impl<S: State, E: Event, A, C> TransitionModel<S, E, A, C> for Model<S, E, A, C> {
    fn initial_state(&self) -> Option<&S> {
        self.initial_state.as_ref()
    }

    fn callback_runner(&self) -> Option<Arc<dyn CallbackRunner<C, CallbackArgs<S, E, A>>>> {
        self.default_runner.clone()
    }

    fn transition(
        &self,
        current: Option<&S>,
        event: &E,
        extra: Vec<A>,
        runner: &dyn CallbackRunner<C, CallbackArgs<S, E, A>>,
        on_change: &mut dyn FnMut(&S),
    ) -> Result<Option<S>, MachineError> {
        self.transition_with(current, event, extra, Some(runner), |new_state| {
            on_change(new_state)
        })
    }
}
