//! Machine that owns its current state.

use super::MachineOptions;
use crate::callbacks::CallbackRunner;
use crate::core::{Event, State};
use crate::error::MachineError;
use crate::model::{CallbackArgs, TransitionModel};
use std::fmt;
use std::sync::Arc;

/// A state machine instance holding its own current state.
///
/// The model is shared and read-only; the machine carries the one mutable
/// piece, `Option<S>`. Triggering an event looks the move up in the model,
/// runs the model's behaviors, and commits the new state locally.
///
/// # Example
///
/// ```rust
/// use composable_fsm::{
///     Event, Machine, MachineError, MachineOptions, ModelBuilder, State, Transitions,
/// };
/// use std::sync::Arc;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Shut,
/// }
/// impl State for Door {}
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Push {
///     Slam,
/// }
/// impl Event for Push {}
///
/// # fn main() -> Result<(), MachineError> {
/// let model = ModelBuilder::<Door, Push>::new()
///     .initial(Door::Open)
///     .transitions(Transitions::new().on(Push::Slam, [(Some(Door::Open), Some(Door::Shut))])?)
///     .build();
///
/// let mut door = Machine::new(Arc::new(model), MachineOptions::new())?;
/// assert!(door == Door::Open);
///
/// door.trigger(Push::Slam)?;
/// assert!(door == Door::Shut);
/// # Ok(())
/// # }
/// ```
pub struct Machine<S: State, E: Event, A = (), C = ()> {
    model: Arc<dyn TransitionModel<S, E, A, C>>,
    state: Option<S>,
    runner: Arc<dyn CallbackRunner<C, CallbackArgs<S, E, A>>>,
}

impl<S: State, E: Event, A, C> Machine<S, E, A, C> {
    /// Create a machine on `model`.
    ///
    /// The state starts from the options override, else the model's initial
    /// state. The runner resolves the same way; if neither the options nor
    /// the model supply one, construction fails with
    /// [`MachineError::MissingCallbackRunner`] rather than deferring the
    /// failure to the first trigger.
    pub fn new(
        model: Arc<dyn TransitionModel<S, E, A, C>>,
        options: MachineOptions<S, E, A, C>,
    ) -> Result<Self, MachineError> {
        let runner = options
            .callback_runner
            .or_else(|| model.callback_runner())
            .ok_or(MachineError::MissingCallbackRunner)?;
        let state = options.state.or_else(|| model.initial_state().cloned());
        Ok(Self {
            model,
            state,
            runner,
        })
    }

    /// The machine's current state.
    pub fn state(&self) -> Option<&S> {
        self.state.as_ref()
    }

    /// Trigger `event` with no extra callback arguments.
    ///
    /// Returns the new state on an actual change, `Ok(None)` when the table
    /// maps the event to the current state or to no state at all, and an
    /// error for unregistered events.
    pub fn trigger(&mut self, event: E) -> Result<Option<S>, MachineError> {
        self.trigger_with(event, Vec::new())
    }

    /// Trigger `event`, passing `extra` through to the behavior callbacks.
    pub fn trigger_with(&mut self, event: E, extra: Vec<A>) -> Result<Option<S>, MachineError> {
        let current = self.state.clone();
        let model = Arc::clone(&self.model);
        let runner = Arc::clone(&self.runner);
        let state_cell = &mut self.state;
        model.transition(
            current.as_ref(),
            &event,
            extra,
            runner.as_ref(),
            &mut |new_state| *state_cell = Some(new_state.clone()),
        )
    }
}

impl<S: State, E: Event, A, C> PartialEq<S> for Machine<S, E, A, C> {
    fn eq(&self, other: &S) -> bool {
        self.state.as_ref() == Some(other)
    }
}

impl<S: State, E: Event, A, C> fmt::Debug for Machine<S, E, A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
