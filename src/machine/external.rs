//! Machine whose state lives outside the machine.

use super::MachineOptions;
use crate::callbacks::CallbackRunner;
use crate::core::{Event, State};
use crate::error::MachineError;
use crate::model::{CallbackArgs, TransitionModel};
use std::fmt;
use std::sync::Arc;

/// Reads the current state from its external home.
pub type StateReader<S> = Box<dyn Fn() -> Option<S> + Send>;

/// Writes a committed state back to its external home.
pub type StateWriter<S> = Box<dyn FnMut(Option<S>) + Send>;

/// A state machine instance whose state is stored elsewhere.
///
/// Instead of holding state, the machine is given a reader and a writer for
/// wherever the state actually lives: a field on a domain object, a row in
/// a store, an entry in a cache. Every trigger reads the state fresh
/// through the reader and commits changes through the writer, so the
/// machine stays correct even when something else updates the storage
/// between triggers.
///
/// # Example
///
/// ```rust
/// use composable_fsm::{
///     Event, MachineError, MachineOptions, MachineWithExternalState, ModelBuilder, State,
///     Transitions,
/// };
/// use std::sync::{Arc, Mutex};
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
/// let hinge: Arc<Mutex<Option<Door>>> = Arc::new(Mutex::new(None));
/// let reading = Arc::clone(&hinge);
/// let writing = Arc::clone(&hinge);
///
/// let mut door = MachineWithExternalState::new(
///     Arc::new(model),
///     Box::new(move || reading.lock().unwrap().clone()),
///     Box::new(move |state| *writing.lock().unwrap() = state),
///     MachineOptions::new(),
/// )?;
///
/// door.trigger(Push::Slam)?;
/// assert_eq!(*hinge.lock().unwrap(), Some(Door::Shut));
/// # Ok(())
/// # }
/// ```
pub struct MachineWithExternalState<S: State, E: Event, A = (), C = ()> {
    model: Arc<dyn TransitionModel<S, E, A, C>>,
    read_state: StateReader<S>,
    write_state: StateWriter<S>,
    runner: Arc<dyn CallbackRunner<C, CallbackArgs<S, E, A>>>,
}

impl<S: State, E: Event, A, C> MachineWithExternalState<S, E, A, C> {
    /// Create a machine over externally stored state.
    ///
    /// The runner resolves from the options override, else the model's
    /// default; with neither, construction fails with
    /// [`MachineError::MissingCallbackRunner`]. The starting state (options
    /// override, else the model's initial state) is written to the external
    /// storage immediately, so the storage and the model agree from the
    /// start.
    pub fn new(
        model: Arc<dyn TransitionModel<S, E, A, C>>,
        read_state: StateReader<S>,
        mut write_state: StateWriter<S>,
        options: MachineOptions<S, E, A, C>,
    ) -> Result<Self, MachineError> {
        let runner = options
            .callback_runner
            .or_else(|| model.callback_runner())
            .ok_or(MachineError::MissingCallbackRunner)?;
        let initial = options.state.or_else(|| model.initial_state().cloned());
        write_state(initial);
        Ok(Self {
            model,
            read_state,
            write_state,
            runner,
        })
    }

    /// The current state, read fresh from the external storage.
    pub fn state(&self) -> Option<S> {
        (self.read_state)()
    }

    /// Trigger `event` with no extra callback arguments.
    ///
    /// Returns the new state on an actual change, `Ok(None)` when the table
    /// maps the event to the current state or to no state at all, and an
    /// error for unregistered events. The writer runs only on an actual
    /// change, after the behaviors.
    pub fn trigger(&mut self, event: E) -> Result<Option<S>, MachineError> {
        self.trigger_with(event, Vec::new())
    }

    /// Trigger `event`, passing `extra` through to the behavior callbacks.
    pub fn trigger_with(&mut self, event: E, extra: Vec<A>) -> Result<Option<S>, MachineError> {
        let current = (self.read_state)();
        let model = Arc::clone(&self.model);
        let runner = Arc::clone(&self.runner);
        let write_state = &mut self.write_state;
        model.transition(
            current.as_ref(),
            &event,
            extra,
            runner.as_ref(),
            &mut |new_state| write_state(Some(new_state.clone())),
        )
    }
}

impl<S: State, E: Event, A, C> PartialEq<S> for MachineWithExternalState<S, E, A, C> {
    fn eq(&self, other: &S) -> bool {
        (self.read_state)().as_ref() == Some(other)
    }
}

impl<S: State, E: Event, A, C> fmt::Debug for MachineWithExternalState<S, E, A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineWithExternalState")
            .field("state", &(self.read_state)())
            .finish_non_exhaustive()
    }
}
