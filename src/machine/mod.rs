//! Machine instances: the mutable half of the system.
//!
//! A machine pairs a shared, immutable model with one piece of current
//! state and drives transitions against it. [`Machine`] owns its state;
//! [`MachineWithExternalState`] reads and writes state that lives elsewhere
//! (a struct field, a cache entry, a database row) through caller-supplied
//! accessors.

mod external;
mod owned;

pub use external::{MachineWithExternalState, StateReader, StateWriter};
pub use owned::Machine;

use crate::callbacks::CallbackRunner;
use crate::core::{Event, State};
use crate::model::CallbackArgs;
use std::sync::Arc;

/// Per-machine construction options.
///
/// Both settings are overrides: a machine starts from the model's initial
/// state and uses the model's default runner unless told otherwise here.
pub struct MachineOptions<S: State, E: Event, A = (), C = ()> {
    pub(crate) state: Option<S>,
    pub(crate) callback_runner: Option<Arc<dyn CallbackRunner<C, CallbackArgs<S, E, A>>>>,
}

impl<S: State, E: Event, A, C> MachineOptions<S, E, A, C> {
    /// Options with no overrides.
    pub fn new() -> Self {
        Self {
            state: None,
            callback_runner: None,
        }
    }

    /// Start the machine in `state` instead of the model's initial state.
    pub fn state(mut self, state: S) -> Self {
        self.state = Some(state);
        self
    }

    /// Run this machine's callbacks with `runner` instead of the model's
    /// default runner.
    pub fn callback_runner(
        mut self,
        runner: Arc<dyn CallbackRunner<C, CallbackArgs<S, E, A>>>,
    ) -> Self {
        self.callback_runner = Some(runner);
        self
    }
}

impl<S: State, E: Event, A, C> Default for MachineOptions<S, E, A, C> {
    fn default() -> Self {
        Self::new()
    }
}
