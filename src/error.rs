//! Errors raised by the state machine core.

use std::fmt::Debug;
use thiserror::Error;

/// Errors raised while configuring or driving a state machine.
///
/// All of these are immediate, synchronous failures in the
/// configuration/programming-error domain; nothing is retried internally.
/// A registered event with no entry for the current state is *not* an
/// error — lookups report it as `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MachineError {
    /// The event was never registered in the transition table.
    #[error("invalid event {event} in state {state}")]
    InvalidEvent { event: String, state: String },

    /// A transition was registered without a target state. Rejected at
    /// registration time so an invalid model can never be built.
    #[error("transition to nothing from {from} for {event} event")]
    InvalidTransition { event: String, from: String },

    /// The wildcard trigger was dispatched directly. Wildcard callbacks run
    /// as part of every dispatch; the wildcard itself is not a trigger.
    #[error("the wildcard trigger cannot be dispatched directly")]
    InvalidTrigger,

    /// Neither the model nor the machine supplies a callback runner.
    #[error("no callback runner configured on the model or the machine")]
    MissingCallbackRunner,
}

impl MachineError {
    pub(crate) fn invalid_event(event: &impl Debug, state: &impl Debug) -> Self {
        Self::InvalidEvent {
            event: format!("{event:?}"),
            state: format!("{state:?}"),
        }
    }

    pub(crate) fn invalid_transition(event: &impl Debug, from: &impl Debug) -> Self {
        Self::InvalidTransition {
            event: format!("{event:?}"),
            from: format!("{from:?}"),
        }
    }
}
