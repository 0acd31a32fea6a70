//! Core vocabulary of the state machine: opaque state and event values and
//! the pure transition table they key into.
//!
//! Nothing in this module runs callbacks or stores machine state; it is the
//! side-effect-free foundation the model and machine layers compose over.

mod state;
mod transitions;

pub use state::{Event, State};
pub use transitions::{TransitionDef, Transitions};
