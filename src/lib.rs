//! Composable FSM: a state machine core built from swappable parts
//!
//! Most state machine libraries hand you one monolithic machine. This crate
//! splits the problem into small pieces that compose: a pure transition
//! table, ordered callback registries grouped into lifecycle behaviors, a
//! runner that decides what context callbacks execute in, an immutable
//! shareable model tying those together, and thin machine instances that
//! carry the only mutable state. Each piece is useful on its own and
//! replaceable at its seam.
//!
//! # Core Concepts
//!
//! - **Transitions**: a pure `(state, event) -> state` lookup table
//! - **Callbacks**: ordered callables per trigger, with a wildcard row
//! - **Behaviors**: callback registries keyed by lifecycle stage (`enter`)
//! - **Model**: immutable definition shared across any number of machines
//! - **Machines**: per-instance state, owned or living in external storage
//!
//! # Example
//!
//! ```rust
//! use composable_fsm::{
//!     Behaviors, CallbackArgs, Event, Machine, MachineError, MachineOptions, ModelBuilder,
//!     State, Transitions, Trigger, ENTER,
//! };
//! use std::sync::Arc;
//!
//! #[derive(Clone, PartialEq, Eq, Hash, Debug)]
//! enum Temp {
//!     Cold,
//!     Warm,
//!     Hot,
//! }
//! impl State for Temp {}
//!
//! #[derive(Clone, PartialEq, Eq, Hash, Debug)]
//! enum Climate {
//!     Heat,
//!     Cool,
//! }
//! impl Event for Climate {}
//!
//! # fn main() -> Result<(), MachineError> {
//! let transitions = Transitions::new()
//!     .on(
//!         Climate::Heat,
//!         [
//!             (Some(Temp::Cold), Some(Temp::Warm)),
//!             (Some(Temp::Warm), Some(Temp::Hot)),
//!         ],
//!     )?
//!     .on(
//!         Climate::Cool,
//!         [
//!             (Some(Temp::Hot), Some(Temp::Warm)),
//!             (Some(Temp::Warm), Some(Temp::Cold)),
//!         ],
//!     )?;
//!
//! let behaviors = Behaviors::new().on(
//!     ENTER,
//!     Trigger::Any,
//!     |_: &(), args: &CallbackArgs<Temp, Climate>| {
//!         println!("now {:?} (was {:?})", args.to, args.from);
//!     },
//! );
//!
//! let model = ModelBuilder::new()
//!     .initial(Temp::Cold)
//!     .transitions(transitions)
//!     .behaviors(behaviors)
//!     .build();
//!
//! let mut room = Machine::new(Arc::new(model), MachineOptions::new())?;
//! room.trigger(Climate::Heat)?;
//! assert!(room == Temp::Warm);
//! # Ok(())
//! # }
//! ```

pub mod callbacks;
pub mod core;
pub mod error;
pub mod machine;
pub mod model;

// Re-export commonly used types
pub use callbacks::{
    BehaviorDispatch, Behaviors, Callback, CallbackRunner, Callbacks, DefaultCallbackRunner,
    NullBehaviors, SelfContext, Trigger, ENTER, LEAVE,
};
pub use core::{Event, State, TransitionDef, Transitions};
pub use error::MachineError;
pub use machine::{
    Machine, MachineOptions, MachineWithExternalState, StateReader, StateWriter,
};
pub use model::{CallbackArgs, Model, ModelBuilder, TransitionModel};
