//! Marker traits for state and event values.
//!
//! States and events are opaque to the core: it only compares them, hashes
//! them as table keys, and hands clones to callbacks. The traits bundle
//! those bounds so signatures stay readable.

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for state values.
///
/// A state is any equality-comparable value — typically a small enum. The
/// core never inspects a state beyond comparing and cloning it. `None` is a
/// valid *source* state (a machine may start nowhere) but never a valid
/// *target* state.
///
/// # Example
///
/// ```rust
/// use composable_fsm::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum DocState {
///     Created,
///     Updated,
///     Removed,
/// }
///
/// impl State for DocState {}
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

/// Marker trait for event values.
///
/// An event is an opaque key identifying a class of triggerable transition.
///
/// # Example
///
/// ```rust
/// use composable_fsm::Event;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum DocEvent {
///     Update,
///     Remove,
/// }
///
/// impl Event for DocEvent {}
/// ```
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync + 'static {}
