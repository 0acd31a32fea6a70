//! Argument record delivered to behavior callbacks.

/// Arguments a transition hands to its behavior callbacks.
///
/// The fixed transition fields come first, then any caller-supplied extras
/// from the triggering call, in that documented order. This replaces a
/// variable-argument call signature with one explicit value the registries
/// can pass around opaquely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackArgs<S, E, A = ()> {
    /// State the machine is transitioning from; `None` if it had no state.
    pub from: Option<S>,
    /// Event that caused the transition.
    pub event: E,
    /// State the machine is transitioning to.
    pub to: S,
    /// Extra arguments supplied by the triggering call.
    pub extra: Vec<A>,
}
