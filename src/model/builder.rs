//! Fluent builder for state machine models.

use super::args::CallbackArgs;
use super::Model;
use crate::callbacks::{BehaviorDispatch, CallbackRunner, DefaultCallbackRunner, NullBehaviors};
use crate::core::{Event, State, Transitions};
use std::sync::Arc;

/// Builder for [`Model`] values.
///
/// [`ModelBuilder::new`] starts a context-free model (`C = ()`) with the
/// [`DefaultCallbackRunner`] preset; [`ModelBuilder::with_context`] starts a
/// model whose callbacks run against a host context `C`, leaving the runner
/// to the machines (or to an explicit [`runner`](ModelBuilder::runner)
/// call). Everything else is optional: the transition table defaults to
/// empty, the behaviors to the no-op stub, the initial state to none.
///
/// # Example
///
/// ```rust
/// use composable_fsm::{Event, MachineError, ModelBuilder, State, Transitions};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Phase {
///     Solid,
///     Liquid,
/// }
/// impl State for Phase {}
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum PhaseEvent {
///     Melt,
/// }
/// impl Event for PhaseEvent {}
///
/// # fn main() -> Result<(), MachineError> {
/// let model = ModelBuilder::<Phase, PhaseEvent>::new()
///     .initial(Phase::Solid)
///     .transitions(
///         Transitions::new()
///             .on(PhaseEvent::Melt, [(Some(Phase::Solid), Some(Phase::Liquid))])?,
///     )
///     .build();
///
/// assert_eq!(
///     model.transition(Some(&Phase::Solid), &PhaseEvent::Melt)?,
///     Some(Phase::Liquid)
/// );
/// # Ok(())
/// # }
/// ```
pub struct ModelBuilder<S: State, E: Event, A = (), C = ()> {
    initial_state: Option<S>,
    transitions: Option<Transitions<S, E>>,
    behaviors: Option<Box<dyn BehaviorDispatch<S, C, CallbackArgs<S, E, A>>>>,
    runner: Option<Arc<dyn CallbackRunner<C, CallbackArgs<S, E, A>>>>,
}

impl<S: State, E: Event, A> ModelBuilder<S, E, A, ()> {
    /// Start a context-free model with the default runner preset.
    pub fn new() -> Self {
        Self {
            initial_state: None,
            transitions: None,
            behaviors: None,
            runner: Some(Arc::new(DefaultCallbackRunner)),
        }
    }
}

impl<S: State, E: Event, A> Default for ModelBuilder<S, E, A, ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event, A, C> ModelBuilder<S, E, A, C> {
    /// Start a model whose callbacks run against a host context.
    ///
    /// No runner is preset; supply one here or on each machine.
    pub fn with_context() -> Self {
        Self {
            initial_state: None,
            transitions: None,
            behaviors: None,
            runner: None,
        }
    }

    /// Set the default initial state machines start in.
    pub fn initial(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the transition table.
    pub fn transitions(mut self, transitions: Transitions<S, E>) -> Self {
        self.transitions = Some(transitions);
        self
    }

    /// Set the behavior set: a ready-made [`Behaviors`](crate::Behaviors)
    /// mapping or any other [`BehaviorDispatch`] strategy.
    pub fn behaviors<B>(mut self, behaviors: B) -> Self
    where
        B: BehaviorDispatch<S, C, CallbackArgs<S, E, A>> + 'static,
    {
        self.behaviors = Some(Box::new(behaviors));
        self
    }

    /// Set the default callback runner.
    pub fn runner(mut self, runner: Arc<dyn CallbackRunner<C, CallbackArgs<S, E, A>>>) -> Self {
        self.runner = Some(runner);
        self
    }

    /// Build the model.
    pub fn build(self) -> Model<S, E, A, C> {
        Model::from_parts(
            self.initial_state,
            self.transitions.unwrap_or_default(),
            self.behaviors.unwrap_or_else(|| Box::new(NullBehaviors)),
            self.runner,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callbacks::{Behaviors, Trigger, ENTER};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Light {
        Red,
        Green,
    }

    impl State for Light {}

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Signal {
        Go,
    }

    impl Event for Signal {}

    fn signal_table() -> Transitions<Light, Signal> {
        Transitions::new()
            .on(Signal::Go, [(Some(Light::Red), Some(Light::Green))])
            .unwrap()
    }

    #[test]
    fn an_empty_builder_produces_a_model_with_no_events() {
        let model = ModelBuilder::<Light, Signal>::new().build();

        assert_eq!(model.initial_state(), None);
        let error = model.transition(Some(&Light::Red), &Signal::Go).unwrap_err();
        assert!(matches!(error, crate::MachineError::InvalidEvent { .. }));
    }

    #[test]
    fn the_default_runner_is_preset_for_context_free_models() {
        let fired = Arc::new(Mutex::new(0));
        let count = Arc::clone(&fired);
        let behaviors = Behaviors::new().on(
            ENTER,
            Trigger::On(Light::Green),
            move |_: &(), _: &CallbackArgs<Light, Signal>| *count.lock().unwrap() += 1,
        );
        let model = ModelBuilder::new()
            .transitions(signal_table())
            .behaviors(behaviors)
            .build();

        let result = model.transition(Some(&Light::Red), &Signal::Go).unwrap();

        assert_eq!(result, Some(Light::Green));
        assert_eq!(*fired.lock().unwrap(), 1);
    }

    #[test]
    fn behaviors_default_to_the_no_op_stub() {
        let model = ModelBuilder::<Light, Signal>::new()
            .initial(Light::Red)
            .transitions(signal_table())
            .build();

        assert_eq!(
            model.transition(Some(&Light::Red), &Signal::Go).unwrap(),
            Some(Light::Green)
        );
    }
}
