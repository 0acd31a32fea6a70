//! The declarative transition table.
//!
//! A [`Transitions`] value is a pure mapping from `(event, source state)` to
//! target state. It carries no behavior: callbacks, runners, and state
//! storage live in the other components, which is what lets any of them be
//! replaced without touching the table.

use super::state::{Event, State};
use crate::error::MachineError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A single transition in declarative record form.
///
/// This is the serde-facing shape of a table entry, so transition tables can
/// be loaded from configuration. A missing (`null`) target deserializes to
/// `None` and is rejected by [`Transitions::from_defs`] with
/// [`MachineError::InvalidTransition`]; a `null` *source* is legal and means
/// "from no state at all".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDef<S, E> {
    /// Event causing the transition.
    pub event: E,
    /// Source state; `None` means the machine has no state yet.
    pub from: Option<S>,
    /// Target state; `None` is a configuration error.
    pub to: Option<S>,
}

/// Pure mapping from `(event, source state)` to target state.
///
/// Registration is validated immediately: a transition without a target
/// never enters the table, so a model built from it can never misbehave at
/// runtime. Lookup distinguishes an unknown event (an error) from a known
/// event with no entry for the current state (a normal "no transition").
///
/// # Example
///
/// ```rust
/// use composable_fsm::{Event, MachineError, State, Transitions};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Temp {
///     Cold,
///     Warm,
/// }
/// impl State for Temp {}
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Climate {
///     Heat,
/// }
/// impl Event for Climate {}
///
/// # fn main() -> Result<(), MachineError> {
/// let table = Transitions::new()
///     .on(Climate::Heat, [(Some(Temp::Cold), Some(Temp::Warm))])?;
///
/// assert_eq!(
///     table.transition(Some(&Temp::Cold), &Climate::Heat)?,
///     Some(&Temp::Warm)
/// );
/// assert_eq!(table.transition(Some(&Temp::Warm), &Climate::Heat)?, None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Transitions<S: State, E: Event> {
    for_event: HashMap<E, HashMap<Option<S>, S>>,
}

impl<S: State, E: Event> Default for Transitions<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> Transitions<S, E> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            for_event: HashMap::new(),
        }
    }

    /// Build a table from declarative transition records.
    pub fn from_defs<I>(defs: I) -> Result<Self, MachineError>
    where
        I: IntoIterator<Item = TransitionDef<S, E>>,
    {
        let mut table = Self::new();
        for def in defs {
            table = table.on(def.event, [(def.from, def.to)])?;
        }
        Ok(table)
    }

    /// Add or merge source-to-target entries for an event.
    ///
    /// All moves in the call are validated before any of them is applied:
    /// a `None` target fails with [`MachineError::InvalidTransition`] and
    /// none of the call's moves enter the table. The call consumes the
    /// builder, so a rejected registration forfeits the table along with
    /// it; validate transition data with [`Transitions::from_defs`] first
    /// when the table must survive bad input.
    pub fn on<I>(mut self, event: E, moves: I) -> Result<Self, MachineError>
    where
        I: IntoIterator<Item = (Option<S>, Option<S>)>,
    {
        let mut validated = Vec::new();
        for (from, to) in moves {
            match to {
                Some(to) => validated.push((from, to)),
                None => return Err(MachineError::invalid_transition(&event, &from)),
            }
        }
        self.for_event.entry(event).or_default().extend(validated);
        Ok(self)
    }

    /// Look up the target state for an event from a given state.
    ///
    /// Returns `Ok(None)` when the event is registered but has no entry for
    /// `state` — firing an event that does not apply right now is a normal
    /// no-op, not an error. An event the table has never seen fails with
    /// [`MachineError::InvalidEvent`].
    pub fn transition(&self, state: Option<&S>, event: &E) -> Result<Option<&S>, MachineError> {
        let moves = self
            .for_event
            .get(event)
            .ok_or_else(|| MachineError::invalid_event(event, &state))?;
        Ok(moves.get(&state.cloned()))
    }

    /// All registered events.
    pub fn events(&self) -> HashSet<&E> {
        self.for_event.keys().collect()
    }

    /// All source and target states seen by the table. Contains `None` when
    /// a nil-source transition was registered.
    pub fn states(&self) -> HashSet<Option<&S>> {
        let mut states = HashSet::new();
        for moves in self.for_event.values() {
            for (from, to) in moves {
                states.insert(from.as_ref());
                states.insert(Some(to));
            }
        }
        states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Doc {
        Created,
        Updated,
        Removed,
        Error,
    }

    impl State for Doc {}

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum DocEvent {
        Add,
        Update,
        Remove,
        Restore,
        Expunge,
    }

    impl Event for DocEvent {}

    fn document_table() -> Transitions<Doc, DocEvent> {
        Transitions::new()
            .on(DocEvent::Add, [(None, Some(Doc::Created))])
            .unwrap()
            .on(
                DocEvent::Update,
                [
                    (Some(Doc::Created), Some(Doc::Updated)),
                    (Some(Doc::Updated), Some(Doc::Updated)),
                ],
            )
            .unwrap()
            .on(
                DocEvent::Remove,
                [
                    (Some(Doc::Created), Some(Doc::Removed)),
                    (Some(Doc::Updated), Some(Doc::Removed)),
                ],
            )
            .unwrap()
    }

    #[test]
    fn events_returns_all_registered_events() {
        let table = document_table();

        let events = table.events();
        assert_eq!(events.len(), 3);
        assert!(events.contains(&DocEvent::Add));
        assert!(events.contains(&DocEvent::Update));
        assert!(events.contains(&DocEvent::Remove));
    }

    #[test]
    fn states_returns_sources_and_targets_including_nil() {
        let table = document_table();

        let states = table.states();
        assert!(states.contains(&None));
        assert!(states.contains(&Some(&Doc::Created)));
        assert!(states.contains(&Some(&Doc::Updated)));
        assert!(states.contains(&Some(&Doc::Removed)));
        assert_eq!(states.len(), 4);
    }

    #[test]
    fn on_merges_into_existing_registrations() {
        let table = document_table()
            .on(DocEvent::Remove, [(None, Some(Doc::Error))])
            .unwrap()
            .on(DocEvent::Restore, [(Some(Doc::Removed), Some(Doc::Updated))])
            .unwrap();

        assert_eq!(table.events().len(), 4);
        assert_eq!(
            table.transition(None, &DocEvent::Add).unwrap(),
            Some(&Doc::Created)
        );
        assert_eq!(
            table.transition(None, &DocEvent::Remove).unwrap(),
            Some(&Doc::Error)
        );
        assert_eq!(
            table
                .transition(Some(&Doc::Removed), &DocEvent::Restore)
                .unwrap(),
            Some(&Doc::Updated)
        );
    }

    #[test]
    fn on_rejects_missing_targets() {
        let error = document_table()
            .on(DocEvent::Expunge, [(Some(Doc::Created), None)])
            .unwrap_err();

        assert!(matches!(error, MachineError::InvalidTransition { .. }));
    }

    #[test]
    fn transition_rejects_unknown_events() {
        let error = document_table()
            .transition(Some(&Doc::Updated), &DocEvent::Expunge)
            .unwrap_err();

        assert!(matches!(error, MachineError::InvalidEvent { .. }));
    }

    #[test]
    fn transition_resolves_registered_moves() {
        let table = document_table();

        assert_eq!(
            table.transition(None, &DocEvent::Add).unwrap(),
            Some(&Doc::Created)
        );
        assert_eq!(
            table
                .transition(Some(&Doc::Created), &DocEvent::Update)
                .unwrap(),
            Some(&Doc::Updated)
        );
        assert_eq!(
            table
                .transition(Some(&Doc::Updated), &DocEvent::Remove)
                .unwrap(),
            Some(&Doc::Removed)
        );
    }

    #[test]
    fn transition_returns_none_when_no_entry_applies() {
        let table = document_table();

        assert_eq!(table.transition(None, &DocEvent::Remove).unwrap(), None);
        assert_eq!(
            table.transition(Some(&Doc::Created), &DocEvent::Add).unwrap(),
            None
        );
    }

    #[test]
    fn defs_build_a_table_from_json() {
        let defs: Vec<TransitionDef<Doc, DocEvent>> = serde_json::from_str(
            r#"[
                {"event": "Add", "from": null, "to": "Created"},
                {"event": "Update", "from": "Created", "to": "Updated"}
            ]"#,
        )
        .unwrap();

        let table = Transitions::from_defs(defs).unwrap();

        assert_eq!(
            table.transition(None, &DocEvent::Add).unwrap(),
            Some(&Doc::Created)
        );
        assert_eq!(
            table
                .transition(Some(&Doc::Created), &DocEvent::Update)
                .unwrap(),
            Some(&Doc::Updated)
        );
    }

    #[test]
    fn defs_reject_null_targets() {
        let defs: Vec<TransitionDef<Doc, DocEvent>> = serde_json::from_str(
            r#"[{"event": "Expunge", "from": "Created", "to": null}]"#,
        )
        .unwrap();

        let error = Transitions::from_defs(defs).unwrap_err();

        assert!(matches!(error, MachineError::InvalidTransition { .. }));
    }
}
