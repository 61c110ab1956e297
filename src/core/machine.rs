//! The state machine operation surface.

use super::error::{ConfigError, MachineError};
use super::history::History;
use super::state::{Event, State};
use super::table::{MachineConfig, TransitionTable};

/// A finite state machine with a linear undo/redo history.
///
/// Owns a validated transition table (fixed at construction), the
/// configured initial state, and the history buffer. Every operation is
/// synchronous and runs to completion; failed operations leave the
/// machine untouched.
///
/// # Example
///
/// ```rust
/// use retrace::{event_enum, state_enum, MachineBuilder};
///
/// state_enum! {
///     enum Mood {
///         Normal,
///         Busy,
///     }
/// }
///
/// event_enum! {
///     enum Action {
///         Study,
///     }
/// }
///
/// let mut machine = MachineBuilder::new()
///     .initial(Mood::Normal)
///     .states([Mood::Normal, Mood::Busy])
///     .transition(Mood::Normal, Action::Study, Mood::Busy)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), &Mood::Normal);
/// machine.trigger(&Action::Study).unwrap();
/// assert_eq!(machine.current_state(), &Mood::Busy);
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<S: State, E: Event> {
    table: TransitionTable<S, E>,
    initial: S,
    history: History<S>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Build a machine from its configuration.
    ///
    /// Validates the whole configuration eagerly: the state set must be
    /// free of duplicates and dangling rule targets, and the initial
    /// state must be a member of it. On success the history holds the
    /// initial state as its only entry.
    pub fn new(config: MachineConfig<S, E>) -> Result<Self, ConfigError> {
        let table = TransitionTable::from_config(config.states)?;
        if !table.contains(&config.initial) {
            return Err(ConfigError::UnknownInitial(
                config.initial.name().to_string(),
            ));
        }

        let history = History::new(config.initial.clone());
        Ok(Self {
            table,
            initial: config.initial,
            history,
        })
    }

    /// Build a machine from a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(MachineConfig::from_json(json)?)
    }

    /// The currently active state (pure).
    pub fn current_state(&self) -> &S {
        self.history.current()
    }

    /// The configured initial state, as restored by [`reset`](StateMachine::reset).
    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// Read-only view of the history buffer and cursor.
    pub fn history(&self) -> &History<S> {
        &self.history
    }

    /// Jump to `state` unconditionally, bypassing transition rules.
    ///
    /// Fails with [`MachineError::InvalidState`] when `state` is not a
    /// member of the configured set; the history is untouched on failure.
    /// On success the redo branch is discarded and `state` becomes the
    /// current entry.
    pub fn change_state(&mut self, state: S) -> Result<(), MachineError> {
        if !self.table.contains(&state) {
            return Err(MachineError::InvalidState(state.name().to_string()));
        }
        self.history.record(state);
        Ok(())
    }

    /// Apply the transition registered for `event` on the current state.
    ///
    /// Fails with [`MachineError::InvalidTransition`] when the current
    /// state has no rule for `event`; the history is untouched on
    /// failure. On success the rule's destination is recorded exactly as
    /// in [`change_state`](StateMachine::change_state).
    pub fn trigger(&mut self, event: &E) -> Result<(), MachineError> {
        let current = self.history.current();
        let Some(next) = self.table.target(current, event) else {
            return Err(MachineError::InvalidTransition {
                state: current.name().to_string(),
                event: event.name().to_string(),
            });
        };

        let next = next.clone();
        self.history.record(next);
        Ok(())
    }

    /// Discard all history and return to the configured initial state.
    ///
    /// Afterwards the buffer holds the initial state alone and neither
    /// undo nor redo is available. Total; never fails.
    pub fn reset(&mut self) {
        self.history.reset(self.initial.clone());
    }

    /// All configured states, in declaration order.
    pub fn states(&self) -> &[S] {
        self.table.states()
    }

    /// The states holding a transition for `event`, in declaration order.
    ///
    /// An event no state accepts yields an empty sequence, never an error.
    pub fn states_accepting(&self, event: &E) -> Vec<&S> {
        self.table.accepting(event)
    }

    /// Step back to the previously visited state.
    ///
    /// Returns `false` when already at the oldest recorded state. The
    /// abandoned future stays recoverable via [`redo`](StateMachine::redo).
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Replay the next state in the redo branch.
    ///
    /// Returns `false` when no forward history exists.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Collapse the history to the current state alone.
    ///
    /// `current_state` is unchanged; all other entries are discarded
    /// irreversibly. Total; never fails.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::{Rule, StateConfig};
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Mood {
        Normal,
        Busy,
        Hungry,
        Sleeping,
    }

    impl State for Mood {
        fn name(&self) -> &str {
            match self {
                Self::Normal => "Normal",
                Self::Busy => "Busy",
                Self::Hungry => "Hungry",
                Self::Sleeping => "Sleeping",
            }
        }
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Action {
        Study,
        GetTired,
        GetHungry,
        Eat,
        GetUp,
    }

    impl Event for Action {
        fn name(&self) -> &str {
            match self {
                Self::Study => "Study",
                Self::GetTired => "GetTired",
                Self::GetHungry => "GetHungry",
                Self::Eat => "Eat",
                Self::GetUp => "GetUp",
            }
        }
    }

    fn study_config() -> MachineConfig<Mood, Action> {
        MachineConfig {
            initial: Mood::Normal,
            states: vec![
                StateConfig {
                    state: Mood::Normal,
                    transitions: vec![Rule {
                        on: Action::Study,
                        to: Mood::Busy,
                    }],
                },
                StateConfig {
                    state: Mood::Busy,
                    transitions: vec![
                        Rule {
                            on: Action::GetTired,
                            to: Mood::Sleeping,
                        },
                        Rule {
                            on: Action::GetHungry,
                            to: Mood::Hungry,
                        },
                    ],
                },
                StateConfig {
                    state: Mood::Hungry,
                    transitions: vec![Rule {
                        on: Action::Eat,
                        to: Mood::Normal,
                    }],
                },
                StateConfig {
                    state: Mood::Sleeping,
                    transitions: vec![
                        Rule {
                            on: Action::GetHungry,
                            to: Mood::Hungry,
                        },
                        Rule {
                            on: Action::GetUp,
                            to: Mood::Normal,
                        },
                    ],
                },
            ],
        }
    }

    fn study_machine() -> StateMachine<Mood, Action> {
        StateMachine::new(study_config()).unwrap()
    }

    #[test]
    fn starts_in_initial_state() {
        let machine = study_machine();
        assert_eq!(machine.current_state(), &Mood::Normal);
        assert_eq!(machine.initial(), &Mood::Normal);
        assert_eq!(machine.history().entries(), &[Mood::Normal]);
    }

    #[test]
    fn rejects_unknown_initial_state() {
        let config = MachineConfig {
            initial: Mood::Sleeping,
            states: vec![StateConfig::<Mood, Action> {
                state: Mood::Normal,
                transitions: vec![],
            }],
        };

        let result = StateMachine::new(config);
        assert!(matches!(result, Err(ConfigError::UnknownInitial(_))));
    }

    #[test]
    fn trigger_follows_registered_rule() {
        let mut machine = study_machine();

        machine.trigger(&Action::Study).unwrap();
        assert_eq!(machine.current_state(), &Mood::Busy);
    }

    #[test]
    fn trigger_without_rule_fails_and_preserves_state() {
        let mut machine = study_machine();
        machine.trigger(&Action::Study).unwrap();

        let result = machine.trigger(&Action::Eat);
        assert!(matches!(
            result,
            Err(MachineError::InvalidTransition { .. })
        ));
        assert_eq!(machine.current_state(), &Mood::Busy);
        assert_eq!(machine.history().entries(), &[Mood::Normal, Mood::Busy]);
    }

    #[test]
    fn change_state_bypasses_rules() {
        let mut machine = study_machine();

        machine.change_state(Mood::Sleeping).unwrap();
        assert_eq!(machine.current_state(), &Mood::Sleeping);
    }

    #[test]
    fn change_state_to_undeclared_state_fails_without_mutation() {
        let config = MachineConfig {
            initial: Mood::Normal,
            states: vec![
                StateConfig::<Mood, Action> {
                    state: Mood::Normal,
                    transitions: vec![],
                },
                StateConfig {
                    state: Mood::Busy,
                    transitions: vec![],
                },
            ],
        };
        let mut machine = StateMachine::new(config).unwrap();

        let result = machine.change_state(Mood::Hungry);
        assert!(matches!(result, Err(MachineError::InvalidState(_))));
        assert_eq!(machine.current_state(), &Mood::Normal);
        assert_eq!(machine.history().entries(), &[Mood::Normal]);
        assert_eq!(machine.history().head(), 0);
    }

    #[test]
    fn undo_redo_walk_the_buffer() {
        let mut machine = study_machine();
        machine.trigger(&Action::Study).unwrap();

        assert_eq!(machine.history().entries(), &[Mood::Normal, Mood::Busy]);
        assert_eq!(machine.history().head(), 1);

        assert!(machine.undo());
        assert_eq!(machine.current_state(), &Mood::Normal);

        assert!(machine.redo());
        assert_eq!(machine.current_state(), &Mood::Busy);
    }

    #[test]
    fn change_state_after_undo_discards_redo_branch() {
        let mut machine = study_machine();
        machine.trigger(&Action::Study).unwrap();
        machine.undo();

        machine.change_state(Mood::Hungry).unwrap();

        assert_eq!(machine.history().entries(), &[Mood::Normal, Mood::Hungry]);
        assert_eq!(machine.history().head(), 1);
        assert!(!machine.redo());
    }

    #[test]
    fn undo_at_start_and_redo_at_end_return_false() {
        let mut machine = study_machine();

        assert!(!machine.undo());
        assert!(!machine.redo());
        assert_eq!(machine.current_state(), &Mood::Normal);
    }

    #[test]
    fn reset_restores_configured_initial_state() {
        let mut machine = study_machine();
        machine.trigger(&Action::Study).unwrap();
        machine.trigger(&Action::GetHungry).unwrap();

        machine.reset();

        assert_eq!(machine.current_state(), &Mood::Normal);
        assert_eq!(machine.history().entries(), &[Mood::Normal]);
        assert!(!machine.undo());
        assert!(!machine.redo());
    }

    #[test]
    fn reset_is_idempotent() {
        let mut machine = study_machine();
        machine.trigger(&Action::Study).unwrap();

        machine.reset();
        let after_first = machine.history().clone();

        machine.reset();
        assert_eq!(machine.history(), &after_first);
    }

    #[test]
    fn reset_restores_initial_even_when_not_oldest_entry() {
        // Start from Busy, wander, then reset. The buffer collapses to the
        // configured initial, not to whatever history[0] happened to be.
        let mut config = study_config();
        config.initial = Mood::Busy;
        let mut machine = StateMachine::new(config).unwrap();

        machine.change_state(Mood::Hungry).unwrap();
        machine.reset();

        assert_eq!(machine.current_state(), &Mood::Busy);
        assert_eq!(machine.history().entries(), &[Mood::Busy]);
    }

    #[test]
    fn states_returns_full_set_in_declaration_order() {
        let machine = study_machine();

        assert_eq!(
            machine.states(),
            &[Mood::Normal, Mood::Busy, Mood::Hungry, Mood::Sleeping]
        );
    }

    #[test]
    fn states_accepting_filters_by_event() {
        let machine = study_machine();

        assert_eq!(
            machine.states_accepting(&Action::GetHungry),
            vec![&Mood::Busy, &Mood::Sleeping]
        );
        assert_eq!(machine.states_accepting(&Action::Study), vec![&Mood::Normal]);
    }

    #[test]
    fn clear_history_keeps_current_state_only() {
        let mut machine = study_machine();
        machine.trigger(&Action::Study).unwrap();
        machine.trigger(&Action::GetTired).unwrap();

        machine.clear_history();

        assert_eq!(machine.current_state(), &Mood::Sleeping);
        assert_eq!(machine.history().entries(), &[Mood::Sleeping]);
        assert!(!machine.undo());
        assert!(!machine.redo());
    }

    #[test]
    fn from_json_builds_a_working_machine() {
        let json = r#"{
            "initial": "Normal",
            "states": [
                { "state": "Normal", "transitions": [ { "on": "Study", "to": "Busy" } ] },
                { "state": "Busy" }
            ]
        }"#;

        let mut machine: StateMachine<Mood, Action> = StateMachine::from_json(json).unwrap();
        machine.trigger(&Action::Study).unwrap();
        assert_eq!(machine.current_state(), &Mood::Busy);
    }
}
