//! Builder for constructing state machines.

use crate::core::{ConfigError, Event, MachineConfig, Rule, State, StateConfig, StateMachine};

/// Builder for constructing state machines with a fluent API.
///
/// States must be declared before rules reference them as sources; the
/// declaration order becomes the iteration order of the machine's state
/// set. All validation happens in [`build`](MachineBuilder::build).
///
/// # Example
///
/// ```rust
/// use retrace::{event_enum, state_enum, MachineBuilder};
///
/// state_enum! {
///     enum Door {
///         Open,
///         Closed,
///     }
/// }
///
/// event_enum! {
///     enum Push {
///         Toggle,
///     }
/// }
///
/// let machine = MachineBuilder::new()
///     .initial(Door::Closed)
///     .states([Door::Closed, Door::Open])
///     .transition(Door::Closed, Push::Toggle, Door::Open)
///     .transition(Door::Open, Push::Toggle, Door::Closed)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), &Door::Closed);
/// ```
pub struct MachineBuilder<S: State, E: Event> {
    initial: Option<S>,
    states: Vec<S>,
    rules: Vec<(S, E, S)>,
}

impl<S: State, E: Event> MachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Set the initial state (required; must also be declared).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare a recognized state.
    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    /// Declare multiple states at once, in order.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.states.extend(states);
        self
    }

    /// Register a transition rule: on `on` in `from`, move to `to`.
    pub fn transition(mut self, from: S, on: E, to: S) -> Self {
        self.rules.push((from, on, to));
        self
    }

    /// Build the state machine.
    ///
    /// Fails with [`ConfigError`] when the initial state is missing or
    /// undeclared, a rule's source or target is undeclared, or the
    /// declarations contain duplicates.
    pub fn build(self) -> Result<StateMachine<S, E>, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitial)?;

        let mut states: Vec<StateConfig<S, E>> = self
            .states
            .into_iter()
            .map(|state| StateConfig {
                state,
                transitions: Vec::new(),
            })
            .collect();

        for (from, on, to) in self.rules {
            let Some(entry) = states.iter_mut().find(|entry| entry.state == from) else {
                return Err(ConfigError::UnknownSource {
                    from: from.name().to_string(),
                    event: on.name().to_string(),
                });
            };
            entry.transitions.push(Rule { on, to });
        }

        StateMachine::new(MachineConfig { initial, states })
    }
}

impl<S: State, E: Event> Default for MachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
