//! Machine configuration and the compiled transition table.
//!
//! Configuration is a plain serde value: an initial state plus one entry
//! per recognized state carrying its outgoing `event -> target` rules.
//! The declaration order of the entries defines the iteration order of
//! the state set. Compiling the configuration validates it eagerly and
//! produces an immutable [`TransitionTable`] with hashed lookup.

use super::error::ConfigError;
use super::state::{Event, State};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single outgoing transition rule: on `on`, move to `to`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Rule<S: State, E: Event> {
    /// The event that fires this rule
    pub on: E,
    /// The destination state
    pub to: S,
}

/// Configuration entry for one recognized state.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateConfig<S: State, E: Event> {
    /// The state being declared
    pub state: S,
    /// Its outgoing transition rules (may be empty)
    #[serde(default = "Vec::new")]
    pub transitions: Vec<Rule<S, E>>,
}

/// Complete machine configuration: initial state plus the state set.
///
/// # Example
///
/// ```rust
/// use retrace::{event_enum, state_enum, MachineConfig, Rule, StateConfig};
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// event_enum! {
///     enum Tick {
///         Change,
///     }
/// }
///
/// let config = MachineConfig {
///     initial: Light::Red,
///     states: vec![
///         StateConfig {
///             state: Light::Red,
///             transitions: vec![Rule { on: Tick::Change, to: Light::Green }],
///         },
///         StateConfig {
///             state: Light::Green,
///             transitions: vec![Rule { on: Tick::Change, to: Light::Red }],
///         },
///     ],
/// };
/// assert_eq!(config.states.len(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineConfig<S: State, E: Event> {
    /// The state the machine starts in (must be a member of `states`)
    pub initial: S,
    /// The recognized states, in declaration order
    pub states: Vec<StateConfig<S, E>>,
}

impl<S: State, E: Event> MachineConfig<S, E> {
    /// Parse a configuration from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Validated, immutable `(state, event) -> state` mapping.
///
/// Holds the state set in declaration order alongside a hashed index for
/// constant-time rule lookup. Built once from a [`MachineConfig`]; no
/// states or rules can be added afterwards.
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, E: Event> {
    order: Vec<S>,
    rules: HashMap<S, HashMap<E, S>>,
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Compile and validate the state set of a configuration.
    ///
    /// Rejects duplicate state declarations, duplicate `(state, event)`
    /// rules, and rules whose destination is not a declared state.
    pub fn from_config(states: Vec<StateConfig<S, E>>) -> Result<Self, ConfigError> {
        let mut order = Vec::with_capacity(states.len());
        let mut rules: HashMap<S, HashMap<E, S>> = HashMap::with_capacity(states.len());

        for entry in &states {
            if rules.contains_key(&entry.state) {
                return Err(ConfigError::DuplicateState(entry.state.name().to_string()));
            }

            let mut outgoing = HashMap::with_capacity(entry.transitions.len());
            for rule in &entry.transitions {
                if outgoing.insert(rule.on.clone(), rule.to.clone()).is_some() {
                    return Err(ConfigError::DuplicateRule {
                        state: entry.state.name().to_string(),
                        event: rule.on.name().to_string(),
                    });
                }
            }

            order.push(entry.state.clone());
            rules.insert(entry.state.clone(), outgoing);
        }

        // Destination check runs after the whole set is known, so rules may
        // reference states declared later.
        for entry in &states {
            for rule in &entry.transitions {
                if !rules.contains_key(&rule.to) {
                    return Err(ConfigError::DanglingTarget {
                        from: entry.state.name().to_string(),
                        event: rule.on.name().to_string(),
                        to: rule.to.name().to_string(),
                    });
                }
            }
        }

        Ok(Self { order, rules })
    }

    /// Whether `state` is a member of the configured state set.
    pub fn contains(&self, state: &S) -> bool {
        self.rules.contains_key(state)
    }

    /// Destination of the rule for `event` out of `from`, if one exists.
    pub fn target(&self, from: &S, event: &E) -> Option<&S> {
        self.rules.get(from).and_then(|outgoing| outgoing.get(event))
    }

    /// The configured states in declaration order.
    pub fn states(&self) -> &[S] {
        &self.order
    }

    /// The states holding a rule for `event`, in declaration order.
    ///
    /// Empty when no state accepts the event; an unrecognized event is
    /// not an error, it simply matches nothing.
    pub fn accepting(&self, event: &E) -> Vec<&S> {
        self.order
            .iter()
            .filter(|state| {
                self.rules
                    .get(*state)
                    .is_some_and(|outgoing| outgoing.contains_key(event))
            })
            .collect()
    }
}
