//! Error types for machine construction and operation.

use thiserror::Error;

/// Errors detected while building a machine from its configuration.
///
/// All configuration problems are caught eagerly at construction time;
/// a machine that builds successfully can never hit one of these later.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitial,

    #[error("State '{0}' is declared more than once")]
    DuplicateState(String),

    #[error("Duplicate transition on '{event}' from state '{state}'")]
    DuplicateRule { state: String, event: String },

    #[error("Transition on '{event}' declared for undeclared state '{from}'")]
    UnknownSource { from: String, event: String },

    #[error("Initial state '{0}' is not part of the configured state set")]
    UnknownInitial(String),

    #[error("Transition on '{event}' from '{from}' targets unknown state '{to}'")]
    DanglingTarget {
        from: String,
        event: String,
        to: String,
    },

    #[error("Malformed machine config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors surfaced by machine operations.
///
/// Both are local validation failures returned immediately to the caller;
/// the machine's history and cursor are untouched when either is raised.
#[derive(Debug, Error)]
pub enum MachineError {
    /// The requested state is not part of the configured state set.
    #[error("State '{0}' is not part of the configured state set")]
    InvalidState(String),

    /// The current state has no transition registered for the event.
    #[error("No transition registered for event '{event}' in state '{state}'")]
    InvalidTransition { state: String, event: String },
}
