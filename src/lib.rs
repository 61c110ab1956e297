//! Retrace: a configurable finite state machine with replayable history.
//!
//! Retrace tracks a current state out of a fixed, configuration-defined set,
//! applies named event transitions to move between states, and keeps a linear
//! undo/redo history of every state visited. The transition table is built
//! once at construction and immutable afterwards; the only moving parts are
//! the history buffer and its cursor.
//!
//! # Core Concepts
//!
//! - **State / Event**: type-safe identifiers via the [`State`] and [`Event`]
//!   traits (usually generated with [`state_enum!`] / [`event_enum!`])
//! - **Transition table**: a `(state, event) -> state` mapping, validated
//!   eagerly at construction
//! - **History**: an ordered buffer of visited states with a movable cursor;
//!   forward transitions discard the redo branch, `undo`/`redo` only move
//!   the cursor
//!
//! # Example
//!
//! ```rust
//! use retrace::{event_enum, state_enum, MachineBuilder};
//!
//! state_enum! {
//!     enum Mood {
//!         Normal,
//!         Busy,
//!         Hungry,
//!     }
//! }
//!
//! event_enum! {
//!     enum Action {
//!         Study,
//!         GetHungry,
//!         Eat,
//!     }
//! }
//!
//! let mut machine = MachineBuilder::new()
//!     .initial(Mood::Normal)
//!     .states([Mood::Normal, Mood::Busy, Mood::Hungry])
//!     .transition(Mood::Normal, Action::Study, Mood::Busy)
//!     .transition(Mood::Busy, Action::GetHungry, Mood::Hungry)
//!     .transition(Mood::Hungry, Action::Eat, Mood::Normal)
//!     .build()
//!     .unwrap();
//!
//! machine.trigger(&Action::Study).unwrap();
//! assert_eq!(machine.current_state(), &Mood::Busy);
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), &Mood::Normal);
//!
//! assert!(machine.redo());
//! assert_eq!(machine.current_state(), &Mood::Busy);
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::MachineBuilder;
pub use core::{
    ConfigError, Event, History, MachineConfig, MachineError, Rule, State, StateConfig,
    StateMachine, TransitionTable,
};
