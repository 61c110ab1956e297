//! Identifier traits for state machine states and events.
//!
//! States and events are opaque names drawn from fixed, finite sets.
//! Both are represented as user-supplied types (usually plain enums)
//! implementing the traits below, so membership in the configured set
//! is checked against the configuration rather than baked into the
//! machine itself.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identifiers.
///
/// States are immutable values naming a condition the machine can be in.
/// Which of them the machine actually recognizes is decided by the
/// configuration, not by the type: a `State` value that is not part of
/// the configured set is rejected at lookup time.
///
/// # Required Traits
///
/// - `Clone`: states are stored in the history buffer by value
/// - `Eq + Hash`: states key the transition table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states appear in machine configuration
///
/// # Example
///
/// ```rust
/// use retrace::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Mood {
///     Normal,
///     Busy,
///     Hungry,
///     Sleeping,
/// }
///
/// impl State for Mood {
///     fn name(&self) -> &str {
///         match self {
///             Self::Normal => "Normal",
///             Self::Busy => "Busy",
///             Self::Hungry => "Hungry",
///             Self::Sleeping => "Sleeping",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/diagnostics.
    fn name(&self) -> &str;
}

/// Trait for event identifiers.
///
/// Events are meaningful only in the context of the state they are
/// triggered from; the same requirements as [`State`] apply. Usually
/// generated with the [`event_enum!`](crate::event_enum) macro.
pub trait Event:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/diagnostics.
    fn name(&self) -> &str;
}
