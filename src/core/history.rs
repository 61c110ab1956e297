//! Visited-state history with a movable cursor.
//!
//! The history buffer is an ordered record of every state visited, with a
//! cursor ("head") marking the currently active entry. Recording a new
//! state discards any entries past the head (the abandoned redo branch)
//! before appending; `undo`/`redo` only move the cursor and never touch
//! the buffer's contents.

use super::state::State;

/// Ordered buffer of visited states with a cursor.
///
/// Invariants, upheld by every operation:
/// - the buffer is never empty (it always holds at least the current state)
/// - `head` always indexes a valid entry
///
/// The current state is the entry under the cursor. Entries past the
/// cursor form the redo branch; they stay readable until a new state is
/// recorded over them.
///
/// # Example
///
/// ```rust
/// use retrace::state_enum;
/// use retrace::History;
///
/// state_enum! {
///     enum Step {
///         One,
///         Two,
///         Three,
///     }
/// }
///
/// let mut history = History::new(Step::One);
/// history.record(Step::Two);
/// assert_eq!(history.current(), &Step::Two);
///
/// assert!(history.undo());
/// assert_eq!(history.current(), &Step::One);
///
/// // Recording from the middle discards the redo branch.
/// history.record(Step::Three);
/// assert!(!history.redo());
/// assert_eq!(history.entries(), &[Step::One, Step::Three]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History<S: State> {
    entries: Vec<S>,
    head: usize,
}

impl<S: State> History<S> {
    /// Create a history holding a single entry, cursor on it.
    pub fn new(initial: S) -> Self {
        Self {
            entries: vec![initial],
            head: 0,
        }
    }

    /// The entry under the cursor.
    pub fn current(&self) -> &S {
        &self.entries[self.head]
    }

    /// Record a newly visited state.
    ///
    /// Truncates the buffer to the entries up to and including the head,
    /// appends `state`, and advances the cursor onto it. Any redo branch
    /// that existed before the call is permanently discarded.
    pub fn record(&mut self, state: S) {
        self.entries.truncate(self.head + 1);
        self.entries.push(state);
        self.head += 1;
    }

    /// Move the cursor one entry back.
    ///
    /// Returns `false` without mutation when already on the oldest entry.
    /// The abandoned future stays in the buffer, recoverable by [`redo`].
    ///
    /// [`redo`]: History::redo
    pub fn undo(&mut self) -> bool {
        if self.head > 0 {
            self.head -= 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor one entry forward.
    ///
    /// Returns `false` without mutation when no forward entry exists.
    pub fn redo(&mut self) -> bool {
        if self.head + 1 < self.entries.len() {
            self.head += 1;
            true
        } else {
            false
        }
    }

    /// Collapse the buffer to the current entry alone, cursor on it.
    ///
    /// Entries before and after the head are discarded irreversibly.
    pub fn clear(&mut self) {
        let current = self.entries[self.head].clone();
        self.entries.clear();
        self.entries.push(current);
        self.head = 0;
    }

    /// Replace the whole buffer with a single entry, cursor on it.
    pub fn reset(&mut self, state: S) {
        self.entries.clear();
        self.entries.push(state);
        self.head = 0;
    }

    /// All recorded entries in visit order, including the redo branch.
    pub fn entries(&self) -> &[S] {
        &self.entries
    }

    /// Cursor position within [`entries`](History::entries).
    pub fn head(&self) -> usize {
        self.head
    }

    /// Whether an older entry exists to move back to.
    pub fn can_undo(&self) -> bool {
        self.head > 0
    }

    /// Whether a forward entry exists to replay.
    pub fn can_redo(&self) -> bool {
        self.head + 1 < self.entries.len()
    }
}
