//! Trace of the states a run visited.
//!
//! Recording is opt-in. When enabled, the engine appends one
//! [`StateTransition`] per consumed input token.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Record of a single transition fired by an input token.
///
/// # Example
///
/// ```rust
/// use mealy::core::StateTransition;
///
/// let transition = StateTransition {
///     from: "start",
///     to: "end",
///     position: 0,
/// };
/// assert_eq!(transition.position, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<S> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Zero-based index of the input token that fired the transition
    pub position: usize,
}

impl<S: State> StateTransition<S> {
    /// Whether the transition stayed in the same state.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use mealy::core::{StateHistory, StateTransition};
///
/// let history = StateHistory::new()
///     .record(StateTransition { from: "start", to: "mid", position: 0 })
///     .record(StateTransition { from: "mid", to: "end", position: 1 });
///
/// assert_eq!(history.get_path(), vec![&"start", &"mid", &"end"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateHistory<S> {
    transitions: Vec<StateTransition<S>>,
}

impl<S> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning the extended history.
    pub fn record(mut self, transition: StateTransition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    pub(crate) fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Get all recorded transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether no transition has been recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the `to`
    /// state of every transition. An empty history has an empty path.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);

        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }

        for transition in &self.transitions {
            path.push(&transition.to);
        }

        path
    }

    /// State reached by the last recorded transition.
    pub fn last_state(&self) -> Option<&S> {
        self.transitions.last().map(|t| &t.to)
    }
}
