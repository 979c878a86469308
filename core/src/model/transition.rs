//! Transitions between qualitative states

use serde::{Deserialize, Serialize};
use std::fmt;

use super::state::State;

/// Ordered pair of qualitative states
///
/// Transitions are only ever built from the already-filtered state
/// set, so both endpoints of an accepted transition are valid states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub from: State,
    pub to: State,
}

impl Transition {
    /// Create a transition between two states
    pub fn new(from: State, to: State) -> Self {
        Self { from, to }
    }

    /// True if both endpoints are the same state
    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
