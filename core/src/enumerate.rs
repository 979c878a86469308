//! State and transition generation
//!
//! Over-generates the full Cartesian space of candidate states and
//! candidate transitions; filtering them against physical rules is the
//! `rules` module's job.

use crate::model::{Derivative, Quantity, State, Transition};

/// Generate every syntactically possible state
///
/// Nesting order matches the tuple layout (inflow magnitude outermost,
/// outflow derivative innermost), yielding 2*3*3*3*3*3 = 486 states.
pub fn generate_states() -> Vec<State> {
    let mut states = Vec::with_capacity(486);

    for &inflow_mag in Quantity::Inflow.magnitude_domain() {
        for inflow_der in Derivative::ALL {
            for &volume_mag in Quantity::Volume.magnitude_domain() {
                for volume_der in Derivative::ALL {
                    for &outflow_mag in Quantity::Outflow.magnitude_domain() {
                        for outflow_der in Derivative::ALL {
                            states.push(State::from_parts(
                                inflow_mag,
                                inflow_der,
                                volume_mag,
                                volume_der,
                                outflow_mag,
                                outflow_der,
                            ));
                        }
                    }
                }
            }
        }
    }

    states
}

/// Sort states into canonical display order
///
/// One stable pass per tuple position, iterating from the last
/// position to the first. A later pass reorders only where its ranks
/// differ, so the net order is lexicographic over the six components
/// with the first position as the primary key.
pub fn sort_states(states: &mut [State]) {
    for position in (0..State::COMPONENTS).rev() {
        states.sort_by_key(|state| state.rank_key()[position]);
    }
}

/// Generate every ordered pair of the given states, self-pairs included
pub fn generate_transitions(states: &[State]) -> Vec<Transition> {
    let mut transitions = Vec::with_capacity(states.len() * states.len());

    for &from in states {
        for &to in states {
            transitions.push(Transition::new(from, to));
        }
    }

    transitions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_486_states() {
        assert_eq!(generate_states().len(), 486);
    }

    #[test]
    fn test_no_duplicate_states() {
        use std::collections::HashSet;

        let states = generate_states();
        let unique: HashSet<State> = states.iter().copied().collect();
        assert_eq!(unique.len(), states.len());
    }

    #[test]
    fn test_sort_is_lexicographic() {
        let mut states = generate_states();
        sort_states(&mut states);

        let mut expected = generate_states();
        expected.sort_by_key(|s| s.rank_key());

        assert_eq!(states, expected);
    }

    #[test]
    fn test_sorted_extremes() {
        let mut states = generate_states();
        sort_states(&mut states);

        // (0, -, 0, -, 0, -) ranks lowest, (+, +, max, +, max, +) highest
        assert_eq!(states[0], State::parse(&["0", "-", "0", "-", "0", "-"]).unwrap());
        assert_eq!(
            states[states.len() - 1],
            State::parse(&["+", "+", "max", "+", "max", "+"]).unwrap()
        );
    }

    #[test]
    fn test_transition_count_is_square() {
        let states: Vec<State> = generate_states().into_iter().take(7).collect();
        assert_eq!(generate_transitions(&states).len(), 49);
    }

    #[test]
    fn test_transitions_include_self_pairs() {
        let states: Vec<State> = generate_states().into_iter().take(3).collect();
        let transitions = generate_transitions(&states);

        for state in &states {
            assert!(transitions
                .iter()
                .any(|t| t.from == *state && t.to == *state));
        }
    }
}
