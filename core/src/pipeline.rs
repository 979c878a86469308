//! End-to-end enumerate-filter-label pipeline
//!
//! Runs the five driver steps: over-generate states, sort them,
//! filter against the state rules, over-generate transitions, filter
//! against the continuity rules and label the survivors. Every stage
//! is a pure transformation over immutable data; the watch lists add
//! a tracing side channel for selected values and never affect
//! acceptance.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::enumerate::{generate_states, generate_transitions, sort_states};
use crate::graph::StateGraph;
use crate::model::{State, Transition};
use crate::rules::RuleSet;
use crate::trace::trace_label;

/// An accepted transition together with its trace label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledTransition {
    pub transition: Transition,
    pub label: String,
}

/// Diagnostic configuration for a pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// States whose rejection is reported on the debug channel
    pub watch_states: Vec<State>,

    /// Transitions whose rejection is reported on the debug channel
    pub watch_transitions: Vec<Transition>,
}

/// Outcome of a full pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    /// Size of the raw Cartesian state space
    pub candidate_states: usize,

    /// Accepted states in canonical order
    pub states: Vec<State>,

    /// Size of the raw transition space (accepted states squared)
    pub candidate_transitions: usize,

    /// Accepted transitions with their trace labels
    pub transitions: Vec<LabeledTransition>,
}

impl PipelineResult {
    /// Build the graph description handed to renderers
    pub fn graph(&self) -> StateGraph {
        StateGraph::build(&self.states, &self.transitions)
    }
}

/// Pipeline driver
pub struct Pipeline {
    rules: RuleSet,
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a driver with the standard rule catalogs
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            rules: RuleSet::standard(),
            config,
        }
    }

    /// Run the full pipeline
    pub fn run(&self) -> PipelineResult {
        let mut candidates = generate_states();
        let candidate_states = candidates.len();
        sort_states(&mut candidates);
        info!(candidates = candidate_states, "generated candidate states");

        let states: Vec<State> = candidates
            .into_iter()
            .filter(|state| self.admit_state(state))
            .collect();
        info!(
            valid = states.len(),
            removed = candidate_states - states.len(),
            "filtered states"
        );

        let transition_candidates = generate_transitions(&states);
        let candidate_transitions = transition_candidates.len();
        info!(
            candidates = candidate_transitions,
            "generated candidate transitions"
        );

        let transitions: Vec<LabeledTransition> = transition_candidates
            .into_iter()
            .filter(|transition| self.admit_transition(transition))
            .map(|transition| LabeledTransition {
                label: trace_label(&transition),
                transition,
            })
            .collect();
        info!(valid = transitions.len(), "filtered and labeled transitions");

        PipelineResult {
            candidate_states,
            states,
            candidate_transitions,
            transitions,
        }
    }

    fn admit_state(&self, state: &State) -> bool {
        match self.rules.state_violation(state) {
            None => true,
            Some(rule) => {
                if self.config.watch_states.contains(state) {
                    debug!(%state, rule, "watched state rejected");
                }
                false
            }
        }
    }

    fn admit_transition(&self, transition: &Transition) -> bool {
        match self.rules.transition_violation(transition) {
            None => true,
            Some(rule) => {
                if self.config.watch_transitions.contains(transition) {
                    debug!(%transition, rule, "watched transition rejected");
                }
                false
            }
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}
