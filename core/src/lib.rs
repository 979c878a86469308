//! Qualitative Tank Reasoner Core
//!
//! Enumerate-filter-label pipeline over a hydraulic tank model: every
//! syntactically possible qualitative state of the three coupled
//! quantities (inflow, volume, outflow) is generated, filtered against
//! a catalog of dependency and continuity rules, and the survivors are
//! emitted as a directed state-transition graph for rendering.

pub mod enumerate; // Cartesian generation and canonical sorting
pub mod error;     // Boundary errors for malformed symbolic input
pub mod graph;     // Graph description handed to renderers
pub mod model;     // Quantity spaces, states, transitions
pub mod pipeline;  // End-to-end driver
pub mod rules;     // State and transition validity rules
pub mod trace;     // Trace labels for accepted transitions

pub use enumerate::{generate_states, generate_transitions, sort_states};
pub use error::{ModelError, ModelResult};
pub use graph::{numbered_state_label, state_label, GraphEdge, GraphNode, StateGraph};
pub use model::{Derivative, Magnitude, Quantity, QuantityValue, State, StateId, Transition};
pub use pipeline::{LabeledTransition, Pipeline, PipelineConfig, PipelineResult};
pub use rules::{all_state_rules, all_transition_rules, RuleSet, StateRule, TransitionRule};
pub use trace::trace_label;
