//! Directed graph description handed to renderers
//!
//! The core never draws or persists anything. It hands the rendering
//! collaborator labeled nodes and edges plus the pruning pass applied
//! between the two output artifacts, and owns the fixed-format state
//! pretty-printer the renderer displays.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::model::{State, StateId};
use crate::pipeline::LabeledTransition;

/// Fixed-format display label for a state
pub fn state_label(state: &State) -> String {
    format!(
        "Inflow: {}\nVolume: {}\nOutflow: {}",
        state.inflow, state.volume, state.outflow
    )
}

/// Display label prefixed with an assigned id
pub fn numbered_state_label(id: StateId, state: &State) -> String {
    format!("State {}\n{}", id.0, state_label(state))
}

/// A graph node: a valid state with its assigned id and display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: StateId,
    pub state: State,
    pub label: String,
}

/// A directed edge carrying the trace label as display text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: StateId,
    pub to: StateId,
    pub label: String,
}

/// Directed state-transition graph description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl StateGraph {
    /// Build the graph from accepted states and labeled transitions
    ///
    /// Ids are assigned 1-based in the order the states are given,
    /// before any label is produced. Transitions are only ever built
    /// from the filtered state set, so every edge endpoint resolves.
    pub fn build(states: &[State], transitions: &[LabeledTransition]) -> Self {
        let mut index: FxHashMap<State, StateId> = FxHashMap::default();
        let mut nodes = Vec::with_capacity(states.len());

        for (i, &state) in states.iter().enumerate() {
            let id = StateId(i as u32 + 1);
            index.insert(state, id);
            nodes.push(GraphNode {
                id,
                state,
                label: numbered_state_label(id, &state),
            });
        }

        let edges = transitions
            .iter()
            .filter_map(|labeled| {
                let from = *index.get(&labeled.transition.from)?;
                let to = *index.get(&labeled.transition.to)?;
                Some(GraphEdge {
                    from,
                    to,
                    label: labeled.label.clone(),
                })
            })
            .collect();

        Self { nodes, edges }
    }

    /// Drop nodes that are never reached
    ///
    /// A node with zero incoming edges (a self-loop counts as
    /// incoming) is removed together with its outgoing edges. Removal
    /// can expose newly unreached nodes, so the pass cascades until
    /// stable; running it on its own output is a no-op.
    pub fn prune_unreached(&self) -> StateGraph {
        let mut nodes = self.nodes.clone();
        let mut edges = self.edges.clone();

        loop {
            let reached: FxHashSet<StateId> = edges.iter().map(|e| e.to).collect();
            let before = nodes.len();
            nodes.retain(|node| reached.contains(&node.id));

            if nodes.len() == before {
                break;
            }

            let kept: FxHashSet<StateId> = nodes.iter().map(|node| node.id).collect();
            edges.retain(|edge| kept.contains(&edge.from) && kept.contains(&edge.to));
        }

        StateGraph { nodes, edges }
    }

    /// Ordered (from-label, to-label, edge-label) triples for renderers
    pub fn edge_triples(&self) -> Vec<(&str, &str, &str)> {
        let labels: FxHashMap<StateId, &str> = self
            .nodes
            .iter()
            .map(|node| (node.id, node.label.as_str()))
            .collect();

        self.edges
            .iter()
            .filter_map(|edge| {
                Some((
                    *labels.get(&edge.from)?,
                    *labels.get(&edge.to)?,
                    edge.label.as_str(),
                ))
            })
            .collect()
    }
}
