//! DOT rendering of the state-transition graph
//!
//! Nodes are keyed by their assigned state id; the multi-line display
//! labels and the trace labels ride along as `label` attributes.

use std::path::{Path, PathBuf};

use qr_tank_core::StateGraph;

/// Render a graph description as a DOT digraph
pub fn to_dot(graph: &StateGraph) -> String {
    let mut out = String::from("digraph states {\n");
    out.push_str("    overlap=false;\n");
    out.push_str("    splines=true;\n");
    out.push_str("    sep=\"+0.5\";\n");

    for node in &graph.nodes {
        out.push_str(&format!(
            "    s{} [label=\"{}\"];\n",
            node.id.0,
            escape(&node.label)
        ));
    }

    for edge in &graph.edges {
        out.push_str(&format!(
            "    s{} -> s{} [label=\"{}\"];\n",
            edge.from.0,
            edge.to.0,
            escape(&edge.label)
        ));
    }

    out.push_str("}\n");
    out
}

/// Path of the pruned companion artifact: `graph.dot` -> `graph_pruned.dot`
pub fn pruned_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("graph");
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => path.with_file_name(format!("{stem}_pruned.{ext}")),
        None => path.with_file_name(format!("{stem}_pruned")),
    }
}

fn escape(label: &str) -> String {
    label
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use qr_tank_core::{LabeledTransition, State, StateGraph, Transition};

    fn tiny_graph() -> StateGraph {
        let a = State::parse(&["0", "0", "0", "0", "0", "0"]).unwrap();
        let b = State::parse(&["0", "+", "0", "0", "0", "0"]).unwrap();
        let transitions = vec![LabeledTransition {
            transition: Transition::new(a, b),
            label: "E+I+".to_string(),
        }];
        StateGraph::build(&[a, b], &transitions)
    }

    #[test]
    fn test_to_dot_structure() {
        let dot = to_dot(&tiny_graph());

        assert!(dot.starts_with("digraph states {"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("s1 [label=\"State 1\\nInflow: [0, 0]\\nVolume: [0, 0]\\nOutflow: [0, 0]\"];"));
        assert!(dot.contains("s1 -> s2 [label=\"E+I+\"];"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a\nb"), "a\\nb");
        assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_pruned_path() {
        assert_eq!(
            pruned_path(Path::new("out/graph.dot")),
            PathBuf::from("out/graph_pruned.dot")
        );
        assert_eq!(
            pruned_path(Path::new("graph")),
            PathBuf::from("graph_pruned")
        );
    }
}
