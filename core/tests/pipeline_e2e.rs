//! End-to-end test of the enumerate-filter-label pipeline
//!
//! Exercises the full run against the known shape of the tank model:
//! 486 candidates collapse to 20 valid states and 75 valid
//! transitions, and pruning the graph leaves 14 reachable nodes.

use qr_tank_core::*;

fn state(symbols: [&str; 6]) -> State {
    State::parse(&symbols).unwrap()
}

#[test]
fn test_full_run_counts() {
    let result = Pipeline::default().run();

    assert_eq!(result.candidate_states, 486);
    assert_eq!(result.states.len(), 20);
    assert_eq!(result.candidate_transitions, 400);
    assert_eq!(result.transitions.len(), 75);
}

#[test]
fn test_known_fixtures_survive() {
    let result = Pipeline::default().run();

    for fixture in [
        ["0", "0", "0", "0", "0", "0"],
        ["0", "+", "0", "0", "0", "0"],
        ["+", "0", "0", "+", "0", "+"],
    ] {
        assert!(
            result.states.contains(&state(fixture)),
            "expected {:?} among the valid states",
            fixture
        );
    }
}

#[test]
fn test_known_transition_chain_survives() {
    let result = Pipeline::default().run();

    let chain = [
        (["0", "0", "0", "0", "0", "0"], ["0", "+", "0", "0", "0", "0"]),
        (["+", "0", "0", "+", "0", "+"], ["+", "0", "+", "+", "+", "+"]),
        (["+", "0", "+", "+", "+", "+"], ["+", "0", "+", "+", "+", "+"]),
    ];

    for (from, to) in chain {
        let expected = Transition::new(state(from), state(to));
        assert!(
            result
                .transitions
                .iter()
                .any(|labeled| labeled.transition == expected),
            "expected transition {} to be accepted",
            expected
        );
    }
}

#[test]
fn test_no_teleport_property() {
    let result = Pipeline::default().run();

    for labeled in &result.transitions {
        for quantity in [Quantity::Volume, Quantity::Outflow] {
            let from = labeled.transition.from.magnitude(quantity);
            let to = labeled.transition.to.magnitude(quantity);
            assert!(
                !(from == Magnitude::Zero && to == Magnitude::Max),
                "accepted transition jumps {} from 0 to max: {}",
                quantity,
                labeled.transition
            );
            assert!(
                !(from == Magnitude::Max && to == Magnitude::Zero),
                "accepted transition jumps {} from max to 0: {}",
                quantity,
                labeled.transition
            );
        }
    }
}

#[test]
fn test_transition_endpoints_are_valid_states() {
    let result = Pipeline::default().run();

    for labeled in &result.transitions {
        assert!(result.states.contains(&labeled.transition.from));
        assert!(result.states.contains(&labeled.transition.to));
    }
}

#[test]
fn test_graph_and_pruning() {
    let result = Pipeline::default().run();
    let graph = result.graph();

    assert_eq!(graph.nodes.len(), 20);
    assert_eq!(graph.edges.len(), 75);
    assert_eq!(graph.edge_triples().len(), 75);

    let pruned = graph.prune_unreached();
    assert_eq!(pruned.nodes.len(), 14);
    assert_eq!(pruned.edges.len(), 54);

    // pruning is idempotent
    assert_eq!(pruned.prune_unreached(), pruned);
}

#[test]
fn test_labels_on_known_transitions() {
    let result = Pipeline::default().run();

    let find = |from: [&str; 6], to: [&str; 6]| -> String {
        let expected = Transition::new(state(from), state(to));
        result
            .transitions
            .iter()
            .find(|labeled| labeled.transition == expected)
            .expect("transition should be accepted")
            .label
            .clone()
    };

    assert_eq!(
        find(["0", "0", "0", "0", "0", "0"], ["0", "+", "0", "0", "0", "0"]),
        "E+I+"
    );
    assert_eq!(
        find(["+", "0", "+", "+", "+", "+"], ["+", "0", "+", "+", "+", "+"]),
        "I+"
    );
    assert_eq!(
        find(["0", "+", "0", "0", "0", "0"], ["+", "0", "0", "+", "0", "+"]),
        "D+"
    );
}

#[test]
fn test_result_serializes_with_symbols() {
    let result = Pipeline::default().run();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["candidate_states"], 486);
    assert_eq!(json["states"].as_array().unwrap().len(), 20);

    // the idle tank serializes with its display symbols
    let idle = &json["states"][0];
    assert_eq!(idle["inflow"]["magnitude"], "0");
    assert_eq!(idle["volume"]["derivative"], "0");
}
