//! Trace labels for accepted transitions
//!
//! A trace label summarizes the qualitative character of one step:
//! `E+` for an erratic re-derivative event (the tap changes its trend
//! without a magnitude change), `I+` for a step whose volume and
//! outflow carry over unchanged, `D+` for a magnitude crossing driven
//! by a derivative. Tags concatenate without separator.

use crate::model::Transition;

/// Derive the trace label for a transition
pub fn trace_label(transition: &Transition) -> String {
    let from = &transition.from;
    let to = &transition.to;
    let mut label = String::new();

    // erratic behaviour of the tap and its ramifications; the three
    // branches are mutually exclusive and only the first match fires
    if from.inflow.magnitude == to.inflow.magnitude
        && from.inflow.derivative != to.inflow.derivative
    {
        label.push_str("E+");
    } else if from.volume.magnitude == to.volume.magnitude
        && from.volume.derivative != to.volume.derivative
    {
        if from.inflow.magnitude == to.inflow.magnitude
            && from.outflow.magnitude == to.outflow.magnitude
        {
            label.push_str("E+");
        }
    } else if from.outflow.magnitude == to.outflow.magnitude
        && from.outflow.derivative != to.outflow.derivative
    {
        if to.volume.derivative != to.outflow.derivative {
            label.push_str("E+");
        }
    }

    // interval: volume and outflow carried over unchanged
    if from.volume == to.volume && from.outflow == to.outflow {
        label.push_str("I+");
    }

    // magnitude change due to a derivative; a single tag no matter
    // how many quantities cross
    if from.inflow.magnitude != to.inflow.magnitude
        || from.volume.magnitude != to.volume.magnitude
        || from.outflow.magnitude != to.outflow.magnitude
    {
        label.push_str("D+");
    }

    label
}
