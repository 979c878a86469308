//! Dependency and consistency rules for single states
//!
//! Encodes the qualitative dependency structure of the tank: the tap
//! influences the volume positively (I+), the drain influences it
//! negatively (I-), volume and outflow are proportionally coupled (P+)
//! and correspond at their boundary values (VC), and no quantity can
//! keep moving past the edge of its domain.

use super::StateRule;
use crate::model::{Derivative, Magnitude, Quantity, State};

/// I+(Inflow, Volume): the tap drives the volume up
///
/// Positive inflow with a non-rising volume is only possible while the
/// drain is open; zero inflow can never produce a rising volume.
pub struct InflowInfluence;

impl StateRule for InflowInfluence {
    fn id(&self) -> &'static str {
        "i_plus_inflow_volume"
    }

    fn admits(&self, state: &State) -> bool {
        match state.inflow.magnitude {
            Magnitude::Pos => !(state.volume.derivative != Derivative::Pos
                && state.outflow.magnitude == Magnitude::Zero),
            Magnitude::Zero => state.volume.derivative != Derivative::Pos,
            // max is outside the inflow domain
            Magnitude::Max => true,
        }
    }
}

/// I-(Outflow, Volume): the drain drives the volume down
///
/// Maximal outflow forces a falling volume; positive outflow with the
/// tap closed forces a falling volume; no flow at all with the tap
/// closed leaves the volume steady.
pub struct OutflowInfluence;

impl StateRule for OutflowInfluence {
    fn id(&self) -> &'static str {
        "i_minus_outflow_volume"
    }

    fn admits(&self, state: &State) -> bool {
        match state.outflow.magnitude {
            Magnitude::Max => state.volume.derivative == Derivative::Neg,
            Magnitude::Pos => !(state.volume.derivative != Derivative::Neg
                && state.inflow.magnitude == Magnitude::Zero),
            Magnitude::Zero => !(state.volume.derivative != Derivative::Zero
                && state.inflow.magnitude == Magnitude::Zero),
        }
    }
}

/// P+(Volume, Outflow): derivatives move in lock-step
pub struct VolumeOutflowProportionality;

impl StateRule for VolumeOutflowProportionality {
    fn id(&self) -> &'static str {
        "p_plus_volume_outflow"
    }

    fn admits(&self, state: &State) -> bool {
        state.volume.derivative == state.outflow.derivative
    }
}

/// VC(Volume(max), Outflow(max)): both reach max simultaneously
pub struct MaxCorrespondence;

impl StateRule for MaxCorrespondence {
    fn id(&self) -> &'static str {
        "vc_max_volume_outflow"
    }

    fn admits(&self, state: &State) -> bool {
        (state.volume.magnitude == Magnitude::Max) == (state.outflow.magnitude == Magnitude::Max)
    }
}

/// VC(Volume(0), Outflow(0)): an empty tank cannot drain
///
/// Enforced in one direction only: zero outflow with a non-empty tank
/// stays admissible.
pub struct ZeroCorrespondence;

impl StateRule for ZeroCorrespondence {
    fn id(&self) -> &'static str {
        "vc_zero_volume_outflow"
    }

    fn admits(&self, state: &State) -> bool {
        !(state.volume.magnitude == Magnitude::Zero
            && state.outflow.magnitude != Magnitude::Zero)
    }
}

/// No quantity keeps moving past the edge of its domain
///
/// At the domain top the derivative cannot be positive; at zero it
/// cannot be negative. Applied to each quantity independently.
pub struct BoundaryLimits;

impl StateRule for BoundaryLimits {
    fn id(&self) -> &'static str {
        "boundary_derivatives"
    }

    fn admits(&self, state: &State) -> bool {
        Quantity::all().iter().all(|&quantity| {
            let magnitude = state.magnitude(quantity);
            let derivative = state.derivative(quantity);

            if magnitude == quantity.top() && derivative == Derivative::Pos {
                return false;
            }
            if magnitude == quantity.bottom() && derivative == Derivative::Neg {
                return false;
            }
            true
        })
    }
}
