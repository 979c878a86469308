//! Continuity rules between a state and its successor
//!
//! Qualitative continuity: magnitudes move one step at a time in the
//! direction of their derivative, point magnitudes cannot sit still
//! under a non-zero derivative, and derivatives cannot flip sign
//! without passing through zero.

use super::TransitionRule;
use crate::model::{Derivative, Magnitude, Quantity, State, Transition};

/// Volume and outflow span the 0..max magnitude range; inflow stops
/// at `+`, so the max-related bans are vacuous for it.
const SPANNING: [Quantity; 2] = [Quantity::Volume, Quantity::Outflow];

fn magnitude_step(from: &State, to: &State, quantity: Quantity) -> (Magnitude, Magnitude) {
    (from.magnitude(quantity), to.magnitude(quantity))
}

/// 1: a quantity with zero derivative keeps its magnitude
pub struct ZeroDerivativeFreeze;

impl TransitionRule for ZeroDerivativeFreeze {
    fn id(&self) -> &'static str {
        "zero_derivative_freeze"
    }

    fn admits(&self, transition: &Transition) -> bool {
        Quantity::all().iter().all(|&quantity| {
            transition.from.derivative(quantity) != Derivative::Zero
                || transition.from.magnitude(quantity) == transition.to.magnitude(quantity)
        })
    }
}

/// 2: magnitude never jumps between 0 and max in one step
pub struct NoMagnitudeTeleport;

impl TransitionRule for NoMagnitudeTeleport {
    fn id(&self) -> &'static str {
        "no_magnitude_teleport"
    }

    fn admits(&self, transition: &Transition) -> bool {
        SPANNING.iter().all(|&quantity| {
            !matches!(
                magnitude_step(&transition.from, &transition.to, quantity),
                (Magnitude::Zero, Magnitude::Max) | (Magnitude::Max, Magnitude::Zero)
            )
        })
    }
}

/// 3: a falling quantity cannot step its magnitude up
pub struct NoRiseUnderNegative;

impl TransitionRule for NoRiseUnderNegative {
    fn id(&self) -> &'static str {
        "no_rise_under_negative"
    }

    fn admits(&self, transition: &Transition) -> bool {
        Quantity::all().iter().all(|&quantity| {
            transition.from.derivative(quantity) != Derivative::Neg
                || !matches!(
                    magnitude_step(&transition.from, &transition.to, quantity),
                    (Magnitude::Zero, Magnitude::Pos) | (Magnitude::Pos, Magnitude::Max)
                )
        })
    }
}

/// 4: a rising quantity cannot step its magnitude down
pub struct NoFallUnderPositive;

impl TransitionRule for NoFallUnderPositive {
    fn id(&self) -> &'static str {
        "no_fall_under_positive"
    }

    fn admits(&self, transition: &Transition) -> bool {
        Quantity::all().iter().all(|&quantity| {
            transition.from.derivative(quantity) != Derivative::Pos
                || !matches!(
                    magnitude_step(&transition.from, &transition.to, quantity),
                    (Magnitude::Pos, Magnitude::Zero) | (Magnitude::Max, Magnitude::Pos)
                )
        })
    }
}

/// 5: a point magnitude cannot stay put under a non-zero derivative
///
/// Point values (`0`, `max`) are left immediately; only the interval
/// value `+` can persist across a step while still changing.
pub struct PointMagnitudeStability;

impl TransitionRule for PointMagnitudeStability {
    fn id(&self) -> &'static str {
        "point_magnitude_stability"
    }

    fn admits(&self, transition: &Transition) -> bool {
        Quantity::all().iter().all(|&quantity| {
            !(transition.from.magnitude(quantity).is_point()
                && transition.from.magnitude(quantity) == transition.to.magnitude(quantity)
                && transition.from.derivative(quantity) != Derivative::Zero)
        })
    }
}

/// 6: derivatives pass through zero, never flip sign directly
pub struct NoDerivativeReversal;

impl TransitionRule for NoDerivativeReversal {
    fn id(&self) -> &'static str {
        "no_derivative_reversal"
    }

    fn admits(&self, transition: &Transition) -> bool {
        Quantity::all().iter().all(|&quantity| {
            !matches!(
                (
                    transition.from.derivative(quantity),
                    transition.to.derivative(quantity)
                ),
                (Derivative::Neg, Derivative::Pos) | (Derivative::Pos, Derivative::Neg)
            )
        })
    }
}
