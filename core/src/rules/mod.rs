//! Validity rules for states and transitions
//!
//! Every physical dependency and continuity assumption is a named
//! rule. The conjuncts are independent: a candidate is accepted only
//! if every rule in the catalog admits it, and evaluation order never
//! changes the outcome.

pub mod state_rules;
pub mod transition_rules;

pub use state_rules::*;
pub use transition_rules::*;

use crate::model::{State, Transition};

/// A validity rule over a single candidate state
pub trait StateRule: Send + Sync {
    /// Unique identifier, used in rejection diagnostics
    fn id(&self) -> &'static str;

    /// True if this rule admits the state
    fn admits(&self, state: &State) -> bool;
}

/// A continuity rule over a candidate transition
pub trait TransitionRule: Send + Sync {
    /// Unique identifier, used in rejection diagnostics
    fn id(&self) -> &'static str;

    /// True if this rule admits the transition
    fn admits(&self, transition: &Transition) -> bool;
}

/// The full catalog of state rules
pub fn all_state_rules() -> Vec<Box<dyn StateRule>> {
    vec![
        Box::new(InflowInfluence),
        Box::new(OutflowInfluence),
        Box::new(VolumeOutflowProportionality),
        Box::new(MaxCorrespondence),
        Box::new(ZeroCorrespondence),
        Box::new(BoundaryLimits),
    ]
}

/// The full catalog of transition rules
pub fn all_transition_rules() -> Vec<Box<dyn TransitionRule>> {
    vec![
        Box::new(ZeroDerivativeFreeze),
        Box::new(NoMagnitudeTeleport),
        Box::new(NoRiseUnderNegative),
        Box::new(NoFallUnderPositive),
        Box::new(PointMagnitudeStability),
        Box::new(NoDerivativeReversal),
    ]
}

/// Both rule catalogs bundled for the filtering stages
pub struct RuleSet {
    state_rules: Vec<Box<dyn StateRule>>,
    transition_rules: Vec<Box<dyn TransitionRule>>,
}

impl RuleSet {
    /// The standard tank-model catalogs
    pub fn standard() -> Self {
        Self {
            state_rules: all_state_rules(),
            transition_rules: all_transition_rules(),
        }
    }

    /// True if every state rule admits the state
    pub fn is_valid_state(&self, state: &State) -> bool {
        self.state_rules.iter().all(|rule| rule.admits(state))
    }

    /// Id of the first state rule that rejects, if any
    pub fn state_violation(&self, state: &State) -> Option<&'static str> {
        self.state_rules
            .iter()
            .find(|rule| !rule.admits(state))
            .map(|rule| rule.id())
    }

    /// True if every transition rule admits the transition
    pub fn is_valid_transition(&self, transition: &Transition) -> bool {
        self.transition_rules
            .iter()
            .all(|rule| rule.admits(transition))
    }

    /// Id of the first transition rule that rejects, if any
    pub fn transition_violation(&self, transition: &Transition) -> Option<&'static str> {
        self.transition_rules
            .iter()
            .find(|rule| !rule.admits(transition))
            .map(|rule| rule.id())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
