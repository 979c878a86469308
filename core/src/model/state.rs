//! Qualitative state of the tank
//!
//! A state is a pure value: six symbolic components in fixed tuple
//! order (inflow magnitude/derivative, volume magnitude/derivative,
//! outflow magnitude/derivative). Equality is component-wise and
//! nothing beyond the content identifies a state; numeric ids exist
//! only once a graph is built.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::quantity::{Derivative, Magnitude, Quantity, QuantityValue};
use crate::error::{ModelError, ModelResult};

/// Identifier assigned to a state when a graph is built (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub u32);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// Qualitative snapshot of the three tank quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    pub inflow: QuantityValue,
    pub volume: QuantityValue,
    pub outflow: QuantityValue,
}

impl State {
    /// Number of symbolic components in the tuple layout
    pub const COMPONENTS: usize = 6;

    /// Create a state from per-quantity values
    pub fn new(inflow: QuantityValue, volume: QuantityValue, outflow: QuantityValue) -> Self {
        Self {
            inflow,
            volume,
            outflow,
        }
    }

    /// Create a state from its six components in tuple order
    pub fn from_parts(
        inflow_mag: Magnitude,
        inflow_der: Derivative,
        volume_mag: Magnitude,
        volume_der: Derivative,
        outflow_mag: Magnitude,
        outflow_der: Derivative,
    ) -> Self {
        Self::new(
            QuantityValue::new(inflow_mag, inflow_der),
            QuantityValue::new(volume_mag, volume_der),
            QuantityValue::new(outflow_mag, outflow_der),
        )
    }

    /// Magnitude of the selected quantity
    #[inline]
    pub fn magnitude(&self, quantity: Quantity) -> Magnitude {
        self.value(quantity).magnitude
    }

    /// Derivative of the selected quantity
    #[inline]
    pub fn derivative(&self, quantity: Quantity) -> Derivative {
        self.value(quantity).derivative
    }

    /// Magnitude/derivative pair of the selected quantity
    #[inline]
    pub fn value(&self, quantity: Quantity) -> QuantityValue {
        match quantity {
            Quantity::Inflow => self.inflow,
            Quantity::Volume => self.volume,
            Quantity::Outflow => self.outflow,
        }
    }

    /// Parse a state from six symbols in tuple order
    ///
    /// This is the only fallible entry into the model: wrong arity or
    /// an out-of-domain symbol fails fast here, so the validity
    /// predicates can stay total over well-formed states.
    pub fn parse(symbols: &[&str]) -> ModelResult<Self> {
        if symbols.len() != Self::COMPONENTS {
            return Err(ModelError::WrongArity {
                expected: Self::COMPONENTS,
                got: symbols.len(),
            });
        }

        let magnitude = |quantity: Quantity, symbol: &str| -> ModelResult<Magnitude> {
            let m: Magnitude = symbol.parse()?;
            if !quantity.admits_magnitude(m) {
                return Err(ModelError::OutOfDomain {
                    quantity,
                    symbol: symbol.to_string(),
                });
            }
            Ok(m)
        };

        Ok(Self::from_parts(
            magnitude(Quantity::Inflow, symbols[0])?,
            symbols[1].parse()?,
            magnitude(Quantity::Volume, symbols[2])?,
            symbols[3].parse()?,
            magnitude(Quantity::Outflow, symbols[4])?,
            symbols[5].parse()?,
        ))
    }

    /// Global symbol ranks of the six components in tuple order
    ///
    /// Used by the canonical sort: `-` 0, `0` 1, `+` 2, `max` 3.
    pub fn rank_key(&self) -> [u8; Self::COMPONENTS] {
        [
            self.inflow.magnitude.rank(),
            self.inflow.derivative.rank(),
            self.volume.magnitude.rank(),
            self.volume.derivative.rank(),
            self.outflow.magnitude.rank(),
            self.outflow.derivative.rank(),
        ]
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {}, {})",
            self.inflow.magnitude,
            self.inflow.derivative,
            self.volume.magnitude,
            self.volume.derivative,
            self.outflow.magnitude,
            self.outflow.derivative,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let state = State::parse(&["+", "0", "+", "+", "+", "+"]).unwrap();
        assert_eq!(state.magnitude(Quantity::Inflow), Magnitude::Pos);
        assert_eq!(state.derivative(Quantity::Inflow), Derivative::Zero);
        assert_eq!(state.magnitude(Quantity::Volume), Magnitude::Pos);
        assert_eq!(state.derivative(Quantity::Outflow), Derivative::Pos);
    }

    #[test]
    fn test_parse_wrong_arity() {
        assert_eq!(
            State::parse(&["0", "0", "0"]),
            Err(ModelError::WrongArity {
                expected: 6,
                got: 3
            })
        );
    }

    #[test]
    fn test_parse_out_of_domain() {
        // inflow magnitude can never be max
        assert_eq!(
            State::parse(&["max", "0", "0", "0", "0", "0"]),
            Err(ModelError::OutOfDomain {
                quantity: Quantity::Inflow,
                symbol: "max".to_string()
            })
        );
    }

    #[test]
    fn test_parse_unknown_symbol() {
        assert_eq!(
            State::parse(&["0", "0", "0", "?", "0", "0"]),
            Err(ModelError::UnknownSymbol("?".to_string()))
        );
    }

    #[test]
    fn test_component_wise_equality() {
        let a = State::parse(&["0", "+", "0", "0", "0", "0"]).unwrap();
        let b = State::from_parts(
            Magnitude::Zero,
            Derivative::Pos,
            Magnitude::Zero,
            Derivative::Zero,
            Magnitude::Zero,
            Derivative::Zero,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_rank_key_tuple_order() {
        let state = State::parse(&["+", "-", "max", "0", "0", "+"]).unwrap();
        assert_eq!(state.rank_key(), [2, 0, 3, 1, 1, 2]);
    }

    #[test]
    fn test_display() {
        let state = State::parse(&["0", "0", "max", "-", "max", "-"]).unwrap();
        assert_eq!(state.to_string(), "(0, 0, max, -, max, -)");
    }
}
