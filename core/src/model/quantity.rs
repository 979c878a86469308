//! Quantity spaces for the tank model
//!
//! Three coupled quantities (inflow, volume, outflow), each carrying a
//! symbolic magnitude and a rate-of-change sign. Magnitude domains are
//! fixed: inflow `{0, +}`, volume and outflow `{0, +, max}`; all three
//! share the derivative domain `{-, 0, +}`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Symbolic magnitude of a quantity
///
/// The derived order `0 < + < max` is consistent with the global
/// symbol rank `- < 0 < + < max` used for canonical state sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Magnitude {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "+")]
    Pos,
    #[serde(rename = "max")]
    Max,
}

impl Magnitude {
    /// Rank in the global symbol order (`-` holds rank 0)
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            Self::Zero => 1,
            Self::Pos => 2,
            Self::Max => 3,
        }
    }

    /// True for point values (`0`, `max`); `+` is the interval value
    #[inline]
    pub fn is_point(self) -> bool {
        !matches!(self, Self::Pos)
    }

    /// Display symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::Pos => "+",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Magnitude {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Self::Zero),
            "+" => Ok(Self::Pos),
            "max" => Ok(Self::Max),
            other => Err(ModelError::UnknownSymbol(other.to_string())),
        }
    }
}

/// Rate-of-change sign of a quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Derivative {
    #[serde(rename = "-")]
    Neg,
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "+")]
    Pos,
}

impl Derivative {
    /// The shared derivative domain, in rank order
    pub const ALL: [Derivative; 3] = [Self::Neg, Self::Zero, Self::Pos];

    /// Rank in the global symbol order
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            Self::Neg => 0,
            Self::Zero => 1,
            Self::Pos => 2,
        }
    }

    /// Display symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Zero => "0",
            Self::Pos => "+",
        }
    }
}

impl fmt::Display for Derivative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Derivative {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(Self::Neg),
            "0" => Ok(Self::Zero),
            "+" => Ok(Self::Pos),
            other => Err(ModelError::UnknownSymbol(other.to_string())),
        }
    }
}

/// Selector for one of the three tank quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Inflow,
    Volume,
    Outflow,
}

impl Quantity {
    /// All quantities in tuple order
    pub fn all() -> [Quantity; 3] {
        [Self::Inflow, Self::Volume, Self::Outflow]
    }

    /// The magnitude domain of this quantity, in rank order
    pub fn magnitude_domain(self) -> &'static [Magnitude] {
        match self {
            Self::Inflow => &[Magnitude::Zero, Magnitude::Pos],
            Self::Volume | Self::Outflow => &[Magnitude::Zero, Magnitude::Pos, Magnitude::Max],
        }
    }

    /// Highest magnitude this quantity can take
    #[inline]
    pub fn top(self) -> Magnitude {
        match self {
            Self::Inflow => Magnitude::Pos,
            Self::Volume | Self::Outflow => Magnitude::Max,
        }
    }

    /// Lowest magnitude this quantity can take
    #[inline]
    pub fn bottom(self) -> Magnitude {
        Magnitude::Zero
    }

    /// True if the magnitude lies inside this quantity's domain
    pub fn admits_magnitude(self, magnitude: Magnitude) -> bool {
        self.magnitude_domain().contains(&magnitude)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inflow => write!(f, "inflow"),
            Self::Volume => write!(f, "volume"),
            Self::Outflow => write!(f, "outflow"),
        }
    }
}

/// Magnitude/derivative pair for one quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuantityValue {
    pub magnitude: Magnitude,
    pub derivative: Derivative,
}

impl QuantityValue {
    /// Create a magnitude/derivative pair
    pub fn new(magnitude: Magnitude, derivative: Derivative) -> Self {
        Self {
            magnitude,
            derivative,
        }
    }
}

impl fmt::Display for QuantityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.magnitude, self.derivative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_symbol_rank() {
        assert_eq!(Derivative::Neg.rank(), 0);
        assert_eq!(Magnitude::Zero.rank(), 1);
        assert_eq!(Derivative::Zero.rank(), 1);
        assert_eq!(Magnitude::Pos.rank(), 2);
        assert_eq!(Derivative::Pos.rank(), 2);
        assert_eq!(Magnitude::Max.rank(), 3);
    }

    #[test]
    fn test_ord_matches_rank() {
        assert!(Magnitude::Zero < Magnitude::Pos);
        assert!(Magnitude::Pos < Magnitude::Max);
        assert!(Derivative::Neg < Derivative::Zero);
        assert!(Derivative::Zero < Derivative::Pos);
    }

    #[test]
    fn test_magnitude_domains() {
        assert_eq!(Quantity::Inflow.magnitude_domain().len(), 2);
        assert_eq!(Quantity::Volume.magnitude_domain().len(), 3);
        assert_eq!(Quantity::Outflow.magnitude_domain().len(), 3);
        assert!(!Quantity::Inflow.admits_magnitude(Magnitude::Max));
        assert!(Quantity::Volume.admits_magnitude(Magnitude::Max));
    }

    #[test]
    fn test_domain_bounds() {
        assert_eq!(Quantity::Inflow.top(), Magnitude::Pos);
        assert_eq!(Quantity::Volume.top(), Magnitude::Max);
        assert_eq!(Quantity::Outflow.top(), Magnitude::Max);
        for q in Quantity::all() {
            assert_eq!(q.bottom(), Magnitude::Zero);
        }
    }

    #[test]
    fn test_interval_vs_point() {
        assert!(Magnitude::Zero.is_point());
        assert!(Magnitude::Max.is_point());
        assert!(!Magnitude::Pos.is_point());
    }

    #[test]
    fn test_symbol_round_trip() {
        for m in [Magnitude::Zero, Magnitude::Pos, Magnitude::Max] {
            assert_eq!(m.symbol().parse::<Magnitude>(), Ok(m));
        }
        for d in Derivative::ALL {
            assert_eq!(d.symbol().parse::<Derivative>(), Ok(d));
        }
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        assert_eq!(
            "?".parse::<Magnitude>(),
            Err(ModelError::UnknownSymbol("?".to_string()))
        );
        // "-" is a derivative symbol, never a magnitude
        assert_eq!(
            "-".parse::<Magnitude>(),
            Err(ModelError::UnknownSymbol("-".to_string()))
        );
        assert_eq!(
            "max".parse::<Derivative>(),
            Err(ModelError::UnknownSymbol("max".to_string()))
        );
    }

    #[test]
    fn test_serde_symbols() {
        assert_eq!(serde_json::to_string(&Magnitude::Max).unwrap(), "\"max\"");
        assert_eq!(serde_json::to_string(&Derivative::Neg).unwrap(), "\"-\"");
        let m: Magnitude = serde_json::from_str("\"+\"").unwrap();
        assert_eq!(m, Magnitude::Pos);
    }
}
