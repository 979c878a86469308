//! Error types for the model boundary
//!
//! The validity predicates themselves are total over well-formed
//! states; errors arise only when malformed symbolic input crosses the
//! parsing boundary.

use thiserror::Error;

use crate::model::Quantity;

/// Errors raised when parsing symbolic state input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Symbol is not part of any quantity space
    #[error("unknown symbol '{0}' (expected one of -, 0, +, max)")]
    UnknownSymbol(String),

    /// Symbol is a known magnitude but not in this quantity's domain
    #[error("magnitude '{symbol}' is outside the {quantity} domain")]
    OutOfDomain { quantity: Quantity, symbol: String },

    /// A state needs exactly six components
    #[error("expected {expected} state components, got {got}")]
    WrongArity { expected: usize, got: usize },
}

/// Result type for boundary operations
pub type ModelResult<T> = Result<T, ModelError>;
