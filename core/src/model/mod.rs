//! Data model for the qualitative tank
//!
//! - **quantity**: symbolic magnitude/derivative domains and their order
//! - **state**: the six-component qualitative state value
//! - **transition**: ordered state pairs

mod quantity;
mod state;
mod transition;

pub use quantity::{Derivative, Magnitude, Quantity, QuantityValue};
pub use state::{State, StateId};
pub use transition::Transition;
