//! Core data types of a Mealy machine.
//!
//! This module contains the pure part of the engine:
//! - State and token marker traits, and the `Mealy` machine signature
//! - Labels that decide which transition a token takes
//! - History of visited states
//!
//! Nothing in here runs user code.

mod history;
mod label;
mod state;

pub use history::{StateHistory, StateTransition};
pub use label::{Label, Pattern, Predicate};
pub use state::{Mealy, State, Token};
