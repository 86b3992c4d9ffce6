//! Execution engine.
//!
//! Walks an input sequence against a [`StateMachine`], running the user's
//! actions on every transition.
//!
//! # Run Modes
//!
//! - [`StateMachine::run`]: lazy stream of the tokens actions emit
//! - [`StateMachine::execute`]: consumes everything and returns the finish
//!   action's value, discarding emits
//!
//! Both modes share one state walk: start action, then one transition per
//! token (first matching rule wins), then the finish action. A token with no
//! matching rule aborts the run with [`MealyError::UnexpectedToken`] and the
//! finish action is skipped.

mod emit;
mod error;
mod machine;
mod run;
mod table;

pub use emit::EmitScope;
pub use error::MealyError;
pub use machine::StateMachine;
pub use run::Run;
pub use table::{FinishAction, Rule, StartAction, TransitionAction, TransitionTable};
