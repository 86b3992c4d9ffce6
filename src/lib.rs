//! Mealy: a Mealy machine execution engine
//!
//! Declare a transition table once, then drive it over any sequence of input
//! tokens. Every transition runs a user action, and actions may emit output
//! tokens, which makes the engine a convenient base for lexers and small
//! protocol decoders.
//!
//! # Core Concepts
//!
//! - **Mealy**: trait implemented by the context type actions run against
//! - **Label**: decides whether a rule applies to a token; first match wins
//! - **StateMachine**: immutable definition, shareable across runs
//! - **Run modes**: `run` streams emitted tokens lazily, `execute` returns the
//!   finish action's value
//!
//! # Example
//!
//! Read ones until a zero, then emit how many ones were read.
//!
//! ```rust
//! use mealy::builder::StateMachineBuilder;
//! use mealy::core::Mealy;
//! use mealy::engine::MealyError;
//!
//! #[derive(Default)]
//! struct Counter {
//!     ones: usize,
//! }
//!
//! impl Mealy for Counter {
//!     type State = &'static str;
//!     type Token = u8;
//!     type Output = usize;
//!     type Finish = usize;
//!     type Error = MealyError<&'static str, u8>;
//! }
//!
//! let machine = StateMachineBuilder::<Counter>::new()
//!     .initial("start")
//!     .transition(|t| t.from("start").to("end").on(0))
//!     .unwrap()
//!     .transition(|t| {
//!         t.read("start").on(1).action(|scope, _, _, _| {
//!             scope.ones += 1;
//!             Ok(())
//!         })
//!     })
//!     .unwrap()
//!     // once here we are stuck, but the rest of the input still gets read
//!     .transition(|t| t.read("end"))
//!     .unwrap()
//!     .on_finish(|scope| {
//!         let ones = scope.ones;
//!         scope.emit(ones);
//!         Ok(ones)
//!     })
//!     .build()
//!     .unwrap();
//!
//! let mut counter = Counter::default();
//! let first = machine.run(&mut counter, [1, 1, 1, 1, 0, 1, 0, 0]).next();
//! assert_eq!(first, Some(Ok(4)));
//!
//! let mut counter = Counter::default();
//! assert_eq!(machine.execute(&mut counter, [1, 1, 0]), Ok(Some(2)));
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use crate::core::{Label, Mealy, Pattern, State, StateHistory, StateTransition, Token};
pub use crate::engine::{EmitScope, MealyError, Run, StateMachine};
