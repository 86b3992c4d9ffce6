//! Builder API for declaring Mealy machines.
//!
//! A machine is declared once, through [`StateMachineBuilder`], and frozen
//! into an immutable [`StateMachine`](crate::engine::StateMachine). Nothing
//! is registered globally; the builder value is the whole declaration.
//!
//! # Example
//!
//! ```
//! use mealy::builder::StateMachineBuilder;
//! use mealy::core::Mealy;
//! use mealy::engine::MealyError;
//!
//! struct Switch;
//!
//! impl Mealy for Switch {
//!     type State = bool;
//!     type Token = char;
//!     type Output = ();
//!     type Finish = ();
//!     type Error = MealyError<bool, char>;
//! }
//!
//! let machine = StateMachineBuilder::<Switch>::new()
//!     .initial(false)
//!     .transition(|t| t.from(false).to(true).on('!'))
//!     .unwrap()
//!     .transition(|t| t.from(true).to(false).on('!'))
//!     .unwrap()
//!     // whitespace is read without changing state
//!     .transition(|t| t.read_states([false, true]).on(' '))
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let (_, history) = machine
//!     .execute_with_history(&mut Switch, "! ! !".chars())
//!     .unwrap();
//! assert_eq!(history.last_state(), Some(&true));
//! ```

pub mod error;
pub mod machine;
pub mod transition;

pub use error::{BuildError, DuplicateLabel};
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;
