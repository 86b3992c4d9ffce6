//! Marker traits for states and tokens, and the machine signature.
//!
//! States and tokens are opaque to the engine. States are only used as table
//! keys and compared for equality; tokens are only handed to labels and
//! actions. Both traits are blanket-implemented, so symbols, strings,
//! integers and caller enums all work without extra code.

use crate::engine::MealyError;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identifiers.
///
/// Any cloneable, hashable, comparable value qualifies.
///
/// # Example
///
/// ```rust
/// use mealy::core::State;
///
/// fn assert_state<S: State>() {}
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Phase {
///     Start,
///     End,
/// }
///
/// assert_state::<Phase>();
/// assert_state::<&'static str>();
/// assert_state::<u32>();
/// ```
pub trait State: Clone + Eq + Hash + Debug {}

impl<S> State for S where S: Clone + Eq + Hash + Debug {}

/// Trait for input tokens.
///
/// Tokens need equality so they can be tested against exact labels, and
/// `Debug` so an unmatched token can be reported.
pub trait Token: Clone + PartialEq + Debug {}

impl<T> Token for T where T: Clone + PartialEq + Debug {}

/// Signature of a Mealy machine, implemented by the context type actions
/// run against.
///
/// The context is owned by the caller and lent to the engine for the
/// duration of one run. The engine never inspects it; it only passes it to
/// actions through an [`EmitScope`](crate::engine::EmitScope).
///
/// # Example
///
/// ```rust
/// use mealy::core::Mealy;
/// use mealy::engine::MealyError;
///
/// struct Counter {
///     ones: usize,
/// }
///
/// impl Mealy for Counter {
///     type State = &'static str;
///     type Token = u8;
///     type Output = usize;
///     type Finish = usize;
///     type Error = MealyError<&'static str, u8>;
/// }
/// ```
pub trait Mealy {
    /// State identifier type.
    type State: State;

    /// Input token type.
    type Token: Token;

    /// Type of the tokens actions emit in streaming mode.
    type Output;

    /// Value returned by the finish action.
    type Finish;

    /// Error type shared by the engine and user actions.
    ///
    /// Engine failures are converted into it; errors returned by actions
    /// pass through untouched.
    type Error: From<MealyError<Self::State, Self::Token>>;
}
