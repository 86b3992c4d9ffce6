//! Engine error type.

use crate::core::{State, Token};
use thiserror::Error;

/// Errors raised by the engine itself.
///
/// Errors returned from user actions never pass through this type; they
/// reach the caller as the machine's own `Error`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MealyError<S: State, T: Token> {
    /// No rule of `state` matches `token`.
    #[error("Unexpected token {token:?} in state {state:?}")]
    UnexpectedToken { state: S, token: T },
}

impl<S: State, T: Token> MealyError<S, T> {
    /// State the machine was in when the error occurred.
    pub fn state(&self) -> &S {
        match self {
            MealyError::UnexpectedToken { state, .. } => state,
        }
    }

    /// Token that could not be matched.
    pub fn token(&self) -> &T {
        match self {
            MealyError::UnexpectedToken { token, .. } => token,
        }
    }
}
