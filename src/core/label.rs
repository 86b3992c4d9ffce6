//! Transition labels and the predicates behind them.
//!
//! Labels are pure: matching a token never fails and never has side effects.
//! The engine tests the labels of a state in declaration order and takes the
//! first one that matches.

use std::fmt;
use std::ops::{Range, RangeInclusive};
use std::sync::Arc;

/// A test over input tokens, used by [`Label::Pattern`].
///
/// Implement this for richer label types (character classes, regexes,
/// protocol opcodes). Implementations must be pure and thread-safe.
///
/// # Example
///
/// ```rust
/// use mealy::core::{Label, Pattern};
///
/// struct Even;
///
/// impl Pattern<u32> for Even {
///     fn covers(&self, token: &u32) -> bool {
///         token % 2 == 0
///     }
/// }
///
/// let label = Label::pattern(Even);
/// assert!(label.matches(&4));
/// assert!(!label.matches(&5));
/// ```
pub trait Pattern<T>: Send + Sync {
    /// Check whether this pattern covers the token.
    fn covers(&self, token: &T) -> bool;
}

impl<T> Pattern<T> for Range<T>
where
    T: PartialOrd + Send + Sync,
{
    fn covers(&self, token: &T) -> bool {
        self.contains(token)
    }
}

impl<T> Pattern<T> for RangeInclusive<T>
where
    T: PartialOrd + Send + Sync,
{
    fn covers(&self, token: &T) -> bool {
        self.contains(token)
    }
}

/// Matches any of the listed tokens.
impl<T> Pattern<T> for Vec<T>
where
    T: PartialEq + Send + Sync,
{
    fn covers(&self, token: &T) -> bool {
        self.contains(token)
    }
}

/// Pattern backed by a closure.
pub struct Predicate<F>(pub F);

impl<T, F> Pattern<T> for Predicate<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn covers(&self, token: &T) -> bool {
        (self.0)(token)
    }
}

/// Label on a transition arrow.
///
/// `Any` is the wildcard and matches every token. `Exact` matches by
/// equality. `Pattern` delegates to a [`Pattern`] implementation.
///
/// Labels compare structurally: all wildcards are equal, exact labels are
/// equal when their values are, and pattern labels are equal only when they
/// share the same underlying pattern.
///
/// # Example
///
/// ```rust
/// use mealy::core::Label;
///
/// let digit = Label::range('0'..='9');
/// let semicolon: Label<char> = ';'.into();
///
/// assert!(digit.matches(&'7'));
/// assert!(semicolon.matches(&';'));
/// assert!(Label::Any.matches(&'x'));
/// assert!(!semicolon.matches(&'x'));
/// ```
pub enum Label<T> {
    Any,
    Exact(T),
    Pattern(Arc<dyn Pattern<T>>),
}

impl<T> Label<T> {
    /// Label matching exactly this value.
    pub fn exact(value: T) -> Self {
        Label::Exact(value)
    }

    /// Label backed by an arbitrary pattern.
    pub fn pattern<P>(pattern: P) -> Self
    where
        P: Pattern<T> + 'static,
    {
        Label::Pattern(Arc::new(pattern))
    }

    /// Label matching every token inside the inclusive range.
    pub fn range(range: RangeInclusive<T>) -> Self
    where
        T: PartialOrd + Send + Sync + 'static,
    {
        Self::pattern(range)
    }

    /// Label matching any of the given tokens.
    pub fn one_of<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: PartialEq + Send + Sync + 'static,
    {
        Self::pattern(tokens.into_iter().collect::<Vec<_>>())
    }

    /// Label matching whenever the predicate holds.
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::pattern(Predicate(predicate))
    }

    /// Whether this is the wildcard label.
    pub fn is_any(&self) -> bool {
        matches!(self, Label::Any)
    }
}

impl<T: PartialEq> Label<T> {
    /// Test the label against a token.
    pub fn matches(&self, token: &T) -> bool {
        match self {
            Label::Any => true,
            Label::Exact(value) => value == token,
            Label::Pattern(pattern) => pattern.covers(token),
        }
    }
}

impl<T> From<T> for Label<T> {
    fn from(value: T) -> Self {
        Label::Exact(value)
    }
}

impl<T: Clone> Clone for Label<T> {
    fn clone(&self) -> Self {
        match self {
            Label::Any => Label::Any,
            Label::Exact(value) => Label::Exact(value.clone()),
            Label::Pattern(pattern) => Label::Pattern(Arc::clone(pattern)),
        }
    }
}

impl<T: PartialEq> PartialEq for Label<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Label::Any, Label::Any) => true,
            (Label::Exact(a), Label::Exact(b)) => a == b,
            (Label::Pattern(a), Label::Pattern(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Label<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Any => f.write_str("Any"),
            Label::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            Label::Pattern(_) => f.write_str("Pattern(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_matches_everything() {
        let label: Label<i32> = Label::Any;

        assert!(label.matches(&0));
        assert!(label.matches(&-17));
        assert!(label.matches(&i32::MAX));
    }

    #[test]
    fn exact_label_matches_by_equality() {
        let label = Label::exact(1);

        assert!(label.matches(&1));
        assert!(!label.matches(&2));
    }

    #[test]
    fn plain_values_convert_to_exact_labels() {
        let label: Label<&str> = "let".into();

        assert_eq!(label, Label::Exact("let"));
        assert!(label.matches(&"let"));
        assert!(!label.matches(&"var"));
    }

    #[test]
    fn range_labels_test_containment() {
        let digits = Label::range('0'..='9');

        assert!(digits.matches(&'0'));
        assert!(digits.matches(&'9'));
        assert!(!digits.matches(&'a'));

        let half_open = Label::pattern(0..10);
        assert!(half_open.matches(&9));
        assert!(!half_open.matches(&10));
    }

    #[test]
    fn one_of_matches_any_listed_token() {
        let whitespace = Label::one_of([' ', '\t', '\n']);

        assert!(whitespace.matches(&'\t'));
        assert!(!whitespace.matches(&'x'));
    }

    #[test]
    fn predicate_labels_delegate_to_closure() {
        let alpha = Label::when(|c: &char| c.is_ascii_alphabetic());

        assert!(alpha.matches(&'q'));
        assert!(!alpha.matches(&'1'));
    }

    #[test]
    fn wildcards_compare_equal_and_differ_from_exact() {
        let any_a: Label<u8> = Label::Any;
        let any_b: Label<u8> = Label::Any;

        assert_eq!(any_a, any_b);
        assert_ne!(any_a, Label::Exact(0));
        assert!(any_a.is_any());
        assert!(!Label::Exact(0u8).is_any());
    }

    #[test]
    fn patterns_compare_by_identity() {
        let digits = Label::range(0u8..=9);
        let same = digits.clone();
        let other = Label::range(0u8..=9);

        assert_eq!(digits, same);
        assert_ne!(digits, other);
    }

    #[test]
    fn matching_is_deterministic() {
        let label = Label::one_of([1, 3, 5]);

        for token in 0..8 {
            assert_eq!(label.matches(&token), label.matches(&token));
        }
    }

    #[test]
    fn debug_output_names_variant() {
        assert_eq!(format!("{:?}", Label::<u8>::Any), "Any");
        assert_eq!(format!("{:?}", Label::Exact(7u8)), "Exact(7)");
        assert_eq!(format!("{:?}", Label::range(1u8..=2)), "Pattern(..)");
    }
}
