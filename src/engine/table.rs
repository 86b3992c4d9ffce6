//! Transition rules and the table that holds them.

use crate::core::{Label, Mealy};
use crate::engine::emit::EmitScope;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Action run when the machine starts, before any token is read.
pub type StartAction<M> =
    Arc<dyn Fn(&mut EmitScope<'_, M>) -> Result<(), <M as Mealy>::Error> + Send + Sync>;

/// Action run after the last token has been read.
pub type FinishAction<M> = Arc<
    dyn Fn(&mut EmitScope<'_, M>) -> Result<<M as Mealy>::Finish, <M as Mealy>::Error>
        + Send
        + Sync,
>;

/// Action run when a rule fires. Receives the token, the source state and
/// the target state.
pub type TransitionAction<M> = Arc<
    dyn Fn(
            &mut EmitScope<'_, M>,
            &<M as Mealy>::Token,
            &<M as Mealy>::State,
            &<M as Mealy>::State,
        ) -> Result<(), <M as Mealy>::Error>
        + Send
        + Sync,
>;

/// A single transition rule out of some state.
pub struct Rule<M: Mealy> {
    /// Tokens this rule applies to.
    pub label: Label<M::Token>,
    /// State the machine moves to when the rule fires.
    pub target: M::State,
    /// Optional action run after the move.
    pub action: Option<TransitionAction<M>>,
}

impl<M: Mealy> Rule<M> {
    /// Rule without an action.
    pub fn new(label: Label<M::Token>, target: M::State) -> Self {
        Self {
            label,
            target,
            action: None,
        }
    }

    /// Attach an action to the rule.
    pub fn with_action(mut self, action: TransitionAction<M>) -> Self {
        self.action = Some(action);
        self
    }

    /// Whether this rule applies to the token (pure).
    pub fn matches(&self, token: &M::Token) -> bool {
        self.label.matches(token)
    }
}

impl<M: Mealy> Clone for Rule<M> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            target: self.target.clone(),
            action: self.action.clone(),
        }
    }
}

impl<M: Mealy> fmt::Debug for Rule<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("label", &self.label)
            .field("target", &self.target)
            .field("action", &self.action.is_some())
            .finish()
    }
}

/// Mapping from state to its rules, in declaration order.
///
/// Read-only once the machine is built.
pub struct TransitionTable<M: Mealy> {
    rules: HashMap<M::State, Vec<Rule<M>>>,
}

impl<M: Mealy> TransitionTable<M> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Append a rule to the end of the state's rule list.
    pub fn insert(&mut self, from: M::State, rule: Rule<M>) {
        self.rules.entry(from).or_default().push(rule);
    }

    /// Find the first rule of `state` whose label matches `token`.
    ///
    /// Returns `None` when the state has no rules or none of them match.
    pub fn lookup(&self, state: &M::State, token: &M::Token) -> Option<&Rule<M>> {
        self.rules
            .get(state)?
            .iter()
            .find(|rule| rule.matches(token))
    }

    /// Rules declared for a state, in declaration order.
    pub fn rules(&self, state: &M::State) -> &[Rule<M>] {
        self.rules.get(state).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterate over every state that has outgoing rules.
    pub fn iter(&self) -> impl Iterator<Item = (&M::State, &[Rule<M>])> {
        self.rules
            .iter()
            .map(|(state, rules)| (state, rules.as_slice()))
    }

    /// Number of states with outgoing rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no state has outgoing rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<M: Mealy> Default for TransitionTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Mealy> Clone for TransitionTable<M> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<M: Mealy> fmt::Debug for TransitionTable<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.rules.iter()).finish()
    }
}
