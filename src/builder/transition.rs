//! Builder for declaring transition rules.

use crate::builder::error::BuildError;
use crate::core::{Label, Mealy};
use crate::engine::{EmitScope, Rule, TransitionAction};
use std::sync::Arc;

/// Builder for one transition declaration.
///
/// A declaration may name several source states; it expands to one rule per
/// source state, all sharing the same label and action. The label defaults
/// to [`Label::Any`].
///
/// Self-loops are declared with [`read`](TransitionBuilder::read). Each
/// state passed to `read` loops back onto itself, independently of any
/// `from`/`to` pair declared on the same builder.
pub struct TransitionBuilder<M: Mealy> {
    from: Vec<M::State>,
    loops: Vec<M::State>,
    to: Option<M::State>,
    label: Label<M::Token>,
    action: Option<TransitionAction<M>>,
}

impl<M: Mealy> TransitionBuilder<M> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: Vec::new(),
            loops: Vec::new(),
            to: None,
            label: Label::Any,
            action: None,
        }
    }

    /// Add `state` as a source that loops back onto itself.
    pub fn read(self, state: M::State) -> Self {
        self.read_states([state])
    }

    /// Add each of `states` as a source that loops back onto itself.
    pub fn read_states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = M::State>,
    {
        self.loops.extend(states);
        self
    }

    /// Add a source state (required, repeatable).
    pub fn from(mut self, state: M::State) -> Self {
        self.from.push(state);
        self
    }

    /// Add several source states.
    pub fn from_states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = M::State>,
    {
        self.from.extend(states);
        self
    }

    /// Set the target of the `from` states (required when any are given).
    pub fn to(mut self, state: M::State) -> Self {
        self.to = Some(state);
        self
    }

    /// Only fire on tokens matching `label`.
    pub fn on(mut self, label: impl Into<Label<M::Token>>) -> Self {
        self.label = label.into();
        self
    }

    /// Run `action` when the rule fires (optional).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut EmitScope<'_, M>, &M::Token, &M::State, &M::State) -> Result<(), M::Error>
            + Send
            + Sync
            + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Build one rule per source state.
    ///
    /// Rules for the `from` states come first, then the self-loops of the
    /// `read` states.
    pub fn build(self) -> Result<Vec<(M::State, Rule<M>)>, BuildError> {
        if self.from.is_empty() && (self.loops.is_empty() || self.to.is_some()) {
            return Err(BuildError::MissingFromState);
        }

        let mut rules = Vec::with_capacity(self.from.len() + self.loops.len());

        if !self.from.is_empty() {
            let target = self.to.ok_or(BuildError::MissingToState)?;
            for from in self.from {
                let rule = Rule {
                    label: self.label.clone(),
                    target: target.clone(),
                    action: self.action.clone(),
                };
                rules.push((from, rule));
            }
        }

        for state in self.loops {
            let rule = Rule {
                label: self.label.clone(),
                target: state.clone(),
                action: self.action.clone(),
            };
            rules.push((state, rule));
        }

        Ok(rules)
    }
}

impl<M: Mealy> Default for TransitionBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}
