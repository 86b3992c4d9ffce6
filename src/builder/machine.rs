//! Builder for constructing state machines.

use crate::builder::error::{BuildError, DuplicateLabel};
use crate::builder::transition::TransitionBuilder;
use crate::core::Mealy;
use crate::engine::{
    EmitScope, FinishAction, Rule, StartAction, StateMachine, TransitionTable,
};
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing state machines with a fluent API.
///
/// Rules keep their declaration order per source state, across all calls to
/// [`transition`](Self::transition), [`add_transition`](Self::add_transition)
/// and [`add_rule`](Self::add_rule).
pub struct StateMachineBuilder<M: Mealy> {
    initial: Option<M::State>,
    on_start: Option<StartAction<M>>,
    on_finish: Option<FinishAction<M>>,
    rules: Vec<(M::State, Rule<M>)>,
    reject_duplicates: bool,
}

impl<M: Mealy> StateMachineBuilder<M> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            on_start: None,
            on_finish: None,
            rules: Vec::new(),
            reject_duplicates: false,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: M::State) -> Self {
        self.initial = Some(state);
        self
    }

    /// Run `action` when the machine starts, before any input is read.
    pub fn on_start<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut EmitScope<'_, M>) -> Result<(), M::Error> + Send + Sync + 'static,
    {
        self.on_start = Some(Arc::new(action));
        self
    }

    /// Run `action` once all input has been read. Its return value is what
    /// [`StateMachine::execute`] returns.
    pub fn on_finish<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut EmitScope<'_, M>) -> Result<M::Finish, M::Error> + Send + Sync + 'static,
    {
        self.on_finish = Some(Arc::new(action));
        self
    }

    /// Declare a transition.
    ///
    /// `declare` receives an empty [`TransitionBuilder`] and fills it in.
    /// Returns an error if the declaration fails validation.
    pub fn transition<F>(self, declare: F) -> Result<Self, BuildError>
    where
        F: FnOnce(TransitionBuilder<M>) -> TransitionBuilder<M>,
    {
        self.add_transition(declare(TransitionBuilder::new()))
    }

    /// Add a transition from a pre-filled builder.
    pub fn add_transition(mut self, builder: TransitionBuilder<M>) -> Result<Self, BuildError> {
        let rules = builder.build()?;
        self.rules.extend(rules);
        Ok(self)
    }

    /// Add a pre-built rule.
    pub fn add_rule(mut self, from: M::State, rule: Rule<M>) -> Self {
        self.rules.push((from, rule));
        self
    }

    /// Reject machines that declare the same label twice for one state.
    ///
    /// Off by default: the first matching rule wins and later duplicates are
    /// unreachable.
    pub fn reject_duplicate_labels(mut self) -> Self {
        self.reject_duplicates = true;
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<StateMachine<M>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut table = TransitionTable::new();
        for (from, rule) in self.rules {
            table.insert(from, rule);
        }

        if self.reject_duplicates {
            if let Validation::Failure(duplicates) = check_duplicate_labels(&table) {
                return Err(BuildError::DuplicateLabels(
                    duplicates.iter().cloned().collect(),
                ));
            }
        }

        tracing::debug!(
            initial = ?initial,
            states = table.len(),
            "mealy machine built"
        );

        Ok(StateMachine::new(
            initial,
            self.on_start,
            self.on_finish,
            table,
        ))
    }
}

impl<M: Mealy> Default for StateMachineBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Check every state for repeated labels, accumulating all of them.
fn check_duplicate_labels<M: Mealy>(
    table: &TransitionTable<M>,
) -> Validation<(), NonEmptyVec<DuplicateLabel>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<DuplicateLabel>>> = Vec::new();

    for (state, rules) in table.iter() {
        for (index, rule) in rules.iter().enumerate() {
            let repeated = rules[..index]
                .iter()
                .any(|earlier| earlier.label == rule.label);

            let check = if repeated {
                Validation::fail(DuplicateLabel {
                    state: format!("{state:?}"),
                    label: format!("{:?}", rule.label),
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
