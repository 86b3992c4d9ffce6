//! Immutable machine definition and its two run modes.

use crate::builder::StateMachineBuilder;
use crate::core::{Mealy, StateHistory};
use crate::engine::run::{Executor, Run};
use crate::engine::table::{FinishAction, StartAction, TransitionTable};
use std::fmt;

/// A built Mealy machine: transition table plus start and finish
/// descriptors.
///
/// The definition is never mutated by a run. One definition can drive any
/// number of runs, each against its own context, from any number of threads.
pub struct StateMachine<M: Mealy> {
    initial: M::State,
    on_start: Option<StartAction<M>>,
    on_finish: Option<FinishAction<M>>,
    table: TransitionTable<M>,
}

impl<M: Mealy> StateMachine<M> {
    pub(crate) fn new(
        initial: M::State,
        on_start: Option<StartAction<M>>,
        on_finish: Option<FinishAction<M>>,
        table: TransitionTable<M>,
    ) -> Self {
        Self {
            initial,
            on_start,
            on_finish,
            table,
        }
    }

    /// Start building a machine.
    pub fn builder() -> StateMachineBuilder<M> {
        StateMachineBuilder::new()
    }

    /// State every run begins in.
    pub fn initial_state(&self) -> &M::State {
        &self.initial
    }

    /// Transition table the machine walks.
    pub fn table(&self) -> &TransitionTable<M> {
        &self.table
    }

    pub(crate) fn start_action(&self) -> Option<&StartAction<M>> {
        self.on_start.as_ref()
    }

    pub(crate) fn finish_action(&self) -> Option<&FinishAction<M>> {
        self.on_finish.as_ref()
    }

    /// Stream the tokens emitted while consuming `input`.
    ///
    /// The returned iterator is lazy and single-pass: see [`Run`].
    pub fn run<'d, 'c, I>(
        &'d self,
        context: &'c mut M,
        input: I,
    ) -> Run<'d, 'c, M, I::IntoIter>
    where
        I: IntoIterator<Item = M::Token>,
    {
        Run::new(self, context, input.into_iter())
    }

    /// Consume all of `input` and return what the finish action returns.
    ///
    /// Emits are discarded. Returns `Ok(None)` when the machine has no
    /// finish action.
    pub fn execute<I>(&self, context: &mut M, input: I) -> Result<Option<M::Finish>, M::Error>
    where
        I: IntoIterator<Item = M::Token>,
    {
        let mut executor = Executor::new(self);
        Self::drive(&mut executor, context, input)
    }

    /// Like [`execute`](Self::execute), also returning every transition
    /// taken.
    pub fn execute_with_history<I>(
        &self,
        context: &mut M,
        input: I,
    ) -> Result<(Option<M::Finish>, StateHistory<M::State>), M::Error>
    where
        I: IntoIterator<Item = M::Token>,
    {
        let mut executor = Executor::new(self);
        executor.record_history();

        let result = Self::drive(&mut executor, context, input)?;
        Ok((result, executor.into_history().unwrap_or_default()))
    }

    fn drive<I>(
        executor: &mut Executor<'_, M>,
        context: &mut M,
        input: I,
    ) -> Result<Option<M::Finish>, M::Error>
    where
        I: IntoIterator<Item = M::Token>,
    {
        executor.start(context, None)?;
        for token in input {
            executor.advance(context, token, None)?;
        }
        executor.finish(context, None)
    }
}

impl<M: Mealy> Clone for StateMachine<M> {
    fn clone(&self) -> Self {
        Self {
            initial: self.initial.clone(),
            on_start: self.on_start.clone(),
            on_finish: self.on_finish.clone(),
            table: self.table.clone(),
        }
    }
}

impl<M: Mealy> fmt::Debug for StateMachine<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("initial", &self.initial)
            .field("on_start", &self.on_start.is_some())
            .field("on_finish", &self.on_finish.is_some())
            .field("table", &self.table)
            .finish()
    }
}
