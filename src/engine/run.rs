//! The state walk shared by both run modes, and the lazy streaming run.

use crate::core::{Mealy, StateHistory, StateTransition};
use crate::engine::emit::EmitScope;
use crate::engine::error::MealyError;
use crate::engine::machine::StateMachine;
use std::iter::FusedIterator;
use std::vec;

/// Per-run state: the current state and, optionally, the visited path.
///
/// Each run owns its executor. The definition it walks is only read.
pub(crate) struct Executor<'d, M: Mealy> {
    machine: &'d StateMachine<M>,
    state: M::State,
    position: usize,
    history: Option<StateHistory<M::State>>,
}

impl<'d, M: Mealy> Executor<'d, M> {
    pub(crate) fn new(machine: &'d StateMachine<M>) -> Self {
        Self {
            machine,
            state: machine.initial_state().clone(),
            position: 0,
            history: None,
        }
    }

    pub(crate) fn record_history(&mut self) {
        self.history.get_or_insert_with(StateHistory::new);
    }

    pub(crate) fn state(&self) -> &M::State {
        &self.state
    }

    pub(crate) fn history(&self) -> Option<&StateHistory<M::State>> {
        self.history.as_ref()
    }

    pub(crate) fn into_history(self) -> Option<StateHistory<M::State>> {
        self.history
    }

    /// Enter the initial state and run the start action.
    pub(crate) fn start(
        &mut self,
        context: &mut M,
        emits: Option<&mut Vec<M::Output>>,
    ) -> Result<(), M::Error> {
        self.state = self.machine.initial_state().clone();
        tracing::debug!(state = ?self.state, "mealy run started");

        match self.machine.start_action() {
            Some(action) => action(&mut EmitScope::new(context, emits)),
            None => Ok(()),
        }
    }

    /// Consume one token: look up the rule, move to its target, run its
    /// action.
    pub(crate) fn advance(
        &mut self,
        context: &mut M,
        token: M::Token,
        emits: Option<&mut Vec<M::Output>>,
    ) -> Result<(), M::Error> {
        let machine = self.machine;
        let Some(rule) = machine.table().lookup(&self.state, &token) else {
            tracing::debug!(
                state = ?self.state,
                token = ?token,
                position = self.position,
                "no transition matches token"
            );
            return Err(MealyError::UnexpectedToken {
                state: self.state.clone(),
                token,
            }
            .into());
        };

        let from = std::mem::replace(&mut self.state, rule.target.clone());
        tracing::trace!(from = ?from, to = ?self.state, token = ?token, "transition");

        if let Some(history) = self.history.as_mut() {
            history.push(StateTransition {
                from: from.clone(),
                to: self.state.clone(),
                position: self.position,
            });
        }
        self.position += 1;

        match &rule.action {
            Some(action) => action(
                &mut EmitScope::new(context, emits),
                &token,
                &from,
                &self.state,
            ),
            None => Ok(()),
        }
    }

    /// Run the finish action.
    pub(crate) fn finish(
        &mut self,
        context: &mut M,
        emits: Option<&mut Vec<M::Output>>,
    ) -> Result<Option<M::Finish>, M::Error> {
        tracing::debug!(
            state = ?self.state,
            consumed = self.position,
            "mealy run finished"
        );

        self.machine
            .finish_action()
            .map(|action| action(&mut EmitScope::new(context, emits)))
            .transpose()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Start,
    Input,
    Done,
}

/// Lazy stream of emitted tokens, returned by [`StateMachine::run`].
///
/// Nothing runs until the first call to `next`. Each call drives the machine
/// just far enough to produce the next emitted token: start-action emits
/// come first, then the emits of each input token in order, then the finish
/// emits. Dropping the run early leaves the rest of the input unread.
///
/// An error is yielded once, after which the run is exhausted and the finish
/// action is never called.
pub struct Run<'d, 'c, M: Mealy, I> {
    executor: Executor<'d, M>,
    context: &'c mut M,
    input: I,
    pending: vec::IntoIter<M::Output>,
    phase: Phase,
}

impl<'d, 'c, M, I> Run<'d, 'c, M, I>
where
    M: Mealy,
    I: Iterator<Item = M::Token>,
{
    pub(crate) fn new(machine: &'d StateMachine<M>, context: &'c mut M, input: I) -> Self {
        Self {
            executor: Executor::new(machine),
            context,
            input,
            pending: Vec::new().into_iter(),
            phase: Phase::Start,
        }
    }

    /// Record every transition this run takes.
    pub fn recording(mut self) -> Self {
        self.executor.record_history();
        self
    }

    /// Current state of the machine.
    pub fn state(&self) -> &M::State {
        self.executor.state()
    }

    /// Transitions taken so far, if recording was enabled.
    pub fn history(&self) -> Option<&StateHistory<M::State>> {
        self.executor.history()
    }

    /// Whether the machine has finished or failed.
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Drive the machine until it produces emits, finishes, or fails.
    fn step(&mut self) -> Option<Result<Vec<M::Output>, M::Error>> {
        let mut emits = Vec::new();

        let outcome = match self.phase {
            Phase::Start => {
                self.phase = Phase::Input;
                self.executor.start(self.context, Some(&mut emits))
            }
            Phase::Input => match self.input.next() {
                Some(token) => self.executor.advance(self.context, token, Some(&mut emits)),
                None => {
                    self.phase = Phase::Done;
                    self.executor
                        .finish(self.context, Some(&mut emits))
                        .map(|_| ())
                }
            },
            Phase::Done => return None,
        };

        Some(outcome.map(|()| emits))
    }
}

impl<'d, 'c, M, I> Iterator for Run<'d, 'c, M, I>
where
    M: Mealy,
    I: Iterator<Item = M::Token>,
{
    type Item = Result<M::Output, M::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(output) = self.pending.next() {
                return Some(Ok(output));
            }

            match self.step()? {
                Ok(emits) => self.pending = emits.into_iter(),
                Err(error) => {
                    self.phase = Phase::Done;
                    return Some(Err(error));
                }
            }
        }
    }
}

impl<M, I> FusedIterator for Run<'_, '_, M, I>
where
    M: Mealy,
    I: Iterator<Item = M::Token>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StateMachineBuilder;

    #[derive(Default)]
    struct Echo {
        started: usize,
        finished: usize,
    }

    impl Mealy for Echo {
        type State = &'static str;
        type Token = char;
        type Output = char;
        type Finish = usize;
        type Error = MealyError<&'static str, char>;
    }

    fn echo_machine() -> StateMachine<Echo> {
        StateMachineBuilder::<Echo>::new()
            .initial("start")
            .on_start(|scope| {
                scope.started += 1;
                scope.emit('<');
                Ok(())
            })
            .transition(|t| {
                t.read("start").on('x').action(|scope, token, _, _| {
                    scope.emit(*token);
                    Ok(())
                })
            })
            .unwrap()
            .transition(|t| t.from("start").to("end").on(';'))
            .unwrap()
            .on_finish(|scope| {
                scope.finished += 1;
                scope.emit('>');
                Ok(scope.finished)
            })
            .build()
            .unwrap()
    }

    #[test]
    fn run_is_lazy_until_polled() {
        let machine = echo_machine();
        let mut context = Echo::default();

        let run = machine.run(&mut context, "xx;".chars());
        assert_eq!(run.state(), &"start");
        drop(run);

        assert_eq!(context.started, 0);
    }

    #[test]
    fn start_emits_come_before_input_is_read() {
        let machine = echo_machine();
        let mut context = Echo::default();
        let mut consumed = 0;

        let input = "xx;".chars().inspect(|_| consumed += 1);
        let mut run = machine.run(&mut context, input);

        assert_eq!(run.next(), Some(Ok('<')));
        drop(run);
        assert_eq!(consumed, 0);
    }

    #[test]
    fn stopping_early_leaves_input_unread() {
        let machine = echo_machine();
        let mut context = Echo::default();
        let mut consumed = 0;

        let input = "xxxxx;".chars().inspect(|_| consumed += 1);
        let first_two: Vec<_> = machine.run(&mut context, input).take(2).collect();

        assert_eq!(first_two, vec![Ok('<'), Ok('x')]);
        assert_eq!(consumed, 1);
        assert_eq!(context.finished, 0);
    }

    #[test]
    fn error_ends_the_run_without_finishing() {
        let machine = echo_machine();
        let mut context = Echo::default();

        let mut run = machine.run(&mut context, "xq".chars());
        assert_eq!(run.next(), Some(Ok('<')));
        assert_eq!(run.next(), Some(Ok('x')));
        assert_eq!(
            run.next(),
            Some(Err(MealyError::UnexpectedToken {
                state: "start",
                token: 'q'
            }))
        );
        assert!(run.is_done());
        assert_eq!(run.next(), None);
        assert_eq!(run.next(), None);
        drop(run);

        assert_eq!(context.finished, 0);
    }

    #[test]
    fn recording_run_tracks_visited_states() {
        let machine = echo_machine();
        let mut context = Echo::default();

        let mut run = machine.run(&mut context, "xx;".chars()).recording();
        let emitted: Vec<char> = run.by_ref().collect::<Result<_, _>>().unwrap();

        assert_eq!(emitted, vec!['<', 'x', 'x', '>']);
        assert_eq!(run.state(), &"end");

        let history = run.history().unwrap();
        assert_eq!(history.get_path(), vec![&"start", &"start", &"start", &"end"]);
        assert_eq!(history.transitions()[2].position, 2);
    }

    #[test]
    fn executor_start_resets_to_initial_state() {
        let machine = echo_machine();
        let mut context = Echo::default();
        let mut executor = Executor::new(&machine);

        executor.advance(&mut context, ';', None).unwrap();
        assert_eq!(executor.state(), &"end");

        executor.start(&mut context, None).unwrap();
        assert_eq!(executor.state(), &"start");
        assert!(executor.into_history().is_none());
    }
}
