//! A small tokenizer built on the engine.

use mealy::builder::StateMachineBuilder;
use mealy::core::{Label, Mealy};
use mealy::engine::{MealyError, StateMachine};
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum LexState {
    Idle,
    Ident,
    Number,
}

#[derive(Clone, PartialEq, Debug)]
enum Lexeme {
    Ident(String),
    Number(u64),
    Punct(char),
}

#[derive(Debug, Error, PartialEq)]
enum LexError {
    #[error(transparent)]
    Unexpected(#[from] MealyError<LexState, char>),

    #[error("number literal out of range: {0}")]
    BadNumber(String),
}

#[derive(Default)]
struct Lexer {
    buffer: String,
    kind: Option<LexState>,
}

impl Lexer {
    fn flush(&mut self) -> Result<Option<Lexeme>, LexError> {
        let text = std::mem::take(&mut self.buffer);
        match self.kind.take() {
            Some(LexState::Ident) => Ok(Some(Lexeme::Ident(text))),
            Some(LexState::Number) => text
                .parse()
                .map(|value| Some(Lexeme::Number(value)))
                .map_err(|_| LexError::BadNumber(text)),
            _ => Ok(None),
        }
    }
}

impl Mealy for Lexer {
    type State = LexState;
    type Token = char;
    type Output = Lexeme;
    type Finish = usize;
    type Error = LexError;
}

fn punctuation() -> Label<char> {
    Label::one_of(['(', ')', ',', ';'])
}

fn whitespace() -> Label<char> {
    Label::when(|c: &char| c.is_whitespace())
}

fn lexer() -> StateMachine<Lexer> {
    StateMachineBuilder::<Lexer>::new()
        .initial(LexState::Idle)
        .transition(|t| {
            t.from(LexState::Idle)
                .to(LexState::Ident)
                .on(Label::when(|c: &char| c.is_ascii_alphabetic()))
                .action(|scope, c, _, to| {
                    scope.kind = Some(*to);
                    scope.buffer.push(*c);
                    Ok(())
                })
        })
        .unwrap()
        .transition(|t| {
            t.from(LexState::Idle)
                .to(LexState::Number)
                .on(Label::range('0'..='9'))
                .action(|scope, c, _, to| {
                    scope.kind = Some(*to);
                    scope.buffer.push(*c);
                    Ok(())
                })
        })
        .unwrap()
        .transition(|t| t.read(LexState::Idle).on(whitespace()))
        .unwrap()
        .transition(|t| {
            t.read(LexState::Idle)
                .on(punctuation())
                .action(|scope, c, _, _| {
                    scope.emit(Lexeme::Punct(*c));
                    Ok(())
                })
        })
        .unwrap()
        .transition(|t| {
            t.read(LexState::Ident)
                .on(Label::when(|c: &char| c.is_ascii_alphanumeric()))
                .action(|scope, c, _, _| {
                    scope.buffer.push(*c);
                    Ok(())
                })
        })
        .unwrap()
        .transition(|t| {
            t.read(LexState::Number)
                .on(Label::range('0'..='9'))
                .action(|scope, c, _, _| {
                    scope.buffer.push(*c);
                    Ok(())
                })
        })
        .unwrap()
        .transition(|t| {
            t.from_states([LexState::Ident, LexState::Number])
                .to(LexState::Idle)
                .on(whitespace())
                .action(|scope, _, _, _| {
                    if let Some(lexeme) = scope.flush()? {
                        scope.emit(lexeme);
                    }
                    Ok(())
                })
        })
        .unwrap()
        .transition(|t| {
            t.from_states([LexState::Ident, LexState::Number])
                .to(LexState::Idle)
                .on(punctuation())
                .action(|scope, c, _, _| {
                    if let Some(lexeme) = scope.flush()? {
                        scope.emit(lexeme);
                    }
                    scope.emit(Lexeme::Punct(*c));
                    Ok(())
                })
        })
        .unwrap()
        .on_finish(|scope| {
            let pending = scope.flush()?;
            let flushed = usize::from(pending.is_some());
            if let Some(lexeme) = pending {
                scope.emit(lexeme);
            }
            Ok(flushed)
        })
        .reject_duplicate_labels()
        .build()
        .unwrap()
}

fn tokenize(input: &str) -> Result<Vec<Lexeme>, LexError> {
    let machine = lexer();
    let mut context = Lexer::default();
    machine.run(&mut context, input.chars()).collect()
}

#[test]
fn tokenizes_call_expression() {
    assert_eq!(
        tokenize("foo(12, bar9);"),
        Ok(vec![
            Lexeme::Ident("foo".to_string()),
            Lexeme::Punct('('),
            Lexeme::Number(12),
            Lexeme::Punct(','),
            Lexeme::Ident("bar9".to_string()),
            Lexeme::Punct(')'),
            Lexeme::Punct(';'),
        ])
    );
}

#[test]
fn finish_flushes_trailing_lexeme() {
    assert_eq!(
        tokenize("let x"),
        Ok(vec![
            Lexeme::Ident("let".to_string()),
            Lexeme::Ident("x".to_string()),
        ])
    );
}

#[test]
fn empty_and_blank_input_produce_nothing() {
    assert_eq!(tokenize(""), Ok(vec![]));
    assert_eq!(tokenize(" \t\n "), Ok(vec![]));
}

#[test]
fn unknown_character_is_reported_with_state() {
    assert_eq!(
        tokenize("ab$"),
        Err(LexError::Unexpected(MealyError::UnexpectedToken {
            state: LexState::Ident,
            token: '$',
        }))
    );
}

#[test]
fn action_error_aborts_tokenizing() {
    assert_eq!(
        tokenize("99999999999999999999999 x"),
        Err(LexError::BadNumber("99999999999999999999999".to_string()))
    );
}

#[test]
fn first_lexeme_of_endless_input() {
    let machine = lexer();
    let mut context = Lexer::default();

    let first = machine
        .run(&mut context, "abc ".chars().cycle())
        .next();

    assert_eq!(first, Some(Ok(Lexeme::Ident("abc".to_string()))));
}

#[test]
fn execute_reports_whether_finish_flushed() {
    let machine = lexer();

    let mut context = Lexer::default();
    assert_eq!(machine.execute(&mut context, "a b".chars()), Ok(Some(1)));

    let mut context = Lexer::default();
    assert_eq!(machine.execute(&mut context, "a b;".chars()), Ok(Some(0)));
}
