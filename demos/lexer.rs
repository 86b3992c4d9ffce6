//! Lexer
//!
//! Splits source text into identifiers, numbers and punctuation.
//!
//! Key concepts:
//! - Pattern labels (ranges, predicates, token sets)
//! - One declaration covering several source states
//! - Flushing buffered text from the finish action
//! - Stopping early on endless input
//!
//! Run with: cargo run --example lexer

use mealy::builder::StateMachineBuilder;
use mealy::core::{Label, Mealy};
use mealy::engine::{MealyError, StateMachine};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum LexState {
    Idle,
    Word,
    Number,
}

#[derive(Debug)]
enum Lexeme {
    Word(String),
    Number(String),
    Punct(char),
}

#[derive(Default)]
struct Lexer {
    buffer: String,
    kind: Option<LexState>,
}

impl Lexer {
    fn flush(&mut self) -> Option<Lexeme> {
        let text = std::mem::take(&mut self.buffer);
        match self.kind.take() {
            Some(LexState::Word) => Some(Lexeme::Word(text)),
            Some(LexState::Number) => Some(Lexeme::Number(text)),
            _ => None,
        }
    }
}

impl Mealy for Lexer {
    type State = LexState;
    type Token = char;
    type Output = Lexeme;
    type Finish = ();
    type Error = MealyError<LexState, char>;
}

fn lexer() -> StateMachine<Lexer> {
    let punctuation = Label::one_of(['(', ')', ',', ';', '=', '+']);
    let whitespace = Label::when(|c: &char| c.is_whitespace());

    StateMachineBuilder::<Lexer>::new()
        .initial(LexState::Idle)
        .transition(|t| {
            t.from(LexState::Idle)
                .to(LexState::Word)
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
        .transition(|t| t.read(LexState::Idle).on(whitespace.clone()))
        .unwrap()
        .transition(|t| {
            t.read(LexState::Idle)
                .on(punctuation.clone())
                .action(|scope, c, _, _| {
                    scope.emit(Lexeme::Punct(*c));
                    Ok(())
                })
        })
        .unwrap()
        .transition(|t| {
            t.read(LexState::Word)
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
            t.from_states([LexState::Word, LexState::Number])
                .to(LexState::Idle)
                .on(whitespace)
                .action(|scope, _, _, _| {
                    if let Some(lexeme) = scope.flush() {
                        scope.emit(lexeme);
                    }
                    Ok(())
                })
        })
        .unwrap()
        .transition(|t| {
            t.from_states([LexState::Word, LexState::Number])
                .to(LexState::Idle)
                .on(punctuation)
                .action(|scope, c, _, _| {
                    if let Some(lexeme) = scope.flush() {
                        scope.emit(lexeme);
                    }
                    scope.emit(Lexeme::Punct(*c));
                    Ok(())
                })
        })
        .unwrap()
        .on_finish(|scope| {
            if let Some(lexeme) = scope.flush() {
                scope.emit(lexeme);
            }
            Ok(())
        })
        .build()
        .unwrap()
}

fn main() {
    println!("=== Lexer Example ===\n");

    let machine = lexer();
    let source = "total = add(12, x1);";

    println!("Source: {source}");
    let mut context = Lexer::default();
    for lexeme in machine.run(&mut context, source.chars()) {
        match lexeme {
            Ok(lexeme) => println!("  {lexeme:?}"),
            Err(error) => println!("  error: {error}"),
        }
    }

    // Only the first three lexemes are produced; the rest is never read
    let mut context = Lexer::default();
    let first: Vec<_> = machine
        .run(&mut context, "ab 12 ".chars().cycle())
        .take(3)
        .collect();
    println!("\nFirst lexemes of endless input: {first:?}");

    let mut context = Lexer::default();
    let failed: Vec<_> = machine.run(&mut context, "x $".chars()).collect();
    println!("With an unknown character: {failed:?}");

    println!("\n=== Example Complete ===");
}
