//! Counter
//!
//! Counts the ones at the start of the input, stopping at the first zero.
//!
//! Key concepts:
//! - A self-loop that updates the context
//! - An absorbing state that reads the rest of the input
//! - The same machine driven in both run modes
//!
//! Run with: cargo run --example counter

use mealy::builder::StateMachineBuilder;
use mealy::core::Mealy;
use mealy::engine::MealyError;

#[derive(Default)]
struct Counter {
    ones: usize,
}

impl Mealy for Counter {
    type State = &'static str;
    type Token = u8;
    type Output = usize;
    type Finish = usize;
    type Error = MealyError<&'static str, u8>;
}

fn main() {
    println!("=== Counter Example ===\n");

    let machine = StateMachineBuilder::<Counter>::new()
        .initial("start")
        .on_start(|scope| {
            scope.ones = 0;
            Ok(())
        })
        .transition(|t| t.from("start").to("end").on(0))
        .unwrap()
        .transition(|t| {
            t.read("start").on(1).action(|scope, _, _, _| {
                scope.ones += 1;
                Ok(())
            })
        })
        .unwrap()
        // Everything after the first zero is read and ignored
        .transition(|t| t.read("end"))
        .unwrap()
        .on_finish(|scope| {
            let ones = scope.ones;
            scope.emit(ones);
            Ok(ones)
        })
        .build()
        .unwrap();

    let input = [1, 1, 1, 1, 0, 1, 0, 0];
    let mut counter = Counter::default();

    println!("Input: {input:?}");
    for output in machine.run(&mut counter, input) {
        println!("Emitted: {}", output.unwrap());
    }

    let result = machine.execute(&mut counter, [1, 1, 0]);
    println!("execute([1, 1, 0]) = {result:?}");

    match machine.execute(&mut counter, [1, 2]) {
        Ok(value) => println!("Unexpected success: {value:?}"),
        Err(error) => println!("execute([1, 2]) failed: {error}"),
    }

    println!("\n=== Example Complete ===");
}
