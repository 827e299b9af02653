//! Scripted Session
//!
//! This example drives the engine with a scripted player on the virtual
//! clock and prints every presentation call to the console.
//!
//! Key concepts:
//! - Implementing `Presentation` for a custom output
//! - Driving time with `VirtualClock`
//! - Lenient mistakes replay, strict mistakes reset
//!
//! Run with: cargo run --example autoplay

use recall::environment::{MemoryStore, Presentation, VirtualClock};
use recall::{GameBuilder, GameMode, Signal};
use std::time::Duration;

/// Prints what a real UI would show.
struct ConsolePresentation;

impl Presentation for ConsolePresentation {
    fn activate(&mut self, signal: Signal) {
        println!("  [pad]    {signal:<6} on  ({:.2} Hz)", signal.tone_hz());
    }

    fn deactivate(&mut self, signal: Signal) {
        println!("  [pad]    {signal:<6} off");
    }

    fn set_status(&mut self, message: &str, accent: bool) {
        let marker = if accent { "*" } else { " " };
        println!("  [status]{marker}{message}");
    }

    fn set_round_display(&mut self, round: usize) {
        println!("  [round]  {round}");
    }

    fn set_best_display(&mut self, best: usize) {
        println!("  [best]   {best}");
    }

    fn vibrate(&mut self, duration: Duration) {
        println!("  [buzz]   {} ms", duration.as_millis());
    }
}

fn wrong(signal: Signal) -> Signal {
    Signal::ALL[(signal.index() + 1) % Signal::COUNT]
}

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Scripted Session ===\n");

    let mut game = GameBuilder::new()
        .presentation(ConsolePresentation)
        .store(MemoryStore::with_value("simon_best", "2"))
        .clock(VirtualClock::new())
        .seed(2024)
        .build()
        .expect("default configuration is valid");

    // true: repeat the pattern; false: slip on the first signal
    let script = [true, true, false, true, true];

    game.start();
    for play_correctly in script {
        if !game.advance_until_input() {
            break;
        }
        println!("\n-- t = {} ms, round {} --", game.now().as_millis(), game.round());

        let expected = game.sequence().to_vec();
        if play_correctly {
            for signal in expected {
                game.press(signal);
            }
        } else {
            game.press(wrong(expected[0]));
        }
    }

    println!("\n-- strict mode --");
    game.set_strict(true);
    if game.advance_until_input() {
        let expected = game.sequence()[0];
        game.press(wrong(expected));
    }
    game.advance(Duration::from_millis(400));

    assert_eq!(game.mode(), GameMode::Idle);
    println!("\nFinal best score: {}", game.best());
    println!("Mode changes recorded: {}", game.history().len());
    println!("\n=== Example Complete ===");
}
