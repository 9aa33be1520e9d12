//! Deterministic Replay
//!
//! This example runs the same event script against two machines built from
//! the same seed and shows they end in the same place, with the notices
//! flowing through the tracing sink.
//!
//! Run with: cargo run --example deterministic

use gumball::machine::GumballMachine;
use gumball::odds::SeededOdds;

fn run(seed: u64) -> (u32, &'static str) {
    let mut machine = GumballMachine::builder()
        .inventory(8)
        .odds(SeededOdds::new(seed))
        .build()
        .expect("seeded odds are always valid");

    for _ in 0..6 {
        machine.insert_coin();
        machine.turn_crank();
    }

    (machine.inventory_count(), machine.state_name())
}

fn main() {
    tracing_subscriber::fmt().compact().init();

    println!("=== Deterministic Replay ===\n");

    let first = run(42);
    let second = run(42);

    println!("\nfirst run:  inventory {} state {}", first.0, first.1);
    println!("second run: inventory {} state {}", second.0, second.1);
    assert_eq!(first, second);

    println!("\nSame seed, same draws, same outcome.");
}
