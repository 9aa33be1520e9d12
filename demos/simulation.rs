//! Gumball Machine Simulation
//!
//! This example drives a machine from full to sold out with console
//! output, the way the original demo did.
//!
//! Key concepts:
//! - Events are legal in every state; "wrong" ones are polite no-ops
//! - A successful crank dispenses within the same call
//! - Roughly one crank in ten dispenses a bonus unit
//!
//! Run with: cargo run --example simulation

use gumball::machine::GumballMachine;
use gumball::sink::StdoutSink;

fn main() {
    println!("=== Gumball Machine Simulation ===\n");

    let mut machine = GumballMachine::builder()
        .inventory(10)
        .sink(StdoutSink)
        .build()
        .expect("default odds are always valid");

    println!("{machine}\n");

    // A few deliberately out-of-order events first.
    machine.turn_crank();
    machine.eject_coin();
    println!();

    while machine.state_name() != "SoldOut" {
        machine.insert_coin();
        machine.turn_crank();
        println!();
    }

    println!("{machine}\n");
    println!(
        "Dispensed {} gumballs across {} events",
        machine.history().total_released(),
        machine.history().records().len()
    );

    println!("\n=== Simulation Complete ===");
}
