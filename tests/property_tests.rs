//! Property-based tests for the dispenser.
//!
//! These tests use proptest to verify the machine's invariants hold across
//! many randomly generated event sequences and inventories.

use gumball::core::{Event, Notice};
use gumball::machine::GumballMachine;
use gumball::odds::{FixedOdds, OddsSource, SeededOdds, SequenceOdds};
use gumball::sink::MemorySink;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_event()(variant in 0..3u8) -> Event {
        match variant {
            0 => Event::InsertCoin,
            1 => Event::EjectCoin,
            _ => Event::TurnCrank,
        }
    }
}

fn apply(machine: &mut GumballMachine, event: Event) {
    match event {
        Event::InsertCoin => machine.insert_coin(),
        Event::EjectCoin => machine.eject_coin(),
        Event::TurnCrank => machine.turn_crank(),
    }
}

fn build_machine(inventory: u32, odds: impl OddsSource + 'static) -> (GumballMachine, MemorySink) {
    let sink = MemorySink::new();
    let machine = GumballMachine::builder()
        .inventory(inventory)
        .odds(odds)
        .sink(sink.clone())
        .build()
        .unwrap();
    (machine, sink)
}

proptest! {
    #[test]
    fn inventory_never_increases(
        inventory in 0..20u32,
        seed in any::<u64>(),
        events in prop::collection::vec(arbitrary_event(), 0..40),
    ) {
        let (mut machine, _sink) = build_machine(inventory, SeededOdds::new(seed));
        let mut previous = machine.inventory_count();
        prop_assert_eq!(previous, inventory);

        for event in events {
            apply(&mut machine, event);
            let current = machine.inventory_count();
            prop_assert!(current <= previous);
            // A single event releases at most 2 units.
            prop_assert!(previous - current <= 2);
            previous = current;
        }
    }

    #[test]
    fn sold_out_iff_inventory_is_zero(
        inventory in 0..20u32,
        seed in any::<u64>(),
        events in prop::collection::vec(arbitrary_event(), 0..40),
    ) {
        let (mut machine, _sink) = build_machine(inventory, SeededOdds::new(seed));

        for event in events {
            apply(&mut machine, event);
            let sold_out = machine.state_name() == "SoldOut";
            prop_assert_eq!(sold_out, machine.inventory_count() == 0);
        }
    }

    #[test]
    fn machine_rests_between_events(
        inventory in 0..20u32,
        seed in any::<u64>(),
        events in prop::collection::vec(arbitrary_event(), 0..40),
    ) {
        let (mut machine, _sink) = build_machine(inventory, SeededOdds::new(seed));

        for event in events {
            apply(&mut machine, event);
            prop_assert!(matches!(
                machine.state_name(),
                "NoCoin" | "HasCoin" | "SoldOut"
            ));
        }
    }

    #[test]
    fn armed_crank_releases_one_or_two(
        inventory in 2..50u32,
        winning in any::<bool>(),
    ) {
        let (mut machine, _sink) =
            build_machine(inventory, SequenceOdds::new(vec![winning]));

        machine.insert_coin();
        machine.turn_crank();

        let released = inventory - machine.inventory_count();
        prop_assert_eq!(released, if winning { 2 } else { 1 });
    }

    #[test]
    fn losing_machine_has_no_bonus_branch(
        inventory in 0..20u32,
        events in prop::collection::vec(arbitrary_event(), 0..60),
    ) {
        // With odds fixed to non-winning, the machine must be
        // indistinguishable from one without the Winner path: no bonus
        // notice, and never more than one unit per event.
        let (mut machine, sink) = build_machine(inventory, FixedOdds::losing());

        for event in events {
            let before = machine.inventory_count();
            apply(&mut machine, event);
            prop_assert!(before - machine.inventory_count() <= 1);
        }
        prop_assert!(!sink.contains(Notice::BonusWinner));
    }

    #[test]
    fn eject_from_unarmed_states_is_a_no_op(inventory in 0..20u32) {
        let (mut machine, _sink) = build_machine(inventory, FixedOdds::losing());

        let state_before = machine.state_name();
        let count_before = machine.inventory_count();
        machine.eject_coin();

        prop_assert_eq!(machine.state_name(), state_before);
        prop_assert_eq!(machine.inventory_count(), count_before);
    }

    #[test]
    fn seeded_runs_replay_identically(
        inventory in 0..20u32,
        seed in any::<u64>(),
        events in prop::collection::vec(arbitrary_event(), 0..40),
    ) {
        let (mut first, first_sink) = build_machine(inventory, SeededOdds::new(seed));
        let (mut second, second_sink) = build_machine(inventory, SeededOdds::new(seed));

        for event in &events {
            apply(&mut first, *event);
            apply(&mut second, *event);
        }

        prop_assert_eq!(first.inventory_count(), second.inventory_count());
        prop_assert_eq!(first.state_name(), second.state_name());
        prop_assert_eq!(first_sink.notices(), second_sink.notices());
    }

    #[test]
    fn history_accounts_for_every_released_unit(
        inventory in 0..20u32,
        seed in any::<u64>(),
        events in prop::collection::vec(arbitrary_event(), 0..40),
    ) {
        let (mut machine, _sink) = build_machine(inventory, SeededOdds::new(seed));

        let event_count = events.len();
        for event in events {
            apply(&mut machine, event);
        }

        prop_assert_eq!(machine.history().records().len(), event_count);
        prop_assert_eq!(
            machine.history().total_released(),
            inventory - machine.inventory_count()
        );
    }

    #[test]
    fn history_roundtrips_through_serde(
        inventory in 0..10u32,
        seed in any::<u64>(),
        events in prop::collection::vec(arbitrary_event(), 0..20),
    ) {
        let (mut machine, _sink) = build_machine(inventory, SeededOdds::new(seed));
        for event in events {
            apply(&mut machine, event);
        }

        let json = serde_json::to_string(machine.history()).unwrap();
        let back: gumball::core::DispatchHistory = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(machine.history(), &back);
    }
}
