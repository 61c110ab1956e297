//! Study Day
//!
//! This example walks a small "study/sleep/eat" agent through its day
//! using rule-governed transitions.
//!
//! Key concepts:
//! - Declaring states and events with the `state_enum!` / `event_enum!` macros
//! - Building a machine with the fluent `MachineBuilder`
//! - Triggering events and inspecting the state set
//!
//! Run with: cargo run --example study_day

use retrace::{event_enum, state_enum, MachineBuilder};

state_enum! {
    enum Mood {
        Normal,
        Busy,
        Hungry,
        Sleeping,
    }
}

event_enum! {
    enum Action {
        Study,
        GetTired,
        GetHungry,
        Eat,
        GetUp,
    }
}

fn main() {
    println!("=== Study Day Example ===\n");

    let mut machine = MachineBuilder::new()
        .initial(Mood::Normal)
        .states([Mood::Normal, Mood::Busy, Mood::Hungry, Mood::Sleeping])
        .transition(Mood::Normal, Action::Study, Mood::Busy)
        .transition(Mood::Busy, Action::GetTired, Mood::Sleeping)
        .transition(Mood::Busy, Action::GetHungry, Mood::Hungry)
        .transition(Mood::Hungry, Action::Eat, Mood::Normal)
        .transition(Mood::Sleeping, Action::GetHungry, Mood::Hungry)
        .transition(Mood::Sleeping, Action::GetUp, Mood::Normal)
        .build()
        .unwrap();

    println!("Starting the day as {:?}", machine.current_state());

    for action in [Action::Study, Action::GetHungry, Action::Eat] {
        machine.trigger(&action).unwrap();
        println!("After {:?}: {:?}", action, machine.current_state());
    }

    // Events only apply in states that register them.
    if let Err(error) = machine.trigger(&Action::Eat) {
        println!("\nCannot eat right now: {error}");
    }

    println!("\nAll states: {:?}", machine.states());
    println!(
        "States reacting to GetHungry: {:?}",
        machine.states_accepting(&Action::GetHungry)
    );

    println!("\n=== Example Complete ===");
}
