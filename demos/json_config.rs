//! JSON Config
//!
//! This example loads the whole machine configuration from JSON, using
//! serde renames so the wire names stay lowercase.
//!
//! Run with: cargo run --example json_config

use retrace::{event_enum, state_enum, StateMachine};

state_enum! {
    #[serde(rename_all = "snake_case")]
    enum Mood {
        Normal,
        Busy,
        Hungry,
        Sleeping,
    }
}

event_enum! {
    #[serde(rename_all = "snake_case")]
    enum Action {
        Study,
        GetTired,
        GetHungry,
        Eat,
        GetUp,
    }
}

const CONFIG: &str = r#"{
    "initial": "normal",
    "states": [
        {
            "state": "normal",
            "transitions": [ { "on": "study", "to": "busy" } ]
        },
        {
            "state": "busy",
            "transitions": [
                { "on": "get_tired", "to": "sleeping" },
                { "on": "get_hungry", "to": "hungry" }
            ]
        },
        {
            "state": "hungry",
            "transitions": [ { "on": "eat", "to": "normal" } ]
        },
        {
            "state": "sleeping",
            "transitions": [
                { "on": "get_hungry", "to": "hungry" },
                { "on": "get_up", "to": "normal" }
            ]
        }
    ]
}"#;

fn main() {
    println!("=== JSON Config Example ===\n");

    let mut machine: StateMachine<Mood, Action> = StateMachine::from_json(CONFIG).unwrap();

    println!("Configured states: {:?}", machine.states());
    println!("Initial state: {:?}", machine.current_state());

    machine.trigger(&Action::Study).unwrap();
    machine.trigger(&Action::GetTired).unwrap();
    println!("After study + get_tired: {:?}", machine.current_state());

    machine.reset();
    println!("After reset: {:?}", machine.current_state());

    println!("\n=== Example Complete ===");
}
