//! Time Travel
//!
//! This example demonstrates the history buffer: undo and redo move a
//! cursor over the visited states, and recording a new state from the
//! middle of the buffer discards the abandoned future.
//!
//! Run with: cargo run --example time_travel

use retrace::{event_enum, state_enum, MachineBuilder};

state_enum! {
    enum Draft {
        Empty,
        Outline,
        FullText,
        Reviewed,
    }
}

event_enum! {
    enum Edit {
        Sketch,
        Write,
        Review,
    }
}

fn main() {
    println!("=== Time Travel Example ===\n");

    let mut machine = MachineBuilder::new()
        .initial(Draft::Empty)
        .states([Draft::Empty, Draft::Outline, Draft::FullText, Draft::Reviewed])
        .transition(Draft::Empty, Edit::Sketch, Draft::Outline)
        .transition(Draft::Outline, Edit::Write, Draft::FullText)
        .transition(Draft::FullText, Edit::Review, Draft::Reviewed)
        .build()
        .unwrap();

    machine.trigger(&Edit::Sketch).unwrap();
    machine.trigger(&Edit::Write).unwrap();
    machine.trigger(&Edit::Review).unwrap();
    println!("Visited: {:?}", machine.history().entries());

    machine.undo();
    machine.undo();
    println!(
        "After two undos: {:?} (head {})",
        machine.current_state(),
        machine.history().head()
    );

    machine.redo();
    println!("After one redo:  {:?}", machine.current_state());

    // Jumping from the middle abandons the rest of the buffer.
    machine.undo();
    machine.change_state(Draft::Empty).unwrap();
    println!(
        "\nAfter undo + jump to Empty: {:?}",
        machine.history().entries()
    );
    println!("Redo available: {}", machine.redo());

    machine.clear_history();
    let entries_after_clear = format!("{:?}", machine.history().entries());
    println!(
        "After clear_history: {}, undo available: {}",
        entries_after_clear,
        machine.undo()
    );

    println!("\n=== Example Complete ===");
}
