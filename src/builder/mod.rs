//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and macros for creating state
//! machines with minimal boilerplate while keeping construction-time
//! validation intact.

pub mod machine;
pub mod macros;

pub use machine::MachineBuilder;
