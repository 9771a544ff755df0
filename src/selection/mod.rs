//! Pointer-driven selection state machine.
//!
//! The controller turns press/enter/release/leave events into either a
//! selection of an existing area or a placement attempt on the registry.

mod core;

pub use core::{Draft, PointerEvent, SelectionController, SelectionOutcome, SelectionState};
