//! Grid configuration: extent, gaps and responsive breakpoints.
//!
//! Every setter sanitises its input, so a `GridConfig` is valid by
//! construction and can be handed to the selection controller and the code
//! generator without further checks.

mod core;

pub use core::{Axis, Breakpoint, Breakpoints, GridConfig, MAX_TRACKS, MIN_TRACKS};
