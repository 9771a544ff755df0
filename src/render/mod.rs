//! Cell classification and ANSI grid preview.
//!
//! [`paint_cell`] is the pure part: it decides how each cell looks given the
//! registry and the live drag preview. [`GridPreview`] turns that into
//! terminal output through crossterm commands.

mod core;

pub use core::{CellGeometry, CellPaint, GridPreview, Rgb, display_width, paint_cell};
