//! Grid area editor core.
//!
//! Users draw named, non-overlapping rectangular areas on a fixed row/column
//! grid; the crate turns the result into a markup skeleton plus Tailwind
//! `@apply` rules, with optional responsive breakpoint variants.
//!
//! Pointer events flow through the [`SelectionController`] into the
//! [`AreaRegistry`]; [`codegen::generate`] reads the registry snapshot and the
//! [`GridConfig`]. [`GridEditor`] bundles all three for hosts that just want a
//! session object.
//!
//! ```
//! use gridcraft::{Cell, GridEditor, PointerEvent};
//!
//! let mut editor = GridEditor::default();
//! editor.pointer(PointerEvent::Press(Cell::new(0, 0)));
//! editor.pointer(PointerEvent::Enter(Cell::new(1, 1)));
//! editor.pointer(PointerEvent::Release);
//!
//! assert!(editor.code().stylesheet.contains(".div1 { @apply"));
//! ```

pub mod codegen;
pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod registry;
pub mod render;
pub mod selection;

pub use codegen::{LayoutCode, MarkupFlavor, generate, generate_with};
pub use config::{Axis, Breakpoint, Breakpoints, GridConfig, MAX_TRACKS, MIN_TRACKS};
pub use editor::{EditorSettings, GridEditor};
pub use error::{GridError, Result};
pub use geometry::{Bounds, Cell};
pub use input::PointerTranslator;
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use metrics::{EditorMetrics, MetricSnapshot};
pub use registry::{Area, AreaId, AreaRegistry, Placement};
pub use render::{CellGeometry, CellPaint, GridPreview};
pub use selection::{PointerEvent, SelectionController, SelectionOutcome, SelectionState};
