//! Layout code generation.
//!
//! Maps a [`GridConfig`](crate::config::GridConfig) and an ordered area list to
//! a markup skeleton plus `@apply` stylesheet rules in the Tailwind utility
//! vocabulary. Generation is pure; callers regenerate after every change.

mod core;
pub mod gap;

pub use core::{
    EMPTY_PLACEHOLDER, LayoutCode, MarkupFlavor, STYLESHEET_HEADER, area_rule, column_token,
    container_classes, generate, generate_with,
};
pub use gap::{gap_classes, gap_scale};
