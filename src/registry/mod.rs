//! Area registry: the exclusive owner of every placed area.

mod core;

pub use core::{Area, AreaId, AreaRegistry, Placement, area_name};
