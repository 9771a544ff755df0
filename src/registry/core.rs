use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{GridError, Result};
use crate::geometry::{Bounds, Cell};

/// Area identifier, assigned from 1 upwards and never reused.
pub type AreaId = u32;

/// Named rectangular region of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub id: AreaId,
    pub name: String,
    pub bounds: Bounds,
}

impl Area {
    fn new(id: AreaId, bounds: Bounds) -> Self {
        Self {
            id,
            name: area_name(id),
            bounds,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.bounds.contains(cell)
    }
}

/// Class-safe name for an area id.
pub fn area_name(id: AreaId) -> String {
    format!("div{id}")
}

/// Result of an attempted placement. Refusals are ordinary outcomes of a drag
/// gesture, not errors, and leave the registry untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    Created(Area),
    /// Refused because it intersects the area with this id (lowest id wins).
    Overlaps(AreaId),
    /// Refused because part of the rectangle lies outside the grid.
    OutOfBounds,
}

impl Placement {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn area(&self) -> Option<&Area> {
        match self {
            Self::Created(area) => Some(area),
            _ => None,
        }
    }
}

/// Overlap-free set of areas over a fixed `rows` x `cols` extent.
#[derive(Debug, Clone)]
pub struct AreaRegistry {
    rows: u16,
    cols: u16,
    areas: BTreeMap<AreaId, Area>,
    next_id: AreaId,
    selected: Option<AreaId>,
}

impl AreaRegistry {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            areas: BTreeMap::new(),
            next_id: 1,
            selected: None,
        }
    }

    pub fn extent(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    /// Place `bounds` unless it leaves the grid or intersects an existing area.
    /// A created area becomes the selected one.
    pub fn add_if_non_overlapping(&mut self, bounds: Bounds) -> Placement {
        let bounds = Bounds::new(
            bounds.start_row,
            bounds.end_row,
            bounds.start_col,
            bounds.end_col,
        );
        if !bounds.fits(self.rows, self.cols) {
            return Placement::OutOfBounds;
        }
        if let Some(conflict) = self.areas.values().find(|a| a.bounds.overlaps(&bounds)) {
            return Placement::Overlaps(conflict.id);
        }

        let area = Area::new(self.next_id, bounds);
        self.next_id += 1;
        self.selected = Some(area.id);
        self.areas.insert(area.id, area.clone());
        Placement::Created(area)
    }

    /// Lowest-id area containing `cell`.
    pub fn find_at_cell(&self, cell: Cell) -> Option<&Area> {
        self.areas.values().find(|area| area.contains(cell))
    }

    pub fn get(&self, id: AreaId) -> Option<&Area> {
        self.areas.get(&id)
    }

    pub fn remove(&mut self, id: AreaId) -> Result<Area> {
        let area = self
            .areas
            .remove(&id)
            .ok_or(GridError::AreaNotFound(id))?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok(area)
    }

    /// Remove whichever area is selected, if any.
    pub fn remove_selected(&mut self) -> Option<Area> {
        let id = self.selected?;
        self.remove(id).ok()
    }

    /// Drop every area and restart id assignment at 1.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.next_id = 1;
        self.selected = None;
    }

    /// Clear and adopt a new extent.
    pub fn reset_extent(&mut self, rows: u16, cols: u16) {
        self.clear();
        self.rows = rows;
        self.cols = cols;
    }

    pub fn selected(&self) -> Option<AreaId> {
        self.selected
    }

    pub fn selected_area(&self) -> Option<&Area> {
        self.selected.and_then(|id| self.areas.get(&id))
    }

    pub fn select(&mut self, id: AreaId) -> Result<()> {
        if !self.areas.contains_key(&id) {
            return Err(GridError::AreaNotFound(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    /// Select the area covering `cell`, if there is one.
    pub fn select_at(&mut self, cell: Cell) -> Option<AreaId> {
        let id = self.find_at_cell(cell)?.id;
        self.selected = Some(id);
        Some(id)
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Areas in ascending id order.
    pub fn areas(&self) -> impl Iterator<Item = &Area> {
        self.areas.values()
    }

    /// Owned copy of the areas in ascending id order.
    pub fn snapshot(&self) -> Vec<Area> {
        self.areas.values().cloned().collect()
    }

    pub fn next_id(&self) -> AreaId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
