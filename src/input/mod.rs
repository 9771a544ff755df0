//! Terminal pointer adapter.
//!
//! Translates crossterm mouse events, reported in terminal character
//! coordinates, into the [`PointerEvent`]s the selection controller consumes.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::geometry::Cell;
use crate::render::CellGeometry;
use crate::selection::PointerEvent;

/// Stateful translator; remembers the button state and the last cell so that
/// `Enter` fires once per cell rather than once per motion report.
#[derive(Debug, Clone)]
pub struct PointerTranslator {
    geometry: CellGeometry,
    rows: u16,
    cols: u16,
    pressed: bool,
    last_cell: Option<Cell>,
}

impl PointerTranslator {
    pub fn new(geometry: CellGeometry, rows: u16, cols: u16) -> Self {
        Self {
            geometry,
            rows,
            cols,
            pressed: false,
            last_cell: None,
        }
    }

    /// Adopt a new grid extent, forgetting any in-flight gesture.
    pub fn set_extent(&mut self, rows: u16, cols: u16) {
        self.rows = rows;
        self.cols = cols;
        self.pressed = false;
        self.last_cell = None;
    }

    pub fn translate(&mut self, event: &MouseEvent) -> Option<PointerEvent> {
        let cell = self
            .geometry
            .cell_at(event.column, event.row, self.rows, self.cols);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let cell = cell?;
                self.pressed = true;
                self.last_cell = Some(cell);
                Some(PointerEvent::Press(cell))
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved if self.pressed => {
                match cell {
                    Some(cell) if self.last_cell == Some(cell) => None,
                    Some(cell) => {
                        self.last_cell = Some(cell);
                        Some(PointerEvent::Enter(cell))
                    }
                    None => {
                        self.pressed = false;
                        self.last_cell = None;
                        Some(PointerEvent::Leave)
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) if self.pressed => {
                self.pressed = false;
                self.last_cell = None;
                Some(PointerEvent::Release)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn translator() -> PointerTranslator {
        let geometry = CellGeometry {
            origin_x: 0,
            origin_y: 0,
            cell_width: 4,
            cell_height: 1,
        };
        PointerTranslator::new(geometry, 4, 4)
    }

    #[test]
    fn press_drag_release_sequence() {
        let mut t = translator();
        assert_eq!(
            t.translate(&mouse(MouseEventKind::Down(MouseButton::Left), 1, 0)),
            Some(PointerEvent::Press(Cell::new(0, 0)))
        );
        assert_eq!(
            t.translate(&mouse(MouseEventKind::Drag(MouseButton::Left), 2, 0)),
            None
        );
        assert_eq!(
            t.translate(&mouse(MouseEventKind::Drag(MouseButton::Left), 5, 1)),
            Some(PointerEvent::Enter(Cell::new(1, 1)))
        );
        assert_eq!(
            t.translate(&mouse(MouseEventKind::Drag(MouseButton::Left), 6, 1)),
            None
        );
        assert_eq!(
            t.translate(&mouse(MouseEventKind::Up(MouseButton::Left), 6, 1)),
            Some(PointerEvent::Release)
        );
    }

    #[test]
    fn dragging_off_the_grid_leaves() {
        let mut t = translator();
        t.translate(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert_eq!(
            t.translate(&mouse(MouseEventKind::Drag(MouseButton::Left), 30, 0)),
            Some(PointerEvent::Leave)
        );
        assert_eq!(
            t.translate(&mouse(MouseEventKind::Up(MouseButton::Left), 30, 0)),
            None
        );
    }

    #[test]
    fn press_outside_grid_and_idle_motion_are_ignored() {
        let mut t = translator();
        assert_eq!(
            t.translate(&mouse(MouseEventKind::Down(MouseButton::Left), 40, 9)),
            None
        );
        assert_eq!(t.translate(&mouse(MouseEventKind::Moved, 1, 1)), None);
        assert_eq!(
            t.translate(&mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            None
        );
    }

    #[test]
    fn set_extent_drops_gesture() {
        let mut t = translator();
        t.translate(&mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        t.set_extent(2, 2);
        assert_eq!(
            t.translate(&mouse(MouseEventKind::Up(MouseButton::Left), 0, 0)),
            None
        );
    }
}
