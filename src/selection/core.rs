use crate::config::GridConfig;
use crate::geometry::{Bounds, Cell};
use crate::registry::{Area, AreaId, AreaRegistry, Placement};

/// Input events understood by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed over a cell.
    Press(Cell),
    /// Pointer moved onto a cell.
    Enter(Cell),
    /// Button released anywhere over the grid.
    Release,
    /// Pointer left the grid surface.
    Leave,
}

/// In-progress drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draft {
    pub anchor: Cell,
    pub current: Cell,
}

impl Draft {
    pub fn bounds(&self) -> Bounds {
        Bounds::spanning(self.anchor, self.current)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Dragging(Draft),
}

/// What a single event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Press landed on an existing area, which is now selected.
    Selected(AreaId),
    /// Press on an empty cell started a drag.
    DragStarted(Bounds),
    /// Drag head moved; carries the live preview rectangle.
    PreviewUpdated(Bounds),
    /// Release committed a new area.
    Created(Area),
    /// Release was refused by the registry; nothing changed.
    Rejected(Placement),
    /// Pointer left the grid mid-drag; the draft was dropped.
    Cancelled,
    /// Event has no meaning in the current state.
    Ignored,
}

/// Idle/Dragging state machine.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SelectionState::Dragging(_))
    }

    /// Live preview rectangle while dragging.
    pub fn preview(&self) -> Option<Bounds> {
        match self.state {
            SelectionState::Dragging(draft) => Some(draft.bounds()),
            SelectionState::Idle => None,
        }
    }

    /// Drop any draft without touching the registry.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = SelectionState::Idle;
        was_dragging
    }

    pub fn handle(
        &mut self,
        event: PointerEvent,
        config: &GridConfig,
        registry: &mut AreaRegistry,
    ) -> SelectionOutcome {
        match (self.state, event) {
            (SelectionState::Idle, PointerEvent::Press(cell)) => {
                let cell = clamp(config, cell);
                if let Some(id) = registry.select_at(cell) {
                    return SelectionOutcome::Selected(id);
                }
                let draft = Draft {
                    anchor: cell,
                    current: cell,
                };
                self.state = SelectionState::Dragging(draft);
                SelectionOutcome::DragStarted(draft.bounds())
            }
            (SelectionState::Dragging(mut draft), PointerEvent::Enter(cell)) => {
                draft.current = clamp(config, cell);
                self.state = SelectionState::Dragging(draft);
                SelectionOutcome::PreviewUpdated(draft.bounds())
            }
            (SelectionState::Dragging(draft), PointerEvent::Release) => {
                self.state = SelectionState::Idle;
                match registry.add_if_non_overlapping(draft.bounds()) {
                    Placement::Created(area) => SelectionOutcome::Created(area),
                    refused => SelectionOutcome::Rejected(refused),
                }
            }
            (SelectionState::Dragging(_), PointerEvent::Leave) => {
                self.state = SelectionState::Idle;
                SelectionOutcome::Cancelled
            }
            _ => SelectionOutcome::Ignored,
        }
    }
}

fn clamp(config: &GridConfig, cell: Cell) -> Cell {
    config.clamp_cell(cell.row as i64, cell.col as i64)
}
