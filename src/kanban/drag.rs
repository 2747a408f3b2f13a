//! Drag-and-drop protocol between the board and whatever front-end moves
//! cards around (mouse in a browser, keyboard in the terminal).

use crate::collection::RecordId;

/// What a finished drag did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// The task changed column.
    Moved { task_id: RecordId, from: String, to: String },
    /// The drop resolved to the column the task was already in.
    Unchanged,
    /// Unknown task, missing target or a target that matches nothing.
    Ignored,
}

impl DragOutcome {
    pub fn is_move(&self) -> bool {
        matches!(self, DragOutcome::Moved { .. })
    }
}

/// The drag in progress, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    pub active: RecordId,
    /// Raw id of the column or task currently hovered.
    pub over: Option<String>,
}

/// Callbacks a front-end fires while a card is dragged.
///
/// Targets are raw identifiers: either a column id or the id of another
/// task, in which case the drop lands in that task's column.
pub trait DragHandler {
    /// Returns `false` when the task does not exist.
    fn on_drag_start(&mut self, task_id: &RecordId) -> bool;

    fn on_drag_over(&mut self, target: Option<&str>);

    fn on_drag_end(&mut self, task_id: &RecordId, target: Option<&str>) -> DragOutcome;

    fn on_drag_cancel(&mut self);
}
