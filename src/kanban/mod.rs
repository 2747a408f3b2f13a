//! Kanban board: tasks grouped into ordered columns and moved between them
//! by drag and drop.

pub mod column;
pub mod drag;

pub use column::{default_columns, Column};
pub use drag::{DragHandler, DragOutcome, DragState};

use chrono::Utc;

use crate::collection::{ClassFilter, CollectionError, CollectionManager, FieldErrors, FilterState, Record, RecordId};
use crate::entities::{KanbanTask, KanbanTaskDraft, KanbanTaskPatch, Priority};

#[derive(Debug, Clone)]
pub struct Board {
    columns: Vec<Column>,
    tasks: CollectionManager<KanbanTask>,
    drag: Option<DragState>,
}

impl Board {
    /// Build a board. Tasks pointing at a column that does not exist are
    /// moved into the first column.
    pub fn new(columns: Vec<Column>, tasks: Vec<KanbanTask>) -> Self {
        let fallback = columns.first().map(|c| c.id.clone());
        let tasks = tasks
            .into_iter()
            .map(|mut task| {
                if !columns.iter().any(|c| c.id == task.status) {
                    if let Some(first) = &fallback {
                        log::warn!("task {} has unknown column '{}', moved to '{}'", task.id, task.status, first);
                        task.status = first.clone();
                    }
                }
                task
            })
            .collect();

        Self {
            columns,
            tasks: CollectionManager::new(tasks),
            drag: None,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn column_index(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    /// Column `offset` steps away from `id`, clamped to the board edges.
    pub fn neighbour(&self, id: &str, offset: isize) -> Option<&Column> {
        let index = self.column_index(id)?;
        let last = self.columns.len().saturating_sub(1);
        let target = index.saturating_add_signed(offset).min(last);
        self.columns.get(target)
    }

    pub fn tasks(&self) -> &CollectionManager<KanbanTask> {
        &self.tasks
    }

    pub fn task(&self, id: &RecordId) -> Option<&KanbanTask> {
        self.tasks.get(id)
    }

    /// Look a task up by its raw id.
    pub fn find_task(&self, raw: &str) -> Option<&KanbanTask> {
        self.tasks.records().iter().find(|t| t.id.matches(raw))
    }

    /// Tasks of one column that pass the current search and priority filter.
    pub fn tasks_in(&self, column_id: &str) -> Vec<&KanbanTask> {
        self.tasks
            .matches()
            .into_iter()
            .filter(|t| t.status == column_id)
            .collect()
    }

    /// Total tasks per column, ignoring the filter.
    pub fn counts(&self) -> Vec<(&Column, usize)> {
        self.columns
            .iter()
            .map(|c| (c, self.tasks.records().iter().filter(|t| t.status == c.id).count()))
            .collect()
    }

    pub fn search(&mut self, text: impl Into<String>) {
        self.tasks.search(text);
    }

    pub fn set_priority_filter(&mut self, filter: ClassFilter<Priority>) {
        self.tasks.set_classification_filter(filter);
    }

    pub fn cycle_priority_filter(&mut self) -> ClassFilter<Priority> {
        self.tasks.cycle_classification_filter()
    }

    pub fn filter_state(&self) -> &FilterState<Priority> {
        self.tasks.filter_state()
    }

    pub fn restore_filter(&mut self, filter: FilterState<Priority>) {
        self.tasks.restore_filter(filter);
    }

    /// Column a drop on `target` lands in: a column id first, then the
    /// column of the task with that id.
    pub fn resolve_drop_target(&self, target: &str) -> Option<&str> {
        if let Some(column) = self.column(target) {
            return Some(&column.id);
        }
        self.find_task(target).map(|t| t.status.as_str())
    }

    /// Add a task to `column_id`.
    pub fn create(&mut self, column_id: &str, mut draft: KanbanTaskDraft) -> Result<KanbanTask, CollectionError> {
        draft.status = column_id.to_string();
        let mut errors = self.column_errors(column_id);
        if errors.is_empty() {
            return self.tasks.create(draft);
        }
        // Report the task's own problems alongside the column
        let invalid = KanbanTask::from_draft(RecordId::Int(0), draft, Utc::now()).and_then(|task| task.validate());
        if let Err(invalid) = invalid {
            errors.merge(invalid);
        }
        Err(CollectionError::Validation(errors))
    }

    pub fn edit(&mut self, task_id: &RecordId, patch: KanbanTaskPatch) -> Result<KanbanTask, CollectionError> {
        let mut errors = patch
            .status
            .as_deref()
            .map(|status| self.column_errors(status))
            .unwrap_or_default();
        if errors.is_empty() {
            return self.tasks.update(task_id, patch);
        }
        if let Some(task) = self.task(task_id) {
            let mut candidate = task.clone();
            candidate.apply_patch(patch);
            if let Err(invalid) = candidate.validate() {
                errors.merge(invalid);
            }
        }
        Err(CollectionError::Validation(errors))
    }

    /// Remove a task. Deleting an absent id is a no-op.
    pub fn delete(&mut self, task_id: &RecordId) -> Option<KanbanTask> {
        if self.drag.as_ref().is_some_and(|d| &d.active == task_id) {
            self.drag = None;
        }
        self.tasks.delete(task_id)
    }

    /// Move a task to wherever `target` resolves. Only `status` changes.
    pub fn move_task(&mut self, task_id: &RecordId, target: Option<&str>) -> DragOutcome {
        let Some(current) = self.task(task_id).map(|t| t.status.clone()) else {
            log::debug!("drop of unknown task {} ignored", task_id);
            return DragOutcome::Ignored;
        };
        let Some(destination) = target.and_then(|t| self.resolve_drop_target(t)).map(str::to_string) else {
            log::debug!("drop of task {} on {:?} matched nothing", task_id, target);
            return DragOutcome::Ignored;
        };
        if destination == current {
            return DragOutcome::Unchanged;
        }

        match self.tasks.update(task_id, KanbanTaskPatch::move_to(destination.clone())) {
            Ok(_) => {
                log::info!("task {} moved from '{}' to '{}'", task_id, current, destination);
                DragOutcome::Moved {
                    task_id: task_id.clone(),
                    from: current,
                    to: destination,
                }
            }
            Err(err) => {
                log::warn!("failed to move task {}: {}", task_id, err);
                DragOutcome::Ignored
            }
        }
    }

    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Column under the dragged card, for highlighting.
    pub fn hover_column(&self) -> Option<&str> {
        let over = self.drag.as_ref()?.over.as_deref()?;
        self.resolve_drop_target(over)
    }

    /// Empty when `column_id` names a column of this board.
    fn column_errors(&self, column_id: &str) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.column(column_id).is_none() {
            errors.insert("status", format!("Unknown column '{}'", column_id));
        }
        errors
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(default_columns(), Vec::new())
    }
}

impl DragHandler for Board {
    fn on_drag_start(&mut self, task_id: &RecordId) -> bool {
        let Some(task) = self.task(task_id) else {
            return false;
        };
        let over = Some(task.status.clone());
        self.drag = Some(DragState {
            active: task_id.clone(),
            over,
        });
        true
    }

    fn on_drag_over(&mut self, target: Option<&str>) {
        if let Some(drag) = &mut self.drag {
            drag.over = target.map(str::to_string);
        }
    }

    fn on_drag_end(&mut self, task_id: &RecordId, target: Option<&str>) -> DragOutcome {
        self.drag = None;
        self.move_task(task_id, target)
    }

    fn on_drag_cancel(&mut self) {
        self.drag = None;
    }
}
