//! Kanban page.
//!
//! Cards are moved with the keyboard through the same drag protocol a mouse
//! front-end would use: Space picks the selected card up, the arrows move
//! the hover column and Enter drops it.

use std::mem;

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::collection::{CollectionError, RecordId};
use crate::constants::{fill, ERROR_FIX_FIELDS, ERROR_NOTHING_SELECTED, SUCCESS_CREATED, SUCCESS_DELETED, SUCCESS_TASK_MOVED, SUCCESS_UPDATED};
use crate::entities::KanbanTask;
use crate::forms::{FieldKind, FormSession, Submission};
use crate::kanban::{Board, DragHandler, DragOutcome};
use crate::ui::components::dialogs::common::input_line;
use crate::ui::components::dialogs::{render_delete_confirmation_dialog, render_form_dialog};
use crate::ui::components::table_rows::priority_color;
use crate::ui::core::{Action, PageComponent};
use crate::utils::datetime::format_human_date_from;

enum Mode {
    Browse,
    Search { previous: String },
    /// `column` is where a new task lands
    Form { session: FormSession<KanbanTask>, column: String },
    ConfirmDelete { id: RecordId, label: String },
}

pub struct KanbanComponent {
    mode: Mode,
    focus_column: usize,
    /// Card index within the focused column
    selected: usize,
}

impl Default for KanbanComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl KanbanComponent {
    pub fn new() -> Self {
        Self {
            mode: Mode::Browse,
            focus_column: 0,
            selected: 0,
        }
    }

    pub fn focus_column(&self) -> usize {
        self.focus_column
    }

    pub fn form(&self) -> Option<&FormSession<KanbanTask>> {
        match &self.mode {
            Mode::Form { session, .. } => Some(session),
            _ => None,
        }
    }

    pub fn selected_task<'a>(&self, board: &'a Board) -> Option<&'a KanbanTask> {
        let column = board.columns().get(self.focus_column)?;
        board.tasks_in(&column.id).get(self.selected).copied()
    }

    fn clamp_selection(&mut self, board: &Board) {
        self.focus_column = self.focus_column.min(board.columns().len().saturating_sub(1));
        let visible = board
            .columns()
            .get(self.focus_column)
            .map_or(0, |column| board.tasks_in(&column.id).len());
        self.selected = self.selected.min(visible.saturating_sub(1));
    }

    fn focus(&mut self, board: &Board, column: usize) {
        self.focus_column = column;
        self.selected = 0;
        self.clamp_selection(board);
    }

    /// Column id the dragged card would land in right now
    fn drop_column(board: &Board) -> Option<String> {
        if let Some(column) = board.hover_column() {
            return Some(column.to_string());
        }
        let drag = board.drag_state()?;
        board.task(&drag.active).map(|task| task.status.clone())
    }

    fn move_hover(&mut self, board: &mut Board, offset: isize) {
        let Some(current) = Self::drop_column(board) else {
            return;
        };
        let Some(next) = board.neighbour(&current, offset).map(|c| c.id.clone()) else {
            return;
        };
        board.on_drag_over(Some(&next));
        if let Some(index) = board.column_index(&next) {
            self.focus_column = index;
        }
    }

    fn pick_up(&mut self, board: &mut Board) -> Action {
        let Some(id) = self.selected_task(board).map(|task| task.id.clone()) else {
            return Action::Error(ERROR_NOTHING_SELECTED.to_string());
        };
        if board.on_drag_start(&id) {
            log::debug!("picked up task {}", id);
        }
        Action::None
    }

    fn drop(&mut self, board: &mut Board) -> Action {
        let Some(drag) = board.drag_state().cloned() else {
            return Action::None;
        };
        let target = Self::drop_column(board);
        let outcome = board.on_drag_end(&drag.active, target.as_deref());

        let action = match &outcome {
            DragOutcome::Moved { to, .. } => {
                let title = board.column(to).map_or(to.as_str(), |c| c.title.as_str());
                Action::Info(fill(SUCCESS_TASK_MOVED, &[title]))
            }
            DragOutcome::Unchanged | DragOutcome::Ignored => Action::None,
        };

        // Follow the card to its new column
        if let Some(task) = board.task(&drag.active) {
            let column = task.status.clone();
            if let Some(index) = board.column_index(&column) {
                self.focus_column = index;
                self.selected = board
                    .tasks_in(&column)
                    .iter()
                    .position(|t| t.id == drag.active)
                    .unwrap_or(0);
            }
        }
        action
    }

    fn open_create(&mut self, board: &Board) {
        let Some(column) = board.columns().get(self.focus_column) else {
            return;
        };
        self.mode = Mode::Form {
            session: FormSession::create(board.tasks()),
            column: column.id.clone(),
        };
    }

    fn open_edit(&mut self, board: &Board) -> Action {
        let Some(task) = self.selected_task(board) else {
            return Action::Error(ERROR_NOTHING_SELECTED.to_string());
        };
        let column = task.status.clone();
        match FormSession::edit(board.tasks(), &task.id) {
            Some(session) => {
                self.mode = Mode::Form { session, column };
                Action::None
            }
            None => Action::Error(ERROR_NOTHING_SELECTED.to_string()),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent, board: &mut Board) -> Action {
        let dragging = board.drag_state().is_some();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') if dragging => {
                self.move_hover(board, -1);
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') if dragging => {
                self.move_hover(board, 1);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') if dragging => self.drop(board),
            KeyCode::Esc if dragging => {
                board.on_drag_cancel();
                self.clamp_selection(board);
                Action::None
            }
            // Nothing else while a card is in the air
            _ if dragging => Action::None,

            KeyCode::Left | KeyCode::Char('h') => {
                self.focus(board, self.focus_column.saturating_sub(1));
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.focus(board, self.focus_column + 1);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected += 1;
                self.clamp_selection(board);
                Action::None
            }
            KeyCode::Char(' ') => self.pick_up(board),
            KeyCode::Char('/') => {
                self.mode = Mode::Search {
                    previous: board.filter_state().search_text.clone(),
                };
                Action::None
            }
            KeyCode::Char('f') => {
                let filter = board.cycle_priority_filter();
                log::debug!("kanban: priority filter set to {}", filter);
                self.clamp_selection(board);
                Action::None
            }
            KeyCode::Char('a') => {
                self.open_create(board);
                Action::None
            }
            KeyCode::Char('e') | KeyCode::Enter => self.open_edit(board),
            KeyCode::Char('d') | KeyCode::Delete => match self.selected_task(board) {
                Some(task) => {
                    self.mode = Mode::ConfirmDelete {
                        id: task.id.clone(),
                        label: task.title.clone(),
                    };
                    Action::None
                }
                None => Action::Error(ERROR_NOTHING_SELECTED.to_string()),
            },
            _ => Action::None,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, board: &mut Board) -> Action {
        let mut text = board.filter_state().search_text.clone();
        match key.code {
            KeyCode::Enter => self.mode = Mode::Browse,
            KeyCode::Esc => {
                if let Mode::Search { previous } = mem::replace(&mut self.mode, Mode::Browse) {
                    board.search(previous);
                }
            }
            KeyCode::Backspace => {
                text.pop();
                board.search(text);
            }
            KeyCode::Char(c) => {
                text.push(c);
                board.search(text);
            }
            _ => {}
        }
        self.clamp_selection(board);
        Action::None
    }

    fn handle_form_key(&mut self, key: KeyEvent, board: &mut Board) -> Action {
        let Mode::Form { session, column } = &mut self.mode else {
            return Action::None;
        };
        let is_choice = session
            .focused_field()
            .is_some_and(|field| matches!(field.kind, FieldKind::Choice(_)));

        match key.code {
            KeyCode::Esc => {
                if let Mode::Form { session, .. } = mem::replace(&mut self.mode, Mode::Browse) {
                    board.restore_filter(session.saved_filter().clone());
                }
                self.clamp_selection(board);
            }
            KeyCode::Enter => {
                let result = match session.parse() {
                    Ok(Submission::Create(draft)) => board.create(column, draft),
                    Ok(Submission::Update(id, patch)) => board.edit(&id, patch),
                    Err(errors) => Err(CollectionError::Validation(errors)),
                };
                match result {
                    Ok(task) => {
                        let template = if session.is_edit() { SUCCESS_UPDATED } else { SUCCESS_CREATED };
                        self.mode = Mode::Browse;
                        self.clamp_selection(board);
                        return Action::Info(fill(template, &[&format!("Task {}", task.title)]));
                    }
                    Err(err) => {
                        log::debug!("task form rejected: {}", err);
                        session.record_errors(&err);
                        return Action::Error(ERROR_FIX_FIELDS.to_string());
                    }
                }
            }
            KeyCode::Tab | KeyCode::Down => session.focus_next(),
            KeyCode::BackTab | KeyCode::Up => session.focus_previous(),
            KeyCode::Left if is_choice => session.cycle_choice(false),
            KeyCode::Right if is_choice => session.cycle_choice(true),
            KeyCode::Left => session.move_cursor_left(),
            KeyCode::Right => session.move_cursor_right(),
            KeyCode::Backspace => session.backspace(),
            KeyCode::Char(c) => session.input(c),
            _ => {}
        }
        Action::None
    }

    fn handle_confirm_key(&mut self, key: KeyEvent, board: &mut Board) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                let Mode::ConfirmDelete { id, label } = mem::replace(&mut self.mode, Mode::Browse) else {
                    return Action::None;
                };
                board.delete(&id);
                self.clamp_selection(board);
                Action::Info(fill(SUCCESS_DELETED, &[&format!("Task {}", label)]))
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                self.mode = Mode::Browse;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn card(task: &KanbanTask, today: NaiveDate, lifted: bool) -> ListItem<'static> {
        let mut title_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        if lifted {
            title_style = title_style.fg(Color::Yellow).add_modifier(Modifier::ITALIC);
        }
        let marker = if lifted { "✋ " } else { "" };

        let mut meta = vec![Span::styled(
            task.priority.as_str().to_string(),
            Style::default().fg(priority_color(task.priority)),
        )];
        if let Some(due) = task.due_date {
            let color = if task.is_overdue(today) { Color::Red } else { Color::Gray };
            meta.push(Span::raw(" · "));
            meta.push(Span::styled(format_human_date_from(due, today), Style::default().fg(color)));
        }
        let initials = task.assignee_initials();
        if !initials.is_empty() {
            meta.push(Span::raw(" · "));
            meta.push(Span::styled(initials.join(" "), Style::default().fg(Color::Cyan)));
        }
        if task.comments > 0 || task.attachments > 0 {
            meta.push(Span::styled(
                format!(" · 💬{} 📎{}", task.comments, task.attachments),
                Style::default().fg(Color::DarkGray),
            ));
        }

        ListItem::new(vec![
            Line::from(Span::styled(format!("{}{}", marker, task.title), title_style)),
            Line::from(meta),
            Line::from(""),
        ])
    }

    fn title(board: &Board) -> String {
        let filter = board.filter_state();
        let mut title = format!(" Kanban [priority: {}] ", filter.class_filter);
        if !filter.search_text.is_empty() {
            title.push_str(&format!("[search: {}] ", filter.search_text));
        }
        title
    }
}

impl PageComponent for KanbanComponent {
    type Data = Board;

    fn on_mount(&mut self, board: &mut Board, _signals: &mut crate::signals::AppSignals) {
        self.clamp_selection(board);
    }

    fn handle_key_events(&mut self, key: KeyEvent, board: &mut Board) -> Action {
        match self.mode {
            Mode::Browse => self.handle_browse_key(key, board),
            Mode::Search { .. } => self.handle_search_key(key, board),
            Mode::Form { .. } => self.handle_form_key(key, board),
            Mode::ConfirmDelete { .. } => self.handle_confirm_key(key, board),
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, board: &Board) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Self::title(board))
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let header = match self.mode {
            Mode::Search { .. } => {
                let text = &board.filter_state().search_text;
                let mut line = input_line(text, Some(text.chars().count()));
                line.spans.insert(0, Span::styled("Search: ", Style::default().fg(Color::Yellow)));
                line
            }
            _ => match board.drag_state().and_then(|drag| board.task(&drag.active)) {
                Some(task) => Line::from(Span::styled(
                    format!("Moving \"{}\" • ←/→: choose column • Enter: drop • Esc: cancel", task.title),
                    Style::default().fg(Color::Yellow),
                )),
                None => Line::from(Span::styled(
                    format!("{} tasks", board.tasks().len()),
                    Style::default().fg(Color::Gray),
                )),
            },
        };
        f.render_widget(Paragraph::new(header), chunks[0]);

        let columns = board.columns();
        if columns.is_empty() {
            f.render_widget(Paragraph::new("No columns configured."), chunks[1]);
            return;
        }
        let areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(columns.iter().map(|_| Constraint::Ratio(1, columns.len() as u32)))
            .split(chunks[1]);

        let today = Local::now().date_naive();
        let lifted = board.drag_state().map(|drag| drag.active.clone());
        let hover = board.hover_column();

        for (index, (column, area)) in columns.iter().zip(areas.iter()).enumerate() {
            let tasks = board.tasks_in(&column.id);
            let focused = index == self.focus_column;
            let is_hover = hover == Some(column.id.as_str());

            let border_color = if is_hover {
                Color::Yellow
            } else if focused {
                Color::Cyan
            } else {
                Color::DarkGray
            };
            let mut title = format!(" {} ({}) ", column.title, tasks.len());
            if is_hover {
                title.push_str("⇣ ");
            }

            let items: Vec<ListItem> = tasks
                .iter()
                .map(|task| Self::card(task, today, lifted.as_ref() == Some(&task.id)))
                .collect();
            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .title(title)
                        .border_style(Style::default().fg(border_color)),
                )
                .highlight_style(Style::default().bg(Color::DarkGray));

            let mut state = ListState::default();
            if focused && lifted.is_none() && !tasks.is_empty() {
                state.select(Some(self.selected.min(tasks.len() - 1)));
            }
            f.render_stateful_widget(list, *area, &mut state);
        }

        match &self.mode {
            Mode::Form { session, .. } => render_form_dialog(f, rect, session),
            Mode::ConfirmDelete { label, .. } => render_delete_confirmation_dialog(f, rect, "task", label),
            Mode::Browse | Mode::Search { .. } => {}
        }
    }

    fn is_capturing_input(&self) -> bool {
        !matches!(self.mode, Mode::Browse)
    }

    fn key_hints(&self) -> &'static str {
        match self.mode {
            Mode::Browse => "←/→: column • ↑/↓: card • Space: pick up • a: add • e: edit • d: delete • /: search • f: priority",
            Mode::Search { .. } => "type to search • Enter: keep • Esc: clear",
            Mode::Form { .. } => "Tab: next field • Enter: save • Esc: cancel",
            Mode::ConfirmDelete { .. } => "Enter: delete • Esc: keep",
        }
    }
}
