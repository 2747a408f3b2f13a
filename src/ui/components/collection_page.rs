//! Generic list page: a paginated, searchable, filterable table over one
//! collection, with create/edit dialogs, delete confirmation and export.

use std::mem;
use std::path::PathBuf;

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::collection::{CollectionManager, Record, RecordId};
use crate::config::DisplayConfig;
use crate::constants::{
    fill, ERROR_EXPORT_FAILED, ERROR_FIX_FIELDS, ERROR_NOTHING_SELECTED, SUCCESS_CREATED, SUCCESS_DELETED,
    SUCCESS_EXPORTED, SUCCESS_UPDATED,
};
use crate::forms::{FieldKind, FormSession};
use crate::signals::AppSignals;
use crate::ui::components::dialogs::common::input_line;
use crate::ui::components::dialogs::{render_delete_confirmation_dialog, render_form_dialog};
use crate::ui::components::table_rows::{RowContext, TableRecord};
use crate::ui::core::{Action, PageComponent};

enum Mode<R: TableRecord> {
    Browse,
    /// Live search; `previous` is restored on Esc
    Search { previous: String },
    Form(FormSession<R>),
    ConfirmDelete { id: RecordId, label: String },
}

pub struct CollectionPage<R: TableRecord> {
    mode: Mode<R>,
    /// Row index within the current page
    selected: usize,
    table_state: TableState,
    display: DisplayConfig,
    export_dir: PathBuf,
}

/// "user" -> "User"
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl<R: TableRecord> CollectionPage<R> {
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            mode: Mode::Browse,
            selected: 0,
            table_state: TableState::default(),
            display,
            export_dir: PathBuf::from("."),
        }
    }

    /// Directory `x` writes exports to
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn form(&self) -> Option<&FormSession<R>> {
        match &self.mode {
            Mode::Form(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.mode, Mode::Search { .. })
    }

    pub fn pending_delete(&self) -> Option<&RecordId> {
        match &self.mode {
            Mode::ConfirmDelete { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Id of the highlighted row on the current page
    pub fn selected_id(&self, manager: &CollectionManager<R>) -> Option<RecordId> {
        manager.view().items.get(self.selected).map(|r| r.id().clone())
    }

    fn kind_title() -> String {
        capitalize(R::KIND.name)
    }

    fn clamp_selection(&mut self, manager: &CollectionManager<R>) {
        let visible = manager.view().items.len();
        self.selected = self.selected.min(visible.saturating_sub(1));
    }

    pub fn open_create(&mut self, manager: &CollectionManager<R>) {
        self.mode = Mode::Form(FormSession::create(manager));
    }

    fn open_edit(&mut self, manager: &CollectionManager<R>) -> Action {
        let session = self
            .selected_id(manager)
            .and_then(|id| FormSession::edit(manager, &id));
        match session {
            Some(session) => {
                self.mode = Mode::Form(session);
                Action::None
            }
            None => Action::Error(ERROR_NOTHING_SELECTED.to_string()),
        }
    }

    fn confirm_delete(&mut self, manager: &CollectionManager<R>) -> Action {
        let Some(record) = self.selected_id(manager).and_then(|id| manager.get(&id)) else {
            return Action::Error(ERROR_NOTHING_SELECTED.to_string());
        };
        self.mode = Mode::ConfirmDelete {
            id: record.id().clone(),
            label: record.label(),
        };
        Action::None
    }

    fn export(&self, manager: &CollectionManager<R>) -> Action {
        let file_name = format!("{}s-{}.json", R::KIND.name, Local::now().format("%Y%m%d-%H%M%S"));
        let path = self.export_dir.join(file_name);
        match manager.export_json(&path) {
            Ok(count) => Action::Info(fill(SUCCESS_EXPORTED, &[&count.to_string(), &path.display().to_string()])),
            Err(err) => Action::Error(format!("{}: {:#}", ERROR_EXPORT_FAILED, err)),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent, manager: &mut CollectionManager<R>) -> Action {
        let selected = self.selected_id(manager);
        if let Some(action) = R::handle_extra_key(key, selected.as_ref(), manager) {
            self.clamp_selection(manager);
            return action;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                let visible = manager.view().items.len();
                if self.selected + 1 < visible {
                    self.selected += 1;
                }
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                manager.next_page();
                self.selected = 0;
                Action::None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                manager.previous_page();
                self.selected = 0;
                Action::None
            }
            KeyCode::Char('/') => {
                self.mode = Mode::Search {
                    previous: manager.filter_state().search_text.clone(),
                };
                Action::None
            }
            KeyCode::Char('f') => {
                let filter = manager.cycle_classification_filter();
                self.selected = 0;
                log::debug!("{}: filter set to {}", R::KIND.name, filter);
                Action::None
            }
            KeyCode::Char('a') => {
                self.open_create(manager);
                Action::None
            }
            KeyCode::Char('e') | KeyCode::Enter => self.open_edit(manager),
            KeyCode::Char('d') | KeyCode::Delete => self.confirm_delete(manager),
            KeyCode::Char('x') => self.export(manager),
            _ => Action::None,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, manager: &mut CollectionManager<R>) -> Action {
        let mut text = manager.filter_state().search_text.clone();
        match key.code {
            KeyCode::Enter => self.mode = Mode::Browse,
            KeyCode::Esc => {
                if let Mode::Search { previous } = mem::replace(&mut self.mode, Mode::Browse) {
                    manager.search(previous);
                }
            }
            KeyCode::Backspace => {
                text.pop();
                manager.search(text);
            }
            KeyCode::Char(c) => {
                text.push(c);
                manager.search(text);
            }
            _ => {}
        }
        self.selected = 0;
        Action::None
    }

    fn handle_form_key(&mut self, key: KeyEvent, manager: &mut CollectionManager<R>) -> Action {
        let Mode::Form(session) = &mut self.mode else {
            return Action::None;
        };
        let is_choice = session
            .focused_field()
            .is_some_and(|field| matches!(field.kind, FieldKind::Choice(_)));

        match key.code {
            KeyCode::Esc => {
                if let Mode::Form(session) = mem::replace(&mut self.mode, Mode::Browse) {
                    session.cancel(manager);
                }
                self.clamp_selection(manager);
            }
            KeyCode::Enter => {
                let editing = session.is_edit();
                match session.submit(manager) {
                    Ok(record) => {
                        self.mode = Mode::Browse;
                        self.clamp_selection(manager);
                        let template = if editing { SUCCESS_UPDATED } else { SUCCESS_CREATED };
                        let subject = format!("{} {}", Self::kind_title(), record.label());
                        return Action::Info(fill(template, &[&subject]));
                    }
                    Err(err) => {
                        log::debug!("{} form rejected: {}", R::KIND.name, err);
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

    fn handle_confirm_key(&mut self, key: KeyEvent, manager: &mut CollectionManager<R>) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                let Mode::ConfirmDelete { id, label } = mem::replace(&mut self.mode, Mode::Browse) else {
                    return Action::None;
                };
                manager.delete(&id);
                self.clamp_selection(manager);
                Action::Info(fill(SUCCESS_DELETED, &[&format!("{} {}", Self::kind_title(), label)]))
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                self.mode = Mode::Browse;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn title(manager: &CollectionManager<R>) -> String {
        let filter = manager.filter_state();
        let mut title = format!(" {} ", R::PAGE.title());
        title.push_str(&format!("[{}: {}] ", R::KIND.classification_field, filter.class_filter));
        if !filter.search_text.is_empty() {
            title.push_str(&format!("[search: {}] ", filter.search_text));
        }
        title
    }

    fn class_summary(manager: &CollectionManager<R>) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!("{} total", manager.len()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        for (class, count) in manager.counts_by_class() {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(format!("{} {}", class, count), Style::default().fg(Color::Gray)));
        }
        Line::from(spans)
    }
}

impl<R: TableRecord> PageComponent for CollectionPage<R> {
    type Data = CollectionManager<R>;

    fn on_mount(&mut self, manager: &mut CollectionManager<R>, signals: &mut AppSignals) {
        self.clamp_selection(manager);
        if let Some(target) = R::ADD_TARGET {
            if signals.take_add(target) {
                log::debug!("{}: opening create dialog from quick action", R::KIND.name);
                self.open_create(manager);
            }
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent, manager: &mut CollectionManager<R>) -> Action {
        match self.mode {
            Mode::Browse => self.handle_browse_key(key, manager),
            Mode::Search { .. } => self.handle_search_key(key, manager),
            Mode::Form(_) => self.handle_form_key(key, manager),
            Mode::ConfirmDelete { .. } => self.handle_confirm_key(key, manager),
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, manager: &CollectionManager<R>) {
        let view = manager.view();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Self::title(manager))
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let header_line = match self.mode {
            Mode::Search { .. } => {
                let text = &manager.filter_state().search_text;
                let mut line = input_line(text, Some(text.chars().count()));
                line.spans.insert(0, Span::styled("Search: ", Style::default().fg(Color::Yellow)));
                line
            }
            _ => Self::class_summary(manager),
        };
        f.render_widget(Paragraph::new(header_line), chunks[0]);

        let ctx = RowContext::new(&self.display);
        let header = Row::new(R::HEADERS.iter().copied())
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        let rows: Vec<Row> = view
            .items
            .iter()
            .map(|record| Row::new(record.cells(&ctx)).style(record.row_style()))
            .collect();

        if rows.is_empty() {
            let message = if manager.is_empty() {
                format!("No {}s yet. Press 'a' to add one.", R::KIND.name)
            } else {
                format!("No {}s match the current search and filter.", R::KIND.name)
            };
            f.render_widget(
                Paragraph::new(message).style(Style::default().fg(Color::DarkGray)),
                chunks[1],
            );
        } else {
            self.table_state.select(Some(self.selected.min(rows.len() - 1)));
            let table = Table::new(rows, R::WIDTHS.iter().copied())
                .header(header)
                .column_spacing(1)
                .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
                .highlight_symbol("› ");
            f.render_stateful_widget(table, chunks[1], &mut self.table_state);
        }

        let footer = format!(
            "Page {} of {} • {} result{}",
            view.current_page,
            view.total_pages.max(1),
            view.total_matches,
            if view.total_matches == 1 { "" } else { "s" }
        );
        f.render_widget(
            Paragraph::new(footer).style(Style::default().fg(Color::Gray)),
            chunks[2],
        );

        match &self.mode {
            Mode::Form(session) => render_form_dialog(f, rect, session),
            Mode::ConfirmDelete { label, .. } => render_delete_confirmation_dialog(f, rect, R::KIND.name, label),
            Mode::Browse | Mode::Search { .. } => {}
        }
    }

    fn is_capturing_input(&self) -> bool {
        !matches!(self.mode, Mode::Browse)
    }

    fn key_hints(&self) -> &'static str {
        match self.mode {
            Mode::Browse => R::HINTS,
            Mode::Search { .. } => "type to search • Enter: keep • Esc: clear",
            Mode::Form(_) => "Tab: next field • Enter: save • Esc: cancel",
            Mode::ConfirmDelete { .. } => "Enter: delete • Esc: keep",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Product, User};
    use crate::seed;
    use crate::signals::AddTarget;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(page: &mut CollectionPage<User>, users: &mut CollectionManager<User>, text: &str) {
        for c in text.chars() {
            page.handle_key_events(key(KeyCode::Char(c)), users);
        }
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("user"), "User");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn search_mode_filters_live_and_esc_restores() {
        let mut users = CollectionManager::new(seed::users(chrono::Utc::now()));
        let mut page = CollectionPage::<User>::new(DisplayConfig::default());

        page.handle_key_events(key(KeyCode::Char('/')), &mut users);
        assert!(page.is_capturing_input());
        type_text(&mut page, &mut users, "jane");
        assert_eq!(users.matching_count(), 1);

        page.handle_key_events(key(KeyCode::Esc), &mut users);
        assert!(!page.is_capturing_input());
        assert_eq!(users.filter_state().search_text, "");
        assert_eq!(users.matching_count(), 8);
    }

    #[test]
    fn create_through_the_form() {
        let mut users = CollectionManager::new(seed::users(chrono::Utc::now()));
        let mut page = CollectionPage::<User>::new(DisplayConfig::default());

        page.handle_key_events(key(KeyCode::Char('a')), &mut users);
        assert!(page.form().is_some());
        type_text(&mut page, &mut users, "Ada Lovelace");
        page.handle_key_events(key(KeyCode::Tab), &mut users);
        type_text(&mut page, &mut users, "ada@example.com");

        let action = page.handle_key_events(key(KeyCode::Enter), &mut users);
        assert_eq!(action, Action::Info("✅ User Ada Lovelace created".to_string()));
        assert!(page.form().is_none());
        assert_eq!(users.len(), 9);
    }

    #[test]
    fn invalid_form_stays_open_with_errors() {
        let mut users = CollectionManager::new(seed::users(chrono::Utc::now()));
        let mut page = CollectionPage::<User>::new(DisplayConfig::default());

        page.handle_key_events(key(KeyCode::Char('a')), &mut users);
        let action = page.handle_key_events(key(KeyCode::Enter), &mut users);
        assert_eq!(action, Action::Error(ERROR_FIX_FIELDS.to_string()));
        let form = page.form().unwrap();
        assert!(form.errors().contains("name"));
        assert_eq!(users.len(), 8);
    }

    #[test]
    fn delete_asks_first() {
        let mut products = CollectionManager::new(seed::products());
        let mut page = CollectionPage::<Product>::new(DisplayConfig::default());

        page.handle_key_events(key(KeyCode::Char('d')), &mut products);
        assert_eq!(page.pending_delete(), Some(&RecordId::Int(1)));

        page.handle_key_events(key(KeyCode::Esc), &mut products);
        assert_eq!(products.len(), 12);

        page.handle_key_events(key(KeyCode::Char('d')), &mut products);
        page.handle_key_events(key(KeyCode::Enter), &mut products);
        assert_eq!(products.len(), 11);
        assert!(!products.contains(&RecordId::Int(1)));
    }

    #[test]
    fn paging_keys_move_between_pages() {
        let mut products = CollectionManager::new(seed::products());
        let mut page = CollectionPage::<Product>::new(DisplayConfig::default());

        page.handle_key_events(key(KeyCode::Right), &mut products);
        assert_eq!(products.filter_state().current_page, 2);
        page.handle_key_events(key(KeyCode::Right), &mut products);
        assert_eq!(products.filter_state().current_page, 2);
        page.handle_key_events(key(KeyCode::Left), &mut products);
        assert_eq!(products.filter_state().current_page, 1);
    }

    #[test]
    fn quick_add_opens_the_form_once() {
        let mut products = CollectionManager::new(seed::products());
        let mut page = CollectionPage::<Product>::new(DisplayConfig::default());
        let mut signals = AppSignals::new();

        signals.trigger_add(AddTarget::Product);
        page.on_mount(&mut products, &mut signals);
        assert!(page.form().is_some());

        page.handle_key_events(key(KeyCode::Esc), &mut products);
        page.on_mount(&mut products, &mut signals);
        assert!(page.form().is_none());
    }

    #[test]
    fn export_writes_current_matches() {
        let dir = std::env::temp_dir().join(format!("admindash-page-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut products = CollectionManager::new(seed::products());
        products.search("gaming");
        let mut page = CollectionPage::<Product>::new(DisplayConfig::default()).with_export_dir(&dir);

        let action = page.handle_key_events(key(KeyCode::Char('x')), &mut products);
        assert!(matches!(action, Action::Info(ref message) if message.starts_with("✅ Exported 3 records")));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
