use admindash::collection::RecordId;
use admindash::kanban::default_columns;
use admindash::ui::core::{AppContext, EventType, Page};
use admindash::ui::AppComponent;
use admindash::Store;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn launch(start: Page) -> AppComponent {
    let store = Store::seeded(Local::now(), default_columns());
    AppComponent::new(AppContext::default(), store, start)
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap();
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn toast(app: &AppComponent) -> Option<String> {
    app.status_bar().current_toast().map(|t| t.message.clone())
}

#[test]
fn test_digits_switch_pages() {
    let mut app = launch(Page::Dashboard);
    assert_eq!(app.page(), Page::Dashboard);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.page(), Page::Orders);

    press(&mut app, KeyCode::Char('7'));
    assert_eq!(app.page(), Page::Kanban);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.page(), Page::Dashboard);
}

#[test]
fn test_quit_and_ctrl_c() {
    let mut app = launch(Page::Users);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = launch(Page::Kanban);
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
        .unwrap();
    assert!(app.should_quit());
}

#[test]
fn test_help_dialog_takes_keys_until_closed() {
    let mut app = launch(Page::Dashboard);
    press(&mut app, KeyCode::Char('?'));
    assert!(app.is_dialog_visible());

    // Keys go to the dialog, not the sidebar
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.page(), Page::Dashboard);

    press(&mut app, KeyCode::Esc);
    assert!(!app.is_dialog_visible());
    assert!(!app.should_quit());
}

#[test]
fn test_quick_add_opens_the_user_form() {
    let mut app = launch(Page::Dashboard);
    press(&mut app, KeyCode::Char('u'));
    assert_eq!(app.page(), Page::Users);
    assert!(!app.signals().is_add_pending(admindash::signals::AddTarget::User));

    type_text(&mut app, "Ada Lovelace");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "ada@example.com");
    press(&mut app, KeyCode::Enter);

    assert!(!app.should_quit());
    assert_eq!(app.store().users.len(), 9);
    assert!(app.store().users.contains(&RecordId::Int(9)));
    assert_eq!(toast(&app).as_deref(), Some("✅ User Ada Lovelace created"));
}

#[test]
fn test_invalid_quick_add_keeps_the_form_open() {
    let mut app = launch(Page::Dashboard);
    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.page(), Page::Products);

    press(&mut app, KeyCode::Enter);
    assert_eq!(toast(&app).as_deref(), Some("❌ Please fix the highlighted fields"));
    assert_eq!(app.store().products.len(), 12);

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_opening_a_notification_updates_the_badge() {
    let mut app = launch(Page::Dashboard);
    assert_eq!(app.sidebar().badge(Page::Notifications), Some(5));

    press(&mut app, KeyCode::Char('5'));
    assert_eq!(app.page(), Page::Notifications);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.page(), Page::Orders);
    assert_eq!(app.sidebar().badge(Page::Notifications), Some(4));
    assert!(app.store().notifications.get(&RecordId::Int(1)).unwrap().read);
}

#[test]
fn test_keyboard_drag_moves_a_card() {
    let mut app = launch(Page::Kanban);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    let task = app.store().board.task(&RecordId::Int(1)).unwrap();
    assert_eq!(task.status, "in-progress");
    assert!(app.store().board.drag_state().is_none());
    assert_eq!(toast(&app).as_deref(), Some("✅ Task moved to In Progress"));
}

#[test]
fn test_search_captures_digits() {
    let mut app = launch(Page::Users);
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "2");
    assert_eq!(app.page(), Page::Users);
    assert_eq!(app.store().users.filter_state().search_text, "2");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.store().users.filter_state().search_text, "");
}
