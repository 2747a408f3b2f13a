use crate::entities::{CalendarEvent, Notification, Order, Product, User};
use crate::signals::AppSignals;
use crate::store::Store;
use crate::ui::components::{
    CollectionPage, DashboardComponent, DialogComponent, KanbanComponent, SidebarComponent, StatusBar,
};
use crate::ui::core::{
    actions::{Action, DialogType, Page},
    event_handler::EventType,
    AppContext, Component, PageComponent,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

/// Run `$body` against the visible page, with `$page` bound to its component
/// and `$data` to the data it owns.
macro_rules! with_page {
    ($app:expr, |$page:ident, $data:ident| $body:expr) => {
        match $app.page {
            Page::Dashboard => {
                let ($page, $data) = (&mut $app.dashboard, &mut $app.store);
                $body
            }
            Page::Users => {
                let ($page, $data) = (&mut $app.users, &mut $app.store.users);
                $body
            }
            Page::Orders => {
                let ($page, $data) = (&mut $app.orders, &mut $app.store.orders);
                $body
            }
            Page::Products => {
                let ($page, $data) = (&mut $app.products, &mut $app.store.products);
                $body
            }
            Page::Notifications => {
                let ($page, $data) = (&mut $app.notifications, &mut $app.store.notifications);
                $body
            }
            Page::Calendar => {
                let ($page, $data) = (&mut $app.calendar, &mut $app.store.events);
                $body
            }
            Page::Kanban => {
                let ($page, $data) = (&mut $app.kanban, &mut $app.store.board);
                $body
            }
        }
    };
}

pub struct AppComponent {
    // Chrome
    sidebar: SidebarComponent,
    status_bar: StatusBar,
    dialog: DialogComponent,

    // Pages
    dashboard: DashboardComponent,
    users: CollectionPage<User>,
    orders: CollectionPage<Order>,
    products: CollectionPage<Product>,
    notifications: CollectionPage<Notification>,
    calendar: CollectionPage<CalendarEvent>,
    kanban: KanbanComponent,

    // Application state
    store: Store,
    signals: AppSignals,
    page: Page,
    context: AppContext,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(context: AppContext, store: Store, start: Page) -> Self {
        let display = context.display.clone();
        let mut app = Self {
            sidebar: SidebarComponent::new(start),
            status_bar: StatusBar::new(),
            dialog: DialogComponent::new(context.logger.clone()),
            dashboard: DashboardComponent::new(display.clone()),
            users: CollectionPage::new(display.clone()),
            orders: CollectionPage::new(display.clone()),
            products: CollectionPage::new(display.clone()),
            notifications: CollectionPage::new(display.clone()),
            calendar: CollectionPage::new(display),
            kanban: KanbanComponent::new(),
            store,
            signals: AppSignals::new(),
            page: start,
            context,
            should_quit: false,
        };
        app.navigate(start);
        app.sync_chrome();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn signals(&self) -> &AppSignals {
        &self.signals
    }

    pub fn sidebar(&self) -> &SidebarComponent {
        &self.sidebar
    }

    pub fn status_bar(&self) -> &StatusBar {
        &self.status_bar
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    fn page_is_capturing(&self) -> bool {
        match self.page {
            Page::Dashboard => self.dashboard.is_capturing_input(),
            Page::Users => self.users.is_capturing_input(),
            Page::Orders => self.orders.is_capturing_input(),
            Page::Products => self.products.is_capturing_input(),
            Page::Notifications => self.notifications.is_capturing_input(),
            Page::Calendar => self.calendar.is_capturing_input(),
            Page::Kanban => self.kanban.is_capturing_input(),
        }
    }

    fn page_hints(&self) -> &'static str {
        match self.page {
            Page::Dashboard => self.dashboard.key_hints(),
            Page::Users => self.users.key_hints(),
            Page::Orders => self.orders.key_hints(),
            Page::Products => self.products.key_hints(),
            Page::Notifications => self.notifications.key_hints(),
            Page::Calendar => self.calendar.key_hints(),
            Page::Kanban => self.kanban.key_hints(),
        }
    }

    fn page_key(&mut self, key: KeyEvent) -> Action {
        with_page!(self, |page, data| page.handle_key_events(key, data))
    }

    fn navigate(&mut self, page: Page) {
        if page != self.page {
            self.context.logger.log(format!("Navigate: {} -> {}", self.page.name(), page.name()));
        }
        self.page = page;
        let signals = &mut self.signals;
        with_page!(self, |component, data| component.on_mount(data, signals));
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.context.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => {
                self.context.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            _ => Action::None,
        }
    }

    /// Route a key: open dialog first, then a page that is reading input,
    /// then the sidebar, the page and finally the global shortcuts.
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.context.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }
        if self.page_is_capturing() {
            return self.page_key(key);
        }

        let sidebar_action = self.sidebar.handle_key_events(key);
        if !sidebar_action.is_none() {
            return sidebar_action;
        }
        let page_action = self.page_key(key);
        if !page_action.is_none() {
            return page_action;
        }
        self.handle_global_key(key)
    }

    /// Handle app-level actions that require the store or page switching
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Navigate(page) => {
                self.navigate(page);
                Action::None
            }
            Action::QuickAdd(target) => {
                self.context.logger.log(format!("Quick action: add {:?}", target));
                self.signals.trigger_add(target);
                let page = Page::for_add_target(target);
                self.sidebar.update(Action::Navigate(page));
                self.navigate(page);
                Action::None
            }
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            other => other,
        }
    }

    /// Refresh what the chrome shows about the data
    fn sync_chrome(&mut self) {
        self.sidebar
            .set_badge(Page::Notifications, self.store.notifications.unread_count());
        let hints = self.page_hints();
        self.status_bar.set_hints(hints);
    }

    /// Drop expired toasts. Returns true when the screen changed.
    pub fn on_tick(&mut self) -> bool {
        self.status_bar.expire()
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Render | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action);
        self.sync_chrome();

        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        let action = self.sidebar.update(action);
        self.status_bar.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (body, status) = LayoutManager::main_layout(rect);
        let (sidebar_area, content) = LayoutManager::sidebar_layout(body, self.context.sidebar_width);

        self.sidebar.render(f, sidebar_area);
        with_page!(self, |page, data| page.render(f, content, data));
        self.status_bar.render(f, status);

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
