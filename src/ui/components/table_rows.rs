//! How each record kind is laid out as a table row.

use chrono::{DateTime, Local, NaiveDate, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Cell,
};

use crate::collection::{CollectionManager, RecordId};
use crate::config::DisplayConfig;
use crate::constants::{SUCCESS_ALL_READ, SUCCESS_CLEARED};
use crate::entities::{
    CalendarEvent, EventKind, Money, Notification, NotificationKind, Order, OrderStatus, Priority, Product,
    StockLevel, User, UserStatus,
};
use crate::forms::FormRecord;
use crate::signals::AddTarget;
use crate::ui::core::{Action, Page};
use crate::utils::datetime::format_relative_time;

/// Everything a row needs besides the record itself
pub struct RowContext<'a> {
    pub display: &'a DisplayConfig,
    pub now: DateTime<Utc>,
}

impl<'a> RowContext<'a> {
    pub fn new(display: &'a DisplayConfig) -> Self {
        Self { display, now: Utc::now() }
    }

    fn date(&self, date: NaiveDate) -> String {
        date.format(&self.display.date_format).to_string()
    }

    fn money(&self, amount: f64) -> String {
        Money(amount, &self.display.currency_symbol).to_string()
    }

    fn local(&self, at: DateTime<Utc>) -> String {
        let local = at.with_timezone(&Local);
        format!(
            "{} {}",
            local.format(&self.display.date_format),
            local.format(&self.display.time_format)
        )
    }
}

/// A record kind that has its own list page
pub trait TableRecord: FormRecord {
    const PAGE: Page;
    const HEADERS: &'static [&'static str];
    const WIDTHS: &'static [Constraint];
    /// Dashboard quick action that opens this page's create dialog
    const ADD_TARGET: Option<AddTarget> = None;
    const HINTS: &'static str = "/: search • f: filter • a: add • e: edit • d: delete • x: export";

    fn cells(&self, ctx: &RowContext) -> Vec<Cell<'static>>;

    /// Short name for confirmations and toasts
    fn label(&self) -> String;

    fn row_style(&self) -> Style {
        Style::default()
    }

    /// Page-specific keys, tried before the generic ones
    fn handle_extra_key(
        _key: KeyEvent,
        _selected: Option<&RecordId>,
        _manager: &mut CollectionManager<Self>,
    ) -> Option<Action> {
        None
    }
}

fn badge(text: impl Into<String>, color: Color) -> Cell<'static> {
    Cell::from(Span::styled(text.into(), Style::default().fg(color)))
}

pub(crate) fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

impl TableRecord for User {
    const PAGE: Page = Page::Users;
    const HEADERS: &'static [&'static str] = &["ID", "", "Name", "Email", "Role", "Status", "Joined", "Last login"];
    const WIDTHS: &'static [Constraint] = &[
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Fill(2),
        Constraint::Fill(3),
        Constraint::Length(7),
        Constraint::Length(9),
        Constraint::Length(11),
        Constraint::Length(16),
    ];
    const ADD_TARGET: Option<AddTarget> = Some(AddTarget::User);

    fn cells(&self, ctx: &RowContext) -> Vec<Cell<'static>> {
        let status_color = match self.status {
            UserStatus::Active => Color::Green,
            UserStatus::Inactive => Color::DarkGray,
            UserStatus::Pending => Color::Yellow,
        };
        vec![
            Cell::from(self.id.to_string()),
            badge(self.initials(), Color::Cyan),
            Cell::from(self.name.clone()),
            Cell::from(self.email.clone()),
            Cell::from(self.role.as_str()),
            badge(self.status.as_str(), status_color),
            Cell::from(ctx.date(self.joined_on)),
            Cell::from(
                self.last_login
                    .map_or_else(|| "Never".to_string(), |at| format_relative_time(at, ctx.now)),
            ),
        ]
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl TableRecord for Order {
    const PAGE: Page = Page::Orders;
    const HEADERS: &'static [&'static str] = &["Order", "Customer", "Email", "Items", "Total", "Status", "Priority", "Created"];
    const WIDTHS: &'static [Constraint] = &[
        Constraint::Length(8),
        Constraint::Fill(2),
        Constraint::Fill(3),
        Constraint::Length(5),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(8),
        Constraint::Length(17),
    ];
    const ADD_TARGET: Option<AddTarget> = Some(AddTarget::Order);

    fn cells(&self, ctx: &RowContext) -> Vec<Cell<'static>> {
        let status_color = match self.status {
            OrderStatus::Pending => Color::Yellow,
            OrderStatus::Processing => Color::Blue,
            OrderStatus::Shipped => Color::Magenta,
            OrderStatus::Completed => Color::Green,
            OrderStatus::Cancelled => Color::Red,
        };
        vec![
            Cell::from(self.id.to_string()),
            Cell::from(self.customer.clone()),
            Cell::from(self.customer_email.clone()),
            Cell::from(self.item_count().to_string()),
            Cell::from(ctx.money(self.total)),
            badge(self.status.as_str(), status_color),
            badge(self.priority.as_str(), priority_color(self.priority)),
            Cell::from(ctx.local(self.created_at)),
        ]
    }

    fn label(&self) -> String {
        format!("{} ({})", self.id, self.customer)
    }
}

impl TableRecord for Product {
    const PAGE: Page = Page::Products;
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Category", "Price", "Stock", "Level", "Rating"];
    const WIDTHS: &'static [Constraint] = &[
        Constraint::Length(4),
        Constraint::Fill(3),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(6),
        Constraint::Length(13),
        Constraint::Length(6),
    ];
    const ADD_TARGET: Option<AddTarget> = Some(AddTarget::Product);

    fn cells(&self, ctx: &RowContext) -> Vec<Cell<'static>> {
        let level = self.stock_level();
        let level_color = match level {
            StockLevel::OutOfStock => Color::Red,
            StockLevel::Low => Color::Yellow,
            StockLevel::InStock => Color::Green,
        };
        vec![
            Cell::from(self.id.to_string()),
            Cell::from(self.name.clone()),
            Cell::from(self.category.as_str()),
            Cell::from(ctx.money(self.price)),
            Cell::from(self.stock.to_string()),
            badge(level.as_str(), level_color),
            Cell::from(format!("★ {:.1}", self.rating)),
        ]
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl TableRecord for Notification {
    const PAGE: Page = Page::Notifications;
    const HEADERS: &'static [&'static str] = &["", "Title", "Type", "Message", "Received"];
    const WIDTHS: &'static [Constraint] = &[
        Constraint::Length(1),
        Constraint::Fill(2),
        Constraint::Length(8),
        Constraint::Fill(5),
        Constraint::Length(16),
    ];
    const HINTS: &'static str =
        "Enter: open • r: read • R: all read • C: clear • /: search • f: filter • a: add • e: edit • d: delete";

    fn cells(&self, ctx: &RowContext) -> Vec<Cell<'static>> {
        let kind_color = match self.kind {
            NotificationKind::Order => Color::Blue,
            NotificationKind::User => Color::Green,
            NotificationKind::Alert => Color::Red,
            NotificationKind::Report => Color::Magenta,
            NotificationKind::Reminder => Color::Yellow,
        };
        vec![
            badge(if self.read { " " } else { "●" }, Color::Cyan),
            Cell::from(self.title.clone()),
            badge(self.kind.as_str(), kind_color),
            Cell::from(self.message.clone()),
            Cell::from(format_relative_time(self.created_at, ctx.now)),
        ]
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn row_style(&self) -> Style {
        if self.read {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }

    fn handle_extra_key(
        key: KeyEvent,
        selected: Option<&RecordId>,
        manager: &mut CollectionManager<Self>,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Enter => Some(match selected.map(|id| manager.open(id)) {
                Some(Ok(Some(link))) => Action::Navigate(Page::for_link(link)),
                Some(Ok(None)) => Action::None,
                Some(Err(err)) => Action::Error(format!("❌ {}", err)),
                None => Action::None,
            }),
            KeyCode::Char('r') => Some(match selected.map(|id| manager.mark_read(id)) {
                Some(Err(err)) => Action::Error(format!("❌ {}", err)),
                _ => Action::None,
            }),
            KeyCode::Char('R') => {
                manager.mark_all_read();
                Some(Action::Info(SUCCESS_ALL_READ.to_string()))
            }
            KeyCode::Char('C') => {
                manager.clear();
                Some(Action::Info(SUCCESS_CLEARED.to_string()))
            }
            _ => None,
        }
    }
}

impl TableRecord for CalendarEvent {
    const PAGE: Page = Page::Calendar;
    const HEADERS: &'static [&'static str] = &["ID", "Title", "Type", "Date", "Time", "Location", "Attendees"];
    const WIDTHS: &'static [Constraint] = &[
        Constraint::Length(4),
        Constraint::Fill(2),
        Constraint::Length(12),
        Constraint::Length(11),
        Constraint::Length(13),
        Constraint::Fill(2),
        Constraint::Fill(2),
    ];

    fn cells(&self, ctx: &RowContext) -> Vec<Cell<'static>> {
        let kind_color = match self.kind {
            EventKind::Meeting => Color::Blue,
            EventKind::Deadline => Color::Red,
            EventKind::Presentation => Color::Magenta,
            EventKind::Workshop => Color::Green,
        };
        let time = format!(
            "{}-{}",
            self.start.format(&ctx.display.time_format),
            self.end.format(&ctx.display.time_format)
        );
        vec![
            Cell::from(self.id.to_string()),
            Cell::from(self.title.clone()),
            badge(self.kind.as_str(), kind_color),
            Cell::from(ctx.date(self.start.date())),
            Cell::from(time),
            Cell::from(self.location.clone()),
            Cell::from(self.attendees.join(", ")),
        ]
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn row_style(&self) -> Style {
        if self.end < Local::now().naive_local() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crossterm::event::KeyModifiers;

    #[test]
    fn headers_match_widths() {
        assert_eq!(User::HEADERS.len(), User::WIDTHS.len());
        assert_eq!(Order::HEADERS.len(), Order::WIDTHS.len());
        assert_eq!(Product::HEADERS.len(), Product::WIDTHS.len());
        assert_eq!(Notification::HEADERS.len(), Notification::WIDTHS.len());
        assert_eq!(CalendarEvent::HEADERS.len(), CalendarEvent::WIDTHS.len());
    }

    #[test]
    fn opening_a_notification_follows_its_link() {
        let mut inbox = CollectionManager::new(seed::notifications(Utc::now()));
        let id = RecordId::Int(1);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);

        let action = Notification::handle_extra_key(enter, Some(&id), &mut inbox);
        assert_eq!(action, Some(Action::Navigate(Page::Orders)));
        assert!(inbox.get(&id).unwrap().read);
    }

    #[test]
    fn plain_keys_are_left_to_the_page() {
        let mut inbox = CollectionManager::new(seed::notifications(Utc::now()));
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(Notification::handle_extra_key(key, None, &mut inbox), None);
    }
}
