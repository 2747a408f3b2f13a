//! Dashboard page: headline figures, tasks per column, upcoming events and
//! quick actions that jump to another page with its create dialog open.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::config::DisplayConfig;
use crate::constants::UPCOMING_EVENTS_LIMIT;
use crate::dashboard::DashboardSummary;
use crate::entities::Money;
use crate::signals::AddTarget;
use crate::store::Store;
use crate::ui::core::{Action, PageComponent};
use crate::utils::datetime::format_human_date_from;

pub struct DashboardComponent {
    display: DisplayConfig,
}

impl DashboardComponent {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }

    fn card(title: &str, value: String, detail: String, color: Color) -> Paragraph<'static> {
        Paragraph::new(vec![
            Line::from(Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(detail, Style::default().fg(Color::Gray))),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" {} ", title))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
    }

    fn render_cards(&self, f: &mut Frame, rect: Rect, summary: &DashboardSummary) {
        let areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 5); 5])
            .split(rect);

        let cards = [
            Self::card(
                "Users",
                summary.users.to_string(),
                format!("{} active", summary.active_users),
                Color::Cyan,
            ),
            Self::card(
                "Orders",
                summary.orders.to_string(),
                format!("{} open", summary.open_orders),
                Color::Blue,
            ),
            Self::card(
                "Revenue",
                Money(summary.revenue, &self.display.currency_symbol).to_string(),
                "excluding cancelled".to_string(),
                Color::Green,
            ),
            Self::card(
                "Products",
                summary.products.to_string(),
                format!("{} low on stock", summary.low_stock),
                if summary.low_stock > 0 { Color::Yellow } else { Color::Green },
            ),
            Self::card(
                "Notifications",
                summary.unread_notifications.to_string(),
                "unread".to_string(),
                if summary.unread_notifications > 0 { Color::Magenta } else { Color::Gray },
            ),
        ];
        for (card, area) in cards.into_iter().zip(areas.iter()) {
            f.render_widget(card, *area);
        }
    }

    fn render_tasks(f: &mut Frame, rect: Rect, summary: &DashboardSummary) {
        let bars: Vec<Bar> = summary
            .tasks_per_column
            .iter()
            .map(|column| {
                Bar::default()
                    .label(Line::from(column.title.clone()))
                    .value(column.count as u64)
                    .style(Style::default().fg(Color::Cyan))
            })
            .collect();

        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Tasks per column ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(9)
            .bar_gap(2)
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
        f.render_widget(chart, rect);
    }

    fn render_events(&self, f: &mut Frame, rect: Rect, summary: &DashboardSummary) {
        let today = Local::now().date_naive();
        let items: Vec<ListItem> = if summary.upcoming_events.is_empty() {
            vec![ListItem::new(Span::styled(
                "Nothing scheduled",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            summary
                .upcoming_events
                .iter()
                .map(|event| {
                    let when = format!(
                        "{} {}",
                        format_human_date_from(event.start.date(), today),
                        event.start.format(&self.display.time_format)
                    );
                    let mut spans = vec![
                        Span::styled(format!("{:<18}", when), Style::default().fg(Color::Yellow)),
                        Span::styled(event.title.clone(), Style::default().fg(Color::White)),
                    ];
                    if !event.location.is_empty() {
                        spans.push(Span::styled(
                            format!(" @ {}", event.location),
                            Style::default().fg(Color::Gray),
                        ));
                    }
                    ListItem::new(Line::from(spans))
                })
                .collect()
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Upcoming events ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(list, rect);
    }

    fn render_quick_actions(f: &mut Frame, rect: Rect) {
        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(vec![Span::styled("u", key_style), Span::raw("  add a user")]),
            Line::from(vec![Span::styled("o", key_style), Span::raw("  add an order")]),
            Line::from(vec![Span::styled("p", key_style), Span::raw("  add a product")]),
        ];
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Quick actions ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(paragraph, rect);
    }
}

impl PageComponent for DashboardComponent {
    type Data = Store;

    fn handle_key_events(&mut self, key: KeyEvent, _store: &mut Store) -> Action {
        match key.code {
            KeyCode::Char('u') => Action::QuickAdd(AddTarget::User),
            KeyCode::Char('o') => Action::QuickAdd(AddTarget::Order),
            KeyCode::Char('p') => Action::QuickAdd(AddTarget::Product),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, store: &Store) {
        let summary = DashboardSummary::collect(store, Local::now().naive_local(), UPCOMING_EVENTS_LIMIT);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(8), Constraint::Length(9)])
            .split(rect);
        self.render_cards(f, rows[0], &summary);
        Self::render_tasks(f, rows[1], &summary);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(24)])
            .split(rows[2]);
        self.render_events(f, bottom[0], &summary);
        Self::render_quick_actions(f, bottom[1]);
    }

    fn key_hints(&self) -> &'static str {
        "u: add user • o: add order • p: add product • 1-7: pages"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kanban::default_columns;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn quick_action_keys() {
        let mut page = DashboardComponent::new(DisplayConfig::default());
        let mut store = Store::default();
        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);

        assert_eq!(page.handle_key_events(key('u'), &mut store), Action::QuickAdd(AddTarget::User));
        assert_eq!(page.handle_key_events(key('o'), &mut store), Action::QuickAdd(AddTarget::Order));
        assert_eq!(page.handle_key_events(key('p'), &mut store), Action::QuickAdd(AddTarget::Product));
        assert_eq!(page.handle_key_events(key('z'), &mut store), Action::None);
    }

    #[test]
    fn renders_headline_figures() {
        let store = Store::seeded(Local::now(), default_columns());
        let mut page = DashboardComponent::new(DisplayConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();

        terminal.draw(|f| page.render(f, f.area(), &store)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Users"));
        assert!(text.contains("Upcoming events"));
        assert!(text.contains("Quick actions"));
    }
}
