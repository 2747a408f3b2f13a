use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const HELP_TEXT: &str = r"
ADMIN DASHBOARD
===============

PAGES
-----
1-7         Dashboard, Users, Orders, Products, Notifications, Calendar, Kanban
Tab         Next page
Shift+Tab   Previous page

LISTS
-----
↑/↓ j/k     Select row
←/→         Previous / next page of results
/           Search (Enter keeps the text, Esc clears it)
f           Cycle the status / category filter
a           Add a record
e           Edit the selected record
d           Delete the selected record (with confirmation)
x           Export the current results as JSON

NOTIFICATIONS
-------------
Enter       Open (marks as read and jumps to the linked page)
r           Mark as read
R           Mark all as read
C           Clear all

KANBAN
------
←/→         Select column (or move the card while carrying it)
↑/↓         Select card
Space       Pick up the selected card
Enter       Drop the card on the highlighted column
Esc         Put the card back
a / e / d   Add to the column / edit / delete
f           Cycle the priority filter

DASHBOARD
---------
u / o / p   Add a user / order / product

FORMS
-----
Tab         Next field (Shift+Tab previous)
←/→         Move the cursor, or change a choice field
Enter       Save
Esc         Cancel without saving

GENERAL
-------
?           Toggle this help
G           Show logs
q           Quit (Ctrl+C also quits)
";

/// Scrollable text box with a scrollbar when the content overflows
fn render_scrollable_text(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, dialog_area);

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = dialog_area.height.saturating_sub(2) as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, dialog_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, dialog_area, scrollbar_state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) {
    render_scrollable_text(f, area, DIALOG_TITLE_HELP, HELP_TEXT, scroll_offset, scrollbar_state);
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: &Logger,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let logs = logger.get_logs();
    let content = if logs.is_empty() {
        "No logs yet".to_string()
    } else {
        logs.join("\n")
    };
    render_scrollable_text(f, area, DIALOG_TITLE_LOGS, &content, scroll_offset, scrollbar_state);
}

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, item_type: &str, item_label: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 6, area);
    f.render_widget(Clear, dialog_area);

    let message = format!("Delete {} \"{}\"?", item_type, item_label);
    let instructions = "Press Enter to confirm, Esc to cancel";

    let block = Block::default()
        .borders(Borders::ALL)
        .title("⚠ Confirm Delete")
        .style(Style::default().fg(Color::Red));

    let inner = block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(inner);

    let message_paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: true });

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(instructions_paragraph, chunks[1]);
}
