use crate::forms::{FieldKind, FormRecord, FormSession};
use crate::ui::components::dialogs::common::{
    create_dialog_block, create_instructions_paragraph, input_line, shortcuts, InstructionShortcut,
};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

const LABEL_WIDTH: usize = 14;

/// Two lines per field (input, then error or hint), plus the record-level
/// error line, the instructions and the borders.
fn dialog_height(field_count: usize) -> u16 {
    (field_count * 2 + 4) as u16
}

pub fn render_form_dialog<R: FormRecord>(f: &mut Frame, area: Rect, session: &FormSession<R>) {
    let fields = session.fields();
    let dialog_area = LayoutManager::centered_rect_lines(70, dialog_height(fields.len()), area);
    f.render_widget(Clear, dialog_area);

    let color = if session.is_edit() { Color::Yellow } else { Color::Green };
    let block = create_dialog_block(format!(" {} ", session.title()), color);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let mut lines = Vec::with_capacity(fields.len() * 2);
    for (index, field) in fields.iter().enumerate() {
        let focused = index == session.focus();
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if field.required.is_some() { "*" } else { "" };
        let label = format!("{:>width$} ", format!("{}{}", field.label, marker), width = LABEL_WIDTH);

        let value = session.values().get(field.key);
        let mut input = match (focused, field.kind) {
            (true, FieldKind::Choice(_)) => Line::from(Span::styled(
                format!("‹ {} ›", value),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            )),
            (true, _) => input_line(value, Some(session.cursor())),
            (false, _) => input_line(value, None),
        };
        input.spans.insert(0, Span::styled(label, label_style));
        lines.push(input);

        let padding = " ".repeat(LABEL_WIDTH + 1);
        let detail = match session.errors().get(field.key) {
            Some(message) => Span::styled(format!("{}{}", padding, message), Style::default().fg(Color::Red)),
            None if focused => Span::styled(
                format!("{}{}", padding, field.hint().unwrap_or("")),
                Style::default().fg(Color::DarkGray),
            ),
            None => Span::raw(""),
        };
        lines.push(Line::from(detail));
    }
    f.render_widget(Paragraph::new(lines), chunks[0]);

    // Errors not tied to a visible input (a record deleted meanwhile)
    let visible: Vec<&str> = fields.iter().map(|field| field.key).collect();
    let stray = session
        .errors()
        .iter()
        .filter(|(key, _)| !visible.contains(key))
        .map(|(_, message)| message)
        .collect::<Vec<_>>()
        .join("; ");
    f.render_widget(
        Paragraph::new(stray).style(Style::default().fg(Color::Red)),
        chunks[1],
    );

    let mut instructions: Vec<InstructionShortcut> = vec![shortcuts::TAB_NEXT, shortcuts::SEPARATOR];
    if matches!(session.focused_field().map(|field| field.kind), Some(FieldKind::Choice(_))) {
        instructions.extend([shortcuts::ARROWS_CHOICE, shortcuts::SEPARATOR]);
    }
    instructions.extend([shortcuts::ENTER_SAVE, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]);
    f.render_widget(create_instructions_paragraph(&instructions), chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::CollectionManager;
    use crate::entities::User;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn shows_field_errors_after_failed_submit() {
        let mut users = CollectionManager::<User>::default();
        let mut session = FormSession::create(&users);
        assert!(session.submit(&mut users).is_err());

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| render_form_dialog(f, f.area(), &session))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("New user"));
        assert!(text.contains("Full name is required"));
    }
}
