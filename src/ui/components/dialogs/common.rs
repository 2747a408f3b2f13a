use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block(title: String, theme_color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Text with a block cursor drawn at character offset `cursor`
pub fn input_line(value: &str, cursor: Option<usize>) -> Line<'static> {
    let Some(cursor) = cursor else {
        return Line::from(Span::styled(value.to_string(), Style::default().fg(Color::White)));
    };
    let split = value.char_indices().nth(cursor).map_or(value.len(), |(i, _)| i);
    let (before, after) = value.split_at(split);
    let mut chars = after.chars();
    let under_cursor = chars.next().map_or_else(|| " ".to_string(), |c| c.to_string());

    Line::from(vec![
        Span::styled(before.to_string(), Style::default().fg(Color::White)),
        Span::styled(under_cursor, Style::default().fg(Color::Black).bg(Color::White)),
        Span::styled(chars.as_str().to_string(), Style::default().fg(Color::White)),
    ])
}

/// Creates an input field block with a visual cursor
pub fn create_input_paragraph(value: &str, cursor: Option<usize>, field_title: &str, focused: bool) -> Paragraph<'static> {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    Paragraph::new(input_line(value, cursor)).block(input_block)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save");
    pub const ENTER_CONFIRM: InstructionShortcut = ("Enter", Color::Green, " Delete");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ARROWS_CHOICE: InstructionShortcut = ("←/→", Color::Cyan, " Change");
}
