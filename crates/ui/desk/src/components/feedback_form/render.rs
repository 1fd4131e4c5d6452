use color_eyre::Result;
use feedback_form::{Department, FieldKey};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{FeedbackForm, FormField, FormFieldKind};
use crate::{components::submissions::render_submissions, tui::Frame};

pub const CARD_TITLE: &str = "Share Your Feedback";
pub const CARD_DESCRIPTION: &str = "Help us improve our workplace";
pub const SUBMIT_LABEL: &str = "[ Submit Feedback ]";

const CURSOR: char = '▏';
const VALUE_INDENT: &str = "  ";

/// Draw the form card and, once something was submitted, the table below it.
pub fn render_feedback_form(form: &FeedbackForm, f: &mut Frame<'_>, area: Rect) -> Result<()> {
    if area.width < 10 || area.height < 5 {
        return Ok(());
    }

    let lines = form_lines(form, area.width.saturating_sub(2));
    let card_height = (lines.len() as u16).saturating_add(2).min(area.height);

    let log = form.controller().submissions();
    let chunks = if log.is_empty() {
        Layout::vertical([Constraint::Length(card_height), Constraint::Fill(1)]).split(area)
    } else {
        Layout::vertical([
            Constraint::Length(card_height),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area)
    };

    let card = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {CARD_TITLE} "))
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(card, chunks[0]);

    if !log.is_empty() {
        render_submissions(f, chunks[2], log);
    }
    Ok(())
}

/// Card content for an inner width of `width` cells.
pub fn form_lines(form: &FeedbackForm, width: u16) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = vec![
        Line::from(Span::styled(
            CARD_DESCRIPTION,
            Style::default().fg(Color::Gray),
        )),
        Line::raw(""),
    ];

    for (idx, field) in form.fields().iter().enumerate() {
        let focused = idx == form.focused_index();

        let marker = if focused { "▸ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", field.label()),
            Style::default().fg(Color::White).add_modifier(if focused {
                Modifier::BOLD
            } else {
                Modifier::empty()
            }),
        )));

        lines.extend(value_lines(form, field, focused, width));

        if let Some(msg) = form.controller().errors().message(field.key) {
            lines.push(Line::from(Span::styled(
                format!("{VALUE_INDENT}{msg}"),
                Style::default().fg(Color::Red),
            )));
        }

        lines.push(Line::raw(""));
    }

    let button_style = if form.is_submit_focused() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    lines.push(Line::from(Span::styled(SUBMIT_LABEL, button_style)).alignment(Alignment::Center));
    lines
}

fn value_lines(
    form: &FeedbackForm,
    field: &FormField,
    focused: bool,
    width: u16,
) -> Vec<Line<'static>> {
    let value = form.controller().value(field.key);
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let placeholder_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    match &field.kind {
        FormFieldKind::Text | FormFieldKind::TextArea { .. } => {
            let editing = focused && form.is_editing();
            let (text, style) = if editing {
                (
                    with_cursor(form.input_value(), form.input_cursor()),
                    value_style,
                )
            } else if value.is_empty() {
                (field.placeholder().to_string(), placeholder_style)
            } else {
                (value.to_string(), value_style)
            };
            let rows = field.value_rows() as usize;
            let wrap_width = width.saturating_sub(VALUE_INDENT.len() as u16).max(1) as usize;
            let mut chunks = wrap_tail(&text, wrap_width, rows);
            chunks.resize(rows, String::new());
            chunks
                .into_iter()
                .map(|chunk| {
                    Line::from(vec![Span::raw(VALUE_INDENT), Span::styled(chunk, style)])
                })
                .collect()
        }
        FormFieldKind::Select { .. } => {
            let (text, style) = if value.is_empty() {
                (field.placeholder(), placeholder_style)
            } else {
                (display_value(field.key, value), value_style)
            };
            vec![Line::from(vec![
                Span::raw(VALUE_INDENT),
                Span::styled(format!("◀ {text} ▶"), style),
            ])]
        }
        FormFieldKind::Radio { options } => {
            let mut spans = vec![Span::raw(VALUE_INDENT)];
            for option in options {
                let selected = option == value;
                let mark = if selected { "(•)" } else { "( )" };
                let style = if selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else if focused {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::Gray)
                };
                spans.push(Span::styled(format!("{mark} {option}"), style));
                spans.push(Span::raw("   "));
            }
            vec![Line::from(spans)]
        }
    }
}

/// Stored value → on-screen text. Departments are stored by code and shown by
/// label.
pub fn display_value(key: FieldKey, value: &str) -> &str {
    match key {
        FieldKey::Department => Department::label_for(value),
        _ => value,
    }
}

/// Insert the cursor glyph before the `cursor`-th character.
pub fn with_cursor(value: &str, cursor: usize) -> String {
    let mut out = String::with_capacity(value.len() + CURSOR.len_utf8());
    let mut inserted = false;
    for (i, c) in value.chars().enumerate() {
        if i == cursor {
            out.push(CURSOR);
            inserted = true;
        }
        out.push(c);
    }
    if !inserted {
        out.push(CURSOR);
    }
    out
}

/// Hard-wrap `text` into `width`-character rows and keep the last `rows`, so
/// the end of a long entry (where typing happens) stays visible.
pub fn wrap_tail(text: &str, width: usize, rows: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() || width == 0 {
        return vec![String::new()];
    }
    let wrapped: Vec<String> = chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect();
    let skip = wrapped.len().saturating_sub(rows.max(1));
    wrapped.into_iter().skip(skip).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Component;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(form: &mut FeedbackForm, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                form.draw(f, f.area()).unwrap();
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn press(form: &mut FeedbackForm, code: KeyCode) {
        form.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    #[test]
    fn cursor_glyph_position() {
        assert_eq!(with_cursor("", 0), "▏");
        assert_eq!(with_cursor("abc", 1), "a▏bc");
        assert_eq!(with_cursor("abc", 3), "abc▏");
        assert_eq!(with_cursor("äöü", 2), "äö▏ü");
    }

    #[test]
    fn wrap_keeps_the_tail() {
        assert_eq!(wrap_tail("", 4, 3), vec![String::new()]);
        assert_eq!(wrap_tail("abcdefghij", 4, 3), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_tail("abcdefghij", 4, 2), vec!["efgh", "ij"]);
        assert_eq!(wrap_tail("abc", 10, 3), vec!["abc"]);
    }

    #[test]
    fn department_is_rendered_by_label() {
        assert_eq!(display_value(FieldKey::Department, "HR"), "Human Resources");
        assert_eq!(display_value(FieldKey::Name, "HR"), "HR");
    }

    #[test]
    fn empty_form_shows_placeholders_and_no_table() {
        let mut form = FeedbackForm::default();
        let screen = draw(&mut form, 80, 40);
        assert!(screen.contains(CARD_TITLE));
        assert!(screen.contains("Enter your name"));
        assert!(screen.contains("Select department"));
        assert!(screen.contains("Share your thoughts with us"));
        assert!(screen.contains("Submit Feedback"));
        assert!(!screen.contains("Recent Feedback"));
    }

    #[test]
    fn errors_render_inline_after_failed_submit() {
        let mut form = FeedbackForm::default();
        form.update(crate::action::Action::Submit).unwrap();
        let screen = draw(&mut form, 80, 40);
        assert!(screen.contains("Please enter your name"));
        assert!(screen.contains("Please select your department"));
        assert!(screen.contains("Feedback is required"));
        assert!(screen.contains("Please select a rating"));
    }

    #[test]
    fn table_appears_after_first_submission() {
        let mut form = FeedbackForm::default();
        press(&mut form, KeyCode::Enter);
        for c in "Alice".chars() {
            press(&mut form, KeyCode::Char(c));
        }
        press(&mut form, KeyCode::Enter);
        press(&mut form, KeyCode::Down);
        press(&mut form, KeyCode::Right);
        press(&mut form, KeyCode::Right);
        press(&mut form, KeyCode::Down);
        press(&mut form, KeyCode::Enter);
        for c in "Great tools".chars() {
            press(&mut form, KeyCode::Char(c));
        }
        press(&mut form, KeyCode::Enter);
        press(&mut form, KeyCode::Down);
        press(&mut form, KeyCode::Char('5'));
        form.update(crate::action::Action::Submit).unwrap();

        let screen = draw(&mut form, 100, 45);
        assert!(screen.contains("Recent Feedback"));
        assert!(screen.contains("Alice"));
        assert!(screen.contains("Information Technology"));
        assert!(screen.contains("Great tools"));
        // the form itself is back to placeholders
        assert!(screen.contains("Enter your name"));
    }
}
