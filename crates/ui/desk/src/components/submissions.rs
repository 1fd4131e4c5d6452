use feedback_form::{Department, SubmissionLog};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    symbols,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::tui::Frame;

pub const TABLE_TITLE: &str = "Recent Feedback";
pub const HEADERS: [&str; 4] = ["Name", "Department", "Feedback", "Rating"];

/// Rows are drawn in submission order; when they do not fit, the newest stay
/// on screen.
pub fn render_submissions(f: &mut Frame<'_>, area: Rect, log: &SubmissionLog) {
    // borders plus header row
    let body_height = area.height.saturating_sub(3) as usize;
    let window = visible_window(log.len(), body_height);

    let rows = log.entries()[window].iter().map(|entry| {
        Row::new(vec![
            Cell::from(entry.name().to_string()),
            Cell::from(Department::label_for(entry.department()).to_string()),
            Cell::from(entry.feedback().to_string()),
            Cell::from(entry.rating().to_string()),
        ])
    });

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Fill(1),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(
        Block::default()
            .title(format!(" {TABLE_TITLE} ({}) ", log.len()))
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    f.render_widget(table, area);
}

/// Index range of the rows that fit into `height` lines, anchored at the end.
pub fn visible_window(len: usize, height: usize) -> std::ops::Range<usize> {
    len.saturating_sub(height)..len
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedback_form::FieldValues;
    use ratatui::{backend::TestBackend, Terminal};

    fn entry(name: &str, department: &str) -> FieldValues {
        FieldValues {
            name: name.into(),
            department: department.into(),
            feedback: "ok".into(),
            rating: "3".into(),
        }
    }

    fn screen(log: &SubmissionLog, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, height)).unwrap();
        terminal
            .draw(|f| render_submissions(f, f.area(), log))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn window_keeps_newest_rows() {
        assert_eq!(visible_window(0, 5), 0..0);
        assert_eq!(visible_window(3, 5), 0..3);
        assert_eq!(visible_window(8, 5), 3..8);
        assert_eq!(visible_window(4, 0), 4..4);
    }

    #[test]
    fn table_shows_labels_and_latest_entries() {
        let mut log = SubmissionLog::default();
        log.append(entry("Alice", "HR"), 1);
        log.append(entry("Bob", "Sales"), 2);
        log.append(entry("Carol", "IT"), 3);

        // room for two body rows only
        let text = screen(&log, 5);
        assert!(text.contains("Recent Feedback (3)"));
        assert!(text.contains("Department"));
        assert!(!text.contains("Alice"));
        assert!(text.contains("Bob"));
        assert!(text.contains("Carol"));
        assert!(text.contains("Information Technology"));
    }
}
