use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{components::Component, tui::Frame};

pub const TITLE: &str = "Company Feedback System";
pub const SUBTITLE: &str = "Your feedback helps us improve our workplace";

/// Static page header: title plus subtitle, bottom rule.
#[derive(Debug, Default)]
pub struct Banner;

impl Banner {
    pub fn new() -> Self {
        Self
    }

    pub fn height(&self) -> u16 {
        3
    }
}

impl Component for Banner {
    fn name(&self) -> &'static str {
        "banner"
    }

    fn height_constraint(&self) -> Constraint {
        Constraint::Length(self.height())
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let lines = vec![
            Line::from(Span::styled(
                TITLE,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
        ];
        let header = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(header, area);
        Ok(())
    }
}
