use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use strum::Display;

use crate::{action::Action, components::Component, tui::Frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum UiMode {
    #[default]
    #[strum(serialize = "NORMAL")]
    Normal,
    #[strum(serialize = "EDIT")]
    Edit,
}

/// Bottom line: current mode plus the keys that apply in it.
#[derive(Debug, Default)]
pub struct StatusBar {
    mode: UiMode,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn hints(&self) -> &'static str {
        match self.mode {
            UiMode::Normal => {
                "Tab/↑↓ move  Enter edit  ←→ choose  1-5 rate  Ctrl-S submit  q quit"
            }
            UiMode::Edit => "Enter/Tab confirm  Esc cancel  Ctrl-S submit",
        }
    }

    fn line(&self) -> Line<'static> {
        let mode_color = match self.mode {
            UiMode::Normal => Color::Cyan,
            UiMode::Edit => Color::Yellow,
        };
        Line::from(vec![
            Span::styled(
                format!(" {} ", self.mode),
                Style::default()
                    .fg(Color::Black)
                    .bg(mode_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(self.hints(), Style::default().fg(Color::DarkGray)),
        ])
    }
}

impl Component for StatusBar {
    fn name(&self) -> &'static str {
        "status_bar"
    }

    fn height_constraint(&self) -> Constraint {
        Constraint::Length(1)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::EnterEditMode => self.mode = UiMode::Edit,
            // submit commits a pending edit
            Action::ExitEditMode | Action::Submit => self.mode = UiMode::Normal,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        f.render_widget(Paragraph::new(self.line()), area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_follows_edit_actions() {
        let mut bar = StatusBar::new();
        assert_eq!(bar.mode(), UiMode::Normal);
        bar.update(Action::EnterEditMode).unwrap();
        assert_eq!(bar.mode(), UiMode::Edit);
        assert!(bar.hints().contains("Esc cancel"));
        bar.update(Action::Submit).unwrap();
        assert_eq!(bar.mode(), UiMode::Normal);
        assert_eq!(UiMode::Edit.to_string(), "EDIT");
    }
}
