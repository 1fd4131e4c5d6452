use color_eyre::Result;
use ratatui::layout::{Rect, Size};
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    action::Action,
    config::Config,
    tui::{Event, EventResponse, Frame},
};

mod feedback;

pub use feedback::FeedbackPage;

/// A `Page` composes multiple `Component`s and exposes a lifecycle similar to the
/// `Component` trait but at the page level.
pub trait Page {
    fn name(&self) -> &str;

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        let _ = tx;
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        let _ = config;
        Ok(())
    }

    fn init(&mut self, area: Size) -> Result<()> {
        let _ = area;
        Ok(())
    }

    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<EventResponse<Action>>> {
        let _ = event;
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Whether the page is capturing raw keys (text input), so global
    /// shortcuts must not fire.
    fn is_editing(&self) -> bool {
        false
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) -> Result<()>;
}
