use color_eyre::Result;
use ratatui::layout::{Layout, Rect, Size};
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    action::Action,
    components::{banner::Banner, feedback_form::FeedbackForm, Component},
    config::Config,
    tui::{Event, EventResponse, Frame},
};

use super::Page;

/// Header over one mounted feedback form.
#[derive(Default)]
pub struct FeedbackPage {
    banner: Banner,
    form: FeedbackForm,
}

impl FeedbackPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FeedbackForm {
        &self.form
    }
}

impl Page for FeedbackPage {
    fn name(&self) -> &str {
        "feedback"
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.form.register_action_handler(tx)
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.form.register_config_handler(config)
    }

    fn init(&mut self, area: Size) -> Result<()> {
        self.banner.init(area)?;
        self.form.init(area)
    }

    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<EventResponse<Action>>> {
        self.form.handle_events(event)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        self.form.update(action)
    }

    fn is_editing(&self) -> bool {
        self.form.is_editing()
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect) -> Result<()> {
        let [header, body] = Layout::vertical([
            self.banner.height_constraint(),
            self.form.height_constraint(),
        ])
        .areas(area);
        self.banner.draw(frame, header)?;
        self.form.draw(frame, body)
    }
}
