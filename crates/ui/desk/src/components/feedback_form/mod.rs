//! Interactive feedback form: focus, editing and submit on top of a
//! `FormController`.
//!
//! Related modules:
//! - `field.rs`  : widget kind per input
//! - `render.rs` : card + inline errors + submissions table

pub mod field;
pub mod render;

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use feedback_form::{FieldKey, FormController, FormOptions, Notification, SubmitOutcome};
use ratatui::layout::Rect;
use tracing::debug;
use tui_input::{backend::crossterm::EventHandler, Input, InputRequest};

use crate::{
    action::Action,
    components::Component,
    config::Config,
    tui::{Event, EventResponse, Frame},
};

pub use field::{feedback_fields, FormField, FormFieldKind};

pub struct FeedbackForm {
    controller: FormController,
    fields: Vec<FormField>,

    // UI state
    /// `0..fields.len()` are the inputs, `fields.len()` is the submit button.
    focused: usize,
    editing: bool,
    input: Input,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self::new(FormOptions::default())
    }
}

impl FeedbackForm {
    pub fn new(options: FormOptions) -> Self {
        Self {
            controller: FormController::new(options),
            fields: feedback_fields(),
            focused: 0,
            editing: false,
            input: Input::default(),
        }
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focused)
    }

    pub fn is_submit_focused(&self) -> bool {
        self.focused == self.fields.len()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn input_value(&self) -> &str {
        self.input.value()
    }

    pub fn input_cursor(&self) -> usize {
        self.input.cursor()
    }

    fn focus_count(&self) -> usize {
        self.fields.len() + 1
    }

    fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.focus_count();
    }

    fn focus_prev(&mut self) {
        if self.focused == 0 {
            self.focused = self.focus_count() - 1;
        } else {
            self.focused -= 1;
        }
    }

    fn focus_key(&mut self, key: FieldKey) {
        if let Some(idx) = self.fields.iter().position(|f| f.key == key) {
            self.focused = idx;
        }
    }

    fn start_editing(&mut self) {
        let Some(key) = self.focused_field().filter(|f| f.is_textual()).map(|f| f.key) else {
            return;
        };
        self.editing = true;
        self.input = Input::default().with_value(self.controller.value(key).to_string());
    }

    fn cancel_editing(&mut self) {
        self.editing = false;
        self.input = Input::default();
    }

    fn commit_editing(&mut self) {
        if let Some(key) = self.focused_field().map(|f| f.key) {
            let value = self.input.value().to_string();
            self.controller.set_field(key, value);
        }
        self.editing = false;
        self.input = Input::default();
    }

    /// Step a Select/Radio field by `dir`. From "nothing selected", forward
    /// lands on the first option and backward on the last.
    fn cycle_choice(&mut self, dir: i32) -> bool {
        let Some(field) = self.focused_field() else {
            return false;
        };
        let Some(options) = field.options() else {
            return false;
        };
        if options.is_empty() {
            return false;
        }
        let key = field.key;
        let len = options.len() as i32;
        let current = self.controller.value(key);
        let next = match options.iter().position(|o| o == current) {
            Some(idx) => (idx as i32 + dir).rem_euclid(len) as usize,
            None if dir >= 0 => 0,
            None => (len - 1) as usize,
        };
        let value = options[next].clone();
        self.controller.set_field(key, value);
        true
    }

    /// Digit shortcut on the rating row.
    fn pick_option(&mut self, c: char) -> bool {
        let Some(field) = self.focused_field() else {
            return false;
        };
        if !matches!(field.kind, FormFieldKind::Radio { .. }) {
            return false;
        }
        let key = field.key;
        let wanted = c.to_string();
        if field.options().is_some_and(|o| o.contains(&wanted)) {
            self.controller.set_field(key, wanted);
            return true;
        }
        false
    }

    fn submit(&mut self) -> Option<Action> {
        if self.editing {
            self.commit_editing();
        }
        let mut notifications: Vec<Notification> = Vec::new();
        match self.controller.submit(&mut notifications) {
            SubmitOutcome::Submitted(entry) => {
                debug!(id = entry.id(), "form reset after submit");
                self.focused = 0;
            }
            SubmitOutcome::Rejected(errors) => {
                if let Some(first) = errors.keys().next() {
                    self.focus_key(first);
                }
            }
        }
        notifications.pop().map(Action::Notify)
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => {
                self.commit_editing();
                Action::ExitEditMode
            }
            KeyCode::Tab => {
                self.commit_editing();
                self.focus_next();
                Action::ExitEditMode
            }
            KeyCode::BackTab => {
                self.commit_editing();
                self.focus_prev();
                Action::ExitEditMode
            }
            KeyCode::Esc => {
                self.cancel_editing();
                Action::ExitEditMode
            }
            _ => {
                self.input.handle_event(&crossterm::event::Event::Key(key));
                Action::Update
            }
        }
    }
}

fn stop(action: Action) -> Result<Option<EventResponse<Action>>> {
    Ok(Some(EventResponse::Stop(action)))
}

impl Component for FeedbackForm {
    fn name(&self) -> &'static str {
        "feedback_form"
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        // Nur beim Mount sinnvoll: später würde der laufende Zustand verworfen
        if self.controller.submissions().is_empty() && self.controller.values().is_empty() {
            self.controller = FormController::new(config.form);
        }
        Ok(())
    }

    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<EventResponse<Action>>> {
        match event {
            Some(Event::Key(key)) => self.handle_key_events(key),
            Some(Event::Paste(text)) if self.editing => {
                for c in text.chars() {
                    let c = if matches!(c, '\r' | '\n') { ' ' } else { c };
                    self.input.handle(InputRequest::InsertChar(c));
                }
                stop(Action::Update)
            }
            _ => Ok(None),
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<EventResponse<Action>>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            return stop(Action::Submit);
        }

        if self.editing {
            // suspend and quit belong to the app even mid-edit
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('z') | KeyCode::Char('c'))
            {
                return Ok(None);
            }
            return stop(self.handle_editing_key(key));
        }

        match key.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.focus_prev();
                stop(Action::Update)
            }
            KeyCode::Down | KeyCode::Tab => {
                self.focus_next();
                stop(Action::Update)
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                let dir = if key.code == KeyCode::Left { -1 } else { 1 };
                if self.cycle_choice(dir) {
                    return stop(Action::Update);
                }
                if key.code == KeyCode::Char(' ') && self.is_submit_focused() {
                    return stop(Action::Submit);
                }
                Ok(None)
            }
            KeyCode::Char(c @ '1'..='5') if self.pick_option(c) => stop(Action::Update),
            KeyCode::Enter => {
                if self.focused_field().is_some_and(FormField::is_textual) {
                    self.start_editing();
                    return stop(Action::EnterEditMode);
                }
                stop(Action::Submit)
            }
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Submit => Ok(self.submit()),
            _ => Ok(None),
        }
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        render::render_feedback_form(self, f, area)
    }
}
