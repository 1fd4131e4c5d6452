use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, error};

use crate::{
    action::Action,
    components::{status_bar::StatusBar, toasts::Toasts, Component},
    config::Config,
    pages::{FeedbackPage, Page},
    tui::{Event, EventResponse, Frame, Tui},
};

pub struct App {
    pub config: Config,
    pub page: Box<dyn Page>,
    pub toasts: Toasts,
    pub status_bar: StatusBar,
    pub should_quit: bool,
    pub should_suspend: bool,
}

/// Keys the app handles itself once the page let them through.
pub fn global_action(key: KeyEvent, editing: bool) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('z') if ctrl => Some(Action::Suspend),
        KeyCode::Char('q') if !ctrl && !editing => Some(Action::Quit),
        _ => None,
    }
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let mut app = Self {
            config,
            page: Box::new(FeedbackPage::new()),
            toasts: Toasts::default(),
            status_bar: StatusBar::new(),
            should_quit: false,
            should_suspend: false,
        };
        app.page.register_config_handler(app.config.clone())?;
        app.toasts.register_config_handler(app.config.clone())?;
        app.status_bar.register_config_handler(app.config.clone())?;
        Ok(app)
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

        let mut tui = self.new_tui()?;
        tui.enter()?;

        self.page.register_action_handler(action_tx.clone())?;
        self.page.init(tui.size()?)?;

        loop {
            if let Some(e) = tui.next().await {
                self.handle_event(e, &action_tx)?;
            }

            while let Ok(action) = action_rx.try_recv() {
                if !matches!(action, Action::Tick | Action::Render) {
                    debug!("{action}");
                }
                match action {
                    Action::Quit => self.should_quit = true,
                    Action::Suspend => self.should_suspend = true,
                    Action::Resume => self.should_suspend = false,
                    Action::ClearScreen => tui.terminal.clear()?,
                    Action::Error(ref msg) => error!("{msg}"),
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, w, h))?;
                        self.draw(&mut tui, &action_tx)?;
                    }
                    Action::Render => self.draw(&mut tui, &action_tx)?,
                    _ => {}
                }
                self.dispatch(action, &action_tx)?;
            }

            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume).ok();
                action_tx.send(Action::ClearScreen).ok();
                tui = self.new_tui()?;
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn new_tui(&self) -> Result<Tui> {
        Ok(Tui::new()?
            .tick_rate(self.config.ui.tick_rate)
            .frame_rate(self.config.ui.frame_rate))
    }

    /// Page first; whatever it does not stop falls through to the app.
    pub fn handle_event(&mut self, e: Event, action_tx: &UnboundedSender<Action>) -> Result<()> {
        if let Event::Key(key) = e {
            // Ctrl-C quits even from inside a text field
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                action_tx.send(Action::Quit).ok();
                return Ok(());
            }
        }

        let stop_event_propagation = match self.page.handle_events(Some(e.clone()))? {
            Some(EventResponse::Continue(action)) => {
                action_tx.send(action).ok();
                false
            }
            Some(EventResponse::Stop(action)) => {
                action_tx.send(action).ok();
                true
            }
            None => false,
        };
        if stop_event_propagation {
            return Ok(());
        }

        match e {
            Event::Quit => {
                action_tx.send(Action::Quit).ok();
            }
            Event::Tick => {
                action_tx.send(Action::Tick).ok();
            }
            Event::Render => {
                action_tx.send(Action::Render).ok();
            }
            Event::Resize(x, y) => {
                action_tx.send(Action::Resize(x, y)).ok();
            }
            Event::Key(key) => {
                if let Some(action) = global_action(key, self.page.is_editing()) {
                    action_tx.send(action).ok();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Hand an action to every part; follow-up actions go back on the queue.
    pub fn dispatch(&mut self, action: Action, action_tx: &UnboundedSender<Action>) -> Result<()> {
        if let Some(next) = self.page.update(action.clone())? {
            action_tx.send(next).ok();
        }
        if let Some(next) = self.status_bar.update(action.clone())? {
            action_tx.send(next).ok();
        }
        if let Some(next) = self.toasts.update(action)? {
            action_tx.send(next).ok();
        }
        Ok(())
    }

    fn draw(&mut self, tui: &mut Tui, action_tx: &UnboundedSender<Action>) -> Result<()> {
        tui.draw(|f| {
            if let Err(err) = self.render(f) {
                action_tx
                    .send(Action::Error(format!("Failed to draw: {err:?}")))
                    .ok();
            }
        })?;
        Ok(())
    }

    pub fn render(&mut self, frame: &mut Frame<'_>) -> Result<()> {
        let [body, footer] =
            Layout::vertical([Constraint::Fill(1), self.status_bar.height_constraint()])
                .areas(frame.area());

        self.page.draw(frame, body)?;
        self.status_bar.draw(frame, footer)?;
        // overlay last
        self.toasts.draw(frame, body)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<Action>) -> Vec<Action> {
        let mut out = Vec::new();
        while let Ok(a) = rx.try_recv() {
            out.push(a);
        }
        out
    }

    /// Feed queued actions back through `dispatch` until the queue is empty.
    fn settle(app: &mut App, tx: &UnboundedSender<Action>, rx: &mut mpsc::UnboundedReceiver<Action>) -> Vec<Action> {
        let mut seen = Vec::new();
        loop {
            let batch = drain(rx);
            if batch.is_empty() {
                return seen;
            }
            for action in batch {
                app.dispatch(action.clone(), tx).unwrap();
                seen.push(action);
            }
        }
    }

    #[test]
    fn global_keys() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(global_action(q, false), Some(Action::Quit));
        assert_eq!(global_action(q, true), None);
        let ctrl_z = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL);
        assert_eq!(global_action(ctrl_z, false), Some(Action::Suspend));
    }

    #[test]
    fn q_types_into_a_text_field() {
        let mut app = App::new(Config::default()).unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();

        app.handle_event(key(KeyCode::Enter), &tx).unwrap();
        app.handle_event(key(KeyCode::Char('q')), &tx).unwrap();
        let actions = drain(&mut rx);
        assert!(!actions.contains(&Action::Quit));
        assert!(app.page.is_editing());

        app.handle_event(key(KeyCode::Esc), &tx).unwrap();
        app.handle_event(key(KeyCode::Char('q')), &tx).unwrap();
        assert!(drain(&mut rx).contains(&Action::Quit));
    }

    #[test]
    fn ctrl_z_suspends_from_inside_a_text_field() {
        let mut app = App::new(Config::default()).unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();

        app.handle_event(key(KeyCode::Enter), &tx).unwrap();
        assert!(app.page.is_editing());
        drain(&mut rx);

        app.handle_event(
            Event::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            &tx,
        )
        .unwrap();
        assert_eq!(drain(&mut rx), vec![Action::Suspend]);
    }

    #[test]
    fn failed_submit_raises_one_error_toast() {
        let mut app = App::new(Config::default()).unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();

        app.handle_event(
            Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            &tx,
        )
        .unwrap();
        let seen = settle(&mut app, &tx, &mut rx);

        let notifications = seen
            .iter()
            .filter(|a| matches!(a, Action::Notify(_)))
            .count();
        assert_eq!(notifications, 1);
        assert_eq!(app.toasts.len(), 1);

        let mut terminal = Terminal::new(TestBackend::new(100, 45)).unwrap();
        terminal.draw(|f| app.render(f).unwrap()).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Please fill in all required fields"));
        assert!(text.contains("NORMAL"));
    }
}
