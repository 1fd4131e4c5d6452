use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use color_eyre::Result;
use feedback_form::{Notification, NotificationLevel};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{action::Action, components::Component, config::Config, tui::Frame};

const MAX_VISIBLE: usize = 3;
const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

/// Corner the toast stack is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastPosition {
    #[default]
    TopRight,
    BottomRight,
    TopLeft,
    BottomLeft,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.ttl
    }
}

/// Transient notifications drawn over the page. Expired toasts are dropped on
/// `Tick`.
#[derive(Debug)]
pub struct Toasts {
    queue: VecDeque<Toast>,
    next_id: u64,
    ttl: Duration,
    position: ToastPosition,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(Duration::from_millis(4_000), ToastPosition::default())
    }
}

impl Toasts {
    pub fn new(ttl: Duration, position: ToastPosition) -> Self {
        Self {
            queue: VecDeque::new(),
            next_id: 0,
            ttl,
            position,
        }
    }

    pub fn push(&mut self, notification: Notification) -> u64 {
        self.push_at(notification, Instant::now())
    }

    pub fn push_at(&mut self, notification: Notification, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        debug!(id, level = ?notification.level, message = %notification.message, "toast");
        self.queue.push_back(Toast {
            id,
            notification,
            created_at: now,
            ttl: self.ttl,
        });
        id
    }

    /// Drop expired toasts; returns how many went away.
    pub fn prune_at(&mut self, now: Instant) -> usize {
        let before = self.queue.len();
        self.queue.retain(|t| !t.is_expired(now));
        before - self.queue.len()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn position(&self) -> ToastPosition {
        self.position
    }

    /// Newest first, capped.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter().rev().take(MAX_VISIBLE)
    }
}

/// Slot `index` of the stack inside `area`; index 0 sits in the corner.
pub fn toast_area(area: Rect, position: ToastPosition, index: u16) -> Option<Rect> {
    let width = TOAST_WIDTH.min(area.width);
    let offset = index.checked_mul(TOAST_HEIGHT)?;
    if offset.saturating_add(TOAST_HEIGHT) > area.height {
        return None;
    }
    let x = match position {
        ToastPosition::TopLeft | ToastPosition::BottomLeft => area.x,
        ToastPosition::TopRight | ToastPosition::BottomRight => area.right() - width,
    };
    let y = match position {
        ToastPosition::TopLeft | ToastPosition::TopRight => area.y + offset,
        ToastPosition::BottomLeft | ToastPosition::BottomRight => {
            area.bottom() - offset - TOAST_HEIGHT
        }
    };
    Some(Rect::new(x, y, width, TOAST_HEIGHT))
}

fn level_style(level: NotificationLevel) -> (Color, &'static str) {
    match level {
        NotificationLevel::Success => (Color::Green, " Success "),
        NotificationLevel::Error => (Color::Red, " Error "),
    }
}

impl Component for Toasts {
    fn name(&self) -> &'static str {
        "toasts"
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.ttl = Duration::from_millis(config.ui.toast_ttl_ms);
        self.position = config.ui.toast_position;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Notify(notification) => {
                self.push(notification);
                Ok(Some(Action::Render))
            }
            Action::Tick => {
                if self.prune_at(Instant::now()) > 0 {
                    return Ok(Some(Action::Render));
                }
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        for (index, toast) in self.visible().enumerate() {
            let Some(slot) = toast_area(area, self.position, index as u16) else {
                break;
            };
            let (color, title) = level_style(toast.notification.level);
            let body = Paragraph::new(toast.notification.message.as_str())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(title)
                        .borders(Borders::ALL)
                        .border_set(symbols::border::ROUNDED)
                        .border_style(Style::default().fg(color)),
                );
            f.render_widget(Clear, slot);
            f.render_widget(body, slot);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn success(msg: &str) -> Notification {
        Notification::new(NotificationLevel::Success, msg)
    }

    #[test]
    fn toasts_expire_after_ttl() {
        let start = Instant::now();
        let mut toasts = Toasts::new(Duration::from_millis(100), ToastPosition::TopRight);
        toasts.push_at(success("a"), start);
        toasts.push_at(success("b"), start + Duration::from_millis(60));

        assert_eq!(toasts.prune_at(start + Duration::from_millis(50)), 0);
        assert_eq!(toasts.prune_at(start + Duration::from_millis(100)), 1);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.prune_at(start + Duration::from_millis(200)), 1);
        assert!(toasts.is_empty());
    }

    #[test]
    fn newest_toasts_are_visible_first() {
        let mut toasts = Toasts::default();
        for msg in ["1", "2", "3", "4"] {
            toasts.push(success(msg));
        }
        let shown: Vec<&str> = toasts
            .visible()
            .map(|t| t.notification.message.as_str())
            .collect();
        assert_eq!(shown, vec!["4", "3", "2"]);
    }

    #[test]
    fn slots_stack_away_from_the_corner() {
        let area = Rect::new(0, 0, 100, 20);
        assert_eq!(
            toast_area(area, ToastPosition::TopRight, 0),
            Some(Rect::new(56, 0, 44, 3))
        );
        assert_eq!(
            toast_area(area, ToastPosition::TopRight, 1),
            Some(Rect::new(56, 3, 44, 3))
        );
        assert_eq!(
            toast_area(area, ToastPosition::BottomLeft, 0),
            Some(Rect::new(0, 17, 44, 3))
        );
        assert_eq!(
            toast_area(area, ToastPosition::BottomLeft, 1),
            Some(Rect::new(0, 14, 44, 3))
        );
        assert_eq!(toast_area(Rect::new(0, 0, 30, 4), ToastPosition::TopLeft, 1), None);
    }

    #[test]
    fn notify_action_queues_a_toast() {
        let mut toasts = Toasts::default();
        let next = toasts
            .update(Action::Notify(success("Feedback submitted successfully!")))
            .unwrap();
        assert_eq!(next, Some(Action::Render));
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.update(Action::Tick).unwrap(), None);
    }

    #[test]
    fn config_sets_ttl_and_corner() {
        let mut toasts = Toasts::default();
        let mut config = Config::default();
        config.ui.toast_ttl_ms = 10;
        config.ui.toast_position = ToastPosition::BottomRight;
        toasts.register_config_handler(config).unwrap();
        assert_eq!(toasts.position(), ToastPosition::BottomRight);

        let start = Instant::now();
        toasts.push_at(success("x"), start);
        assert_eq!(toasts.prune_at(start + Duration::from_millis(10)), 1);
    }
}
