use feedback_form::Notification;
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, PartialEq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    ClearScreen,
    Error(String),
    /// Some component changed visible state.
    Update,
    /// Run the form's submit.
    Submit,
    EnterEditMode,
    ExitEditMode,
    /// Show a toast.
    Notify(Notification),
}
