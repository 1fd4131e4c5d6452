//! Non-interactive commands: one submit from flags, department listing.

use std::io::Write;

use color_eyre::Result;
use feedback_form::{
    Department, FieldKey, FormController, FormOptions, Notification, NotificationLevel,
    SubmitOutcome,
};
use serde_json::json;
use strum::IntoEnumIterator;
use tracing::info;

use crate::cli::SubmitArgs;

/// Run one submit through a fresh controller. Returns whether it was accepted.
pub fn run_submit(args: SubmitArgs, options: FormOptions, out: &mut impl Write) -> Result<bool> {
    let mut controller = FormController::new(options);
    controller.set_field(FieldKey::Name, args.name);
    if let Some(department) = args.department {
        controller.set_field(FieldKey::Department, Department::from(department).code());
    }
    controller.set_field(FieldKey::Feedback, args.feedback);
    if let Some(rating) = args.rating {
        controller.set_field(FieldKey::Rating, rating.to_string());
    }

    let mut notifications: Vec<Notification> = Vec::new();
    let outcome = controller.submit(&mut notifications);

    if args.json {
        let doc = match &outcome {
            SubmitOutcome::Submitted(entry) => json!({ "status": "submitted", "entry": entry }),
            SubmitOutcome::Rejected(errors) => {
                json!({ "status": "rejected", "errors": errors.to_messages() })
            }
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
    } else {
        for n in &notifications {
            let tag = match n.level {
                NotificationLevel::Success => "ok",
                NotificationLevel::Error => "error",
            };
            writeln!(out, "[{tag}] {}", n.message)?;
        }
        if let SubmitOutcome::Rejected(errors) = &outcome {
            for (key, err) in errors.iter() {
                writeln!(out, "  {key}: {err}")?;
            }
        }
    }

    info!(accepted = outcome.is_submitted(), "headless submit");
    Ok(outcome.is_submitted())
}

pub fn list_departments(out: &mut impl Write) -> Result<()> {
    for d in Department::iter() {
        writeln!(out, "{:<12}{}", d.code(), d.label())?;
    }
    Ok(())
}
