//! Error and panic reporting for the terminal front end.
//!
//! color-eyre formats `Result` errors returned from `main`; the panic hook
//! first hands the terminal back to the shell, then reports.

use std::sync::OnceLock;

use color_eyre::Result;
use tracing::error;

static INIT: OnceLock<()> = OnceLock::new();

pub fn init() -> Result<()> {
    // idempotent: zweiter Aufruf (z.B. aus Tests) ist ein No-op
    if INIT.get().is_some() {
        return Ok(());
    }

    let log_file = crate::config::get_data_dir().join(crate::config::LOG_FILE.as_str());
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .panic_section(format!(
            "Feedback Desk crashed. The log at {} has the details.",
            log_file.display()
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .try_into_hooks()?;
    eyre_hook.install()?;

    std::panic::set_hook(Box::new(move |panic_info| {
        // raw mode + alternate screen verlassen, sonst ist die Shell unbenutzbar
        if let Ok(mut tui) = crate::tui::Tui::new() {
            if let Err(err) = tui.exit() {
                error!("Unable to restore terminal: {err:?}");
            }
        }

        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, metadata, print_msg};
            let metadata = metadata!();
            let file_path = handle_dump(&metadata, panic_info);
            if let Err(err) = print_msg(file_path, &metadata) {
                eprintln!("human-panic: {err}");
            }
            eprintln!("{}", panic_hook.panic_report(panic_info));
        }

        let report = panic_hook.panic_report(panic_info).to_string();
        error!("Panic: {}", strip_ansi_escapes::strip_str(report));

        #[cfg(debug_assertions)]
        {
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        std::process::exit(libc::EXIT_FAILURE);
    }));

    let _ = INIT.set(());
    Ok(())
}
