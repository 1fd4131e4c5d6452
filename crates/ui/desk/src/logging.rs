use color_eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config;

/// File logging into the data dir. The terminal belongs to the UI, so nothing
/// is written to stdout/stderr.
///
/// Filter: `FEEDBACK_DESK_LOGLEVEL`, else `RUST_LOG`, else `info` for our crates.
pub fn init() -> Result<()> {
    let directory = config::get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_path = directory.join(config::LOG_FILE.as_str());
    let log_file = std::fs::File::create(log_path)?;

    let filter = std::env::var(config::LOG_ENV.as_str())
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| {
            format!(
                "{}=info,feedback_form=info",
                env!("CARGO_CRATE_NAME")
            )
        });

    let file_subscriber = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}
