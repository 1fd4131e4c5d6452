//! Terminal front end for the company feedback form.
//!
//! `run` is the whole program; `main.rs` only parses the command line.

pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod errors;
pub mod headless;
pub mod logging;
pub mod pages;
pub mod tui;

use std::process::ExitCode;

use color_eyre::Result;
use tracing::info;

use crate::{
    app::App,
    cli::{Cli, Cmd, RunArgs},
    config::Config,
};

pub async fn run(cli: Cli) -> Result<ExitCode> {
    errors::init()?;
    logging::init()?;

    let config = Config::new()?;
    info!(config_dir = %config.config.config_dir.display(), "starting");

    match cli.cmd {
        Cmd::Run(args) => {
            let mut app = App::new(apply_run_args(config, &args))?;
            app.run().await?;
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Submit(args) => {
            let accepted = headless::run_submit(args, config.form, &mut std::io::stdout().lock())?;
            Ok(if accepted {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Cmd::Departments => {
            headless::list_departments(&mut std::io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Command-line flags win over the config file.
pub fn apply_run_args(mut config: Config, args: &RunArgs) -> Config {
    if let Some(tick_rate) = args.tick_rate {
        config.ui.tick_rate = tick_rate;
    }
    if let Some(frame_rate) = args.frame_rate {
        config.ui.frame_rate = frame_rate;
    }
    if args.clear_errors_on_edit {
        config.form.clear_errors_on_edit = true;
    }
    config.ui.sanitize_rates();
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_flags_override_config() {
        let args = RunArgs {
            tick_rate: Some(10.0),
            frame_rate: None,
            clear_errors_on_edit: true,
        };
        let config = apply_run_args(Config::default(), &args);
        assert_eq!(config.ui.tick_rate, 10.0);
        assert_eq!(config.ui.frame_rate, 30.0);
        assert!(config.form.clear_errors_on_edit);

        let untouched = apply_run_args(Config::default(), &RunArgs::default());
        assert!(!untouched.form.clear_errors_on_edit);
    }

    #[test]
    fn unusable_rate_flags_keep_a_working_loop() {
        let args = RunArgs {
            tick_rate: Some(0.0),
            frame_rate: Some(f64::NAN),
            clear_errors_on_edit: false,
        };
        let config = apply_run_args(Config::default(), &args);
        assert_eq!(config.ui.tick_rate, 4.0);
        assert_eq!(config.ui.frame_rate, 30.0);
    }
}
