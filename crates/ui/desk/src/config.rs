use std::path::{Path, PathBuf};
use std::time::Duration;
use std::env;

use color_eyre::Result;
use directories::ProjectDirs;
use feedback_form::FormOptions;
use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::components::toasts::ToastPosition;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub config_dir: PathBuf,
}

/// Presentation settings of the terminal page (config section `ui`).
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Ticks per second; toasts expire on ticks.
    pub tick_rate: f64,
    /// Frames per second.
    pub frame_rate: f64,
    /// How long a toast stays on screen.
    pub toast_ttl_ms: u64,
    pub toast_position: ToastPosition,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate: 4.0,
            frame_rate: 30.0,
            toast_ttl_ms: 4_000,
            toast_position: ToastPosition::default(),
        }
    }
}

impl UiConfig {
    /// Replace rates the event loop cannot turn into an interval with defaults.
    pub fn sanitize_rates(&mut self) {
        let defaults = Self::default();
        if !is_valid_rate(self.tick_rate) {
            warn!(tick_rate = self.tick_rate, "invalid tick rate, using default");
            self.tick_rate = defaults.tick_rate;
        }
        if !is_valid_rate(self.frame_rate) {
            warn!(frame_rate = self.frame_rate, "invalid frame rate, using default");
            self.frame_rate = defaults.frame_rate;
        }
    }
}

/// A rate (per second) whose period is a non-zero `Duration`.
pub fn is_valid_rate(rate: f64) -> bool {
    rate > 0.0
        && Duration::try_from_secs_f64(1.0 / rate).is_ok_and(|period| !period.is_zero())
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub form: FormOptions,
    #[serde(default)]
    pub ui: UiConfig,
}

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", PROJECT_NAME.clone());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

impl Config {
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load_from(&get_config_dir(), &get_data_dir())
    }

    /// Defaults, then `config.json5` / `config.toml` from `config_dir` if present.
    pub fn load_from(config_dir: &Path, data_dir: &Path) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.toml", config::FileFormat::Toml),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            let source = config::File::from(config_dir.join(file))
                .format(*format)
                .required(false);
            builder = builder.add_source(source);
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            debug!(dir = %config_dir.display(), "no configuration file found, using defaults");
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.ui.sanitize_rates();

        Ok(cfg)
    }
}

pub fn get_data_dir() -> PathBuf {
    if let Some(s) = DATA_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Some(s) = CONFIG_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "feedback-desk", env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(dir.path(), &dir.path().join("data")).unwrap();

        assert_eq!(cfg.config.config_dir, dir.path());
        assert_eq!(cfg.config.data_dir, dir.path().join("data"));
        assert!(!cfg.form.clear_errors_on_edit);
        assert_eq!(cfg.ui, UiConfig::default());
    }

    #[test]
    fn toml_file_overrides_sections() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            r#"
[form]
clear_errors_on_edit = true

[ui]
toast_ttl_ms = 1500
toast_position = "bottom_left"
"#,
        )
        .unwrap();

        let cfg = Config::load_from(dir.path(), dir.path()).unwrap();

        assert!(cfg.form.clear_errors_on_edit);
        assert_eq!(cfg.ui.toast_ttl_ms, 1500);
        assert_eq!(cfg.ui.toast_position, ToastPosition::BottomLeft);
        // untouched keys keep their defaults
        assert_eq!(cfg.ui.tick_rate, 4.0);
    }

    #[test]
    fn unusable_rates_in_file_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "[ui]\ntick_rate = 0\nframe_rate = -5.0\n",
        )
        .unwrap();

        let cfg = Config::load_from(dir.path(), dir.path()).unwrap();

        assert_eq!(cfg.ui.tick_rate, UiConfig::default().tick_rate);
        assert_eq!(cfg.ui.frame_rate, UiConfig::default().frame_rate);
    }

    #[test]
    fn rate_validity() {
        assert!(is_valid_rate(4.0));
        assert!(is_valid_rate(0.5));
        assert!(!is_valid_rate(0.0));
        assert!(!is_valid_rate(-1.0));
        assert!(!is_valid_rate(f64::NAN));
        assert!(!is_valid_rate(f64::INFINITY));
        assert!(!is_valid_rate(1e-300));
    }
}
