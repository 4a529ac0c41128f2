use crate::Result;
use camino::Utf8Path;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up when no path is given
pub const CONFIG_FILE_NAME: &str = "progress.toml";

/// How progress is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressMode {
    /// Live bars on an interactive terminal, plain text otherwise
    #[default]
    Auto,

    /// One text line per update
    Plain,

    /// No output at all
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProgressConfig {
    /// How progress is displayed
    #[serde(default)]
    pub mode: ProgressMode,

    /// Width in columns of bounded bars
    #[serde(default = "default_bounded_bar_width")]
    pub bounded_bar_width: u16,

    /// Bar redraws per second
    #[serde(default = "default_refresh_hz")]
    pub refresh_hz: u8,
}

const fn default_bounded_bar_width() -> u16 {
    50
}

const fn default_refresh_hz() -> u8 {
    10
}

impl ProgressConfig {
    /// Load configuration from a file, or from `progress.toml` in `base_dir`, or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds out-of-range values
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8Path>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading progress configuration file '{path}'"))?;
            (path.to_path_buf(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
                Err(e) => return Err(e).into_app_err_with(|| format!("reading progress configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))
    }

    fn validate(&self) -> Result<()> {
        if !(1..=200).contains(&self.bounded_bar_width) {
            return Err(app_err!("bounded_bar_width must be between 1 and 200, got {}", self.bounded_bar_width));
        }

        if !(1..=60).contains(&self.refresh_hz) {
            return Err(app_err!("refresh_hz must be between 1 and 60, got {}", self.refresh_hz));
        }

        Ok(())
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            mode: ProgressMode::default(),
            bounded_bar_width: default_bounded_bar_width(),
            refresh_hz: default_refresh_hz(),
        }
    }
}
