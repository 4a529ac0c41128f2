//! Display settings for progress trackers.

#[expect(clippy::module_inception, reason = "config module holds the Config type")]
mod config;

pub use config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TOML, ProgressConfig, ProgressMode};
