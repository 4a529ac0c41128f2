//! Command-line interface for transfer-progress
//!
//! - **stats**: measure a directory tree the way a bounded tracker needs it
//! - **simulate**: replay a directory tree through a tracker using concurrent workers, as an
//!   upload would, without moving any data
//! - **init**: write the default configuration file
//!
//! The `run` function parses the arguments and routes to the matching handler. Output meant
//! for the user goes through [`Host`] so tests can capture it; tracker output goes to stdout.

mod common;
mod host;
mod init;
mod run;
mod simulate;
mod stats;

pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use simulate::{SimulateArgs, simulate};
pub use stats::{StatsArgs, print_stats};
