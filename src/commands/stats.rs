use super::Host;
use super::common::{LogLevel, init_logging};
use crate::Result;
use crate::progress::format::format_bytes;
use crate::stats::upload_stats;
use camino::Utf8PathBuf;
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Directory to measure
    #[arg(value_name = "DIR")]
    pub directory: Utf8PathBuf,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

pub fn print_stats<H: Host>(host: &mut H, args: &StatsArgs) -> Result<()> {
    init_logging(args.log_level);

    let stats = upload_stats(&args.directory)?;
    let _ = writeln!(
        host.output(),
        "{}: {} files, {}",
        args.directory,
        stats.files,
        format_bytes(stats.bytes)
    );
    Ok(())
}
