//! Display progress for bulk file transfers.
//!
//! ```bash
//! transfer-progress stats ./data
//! transfer-progress simulate ./data --precompute --workers 8 --delay-ms 20
//! transfer-progress init
//! ```

use std::io::Write;
use std::io::{stderr, stdout};
use transfer_progress::{Host, run};

/// Default host that writes to the real stdout and stderr.
#[derive(Debug, Clone, Default)]
struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }
}

#[tokio::main]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args()).await
}
