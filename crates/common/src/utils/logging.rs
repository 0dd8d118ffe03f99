use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber shared by the server and report
/// binaries.
/// - Respects `RUST_LOG` when set
/// - Defaults to `info`, with tower_http request logging kept at info
/// - Writes to stdout so logs survive environments that swallow stderr
pub fn init_logging_default() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}
