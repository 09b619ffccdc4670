// Logging setup
//
// Logs go to stderr so `export` output on stdout stays clean enough to
// redirect into a file. Verbosity is controlled with WALLET_THEME_LOG
// (standard EnvFilter syntax); default is warnings only.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_env("WALLET_THEME_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
