use tracing_subscriber::EnvFilter;

/// Installs the stderr fmt subscriber used by both catalogue binaries.
///
/// Reports go to stdout/stderr as plain lines; keeping logs on stderr leaves the
/// validator's stdout identical between runs. `RUST_LOG` overrides the default
/// `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
