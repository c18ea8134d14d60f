// File: crates/report/src/telemetry.rs
// Summary: tracing subscriber setup for the report binary.

/// Install a compact fmt subscriber on stderr, filtered by `RUST_LOG`
/// (default `info`). Returns `false` if a global subscriber already exists.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .is_ok()
}
