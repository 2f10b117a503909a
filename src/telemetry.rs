use tracing_subscriber::EnvFilter;

/// Default filter for the `-q` / `-v` flags when `RUST_LOG` is unset.
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    }
}

/// Logs go to stderr so command output on stdout stays machine readable.
pub fn init(verbose: u8, quiet: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet)));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
    {
        eprintln!("warning: logging disabled: {err}");
    }
}
