use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise each `-v` raises the level by one step from `warn`.
pub fn filter_directive(verbose: u8) -> String {
    match std::env::var("RUST_LOG") {
        Ok(filter) if !filter.trim().is_empty() => filter,
        _ => level_for(verbose).to_string(),
    }
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info,nylas_drafts=info",
        2 => "info,nylas_drafts=debug",
        _ => "debug,nylas_drafts=trace",
    }
}

pub fn init(verbose: u8) {
    let filter =
        EnvFilter::try_new(filter_directive(verbose)).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
