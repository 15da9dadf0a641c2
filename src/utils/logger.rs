use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr so they never interleave with the kiosk prompt on stdout.
pub fn init_cli_logger(verbose: bool) {
    let directive = if verbose {
        "fb_kiosk=debug,info"
    } else {
        "fb_kiosk=info"
    };
    init_logger(directive, false);
}

/// Logger driven by the `[logging]` table of the config file.
pub fn init_configured_logger(level: &str, json: bool) {
    init_logger(&format!("fb_kiosk={}", level), json);
}

fn init_logger(default_directive: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if json {
        // one JSON object per line, for kiosks that ship logs elsewhere
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init();
    }
}
