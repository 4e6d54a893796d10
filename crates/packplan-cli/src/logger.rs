//! Logging setup for the Packplan CLI.
//!
//! Built on the `tracing` ecosystem. Verbosity is determined in order:
//! `--verbose` (debug for packplan crates), `--quiet` (errors only), the
//! `RUST_LOG` environment variable, then a default of info.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Call once at startup, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("packplan=debug,packplan_config=debug,packplan_cli=debug")
    } else if quiet {
        EnvFilter::new("packplan=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("packplan=info,packplan_config=info,packplan_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::EnvFilter;

    // The subscriber is global and can only be installed once per process,
    // so these only cover filter construction.

    #[test]
    fn verbose_filter_parses() {
        let _ = EnvFilter::new("packplan=debug,packplan_config=debug,packplan_cli=debug");
    }

    #[test]
    fn quiet_filter_parses() {
        let _ = EnvFilter::new("packplan=error");
    }
}
