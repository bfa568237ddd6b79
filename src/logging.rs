//! Diagnostic logging on stderr.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used unless `RUST_LOG` is set.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "sporty=debug"
    } else {
        "sporty=warn"
    }
}

/// Install the global subscriber. Output goes to stderr so rendered results
/// on stdout stay clean. Safe to call more than once; later calls are
/// ignored.
pub fn init_logger(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "sporty=warn");
        assert_eq!(default_filter(true), "sporty=debug");
    }

    #[test]
    fn test_init_logger_twice_is_harmless() {
        init_logger(false);
        init_logger(true);
    }
}
