use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted.
/// Events are written as JSON lines to stderr so stdout stays clean for
/// rendered panel output.
pub fn init_logging(quiet: bool) {
    let directive = if quiet {
        "statusboard=error"
    } else {
        "statusboard=info"
    };

    // try_init: a host embedding the widget may have installed its own subscriber.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(EnvFilter::from_default_env().add_directive(directive_for(directive)))
        .try_init();
}

fn directive_for(directive: &str) -> tracing_subscriber::filter::Directive {
    directive
        .parse()
        .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::ERROR.into())
}
