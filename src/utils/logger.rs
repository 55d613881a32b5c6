use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Relay-specific override, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "RELAY_LOG";

// 上游 HTTP 用戶端的連線細節只在 verbose 時顯示
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "tarot_relay=debug,reqwest=debug,info"
    } else {
        "tarot_relay=info,warn"
    }
}

fn relay_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(relay_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(verbose)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// JSON lines for CloudWatch; event fields (candidate, attempts, ...) are flattened to the top level.
pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(relay_filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();
}
