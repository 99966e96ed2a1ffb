use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const POS_LOG_FORMAT: &str = "POS_LOG_FORMAT";
const JSON_FORMAT: &str = "json";
const DEFAULT_FILTER: &str = "warn";

/// Logs go to stderr so command output on stdout stays clean.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    let json = std::env::var(POS_LOG_FORMAT).is_ok_and(|v| v.eq_ignore_ascii_case(JSON_FORMAT));
    if json {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(std::io::stderr);
        registry.with(json_layer).init();
    } else {
        let compact_layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr);
        registry.with(compact_layer).init();
    }
}
