use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Workspace crates whose events pass the default filter at `LOG_LEVEL`.
const APP_TARGETS: &[&str] = &[
    "gradebook",
    "gradebook_core",
    "gradebook_auth",
    "gradebook_db",
    "gradebook_observability",
    "gradebook_cli",
];

pub(crate) fn env_flag_enabled(raw: &str) -> bool {
    let raw = raw.trim();
    !(raw.eq_ignore_ascii_case("false") || raw == "0")
}

/// Filter directives used when `RUST_LOG` is not set.
pub fn default_filter_directives(level: &str) -> String {
    let mut directives: Vec<String> = APP_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect();
    directives.extend(
        ["tower_http=warn", "hyper=warn", "tonic=warn", "h2=warn", "sqlx=warn"]
            .into_iter()
            .map(String::from),
    );
    directives.join(",")
}

pub(crate) fn env_filter() -> EnvFilter {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter_directives(&log_level)))
}

/// Compact console logging, used when observability is off.
///
/// `LOG_LEVEL` sets the level for workspace crates (default "info") and
/// `RUST_LOG` overrides the whole filter.
pub fn init_basic_console_logging() {
    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter());

    if tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .is_err()
    {
        return;
    }

    eprintln!(
        "ℹ️  Observability disabled - console logging only (OBSERVABILITY_ENABLED=false or feature not compiled)"
    );
}
