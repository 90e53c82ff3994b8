use fnkit_core::functional::MemoStats;
use fnkit_core::{DEFAULT_LOG_FILTER, FNKIT_LOG_VAR};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, span, trace, warn, Level, Span};

/// Initialize the tracing system
///
/// Reads the filter from `FNKIT_LOG` (falling back to `info`) and writes
/// compact events to stderr, with colour only when stderr is a terminal.
/// Fails instead of panicking if a global subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_env(FNKIT_LOG_VAR)
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    init_with_filter(filter)
}

/// Initialize with an explicit filter directive such as `"fnkit=trace"`
pub fn init_with(directives: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    init_with_filter(EnvFilter::try_new(directives)?)
}

fn init_with_filter(
    filter: EnvFilter,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Check if stderr is a terminal
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Span grouping the work of one collection operation
pub fn operation_span(operation: &str, len: usize) -> Span {
    span!(Level::DEBUG, "operation", operation = %operation, len = %len)
}

/// Emit a structured event summarising a memo cache
pub fn memo_report(name: &str, stats: &MemoStats) {
    let total = stats.hits + stats.misses;
    if total == 0 {
        debug!(memo = %name, "memo_unused");
        return;
    }

    debug!(
        memo = %name,
        hits = stats.hits,
        misses = stats.misses,
        entries = stats.len,
        capacity = stats.capacity.map(|c| c.get()),
        hit_ratio = stats.hits as f64 / total as f64,
        "memo_report"
    );
}
