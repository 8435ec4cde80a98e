use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt, EnvFilter,
};

static INIT_LOGGING: Once = Once::new();

/// Install a global tracing subscriber for the engine.
///
/// `verbose` enables debug output for this crate; `RUST_LOG` overrides the
/// global level. Safe to call more than once: only the first call installs
/// anything, and an already-installed subscriber is left in place.
pub fn init_logging(verbose: bool) {
    INIT_LOGGING.call_once(|| {
        let (level_filter, level) = if verbose {
            (LevelFilter::DEBUG, "debug")
        } else {
            (LevelFilter::WARN, "warn")
        };
        let crate_filter = Targets::new()
            .with_target("finance_widget_core", level_filter)
            .with_default(LevelFilter::WARN);
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().without_time())
            .with(crate_filter)
            .with(env_filter)
            .try_init();

        tracing::debug!("finance widget logging initialized");
    });
}
