//! Shared test setup: a once-only tracing subscriber on the test writer.

use std::sync::Once;

use tracing::debug;
use tracing_subscriber::{fmt, fmt::format::FmtSpan, prelude::*, EnvFilter};

/// Directive used when `RUST_LOG` is unset: this crate verbose, dependencies quiet.
const DEFAULT_DIRECTIVE: &str = "warn,trieviz=trace";

static TEST_SETUP: Once = Once::new();

/// Install the test subscriber; later calls are no-ops.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let layer = fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(filter);

        // another harness may already own the global dispatcher
        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            debug!("tracing subscriber already set");
            return;
        }
        debug!("test logging ready ({})", DEFAULT_DIRECTIVE);
    });
}
