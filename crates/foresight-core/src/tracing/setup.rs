//! Subscriber installation for binaries and tests embedding the engine.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV_VAR: &str = "FORESIGHT_LOG";

/// Directive used when `FORESIGHT_LOG` is unset or unparseable.
pub const DEFAULT_DIRECTIVE: &str = "foresight=info";

static INIT: Once = Once::new();

/// Install a compact `fmt` subscriber filtered by `FORESIGHT_LOG`.
///
/// e.g. `FORESIGHT_LOG=foresight_engine::outcome=debug,foresight=warn`
///
/// Only the first call does anything, and a subscriber already installed by
/// the host application wins.
pub fn init_tracing() {
    init_tracing_with_default(DEFAULT_DIRECTIVE);
}

/// As [`init_tracing`], with a caller-chosen fallback directive.
pub fn init_tracing_with_default(default_directive: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive));
        let layer = fmt::layer().compact().with_target(true);
        let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
    });
}
