// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Logging setup for the binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV: &str = "PERMTREE_LOG";

/// Level used when `PERMTREE_LOG` is unset or invalid.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the filter from `PERMTREE_LOG`, falling back to `warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install a stderr subscriber. Later calls are no-ops.
pub fn init_logging() {
    // A subscriber installed earlier (e.g. by a test harness) stays in place.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
