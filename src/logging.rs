use std::sync::{Once, OnceLock};

use flexi_logger::{LogSpecification, Logger, LoggerHandle};
use log::{info, warn};

use crate::config::DEFAULT_LOG_LEVEL;

static LOGGER_INIT: Once = Once::new();

// Dropping the handle shuts the logger down, so it lives for the whole process
static LOGGER_HANDLE: OnceLock<LoggerHandle> = OnceLock::new();

/// The log spec that will actually be applied: `level` if it parses, otherwise the default
pub(crate) fn applied_level(level: &str) -> &str {
    if LogSpecification::parse(level).is_ok() {
        level
    } else {
        DEFAULT_LOG_LEVEL
    }
}

/// Start a stderr logger at the given level (e.g. "debug", "info,capped_set=trace").
/// An unparsable spec falls back to the default level.
/// Only the first call in a process does anything, returns true if this call started the logger
pub fn init_logger(level: &str) -> bool {
    let mut started = false;

    LOGGER_INIT.call_once(|| {
        let applied = applied_level(level);
        let Ok(logger) = Logger::try_with_str(applied) else {
            return;
        };

        // Ignore errors if a logger is already set
        if let Ok(handle) = logger.log_to_stderr().start() {
            let _ = LOGGER_HANDLE.set(handle);
            started = true;
            info!("Logger initialized at level {applied}");
            if applied != level {
                warn!("Invalid log spec {level:?}, using {applied}");
            }
        }
    });

    started
}
