use std::fmt::Display;

use log::{LevelFilter, Log, Metadata};
use xlogger_core::{CallSite, Severity};

use crate::{LogError, global};

/// Forwards records of the `log` crate to the process-wide logger.
struct LogBridge;

static LOG_BRIDGE: LogBridge = LogBridge;

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let callsite = CallSite::new(
            record.file().unwrap_or(record.target()),
            record.line().unwrap_or(0),
        );
        let message: &dyn Display = record.args();
        if let Err(err) = global::log(Severity::from(record.level()), callsite, &[message]) {
            eprintln!("xlogger: dropped record from {callsite}: {err}");
        }
    }

    fn flush(&self) {
        if let Some(logger) = global::active_logger()
            && let Err(err) = logger.flush()
        {
            eprintln!("xlogger: flush failed: {err}");
        }
    }
}

/// Routes `log::info!` and the other `log` macros through the process-wide logger.
/// `Trace` records are written as `DEBUG`.
pub fn install_log_bridge(level: LevelFilter) -> Result<(), LogError> {
    log::set_logger(&LOG_BRIDGE)?;
    log::set_max_level(level);
    Ok(())
}
