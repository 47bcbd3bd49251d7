use std::{
    fmt::Display,
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock, RwLockWriteGuard},
};

use xlogger_core::{CallSite, Severity};

use crate::{ConfigBuilder, LogError, Logger, logger_config};

enum Slot {
    /// Never initialized: the first log call creates a console-only logger.
    Vacant,
    Active(Arc<Logger>),
    /// Destroyed: logging fails until the next explicit init.
    TornDown,
}

/// Process-wide logger used by the free functions and the macros.
static GLOBAL_LOGGER: RwLock<Slot> = RwLock::new(Slot::Vacant);

fn write_slot() -> RwLockWriteGuard<'static, Slot> {
    GLOBAL_LOGGER.write().unwrap_or_else(PoisonError::into_inner)
}

fn install(slot: &mut Slot, builder: ConfigBuilder) -> Result<Arc<Logger>, LogError> {
    let logger = Arc::new(builder.build()?);
    *slot = Slot::Active(Arc::clone(&logger));
    Ok(logger)
}

fn already_initialized(active: &Logger, requested: Option<PathBuf>) -> LogError {
    LogError::AlreadyInitialized {
        requested,
        active: active.file_path().map(Path::to_path_buf),
    }
}

impl ConfigBuilder {
    /// Builds the logger and installs it as the process-wide one.
    /// Fails with [`LogError::AlreadyInitialized`] if a logger is already active,
    /// in which case nothing is opened.
    pub fn init_global(self) -> Result<Arc<Logger>, LogError> {
        let mut slot = write_slot();
        if let Slot::Active(logger) = &*slot {
            return Err(already_initialized(logger, self.log_file));
        }
        install(&mut slot, self)
    }
}

/// Returns the process-wide logger, creating a console-only one if none is active.
/// Repeated calls return the same instance.
pub fn init() -> Result<Arc<Logger>, LogError> {
    let mut slot = write_slot();
    if let Slot::Active(logger) = &*slot {
        return Ok(Arc::clone(logger));
    }
    install(&mut slot, logger_config())
}

/// Returns the process-wide logger, creating one that also writes to `path`.
///
/// The file is truncated when opened. If a logger is already active with the
/// same file it is returned as is; any other active logger is left untouched
/// and [`LogError::AlreadyInitialized`] is returned without creating `path`.
pub fn init_with_file<P: AsRef<Path>>(path: P) -> Result<Arc<Logger>, LogError> {
    let path = path.as_ref();
    let mut slot = write_slot();
    if let Slot::Active(logger) = &*slot {
        return if logger.file_path() == Some(path) {
            Ok(Arc::clone(logger))
        } else {
            Err(already_initialized(logger, Some(path.to_path_buf())))
        };
    }
    install(&mut slot, logger_config().with_log_file(path))
}

/// Returns the active process-wide logger without creating one.
pub(crate) fn active_logger() -> Option<Arc<Logger>> {
    match &*GLOBAL_LOGGER.read().unwrap_or_else(PoisonError::into_inner) {
        Slot::Active(logger) => Some(Arc::clone(logger)),
        Slot::Vacant | Slot::TornDown => None,
    }
}

/// Returns the process-wide logger.
///
/// A console-only logger is created on first use. After [`destroy`] this fails
/// with [`LogError::NotInitialized`] until one of the init functions is called.
pub fn logger() -> Result<Arc<Logger>, LogError> {
    if let Some(logger) = active_logger() {
        return Ok(logger);
    }
    let mut slot = write_slot();
    match &*slot {
        Slot::Active(logger) => return Ok(Arc::clone(logger)),
        Slot::TornDown => return Err(LogError::NotInitialized),
        Slot::Vacant => {}
    }
    install(&mut slot, logger_config())
}

/// Logs through the process-wide logger. See [`Logger::log`].
pub fn log(
    severity: Severity,
    callsite: CallSite<'_>,
    values: &[&dyn Display],
) -> Result<(), LogError> {
    logger()?.log(severity, callsite, values)
}

/// Closes the process-wide logger's sinks and releases it.
///
/// Handles obtained earlier stop working as well. Calling this when no logger
/// is active fails with [`LogError::NotInitialized`].
pub fn destroy() -> Result<(), LogError> {
    let mut slot = write_slot();
    match std::mem::replace(&mut *slot, Slot::TornDown) {
        Slot::Active(logger) => logger.destroy(),
        previous => {
            *slot = previous;
            Err(LogError::NotInitialized)
        }
    }
}
