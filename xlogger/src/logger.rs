use std::{
    fmt::Display,
    io::Write,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use xlogger_core::{CallSite, ConsoleSink, FileSink, LogSink, Record, Severity, now};

use crate::LogError;

/// Dispatcher fanning each log call out to its sinks.
///
/// A single lock covers timestamp capture and the writes to every sink, so
/// a record is either not started or fully written from any other thread's
/// point of view.
pub struct Logger {
    file_path: Option<PathBuf>,
    /// `None` once the logger has been destroyed.
    sinks: Mutex<Option<Vec<Box<dyn LogSink>>>>,
}

impl Logger {
    /// Writes one record to every sink.
    ///
    /// Values are rendered with their `Display` implementation and joined with
    /// single spaces. A failing sink does not prevent the others from being
    /// written, the first failure is returned.
    pub fn log(
        &self,
        severity: Severity,
        callsite: CallSite<'_>,
        values: &[&dyn Display],
    ) -> Result<(), LogError> {
        let fragments: Vec<String> = values.iter().map(|value| value.to_string()).collect();
        let mut sinks = self.sinks.lock().unwrap_or_else(PoisonError::into_inner);
        let sinks = sinks.as_mut().ok_or(LogError::NotInitialized)?;
        let record = Record {
            severity,
            timestamp: now(),
            callsite,
            fragments: &fragments,
        };
        let mut first_error = None;
        for sink in sinks.iter_mut() {
            if let Err(err) = sink.write_record(&record) {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), |err| Err(err.into()))
    }

    /// Flushes every sink without tearing the logger down.
    pub fn flush(&self) -> Result<(), LogError> {
        let mut sinks = self.sinks.lock().unwrap_or_else(PoisonError::into_inner);
        let sinks = sinks.as_mut().ok_or(LogError::NotInitialized)?;
        let mut first_error = None;
        for sink in sinks.iter_mut() {
            if let Err(err) = sink.flush() {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), |err| Err(err.into()))
    }

    /// Closes every sink. The log file, if any, is flushed and synced before
    /// this returns. Any later call to `log` or `destroy` fails with
    /// [`LogError::NotInitialized`].
    pub fn destroy(&self) -> Result<(), LogError> {
        let sinks = self
            .sinks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .ok_or(LogError::NotInitialized)?;
        let mut first_error = None;
        for mut sink in sinks {
            if let Err(err) = sink.close() {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), |err| Err(err.into()))
    }

    /// Path of the log file, if file logging is enabled.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Whether the logger has not been destroyed yet.
    pub fn is_active(&self) -> bool {
        self.sinks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let sinks = self.sinks.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(sinks) = sinks.as_mut() {
            for sink in sinks.iter_mut() {
                sink.flush().ok();
            }
        }
    }
}

/// Builder for configuring and creating a [`Logger`].
pub struct ConfigBuilder {
    pub(crate) log_file: Option<PathBuf>,
    console: Option<Box<dyn LogSink>>,
    no_console: bool,
    extra_sinks: Vec<Box<dyn LogSink>>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            log_file: None,
            console: None,
            no_console: false,
            extra_sinks: Vec::new(),
        }
    }
}

impl ConfigBuilder {
    /// Creates the logger. The log file is opened, and truncated, here.
    pub fn build(self) -> Result<Logger, LogError> {
        let Self {
            log_file,
            console,
            no_console,
            extra_sinks,
        } = self;
        let mut sinks: Vec<Box<dyn LogSink>> = Vec::with_capacity(2 + extra_sinks.len());
        if let Some(path) = &log_file {
            let file = FileSink::create(path).map_err(|source| LogError::Open {
                path: path.clone(),
                source,
            })?;
            sinks.push(Box::new(file));
        }
        if !no_console {
            let console: Box<dyn LogSink> = match console {
                Some(console) => console,
                None => Box::new(ConsoleSink::stdout()),
            };
            sinks.push(console);
        }
        sinks.extend(extra_sinks);
        Ok(Logger {
            file_path: log_file,
            sinks: Mutex::new(Some(sinks)),
        })
    }

    /// Sets the log file. It is truncated when the logger is built.
    pub fn with_log_file<P: AsRef<Path>>(self, path: P) -> Self {
        Self {
            log_file: Some(path.as_ref().to_path_buf()),
            ..self
        }
    }
    /// Maybe sets the log file.
    pub fn maybe_with_log_file<P: AsRef<Path>>(self, path: Option<P>) -> Self {
        Self {
            log_file: path.map(|p| p.as_ref().to_path_buf()),
            ..self
        }
    }
    /// Writes console output to `writer` instead of stdout.
    pub fn with_console_writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        Self {
            console: Some(Box::new(ConsoleSink::new(writer))),
            ..self
        }
    }
    /// Ignore console logging
    pub fn no_console(self) -> Self {
        Self {
            no_console: true,
            ..self
        }
    }
    /// Adds another destination, written after the file and the console.
    pub fn with_sink<S: LogSink + 'static>(mut self, sink: S) -> Self {
        self.extra_sinks.push(Box::new(sink));
        self
    }
}

/// Returns a default ConfigBuilder for configuring the logger.
pub fn logger_config() -> ConfigBuilder {
    ConfigBuilder::default()
}
