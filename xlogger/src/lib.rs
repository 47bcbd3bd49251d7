//! # xlogger
//! Thread-safe leveled logger writing colored lines to the console and,
//! optionally, plain lines to a log file.
//!
//! Every line looks like
//! ```text
//! [INFO: Mon Oct 19 10:00:00 2026] src/main.rs: 12 -- x= 10
//! ```
//! On the console the line is colored by severity and the call-site is
//! highlighted. The log file gets the same line without escape sequences.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! xlogger = "0.1.0"
//! ```
//!
//! ```rust
//! use xlogger::{info, warn};
//!
//! xlogger::init().unwrap();
//! let x = 10;
//! info!("x=", x).unwrap();
//! warn!("disk usage at", 93, "%").unwrap();
//! xlogger::destroy().unwrap();
//! ```
//!
//! ## Logging to a file
//! The log file is truncated when the logger is created. It is flushed and
//! closed by [`destroy`].
//!
//! ```rust
//! let path = std::env::temp_dir().join("xlogger_doc_app.log");
//! xlogger::init_with_file(&path).unwrap();
//! xlogger::error!("unable to reach", "db-1").unwrap();
//! xlogger::destroy().unwrap();
//! assert!(std::fs::read_to_string(&path).unwrap().ends_with("-- unable to reach db-1\n"));
//! ```
//!
//! Initialization is first-call-wins: once a logger is active, asking for a
//! different file fails with [`LogError::AlreadyInitialized`] instead of
//! silently keeping the old configuration.
//!
//! ## Explicit loggers
//! A [`Logger`] can also be owned by the application and shared between
//! threads. Writes to every sink happen under one lock, so lines never
//! interleave.
//!
//! ```rust
//! use std::sync::Arc;
//! use xlogger::{logger_config, warn};
//!
//! let logger = Arc::new(logger_config().build().unwrap());
//! let handles: Vec<_> = (0..4).map(|i| {
//!     let logger = Arc::clone(&logger);
//!     std::thread::spawn(move || {
//!         warn!(logger: logger, "hello from thread", i).unwrap();
//!     })
//! }).collect();
//! for h in handles { h.join().unwrap(); }
//! logger.destroy().unwrap();
//! ```

mod bridge;
mod error;
mod global;
mod logger;
mod macros;

pub use bridge::install_log_bridge;
pub use error::LogError;
pub use global::{destroy, init, init_with_file, log, logger};
pub use logger::{ConfigBuilder, Logger, logger_config};
pub use xlogger_core::{CallSite, ConsoleSink, FileSink, LogSink, Record, Severity};
