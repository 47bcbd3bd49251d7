//! # xlogger-core
//! Core building blocks for xlogger: severities, the color palette, the clock,
//! call-site labels and the sinks records are written to.

mod callsite;
mod clock;
mod palette;
mod record;
mod severity;
mod sink;

pub use callsite::CallSite;
pub use clock::now;
pub use palette::{CALLSITE_COLOR, RESET, color_start, severity_start};
pub use record::Record;
pub use severity::{ParseSeverityError, Severity};
pub use sink::{ConsoleSink, FileSink, LogSink};
