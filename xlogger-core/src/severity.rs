use std::{fmt, str::FromStr};

use colored::Color;

/// Severity of a log call. Only selects a tag and a color, there is no
/// threshold filtering attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Debug,
    Warn,
    Critical,
    Error,
    Fatal,
}

impl Severity {
    /// All severities in declaration order.
    pub const ALL: [Severity; 6] = [
        Severity::Info,
        Severity::Debug,
        Severity::Warn,
        Severity::Critical,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Tag text written between the opening bracket and the timestamp.
    pub const fn tag(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Warn => "WARN",
            Severity::Critical => "CRITICAL",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Console color of the severity, and whether it is bold.
    pub const fn color(self) -> (Color, bool) {
        match self {
            Severity::Info => (Color::Green, false),
            Severity::Debug => (Color::Cyan, false),
            Severity::Warn => (Color::Yellow, false),
            Severity::Critical => (Color::Magenta, false),
            Severity::Error => (Color::Red, false),
            Severity::Fatal => (Color::Red, true),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: {:?}", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSeverityError(s.into()))
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warn,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::Debug,
        }
    }
}
