use crate::{CallSite, Severity};

/// One log call, fully assembled and about to be written.
/// Lives only for the duration of a single dispatch.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub severity: Severity,
    pub timestamp: String,
    pub callsite: CallSite<'a>,
    pub fragments: &'a [String],
}

impl Record<'_> {
    /// Argument fragments joined with single spaces.
    pub fn message(&self) -> String {
        self.fragments.join(" ")
    }

    /// The record as a plain text line, newline included.
    pub fn plain_line(&self) -> String {
        format!(
            "[{}: {}] {} -- {}\n",
            self.severity.tag(),
            self.timestamp,
            self.callsite,
            self.message()
        )
    }
}
