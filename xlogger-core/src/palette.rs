use colored::Color;

use crate::Severity;

/// Clears every color and style attribute.
pub const RESET: &str = "\x1B[0m";

/// Color used to highlight call-site labels on the console.
pub const CALLSITE_COLOR: Color = Color::Blue;

/// Escape sequence switching the terminal foreground to `color`.
pub fn color_start(color: Color, bold: bool) -> String {
    let color = format!("\x1B[{}m", color.to_fg_str());
    if bold { format!("\x1B[1m{color}") } else { color }
}

/// Escape sequence opening a record of the given severity.
pub fn severity_start(severity: Severity) -> String {
    let (color, bold) = severity.color();
    color_start(color, bold)
}

#[test]
fn test_palette() {
    assert_eq!(severity_start(Severity::Info), "\x1B[32m");
    assert_eq!(severity_start(Severity::Debug), "\x1B[36m");
    assert_eq!(severity_start(Severity::Warn), "\x1B[33m");
    assert_eq!(severity_start(Severity::Critical), "\x1B[35m");
    assert_eq!(severity_start(Severity::Error), "\x1B[31m");
    assert_eq!(severity_start(Severity::Fatal), "\x1B[1m\x1B[31m");
    assert_eq!(color_start(CALLSITE_COLOR, false), "\x1B[34m");
}
