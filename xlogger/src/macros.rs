/// Logs a list of `Display` values at the given severity, tagged with the
/// file and line of the invocation.
///
/// Goes through the process-wide logger unless a `logger:` target is given.
/// Evaluates to `Result<(), LogError>`.
///
/// ```rust
/// use xlogger::{Severity, log};
///
/// let logger = xlogger::logger_config().build().unwrap();
/// log!(logger: logger, Severity::Critical, "cache miss ratio", 0.92).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $severity:expr $(, $value:expr)* $(,)?) => {
        $logger.log(
            $severity,
            $crate::CallSite::new(file!(), line!()),
            &[$(&$value as &dyn ::std::fmt::Display),*],
        )
    };
    ($severity:expr $(, $value:expr)* $(,)?) => {
        $crate::log(
            $severity,
            $crate::CallSite::new(file!(), line!()),
            &[$(&$value as &dyn ::std::fmt::Display),*],
        )
    };
}

/// Logs at [`Severity::Info`](crate::Severity::Info).
#[macro_export]
macro_rules! info {
    (logger: $logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!(logger: $logger, $crate::Severity::Info $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Severity::Info $(, $value)*)
    };
}

/// Logs at [`Severity::Debug`](crate::Severity::Debug).
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!(logger: $logger, $crate::Severity::Debug $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Severity::Debug $(, $value)*)
    };
}

/// Logs at [`Severity::Warn`](crate::Severity::Warn).
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!(logger: $logger, $crate::Severity::Warn $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Severity::Warn $(, $value)*)
    };
}

/// Logs at [`Severity::Critical`](crate::Severity::Critical).
#[macro_export]
macro_rules! critical {
    (logger: $logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!(logger: $logger, $crate::Severity::Critical $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Severity::Critical $(, $value)*)
    };
}

/// Logs at [`Severity::Error`](crate::Severity::Error).
#[macro_export]
macro_rules! error {
    (logger: $logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!(logger: $logger, $crate::Severity::Error $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Severity::Error $(, $value)*)
    };
}

/// Logs at [`Severity::Fatal`](crate::Severity::Fatal).
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log!(logger: $logger, $crate::Severity::Fatal $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Severity::Fatal $(, $value)*)
    };
}
