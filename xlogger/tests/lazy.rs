use std::sync::Arc;

use xlogger::{LogError, debug};

#[test]
fn test_first_log_creates_console_logger() {
    debug!("created on first use").unwrap();
    let logger = xlogger::logger().unwrap();
    assert_eq!(logger.file_path(), None);
    assert!(Arc::ptr_eq(&logger, &xlogger::init().unwrap()));
    assert!(matches!(
        xlogger::init_with_file(std::env::temp_dir().join("xlogger_lazy.log")),
        Err(LogError::AlreadyInitialized { requested: Some(_), active: None })
    ));
    xlogger::destroy().unwrap();
}
