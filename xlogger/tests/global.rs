use std::{
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard},
};

use regex::Regex;
use xlogger::{LogError, Severity, critical, error, info, warn};

/// The global logger is process-wide; tests touching it run one at a time.
static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    xlogger::destroy().ok();
    guard
}

fn test_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("xlogger_global_{name}.log"));
    std::fs::remove_file(&path).ok();
    path
}

#[test]
fn test_init_is_idempotent() {
    let _serial = serial();
    let first = xlogger::init().unwrap();
    let second = xlogger::init().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &xlogger::logger().unwrap()));
    assert_eq!(first.file_path(), None);
    xlogger::destroy().unwrap();
}

#[test]
fn test_second_file_is_never_created() {
    let _serial = serial();
    let first = test_path("first");
    let second = test_path("second");
    let logger = xlogger::init_with_file(&first).unwrap();
    match xlogger::init_with_file(&second) {
        Err(LogError::AlreadyInitialized { requested, active }) => {
            assert_eq!(requested, Some(second.clone()));
            assert_eq!(active, Some(first.clone()));
        }
        _ => panic!("expected the second init to be rejected"),
    }
    // same path is not a reconfiguration
    let again = xlogger::init_with_file(&first).unwrap();
    assert!(Arc::ptr_eq(&logger, &again));
    // console-only init keeps the file logger
    assert!(Arc::ptr_eq(&logger, &xlogger::init().unwrap()));

    info!("written to the first file").unwrap();
    xlogger::destroy().unwrap();

    assert!(!second.exists());
    let content = std::fs::read_to_string(&first).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.ends_with("-- written to the first file\n"));
}

#[test]
fn test_builder_init_global_rejected_when_active() {
    let _serial = serial();
    let path = test_path("builder_rejected");
    xlogger::init().unwrap();
    let result = xlogger::logger_config().with_log_file(&path).init_global();
    assert!(matches!(result, Err(LogError::AlreadyInitialized { .. })));
    assert!(!path.exists());
    xlogger::destroy().unwrap();
}

#[test]
fn test_reinit_truncates() {
    let _serial = serial();
    let path = test_path("reinit");
    xlogger::init_with_file(&path).unwrap();
    for i in 0..5 {
        info!("first session", i).unwrap();
    }
    xlogger::destroy().unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 5);

    xlogger::init_with_file(&path).unwrap();
    warn!("second session").unwrap();
    xlogger::destroy().unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.starts_with("[WARN: "));
    assert!(!content.contains("first session"));
}

#[test]
fn test_use_after_destroy() {
    let _serial = serial();
    let handle = xlogger::init().unwrap();
    xlogger::destroy().unwrap();
    assert!(matches!(info!("too late"), Err(LogError::NotInitialized)));
    assert!(matches!(xlogger::logger(), Err(LogError::NotInitialized)));
    assert!(matches!(xlogger::destroy(), Err(LogError::NotInitialized)));
    // handles taken before the teardown are closed as well
    assert!(!handle.is_active());
    assert!(matches!(
        critical!(logger: handle, "stale handle"),
        Err(LogError::NotInitialized)
    ));
}

#[test]
fn test_open_failure_leaves_logger_uninitialized() {
    let _serial = serial();
    let path = std::env::temp_dir().join("xlogger_no_such_dir").join("app.log");
    assert!(matches!(
        xlogger::init_with_file(&path),
        Err(LogError::Open { .. })
    ));
    assert!(matches!(xlogger::destroy(), Err(LogError::NotInitialized)));
    // a later init still works
    xlogger::init().unwrap();
    xlogger::destroy().unwrap();
}

#[test]
fn test_concurrent_threads_share_file() {
    let _serial = serial();
    let path = test_path("concurrent");
    xlogger::init_with_file(&path).unwrap();
    let t1 = std::thread::spawn(|| {
        for i in 0..50 {
            info!("Thread 1: i =", i).unwrap();
        }
    });
    let t2 = std::thread::spawn(|| {
        for i in 50..100 {
            error!("Thread 2: i =", i).unwrap();
        }
    });
    t1.join().unwrap();
    t2.join().unwrap();
    xlogger::destroy().unwrap();

    let re = Regex::new(
        r"^\[(INFO|ERROR): [A-Z][a-z]{2} [A-Z][a-z]{2} [ \d]\d \d{2}:\d{2}:\d{2} \d{4}\] .+global\.rs: \d+ -- Thread [12]: i = \d+$",
    )
    .unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 100);
    assert!(lines.iter().all(|line| re.is_match(line)));
    for i in 0..100 {
        assert_eq!(
            lines
                .iter()
                .filter(|line| line.ends_with(&format!(" i = {i}")))
                .count(),
            1
        );
    }
}

#[test]
fn test_function_api_with_explicit_callsite() {
    let _serial = serial();
    let path = test_path("function_api");
    xlogger::init_with_file(&path).unwrap();
    xlogger::log(
        Severity::Fatal,
        xlogger::CallSite::new("a.src", 12),
        &[&"x=", &10],
    )
    .unwrap();
    xlogger::destroy().unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("[FATAL: "));
    assert!(content.ends_with("] a.src: 12 -- x= 10\n"));
}
