use log::LevelFilter;

#[test]
fn test_log_crate_records_are_forwarded() {
    let path = std::env::temp_dir().join("xlogger_bridge.log");
    xlogger::init_with_file(&path).unwrap();
    xlogger::install_log_bridge(LevelFilter::Debug).unwrap();
    assert!(xlogger::install_log_bridge(LevelFilter::Info).is_err());

    log::info!("listening on port {}", 8080);
    log::trace!("filtered out");
    log::debug!("handshake done");
    log::logger().flush();
    xlogger::destroy().unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[INFO: "));
    assert!(lines[0].contains("bridge.rs: "));
    assert!(lines[0].ends_with(" -- listening on port 8080"));
    assert!(lines[1].starts_with("[DEBUG: "));
    assert!(lines[1].ends_with(" -- handshake done"));

    // after teardown the bridge reports on stderr instead of panicking
    log::warn!("dropped");
}
