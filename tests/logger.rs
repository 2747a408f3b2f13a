use admindash::config::LoggingConfig;
use admindash::logger::{init, Logger};
use std::fs;
use std::io::Write;

#[test]
fn test_config_based_logging_disabled() {
    let logger = Logger::from_config(false).unwrap();
    assert!(!logger.has_file_writer());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_config_based_logging_enabled() {
    let logger = Logger::from_config(true).unwrap();
    assert!(logger.has_file_writer());

    logger.log("Test message with file".to_string());

    // In-memory logs back the "G" dialog
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message with file"));

    if let Some(writer_arc) = logger.file_writer() {
        if let Ok(mut writer) = writer_arc.lock() {
            let _ = writer.flush();
        }

        let log_path = Logger::get_log_file_path().unwrap();
        if log_path.exists() {
            let file_content = fs::read_to_string(&log_path).unwrap_or_default();
            assert!(file_content.contains("Test message with file"));
            // Clean up test file
            let _ = fs::remove_file(&log_path);
        }
    }
}

#[test]
fn test_logs_are_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert!(logs[0].ends_with("second"));
    assert!(logs[1].ends_with("first"));

    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_buffer_drops_oldest_entries() {
    let logger = Logger::with_capacity(2);
    for n in 1..=3 {
        logger.log(format!("entry {}", n));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].ends_with("entry 3"));
    assert!(logs[1].ends_with("entry 2"));
}

#[test]
fn test_clones_share_the_buffer() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("from the clone".to_string());
    assert_eq!(logger.get_logs().len(), 1);
}

#[test]
fn test_log_file_path() {
    let path = Logger::get_log_file_path().unwrap();
    assert!(path.ends_with("admindash/admindash.log"));
}

#[test]
fn test_init_routes_log_records_into_the_buffer() {
    let logger = Logger::new();
    init(&LoggingConfig::default(), &logger).unwrap();

    log::warn!("stock running low");
    log::debug!("below the configured level");

    let logs = logger.get_logs();
    assert!(logs.iter().any(|line| line.contains("WARN ") && line.contains(": stock running low")));
    assert!(logs.iter().all(|line| !line.contains("below the configured level")));
}
