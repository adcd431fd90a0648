//! Subscriber installation is process-global, so everything lives in one test.

use progression_runtime::logging::LOG_FILE_NAME;
use progression_runtime::{LoggingConfig, RuntimeError, init_logging};
use tempfile::TempDir;

#[test]
fn file_logging_installs_once() {
    let temp_dir = TempDir::new().unwrap();
    let log_dir = temp_dir.path().join("logs");
    let config = LoggingConfig {
        log_dir: Some(log_dir.clone()),
        filter: "debug".to_string(),
    };

    let guard = init_logging(&config).expect("first install succeeds");
    tracing::warn!("hello from the test");

    let second = init_logging(&LoggingConfig::default());
    assert!(matches!(second, Err(RuntimeError::Logging(_))));

    drop(guard);

    let contents = std::fs::read_to_string(log_dir.join(LOG_FILE_NAME)).unwrap();
    assert!(contents.contains("hello from the test"));
}
