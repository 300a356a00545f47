// The global logger can only be installed once per process, so these tests
// exercise dispatch construction and leave `initialize` to applications.

use crate::error::ConfigError;
use crate::logger::{LOG_FILE_NAME, build_dispatch};

use std::path::Path;

use tempfile::TempDir;

#[test]
fn given_writable_directory_when_build_dispatch_then_log_file_created() {
    // GIVEN
    let dir = TempDir::new().unwrap();

    // WHEN
    let result = build_dispatch(dir.path());

    // THEN
    assert!(result.is_ok());
    assert!(dir.path().join(LOG_FILE_NAME).exists());
}

/// **VALUE**: A bad log directory is an error, not a panic.
///
/// **BUG THIS CATCHES**: Would catch an `unwrap()` on the log file open
/// crashing the host application at startup.
#[test]
fn given_missing_directory_when_build_dispatch_then_logger_error() {
    let result = build_dispatch(Path::new("/nonexistent/bnet/logs"));

    match result {
        Err(ConfigError::Logger { message, .. }) => {
            assert!(message.contains("Failed to create log file"))
        }
        Err(other) => panic!("Expected Logger error, got {other}"),
        Ok(_) => panic!("Expected Logger error, got a dispatch"),
    }
}
