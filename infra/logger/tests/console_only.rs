use dh_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn console_only_logger_has_no_file_output_and_installs_once() {
    let logger = Logger::builder("integration-console-only")
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    assert!(!logger.has_file_output(), "console-only logger should not create a file writer");

    let err = Logger::builder("integration-console-second")
        .init()
        .expect_err("second init should fail");
    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
