use circ_domain::config::LoggingConfig;
use circulation::init_logging;
use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
#[serial]
fn logging_table_configures_file_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = LoggingConfig {
        name: "circ-facade".to_owned(),
        level: "debug".to_owned(),
        console: false,
        json: false,
        directory: Some(dir.path().to_path_buf()),
        env_filter: None,
    };

    let logger = init_logging(&config)?;
    assert!(logger.has_file_output());
    tracing::info!("settings core started");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let written = fs::read_dir(dir.path())?
        .flatten()
        .any(|entry| entry.file_name().to_string_lossy().starts_with("circ-facade"));
    assert!(written);
    Ok(())
}
