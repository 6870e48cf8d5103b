use circ_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn writes_json_lines_to_the_rolling_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let directory = tmp.path().join("logs");

    let logger = Logger::builder("circ-file")
        .console(false)
        .json(true)
        .directory(&directory)
        .level(LevelFilter::INFO)
        .init()?;
    assert!(logger.has_file_output());

    tracing::info!(form = "loan-policy", "Settings saved");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&directory)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let content = fs::read_to_string(log_file)?;
    assert!(content.contains("\"form\":\"loan-policy\""));
    Ok(())
}
