/// Line sources feeding the miner from files
use logmine::report::summarize;
use logmine::sources::{JsonMessageSource, PlainTextSource};
use logmine::traits::LineSource;
use logmine::LogMiner;
use std::io::Write;

const JSON_LOGS: &str = r#"[
    { "message": "2020-09-06T16:00:00 Disconnected from broker broker1" },
    { "message": "2020-09-06T16:00:00 Disconnected from broker broker2" },
    { "message": "2020-09-06T16:00:00 Disconnected from broker broker3" },
    { "message": "2020-09-06T16:00:00 Disconnected from broker broker4" }
]"#;

#[test]
fn test_json_file_source() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(JSON_LOGS.as_bytes())?;

    let source = JsonMessageSource::from_path(file.path());
    let lines = source.load_lines()?;
    assert_eq!(lines.len(), 4);

    let mut miner = LogMiner::new();
    miner.add_all(&lines);

    let summaries = summarize(&miner);
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, "DateTime Disconnected from broker WORD");
    assert_eq!(summaries[0].size, 4);
    Ok(())
}

#[test]
fn test_text_file_source() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "user alice logged in")?;
    writeln!(file)?;
    writeln!(file, "user bob logged in")?;

    let source = PlainTextSource::from_path(file.path());
    let lines = source.load_lines()?;
    assert_eq!(lines, vec!["user alice logged in", "user bob logged in"]);
    assert_eq!(source.name(), file.path().display().to_string());
    Ok(())
}

#[test]
fn test_reader_source() -> anyhow::Result<()> {
    let source = JsonMessageSource::from_reader("stdin", JSON_LOGS.as_bytes())?;
    assert_eq!(source.name(), "stdin");
    assert_eq!(source.load_lines()?.len(), 4);
    Ok(())
}

#[test]
fn test_malformed_json_names_source() {
    let source = JsonMessageSource::from_string("payload.json", "[ { \"message\": 42 } ]");
    let err = source.load_lines().unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("payload.json"));
    assert!(message.contains("Entry 0"));
}

#[test]
fn test_in_memory_source() -> anyhow::Result<()> {
    let lines = vec!["a b c".to_string(), "a b d".to_string()];
    assert_eq!(lines.load_lines()?, lines);
    assert_eq!(LineSource::name(&lines), "in-memory");
    Ok(())
}
