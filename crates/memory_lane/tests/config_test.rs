use memory_lane::{MemoryLaneConfig, MemoryLaneErrorKind};
use std::io::Write;

#[test]
fn bundled_defaults_load() -> anyhow::Result<()> {
    let config = MemoryLaneConfig::from_toml_str("")?;

    assert_eq!(config.model.name, "gemini-2.5-flash");
    assert_eq!(config.model.rpm, Some(10));
    assert_eq!(config.upload.max_file_bytes, 10 * 1024 * 1024);
    assert_eq!(config.upload.ticks, 10);
    assert_eq!(config.upload.tick_ms, 200);
    assert_eq!(config.fetch.timeout_secs, 30);
    Ok(())
}

#[test]
fn overrides_merge_over_defaults() -> anyhow::Result<()> {
    let config = MemoryLaneConfig::from_toml_str(
        r#"
        [model]
        name = "gemini-2.5-pro"
        max_retries = 2

        [upload]
        ticks = 4
        "#,
    )?;

    assert_eq!(config.model.name, "gemini-2.5-pro");
    assert_eq!(config.model.max_retries, Some(2));
    assert_eq!(config.model.rpm, Some(10));
    assert_eq!(config.upload.ticks, 4);
    assert_eq!(config.upload.tick_ms, 200);
    Ok(())
}

#[test]
fn zero_ticks_are_rejected() {
    let err = MemoryLaneConfig::from_toml_str("[upload]\nticks = 0\n").unwrap_err();
    match err.kind() {
        MemoryLaneErrorKind::Config(e) => assert_eq!(e.key.as_deref(), Some("upload.ticks")),
        other => panic!("expected config error, got {other}"),
    }
}

#[test]
fn explicit_file_is_layered() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "[fetch]\ntimeout_secs = 5")?;

    let config = MemoryLaneConfig::from_file(file.path())?;

    assert_eq!(config.fetch.timeout_secs, 5);
    assert_eq!(config.model.name, "gemini-2.5-flash");
    Ok(())
}

#[test]
fn missing_explicit_file_is_an_error() {
    let err = MemoryLaneConfig::from_file("/definitely/not/here/memory_lane.toml").unwrap_err();
    assert!(matches!(err.kind(), MemoryLaneErrorKind::Config(_)));
}
