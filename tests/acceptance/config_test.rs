//! Configuration acceptance tests.
//!
//! Loads clock configuration from files on disk and checks the clock built
//! from it behaves as configured.

use super::common::init_tracing;
use anyhow::Result;
use sectime_clock::{from_config, AnyClock, ClockSource};
use sectime_common::{ClockConfig, ConfigError, SourceKind, TimeValue};
use std::io::Write;

fn write_config(contents: &str) -> Result<tempfile::NamedTempFile> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_manual_clock_from_file() -> Result<()> {
    init_tracing();

    let file = write_config(
        r#"
        source = "manual"

        [manual]
        start = "2s"
        step = "500ms"
        "#,
    )?;

    let config = ClockConfig::from_file(file.path())?;
    assert_eq!(config.source, SourceKind::Manual);

    let clock = from_config(&config);
    assert!(matches!(clock, AnyClock::Manual(_)));
    assert_eq!(clock.now(), TimeValue::from_secs(2));
    assert_eq!(clock.now(), TimeValue::from_millis(2500));
    Ok(())
}

#[test]
fn test_os_clock_from_file() -> Result<()> {
    let file = write_config(r#"source = "boottime""#)?;

    let clock = from_config(&ClockConfig::from_file(file.path())?);
    assert!(matches!(clock, AnyClock::Monotonic(_)));
    let a = clock.now();
    let b = clock.now();
    assert!(b >= a);
    Ok(())
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");

    match ClockConfig::from_file(&path) {
        Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn test_unknown_source_rejected() -> Result<()> {
    let file = write_config(r#"source = "realtime""#)?;
    assert!(matches!(
        ClockConfig::from_file(file.path()),
        Err(ConfigError::Parse(_))
    ));
    Ok(())
}

#[test]
fn test_config_roundtrip_through_file() -> Result<()> {
    let mut config = ClockConfig::default();
    config.source = SourceKind::Manual;
    config.manual.start = TimeValue::INFINITE;
    config.manual.step = TimeValue::from_micros(1);

    let file = write_config(&config.to_toml()?)?;
    let loaded = ClockConfig::from_file(file.path())?;
    assert_eq!(loaded, config);
    Ok(())
}
