//! Integration tests for the logging document API.

use pyprov::lint::{RuleRegistry, Severity};
use pyprov::logconf::{
    default_config, load_log_config, next_log_path, to_yaml, LogConfigDocument, LogRecordFields,
    LoggerRegistry, StreamTarget, HandlerKind,
};
use pyprov::ProvisionError;
use std::fs;
use tempfile::TempDir;

const CUSTOM: &str = r#"
version: 1
formatters:
  brief:
    format: "%(levelname)-8s %(name)s: %(message)s"
handlers:
  out:
    class: logging.StreamHandler
    formatter: brief
    stream: ext://sys.stdout
  file:
    class: logging.FileHandler
    formatter: brief
    filename: app.log
loggers:
  app:
    level: INFO
    handlers: [out, file]
    propagate: false
  app.db:
    handlers: [out]
root:
  level: WARNING
  handlers: [out]
"#;

fn write(temp: &TempDir, text: &str) -> std::path::PathBuf {
    let path = temp.path().join("log_config.yaml");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn loads_and_resolves_custom_document() {
    let temp = TempDir::new().unwrap();
    let config = load_log_config(&write(&temp, CUSTOM)).unwrap();
    let registry = LoggerRegistry::build(&config).unwrap();

    let app = registry.get("app").unwrap();
    assert_eq!(app.threshold(), 20);
    assert!(!app.propagate());
    assert_eq!(
        app.handlers()[0].kind(),
        &HandlerKind::Stream(StreamTarget::Stdout)
    );

    // Child loggers inherit the nearest configured ancestor level
    assert_eq!(registry.get("app.db").unwrap().threshold(), 20);
    assert_eq!(registry.root().threshold(), 30);
}

#[test]
fn renders_through_handlers() {
    let config = load_log_config_from(CUSTOM);
    let registry = LoggerRegistry::build(&config).unwrap();
    let app = registry.get("app").unwrap();

    let lines = app.render(&LogRecordFields::new("app", 20, "started"));
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], ("out".to_string(), "INFO     app: started".to_string()));

    assert!(app.render(&LogRecordFields::new("app", 10, "noise")).is_empty());
}

fn load_log_config_from(text: &str) -> pyprov::logconf::LoggingConfig {
    let temp = TempDir::new().unwrap();
    load_log_config(&write(&temp, text)).unwrap()
}

#[test]
fn undefined_reference_is_rejected_on_load() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "loggers:\n  master:\n    handlers: [file]\n");

    match load_log_config(&path) {
        Err(ProvisionError::ConfigValidationError { message }) => {
            assert!(message.contains("undefined handler 'file'"));
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn missing_document_is_not_found() {
    let temp = TempDir::new().unwrap();
    let err = load_log_config(&temp.path().join("log_config.yaml")).unwrap_err();
    assert!(matches!(err, ProvisionError::ConfigNotFound { .. }));
}

#[test]
fn default_document_round_trips() {
    let config = default_config().unwrap();
    let text = to_yaml(&config).unwrap();
    assert!(text.contains("propagate: false"));
    assert!(!text.contains("propogate"));

    let temp = TempDir::new().unwrap();
    assert_eq!(load_log_config(&write(&temp, &text)).unwrap(), config);
}

#[test]
fn lint_finds_problems_load_accepts() {
    let text = r#"
version: 2
handlers:
  rotating:
    class: logging.handlers.RotatingFileHandler
    filename: app.log
loggers:
  app:
    level: info
    handlers: [rotating]
"#;
    let temp = TempDir::new().unwrap();
    let path = write(&temp, text);
    assert!(load_log_config(&path).is_ok());

    let doc = LogConfigDocument::read(&path).unwrap();
    let diagnostics = RuleRegistry::with_builtins().check(&doc);
    let ids: Vec<&str> = diagnostics.iter().map(|d| d.rule_id.0.as_str()).collect();

    assert!(ids.contains(&"unsupported-version"));
    assert!(ids.contains(&"rotation-policy"));
    assert!(ids.contains(&"unknown-level"));
    assert_eq!(diagnostics[0].severity, Severity::Error);
}

#[test]
fn redirected_file_handler_writes_to_dated_file() {
    let temp = TempDir::new().unwrap();
    let mut registry = LoggerRegistry::build(&default_config().unwrap()).unwrap();
    let target = next_log_path(
        temp.path(),
        chrono::NaiveDate::from_ymd_opt(2022, 7, 21).unwrap(),
    );

    registry.redirect_file_handler("master", &target).unwrap();

    let master = registry.get("master").unwrap();
    assert!(master
        .handlers()
        .iter()
        .any(|h| h.filename() == Some(target.as_path())));
    assert!(target.ends_with("2022-07-21_001.log"));
}
