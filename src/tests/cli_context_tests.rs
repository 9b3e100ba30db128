use crate::cli_context::CliContextBuilder;
use crate::error::ProvisionError;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_builder_requires_token() {
    let context = CliContextBuilder::new().with_repo("octo/widgets").build();
    assert!(matches!(context, Err(ProvisionError::MissingToken)));
}

#[test]
fn test_blank_token_is_missing() {
    let context = CliContextBuilder::new()
        .with_token(Some("   ".to_string()))
        .build();
    assert!(matches!(context, Err(ProvisionError::MissingToken)));
}

#[test]
fn test_token_checked_before_repo() {
    // A malformed repo must not mask the missing credential
    let context = CliContextBuilder::new().with_repo("not-a-repo").build();
    assert!(matches!(context, Err(ProvisionError::MissingToken)));
}

#[test]
fn test_builder_defaults() {
    let context = CliContextBuilder::new()
        .with_token(Some("test-token".to_string()))
        .build()
        .unwrap();

    let settings = context.settings();
    assert_eq!(settings.token, "test-token");
    assert_eq!(settings.repo.to_string(), "Oipnet/HydroSense");
    assert_eq!(settings.api_base, "https://api.github.com");
    assert_eq!(settings.data_file, PathBuf::from("issues-data.json"));
    assert_eq!(settings.label_delay, Duration::from_millis(100));
    assert_eq!(settings.issue_delay, Duration::from_millis(500));
    assert_eq!(settings.request_timeout, Duration::from_secs(30));
    assert!(!settings.fail_on_error);
    assert!(!settings.dry_run);
}

#[test]
fn test_builder_overrides() {
    let context = CliContextBuilder::new()
        .with_token(Some("test-token".to_string()))
        .with_repo("octo/widgets")
        .with_data_file("seed.json")
        .without_delays()
        .with_timeout(Duration::from_secs(5))
        .fail_on_error(true)
        .build()
        .unwrap();

    let settings = context.settings();
    assert_eq!(settings.repo.owner, "octo");
    assert_eq!(settings.repo.name, "widgets");
    assert_eq!(settings.data_file, PathBuf::from("seed.json"));
    assert_eq!(settings.label_delay, Duration::ZERO);
    assert_eq!(settings.issue_delay, Duration::ZERO);
    assert_eq!(settings.request_timeout, Duration::from_secs(5));
    assert!(settings.fail_on_error);
}

#[test]
fn test_invalid_repo_is_rejected() {
    let context = CliContextBuilder::new()
        .with_token(Some("test-token".to_string()))
        .with_repo("widgets")
        .build();
    assert!(matches!(context, Err(ProvisionError::InvalidInput(_))));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let context = CliContextBuilder::new()
        .with_token(Some("test-token".to_string()))
        .with_timeout(Duration::ZERO)
        .build();
    assert!(matches!(context, Err(ProvisionError::InvalidInput(_))));
}

#[test]
fn test_colors_file_is_merged() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"newlabel": "123abc"}}"#).unwrap();

    let context = CliContextBuilder::new()
        .with_token(Some("test-token".to_string()))
        .with_colors_file(file.path())
        .build()
        .unwrap();

    let colors = &context.settings().colors;
    assert_eq!(colors.color_for("newlabel"), "123ABC");
    assert_eq!(colors.color_for("backend"), "0075CA");
}

#[test]
fn test_missing_colors_file() {
    let context = CliContextBuilder::new()
        .with_token(Some("test-token".to_string()))
        .with_colors_file("/nonexistent/colors.json")
        .build();
    assert!(matches!(context, Err(ProvisionError::FileMissing(_))));
}

#[test]
fn test_client_is_created_once() {
    let mut context = CliContextBuilder::new()
        .with_token(Some("test-token".to_string()))
        .build()
        .unwrap();

    let first = context.client().unwrap();
    let second = context.client().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.repo().to_string(), "Oipnet/HydroSense");
}
