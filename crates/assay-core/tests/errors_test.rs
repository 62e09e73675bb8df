//! Tests for the assay error handling system.

use std::collections::HashSet;

use assay_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let config = ConfigError::FileNotFound { path: "/tmp".into() };
    assert_eq!(config.error_code(), "CONFIG_ERROR");

    let catalog = CatalogError::DuplicateField("owner_users".into());
    assert_eq!(catalog.error_code(), "CATALOG_ERROR");

    let fetch = FetchError::Unavailable("down".into());
    assert_eq!(fetch.error_code(), "FETCH_ERROR");

    let limited = FetchError::RateLimited { retry_after_ms: 500 };
    assert_eq!(limited.error_code(), "FETCH_RATE_LIMITED");

    let invalid = EvaluationError::InvalidAsset {
        guid: "g1".into(),
        reason: "no type".into(),
    };
    assert_eq!(invalid.error_code(), "INVALID_ASSET");

    let pipeline = PipelineError::Cancelled { processed: 3 };
    assert_eq!(pipeline.error_code(), "CANCELLED");
}

#[test]
fn test_from_conversions_keep_inner_code() {
    let pipeline: PipelineError = FetchError::RateLimited { retry_after_ms: 10 }.into();
    assert!(matches!(pipeline, PipelineError::Fetch(FetchError::RateLimited { .. })));
    assert_eq!(pipeline.error_code(), "FETCH_RATE_LIMITED");

    let pipeline: PipelineError = CatalogError::UnknownUseCase("x".into()).into();
    assert_eq!(pipeline.error_code(), "CATALOG_ERROR");

    let pipeline: PipelineError = ConfigError::InvalidValue {
        field: "scoring.methodology".into(),
        message: "nope".into(),
    }
    .into();
    assert_eq!(pipeline.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_coded_string_format() {
    let err = PipelineError::AssetFailed {
        guid: "abc".into(),
        message: "boom".into(),
    };
    assert_eq!(err.coded_string(), "[ASSET_FAILED] Asset abc failed: boom");
}

#[test]
fn test_display_messages_are_distinct() {
    let messages: HashSet<String> = [
        FetchError::Unavailable("a".into()).to_string(),
        FetchError::InvalidScope("a".into()).to_string(),
        FetchError::Malformed("a".into()).to_string(),
        CatalogError::UnknownUseCase("a".into()).to_string(),
        CatalogError::DuplicateField("a".into()).to_string(),
    ]
    .into_iter()
    .collect();
    assert_eq!(messages.len(), 5);
}

#[test]
fn test_pipeline_result_collects_non_fatal_errors() {
    let mut result: PipelineResult<Vec<u32>> = PipelineResult::new(vec![1, 2]);
    assert!(result.is_clean());
    result.add_error(PipelineError::AssetFailed {
        guid: "g".into(),
        message: "m".into(),
    });
    assert!(!result.is_clean());
    result.add_error(PipelineError::Cancelled { processed: 2 });
    assert_eq!(result.error_count(), 2);
    assert_eq!(result.failed_guids().collect::<Vec<_>>(), vec!["g"]);
    assert_eq!(result.data, vec![1, 2]);
}
