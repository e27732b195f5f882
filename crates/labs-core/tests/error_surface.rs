use std::io;
use std::path::Path;

use labs_core::errors::{ErrorInfo, LabsError};

#[test]
fn shape_errors_record_rows_and_cols() {
    let err = LabsError::Shape(ErrorInfo::new("batch-flat-length", "bad storage").with_shape(2, 3));
    assert_eq!(err.code(), "batch-flat-length");
    assert_eq!(err.info().context.get("rows").map(String::as_str), Some("2"));
    assert_eq!(err.info().context.get("cols").map(String::as_str), Some("3"));
}

#[test]
fn config_errors_carry_numeric_context() {
    let err = LabsError::Config(ErrorInfo::new("length-zero", "length must be positive").with_context("length", 0));
    assert_eq!(err.code(), "length-zero");
    assert_eq!(err.info().context.get("length").map(String::as_str), Some("0"));
}

#[test]
fn io_errors_keep_the_path() {
    let missing = io::Error::new(io::ErrorKind::NotFound, "no such file");
    let err = LabsError::io("config-read", Path::new("runs/solver.yaml"), &missing);
    assert!(matches!(err, LabsError::Io(_)));
    assert_eq!(err.code(), "config-read");
    assert_eq!(err.info().context.get("path").map(String::as_str), Some("runs/solver.yaml"));
}

#[test]
fn display_shows_code_context_and_hint() {
    let err = LabsError::Backend(
        ErrorInfo::new("backend-unavailable", "parallel backend is not available")
            .with_context("backend", "parallel")
            .with_hint("build with the `parallel` feature"),
    );
    assert_eq!(
        err.to_string(),
        "backend: [backend-unavailable] parallel backend is not available {backend=parallel}; try: build with the `parallel` feature"
    );
}

#[test]
fn display_omits_empty_context() {
    let err = LabsError::Serde(ErrorInfo::new("json_deserialize", "eof"));
    assert_eq!(err.to_string(), "serde: [json_deserialize] eof");
}

#[test]
fn errors_round_trip_json() {
    let err = LabsError::Shape(ErrorInfo::new("batch-ragged", "rows differ").with_context("row", 1));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Shape\""));
    let decoded: LabsError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
