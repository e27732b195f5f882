use std::fs;

use labs_search::{SolverConfig, TimeoutPolicy, ACCELERATED_BATCH_SIZE};

#[test]
fn omitted_fields_take_defaults() {
    let config = SolverConfig::from_yaml_str("standard_batch_size: 50\n").unwrap();
    assert_eq!(config.standard_batch_size, 50);
    assert_eq!(config.accelerated_batch_size, ACCELERATED_BATCH_SIZE);
    assert_eq!(config.max_flip_rounds, 3);
    assert_eq!(config.elite.minimum, 10);
    assert_eq!(config.timeout_policy, TimeoutPolicy::Advisory);
    assert_eq!(config.seed, None);
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solver.yaml");
    let config = SolverConfig {
        timeout_policy: TimeoutPolicy::Cooperative,
        seed: Some(99),
        ..SolverConfig::default()
    };
    fs::write(&path, config.to_yaml_string().unwrap()).unwrap();
    assert_eq!(SolverConfig::load(&path).unwrap(), config);
}

#[test]
fn bad_documents_surface_structured_errors() {
    let err = SolverConfig::from_yaml_str("timeout_policy: sometimes\n").unwrap_err();
    assert_eq!(err.info().code, "config-parse");
    let err = SolverConfig::from_yaml_str("elite: { divisor: 0 }\n").unwrap_err();
    assert_eq!(err.info().code, "elite-divisor");
    let err = SolverConfig::load(std::path::Path::new("/nonexistent/solver.yaml")).unwrap_err();
    assert_eq!(err.info().code, "config-read");
}
