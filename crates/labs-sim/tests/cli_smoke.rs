use std::process::Command;

use serde_json::Value;

fn labs_sim(args: &[&str]) -> Value {
    let output = Command::new(env!("CARGO_BIN_EXE_labs-sim"))
        .args(args)
        .output()
        .expect("run labs-sim");
    assert!(
        output.status.success(),
        "labs-sim {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    let body = String::from_utf8(output.stdout).expect("utf8");
    serde_json::from_str(&body).expect("json")
}

#[test]
fn energy_of_barker_3() {
    let value = labs_sim(&["energy", "--sequence", "1,1,-1"]);
    assert_eq!(value["energy"].as_f64(), Some(1.0));
    assert_eq!(value["length"].as_u64(), Some(3));
    assert_eq!(value["merit_factor"].as_f64(), Some(4.5));
    assert_eq!(value["binary"].as_bool(), Some(true));
}

#[test]
fn energy_accepts_leading_negative() {
    let value = labs_sim(&["energy", "--sequence", "-1,1,-1,1", "--accelerate"]);
    assert_eq!(value["energy"].as_f64(), Some(14.0));
}

#[test]
fn solve_writes_summary_and_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("run");
    let value = labs_sim(&[
        "solve",
        "--length",
        "10",
        "--seeded",
        "--seed",
        "7",
        "--out",
        out.to_str().expect("utf8 path"),
    ]);
    assert_eq!(value["strategy"].as_str(), Some("seeded"));
    assert!(value["result"]["best_energy"].as_f64().unwrap() >= 0.0);
    assert_eq!(value["provenance"]["seed"].as_u64(), Some(7));
    assert!(out.join("config.yaml").exists());
    let summary = labs_search::SolveReport::read_json(&out.join("summary.json")).expect("summary");
    assert_eq!(summary.provenance.seed, Some(7));
    assert_eq!(
        summary.result.best_energy,
        value["result"]["best_energy"].as_f64().unwrap()
    );
}

#[test]
fn accelerate_flag_is_shared_across_subcommands() {
    let energy = labs_sim(&["energy", "--sequence", "1,1,1", "--accelerate"]);
    assert_eq!(energy["energy"].as_f64(), Some(5.0));
    let solve = labs_sim(&["solve", "--length", "6", "--accelerate", "--seed", "1"]);
    assert!(solve["result"]["best_energy"].as_f64().unwrap() >= 0.0);
    let compare = labs_sim(&["compare", "--length", "6", "--trials", "1", "--accelerate", "--seed", "1"]);
    assert_eq!(compare["baseline"]["trials"].as_u64(), Some(1));
}

#[test]
fn compare_reports_both_strategies() {
    let value = labs_sim(&["compare", "--length", "8", "--trials", "2", "--seed", "3"]);
    assert_eq!(value["baseline"]["trials"].as_u64(), Some(2));
    assert_eq!(value["seeded"]["strategy"].as_str(), Some("seeded"));
}

#[test]
fn doctor_lists_backends() {
    let value = labs_sim(&["doctor", "--quiet"]);
    let backends = value["backends"].as_array().cloned().unwrap_or_default();
    assert_eq!(backends.len(), 2);
    assert_eq!(backends[0]["name"].as_str(), Some("standard"));
}
