use std::error::Error;
use std::thread;

use clap::Args;
use labs_energy::backend::{self, BackendKind};
use serde::Serialize;

use super::print_json;

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Emit only JSON without the status line.
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct BackendCheck {
    name: String,
    ok: bool,
    detail: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    accelerator_available: bool,
    available_parallelism: usize,
    backends: Vec<BackendCheck>,
}

pub fn run(args: &DoctorArgs) -> Result<(), Box<dyn Error>> {
    let report = diagnose();
    if !args.quiet {
        eprintln!(
            "labs-sim doctor: accelerator {}",
            if report.accelerator_available {
                "available"
            } else {
                "unavailable"
            }
        );
    }
    print_json(&report)
}

fn diagnose() -> DoctorReport {
    let backends = [BackendKind::Standard, BackendKind::Parallel]
        .into_iter()
        .map(|kind| match backend::by_kind(kind) {
            Ok(_) => BackendCheck {
                name: kind.to_string(),
                ok: true,
                detail: "available".into(),
            },
            Err(err) => BackendCheck {
                name: kind.to_string(),
                ok: false,
                detail: err.info().hint.clone().unwrap_or_else(|| err.to_string()),
            },
        })
        .collect();
    DoctorReport {
        accelerator_available: backend::accelerator_available(),
        available_parallelism: thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1),
        backends,
    }
}
