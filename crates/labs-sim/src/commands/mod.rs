use std::error::Error;
use std::path::Path;

use labs_core::serde::to_canonical_json_bytes;
use labs_search::SolverConfig;
use serde::Serialize;

pub mod compare;
pub mod doctor;
pub mod energy;
pub mod solve;

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    let bytes = to_canonical_json_bytes(value)?;
    println!("{}", String::from_utf8(bytes)?);
    Ok(())
}

pub(crate) fn load_config(
    path: Option<&Path>,
    seed: Option<u64>,
) -> Result<SolverConfig, Box<dyn Error>> {
    let mut config = match path {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}
