#![deny(missing_docs)]
#![doc = "Core data types, errors and seeding helpers shared by the LABS crates."]

pub mod errors;
pub mod provenance;
pub mod rng;
pub mod serde;
mod types;

pub use errors::{ErrorInfo, LabsError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};
pub use types::{Batch, Sequence, SolverResult};
