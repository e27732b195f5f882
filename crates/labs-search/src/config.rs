use std::fs;
use std::path::Path;

use labs_core::errors::{ErrorInfo, LabsError};
use serde::{Deserialize, Serialize};

/// Batch size used when the accelerated backend evaluates candidates.
pub const ACCELERATED_BATCH_SIZE: usize = 10_000;
/// Batch size used on the standard backend.
pub const STANDARD_BATCH_SIZE: usize = 100;
/// Default number of hill-climbing rounds per elite candidate.
pub const DEFAULT_MAX_FLIP_ROUNDS: usize = 3;

/// YAML-configurable parameters governing a solver run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Candidates drawn per call when the accelerated backend is in use.
    #[serde(default = "default_accelerated_batch_size")]
    pub accelerated_batch_size: usize,
    /// Candidates drawn per call on the standard backend.
    #[serde(default = "default_standard_batch_size")]
    pub standard_batch_size: usize,
    /// Elite subset sizing for the seeded strategy.
    #[serde(default)]
    pub elite: EliteConfig,
    /// Upper bound on hill-climbing rounds per elite candidate.
    #[serde(default = "default_max_flip_rounds")]
    pub max_flip_rounds: usize,
    /// How the request's timeout is treated.
    #[serde(default)]
    pub timeout_policy: TimeoutPolicy,
    /// Optional sampling seed; OS entropy is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_accelerated_batch_size() -> usize {
    ACCELERATED_BATCH_SIZE
}

fn default_standard_batch_size() -> usize {
    STANDARD_BATCH_SIZE
}

fn default_max_flip_rounds() -> usize {
    DEFAULT_MAX_FLIP_ROUNDS
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            accelerated_batch_size: default_accelerated_batch_size(),
            standard_batch_size: default_standard_batch_size(),
            elite: EliteConfig::default(),
            max_flip_rounds: default_max_flip_rounds(),
            timeout_policy: TimeoutPolicy::default(),
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Parses a YAML document, filling omitted fields with defaults.
    pub fn from_yaml_str(contents: &str) -> Result<Self, LabsError> {
        let config: Self = serde_yaml::from_str(contents).map_err(|err| {
            LabsError::Serde(ErrorInfo::new("config-parse", err.to_string()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, LabsError> {
        let contents =
            fs::read_to_string(path).map_err(|err| LabsError::io("config-read", path, &err))?;
        Self::from_yaml_str(&contents)
    }

    /// Serializes the configuration as YAML.
    pub fn to_yaml_string(&self) -> Result<String, LabsError> {
        serde_yaml::to_string(self)
            .map_err(|err| LabsError::Serde(ErrorInfo::new("config-serialize", err.to_string())))
    }

    /// Rejects values the solver cannot run with.
    pub fn validate(&self) -> Result<(), LabsError> {
        if self.elite.divisor == 0 {
            return Err(LabsError::Config(
                ErrorInfo::new("elite-divisor", "elite divisor must be at least 1")
                    .with_context("divisor", self.elite.divisor)
                    .with_hint("set elite.divisor to 100 to keep the top 1% of each batch"),
            ));
        }
        Ok(())
    }

    /// Batch size for a run on the given backend class.
    pub fn batch_size(&self, accelerated: bool) -> usize {
        if accelerated {
            self.accelerated_batch_size
        } else {
            self.standard_batch_size
        }
    }
}

/// Elite subset sizing: `max(minimum, batch / divisor)`, capped at the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliteConfig {
    /// Batch size is divided by this to get the elite size.
    #[serde(default = "default_elite_divisor")]
    pub divisor: usize,
    /// Floor on the elite size.
    #[serde(default = "default_elite_minimum")]
    pub minimum: usize,
}

fn default_elite_divisor() -> usize {
    100
}

fn default_elite_minimum() -> usize {
    10
}

impl Default for EliteConfig {
    fn default() -> Self {
        Self {
            divisor: default_elite_divisor(),
            minimum: default_elite_minimum(),
        }
    }
}

impl EliteConfig {
    /// Number of elite candidates kept from a batch of `batch_size`.
    pub fn count(&self, batch_size: usize) -> usize {
        let scaled = batch_size / self.divisor.max(1);
        scaled.max(self.minimum).min(batch_size)
    }
}

/// Treatment of the request timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeoutPolicy {
    /// Accept the timeout and never check it.
    #[default]
    Advisory,
    /// Check the deadline between elite hill-climbs and stop early once passed.
    Cooperative,
}
