//! Error payloads for sequence parsing, batch shapes, solver configuration,
//! backend lookup and report I/O.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine readable description carried by every [`LabsError`].
///
/// `code` is a stable kebab-case identifier such as `batch-ragged` or
/// `config-read`; tests and the CLI match on it rather than on `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable kebab-case error code.
    pub code: String,
    /// Diagnostic message, usually the underlying library error.
    pub message: String,
    /// Offending values keyed by name (`rows`, `cols`, `length`, `path`).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Suggested remedy, e.g. which flag or config key to change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Starts a payload from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records an offending value under `key`.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Records a `rows × cols` batch shape.
    pub fn with_shape(self, rows: usize, cols: usize) -> Self {
        self.with_context("rows", rows).with_context("cols", cols)
    }

    /// Records the file a config or report operation touched.
    pub fn with_path(self, path: &Path) -> Self {
        self.with_context("path", path.display())
    }

    /// Attaches a suggested remedy.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, " {{{}}}", pairs.join(", "))?;
        }
        if let Some(hint) = &self.hint {
            write!(f, "; try: {hint}")?;
        }
        Ok(())
    }
}

/// Error type returned by every fallible operation in the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum LabsError {
    /// Unparseable sequences, ragged rows, storage that does not match a shape.
    #[error("shape: {0}")]
    Shape(ErrorInfo),
    /// Zero lengths, zero elite divisors and other unusable solver settings.
    #[error("config: {0}")]
    Config(ErrorInfo),
    /// A named backend that did not pass the availability probe.
    #[error("backend: {0}")]
    Backend(ErrorInfo),
    /// JSON or YAML encoding failures.
    #[error("serde: {0}")]
    Serde(ErrorInfo),
    /// Reading configs or writing reports.
    #[error("io: {0}")]
    Io(ErrorInfo),
}

impl LabsError {
    /// Wraps a filesystem failure on `path`.
    pub fn io(code: &str, path: &Path, err: &io::Error) -> Self {
        LabsError::Io(ErrorInfo::new(code, err.to_string()).with_path(path))
    }

    /// Payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            LabsError::Shape(info)
            | LabsError::Config(info)
            | LabsError::Backend(info)
            | LabsError::Serde(info)
            | LabsError::Io(info) => info,
        }
    }

    /// Shorthand for `self.info().code`.
    pub fn code(&self) -> &str {
        &self.info().code
    }
}
