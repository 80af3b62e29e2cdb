//! Error types for the procurement workflow domain.
//!
//! The taxonomy is layered:
//!
//! - [`StageError`]: a stage could not produce the fields it owns.
//! - [`ContractViolation`]: a stage broke its declared read/write contract.
//!   This is a programming error, never a business outcome.
//! - [`WorkflowError`]: the engine's terminal error for one run. It wraps
//!   either of the above and carries the trace accumulated up to the failure.
//! - [`ConfigurationError`]: the workflow configuration could not be
//!   loaded. Produced before any run starts.

use thiserror::Error;

use crate::StateField;

// ---------------------------------------------------------------------------
// Stage-level errors
// ---------------------------------------------------------------------------

/// A stage could not produce the fields it owns.
///
/// Stages return this instead of a state; they never hand back a partially
/// updated record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{stage} stage failed: {cause}")]
pub struct StageError {
    stage: String,
    cause: String,
}

impl StageError {
    /// Creates a [`StageError`] for the stage with identifier `stage`.
    pub fn new(stage: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            cause: cause.into(),
        }
    }

    /// Identifier of the failing stage (e.g. `"intake"`).
    pub fn stage(&self) -> &str {
        &self.stage
    }

    /// Human-readable description of the failure.
    pub fn cause(&self) -> &str {
        &self.cause
    }
}

// ---------------------------------------------------------------------------

/// A stage read or wrote state outside its declared contract.
///
/// Checked by [`crate::StageContract`] around every invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// A field the stage reads had not been populated by an earlier stage.
    #[error("required input field '{field}' is not populated")]
    MissingInput {
        /// The unpopulated field.
        field: StateField,
    },

    /// The stage returned without populating a field it owns.
    #[error("owned field '{field}' was not populated")]
    MissingOutput {
        /// The field left empty.
        field: StateField,
    },

    /// The stage's owned field was already populated before it ran.
    #[error("owned field '{field}' was already populated before the stage ran")]
    AlreadyPopulated {
        /// The field that would have been overwritten.
        field: StateField,
    },

    /// The stage changed a field it does not own.
    #[error("field '{field}' is not owned by this stage but was modified")]
    ForeignWrite {
        /// The modified field.
        field: StateField,
    },

    /// Every stage ran but no stage populated `field`.
    #[error("run finished with field '{field}' still unpopulated")]
    IncompleteRun {
        /// The first field left empty.
        field: StateField,
    },
}

// ---------------------------------------------------------------------------
// Run-level errors
// ---------------------------------------------------------------------------

/// Why a run stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowFailure {
    /// The stage reported that it could not produce its fields.
    #[error(transparent)]
    Stage(StageError),

    /// The stage broke its contract with the engine.
    #[error("stage contract violated: {0}")]
    Contract(ContractViolation),
}

impl WorkflowFailure {
    /// Human-readable cause, without the stage prefix.
    pub fn cause(&self) -> String {
        match self {
            WorkflowFailure::Stage(err) => err.cause().to_string(),
            WorkflowFailure::Contract(violation) => {
                format!("stage contract violated: {violation}")
            }
        }
    }
}

/// Terminal error for a single workflow run.
///
/// Produced only by the engine, which short-circuits on the first failing
/// stage. `logs` holds the trace up to and including the `"… failed: …"`
/// entry so callers can report what happened before the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("workflow run failed in stage '{stage}': {failure}")]
pub struct WorkflowError {
    stage: String,
    #[source]
    failure: WorkflowFailure,
    logs: Vec<String>,
}

impl WorkflowError {
    /// Creates a [`WorkflowError`] for `stage` with the trace accumulated so far.
    pub fn new(stage: impl Into<String>, failure: WorkflowFailure, logs: Vec<String>) -> Self {
        Self {
            stage: stage.into(),
            failure,
            logs,
        }
    }

    /// Identifier of the stage at which the run stopped.
    pub fn stage(&self) -> &str {
        &self.stage
    }

    /// The underlying failure.
    pub fn failure(&self) -> &WorkflowFailure {
        &self.failure
    }

    /// The wrapped [`StageError`], if the stage itself reported the failure.
    pub fn stage_error(&self) -> Option<&StageError> {
        match &self.failure {
            WorkflowFailure::Stage(err) => Some(err),
            WorkflowFailure::Contract(_) => None,
        }
    }

    /// Human-readable cause, without the stage prefix.
    pub fn cause(&self) -> String {
        self.failure.cause()
    }

    /// Trace entries recorded before the run stopped.
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    /// Consumes the error and returns its trace.
    pub fn into_logs(self) -> Vec<String> {
        self.logs
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// The workflow configuration is invalid.
///
/// Produced at load time; an engine is never built from an invalid config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The configuration document could not be parsed.
    #[error("configuration could not be parsed: {message}")]
    Malformed {
        /// Parser error message.
        message: String,
    },

    /// A supplier entry has an empty (or whitespace-only) keyword.
    #[error("supplier entry {index} has an empty keyword")]
    EmptyKeyword {
        /// Zero-based position of the entry.
        index: usize,
    },

    /// A supplier entry has an empty supplier name.
    #[error("supplier entry for keyword '{keyword}' has an empty supplier name")]
    EmptySupplier {
        /// Keyword of the offending entry.
        keyword: String,
    },

    /// Two entries share a keyword (compared case-insensitively).
    #[error("duplicate supplier keyword '{keyword}'")]
    DuplicateKeyword {
        /// The repeated keyword, normalised to lower case.
        keyword: String,
    },
}
