//! The contract every workflow stage satisfies.
//!
//! A stage is a pure transform `WorkflowState -> Result<WorkflowState,
//! StageError>`. It declares which fields it reads and which it writes; the
//! engine checks those declarations around every invocation with
//! [`StageContract::check_preconditions`] and
//! [`StageContract::check_postconditions`].
//!
//! Stages perform no I/O, keep no memory between calls, and never touch
//! `logs`. The engine derives the trace entry for a stage from the state the
//! stage returned, via [`Stage::trace_entry`].

use crate::{ContractViolation, StageError, StateField, WorkflowState};

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

/// Declared reads and writes of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageContract {
    /// Fields that must be populated before the stage runs.
    pub reads: &'static [StateField],
    /// Fields the stage owns. They must be empty before and populated after.
    pub writes: &'static [StateField],
}

impl StageContract {
    /// Creates a contract from its read and write sets.
    pub const fn new(reads: &'static [StateField], writes: &'static [StateField]) -> Self {
        Self { reads, writes }
    }

    /// Returns `true` if the stage owns `field`.
    pub fn owns(&self, field: StateField) -> bool {
        self.writes.contains(&field)
    }

    /// Checks the state handed to the stage.
    ///
    /// Every read field must be populated and every owned field must still be
    /// empty, so a stage can never overwrite a value set earlier.
    pub fn check_preconditions(&self, state: &WorkflowState) -> Result<(), ContractViolation> {
        if let Some(&field) = self.reads.iter().find(|f| !state.is_populated(**f)) {
            return Err(ContractViolation::MissingInput { field });
        }
        if let Some(&field) = self.writes.iter().find(|f| state.is_populated(**f)) {
            return Err(ContractViolation::AlreadyPopulated { field });
        }
        Ok(())
    }

    /// Checks the state the stage returned against the state it was given.
    ///
    /// Owned fields must now be populated; every other field, including
    /// `raw_request` and `logs`, must be unchanged.
    pub fn check_postconditions(
        &self,
        before: &WorkflowState,
        after: &WorkflowState,
    ) -> Result<(), ContractViolation> {
        for field in StateField::ALL {
            if self.owns(field) {
                if !after.is_populated(field) {
                    return Err(ContractViolation::MissingOutput { field });
                }
            } else if !before.field_matches(after, field) {
                return Err(ContractViolation::ForeignWrite { field });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Stage port
// ---------------------------------------------------------------------------

/// One step of the procurement workflow.
///
/// Implementations must be stateless with respect to individual runs; an
/// engine may be shared across threads and invoke the same stage for
/// independent requests.
pub trait Stage: Send + Sync {
    /// Stable identifier used in errors (e.g. `"intake"`).
    fn id(&self) -> &'static str;

    /// Display label used in trace entries (e.g. `"Intake"`).
    fn label(&self) -> &'static str;

    /// Fields this stage reads and writes.
    fn contract(&self) -> StageContract;

    /// Transforms the state, or reports why it could not.
    fn run(&self, state: WorkflowState) -> Result<WorkflowState, StageError>;

    /// Trace entry describing a successful invocation, derived from the state
    /// the stage returned.
    fn trace_entry(&self, state: &WorkflowState) -> String;
}
