//! The workflow engine: runs stages in order over one request's state.

use pipeline::{
    ContractViolation, RunId, Stage, WorkflowConfig, WorkflowError, WorkflowFailure,
    WorkflowState,
};
use tracing::{debug, info, info_span, warn};

use crate::{ApprovalStage, IntakeStage, SupplierStage};

/// Stage name reported when the run as a whole, not a single stage, fails.
pub const WORKFLOW_ID: &str = "workflow";

/// Owns an ordered list of stages and threads a fresh [`WorkflowState`]
/// through them for every request.
///
/// The engine is the only writer of `logs`: one `"Received request"` entry,
/// then one entry per completed stage, or a single `"<Stage> failed: …"`
/// entry before it stops. A run whose stages leave any owned field empty
/// fails as [`WORKFLOW_ID`] instead of returning a partial state. It holds no per-run state, so one engine can serve
/// any number of runs, including from several threads.
pub struct WorkflowEngine {
    stages: Vec<Box<dyn Stage>>,
}

impl WorkflowEngine {
    /// Builds the standard Intake → Supplier → Approval workflow.
    pub fn new(config: WorkflowConfig) -> Self {
        let policy = config.policy();
        Self::with_stages(vec![
            Box::new(IntakeStage::new()),
            Box::new(SupplierStage::new(config.suppliers)),
            Box::new(ApprovalStage::new(policy)),
        ])
    }

    /// Builds an engine over an explicit stage list, run in the given order.
    pub fn with_stages(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Identifiers of the configured stages, in execution order.
    pub fn stage_ids(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.id()).collect()
    }

    /// Processes one request end-to-end.
    ///
    /// Stops at the first stage that fails or breaks its contract. The error
    /// carries the trace up to and including the failure entry; no partially
    /// populated state is ever returned as a success.
    pub fn run(&self, raw_request: &str) -> Result<WorkflowState, WorkflowError> {
        let run_id = RunId::new_random();
        let span = info_span!("workflow_run", run_id = %run_id);
        let _guard = span.enter();

        let mut state = WorkflowState::new(raw_request);
        state.record(format!("Received request: {raw_request}"));
        info!(request = raw_request, "request received");

        for stage in &self.stages {
            state = invoke(stage.as_ref(), state)?;
        }

        if let Some(field) = state.first_unpopulated() {
            let failure = WorkflowFailure::Contract(ContractViolation::IncompleteRun { field });
            let cause = failure.cause();
            warn!(field = %field, "workflow run ended incomplete");
            state.record(format!("Workflow failed: {cause}"));
            return Err(WorkflowError::new(WORKFLOW_ID, failure, state.into_logs()));
        }

        info!(
            approved = ?state.approved(),
            supplier = ?state.supplier().map(|s| s.as_str()),
            "workflow run completed"
        );
        Ok(state)
    }
}

impl Default for WorkflowEngine {
    fn default() -> Self {
        Self::new(WorkflowConfig::default())
    }
}

impl std::fmt::Debug for WorkflowEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowEngine")
            .field("stages", &self.stage_ids())
            .finish()
    }
}

fn invoke(stage: &dyn Stage, state: WorkflowState) -> Result<WorkflowState, WorkflowError> {
    let contract = stage.contract();
    if let Err(violation) = contract.check_preconditions(&state) {
        return Err(fail(stage, state, WorkflowFailure::Contract(violation)));
    }

    debug!(stage = stage.id(), "stage started");
    // The pre-stage state is the last valid state if the stage fails.
    let before = state.clone();
    let mut next = match stage.run(state) {
        Ok(next) => next,
        Err(err) => return Err(fail(stage, before, WorkflowFailure::Stage(err))),
    };
    if let Err(violation) = contract.check_postconditions(&before, &next) {
        return Err(fail(stage, before, WorkflowFailure::Contract(violation)));
    }

    let entry = stage.trace_entry(&next);
    debug!(stage = stage.id(), entry = %entry, "stage completed");
    next.record(entry);
    Ok(next)
}

fn fail(
    stage: &dyn Stage,
    mut last_valid: WorkflowState,
    failure: WorkflowFailure,
) -> WorkflowError {
    let cause = failure.cause();
    warn!(stage = stage.id(), cause = %cause, "stage failed");
    last_valid.record(format!("{} failed: {}", stage.label(), cause));
    WorkflowError::new(stage.id(), failure, last_valid.into_logs())
}
