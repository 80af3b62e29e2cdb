//! Approval: applies the quantity threshold policy.

use pipeline::{ApprovalPolicy, Stage, StageContract, StageError, StateField, WorkflowState};

use crate::or_dash;

const CONTRACT: StageContract = StageContract::new(
    &[StateField::Quantity],
    &[StateField::Approved, StateField::Reason],
);

#[derive(Debug, Clone, Copy, Default)]
pub struct ApprovalStage {
    policy: ApprovalPolicy,
}

impl ApprovalStage {
    pub const ID: &'static str = "approval";

    pub fn new(policy: ApprovalPolicy) -> Self {
        Self { policy }
    }
}

impl Stage for ApprovalStage {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn label(&self) -> &'static str {
        "Approval"
    }

    fn contract(&self) -> StageContract {
        CONTRACT
    }

    fn run(&self, state: WorkflowState) -> Result<WorkflowState, StageError> {
        let quantity = state
            .quantity()
            .ok_or_else(|| StageError::new(Self::ID, "quantity is not populated"))?;
        let decision = self.policy.decide(quantity);
        Ok(state.with_decision(decision.approved, decision.reason))
    }

    fn trace_entry(&self, state: &WorkflowState) -> String {
        format!(
            "Approval decision: approved={}, reason={}",
            or_dash(state.approved()),
            or_dash(state.reason())
        )
    }
}
