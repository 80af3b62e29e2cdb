//! Intake: extracts the item and quantity from the raw request.

use pipeline::{parse_request, Stage, StageContract, StageError, StateField, WorkflowState};

use crate::or_dash;

const CONTRACT: StageContract = StageContract::new(
    &[StateField::RawRequest],
    &[StateField::Item, StateField::Quantity],
);

/// Parses the request text with [`pipeline::parse_request`].
///
/// Fails with `"no item recognized"` when the text does not follow the
/// request template, and with a quantity error for zero, negative, or
/// malformed quantities.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeStage;

impl IntakeStage {
    pub const ID: &'static str = "intake";

    pub fn new() -> Self {
        Self
    }
}

impl Stage for IntakeStage {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn label(&self) -> &'static str {
        "Intake"
    }

    fn contract(&self) -> StageContract {
        CONTRACT
    }

    fn run(&self, state: WorkflowState) -> Result<WorkflowState, StageError> {
        let parsed = parse_request(state.raw_request())
            .map_err(|e| StageError::new(Self::ID, e.to_string()))?;
        Ok(state.with_intake(parsed.item, parsed.quantity))
    }

    fn trace_entry(&self, state: &WorkflowState) -> String {
        format!(
            "Intake parsed: item={}, quantity={}",
            or_dash(state.item()),
            or_dash(state.quantity())
        )
    }
}
