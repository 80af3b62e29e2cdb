//! Supplier: picks a preferred supplier for the requested item.

use pipeline::{
    Stage, StageContract, StageError, StateField, SupplierDirectory, WorkflowState,
};

use tracing::debug;

use crate::or_dash;

const CONTRACT: StageContract = StageContract::new(&[StateField::Item], &[StateField::Supplier]);

/// Looks the item up in an injected [`SupplierDirectory`].
///
/// An item with no matching keyword gets the `"Unknown Supplier"` sentinel;
/// that is a valid outcome, not a failure.
#[derive(Debug, Clone)]
pub struct SupplierStage {
    directory: SupplierDirectory,
}

impl SupplierStage {
    pub const ID: &'static str = "supplier";

    pub fn new(directory: SupplierDirectory) -> Self {
        Self { directory }
    }
}

impl Stage for SupplierStage {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn label(&self) -> &'static str {
        "Supplier"
    }

    fn contract(&self) -> StageContract {
        CONTRACT
    }

    fn run(&self, state: WorkflowState) -> Result<WorkflowState, StageError> {
        let item = state
            .item()
            .ok_or_else(|| StageError::new(Self::ID, "item is not populated"))?;
        let found = self.directory.lookup(item);
        debug!(item = %item, match_kind = found.kind(), "supplier lookup");
        let supplier = found.supplier();
        Ok(state.with_supplier(supplier))
    }

    fn trace_entry(&self, state: &WorkflowState) -> String {
        format!(
            "Supplier selected: item={}, supplier={}",
            or_dash(state.item()),
            or_dash(state.supplier())
        )
    }
}
